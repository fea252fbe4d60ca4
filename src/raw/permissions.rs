// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;

use crate::PermissionLevel;
use crate::raw::{EntityError, Strictness, Validate, require};

/// Group permission flags as sent by the OMERO server.
///
/// The server always populates all three flags on complete records, but
/// listing endpoints may omit the whole fragment or parts of it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RawPermissions {
    /// Whether all members can view, annotate, edit and delete member data.
    #[serde(rename = "isGroupWrite")]
    pub is_group_write: Option<bool>,

    /// Whether all members can view member data.
    #[serde(rename = "isGroupRead")]
    pub is_group_read: Option<bool>,

    /// Whether all members can view and annotate member data.
    #[serde(rename = "isGroupAnnotate")]
    pub is_group_annotate: Option<bool>,
}

impl RawPermissions {
    const ENTITY: &'static str = "permissions";

    /// Derive the permission level of these flags.
    ///
    /// Total over present and absent flags; absences yield
    /// [`PermissionLevel::Unknown`].
    pub fn level(&self) -> PermissionLevel {
        PermissionLevel::from_flags(
            self.is_group_write,
            self.is_group_read,
            self.is_group_annotate,
        )
    }
}

impl Validate for RawPermissions {
    fn validate(&self, strictness: Strictness) -> Result<(), EntityError> {
        if strictness == Strictness::Strict {
            require(&self.is_group_write, Self::ENTITY, "isGroupWrite")?;
            require(&self.is_group_read, Self::ENTITY, "isGroupRead")?;
            require(&self.is_group_annotate, Self::ENTITY, "isGroupAnnotate")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::RawPermissions;
    use crate::raw::{EntityError, Strictness, Validate};
    use crate::PermissionLevel;

    #[test]
    fn level_from_json() {
        let permissions: RawPermissions = serde_json::from_str(
            r#"{"isGroupWrite": false, "isGroupRead": true, "isGroupAnnotate": true}"#,
        )
        .unwrap();

        assert_eq!(permissions.level(), PermissionLevel::ReadAnnotate);
    }

    #[test]
    fn empty_fragment_is_unknown() {
        let permissions: RawPermissions = serde_json::from_str("{}").unwrap();

        assert_eq!(permissions.level(), PermissionLevel::Unknown);
    }

    #[test]
    fn strict_requires_every_flag() {
        let permissions: RawPermissions =
            serde_json::from_str(r#"{"isGroupWrite": true, "isGroupRead": true}"#).unwrap();

        assert!(matches!(
            permissions.validate(Strictness::Strict),
            Err(EntityError::MissingField {
                entity: "permissions",
                field: "isGroupAnnotate",
            })
        ));
        assert!(permissions.validate(Strictness::Lenient).is_ok());
    }

    #[test]
    fn unrelated_fields_are_ignored() {
        let permissions: RawPermissions = serde_json::from_str(
            r#"{"isGroupWrite": true, "isGroupRead": false, "isGroupAnnotate": true, "perm": "rw----"}"#,
        )
        .unwrap();

        assert_eq!(permissions.level(), PermissionLevel::Private);
    }
}
