// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;

use crate::PermissionLevel;
use crate::raw::{
    EntityError, RawExperimenter, RawExperimenterGroup, RawPermissions, Strictness, Validate,
    require,
};

/// The `omero:details:` sub-object attached to OMERO entities, bundling an
/// optional owner reference, an optional group reference and the entity's
/// permission flags.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawGroupDetails {
    /// The experimenter owning the entity.
    #[serde(rename = "owner")]
    pub experimenter: Option<RawExperimenter>,

    /// The group the entity belongs to. Boxed because group records embed
    /// details themselves.
    #[serde(rename = "group")]
    pub group: Option<Box<RawExperimenterGroup>>,

    /// The group permission flags of the entity. Required on complete records.
    #[serde(rename = "permissions")]
    pub permissions: Option<RawPermissions>,
}

impl RawGroupDetails {
    const ENTITY: &'static str = "details";

    /// Derive the permission level of the embedded flags,
    /// [`PermissionLevel::Unknown`] when they are absent.
    pub fn level(&self) -> PermissionLevel {
        self.permissions
            .as_ref()
            .map(RawPermissions::level)
            .unwrap_or(PermissionLevel::Unknown)
    }
}

impl Validate for RawGroupDetails {
    fn validate(&self, strictness: Strictness) -> Result<(), EntityError> {
        if strictness == Strictness::Strict {
            require(&self.permissions, Self::ENTITY, "permissions")?;
        }

        if let Some(permissions) = &self.permissions {
            permissions.validate(strictness)?;
        }
        if let Some(experimenter) = &self.experimenter {
            experimenter.validate(strictness)?;
        }
        if let Some(group) = &self.group {
            group.validate(strictness)?;
        }

        Ok(())
    }
}
