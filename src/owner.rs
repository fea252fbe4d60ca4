// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::raw::{EntityError, RawExperimenter, require};

/// The experimenter attributed as creator of an annotation or shape.
///
/// A denormalized record used by the attribution layer: all optional strings
/// default to empty on deserialization, so display and comparison logic never
/// has to deal with absent values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Owner {
    pub id: i64,

    #[serde(default, rename = "firstName")]
    pub first_name: String,

    #[serde(default, rename = "lastName")]
    pub last_name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub institution: String,

    #[serde(default)]
    pub username: String,
}

impl Owner {
    /// Build an owner from a raw experimenter record, defaulting absent
    /// fields to empty strings. Fails when the record carries no ID.
    pub fn from_raw(raw: &RawExperimenter) -> Result<Self, EntityError> {
        let id = *require(&raw.id, "owner", "@id")?;

        Ok(Self {
            id,
            first_name: raw.first_name.clone().unwrap_or_default(),
            last_name: raw.last_name.clone().unwrap_or_default(),
            email: raw.email.clone().unwrap_or_default(),
            institution: raw.institution.clone().unwrap_or_default(),
            username: raw.username.clone().unwrap_or_default(),
        })
    }

    /// First and last name joined by a space, skipping empty parts.
    pub fn full_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::Owner;
    use crate::raw::{EntityError, RawExperimenter};

    #[test]
    fn sparse_record_defaults_to_empty_strings() {
        let owner: Owner = serde_json::from_str(r#"{"id": 64}"#).unwrap();

        assert_eq!(owner.id, 64);
        assert_eq!(owner.first_name, "");
        assert_eq!(owner.institution, "");
        assert_eq!(owner.full_name(), "");
    }

    #[test]
    fn full_name_skips_empty_parts() {
        let owner: Owner =
            serde_json::from_str(r#"{"id": 64, "firstName": "John", "lastName": "Doe"}"#).unwrap();
        assert_eq!(owner.full_name(), "John Doe");

        let owner: Owner = serde_json::from_str(r#"{"id": 64, "lastName": "Doe"}"#).unwrap();
        assert_eq!(owner.full_name(), "Doe");
    }

    #[test]
    fn missing_id_fails_deserialization() {
        let result: Result<Owner, _> = serde_json::from_str(r#"{"firstName": "John"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn from_raw_requires_id() {
        assert!(matches!(
            Owner::from_raw(&RawExperimenter::default()),
            Err(EntityError::MissingField {
                entity: "owner",
                field: "@id",
            })
        ));
    }

    #[test]
    fn from_raw_normalizes_absent_fields() {
        let owner = Owner::from_raw(&RawExperimenter {
            id: Some(64),
            first_name: Some("John".to_owned()),
            username: Some("jdoe".to_owned()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(owner.full_name(), "John");
        assert_eq!(owner.username, "jdoe");
        assert_eq!(owner.email, "");
    }
}
