// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw entities mirroring the OMERO JSON API.
//!
//! Field names follow the wire format exactly, including the `@`-prefixed and
//! colon-suffixed keys (`@id`, `@type`, `omero:details:`, `url:experimenters`).
//! Every field is optional at the deserialization layer; required-field
//! enforcement happens through [`Validate`] and the domain constructors, with
//! [`Strictness`] deciding whether an absence fails fast or degrades to an
//! unknown/empty result. Listing endpoints routinely return partially
//! populated records, which is what the lenient mode exists for.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

mod details;
mod experimenter;
mod group;
mod permissions;

pub use details::RawGroupDetails;
pub use experimenter::RawExperimenter;
pub use group::RawExperimenterGroup;
pub use permissions::RawPermissions;

/// How required-field absences in raw entities are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Fail fast with [`EntityError::MissingField`].
    #[default]
    Strict,

    /// Tolerate absences; derived results degrade to
    /// [`PermissionLevel::Unknown`](crate::PermissionLevel::Unknown) or an
    /// empty display value.
    Lenient,
}

#[derive(Debug, Error)]
pub enum EntityError {
    #[error("required field \"{field}\" missing on {entity}")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Required-field checks for a raw entity.
pub trait Validate {
    /// Check this entity's required fields, reporting the first missing one.
    ///
    /// Checks cascade into nested entities which are present.
    fn validate(&self, strictness: Strictness) -> Result<(), EntityError>;
}

/// Deserialize a raw entity from an OMERO JSON fragment and apply its
/// required-field checks.
///
/// Validation happens eagerly here so that malformed server payloads are
/// rejected close to the parse boundary instead of at first use.
pub fn parse<T>(json: &str, strictness: Strictness) -> Result<T, EntityError>
where
    T: DeserializeOwned + Validate,
{
    let entity: T = serde_json::from_str(json)?;
    entity.validate(strictness)?;
    Ok(entity)
}

/// Non-fatal diagnostic raised when an entity carries a `@type` tag which
/// differs from the expected OME schema URI.
///
/// Servers are known to vary their type-tag strings across versions, so a
/// mismatch never fails construction. It is surfaced as a value (so tests can
/// assert on it) and logged as a warning. An absent tag is not a mismatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaMismatch {
    pub entity: &'static str,
    pub expected: &'static str,
    pub found: String,
}

impl SchemaMismatch {
    pub(crate) fn check(
        entity: &'static str,
        expected: &'static str,
        found: Option<&str>,
    ) -> Option<Self> {
        match found {
            Some(found) if found != expected => Some(Self {
                entity,
                expected,
                found: found.to_owned(),
            }),
            _ => None,
        }
    }

    pub(crate) fn warn(&self) {
        warn!(
            entity = self.entity,
            expected = self.expected,
            found = self.found,
            "type tag does not match the expected schema, the record might not represent a {}",
            self.entity,
        );
    }
}

pub(crate) fn require<'a, T>(
    field: &'a Option<T>,
    entity: &'static str,
    name: &'static str,
) -> Result<&'a T, EntityError> {
    field.as_ref().ok_or(EntityError::MissingField {
        entity,
        field: name,
    })
}

#[cfg(test)]
mod tests {
    use super::{EntityError, RawExperimenterGroup, RawPermissions, SchemaMismatch, Strictness};

    #[test]
    fn parse_rejects_missing_required_field() {
        let result: Result<RawPermissions, EntityError> =
            super::parse(r#"{"isGroupRead": true}"#, Strictness::Strict);

        assert!(matches!(
            result,
            Err(EntityError::MissingField {
                entity: "permissions",
                field: "isGroupWrite",
            })
        ));
    }

    #[test]
    fn parse_accepts_partial_record_leniently() {
        let group: RawExperimenterGroup = super::parse(r#"{"@id": 3}"#, Strictness::Lenient)
            .expect("partial group should parse in lenient mode");

        assert_eq!(group.id, Some(3));
        assert!(!group.id_name_and_url_defined());
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let result: Result<RawPermissions, EntityError> =
            super::parse("not json", Strictness::Lenient);

        assert!(matches!(result, Err(EntityError::Json(_))));
    }

    #[test]
    fn schema_mismatch_requires_a_present_tag() {
        assert_eq!(SchemaMismatch::check("experimenter", "Expected", None), None);
        assert_eq!(
            SchemaMismatch::check("experimenter", "Expected", Some("Expected")),
            None
        );

        let mismatch = SchemaMismatch::check("experimenter", "Expected", Some("Other"))
            .expect("differing tag should be reported");
        assert_eq!(mismatch.found, "Other");
    }

    #[test]
    fn missing_field_error_names_entity_and_field() {
        let error = EntityError::MissingField {
            entity: "experimenter group",
            field: "Name",
        };

        assert_eq!(
            error.to_string(),
            "required field \"Name\" missing on experimenter group"
        );
    }
}
