// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;

use crate::PermissionLevel;
use crate::raw::{EntityError, RawGroupDetails, SchemaMismatch, Strictness, Validate, require};

/// An OMERO experimenter group (an access-control group with a permission
/// policy and a member list) as described by the OME specifications.
///
/// The member list itself is not part of the record; `url:experimenters`
/// points at a separate listing endpoint which the transport layer queries
/// when a group is resolved.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawExperimenterGroup {
    /// Link to the schema of this record, [`RawExperimenterGroup::TYPE`]
    /// expected.
    #[serde(rename = "@type")]
    pub type_tag: Option<String>,

    /// Unique ID of the group. Required.
    #[serde(rename = "@id")]
    pub id: Option<i64>,

    /// Details about this group, including its permission flags. Required on
    /// complete records.
    #[serde(rename = "omero:details:")]
    pub details: Option<RawGroupDetails>,

    #[serde(rename = "Name")]
    pub name: Option<String>,

    /// URL listing the experimenters belonging to this group. Required on
    /// complete records.
    #[serde(rename = "url:experimenters")]
    pub experimenters_url: Option<String>,
}

impl RawExperimenterGroup {
    /// Schema URI of an experimenter group record.
    pub const TYPE: &'static str =
        "http://www.openmicroscopy.org/Schemas/OME/2016-06#ExperimenterGroup";

    const ENTITY: &'static str = "experimenter group";

    /// Whether id, name and member-listing URL are all present.
    ///
    /// Pre-condition check used by lenient callers to decide if a listed
    /// group record is complete enough to resolve further.
    pub fn id_name_and_url_defined(&self) -> bool {
        self.id.is_some() && self.name.is_some() && self.experimenters_url.is_some()
    }

    /// Derive the group's permission level by delegating to the embedded
    /// details, [`PermissionLevel::Unknown`] when they are unresolved.
    pub fn permission_level(&self) -> PermissionLevel {
        self.details
            .as_ref()
            .map(RawGroupDetails::level)
            .unwrap_or(PermissionLevel::Unknown)
    }

    /// Report a type tag which is present but not the group schema.
    pub fn schema_mismatch(&self) -> Option<SchemaMismatch> {
        SchemaMismatch::check(Self::ENTITY, Self::TYPE, self.type_tag.as_deref())
    }
}

impl Validate for RawExperimenterGroup {
    fn validate(&self, strictness: Strictness) -> Result<(), EntityError> {
        if strictness == Strictness::Strict {
            require(&self.id, Self::ENTITY, "@id")?;
            require(&self.details, Self::ENTITY, "omero:details:")?;
            require(&self.experimenters_url, Self::ENTITY, "url:experimenters")?;
        }

        if let Some(details) = &self.details {
            details.validate(strictness)?;
        }

        Ok(())
    }
}
