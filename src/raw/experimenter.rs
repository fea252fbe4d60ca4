// SPDX-License-Identifier: MIT OR Apache-2.0

use std::hash::{Hash, Hasher};

use serde::Deserialize;

use crate::raw::{EntityError, SchemaMismatch, Strictness, Validate, require};

/// An OMERO experimenter (a user account on the server) as described by the
/// OME specifications.
///
/// Equality and hashing are keyed on `@id` alone: two fetches of the same
/// user may carry different optional fields (listing endpoints strip most of
/// them) and must still deduplicate to a single entity.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawExperimenter {
    /// Link to the schema of this record, [`RawExperimenter::TYPE`] expected.
    #[serde(rename = "@type")]
    pub type_tag: Option<String>,

    /// Unique ID of the experimenter. Required.
    #[serde(rename = "@id")]
    pub id: Option<i64>,

    #[serde(rename = "FirstName")]
    pub first_name: Option<String>,

    #[serde(rename = "MiddleName")]
    pub middle_name: Option<String>,

    #[serde(rename = "LastName")]
    pub last_name: Option<String>,

    #[serde(rename = "Email")]
    pub email: Option<String>,

    #[serde(rename = "Institution")]
    pub institution: Option<String>,

    #[serde(rename = "UserName")]
    pub username: Option<String>,
}

impl RawExperimenter {
    /// Schema URI of an experimenter record.
    pub const TYPE: &'static str =
        "http://www.openmicroscopy.org/Schemas/OME/2016-06#Experimenter";

    const ENTITY: &'static str = "experimenter";

    /// The full name of the experimenter: whichever of first, middle and last
    /// name are present, joined by single spaces. Empty when all are absent.
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Report a type tag which is present but not the experimenter schema.
    pub fn schema_mismatch(&self) -> Option<SchemaMismatch> {
        SchemaMismatch::check(Self::ENTITY, Self::TYPE, self.type_tag.as_deref())
    }
}

impl Validate for RawExperimenter {
    fn validate(&self, strictness: Strictness) -> Result<(), EntityError> {
        if strictness == Strictness::Strict {
            require(&self.id, Self::ENTITY, "@id")?;
        }

        Ok(())
    }
}

impl PartialEq for RawExperimenter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RawExperimenter {}

impl Hash for RawExperimenter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
