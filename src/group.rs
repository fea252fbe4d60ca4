// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Display;
use std::hash::{Hash, Hasher};

use thiserror::Error;

use crate::PermissionLevel;
use crate::raw::{EntityError, RawExperimenter, RawExperimenterGroup, require};
use crate::traits::FetchExperimenters;

#[derive(Debug, Error)]
pub enum ResolveError<E> {
    #[error(transparent)]
    Entity(#[from] EntityError),

    #[error("fetching group members failed: {0}")]
    Fetch(E),
}

/// A resolved experimenter: the person owning OMERO entities, reduced to its
/// identity and display name.
///
/// Identity is keyed on the ID alone, so experimenter lists merged from
/// different endpoints deduplicate correctly.
#[derive(Clone, Debug)]
pub struct Experimenter {
    id: i64,
    full_name: String,
}

impl Experimenter {
    /// Build an experimenter from a raw record.
    ///
    /// Fails when the record carries no ID. A type tag which does not match
    /// the experimenter schema is logged and tolerated.
    pub fn new(raw: &RawExperimenter) -> Result<Self, EntityError> {
        let id = *require(&raw.id, "experimenter", "@id")?;

        if let Some(mismatch) = raw.schema_mismatch() {
            mismatch.warn();
        }

        Ok(Self {
            id,
            full_name: raw.full_name(),
        })
    }

    /// A sentinel experimenter representing all members, used by browser
    /// filters. Its ID is -1.
    pub fn all_members() -> Self {
        Self {
            id: -1,
            full_name: "All members".to_owned(),
        }
    }

    /// The unique ID of this experimenter.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The full name of the experimenter, empty when the source record had
    /// no name fields.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

impl Display for Experimenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "experimenter {} with ID {}", self.full_name, self.id)
    }
}

impl PartialEq for Experimenter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Experimenter {}

impl Hash for Experimenter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A resolved experimenter group: one raw group record joined with the
/// concrete list of members fetched from its member URL.
///
/// This is the object the browser tree and permission display consume.
/// Immutable once built; the group owns its member list, members are shared
/// read-only values.
#[derive(Clone, Debug)]
pub struct ExperimenterGroup {
    id: i64,
    name: String,
    level: PermissionLevel,
    experimenters: Vec<Experimenter>,
}

impl ExperimenterGroup {
    /// Assemble a group from a raw record and an already fetched, ordered
    /// member list. Performs no I/O.
    ///
    /// Fails when the record carries no ID or no name. A type tag which does
    /// not match the group schema is logged and tolerated. The permission
    /// level degrades to [`PermissionLevel::Unknown`] when the record's
    /// permission flags are unresolved.
    pub fn new(
        raw: &RawExperimenterGroup,
        experimenters: Vec<Experimenter>,
    ) -> Result<Self, EntityError> {
        let id = *require(&raw.id, "experimenter group", "@id")?;
        let name = require(&raw.name, "experimenter group", "Name")?.clone();

        if let Some(mismatch) = raw.schema_mismatch() {
            mismatch.warn();
        }

        Ok(Self {
            id,
            name,
            level: raw.permission_level(),
            experimenters,
        })
    }

    /// Resolve a raw group by fetching its member list through `fetcher` and
    /// assembling the result.
    ///
    /// Fails when the record carries no member URL, otherwise like
    /// [`ExperimenterGroup::new`].
    pub async fn resolve<F>(
        raw: &RawExperimenterGroup,
        fetcher: &F,
    ) -> Result<Self, ResolveError<F::Error>>
    where
        F: FetchExperimenters,
    {
        let url = require(&raw.experimenters_url, "experimenter group", "url:experimenters")
            .map_err(ResolveError::Entity)?;
        let experimenters = fetcher.fetch(url).await.map_err(ResolveError::Fetch)?;

        Ok(Self::new(raw, experimenters)?)
    }

    /// A sentinel group representing all groups, used by browser filters.
    /// Its ID is -1, it has no members and an unknown permission level.
    pub fn all_groups() -> Self {
        Self {
            id: -1,
            name: "All groups".to_owned(),
            level: PermissionLevel::Unknown,
            experimenters: Vec::new(),
        }
    }

    /// The unique ID of this group.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The name of the group.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The permission level derived from the group's flags.
    pub fn permission_level(&self) -> PermissionLevel {
        self.level
    }

    /// The experimenters belonging to this group, in the order the server
    /// listed them.
    pub fn experimenters(&self) -> &[Experimenter] {
        &self.experimenters
    }
}

impl Display for ExperimenterGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "group {} with ID {}", self.name, self.id)
    }
}

impl PartialEq for ExperimenterGroup {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ExperimenterGroup {}

impl Hash for ExperimenterGroup {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
