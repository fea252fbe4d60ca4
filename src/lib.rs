// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entity model and permission resolution for the OMERO JSON API.
//!
//! Raw entities deserialize OMERO JSON fragments with the exact field names
//! the server emits and defer required-field enforcement to validating
//! constructors, so malformed payloads are rejected at the parse boundary.
//! Resolved domain objects combine raw entities with follow-up data (such as
//! a group's member list) fetched by an injected collaborator.

mod group;
mod owner;
mod permission;
pub mod raw;
pub mod shapes;
pub mod traits;

pub use group::{Experimenter, ExperimenterGroup, ResolveError};
pub use owner::Owner;
pub use permission::PermissionLevel;
pub use raw::{EntityError, SchemaMismatch, Strictness, Validate};
