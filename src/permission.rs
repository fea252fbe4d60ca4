// SPDX-License-Identifier: MIT OR Apache-2.0

use std::cmp::Ordering;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Group-wide permission levels as defined by the OMERO server.
///
/// The four defined levels are ordered such that "higher" levels include all
/// capabilities of lower ones.
///
/// Private < ReadOnly < ReadAnnotate < ReadWrite
///
/// [`PermissionLevel::Unknown`] sits outside this ordering: it signals that
/// the source flags were missing or malformed and must never be collapsed to
/// `Private` (which would falsely imply restricted access).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionLevel {
    /// The group owner can view member data while regular members can only
    /// view their own data.
    Private,

    /// All members can view member data; only the group owner can annotate.
    ReadOnly,

    /// All members can view and annotate member data; only the group owner
    /// can edit and delete.
    ReadAnnotate,

    /// All members can view, annotate, edit and delete member data.
    ReadWrite,

    /// The permission flags were absent or incomplete.
    Unknown,
}

impl PermissionLevel {
    /// Derive a permission level from the three group flags of an OMERO
    /// permissions fragment.
    ///
    /// The flags are not independent, so the checks are evaluated in a fixed
    /// order where each assumes the earlier ones were false. Any absent flag
    /// yields [`PermissionLevel::Unknown`].
    pub fn from_flags(write: Option<bool>, read: Option<bool>, annotate: Option<bool>) -> Self {
        let (Some(write), Some(read), Some(annotate)) = (write, read, annotate) else {
            return Self::Unknown;
        };

        if !read {
            Self::Private
        } else if !annotate {
            Self::ReadOnly
        } else if !write {
            Self::ReadAnnotate
        } else {
            Self::ReadWrite
        }
    }

    /// Return true if this is one of the four defined levels, false for
    /// [`PermissionLevel::Unknown`].
    pub fn is_defined(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    fn rank(&self) -> Option<u8> {
        match self {
            Self::Private => Some(0),
            Self::ReadOnly => Some(1),
            Self::ReadAnnotate => Some(2),
            Self::ReadWrite => Some(3),
            Self::Unknown => None,
        }
    }
}

impl PartialOrd for PermissionLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }

        match (self.rank(), other.rank()) {
            (Some(left), Some(right)) => left.partial_cmp(&right),
            _ => None,
        }
    }
}

impl Display for PermissionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Private => "private",
            Self::ReadOnly => "read-only",
            Self::ReadAnnotate => "read-annotate",
            Self::ReadWrite => "read-write",
            Self::Unknown => "unknown",
        };

        write!(f, "{}", s)
    }
}
