// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seams towards the transport layer.

use std::error::Error;
use std::future::Future;

use crate::group::Experimenter;

/// Collaborator which fetches the experimenters listed at a group's
/// member URL.
///
/// Implemented by the HTTP layer. The entity core never performs this fetch
/// itself: group membership needs a second round trip which callers may want
/// to defer, cache or batch across many groups, and retries or cancellation
/// belong to the transport layer.
pub trait FetchExperimenters {
    type Error: Error;

    /// Fetch the ordered list of experimenters behind `url`.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<Experimenter>, Self::Error>>;
}
