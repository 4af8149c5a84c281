//! Aggregate types produced from a directory index

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::version::semver::parse_version;

/// Latest patch and every patch seen for one `major.minor` release line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseLine {
    /// Version string with the greatest version seen so far (empty until the first record)
    pub latest: String,
    /// Raw version strings in encounter order, duplicates included
    pub versions: Vec<String>,
}

impl ReleaseLine {
    /// Record one raw version string.
    ///
    /// `latest` only moves on a strictly greater version, so the first of
    /// two equal versions wins.
    pub fn record(&mut self, version: &str) {
        self.versions.push(version.to_string());

        if self.latest.is_empty() || parse_version(version) > parse_version(&self.latest) {
            self.latest = version.to_string();
        }
    }
}

/// Release lines keyed by `"major.minor"`, in first-encounter order
pub type ReleaseLines = IndexMap<String, ReleaseLine>;
