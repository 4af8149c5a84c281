//! Version link extraction from directory index pages
//!
//! The python.org FTP mirror lists every release as a directory link:
//!
//! ```text
//! <a href="3.9.0/">3.9.0/</a>
//! <a href="3.9.1/">3.9.1/</a>
//! ```
//!
//! Only hrefs of exactly three dot-separated integer groups followed by a
//! slash are considered; everything else on the page is ignored.

use regex::Regex;
use tracing::{debug, info};

use crate::version::semver::parse_version;
use crate::version::types::ReleaseLines;

/// Extractor for `href="M.N.P/"` links
pub struct LinkExtractor {
    /// Regex for a release directory link, capturing the version
    link_re: Regex,
}

impl LinkExtractor {
    pub fn new() -> Self {
        Self {
            // Match: href="3.9.0/"
            link_re: Regex::new(r#"href="(\d+\.\d+\.\d+)/""#).unwrap(),
        }
    }

    /// Group every matched version by release line, in page order
    pub fn extract(&self, html: &str) -> ReleaseLines {
        let mut lines = ReleaseLines::new();
        let mut matches = 0usize;

        for caps in self.link_re.captures_iter(html) {
            let raw = caps.get(1).map_or("", |m| m.as_str());
            let key = parse_version(raw).release_line();
            debug!("Found version link {} (release line {})", raw, key);

            lines.entry(key).or_default().record(raw);
            matches += 1;
        }

        info!(
            "Extracted {} version links across {} release lines",
            matches,
            lines.len()
        );

        lines
    }
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract release lines using a freshly built [`LinkExtractor`]
pub fn extract_versions(html: &str) -> ReleaseLines {
    LinkExtractor::new().extract(html)
}
