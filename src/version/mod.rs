//! Release version layer
//!
//! Fetches the mirror's directory index, pulls release links out of it and
//! groups them by `major.minor` release line.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│  Extractor  │────▶│ReleaseLines │
//! │  (fetch)    │     │  (regex)    │     │ (aggregate) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │   Semver    │
//!                     │(version cmp)│
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`source`]: Index source trait and the HTTP implementation
//! - [`extractor`]: Link extraction and release line aggregation
//! - [`semver`]: Lenient version parsing and ordering
//! - [`types`]: `ReleaseLine` and `ReleaseLines`
//! - [`error`]: Error types for fetching and writing

pub mod error;
pub mod extractor;
pub mod semver;
pub mod source;
pub mod types;
