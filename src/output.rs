//! JSON output of the release line summary

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::version::error::WriteError;

/// Where the summary is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Compact single-line JSON on standard output
    Stdout,
    /// Indented JSON in a created (or truncated) file
    File(PathBuf),
}

impl OutputTarget {
    /// An absent or empty path selects standard output
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) if !path.as_os_str().is_empty() => Self::File(path.to_path_buf()),
            _ => Self::Stdout,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    Compact,
    Pretty,
}

/// Serialize `value` to `writer` followed by a newline
pub fn write_to<T, W>(value: &T, mut writer: W, style: JsonStyle) -> Result<(), WriteError>
where
    T: Serialize + ?Sized,
    W: Write,
{
    match style {
        JsonStyle::Compact => serde_json::to_writer(&mut writer, value)?,
        // serde_json's pretty printer indents with two spaces
        JsonStyle::Pretty => serde_json::to_writer_pretty(&mut writer, value)?,
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write `value` as JSON to the selected target
pub fn write_json<T>(value: &T, target: &OutputTarget) -> Result<(), WriteError>
where
    T: Serialize + ?Sized,
{
    match target {
        OutputTarget::Stdout => {
            debug!("Writing JSON to stdout");
            let stdout = io::stdout();
            write_to(value, stdout.lock(), JsonStyle::Compact)
        }
        OutputTarget::File(path) => {
            let file = File::create(path).map_err(|source| WriteError::Create {
                path: path.clone(),
                source,
            })?;
            write_to(value, BufWriter::new(file), JsonStyle::Pretty)?;
            info!("Wrote JSON to {:?}", path);
            Ok(())
        }
    }
}
