use std::path::Path;

use clap::ValueEnum;

use crate::output::OutputTarget;

/// Default python.org FTP-style mirror index
pub const DEFAULT_INDEX_URL: &str = "https://www.python.org/ftp/python/";

/// User-Agent sent with the index request
pub const USER_AGENT: &str = concat!("py-versions/", env!("CARGO_PKG_VERSION"));

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log line format on stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Resolved configuration for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub url: String,
    pub output: OutputTarget,
    pub log_format: LogFormat,
}

impl Config {
    pub fn new(url: impl Into<String>, output: Option<&Path>, log_format: LogFormat) -> Self {
        Self {
            url: url.into(),
            output: OutputTarget::from_path(output),
            log_format,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_URL, None, LogFormat::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_config_writes_to_stdout_from_python_org() {
        let config = Config::default();

        assert_eq!(config.url, "https://www.python.org/ftp/python/");
        assert_eq!(config.output, OutputTarget::Stdout);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn config_with_output_path_writes_to_file() {
        let config = Config::new(
            "http://localhost/ftp/",
            Some(Path::new("versions.json")),
            LogFormat::Json,
        );

        assert_eq!(
            config.output,
            OutputTarget::File(PathBuf::from("versions.json"))
        );
    }

    #[test]
    fn user_agent_carries_crate_version() {
        assert!(USER_AGENT.starts_with("py-versions/"));
        assert!(USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
