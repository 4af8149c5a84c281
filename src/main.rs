use std::path::Path;

use clap::Parser;
use tracing::error;

use py_versions::config::{Config, DEFAULT_INDEX_URL, LogFormat};
use py_versions::{logging, runner};

#[derive(Parser)]
#[command(name = "py-versions")]
#[command(
    version,
    about = "Summarize the latest patch of every Python release line"
)]
struct Cli {
    /// Python FTP mirror URL
    #[arg(long, default_value = DEFAULT_INDEX_URL)]
    url: String,

    /// File to save JSON output to (stdout when omitted or empty)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<String>,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::new(cli.url, cli.output.as_deref().map(Path::new), cli.log_format);

    let _guard = logging::init_logging(config.log_format)?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(runner::run_with_config(&config))
        .map_err(anyhow::Error::from)
        .inspect_err(|e| error!("{e:#}"))?;

    Ok(())
}
