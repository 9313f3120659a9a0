use clap::Parser;
use spa_parser::ParseError;
use spa_solver::SecondPriceResolver;
use std::path::PathBuf;

mod config;
pub use config::AppConfig;

mod io;
pub use io::*;

mod report;
pub use report::{OutputFormat, render};

/// Resolve every auction in a file and report the winners
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub io: IOArgs,

    /// The output format (overrides the configuration)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long, env = "SPA_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn evaluate(self) -> anyhow::Result<()> {
        let config = AppConfig::load(self.config.as_deref())?;

        let input = self.io.input(&config);
        let format = self.format.unwrap_or(config.format);
        tracing::info!(%input, ?format, "reading auctions");

        let raw = input.read()?;
        let records = match spa_parser::parse(&raw) {
            Ok(records) => records,
            Err(ParseError::Empty) => return Err(CliError::EmptyInput(input).into()),
            Err(error) => return Err(error.into()),
        };

        let mut output = self.io.write()?;
        render(&records, &SecondPriceResolver, format, &mut output)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("File '{0}' does not exist")]
    MissingInput(PathBuf),
    #[error("File '{0}' is empty")]
    EmptyInput(PathOrStd),
}
