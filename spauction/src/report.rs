use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use spa_core::{
    models::{AuctionName, AuctionOutcome, AuctionRecord},
    ports::Resolver,
};
use std::io::Write;

/// How resolved auctions are written out
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable sentence per auction
    #[default]
    Text,
    /// A JSON array with one report per auction
    Json,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Report<'a> {
    Resolved {
        outcome: &'a AuctionOutcome,
        message: String,
    },
    Failed {
        auction: &'a AuctionName,
        message: String,
    },
}

/// Resolve every record and write one entry per record, in input order.
///
/// A record the resolver fails on is reported with the error's message and
/// does not stop the remaining records from being written.
pub fn render<R: Resolver, W: Write + ?Sized>(
    records: &[AuctionRecord],
    resolver: &R,
    format: OutputFormat,
    writer: &mut W,
) -> anyhow::Result<()> {
    let outcomes = resolver.resolve_all(records);

    match format {
        OutputFormat::Text => {
            for outcome in &outcomes {
                match outcome {
                    Ok(outcome) => writeln!(writer, "{outcome}")?,
                    Err(error) => writeln!(writer, "{error}")?,
                }
            }
        }
        OutputFormat::Json => {
            let reports = records
                .iter()
                .zip(&outcomes)
                .map(|(record, outcome)| match outcome {
                    Ok(outcome) => Report::Resolved {
                        outcome,
                        message: outcome.to_string(),
                    },
                    Err(error) => Report::Failed {
                        auction: record.name(),
                        message: error.to_string(),
                    },
                })
                .collect::<Vec<_>>();
            serde_json::to_writer_pretty(&mut *writer, &reports)?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}
