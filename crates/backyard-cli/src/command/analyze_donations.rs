use std::path::PathBuf;

use backyard_analysis::donations::{DonationAnalysis, DonationRecord, example_records};

use crate::util::{self, Output, OutputFormat};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AnalyzeDonationsArg {
    /// Dataset CSV with `Year,Sport,HeadCoach,DonorContributions,...` columns; built-in example rows if omitted
    #[arg(long)]
    data: Option<PathBuf>,
    /// Sport to analyze
    #[arg(long, default_value = "football")]
    sport: String,
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AnalyzeDonationsArg) -> anyhow::Result<()> {
    let AnalyzeDonationsArg {
        data,
        sport,
        format,
        output,
    } = arg;

    let records: Vec<DonationRecord> = match data {
        Some(path) => util::read_csv_file("donation dataset", path)?,
        None => example_records(),
    };
    tracing::info!(rows = records.len(), %sport, "analyzing donations");

    let analysis = DonationAnalysis::new(&records, sport);
    if analysis.sample_size == 0 {
        tracing::warn!(%sport, "no seasons match the requested sport");
    }

    let mut output = Output::from_output_path(output.clone())?;
    output.write_report(*format, &analysis)?;
    if let Output::File { path, .. } = &output {
        tracing::info!(path = %path.display(), "wrote analysis");
    }
    Ok(())
}
