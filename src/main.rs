use clap::{Args, Parser, Subcommand};
use hit_insight_engine::{run, TransformKind};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "hit-insight-engine")]
#[command(version)]
#[command(about = "Prepare music hit datasets for visualization", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract raw audio features of every song for parallel coordinates
    Parallel(Paths),

    /// Min-max normalize features of songs that hit on 5+ platforms
    Normalize(Paths),

    /// Correlate MFCC features with each platform's hit flag
    Correlate(Paths),
}

#[derive(Args)]
struct Paths {
    /// Path to the song CSV file [default: final_df_cleaned.csv]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path of the file to write [default depends on the command]
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let (kind, paths) = match cli.command {
        Commands::Parallel(paths) => (TransformKind::Parallel, paths),
        Commands::Normalize(paths) => (TransformKind::Normalized, paths),
        Commands::Correlate(paths) => (TransformKind::Correlation, paths),
    };

    let config = kind
        .default_config()
        .with_input(paths.input)
        .with_output(paths.output);
    info!(?kind, input = %config.input.display(), "starting transform");

    let summary = run(kind, &config)?;

    println!(
        "Wrote {} records to {}",
        summary.records,
        summary.output.display()
    );
    if let Some(report) = summary.report {
        print!("{}", report);
    }

    Ok(())
}
