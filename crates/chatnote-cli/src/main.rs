mod commands;
mod configuration;
mod error;
mod inputs;

use anyhow::Result;
use chatnote::annotations::SourceFilter;
use chatnote::models::annotation::AnnotationType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::commands::select::render_selection;
use crate::commands::sources::render_sources;
use crate::configuration::{parse_threshold, Settings};
use crate::inputs::load_annotations;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Treat the input as a recorded data stream body instead of a JSON array
    #[arg(long, global = true)]
    stream: bool,

    /// Print JSON instead of a styled listing
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the ranked sources of the first sources annotation
    Sources {
        /// Annotations file, or - for stdin
        file: PathBuf,

        /// Minimum score a source must exceed (overrides CHATNOTE_SOURCES__SCORE_THRESHOLD)
        #[arg(short, long, value_parser = parse_threshold)]
        threshold: Option<f64>,
    },
    /// Print the payload of every annotation of a type
    Select {
        /// Annotation type, e.g. sources, events, agent
        annotation_type: AnnotationType,

        /// Annotations file, or - for stdin
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::new()?;
    if !settings.output.color {
        console::set_colors_enabled(false);
    }

    let lines = match cli.command {
        Command::Sources { file, threshold } => {
            let filter = threshold
                .map(SourceFilter::new)
                .unwrap_or_else(|| settings.sources.filter());
            let annotations = load_annotations(&file, cli.stream)?;
            render_sources(&annotations, &filter, cli.json)?
        }
        Command::Select {
            annotation_type,
            file,
        } => {
            let annotations = load_annotations(&file, cli.stream)?;
            render_selection(&annotations, annotation_type)?
        }
    };

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
