mod refine_command;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{DesiredLength, ExportFormat, Language, Purpose, Tone};

pub use refine_command::{RefineOutcome, render_diff, run_refine};

/// Rewrites text with a generative model for a chosen purpose, tone and length.
#[derive(Parser, Debug)]
#[command(name = "text-refiner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API (default)
    Serve {
        /// Port to listen on, overrides configuration
        #[arg(long, short)]
        port: Option<u16>,
    },
    /// Refine a single text and print the result
    Refine(RefineArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RefineArgs {
    /// File to read the text from (.txt, .md, .pdf, .docx)
    #[arg(long, short, conflicts_with = "text", required_unless_present = "text")]
    pub input: Option<PathBuf>,

    /// Text to refine
    #[arg(long, short)]
    pub text: Option<String>,

    #[arg(long, default_value = "polish")]
    pub language: Language,

    #[arg(long, default_value = "email_to_client")]
    pub purpose: Purpose,

    #[arg(long, default_value = "formal")]
    pub tone: Tone,

    #[arg(long, default_value = "original_length")]
    pub length: DesiredLength,

    /// Extra instructions the rewrite must honor
    #[arg(long, short)]
    pub suggestions: Option<String>,

    /// Print a word diff against the original after the result
    #[arg(long)]
    pub diff: bool,

    /// Also write the result to a file: txt, pdf or docx
    #[arg(long)]
    pub export: Option<ExportFormat>,

    /// File name stem for --export
    #[arg(long, short)]
    pub output: Option<String>,

    /// Directory the exported file is written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Copy the result to the system clipboard
    #[arg(long)]
    pub copy: bool,
}
