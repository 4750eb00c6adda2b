use std::fmt;

use clap::Subcommand;

pub mod constants;
pub mod expected_outputs;
pub mod preprocess;

pub use expected_outputs::ExpectedOutputsCMD;
pub use preprocess::{Preprocess, PreprocessCMD};

///////////////////////////////
/// Possible subcommands to parse
#[derive(Subcommand)]
pub enum Commands {
    /// Check a run folder, write the pipeline config and start snakemake
    Preprocess(PreprocessCMD),
    /// Print the demultiplexed fastq files expected for one modality
    ExpectedOutputs(ExpectedOutputsCMD),
}

impl fmt::Debug for Commands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cmd = match self {
            Commands::Preprocess(_) => "Preprocess",
            Commands::ExpectedOutputs(_) => "ExpectedOutputs",
        };
        write!(f, "{}", cmd)
    }
}
