use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::outputs::demultiplexed_fastq_paths;

#[derive(Args)]
pub struct ExpectedOutputsCMD {
    /// Path to folder with the gzipped fastq files of the run
    #[arg(long = "fastq", value_parser = clap::value_parser!(PathBuf))]
    pub path_fastq: PathBuf,

    /// Sample (sequencing run) name
    #[arg(long)]
    pub sample: String,

    /// Modality to predict the demultiplexed files for
    #[arg(long)]
    pub modality: String,
}

impl ExpectedOutputsCMD {
    /// Run the commandline option.
    /// This one prints the demultiplexed fastq files the workflow will produce, one per line
    pub fn try_execute(&mut self) -> Result<()> {
        let paths = demultiplexed_fastq_paths(&self.path_fastq, &self.sample, &self.modality)?;
        log::debug!("Predicted {} demultiplexed files", paths.len());
        for p in paths {
            println!("{}", p);
        }
        Ok(())
    }
}
