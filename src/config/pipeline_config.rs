use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::ModalityBarcodes;

/// Config document read by the snakemake workflow.
///
/// Fields are declared in alphabetical order, which is the key order of the
/// written YAML. `sample` is a one-element list, as the workflow expands over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub cellranger_ref: PathBuf,
    pub fastq: Vec<PathBuf>,
    pub genome: String,
    pub input_folder: PathBuf,
    pub modalities: ModalityBarcodes,
    pub sample: Vec<String>,
    pub tempdir: PathBuf,
}

impl PipelineConfig {
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize pipeline config")
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let yaml = self.to_yaml()?;

        let file = File::create(path)
            .with_context(|| format!("Failed to create config file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(yaml.as_bytes())?;
        writer.flush()?;

        log::info!("Wrote pipeline config to {}", path.display());
        Ok(())
    }
}
