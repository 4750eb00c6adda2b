use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use log::info;

use super::constants::{
    PREPROCESS_DEFAULT_CELLRANGER_REF, PREPROCESS_DEFAULT_CONFIGFILE, PREPROCESS_DEFAULT_GENOME,
    PREPROCESS_DEFAULT_TEMPDIR, PREPROCESS_DEFAULT_THREADS,
};
use crate::config::{ModalityBarcodes, PipelineConfig};
use crate::fileformat::FastqSet;
use crate::runner::{locate_snakefile, SnakemakeInvocation};
use crate::utils::expand_path;

#[derive(Args)]
pub struct PreprocessCMD {
    /// Path to folder with fastq files
    #[arg(long = "fastq", value_parser = clap::value_parser!(PathBuf))]
    pub path_fastq: PathBuf,

    /// Space separated barcodes used for demultiplexing [e.g. ATAGAGGC TATAGCCT CCTATCCT]
    #[arg(long, required = true, num_args = 1..)]
    pub barcodes: Vec<String>,

    /// Space separated modalities corresponding to the barcodes [e.g. ATAC H3K27ac H3K27me3]
    #[arg(long, required = true, num_args = 1..)]
    pub modalities: Vec<String>,

    /// Path to cellranger reference folder
    #[arg(long, value_parser = clap::value_parser!(PathBuf), default_value = PREPROCESS_DEFAULT_CELLRANGER_REF)]
    pub cellranger_ref: PathBuf,

    /// Number of threads
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..), default_value = PREPROCESS_DEFAULT_THREADS)]
    pub threads: u64,

    /// Genome to use for gene activity scores [only mm10 supported for now]
    #[arg(long, default_value = PREPROCESS_DEFAULT_GENOME)]
    pub genome: String,

    /// Path to temp directory for the sort command
    #[arg(long, value_parser = clap::value_parser!(PathBuf), default_value = PREPROCESS_DEFAULT_TEMPDIR)]
    pub tempdir: PathBuf,

    /// Arguments passed on to snakemake, may be repeated [e.g. --snakeargs="--dryrun --printshellcmds"]
    #[arg(long, allow_hyphen_values = true)]
    pub snakeargs: Vec<String>,

    /// Where to write the pipeline config
    #[arg(long, value_parser = clap::value_parser!(PathBuf), default_value = PREPROCESS_DEFAULT_CONFIGFILE)]
    pub configfile: PathBuf,

    /// Snakefile to run, instead of the workflow shipped with nanoct
    #[arg(long, value_parser = clap::value_parser!(PathBuf))]
    pub snakefile: Option<PathBuf>,

    /// Only write the config; do not start snakemake
    #[arg(long, default_value_t = false)]
    pub config_only: bool,
}

impl PreprocessCMD {
    /// Run the commandline option.
    /// This one checks the input run, writes the config and hands over to snakemake
    pub fn try_execute(&mut self) -> Result<()> {
        let params = Preprocess {
            path_fastq: self.path_fastq.clone(),
            modalities: self.modalities.clone(),
            barcodes: self.barcodes.clone(),
            cellranger_ref: expand_path(&self.cellranger_ref),
            genome: self.genome.clone(),
            tempdir: expand_path(&self.tempdir),
            path_config: self.configfile.clone(),
        };
        let config = params.prepare()?;

        if self.config_only {
            info!(
                "Config for run {} written; not starting snakemake",
                config.sample.join(",")
            );
            return Ok(());
        }

        let snakefile = locate_snakefile(self.snakefile.as_deref())?;
        let invocation = SnakemakeInvocation::new(
            snakefile,
            self.threads as usize,
            self.configfile.clone(),
            &self.snakeargs,
        );
        invocation.run()?;

        log::info!("Preprocess has finished succesfully");
        Ok(())
    }
}

/// Config construction for one nano-CUT&Tag run
pub struct Preprocess {
    pub path_fastq: PathBuf,
    pub modalities: Vec<String>,
    pub barcodes: Vec<String>,
    pub cellranger_ref: PathBuf,
    pub genome: String,
    pub tempdir: PathBuf,
    pub path_config: PathBuf,
}

impl Preprocess {
    /// Validate the inputs, then write the config. Nothing is written if a check fails
    pub fn prepare(&self) -> Result<PipelineConfig> {
        let fastq = FastqSet::discover(&self.path_fastq)?;
        let modalities = ModalityBarcodes::from_lists(&self.modalities, &self.barcodes)?;
        for (modality, barcode) in modalities.iter() {
            info!("Modality {} has barcode {}", modality, barcode);
        }

        let config = PipelineConfig {
            cellranger_ref: self.cellranger_ref.clone(),
            fastq: fastq.files,
            genome: self.genome.clone(),
            input_folder: fastq.folder,
            modalities,
            sample: vec![fastq.sample_id],
            tempdir: self.tempdir.clone(),
        };
        config.write(&self.path_config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::Error;
    use std::fs::File;

    fn params(folder: &std::path::Path, config: PathBuf, modalities: &[&str], barcodes: &[&str]) -> Preprocess {
        Preprocess {
            path_fastq: folder.to_path_buf(),
            modalities: modalities.iter().map(|s| s.to_string()).collect(),
            barcodes: barcodes.iter().map(|s| s.to_string()).collect(),
            cellranger_ref: PathBuf::from("/ref"),
            genome: "mm10".to_string(),
            tempdir: PathBuf::from("/tmp"),
            path_config: config,
        }
    }

    #[test]
    fn prepare_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let run = dir.path().join("run");
        std::fs::create_dir(&run).unwrap();
        File::create(run.join("SampleA_S1_L001_R1_001.fastq.gz")).unwrap();
        File::create(run.join("SampleA_S1_L001_R2_001.fastq.gz")).unwrap();

        let path_config = dir.path().join("config.yaml");
        let p = params(&run, path_config.clone(), &["ATAC", "H3K27ac"], &["ATAGAGGC", "TATAGCCT"]);
        let config = p.prepare().unwrap();

        assert_eq!(config.sample, vec!["SampleA".to_string()]);
        assert_eq!(config.fastq.len(), 2);
        assert_eq!(config.modalities.get("H3K27ac"), Some("TATAGCCT"));
        assert_eq!(config.input_folder, std::fs::canonicalize(&run).unwrap());
        let written: PipelineConfig =
            serde_yaml::from_str(&std::fs::read_to_string(&path_config).unwrap()).unwrap();
        assert_eq!(written, config);
    }

    #[test]
    fn mismatch_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let run = dir.path().join("run");
        std::fs::create_dir(&run).unwrap();
        File::create(run.join("SampleA_S1_L001_R1_001.fastq.gz")).unwrap();

        let path_config = dir.path().join("config.yaml");
        let p = params(&run, path_config.clone(), &["ATAC", "H3K27ac"], &["ATAGAGGC"]);
        let e = p.prepare().unwrap_err();
        assert!(matches!(
            e.downcast_ref::<Error>(),
            Some(Error::ModalityBarcodeMismatch { .. })
        ));
        assert!(!path_config.exists());
    }
}
