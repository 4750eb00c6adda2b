use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No fastq files in folder: {}", .folder.display())]
    NoFastqFiles { folder: std::path::PathBuf },

    #[error(
        "All files must be either gzipped or not; conflicting files:\n{}",
        Error::format_paths(.files)
    )]
    MixedCompression { files: Vec<std::path::PathBuf> },

    #[error(
        "Multiple or 0 sequencing runs found in folder: {}. Make sure the folder contains data from one sequencing run. Run names: {}",
        .folder.display(),
        .runs.join(",")
    )]
    SampleRunCount {
        folder: std::path::PathBuf,
        runs: Vec<String>,
    },

    #[error(
        "Number of modalities ({}) does not match the number of barcodes ({}). Modalities: {:?} Barcodes: {:?}",
        .modalities.len(),
        .barcodes.len(),
        .modalities,
        .barcodes
    )]
    ModalityBarcodeMismatch {
        modalities: Vec<String>,
        barcodes: Vec<String>,
    },

    #[error("Modality '{}' is given more than once", .modality)]
    DuplicateModality { modality: String },

    #[error("Barcode '{}' for modality '{}' is not a nucleotide sequence", .barcode, .modality)]
    InvalidBarcode { modality: String, barcode: String },

    #[error("Fastq file name {:?} is invalid{}.", .path, Error::format_msg_as_detail(.msg))]
    FastqNameNotValid {
        path: std::path::PathBuf,
        msg: Option<String>,
    },

    #[error(
        "Utility '{}' failed on execute \'{}\'{}",
        .utility,
        .cmd,
        Error::format_msg_as_detail(.msg)
    )]
    UtilityExecutionError {
        utility: String,
        cmd: String,
        msg: Option<String>,
    },

    #[error(
        "Failed trying to execute utility '{utility}'. Make sure it is in your $PATH and you have execution permissions."
    )]
    UtilityNotExecutable { utility: String },
}

impl Error {
    #[cold]
    pub fn no_fastq_files<P: AsRef<std::path::Path>>(folder: P) -> Self {
        Error::NoFastqFiles {
            folder: folder.as_ref().to_path_buf(),
        }
    }

    #[cold]
    pub fn mixed_compression(files: &[std::path::PathBuf]) -> Self {
        Error::MixedCompression {
            files: files.to_vec(),
        }
    }

    #[cold]
    pub fn sample_run_count<P: AsRef<std::path::Path>>(folder: P, runs: Vec<String>) -> Self {
        Error::SampleRunCount {
            folder: folder.as_ref().to_path_buf(),
            runs,
        }
    }

    #[cold]
    pub fn modality_barcode_mismatch(modalities: &[String], barcodes: &[String]) -> Self {
        Error::ModalityBarcodeMismatch {
            modalities: modalities.to_vec(),
            barcodes: barcodes.to_vec(),
        }
    }

    #[cold]
    pub fn duplicate_modality<M: Into<String>>(modality: M) -> Self {
        Error::DuplicateModality {
            modality: modality.into(),
        }
    }

    #[cold]
    pub fn invalid_barcode<M: Into<String>, B: Into<String>>(modality: M, barcode: B) -> Self {
        Error::InvalidBarcode {
            modality: modality.into(),
            barcode: barcode.into(),
        }
    }

    #[cold]
    pub fn fastq_name_not_valid<P: AsRef<std::path::Path>, M: Into<String>>(
        path: P,
        msg: Option<M>,
    ) -> Self {
        Error::FastqNameNotValid {
            path: path.as_ref().to_path_buf(),
            msg: msg.map(|m| m.into()),
        }
    }

    #[cold]
    pub fn utility_execution_error<U: Into<String>, C: Into<String>, M: Into<String>>(
        utility: U,
        cmd: C,
        msg: Option<M>,
    ) -> Self {
        Error::UtilityExecutionError {
            utility: utility.into(),
            cmd: cmd.into(),
            msg: msg.map(|m| m.into()),
        }
    }

    #[cold]
    pub fn utility_not_executable<U: Into<String>>(utility: U) -> Self {
        Error::UtilityNotExecutable {
            utility: utility.into(),
        }
    }

    pub fn format_msg_as_detail(msg: &Option<String>) -> String {
        match msg {
            Some(m) => format!(" ({})", m),
            None => String::new(),
        }
    }

    fn format_paths(files: &[std::path::PathBuf]) -> String {
        files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_count_message_lists_runs() {
        let e = Error::sample_run_count(
            "/data/run",
            vec!["SampleA".to_string(), "SampleB".to_string()],
        );
        let msg = e.to_string();
        assert!(msg.contains("/data/run"));
        assert!(msg.contains("SampleA,SampleB"));
    }

    #[test]
    fn detail_is_optional() {
        let e = Error::fastq_name_not_valid("x.fastq", None::<String>);
        assert_eq!(e.to_string(), "Fastq file name \"x.fastq\" is invalid.");

        let e = Error::fastq_name_not_valid("x.fastq", Some("no lane"));
        assert_eq!(e.to_string(), "Fastq file name \"x.fastq\" is invalid (no lane).");
    }
}
