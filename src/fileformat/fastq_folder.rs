use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use log::{debug, info};
use walkdir::WalkDir;

use super::fastq_name::{has_fastq_extension, is_gzipped, is_hidden, is_index_read, run_prefix};
use crate::runtime::Error;
use crate::utils::expand_and_resolve_path;

/// The FASTQ files of one sequencing run, as handed to the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqSet {
    /// Absolute path of the run folder
    pub folder: PathBuf,
    pub files: Vec<PathBuf>,
    pub sample_id: String,
}

impl FastqSet {
    /// Find the input files in a folder and check that they form one run
    pub fn discover<P: AsRef<Path>>(folder: P) -> anyhow::Result<FastqSet> {
        let folder = folder.as_ref();
        let resolved = expand_and_resolve_path(folder)?;
        let files = list_fastq_files(&resolved)?;

        if files.is_empty() {
            bail!(Error::no_fastq_files(folder));
        }
        info!("Found {} fastq files in {}", files.len(), folder.display());

        check_uniform_compression(&files)?;

        let sample_ids = sample_ids_from_fastq(&files);
        if sample_ids.len() != 1 {
            bail!(Error::sample_run_count(
                folder,
                sample_ids.into_iter().collect()
            ));
        }
        let sample_id = sample_ids.into_iter().next().unwrap_or_default();
        info!("Detected sequencing run {}", sample_id);

        Ok(FastqSet {
            folder: resolved,
            files,
            sample_id,
        })
    }
}

/// All fastq files directly in the folder, absolute and sorted. Index reads are left out
pub fn list_fastq_files<P: AsRef<Path>>(folder: P) -> anyhow::Result<Vec<PathBuf>> {
    let folder = expand_and_resolve_path(folder.as_ref())?;

    let mut files = Vec::new();
    for entry in WalkDir::new(&folder).min_depth(1).max_depth(1) {
        let entry =
            entry.with_context(|| format!("Failed to list folder {}", folder.display()))?;
        let path = entry.path();
        if is_hidden(path) || !has_fastq_extension(path) {
            continue;
        }
        if is_index_read(path) {
            debug!("Skipping index read {}", path.display());
            continue;
        }
        debug!("Input file {}", path.display());
        files.push(path.to_path_buf());
    }
    files.sort();
    Ok(files)
}

/// Distinct run prefixes over the files; one run gives exactly one
pub fn sample_ids_from_fastq(files: &[PathBuf]) -> BTreeSet<String> {
    files.iter().map(run_prefix).collect()
}

/// Either all files are gzipped or none is
pub fn check_uniform_compression(files: &[PathBuf]) -> Result<(), Error> {
    let n_gz = files.iter().filter(|f| is_gzipped(f)).count();
    if n_gz != 0 && n_gz != files.len() {
        return Err(Error::mixed_compression(files));
    }
    Ok(())
}
