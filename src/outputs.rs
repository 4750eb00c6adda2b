use std::path::Path;

use anyhow::{bail, Context};
use itertools::Itertools;
use walkdir::WalkDir;

use crate::fileformat::fastq_name::is_hidden;
use crate::fileformat::FastqName;

/// Reads written per demultiplexed lane; cellranger-atac wants R1, R2 and R3
pub const DEMULTIPLEXED_READS: [&str; 3] = ["R1", "R2", "R3"];

/// Where the demultiplexer puts the reads of one modality
pub fn demultiplexed_folder(sample: &str, modality: &str) -> String {
    format!("results/{}/{}/fastq_demultiplexed", sample, modality)
}

/// Predict the demultiplexed files of one modality, one per read for each
/// gzipped input in the folder
pub fn demultiplexed_fastq_paths<P: AsRef<Path>>(
    fastq_folder: P,
    sample: &str,
    modality: &str,
) -> anyhow::Result<Vec<String>> {
    let fastq_folder = fastq_folder.as_ref();

    let mut inputs = Vec::new();
    for entry in WalkDir::new(fastq_folder).min_depth(1).max_depth(1) {
        let entry = entry
            .with_context(|| format!("Failed to list folder {}", fastq_folder.display()))?;
        if !is_hidden(entry.path()) && entry.file_name().to_string_lossy().ends_with(".fastq.gz") {
            inputs.push(entry.into_path());
        }
    }
    inputs.sort();
    if inputs.is_empty() {
        bail!(
            "No gzipped fastq files (*.fastq.gz) in folder: {}",
            fastq_folder.display()
        );
    }

    let out_folder = demultiplexed_folder(sample, modality);
    let mut result = Vec::new();
    for input in &inputs {
        let name = FastqName::parse(input)?;
        for read in DEMULTIPLEXED_READS {
            result.push(format!(
                "{}/{}_{}_{}_{}_{}{}",
                out_folder, name.id, name.number, name.lane, read, name.suffix, name.extension
            ));
        }
    }

    //Index reads of a lane give the same names as the other reads
    Ok(result.into_iter().unique().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn predicts_three_reads_per_lane() {
        let dir = tempfile::tempdir().unwrap();
        for n in [
            "SampleA_S1_L001_R1_001.fastq.gz",
            "SampleA_S1_L001_R2_001.fastq.gz",
            "SampleA_S1_L001_I1_001.fastq.gz",
            "SampleA_S1_L002_R1_001.fastq.gz",
            "SampleA_S1_L002_R2_001.fastq",
        ] {
            File::create(dir.path().join(n)).unwrap();
        }

        let paths = demultiplexed_fastq_paths(dir.path(), "SampleA", "H3K27ac").unwrap();
        assert_eq!(
            paths,
            vec![
                "results/SampleA/H3K27ac/fastq_demultiplexed/SampleA_S1_L001_R1_001.fastq.gz",
                "results/SampleA/H3K27ac/fastq_demultiplexed/SampleA_S1_L001_R2_001.fastq.gz",
                "results/SampleA/H3K27ac/fastq_demultiplexed/SampleA_S1_L001_R3_001.fastq.gz",
                "results/SampleA/H3K27ac/fastq_demultiplexed/SampleA_S1_L002_R1_001.fastq.gz",
                "results/SampleA/H3K27ac/fastq_demultiplexed/SampleA_S1_L002_R2_001.fastq.gz",
                "results/SampleA/H3K27ac/fastq_demultiplexed/SampleA_S1_L002_R3_001.fastq.gz",
            ]
        );
    }

    #[test]
    fn dotfiles_are_not_inputs() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("SampleA_S1_L001_R1_001.fastq.gz")).unwrap();
        File::create(dir.path().join("._SampleA_S1_L001_R1_001.fastq.gz")).unwrap();

        let paths = demultiplexed_fastq_paths(dir.path(), "SampleA", "ATAC").unwrap();
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn uncompressed_run_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("SampleA_S1_L001_R1_001.fastq")).unwrap();
        File::create(dir.path().join("SampleA_S1_L001_R2_001.fq.gz")).unwrap();

        let e = demultiplexed_fastq_paths(dir.path(), "SampleA", "ATAC").unwrap_err();
        assert!(e.to_string().contains("No gzipped fastq files"));
    }

    #[test]
    fn unparsable_name_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("reads.fastq.gz")).unwrap();
        assert!(demultiplexed_fastq_paths(dir.path(), "S", "ATAC").is_err());
    }
}
