use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::runtime::Error;

/// Recognised FASTQ file endings, longest first so that `.fastq.gz` wins over `.fastq`
pub const FASTQ_EXTENSIONS: [&str; 4] = [".fastq.gz", ".fq.gz", ".fastq", ".fq"];

lazy_static! {
    static ref RE_NUMBER: Regex = Regex::new(r"_S[0-9]+_").unwrap();
    static ref RE_LANE: Regex = Regex::new(r"_L[0-9]+_").unwrap();
    static ref RE_READ: Regex = Regex::new(r"_[RI][0-9]+_").unwrap();
}

/// Components of an Illumina-style FASTQ name, e.g. `SampleA_S1_L001_R1_001.fastq.gz`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqName {
    pub id: String,
    pub number: String,
    pub lane: String,
    pub read: String,
    pub suffix: String,
    pub extension: String,
}

impl FastqName {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<FastqName, Error> {
        let path = path.as_ref();
        let fname = file_name(path);

        let m_number = RE_NUMBER
            .find(&fname)
            .ok_or_else(|| Error::fastq_name_not_valid(path, Some("no run number (_S<n>_)")))?;
        let m_lane = RE_LANE
            .find(&fname)
            .ok_or_else(|| Error::fastq_name_not_valid(path, Some("no lane (_L<n>_)")))?;
        let m_read = RE_READ
            .find(&fname)
            .ok_or_else(|| Error::fastq_name_not_valid(path, Some("no read (_R<n>_ or _I<n>_)")))?;

        //Everything after the read token, up to a second read token if there is one
        let rest = &fname[m_read.end()..];
        let rest = match RE_READ.find(rest) {
            Some(m) => &rest[..m.start()],
            None => rest,
        };
        let (suffix, extension) = split_extension(rest);

        Ok(FastqName {
            id: fname[..m_number.start()].trim_matches('_').to_string(),
            number: m_number.as_str().trim_matches('_').to_string(),
            lane: m_lane.as_str().trim_matches('_').to_string(),
            read: m_read.as_str().trim_matches('_').to_string(),
            suffix: suffix.trim_matches('_').to_string(),
            extension: extension.to_string(),
        })
    }
}

/// Text before the first run-number token; the whole name if there is none
pub fn run_prefix<P: AsRef<Path>>(path: P) -> String {
    let fname = file_name(path.as_ref());
    match RE_NUMBER.find(&fname) {
        Some(m) => fname[..m.start()].to_string(),
        None => fname,
    }
}

pub fn has_fastq_extension<P: AsRef<Path>>(path: P) -> bool {
    let fname = file_name(path.as_ref());
    FASTQ_EXTENSIONS.iter().any(|ext| fname.ends_with(ext))
}

pub fn is_gzipped<P: AsRef<Path>>(path: P) -> bool {
    file_name(path.as_ref()).ends_with(".gz")
}

/// Dotfiles, e.g. macOS `._` resource forks, are never inputs
pub fn is_hidden<P: AsRef<Path>>(path: P) -> bool {
    file_name(path.as_ref()).starts_with('.')
}

/// Index reads are not demultiplexed as input
pub fn is_index_read<P: AsRef<Path>>(path: P) -> bool {
    file_name(path.as_ref()).contains("_I1_")
}

fn split_extension(s: &str) -> (&str, &str) {
    for ext in FASTQ_EXTENSIONS {
        if let Some(stem) = s.strip_suffix(ext) {
            return (stem, &s[stem.len()..]);
        }
    }
    (s, "")
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_default()
}
