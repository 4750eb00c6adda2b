pub mod fastq_folder;
pub mod fastq_name;

pub use fastq_folder::check_uniform_compression;
pub use fastq_folder::list_fastq_files;
pub use fastq_folder::sample_ids_from_fastq;
pub use fastq_folder::FastqSet;

pub use fastq_name::FastqName;
