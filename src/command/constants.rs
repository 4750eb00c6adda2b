pub const PREPROCESS_DEFAULT_CELLRANGER_REF: &str =
    "/data/ref/cellranger-atac/refdata-cellranger-atac-mm10-2020-A-2.0.0/";
pub const PREPROCESS_DEFAULT_GENOME: &str = "mm10";
pub const PREPROCESS_DEFAULT_TEMPDIR: &str = "~/temp";
pub const PREPROCESS_DEFAULT_THREADS: &str = "1";
pub const PREPROCESS_DEFAULT_CONFIGFILE: &str = "config.yaml";
