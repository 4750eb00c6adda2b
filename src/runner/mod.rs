mod snakemake;

pub use snakemake::locate_snakefile;
pub use snakemake::SnakemakeInvocation;
pub use snakemake::DEFAULT_SNAKEFILE;
pub use snakemake::SNAKEMAKE;
