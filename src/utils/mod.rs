mod command_to_string;
mod detect_software;
mod expand_and_resolve_path;

pub use detect_software::check_snakemake;
pub use detect_software::check_software;

pub use expand_and_resolve_path::expand_and_resolve_path;
pub use expand_and_resolve_path::expand_path;

pub use command_to_string::command_to_string;
