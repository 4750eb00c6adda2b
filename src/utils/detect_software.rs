use log::debug;
use log::info;
use std::process::Command;

use crate::runtime::Error;

/// Check that an executable can be started, by asking for its version
pub fn check_software(utility: &str) -> Result<(), Error> {
    debug!("Checking for {}", utility);
    if let Ok(_output) = Command::new(utility).arg("--version").output() {
        info!("Found {}", utility);
        Ok(())
    } else {
        Err(Error::utility_not_executable(utility))
    }
}

pub fn check_snakemake() -> Result<(), Error> {
    check_software("snakemake")
}
