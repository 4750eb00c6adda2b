use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{info, warn};

use crate::runtime::Error;
use crate::utils::{check_snakemake, command_to_string};

pub const SNAKEMAKE: &str = "snakemake";
pub const DEFAULT_SNAKEFILE: &str = "workflow/Snakefile";

/// One call of the workflow runner
#[derive(Debug, Clone)]
pub struct SnakemakeInvocation {
    pub snakefile: PathBuf,
    pub threads: usize,
    pub configfile: PathBuf,
    pub extra_args: Vec<String>,
}

impl SnakemakeInvocation {
    /// Pass-through values are split on whitespace, so that "--dryrun --printshellcmds" gives two arguments
    pub fn new(snakefile: PathBuf, threads: usize, configfile: PathBuf, passthrough: &[String]) -> Self {
        let extra_args = passthrough
            .iter()
            .flat_map(|s| s.split_whitespace())
            .map(|s| s.to_string())
            .collect();
        SnakemakeInvocation {
            snakefile,
            threads,
            configfile,
            extra_args,
        }
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(SNAKEMAKE);
        cmd.arg("--snakefile")
            .arg(&self.snakefile)
            .arg("--cores")
            .arg(self.threads.to_string())
            .arg("--configfile")
            .arg(&self.configfile)
            .arg("-p")
            .args(&self.extra_args);
        cmd
    }

    /// Run snakemake in the foreground; its failure is ours
    pub fn run(&self) -> Result<(), Error> {
        check_snakemake()?;

        let mut cmd = self.to_command();
        let cmd_string = command_to_string(&cmd);
        info!("Running: {}", cmd_string);

        let status = cmd
            .status()
            .map_err(|e| spawn_failed(&cmd_string, e))?;
        if !status.success() {
            return Err(Error::utility_execution_error(
                SNAKEMAKE,
                cmd_string,
                Some(format!("exit status {}", status)),
            ));
        }
        info!("Snakemake has finished succesfully");
        Ok(())
    }
}

fn spawn_failed(cmd_string: &str, e: std::io::Error) -> Error {
    Error::utility_execution_error(SNAKEMAKE, cmd_string, Some(e.to_string()))
}

/// Find the workflow definition. An explicit path wins, then the one shipped
/// next to the executable, then the one under the working directory
pub fn locate_snakefile(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(p) = explicit {
        return crate::utils::expand_and_resolve_path(p);
    }

    let mut candidates = Vec::new();
    if let Some(dir) = env::current_exe().ok().and_then(|p| p.parent().map(|d| d.to_path_buf())) {
        candidates.push(dir.join(DEFAULT_SNAKEFILE));
    }
    candidates.push(env::current_dir()?.join(DEFAULT_SNAKEFILE));

    if let Some(found) = candidates.iter().find(|p| p.is_file()) {
        return Ok(found.clone());
    }

    let fallback = candidates.pop().unwrap_or_else(|| PathBuf::from(DEFAULT_SNAKEFILE));
    warn!(
        "No Snakefile found next to the executable or in the working directory; using {}",
        fallback.display()
    );
    Ok(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line() {
        let inv = SnakemakeInvocation::new(
            PathBuf::from("/opt/nanoct/workflow/Snakefile"),
            8,
            PathBuf::from("config.yaml"),
            &["--dryrun --printshellcmds".to_string(), "--keep-going".to_string()],
        );
        assert_eq!(
            command_to_string(&inv.to_command()),
            "snakemake --snakefile /opt/nanoct/workflow/Snakefile --cores 8 --configfile config.yaml -p --dryrun --printshellcmds --keep-going"
        );
    }

    #[test]
    fn blank_passthrough_adds_nothing() {
        let inv = SnakemakeInvocation::new(
            PathBuf::from("Snakefile"),
            1,
            PathBuf::from("config.yaml"),
            &[" ".to_string()],
        );
        assert!(inv.extra_args.is_empty());
    }

    #[test]
    fn spawn_error_is_kept() {
        let e = spawn_failed(
            "snakemake --cores 1",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(
            e.to_string(),
            "Utility 'snakemake' failed on execute 'snakemake --cores 1' (permission denied)"
        );
    }

    #[test]
    fn explicit_snakefile_wins() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("Snakefile");
        std::fs::write(&p, "").unwrap();
        let found = locate_snakefile(Some(&p)).unwrap();
        assert_eq!(found, std::fs::canonicalize(&p).unwrap());
    }
}
