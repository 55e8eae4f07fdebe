use camino::Utf8PathBuf;
use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use sysinfo::System;
use tracing::debug;

/// Exit status of an external tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitReport {
    /// `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl ExitReport {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs an external program to completion.
///
/// Output goes straight to our own stdout/stderr; nothing is captured.
/// The pipeline only ever talks to steamcmd and steam through this seam.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<ExitReport>;
}

/// Spawns real processes with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<ExitReport> {
        debug!("running {} {:?}", program, args);

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(ExitReport {
            code: status.code(),
        })
    }
}

/// Looks `name` up in the directories of a `PATH`-style value.
pub fn find_in_path_var(name: &str, path_var: &OsStr) -> Option<Utf8PathBuf> {
    std::env::split_paths(path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
        .and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
}

pub struct ProcessChecker;

impl ProcessChecker {
    /// Returns the first of `names` that matches a live process.
    /// Takes a mutable ref to System to allow sysinfo to reuse internal buffers.
    pub fn find_running<S: AsRef<str>>(sys: &mut System, names: &[S]) -> Option<String> {
        // Refresh only what we need
        sys.refresh_processes();

        names.iter().find_map(|name| {
            let name: &str = name.as_ref();
            sys.processes()
                .values()
                .any(|p| p.name() == name)
                .then(|| name.to_string())
        })
    }
}

/// Whether `path` is a file we could run.
pub fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        path.metadata()
            .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }
    #[cfg(not(unix))]
    {
        path.is_file()
    }
}
