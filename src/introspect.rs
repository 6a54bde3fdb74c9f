//! A snapshot of facts about the running process.

use std::env;
use std::path::PathBuf;
use std::process;
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: u32,
    pub executable: Option<PathBuf>,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub available_cpus: Option<usize>,
}

impl ProcessInfo {
    /// Collects what the OS will tell us. Facts it refuses are left as `None`.
    pub fn current() -> Self {
        ProcessInfo {
            pid: process::id(),
            executable: env::current_exe().ok(),
            args: env::args_os()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
            working_dir: env::current_dir().ok(),
            available_cpus: thread::available_parallelism().ok().map(|n| n.get()),
        }
    }

    /// Name of the executable without its directory, if known.
    pub fn program_name(&self) -> Option<String> {
        self.executable
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_process() {
        let info = ProcessInfo::current();
        assert_eq!(info.pid, process::id());
        assert!(!info.args.is_empty());
        assert!(info.available_cpus.map_or(true, |n| n >= 1));
    }

    #[test]
    fn test_program_name() {
        let info = ProcessInfo {
            pid: 1,
            executable: Some(PathBuf::from("/usr/local/bin/tour")),
            args: vec!["tour".to_string()],
            working_dir: None,
            available_cpus: None,
        };
        assert_eq!(info.program_name().as_deref(), Some("tour"));

        let unknown = ProcessInfo {
            executable: None,
            ..info
        };
        assert_eq!(unknown.program_name(), None);
    }
}
