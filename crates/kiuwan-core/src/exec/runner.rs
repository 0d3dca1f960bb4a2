use std::fs::File;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::command::CommandLine;
use crate::error::ExecError;

/// Runs an agent invocation to completion.
///
/// Implementations must leave the agent's output in `cmd.log_path` and
/// report a non-zero exit as [`ExecError::Failed`].
pub trait AgentRunner {
    fn run(&self, cmd: &CommandLine) -> Result<(), ExecError>;
}

/// Spawns the agent as a child process and waits for it.
///
/// stdout and stderr both go to the log file, which is truncated first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl AgentRunner for ProcessRunner {
    fn run(&self, cmd: &CommandLine) -> Result<(), ExecError> {
        let log_err = |source| ExecError::LogFile {
            path: cmd.log_path.clone(),
            source,
        };
        let stdout = File::create(&cmd.log_path).map_err(log_err)?;
        let stderr = stdout.try_clone().map_err(log_err)?;

        debug!(executable = %cmd.executable.display(), log = %cmd.log_path.display(), "spawning agent");

        let status = Command::new(&cmd.executable)
            .args(&cmd.args)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr)
            .status()
            .map_err(|source| ExecError::Spawn {
                executable: cmd.executable.clone(),
                source,
            })?;

        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(ExecError::exit_code(code)),
            None => Err(ExecError::terminated()),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    /// Runs `body` through `/bin/sh` so tests never exec a freshly written file.
    fn sh(dir: &Path, body: &str, args: &[&str]) -> CommandLine {
        let script = dir.join("agent.sh");
        std::fs::write(&script, format!("{body}\n")).unwrap();

        let mut all = vec![script.display().to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        CommandLine {
            executable: PathBuf::from("/bin/sh"),
            args: all,
            log_path: dir.join("analyze.log"),
        }
    }

    #[test]
    fn captures_stdout_and_stderr_into_log() {
        let dir = tempdir().unwrap();
        let cmd = sh(dir.path(), "echo \"out $1\"\necho err >&2", &["first"]);

        ProcessRunner.run(&cmd).unwrap();

        let content = std::fs::read_to_string(&cmd.log_path).unwrap();
        assert!(content.contains("out first"));
        assert!(content.contains("err"));
    }

    #[test]
    fn log_is_truncated_between_runs() {
        let dir = tempdir().unwrap();
        ProcessRunner
            .run(&sh(dir.path(), "echo first-run", &[]))
            .unwrap();
        let cmd = sh(dir.path(), "echo second-run", &[]);
        ProcessRunner.run(&cmd).unwrap();

        let content = std::fs::read_to_string(&cmd.log_path).unwrap();
        assert_eq!(content, "second-run\n");
    }

    #[test]
    fn non_zero_exit_embeds_code_in_message() {
        let dir = tempdir().unwrap();
        let err = ProcessRunner
            .run(&sh(dir.path(), "exit 10", &[]))
            .unwrap_err();

        match err {
            ExecError::Failed { code, message } => {
                assert_eq!(code, Some(10));
                assert_eq!(message, "Process exited with an error: 10 (Exit value: 10)");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_executable_is_spawn_error() {
        let dir = tempdir().unwrap();
        let cmd = CommandLine {
            executable: dir.path().join("bin/agent.sh"),
            args: vec![],
            log_path: dir.path().join("analyze.log"),
        };

        let err = ProcessRunner.run(&cmd).unwrap_err();
        assert!(matches!(err, ExecError::Spawn { .. }));
    }

    #[test]
    fn unwritable_log_is_reported_before_spawn() {
        let dir = tempdir().unwrap();
        let mut cmd = sh(dir.path(), "exit 0", &[]);
        cmd.log_path = dir.path().join("missing/analyze.log");

        let err = ProcessRunner.run(&cmd).unwrap_err();
        assert!(matches!(err, ExecError::LogFile { .. }));
    }
}
