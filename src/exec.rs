//! The subprocess execution boundary.
//!
//! Handlers decide *what* to run; this module is the only place that actually
//! runs anything. The [`ToolRunner`] trait keeps that boundary narrow: the
//! production implementation is [`SystemRunner`], and tests substitute a
//! recording mock so every handler path can be exercised without spawning a
//! single child process.
//!
//! [`Executor`] wraps a runner with the dry-run/verbose behavior shared by
//! all commands: verbose prints each command line before running it, dry-run
//! prints the line and skips the spawn entirely, reporting success. Captures
//! (stdout reads) execute even under dry-run, since they observe without
//! mutating.

use std::fmt;
use std::process::Command;
use thiserror::Error;

use crate::options::Options;

#[derive(Error, Debug)]
pub enum ExecError {
    #[error("Failed to launch {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} exited with a non-zero status")]
    Failed(&'static str),
}

/// A fully-assembled external tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: &'static str, args: Vec<String>) -> Self {
        Self { program, args }
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Trait for running external tools.
///
/// Two operations cover every need: run to completion (reporting whether the
/// tool exited zero) and run capturing stdout. Exit status is deliberately
/// reduced to a bool: callers either tolerate failure (lossless rotation) or
/// turn it into an error, and no caller inspects specific codes.
pub trait ToolRunner {
    /// Run `cmd` to completion. `Ok(true)` means a zero exit.
    fn run(&self, cmd: &ToolCommand) -> Result<bool, ExecError>;

    /// Run `cmd` and return its trimmed stdout, regardless of exit status.
    fn capture(&self, cmd: &ToolCommand) -> Result<String, ExecError>;
}

/// Production runner: spawns real child processes and waits synchronously.
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, cmd: &ToolCommand) -> Result<bool, ExecError> {
        let status = Command::new(cmd.program)
            .args(&cmd.args)
            .status()
            .map_err(|source| ExecError::Spawn {
                tool: cmd.program,
                source,
            })?;
        Ok(status.success())
    }

    fn capture(&self, cmd: &ToolCommand) -> Result<String, ExecError> {
        let output = Command::new(cmd.program)
            .args(&cmd.args)
            .output()
            .map_err(|source| ExecError::Spawn {
                tool: cmd.program,
                source,
            })?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// A [`ToolRunner`] plus the dry-run/verbose options of one invocation.
pub struct Executor<'a> {
    runner: &'a dyn ToolRunner,
    dry_run: bool,
    verbose: bool,
}

impl<'a> Executor<'a> {
    pub fn new(runner: &'a dyn ToolRunner, opts: &Options) -> Self {
        Self {
            runner,
            dry_run: opts.dry_run,
            verbose: opts.verbose,
        }
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Invoke `cmd`, tolerating a non-zero exit. Dry-run counts as success.
    pub fn try_run(&self, cmd: &ToolCommand) -> Result<bool, ExecError> {
        if self.dry_run || self.verbose {
            println!("$ {cmd}");
        }
        if self.dry_run {
            return Ok(true);
        }
        self.runner.run(cmd)
    }

    /// Invoke `cmd`, turning a non-zero exit into an error.
    pub fn run(&self, cmd: &ToolCommand) -> Result<(), ExecError> {
        if self.try_run(cmd)? {
            Ok(())
        } else {
            Err(ExecError::Failed(cmd.program))
        }
    }

    /// Invoke `cmd` and capture its stdout. Executes even under dry-run:
    /// captures are reads, and handlers need the answer to decide anything.
    pub fn capture(&self, cmd: &ToolCommand) -> Result<String, ExecError> {
        if self.verbose {
            println!("$ {cmd}");
        }
        self.runner.capture(cmd)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Mock runner that records invocations without spawning anything.
    ///
    /// Scripted results are popped from the end, so tests push them in
    /// reverse order of consumption.
    #[derive(Default)]
    pub struct MockRunner {
        pub run_results: RefCell<Vec<bool>>,
        pub capture_results: RefCell<Vec<String>>,
        pub invocations: RefCell<Vec<String>>,
    }

    impl MockRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_run_results(results: Vec<bool>) -> Self {
            Self {
                run_results: RefCell::new(results),
                ..Self::default()
            }
        }

        pub fn with_captures(captures: Vec<String>) -> Self {
            Self {
                capture_results: RefCell::new(captures),
                ..Self::default()
            }
        }

        pub fn invocations(&self) -> Vec<String> {
            self.invocations.borrow().clone()
        }
    }

    impl ToolRunner for MockRunner {
        fn run(&self, cmd: &ToolCommand) -> Result<bool, ExecError> {
            self.invocations.borrow_mut().push(cmd.to_string());
            Ok(self.run_results.borrow_mut().pop().unwrap_or(true))
        }

        fn capture(&self, cmd: &ToolCommand) -> Result<String, ExecError> {
            self.invocations.borrow_mut().push(cmd.to_string());
            Ok(self.capture_results.borrow_mut().pop().unwrap_or_default())
        }
    }

    fn cmd(args: &[&str]) -> ToolCommand {
        ToolCommand::new("tool", args.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn display_joins_program_and_args() {
        let c = cmd(&["-a", "file.jpg"]);
        assert_eq!(c.to_string(), "tool -a file.jpg");
    }

    #[test]
    fn dry_run_skips_the_spawn_and_reports_success() {
        let runner = MockRunner::with_run_results(vec![false]);
        let exec = Executor::new(
            &runner,
            &Options {
                dry_run: true,
                ..Options::default()
            },
        );

        assert!(exec.try_run(&cmd(&["-x"])).unwrap());
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn run_errors_on_non_zero_exit() {
        let runner = MockRunner::with_run_results(vec![false]);
        let exec = Executor::new(&runner, &Options::default());

        let result = exec.run(&cmd(&["-x"]));
        assert!(matches!(result, Err(ExecError::Failed("tool"))));
    }

    #[test]
    fn try_run_tolerates_non_zero_exit() {
        let runner = MockRunner::with_run_results(vec![false]);
        let exec = Executor::new(&runner, &Options::default());

        assert!(!exec.try_run(&cmd(&["-x"])).unwrap());
        assert_eq!(runner.invocations(), vec!["tool -x"]);
    }

    #[test]
    fn capture_executes_even_under_dry_run() {
        let runner = MockRunner::with_captures(vec!["6".to_string()]);
        let exec = Executor::new(
            &runner,
            &Options {
                dry_run: true,
                ..Options::default()
            },
        );

        assert_eq!(exec.capture(&cmd(&["-n"])).unwrap(), "6");
        assert_eq!(runner.invocations(), vec!["tool -n"]);
    }
}
