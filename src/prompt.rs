//! Overwrite-confirmation prompting.
//!
//! Commands that write a new file (web, resize) or move one (rename) ask
//! before clobbering an existing target. The question is skipped entirely
//! when the target does not exist, when `--yes` was given, or under dry-run
//! (nothing will be written anyway).
//!
//! Like the subprocess boundary in [`crate::exec`], the interactive read is
//! kept behind a trait: production uses [`StdinPrompter`], tests substitute a
//! scripted one, so the denial path through every handler is testable.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::options::Options;

/// Ask a yes/no question on the given streams. Accepts `y` / `yes`, any case;
/// everything else is no.
pub fn confirm(
    question: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<bool> {
    write!(output, "{question} ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Asks the user a yes/no question.
pub trait Prompter {
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Production prompter over stdin/stdout.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let stdin = io::stdin();
        confirm(question, &mut stdin.lock(), &mut io::stdout())
    }
}

/// Decide whether writing to `target` may proceed, asking the prompter when
/// the target already exists.
pub fn overwrite_allowed(
    target: &Path,
    opts: &Options,
    prompter: &mut dyn Prompter,
) -> io::Result<bool> {
    if !target.exists() || opts.no_prompt || opts.dry_run {
        return Ok(true);
    }
    prompter.confirm(&format!("Overwrite '{}'? (Y/N)", target.display()))
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    /// Prompter answering from a scripted input buffer, one line per
    /// question, recording every question asked. Answers run through the
    /// same parsing as the real stdin path.
    pub struct ScriptedPrompter {
        input: Cursor<Vec<u8>>,
        pub questions: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn answering(lines: &str) -> Self {
            Self {
                input: Cursor::new(lines.as_bytes().to_vec()),
                questions: Vec::new(),
            }
        }

        /// A prompter that must never be consulted; an empty input means any
        /// unexpected question is answered no.
        pub fn unexpected() -> Self {
            Self::answering("")
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm(&mut self, question: &str) -> io::Result<bool> {
            self.questions.push(question.to_string());
            confirm(question, &mut self.input, &mut io::sink())
        }
    }

    fn ask(answer: &str) -> bool {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut output = Vec::new();
        confirm("Overwrite? (Y/N)", &mut input, &mut output).unwrap()
    }

    #[test]
    fn yes_answers_accepted() {
        assert!(ask("y\n"));
        assert!(ask("Y\n"));
        assert!(ask("yes\n"));
        assert!(ask("YES\n"));
    }

    #[test]
    fn anything_else_is_no() {
        assert!(!ask("n\n"));
        assert!(!ask("no\n"));
        assert!(!ask("\n"));
        assert!(!ask(""));
        assert!(!ask("yep\n"));
    }

    #[test]
    fn question_written_to_output() {
        let mut input = Cursor::new(b"y\n".to_vec());
        let mut output = Vec::new();
        confirm("Overwrite 'a.jpg'? (Y/N)", &mut input, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Overwrite 'a.jpg'? (Y/N) "
        );
    }

    #[test]
    fn missing_target_needs_no_prompt() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("new.jpg");

        let mut prompter = ScriptedPrompter::unexpected();
        assert!(overwrite_allowed(&target, &Options::default(), &mut prompter).unwrap());
        assert!(prompter.questions.is_empty());
    }

    #[test]
    fn existing_target_allowed_with_no_prompt_flag() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("old.jpg");
        std::fs::write(&target, "x").unwrap();

        let opts = Options {
            no_prompt: true,
            ..Options::default()
        };
        let mut prompter = ScriptedPrompter::unexpected();
        assert!(overwrite_allowed(&target, &opts, &mut prompter).unwrap());
        assert!(prompter.questions.is_empty());
    }

    #[test]
    fn existing_target_allowed_under_dry_run() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("old.jpg");
        std::fs::write(&target, "x").unwrap();

        let opts = Options {
            dry_run: true,
            ..Options::default()
        };
        let mut prompter = ScriptedPrompter::unexpected();
        assert!(overwrite_allowed(&target, &opts, &mut prompter).unwrap());
        assert!(prompter.questions.is_empty());
    }

    #[test]
    fn existing_target_asks_and_honors_the_answer() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("old.jpg");
        std::fs::write(&target, "x").unwrap();

        let mut prompter = ScriptedPrompter::answering("n\ny\n");
        assert!(!overwrite_allowed(&target, &Options::default(), &mut prompter).unwrap());
        assert!(overwrite_allowed(&target, &Options::default(), &mut prompter).unwrap());
        assert_eq!(
            prompter.questions,
            vec![
                format!("Overwrite '{}'? (Y/N)", target.display()),
                format!("Overwrite '{}'? (Y/N)", target.display()),
            ]
        );
    }
}
