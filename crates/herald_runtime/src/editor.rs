//! Line editor abstraction for the REPL.
//!
//! This module provides a trait-based abstraction over line editing
//! libraries, allowing the REPL to use rustyline while remaining swappable.

use herald_foundation::{Error, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper, Hinter};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set available completions for base command names.
    fn set_base_names(&mut self, names: Vec<String>);
}

/// Helper for rustyline that completes base command names and hints from
/// history.
#[derive(Helper, Hinter)]
struct HeraldHelper {
    completer: BaseNameCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Validator for HeraldHelper {}

impl Completer for HeraldHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Highlighter for HeraldHelper {}

/// Completes the first word of a line against registered base names.
struct BaseNameCompleter {
    names: Vec<String>,
}

impl Completer for BaseNameCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // Only the base name is completable; parameters are free-form.
        let head = &line[..pos];
        if head.contains(' ') {
            return Ok((pos, Vec::new()));
        }
        let mut candidates: Vec<Pair> = self
            .names
            .iter()
            .filter(|name| name.starts_with(head))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        candidates.sort_by(|a, b| a.display.cmp(&b.display));
        Ok((0, candidates))
    }
}

/// The default rustyline-backed editor.
pub struct RustylineEditor {
    editor: Editor<HeraldHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let mut editor = Editor::new()
            .map_err(|e| Error::internal(format!("editor initialization failed: {e}")))?;
        editor.set_helper(Some(HeraldHelper {
            completer: BaseNameCompleter { names: Vec::new() },
            hinter: HistoryHinter::new(),
        }));
        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::internal(format!("read failed: {e}"))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_base_names(&mut self, names: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.names = names;
        }
    }
}
