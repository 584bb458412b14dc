//! The interactive REPL and batch driver.
//!
//! Reads lines shaped `base [parameters...]`, runs the parse pipeline, and
//! prints replies. Recoverable errors come back as ordinary reply text;
//! only editor failures abort the loop.

use std::io::{self, BufRead, Write};

use herald_foundation::Result;
use herald_parser::registry::CommandRegistry;
use herald_parser::{CommandParser, ParseError};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::respond::respond;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The compiled command tables.
    registry: CommandRegistry,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Input prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(registry: CommandRegistry) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(registry, editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(registry: CommandRegistry, mut editor: E) -> Self {
        let mut names: Vec<String> = registry.base_names().map(String::from).collect();
        names.sort_unstable();
        editor.set_base_names(names);
        Self {
            editor,
            registry,
            show_banner: true,
            prompt: "herald> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the input prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            println!("Herald v{}", env!("CARGO_PKG_VERSION"));
            println!("Type a command (`help <command>` for usage), `:quit` to exit.");
        }

        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    self.editor.add_history(&line);
                    match line.as_str() {
                        ":quit" | ":exit" => break,
                        ":commands" => println!("{}", self.command_listing()),
                        _ => println!("{}", self.handle_line(&line)),
                    }
                }
                ReadResult::Interrupted => println!("^C"),
                ReadResult::Eof => break,
            }
        }
        Ok(())
    }

    /// Parses and responds to one command line, rendering recoverable
    /// errors as reply text.
    #[must_use]
    pub fn handle_line(&self, line: &str) -> String {
        let (base, parameters) = match line.split_once(' ') {
            Some((base, rest)) => (base, rest),
            None => (line, ""),
        };
        log::debug!("dispatching `{base}`");

        let invocation = match CommandParser::parse(&self.registry, base, parameters) {
            Ok(invocation) => invocation,
            Err(error @ ParseError::UnknownBase { .. }) => {
                return format!("{error}\nTry `:commands` for a list.");
            }
            Err(error) => return error.to_string(),
        };

        match respond(&self.registry, &invocation) {
            Ok(reply) => reply,
            Err(error) => error.to_string(),
        }
    }

    /// Lists the registered base names.
    fn command_listing(&self) -> String {
        let mut names: Vec<&str> = self.registry.base_names().collect();
        names.sort_unstable();
        names.join(", ")
    }
}

/// Processes newline-separated commands from a reader, writing one reply
/// per non-empty line. Used for piped input.
///
/// # Errors
///
/// Returns an I/O error from the reader or writer.
pub fn run_batch<R: BufRead, W: Write>(
    registry: &CommandRegistry,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (base, parameters) = line.split_once(' ').unwrap_or((line, ""));
        let reply = match CommandParser::parse(registry, base, parameters) {
            Ok(invocation) => match respond(registry, &invocation) {
                Ok(reply) => reply,
                Err(error) => error.to_string(),
            },
            Err(error) => error.to_string(),
        };
        writeln!(output, "{reply}")?;
    }
    Ok(())
}
