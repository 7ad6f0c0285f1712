// Input source handling for the jlisp-repl binary
// Interactive sessions go through the line editor; the other sources are read whole.

use clap::ValueEnum;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Input source types supported by jlisp-repl
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// Interactive REPL mode
    Interactive,
    /// Evaluate a string directly
    String,
    /// Evaluate a file, one expression line at a time
    File,
    /// Read from stdin pipe
    Pipe,
}

/// Where a non-interactive run takes its lines from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchInput {
    Text(String),
    File(PathBuf),
    Pipe,
}

/// Everything a batch source held, plus the name used in diagnostics
#[derive(Debug)]
pub struct InputContent {
    pub content: String,
    pub source_name: String,
}

impl InputContent {
    /// Non-blank lines with their 1-based line numbers
    pub fn expression_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.content
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("--file argument required when using --input file")]
    MissingFileArgument,

    #[error("--string argument required when using --input string")]
    MissingStringArgument,

    #[error("Error reading file '{}': {error}", .path.display())]
    FileReadError {
        path: PathBuf,
        #[source]
        error: io::Error,
    },

    #[error("Error reading from stdin: {0}")]
    StdinReadError(#[source] io::Error),
}

impl BatchInput {
    /// Resolve the command-line selection. `Ok(None)` means an interactive session.
    pub fn from_args(
        source: InputSource,
        file: Option<&Path>,
        text: Option<&str>,
    ) -> Result<Option<Self>, InputError> {
        let batch = match source {
            InputSource::Interactive => return Ok(None),
            InputSource::String => {
                BatchInput::Text(text.ok_or(InputError::MissingStringArgument)?.to_string())
            }
            InputSource::File => {
                BatchInput::File(file.ok_or(InputError::MissingFileArgument)?.to_path_buf())
            }
            InputSource::Pipe => BatchInput::Pipe,
        };
        Ok(Some(batch))
    }

    pub fn source_name(&self) -> String {
        match self {
            BatchInput::Text(_) => "<string>".to_string(),
            BatchInput::File(path) => path.display().to_string(),
            BatchInput::Pipe => "<stdin>".to_string(),
        }
    }

    pub fn read(&self) -> Result<InputContent, InputError> {
        let content = match self {
            BatchInput::Text(text) => text.clone(),
            BatchInput::File(path) => {
                fs::read_to_string(path).map_err(|error| InputError::FileReadError {
                    path: path.clone(),
                    error,
                })?
            }
            BatchInput::Pipe => {
                io::read_to_string(io::stdin().lock()).map_err(InputError::StdinReadError)?
            }
        };
        Ok(InputContent {
            content,
            source_name: self.source_name(),
        })
    }
}
