//! Prompt helpers for the interactive shell
//!
//! Each reader re-prompts until it gets a valid value. `Ok(None)` means
//! the user closed the input stream (Ctrl-C or Ctrl-D); callers treat
//! that as a request to exit.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Parse a task id: a positive integer, surrounding whitespace ignored
pub fn parse_task_id(input: &str) -> Option<u64> {
    input.trim().parse::<u64>().ok().filter(|id| *id > 0)
}

/// Read one raw line; `Ok(None)` on Ctrl-C / Ctrl-D
pub fn read_line(editor: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match editor.readline(prompt) {
        Ok(line) => {
            let _ = editor.add_history_entry(line.as_str());
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Read task text, re-prompting until it is non-empty after trimming
pub fn read_task_text(editor: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    loop {
        let Some(line) = read_line(editor, prompt)? else {
            return Ok(None);
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            println!("{}", "Task cannot be empty. Please enter some text.".red());
            continue;
        }
        return Ok(Some(trimmed.to_string()));
    }
}

/// Read a task id, re-prompting until it parses as a positive integer
pub fn read_task_id(editor: &mut DefaultEditor, prompt: &str) -> Result<Option<u64>> {
    loop {
        let Some(line) = read_line(editor, prompt)? else {
            return Ok(None);
        };
        match parse_task_id(&line) {
            Some(id) => return Ok(Some(id)),
            None => println!("{}", "Please enter a positive number.".red()),
        }
    }
}
