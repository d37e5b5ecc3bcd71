//! Read/print loop feeding input lines to the task manager

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::task::TaskManager;

/// Line that ends a session. It is never passed to the interpreter.
pub const QUIT: &str = "quit";

/// Drive `manager` with lines from `input` until `quit` or end of input.
///
/// `prompt` is written and flushed before every read; pass `None` to
/// disable it (e.g. when replaying a script).
pub fn run_session<R: BufRead, W: Write>(
    manager: &mut TaskManager,
    mut input: R,
    mut output: W,
    prompt: Option<&str>,
) -> Result<()> {
    let mut buf = String::new();

    loop {
        if let Some(prompt) = prompt {
            write!(output, "{}", prompt)?;
            output.flush()?;
        }

        buf.clear();
        let read = input
            .read_line(&mut buf)
            .context("Failed to read command")?;
        if read == 0 {
            tracing::debug!("End of input, closing session");
            break;
        }

        let line = buf.trim_end_matches(['\n', '\r']);
        if line == QUIT {
            break;
        }

        for out in manager.execute(line) {
            writeln!(output, "{}", out)?;
        }
        output.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str, prompt: Option<&str>) -> Result<String> {
        let mut manager = TaskManager::new();
        let mut output = Vec::new();
        run_session(&mut manager, Cursor::new(input), &mut output, prompt)?;
        Ok(String::from_utf8(output)?)
    }

    #[test]
    fn test_stops_at_quit() -> Result<()> {
        let output = session("add project p\nquit\nshow\n", None)?;
        assert_eq!(output, "");
        Ok(())
    }

    #[test]
    fn test_stops_at_end_of_input() -> Result<()> {
        let output = session("add project p\nshow", None)?;
        assert_eq!(output, "p\n\n");
        Ok(())
    }

    #[test]
    fn test_prompt_before_each_read() -> Result<()> {
        let output = session("bogus\r\nquit\n", Some("> "))?;
        assert_eq!(
            output,
            "> I don't know what the command \"bogus\" is.\n> "
        );
        Ok(())
    }

    #[test]
    fn test_empty_line_is_unknown_command() -> Result<()> {
        let output = session("\nquit\n", None)?;
        assert_eq!(output, "I don't know what the command \"\" is.\n");
        Ok(())
    }
}
