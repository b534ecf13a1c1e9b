//! REPL Module
//!
//! Reads one line at a time, runs the named command to completion, prints any
//! error and reads the next line. Only `exit` or end of input stops the loop.
//!
//! # Commands
//! - `help` - List commands
//! - `exit` - Leave the Pokedex
//! - `map` / `mapb` - Page forward / back through location areas
//! - `explore <area>` - List pokemon in an area
//! - `catch <pokemon>` - Try to catch a pokemon
//! - `inspect <pokemon>` - Show a caught pokemon
//! - `pokedex` - List caught pokemon

pub mod commands;
pub mod context;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::error::{PokedexError, Result};

pub use commands::{Command, Flow};
pub use context::Context;

/// Prompt printed before each line is read.
pub const PROMPT: &str = "Pokedex > ";

/// Runs the command loop until `exit` or end of input.
///
/// Command failures are printed to `out` and never end the loop; only I/O
/// failures on `input` or `out` are returned.
///
/// Lines are read as raw bytes and decoded lossily, so input that is not
/// valid UTF-8 reaches the command parser instead of failing the read.
pub async fn run<R, W>(ctx: &mut Context, mut input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send,
{
    let mut buf = Vec::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            writeln!(out)?;
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        match execute_line(ctx, &line, out).await {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(PokedexError::Io(err)) => return Err(PokedexError::Io(err)),
            Err(err) => {
                debug!(error = %err, line = %line.trim_end(), "Command failed");
                writeln!(out, "{}", err)?;
            }
        }
    }

    Ok(())
}

/// Parses and runs a single input line.
///
/// Blank lines do nothing.
pub async fn execute_line<W>(ctx: &mut Context, line: &str, out: &mut W) -> Result<Flow>
where
    W: Write + Send,
{
    let words = clean_input(line);
    let Some((name, args)) = words.split_first() else {
        return Ok(Flow::Continue);
    };

    let command =
        Command::parse(name).ok_or_else(|| PokedexError::UnknownCommand(name.clone()))?;
    command.execute(ctx, args, out).await
}

/// Lowercases the input and splits it on whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input() {
        let cases = [
            ("  hello  world  ", vec!["hello", "world"]),
            ("Charmander Bulbasaur PIKACHU", vec!["charmander", "bulbasaur", "pikachu"]),
            ("catch\tpidgey\n", vec!["catch", "pidgey"]),
            ("", vec![]),
            ("   ", vec![]),
        ];

        for (input, expected) in cases {
            assert_eq!(clean_input(input), expected, "input: {:?}", input);
        }
    }
}
