//! REPL - console conversation with the support bot
//!
//! Reads one utterance per line and prints the engine's reply. `exit` (any case)
//! or end of input stops the loop.

use owo_colors::OwoColorize;
use solace_shared::{DialogueEngine, Matcher};
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const WELCOME: &str = "Welcome to the Mental Health Support Bot. Type 'exit' to quit.";

pub const BOT_LABEL: &str = "MentalHealthBot";

/// Whether a line asks to leave the conversation
pub fn is_exit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("exit")
}

/// Format one bot reply line
pub fn format_reply(reply: &str, color: bool) -> String {
    if color {
        format!("{}: {}", BOT_LABEL.green().bold(), reply)
    } else {
        format!("{}: {}", BOT_LABEL, reply)
    }
}

/// Run the conversation loop; returns how many replies were given
pub fn run<M, R, W>(engine: &DialogueEngine<M>, input: R, mut output: W, color: bool) -> io::Result<usize>
where
    M: Matcher,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;

    let mut replies = 0;
    let mut lines = input.lines();

    loop {
        write!(output, "You: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;

        if is_exit(&line) {
            break;
        }

        let reply = engine.respond(&line);
        writeln!(output, "{}", format_reply(&reply, color))?;
        replies += 1;
    }

    debug!("REPL finished after {} replies", replies);
    Ok(replies)
}
