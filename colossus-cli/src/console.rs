use anyhow::Context;
use std::io::{BufRead, Write};

/// Line-oriented operator console over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text).context("failed to write to console")
    }

    /// Print `text` without a newline and read the reply. `None` once input
    /// is exhausted.
    pub fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", text).context("failed to write to console")?;
        self.output.flush().context("failed to flush console")?;

        // Replies that are not UTF-8 decode lossily and reach the menus as text.
        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("failed to read from console")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// First non-blank character of a reply, lowercased.
pub fn menu_choice(reply: &str) -> Option<char> {
    reply.chars().find(|c| !c.is_whitespace()).map(|c| c.to_ascii_lowercase())
}
