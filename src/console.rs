//! Console abstraction for the interactive prompt/read/print sequence.
//!
//! Both calculators talk to a [`Console`] instead of stdin/stdout directly,
//! so their logic runs unchanged against in-memory buffers in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Prompt, read and print operations used by the calculators.
pub trait Console {
    /// Write prompt text without a trailing newline and flush it.
    fn prompt(&mut self, text: &str) -> io::Result<()>;

    /// Write a full output line.
    fn print_line(&mut self, text: &str) -> io::Result<()>;

    /// Next whitespace-delimited token, reading more lines as needed.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_token(&mut self) -> io::Result<Option<String>>;

    /// Next full line without its line terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// [`Console`] over any buffered reader and writer.
pub struct StreamConsole<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
    prompts: bool,
}

impl StreamConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console wired to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
            prompts: true,
        }
    }

    /// Enable or disable prompt output. Result lines are always written.
    pub fn with_prompts(mut self, prompts: bool) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Invalid UTF-8 decodes to U+FFFD, which then fails numeric parsing
    /// like any other garbage token.
    fn next_raw_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn prompt(&mut self, text: &str) -> io::Result<()> {
        if !self.prompts {
            return Ok(());
        }
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()
    }

    fn read_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            match self.next_raw_line()? {
                Some(line) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_owned)),
                None => return Ok(None),
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.pending.clear();
        self.next_raw_line()
    }
}
