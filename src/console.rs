use std::io::{self, BufRead, Write};

/// Line-based prompt/response channel over any reader and writer.
///
/// The binary wires this to stdin/stdout; tests feed a `Cursor` and capture
/// the output in a `Vec<u8>`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message` without a newline and read one line of input.
    ///
    /// Returns `None` at end of input. The trailing line break is removed,
    /// any other whitespace is left for the caller.
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(|c| c == '\r' || c == '\n').len();
        line.truncate(len);
        Ok(Some(line))
    }

    pub fn println(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", message.as_ref())
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
