use crate::domain::ports::Sink;
use crate::utils::error::Result;
use std::io::{self, Stdout, Write};

/// Line printer over any writer. Production uses stdout.
#[derive(Debug)]
pub struct Printer<W: Write> {
    out: W,
}

impl Printer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for Printer<W> {
    fn print(&mut self, value: &str) -> Result<()> {
        writeln!(self.out, "{}", value)?;
        self.out.flush()?;
        Ok(())
    }
}
