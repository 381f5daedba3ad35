//! Canal de console
//!
//! Protocolo orientado a linhas: `receive` imprime `input: ` e lê um inteiro
//! decimal; `send` imprime `output: <valor>`.

use crate::channel::Channel;
use crate::error::ChannelError;
use std::io::{self, BufRead, Write};

/// Prompt exibido antes de cada leitura
pub const INPUT_PROMPT: &str = "input: ";

/// Rótulo das linhas de saída
pub const OUTPUT_LABEL: &str = "output: ";

/// Canal interativo sobre um leitor e um escritor
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console sobre stdin/stdout do processo
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Cria console sobre `reader` e `writer`
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Devolve leitor e escritor
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Channel for Console<R, W> {
    fn send(&mut self, value: i64) -> Result<(), ChannelError> {
        writeln!(self.writer, "{OUTPUT_LABEL}{value}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn receive(&mut self) -> Result<i64, ChannelError> {
        write!(self.writer, "{INPUT_PROMPT}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ChannelError::Closed);
        }

        let trimmed = line.trim();
        trimmed
            .parse()
            .map_err(|_| ChannelError::Parse(trimmed.to_string()))
    }
}
