//! Session Module
//!
//! Drives one interactive session over a character stream: bytes in, the
//! line editor, the parser, the engine, rendered responses out.
//!
//! ## Responsibilities
//! - Read the stream one byte at a time
//! - Echo input and emit erase sequences
//! - Hand completed lines to parser and engine
//! - Render responses and re-display the prompt
//!
//! One byte is fully processed (including, on line termination, the whole
//! parse + dispatch + store scan) before the next is accepted. Long
//! operations block the input path for their duration; that trade-off is
//! part of the design.

mod line;

pub use line::{LineAction, LineEditor};

use std::io::{ErrorKind, Read, Write};

use crate::config::Config;
use crate::engine::Engine;
use crate::error::{NvError, Result};
use crate::protocol::{parse_line, Response};
use crate::storage::ByteStore;

/// Erase sequence: back, overwrite with a space, back again
const ERASE: &[u8] = &[0x08, b' ', 0x08];

/// One interactive session over an input/output byte stream pair
pub struct Session<R: Read, W: Write, S: ByteStore> {
    reader: R,
    writer: W,
    engine: Engine<S>,
    editor: LineEditor,
    prompt: String,
}

impl<R: Read, W: Write, S: ByteStore> Session<R, W, S> {
    /// Create a session; `config` supplies the prompt and line capacity
    pub fn new(reader: R, writer: W, engine: Engine<S>, config: &Config) -> Self {
        Self {
            reader,
            writer,
            engine,
            editor: LineEditor::new(config.line_capacity),
            prompt: config.prompt.clone(),
        }
    }

    /// Run until the input stream ends
    ///
    /// Starts by emitting the full dump and the prompt, then processes one
    /// byte at a time. Protocol failures are reported on the stream and
    /// the session continues; only transport errors return `Err`.
    pub fn run(&mut self) -> Result<()> {
        let dump = self.engine.dump()?;
        self.writer.write_all(dump.as_bytes())?;
        write!(self.writer, "{}", self.prompt)?;
        self.writer.flush()?;

        loop {
            let byte = match self.read_byte()? {
                Some(byte) => byte,
                None => {
                    tracing::debug!("input stream closed");
                    return Ok(());
                }
            };
            self.handle_byte(byte)?;
        }
    }

    /// Borrow the engine (state inspection after a scripted run)
    pub fn engine(&self) -> &Engine<S> {
        &self.engine
    }

    fn handle_byte(&mut self, byte: u8) -> Result<()> {
        match self.editor.push(byte) {
            LineAction::Echo(byte) => self.writer.write_all(&[byte])?,
            LineAction::Erase => self.writer.write_all(ERASE)?,
            LineAction::Ignored => {}
            LineAction::Submit => {
                let response = self.dispatch()?;
                self.editor.clear();
                response.render(&mut self.writer)?;
                write!(self.writer, "\r\n{}", self.prompt)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Parse and execute the buffered line, folding recoverable failures
    /// into their wire responses
    fn dispatch(&mut self) -> Result<Response> {
        let line = self.editor.line();
        tracing::debug!("line: {:?}", String::from_utf8_lossy(line));

        let command = match parse_line(line) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!("rejected input: {}", e);
                return Ok(Response::BadInput);
            }
        };

        match self.engine.execute(command) {
            Ok(response) => Ok(response),
            Err(NvError::Store(e)) => Ok(Response::from(e)),
            Err(NvError::Malformed { addr }) => {
                tracing::warn!("malformed record at {:#06X}", addr);
                Ok(Response::Corrupted)
            }
            Err(e) => Err(e),
        }
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}
