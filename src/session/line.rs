//! Line editor
//!
//! Accumulates raw input bytes into a bounded line buffer. Editing state
//! lives here; echo and erase output is the caller's concern, driven by
//! the returned action.

const BS: u8 = 0x08;
const DEL: u8 = 0x7F;

/// What the session should do after feeding one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    /// Byte consumed without visible effect (full buffer, or backspace on
    /// an empty line)
    Ignored,

    /// Byte appended; echo it back
    Echo(u8),

    /// Last byte removed; erase it on the terminal
    Erase,

    /// CR or LF: the buffered line is complete
    Submit,
}

/// Bounded input buffer with backspace handling
pub struct LineEditor {
    buf: Vec<u8>,
    capacity: usize,
}

impl LineEditor {
    /// Create an editor holding at most `capacity` bytes per line
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Feed one input byte
    ///
    /// Bytes arriving on a full buffer are dropped silently; the bound is
    /// defensive, not a reported failure.
    pub fn push(&mut self, byte: u8) -> LineAction {
        match byte {
            b'\r' | b'\n' => LineAction::Submit,
            BS | DEL => {
                if self.buf.pop().is_some() {
                    LineAction::Erase
                } else {
                    LineAction::Ignored
                }
            }
            _ if self.buf.len() < self.capacity => {
                self.buf.push(byte);
                LineAction::Echo(byte)
            }
            _ => LineAction::Ignored,
        }
    }

    /// The buffered line
    pub fn line(&self) -> &[u8] {
        &self.buf
    }

    /// Discard the buffered line
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}
