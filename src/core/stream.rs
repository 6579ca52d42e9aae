//! Streaming validation and filtering of newline-terminated entries.
//!
//! A byte-fed state machine classifies each line against the entry grammar
//! without buffering more than one bounded line at a time, so arbitrarily
//! large inputs and arbitrary read-chunk boundaries are fine. Unlike the
//! in-memory parser, the line grammar accepts masks in [1, 32].

use std::io::{
    Read,
    Write,
};

use {
    Error,
    Result,
};

/// Number of bytes requested from the source per refill.
pub const READ_BUFFER_LEN: usize = 64 * 1024;

/// Upper bound on the length of a retained line, terminators included. The
/// longest well-formed line is 18 bytes; anything past this cap is invalid.
pub const MAX_LINE_LEN: usize = 34;

const OUT_BUFFER_LEN: usize = 4096;

/// States of the per-byte line machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    AfterComma,
    SeekingDigit,
    SeekingDot,
    SeekingOctetDot,
    SeekingMasklessTerminal,
    SeekingMaskDigit,
    SeekingMaskTerminal,
    SeekingNewline,
    Invalid,
}

/// Classifies newline-terminated lines one byte at a time.
struct LineMachine {
    state: State,
    octet: u32,
    n_octets: u8,
    comma_valid: bool,
    midline: bool,
}

impl LineMachine {
    fn new() -> LineMachine {
        LineMachine {
            state: State::Start,
            octet: 0,
            n_octets: 0,
            comma_valid: true,
            midline: false,
        }
    }

    /// Feeds one byte. Returns the validity of the completed line if the
    /// byte terminated one.
    fn advance(&mut self, byte: u8) -> Option<bool> {
        if byte == b'\n' {
            let valid = self.terminal_eligible();
            self.reset();
            return Some(valid);
        }

        self.midline = true;
        self.state = self.transition(byte);
        None
    }

    /// Condemns the current line regardless of its remaining bytes.
    fn invalidate(&mut self) {
        self.state = State::Invalid;
    }

    /// Checks if any byte of a line has been consumed since the last
    /// terminator.
    fn midline(&self) -> bool {
        self.midline
    }

    /// Checks if a line ending at the current state is well formed.
    fn terminal_eligible(&self) -> bool {
        match self.state {
            State::Start
            | State::SeekingNewline
            | State::SeekingMasklessTerminal
            | State::SeekingMaskTerminal => true,
            _ => false,
        }
    }

    fn reset(&mut self) {
        self.state = State::Start;
        self.octet = 0;
        self.n_octets = 0;
        self.comma_valid = true;
        self.midline = false;
    }

    fn transition(&mut self, byte: u8) -> State {
        match self.state {
            State::Start | State::AfterComma | State::SeekingDigit => self.begin_octet(byte),
            State::SeekingDot => self.read_dot(byte),
            State::SeekingOctetDot => match byte {
                b'0' ..= b'9' => {
                    self.octet = 10 * self.octet + u32::from(byte - b'0');
                    if self.octet > 255 {
                        State::Invalid
                    } else {
                        State::SeekingOctetDot
                    }
                }
                b'.' => self.read_dot(byte),
                _ => State::Invalid,
            },
            State::SeekingMasklessTerminal => match byte {
                b'0' ..= b'9' => {
                    self.octet = 10 * self.octet + u32::from(byte - b'0');
                    if self.octet > 255 {
                        State::Invalid
                    } else {
                        State::SeekingMasklessTerminal
                    }
                }
                b'/' => State::SeekingMaskDigit,
                b',' if self.comma_valid => {
                    self.comma_valid = false;
                    State::AfterComma
                }
                b'\r' => State::SeekingNewline,
                _ => State::Invalid,
            },
            State::SeekingMaskDigit => match byte {
                // A leading zero is not a valid mask digit.
                b'1' ..= b'9' => {
                    self.octet = u32::from(byte - b'0');
                    State::SeekingMaskTerminal
                }
                _ => State::Invalid,
            },
            State::SeekingMaskTerminal => match byte {
                b'0' ..= b'9' => {
                    self.octet = 10 * self.octet + u32::from(byte - b'0');
                    if self.octet > 32 {
                        State::Invalid
                    } else {
                        State::SeekingMaskTerminal
                    }
                }
                b',' if self.comma_valid => {
                    self.comma_valid = false;
                    State::AfterComma
                }
                b'\r' => State::SeekingNewline,
                _ => State::Invalid,
            },
            State::SeekingNewline => State::Invalid,
            State::Invalid => State::Invalid,
        }
    }

    fn begin_octet(&mut self, byte: u8) -> State {
        match self.state {
            State::Start | State::AfterComma => self.n_octets = 0,
            _ => {}
        }

        match byte {
            b'0' ..= b'9' => {
                self.octet = u32::from(byte - b'0');
                self.n_octets += 1;
                if self.n_octets == 4 {
                    State::SeekingMasklessTerminal
                } else {
                    State::SeekingOctetDot
                }
            }
            _ => State::Invalid,
        }
    }

    fn read_dot(&mut self, byte: u8) -> State {
        if byte != b'.' || self.n_octets >= 4 {
            State::Invalid
        } else {
            State::SeekingDigit
        }
    }
}

/// Reports the 1-based line numbers of the first n invalid lines of the
/// stream.
///
/// An unterminated final line is classified as if a newline followed the
/// last byte. IO errors from the source propagate to the caller.
pub fn validate_stream<R: Read>(mut source: R, n: usize) -> Result<Vec<u64>> {
    if n == 0 {
        return Err(Error::BadArgument("n must be strictly positive"));
    }

    let mut machine = LineMachine::new();
    let mut invalid = Vec::new();
    let mut line_number: u64 = 1;
    let mut buffer = vec![0; READ_BUFFER_LEN];

    loop {
        let len = source.read(&mut buffer)?;
        if len == 0 {
            break;
        }

        for &byte in &buffer[.. len] {
            if let Some(valid) = machine.advance(byte) {
                if !valid {
                    invalid.push(line_number);
                    if invalid.len() >= n {
                        return Ok(invalid);
                    }
                }
                line_number += 1;
            }
        }
    }

    if machine.midline() {
        if let Some(false) = machine.advance(b'\n') {
            invalid.push(line_number);
        }
    }

    Ok(invalid)
}

/// Copies the stream to the sink, preserving only well formed lines along
/// with their terminators.
///
/// A line longer than MAX_LINE_LEN bytes is discarded no matter how it would
/// have classified. A residual valid final line is flushed without a
/// synthesized terminator.
pub fn strip_invalid<R: Read, W: Write>(mut source: R, mut sink: W) -> Result<()> {
    let mut machine = LineMachine::new();
    let mut buffer = vec![0; READ_BUFFER_LEN];
    let mut line = [0; MAX_LINE_LEN];
    let mut line_len = 0;
    let mut out = Vec::with_capacity(OUT_BUFFER_LEN);
    let mut line_number: u64 = 1;

    loop {
        let len = source.read(&mut buffer)?;
        if len == 0 {
            break;
        }

        for &byte in &buffer[.. len] {
            if line_len == MAX_LINE_LEN {
                machine.invalidate();
            } else {
                line[line_len] = byte;
                line_len += 1;
            }

            if let Some(valid) = machine.advance(byte) {
                if valid {
                    out.extend_from_slice(&line[.. line_len]);
                    if OUT_BUFFER_LEN - out.len() < MAX_LINE_LEN {
                        sink.write_all(&out)?;
                        out.clear();
                    }
                } else {
                    debug!("Dropping invalid line {}.", line_number);
                }
                line_len = 0;
                line_number += 1;
            }
        }
    }

    if machine.midline() {
        if let Some(true) = machine.advance(b'\n') {
            out.extend_from_slice(&line[.. line_len]);
        }
    }

    if !out.is_empty() {
        sink.write_all(&out)?;
    }

    Ok(())
}
