//! This library decodes consumer infrared remote control signals, captured
//! as alternating mark/space durations, into protocol commands, and encodes
//! commands back into transmission-ready timing sequences. It understands
//! the common consumer protocols (NEC, Sony, RC5, RC6, Panasonic, JVC,
//! Samsung, LG, Sharp, DISH, Whynter, Sanyo, Mitsubishi), the MagiQuest
//! wand and a family of toy helicopter remotes with packed bit-field
//! payloads.
//!
//! Decoding never fails: when no protocol matches, a jitter-tolerant
//! fingerprint hash of the buffer shape is returned under the `unknown`
//! protocol, so repeated presses of an unrecognized remote still produce a
//! stable, comparable value.
//!
//! ## Encoding and decoding a frame
//!
//! ```
//! use irproto::{decode_raw, Payload, Protocol};
//!
//! let message = irproto::encode::nec(0x04FB08F7, 32).expect("encode should succeed");
//! let decoded = decode_raw(&message.raw);
//!
//! assert_eq!(decoded.protocol, Protocol::Nec);
//! assert_eq!(decoded.value, 0x04FB08F7);
//! assert_eq!(decoded.bits, 32);
//! assert_eq!(
//!     decoded.payload,
//!     Payload::AddressCommand { address: 0x04, command: 0x08 }
//! );
//! ```
//!
//! ## Parsing captured text
//!
//! Raw IR strings of the form `+9000 -4500 +560` and lirc mode2 pulse/space
//! files can both be parsed and fed to the decoder:
//!
//! ```
//! let raw = irproto::rawir::parse("+9000 -4500 +560").expect("parse should succeed");
//! assert_eq!(raw, vec![9000, 4500, 560]);
//! ```

pub mod encode;
pub mod mode2;
pub mod rawir;

mod decode;
mod helicopter;
mod protocols;
mod receive;
mod timing;
mod transmit;

pub use decode::{decode, decode_raw, decode_with, fingerprint, Decoded, Payload};
pub use helicopter::Helicopter;
pub use protocols::{Protocol, ProtocolSet};
pub use receive::{Capture, Receiver};
pub use transmit::{transmit, Transmitter};

/// Length bound of a raw capture buffer, in entries.
pub const RAW_CAPACITY: usize = 120;

/// Duration of one capture tick in microseconds.
pub const USEC_PER_TICK: u32 = 50;

/// Decoded value of an NEC repeat frame.
pub const REPEAT: u32 = 0xffff_ffff;

/// An encoded raw infrared message
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Message {
    /// The carrier in Hz, if known
    pub carrier: Option<u32>,
    /// The duty cycle if known. Between 1% and 99%
    pub duty_cycle: Option<u8>,
    /// The mark and space durations in microseconds. All even entries are
    /// marks, odd are spaces
    pub raw: Vec<u32>,
}

impl Message {
    /// Create an empty message
    pub fn new() -> Self {
        Message {
            carrier: None,
            duty_cycle: None,
            raw: Vec::new(),
        }
    }

    /// Concatenate two messages
    pub fn extend(&mut self, other: &Message) {
        if self.carrier.is_none() {
            self.carrier = other.carrier;
        }

        if self.duty_cycle.is_none() {
            self.duty_cycle = other.duty_cycle;
        }

        self.raw.extend_from_slice(&other.raw);
    }

    /// Do we have a trailing gap
    pub fn has_trailing_gap(&self) -> bool {
        let len = self.raw.len();

        len > 0 && (len % 2) == 0
    }

    /// Remove any trailing gap
    pub fn remove_trailing_gap(&mut self) {
        if self.has_trailing_gap() {
            self.raw.pop();
        }
    }

    /// Print the mark and space durations as a raw ir string
    pub fn print_rawir(&self) -> String {
        rawir::print_to_string(&self.raw)
    }

    /// Parse a raw IR string of the form `+9000 -4500 +560`
    pub fn parse(s: &str) -> Result<Self, String> {
        let raw = rawir::parse(s)?;

        Ok(Message {
            carrier: None,
            duty_cycle: None,
            raw,
        })
    }

    /// Parse lirc mode2 pulse/space text
    pub fn parse_mode2(s: &str) -> Result<Self, String> {
        mode2::parse(s)
    }
}

impl Default for Message {
    fn default() -> Self {
        Message::new()
    }
}
