/*!
 * The decoder dispatcher and the per-protocol decoders.
 *
 * Every decoder is a pure function from a raw mark/space buffer to a
 * decoded command; a decoder that does not recognize the buffer declines
 * with `None` and leaves no trace. The dispatcher tries the decoders in a
 * fixed order and falls back to a fingerprint hash, so decoding as a whole
 * cannot fail.
 */

use crate::helicopter;
use crate::receive::Capture;
use crate::timing::{self, matches_mark, matches_space};
use crate::{Helicopter, Protocol, ProtocolSet, REPEAT};
use itertools::Itertools;
use log::{debug, trace};
use std::fmt;

/// The result of decoding a raw buffer.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Decoded {
    pub protocol: Protocol,
    /// The decoded value, or the fingerprint hash for `Protocol::Unknown`
    pub value: u32,
    /// Number of bits in the decoded value
    pub bits: u8,
    /// Set for repeat frames (NEC repeat header, headerless JVC frames)
    pub repeat: bool,
    /// Protocol specific interpretation of the value
    pub payload: Payload,
}

/// Protocol specific part of a decode result.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Payload {
    None,
    /// For protocols which split the value into a bus address and a command
    AddressCommand { address: u16, command: u32 },
    /// MagiQuest wand id plus swish magnitude
    Wand { id: u32, magnitude: u16 },
    /// Toy helicopter control axes
    Helicopter(Helicopter),
}

impl Decoded {
    fn new(protocol: Protocol, value: u32, bits: u8) -> Decoded {
        Decoded {
            protocol,
            value,
            bits,
            repeat: false,
            payload: Payload::None,
        }
    }
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "protocol {}, value 0x{:x}, bits {}",
            self.protocol, self.value, self.bits
        )?;

        if self.repeat {
            write!(f, ", repeat")?;
        }

        match &self.payload {
            Payload::None => Ok(()),
            Payload::AddressCommand { address, command } => {
                write!(f, ", address 0x{:02x}, command 0x{:02x}", address, command)
            }
            Payload::Wand { id, magnitude } => {
                write!(f, ", wand 0x{:08x}, magnitude {}", id, magnitude)
            }
            Payload::Helicopter(heli) => write!(f, ", {}", heli),
        }
    }
}

/// Decode a finished capture.
pub fn decode(capture: &Capture) -> Decoded {
    decode_raw(&capture.to_microseconds())
}

/// Decode a raw buffer of microsecond durations, trying every protocol.
pub fn decode_raw(raw: &[u32]) -> Decoded {
    decode_with(raw, ProtocolSet::all())
}

/// Decode a raw buffer, trying only the enabled protocols. The decoders
/// run in a fixed priority order: strictly framed protocols first, the
/// headerless ones (Sharp, Mitsubishi) last, and every decoder checks both
/// its header and its exact frame length, so loosely framed protocols do
/// not steal another protocol's signal. If no decoder accepts the buffer,
/// the fingerprint hash is returned under `Protocol::Unknown`.
pub fn decode_with(raw: &[u32], enabled: ProtocolSet) -> Decoded {
    type Decoder = fn(&[u32]) -> Option<Decoded>;

    const DECODERS: [(ProtocolSet, Decoder); 18] = [
        (ProtocolSet::NEC, try_nec),
        (ProtocolSet::SONY, try_sony),
        (ProtocolSet::SANYO, try_sanyo),
        (ProtocolSet::RC5, try_rc5),
        (ProtocolSet::RC6, try_rc6),
        (ProtocolSet::PANASONIC, try_panasonic),
        (ProtocolSet::LG, try_lg),
        (ProtocolSet::JVC, try_jvc),
        (ProtocolSet::SAMSUNG, try_samsung),
        (ProtocolSet::WHYNTER, try_whynter),
        (ProtocolSet::MAGIQUEST, try_magiquest),
        (ProtocolSet::SYMA_R5.union(ProtocolSet::SYMA_R3), try_syma),
        (ProtocolSet::FASTLANE, try_fastlane),
        (ProtocolSet::USERIES, try_useries),
        (ProtocolSet::FAKE_SYMA1, try_fake_syma1),
        (ProtocolSet::DISH, try_dish),
        (ProtocolSet::SHARP, try_sharp),
        (ProtocolSet::MITSUBISHI, try_mitsubishi),
    ];

    for (flags, decoder) in DECODERS {
        if !enabled.intersects(flags) {
            continue;
        }

        if let Some(decoded) = decoder(raw) {
            if enabled.contains(decoded.protocol.flag()) {
                debug!("decoded: {}", decoded);
                return decoded;
            }
        }
    }

    let hash = fingerprint(raw);

    trace!("no protocol matched, fingerprint 0x{:08x}", hash);

    Decoded::new(Protocol::Unknown, hash, 32)
}

/// Jitter-tolerant hash over the shape of a raw buffer. Consecutive
/// durations are reduced to shorter/equal/longer before they are folded
/// in, so uniform timing jitter does not change the fingerprint.
pub fn fingerprint(raw: &[u32]) -> u32 {
    const FNV_PRIME: u32 = 16_777_619;
    const FNV_BASIS: u32 = 2_166_136_261;

    raw.iter()
        .copied()
        .tuple_windows()
        .fold(FNV_BASIS, |hash, (a, b)| {
            hash.wrapping_mul(FNV_PRIME) ^ ternary(a, b)
        })
}

fn ternary(old: u32, new: u32) -> u32 {
    if (new as u64) * 10 < (old as u64) * 8 {
        0
    } else if (old as u64) * 10 < (new as u64) * 8 {
        2
    } else {
        1
    }
}

/// A full frame is `core` entries; one trailing gap entry is tolerated.
fn frame_len(raw: &[u32], core: usize) -> bool {
    raw.len() == core || raw.len() == core + 1
}

/// Reverse the low `bits` of an MSB-first accumulator, for protocols that
/// transmit least significant bit first.
fn reverse_lsb(acc: u32, bits: u8) -> u32 {
    acc.reverse_bits() >> (32 - bits as u32)
}

/// Cursor over a raw buffer, consuming one duration at a time.
struct Frame<'a> {
    raw: &'a [u32],
    pos: usize,
    tolerance: u32,
}

impl<'a> Frame<'a> {
    fn new(raw: &'a [u32], tolerance: u32) -> Frame<'a> {
        Frame {
            raw,
            pos: 0,
            tolerance,
        }
    }

    fn entry(&mut self) -> Option<u32> {
        let duration = *self.raw.get(self.pos)?;
        self.pos += 1;
        Some(duration)
    }

    fn mark(&mut self, expected: u32) -> Option<()> {
        let duration = self.entry()?;
        matches_mark(duration, expected, self.tolerance).then_some(())
    }

    fn space(&mut self, expected: u32) -> Option<()> {
        let duration = self.entry()?;
        matches_space(duration, expected, self.tolerance).then_some(())
    }

    /// Read `bits` pulse-distance bits, most significant first.
    fn pulse_distance(&mut self, bits: u8, mark: u32, one: u32, zero: u32) -> Option<u64> {
        let mut acc = 0u64;

        for _ in 0..bits {
            self.mark(mark)?;

            let space = self.entry()?;

            acc <<= 1;

            if matches_space(space, one, self.tolerance) {
                acc |= 1;
            } else if !matches_space(space, zero, self.tolerance) {
                return None;
            }
        }

        Some(acc)
    }

    /// Read `bits` pulse-width bits, most significant first.
    fn pulse_width(&mut self, bits: u8, one: u32, zero: u32, space: u32) -> Option<u64> {
        let mut acc = 0u64;

        for i in 0..bits {
            let mark = self.entry()?;

            acc <<= 1;

            if matches_mark(mark, one, self.tolerance) {
                acc |= 1;
            } else if !matches_mark(mark, zero, self.tolerance) {
                return None;
            }

            if i + 1 < bits {
                self.space(space)?;
            }
        }

        Some(acc)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Level {
    Mark,
    Space,
}

/// Splits a biphase buffer into a stream of half-bit units, carrying the
/// level of the current run across calls. A single entry can span several
/// units when adjacent halves share a level.
struct UnitReader<'a> {
    raw: &'a [u32],
    pos: usize,
    pending: usize,
    level: Level,
    unit: u32,
    tolerance: u32,
    max_width: usize,
    exhausted: bool,
}

impl<'a> UnitReader<'a> {
    fn new(raw: &'a [u32], unit: u32, tolerance: u32, max_width: usize) -> UnitReader<'a> {
        UnitReader {
            raw,
            pos: 0,
            pending: 0,
            level: Level::Space,
            unit,
            tolerance,
            max_width,
            exhausted: false,
        }
    }

    fn next_unit(&mut self) -> Option<Level> {
        if self.pending > 0 {
            self.pending -= 1;
            return Some(self.level);
        }

        if self.exhausted {
            return None;
        }

        if self.pos >= self.raw.len() {
            // the end of the capture reads as one final space half
            self.exhausted = true;
            return Some(Level::Space);
        }

        let duration = self.raw[self.pos];
        let level = if self.pos % 2 == 0 {
            Level::Mark
        } else {
            Level::Space
        };

        self.pos += 1;
        self.level = level;

        for width in 1..=self.max_width {
            let expected = self.unit * width as u32;

            let matched = match level {
                Level::Mark => matches_mark(duration, expected, self.tolerance),
                Level::Space => matches_space(duration, expected, self.tolerance),
            };

            if matched {
                self.pending = width - 1;
                return Some(level);
            }
        }

        // a long space at the end is the trailing gap swallowing the final
        // space half
        if level == Level::Space && duration > self.unit * (self.max_width as u32 + 1) {
            self.exhausted = true;
            return Some(Level::Space);
        }

        None
    }

    /// Read `width` consecutive units which must all share one level.
    fn run(&mut self, width: usize) -> Option<Level> {
        let level = self.next_unit()?;

        for _ in 1..width {
            if self.next_unit()? != level {
                return None;
            }
        }

        Some(level)
    }

    /// The buffer must be fully consumed, modulo one unread trailing gap.
    fn finish(&self) -> Option<()> {
        if self.pending > 0 {
            return None;
        }

        match self.raw.len() - self.pos {
            0 => Some(()),
            1 if self.pos % 2 == 1 => Some(()),
            _ => None,
        }
    }
}

fn try_nec(raw: &[u32]) -> Option<Decoded> {
    let t = &timing::NEC;
    let (header_mark, header_space) = t.header?;

    // the short repeat frame carries no payload at all
    if frame_len(raw, 3) {
        let mut f = Frame::new(raw, t.tolerance);

        f.mark(header_mark)?;
        f.space(timing::NEC_REPEAT_SPACE)?;
        f.mark(t.mark)?;

        let mut decoded = Decoded::new(Protocol::Nec, REPEAT, 0);
        decoded.repeat = true;
        return Some(decoded);
    }

    if !frame_len(raw, 67) {
        return None;
    }

    let mut f = Frame::new(raw, t.tolerance);

    f.mark(header_mark)?;
    f.space(header_space)?;

    let acc = f.pulse_distance(32, t.mark, t.one, t.zero)? as u32;

    f.mark(t.mark)?;

    // bytes travel in address, !address, command, !command order, least
    // significant bit of each byte first
    let value = acc.reverse_bits().swap_bytes();
    let b = value.to_be_bytes();

    let mut decoded = Decoded::new(Protocol::Nec, value, 32);

    if b[1] == !b[0] && b[3] == !b[2] {
        decoded.payload = Payload::AddressCommand {
            address: b[0] as u16,
            command: b[2] as u32,
        };
    }

    Some(decoded)
}

fn try_sony(raw: &[u32]) -> Option<Decoded> {
    let t = &timing::SONY;
    let (header_mark, header_space) = t.header?;

    for bits in [12u8, 15, 20] {
        if !frame_len(raw, 2 * bits as usize + 1) {
            continue;
        }

        let mut f = Frame::new(raw, t.tolerance);

        f.mark(header_mark)?;
        f.space(header_space)?;

        let acc = f.pulse_width(bits, t.one, t.zero, t.space)? as u32;

        // least significant bit travels first
        let value = reverse_lsb(acc, bits);

        let mut decoded = Decoded::new(Protocol::Sony, value, bits);
        decoded.payload = Payload::AddressCommand {
            address: (value >> 7) as u16,
            command: value & 0x7f,
        };

        return Some(decoded);
    }

    None
}

fn try_sanyo(raw: &[u32]) -> Option<Decoded> {
    let t = &timing::SANYO;
    let (header_mark, header_space) = t.header?;

    if !frame_len(raw, 25) {
        return None;
    }

    let mut f = Frame::new(raw, t.tolerance);

    f.mark(header_mark)?;
    f.space(header_space)?;

    let value = f.pulse_width(12, t.one, t.zero, t.space)? as u32;

    Some(Decoded::new(Protocol::Sanyo, value, 12))
}

fn try_mitsubishi(raw: &[u32]) -> Option<Decoded> {
    let t = &timing::MITSUBISHI;

    if !frame_len(raw, 31) {
        return None;
    }

    let mut f = Frame::new(raw, t.tolerance);

    let value = f.pulse_width(16, t.one, t.zero, t.space)? as u32;

    Some(Decoded::new(Protocol::Mitsubishi, value, 16))
}

fn try_rc5(raw: &[u32]) -> Option<Decoded> {
    let t = &timing::RC5;

    if raw.len() < 12 || raw.len() > 29 {
        return None;
    }

    let mut units = UnitReader::new(raw, t.unit, t.tolerance, 2);

    // only the mark half of the first start bit is observable
    if units.next_unit()? != Level::Mark {
        return None;
    }

    // field bit, toggle, five address and six command bits; a cell with the
    // transition into the mark half encodes a one
    let mut value = 0u32;

    for _ in 0..13 {
        let h1 = units.next_unit()?;
        let h2 = units.next_unit()?;

        if h1 == h2 {
            return None;
        }

        value = value << 1 | (h1 == Level::Space) as u32;
    }

    units.finish()?;

    let mut decoded = Decoded::new(Protocol::Rc5, value, 13);
    decoded.payload = Payload::AddressCommand {
        address: ((value >> 6) & 0x1f) as u16,
        command: value & 0x3f,
    };

    Some(decoded)
}

fn try_rc6(raw: &[u32]) -> Option<Decoded> {
    let t = &timing::RC6;
    let (leader_mark, leader_space) = t.leader?;

    if raw.len() < 8 {
        return None;
    }

    let mut f = Frame::new(raw, t.tolerance);

    f.mark(leader_mark)?;
    f.space(leader_space)?;

    let mut units = UnitReader::new(&raw[2..], t.unit, t.tolerance, 3);

    // start bit, always one: mark then space
    if units.next_unit()? != Level::Mark || units.next_unit()? != Level::Space {
        return None;
    }

    // three mode bits, the double-width toggle cell, address and command;
    // polarity is inverted relative to RC5
    let mut value = 0u32;

    for i in 0..20 {
        let width = if i == 3 { 2 } else { 1 };

        let h1 = units.run(width)?;
        let h2 = units.run(width)?;

        if h1 == h2 {
            return None;
        }

        value = value << 1 | (h1 == Level::Mark) as u32;
    }

    units.finish()?;

    let mut decoded = Decoded::new(Protocol::Rc6, value, 20);
    decoded.payload = Payload::AddressCommand {
        address: ((value >> 8) & 0xff) as u16,
        command: value & 0xff,
    };

    Some(decoded)
}

fn try_panasonic(raw: &[u32]) -> Option<Decoded> {
    let t = &timing::PANASONIC;
    let (header_mark, header_space) = t.header?;

    if !frame_len(raw, 99) {
        return None;
    }

    let mut f = Frame::new(raw, t.tolerance);

    f.mark(header_mark)?;
    f.space(header_space)?;

    let acc = f.pulse_distance(48, t.mark, t.one, t.zero)?;

    f.mark(t.mark)?;

    let address = (acc >> 32) as u16;
    let data = acc as u32;

    let mut decoded = Decoded::new(Protocol::Panasonic, data, 48);
    decoded.payload = Payload::AddressCommand {
        address,
        command: data,
    };

    Some(decoded)
}

fn try_lg(raw: &[u32]) -> Option<Decoded> {
    let t = &timing::LG;
    let (header_mark, header_space) = t.header?;

    if !frame_len(raw, 59) {
        return None;
    }

    let mut f = Frame::new(raw, t.tolerance);

    f.mark(header_mark)?;
    f.space(header_space)?;

    let value = f.pulse_distance(28, t.mark, t.one, t.zero)? as u32;

    f.mark(t.mark)?;

    let mut decoded = Decoded::new(Protocol::Lg, value, 28);
    decoded.payload = Payload::AddressCommand {
        address: ((value >> 20) & 0xff) as u16,
        command: (value >> 4) & 0xffff,
    };

    Some(decoded)
}

fn try_jvc(raw: &[u32]) -> Option<Decoded> {
    let t = &timing::JVC;
    let (header_mark, header_space) = t.header?;

    // repeat frames omit the header
    let repeat = if frame_len(raw, 35) {
        false
    } else if frame_len(raw, 33) {
        true
    } else {
        return None;
    };

    let mut f = Frame::new(raw, t.tolerance);

    if !repeat {
        f.mark(header_mark)?;
        f.space(header_space)?;
    }

    let value = f.pulse_distance(16, t.mark, t.one, t.zero)? as u32;

    f.mark(t.mark)?;

    let mut decoded = Decoded::new(Protocol::Jvc, value, 16);
    decoded.repeat = repeat;
    decoded.payload = Payload::AddressCommand {
        address: ((value >> 8) & 0xff) as u16,
        command: value & 0xff,
    };

    Some(decoded)
}

fn try_samsung(raw: &[u32]) -> Option<Decoded> {
    let t = &timing::SAMSUNG;
    let (header_mark, header_space) = t.header?;

    if !frame_len(raw, 67) {
        return None;
    }

    let mut f = Frame::new(raw, t.tolerance);

    f.mark(header_mark)?;
    f.space(header_space)?;

    let value = f.pulse_distance(32, t.mark, t.one, t.zero)? as u32;

    f.mark(t.mark)?;

    let b = value.to_be_bytes();

    let mut decoded = Decoded::new(Protocol::Samsung, value, 32);

    if b[0] == b[1] && b[3] == !b[2] {
        decoded.payload = Payload::AddressCommand {
            address: b[0] as u16,
            command: b[2] as u32,
        };
    }

    Some(decoded)
}

fn try_whynter(raw: &[u32]) -> Option<Decoded> {
    let t = &timing::WHYNTER;
    let (header_mark, header_space) = t.header?;

    if !frame_len(raw, 69) {
        return None;
    }

    let mut f = Frame::new(raw, t.tolerance);

    // the payload is bracketed by explicit zero bits
    f.mark(t.mark)?;
    f.space(t.zero)?;
    f.mark(header_mark)?;
    f.space(header_space)?;

    let value = f.pulse_distance(32, t.mark, t.one, t.zero)? as u32;

    f.mark(t.mark)?;

    Some(Decoded::new(Protocol::Whynter, value, 32))
}

fn try_magiquest(raw: &[u32]) -> Option<Decoded> {
    let t = &timing::MAGIQUEST;

    // 56 mark/space cells; the final space may be missing when the capture
    // was cut at the frame gap
    if raw.len() != 111 && raw.len() != 112 {
        return None;
    }

    let mut acc = 0u64;

    for i in 0..56 {
        let mark = *raw.get(2 * i)?;

        acc <<= 1;

        match raw.get(2 * i + 1) {
            Some(&space) => {
                if !timing::within(mark + space, t.cell, t.tolerance) {
                    return None;
                }

                if matches_mark(mark, t.one_mark, t.tolerance) {
                    acc |= 1;
                } else if !matches_mark(mark, t.zero_mark, t.tolerance) {
                    return None;
                }
            }
            None => {
                if matches_mark(mark, t.one_mark, t.tolerance) {
                    acc |= 1;
                } else if !matches_mark(mark, t.zero_mark, t.tolerance) {
                    return None;
                }
            }
        }
    }

    // eight bits of zero padding precede the wand id
    if acc >> 48 != 0 {
        return None;
    }

    let id = (acc >> 16) as u32;
    let magnitude = acc as u16;

    let mut decoded = Decoded::new(Protocol::MagiQuest, id, 56);
    decoded.payload = Payload::Wand { id, magnitude };

    Some(decoded)
}

fn try_syma(raw: &[u32]) -> Option<Decoded> {
    let t = &timing::SYMA;
    let (header_mark, header_space) = t.header?;

    // R5 frames carry 31 bits, R3 frames 23; the header is shared
    let (bits, protocol) = if frame_len(raw, 65) {
        (31u8, Protocol::SymaR5)
    } else if frame_len(raw, 49) {
        (23u8, Protocol::SymaR3)
    } else {
        return None;
    };

    let mut f = Frame::new(raw, t.tolerance);

    f.mark(header_mark)?;
    f.space(header_space)?;

    let value = f.pulse_distance(bits, t.mark, t.one, t.zero)? as u32;

    f.mark(t.mark)?;

    let heli = match protocol {
        Protocol::SymaR5 => helicopter::syma_r5(value)?,
        _ => helicopter::syma_r3(value)?,
    };

    let mut decoded = Decoded::new(protocol, value, bits);
    decoded.payload = Payload::Helicopter(heli);

    Some(decoded)
}

fn try_fastlane(raw: &[u32]) -> Option<Decoded> {
    let t = &timing::FASTLANE;
    let (header_mark, header_space) = t.header?;

    if !frame_len(raw, 49) {
        return None;
    }

    let mut f = Frame::new(raw, t.tolerance);

    f.mark(header_mark)?;
    f.space(header_space)?;

    let value = f.pulse_distance(23, t.mark, t.one, t.zero)? as u32;

    f.mark(t.mark)?;

    let mut decoded = Decoded::new(Protocol::FastLane, value, 23);
    decoded.payload = Payload::Helicopter(helicopter::fastlane(value));

    Some(decoded)
}

fn try_useries(raw: &[u32]) -> Option<Decoded> {
    let t = &timing::USERIES;
    let (header_mark, header_space) = t.header?;

    if !frame_len(raw, 67) {
        return None;
    }

    let mut f = Frame::new(raw, t.tolerance);

    f.mark(header_mark)?;
    f.space(header_space)?;

    let value = f.pulse_distance(32, t.mark, t.one, t.zero)? as u32;

    f.mark(t.mark)?;

    // a checksum mismatch fails the decode
    let heli = helicopter::useries(value)?;

    let mut decoded = Decoded::new(Protocol::USeries, value, 32);
    decoded.payload = Payload::Helicopter(heli);

    Some(decoded)
}

fn try_fake_syma1(raw: &[u32]) -> Option<Decoded> {
    let t = &timing::FAKE_SYMA1;
    let (header_mark, header_space) = t.header?;

    if !frame_len(raw, 63) {
        return None;
    }

    let mut f = Frame::new(raw, t.tolerance);

    f.mark(header_mark)?;
    f.space(header_space)?;

    let value = f.pulse_distance(30, t.mark, t.one, t.zero)? as u32;

    f.mark(t.mark)?;

    let heli = helicopter::fake_syma1(value)?;

    let mut decoded = Decoded::new(Protocol::FakeSyma1, value, 30);
    decoded.payload = Payload::Helicopter(heli);

    Some(decoded)
}

fn try_dish(raw: &[u32]) -> Option<Decoded> {
    let t = &timing::DISH;
    let (header_mark, header_space) = t.header?;

    if !frame_len(raw, 35) {
        return None;
    }

    let mut f = Frame::new(raw, t.tolerance);

    f.mark(header_mark)?;
    f.space(header_space)?;

    let value = f.pulse_distance(16, t.mark, t.one, t.zero)? as u32;

    f.mark(t.mark)?;

    Some(Decoded::new(Protocol::Dish, value, 16))
}

fn try_sharp(raw: &[u32]) -> Option<Decoded> {
    let t = &timing::SHARP;

    if !frame_len(raw, 63) {
        return None;
    }

    let mut f = Frame::new(raw, t.tolerance);

    let first = f.pulse_distance(15, t.mark, t.one, t.zero)? as u32;

    f.mark(t.mark)?;
    f.space(timing::SHARP_ECHO_SPACE)?;

    let second = f.pulse_distance(15, t.mark, t.one, t.zero)? as u32;

    f.mark(t.mark)?;

    // the echo frame inverts everything but the address; this is the only
    // error check the protocol has
    if second != first ^ 0x3ff {
        return None;
    }

    let mut decoded = Decoded::new(Protocol::Sharp, first, 15);
    decoded.payload = Payload::AddressCommand {
        address: ((first >> 10) & 0x1f) as u16,
        command: (first >> 2) & 0xff,
    };

    Some(decoded)
}
