/*!
 * The per-protocol encoders.
 *
 * Each entry point renders a value into a transmission-ready [`Message`]
 * using the same timing table its decoder reads, so a frame always
 * survives an encode/decode round trip. Invalid bit counts and values that
 * do not fit the requested width are rejected, never truncated.
 */

use crate::timing::{self, PulseDistanceTiming, PulseWidthTiming};
use crate::{Message, Protocol};
use bitvec::prelude::*;
use num_integer::Integer;

/// Builds an alternating mark/space sequence, folding adjacent runs of the
/// same level into a single entry.
struct PulseTrain {
    raw: Vec<u32>,
}

impl PulseTrain {
    fn new() -> PulseTrain {
        PulseTrain { raw: Vec::new() }
    }

    fn mark(&mut self, usec: u32) {
        if self.raw.len().is_even() {
            self.raw.push(usec);
        } else if let Some(last) = self.raw.last_mut() {
            *last += usec;
        }
    }

    fn space(&mut self, usec: u32) {
        if self.raw.len().is_odd() {
            self.raw.push(usec);
        } else if let Some(last) = self.raw.last_mut() {
            *last += usec;
        }
        // a leading space is not observable and is dropped
    }

    fn into_message(self, carrier_khz: u32) -> Message {
        Message {
            carrier: Some(carrier_khz * 1000),
            duty_cycle: None,
            raw: self.raw,
        }
    }
}

fn check_fits(data: u32, bits: u8) -> Result<(), String> {
    if bits < 32 && data >> bits != 0 {
        Err(format!("value 0x{:x} does not fit in {} bits", data, bits))
    } else {
        Ok(())
    }
}

/// Emit pulse-distance bits in the order of the bit slice.
fn pulse_distance<O: BitOrder>(
    train: &mut PulseTrain,
    t: &PulseDistanceTiming,
    bits: &BitSlice<u32, O>,
) {
    for bit in bits.iter().by_vals() {
        train.mark(t.mark);
        train.space(if bit { t.one } else { t.zero });
    }
}

/// Emit pulse-width bits in the order of the bit slice.
fn pulse_width<O: BitOrder>(train: &mut PulseTrain, t: &PulseWidthTiming, bits: &BitSlice<u32, O>) {
    for bit in bits.iter().by_vals() {
        train.mark(if bit { t.one } else { t.zero });
        train.space(t.space);
    }
}

/// NEC, 32 bits: address, inverted address, command, inverted command,
/// least significant bit of each byte first.
pub fn nec(data: u32, bits: u8) -> Result<Message, String> {
    if bits != 32 {
        return Err(format!("nec frames are 32 bits, not {}", bits));
    }

    let t = &timing::NEC;
    let mut train = PulseTrain::new();

    if let Some((header_mark, header_space)) = t.header {
        train.mark(header_mark);
        train.space(header_space);
    }

    let wire = data.swap_bytes();
    pulse_distance(&mut train, t, &wire.view_bits::<Lsb0>()[..32]);

    train.mark(t.mark);
    train.space(t.gap);

    Ok(train.into_message(t.carrier_khz))
}

/// The short NEC repeat frame, sent while a key is held.
pub fn nec_repeat() -> Message {
    let t = &timing::NEC;
    let mut train = PulseTrain::new();

    if let Some((header_mark, _)) = t.header {
        train.mark(header_mark);
    }
    train.space(timing::NEC_REPEAT_SPACE);
    train.mark(t.mark);
    train.space(t.gap);

    train.into_message(t.carrier_khz)
}

/// Sony, 12, 15 or 20 bits, least significant bit first.
pub fn sony(data: u32, bits: u8) -> Result<Message, String> {
    if !matches!(bits, 12 | 15 | 20) {
        return Err(format!("sony frames are 12, 15 or 20 bits, not {}", bits));
    }
    check_fits(data, bits)?;

    let t = &timing::SONY;
    let mut train = PulseTrain::new();

    if let Some((header_mark, header_space)) = t.header {
        train.mark(header_mark);
        train.space(header_space);
    }

    pulse_width(&mut train, t, &data.view_bits::<Lsb0>()[..bits as usize]);

    train.space(t.gap);

    Ok(train.into_message(t.carrier_khz))
}

/// RC5, 13 bits: field bit, toggle, five address and six command bits.
/// Only the mark half of the leading start bit is emitted; its space half
/// is idle air.
pub fn rc5(data: u32, bits: u8) -> Result<Message, String> {
    if bits != 13 {
        return Err(format!("rc5 frames are 13 bits, not {}", bits));
    }
    check_fits(data, bits)?;

    let t = &timing::RC5;
    let mut train = PulseTrain::new();

    train.mark(t.unit);

    for bit in data.view_bits::<Msb0>()[32 - bits as usize..].iter().by_vals() {
        if bit {
            train.space(t.unit);
            train.mark(t.unit);
        } else {
            train.mark(t.unit);
            train.space(t.unit);
        }
    }

    train.space(t.gap);

    Ok(train.into_message(t.carrier_khz))
}

/// RC6 mode 0, 20 bits: three mode bits, the toggle in a double-width
/// cell, then address and command. Cell polarity is inverted relative to
/// RC5.
pub fn rc6(data: u32, bits: u8) -> Result<Message, String> {
    if bits != 20 {
        return Err(format!("rc6 frames are 20 bits, not {}", bits));
    }
    check_fits(data, bits)?;

    let t = &timing::RC6;
    let mut train = PulseTrain::new();

    if let Some((leader_mark, leader_space)) = t.leader {
        train.mark(leader_mark);
        train.space(leader_space);
    }

    // start bit, always one
    train.mark(t.unit);
    train.space(t.unit);

    for (i, bit) in data.view_bits::<Msb0>()[32 - bits as usize..]
        .iter()
        .by_vals()
        .enumerate()
    {
        let half = if i == 3 { 2 * t.unit } else { t.unit };

        if bit {
            train.mark(half);
            train.space(half);
        } else {
            train.space(half);
            train.mark(half);
        }
    }

    train.space(t.gap);

    Ok(train.into_message(t.carrier_khz))
}

/// DISH, 16 bits, on a 56 kHz carrier.
pub fn dish(data: u32, bits: u8) -> Result<Message, String> {
    if bits != 16 {
        return Err(format!("dish frames are 16 bits, not {}", bits));
    }
    check_fits(data, bits)?;

    pulse_distance_frame(&timing::DISH, data, bits)
}

/// Sharp, by address and command. The inverted echo frame the protocol
/// requires is appended automatically.
pub fn sharp(address: u8, command: u8) -> Result<Message, String> {
    if address > 0x1f {
        return Err(format!("sharp address 0x{:x} does not fit in 5 bits", address));
    }

    // expansion 1, check 0
    sharp_raw(((address as u32) << 10) | ((command as u32) << 2) | 0b10, 15)
}

/// Sharp, 15 bits as given: five address bits, eight command bits,
/// expansion and check. The echo frame is appended automatically.
pub fn sharp_raw(data: u32, bits: u8) -> Result<Message, String> {
    if bits != 15 {
        return Err(format!("sharp frames are 15 bits, not {}", bits));
    }
    check_fits(data, bits)?;

    let t = &timing::SHARP;
    let mut train = PulseTrain::new();

    pulse_distance(&mut train, t, &data.view_bits::<Msb0>()[32 - bits as usize..]);
    train.mark(t.mark);
    train.space(timing::SHARP_ECHO_SPACE);

    // everything but the address travels inverted the second time
    let echo = data ^ 0x3ff;

    pulse_distance(&mut train, t, &echo.view_bits::<Msb0>()[32 - bits as usize..]);
    train.mark(t.mark);
    train.space(t.gap);

    Ok(train.into_message(t.carrier_khz))
}

/// Panasonic, 48 bits: a 16 bit bus address followed by 32 data bits.
pub fn panasonic(address: u16, data: u32) -> Result<Message, String> {
    let t = &timing::PANASONIC;
    let mut train = PulseTrain::new();

    if let Some((header_mark, header_space)) = t.header {
        train.mark(header_mark);
        train.space(header_space);
    }

    pulse_distance(&mut train, t, &(address as u32).view_bits::<Msb0>()[16..]);
    pulse_distance(&mut train, t, &data.view_bits::<Msb0>()[..32]);

    train.mark(t.mark);
    train.space(t.gap);

    Ok(train.into_message(t.carrier_khz))
}

/// JVC, 16 bits. Repeats are sent by omitting the header, not by a
/// distinct repeat code, so the repeat form is an explicit mode here.
pub fn jvc(data: u32, bits: u8, repeat: bool) -> Result<Message, String> {
    if bits != 16 {
        return Err(format!("jvc frames are 16 bits, not {}", bits));
    }
    check_fits(data, bits)?;

    let t = &timing::JVC;
    let mut train = PulseTrain::new();

    if !repeat {
        if let Some((header_mark, header_space)) = t.header {
            train.mark(header_mark);
            train.space(header_space);
        }
    }

    pulse_distance(&mut train, t, &data.view_bits::<Msb0>()[32 - bits as usize..]);

    train.mark(t.mark);
    train.space(t.gap);

    Ok(train.into_message(t.carrier_khz))
}

/// LG, 28 bits.
pub fn lg(data: u32, bits: u8) -> Result<Message, String> {
    if bits != 28 {
        return Err(format!("lg frames are 28 bits, not {}", bits));
    }
    check_fits(data, bits)?;

    pulse_distance_frame(&timing::LG, data, bits)
}

/// Samsung, 32 bits.
pub fn samsung(data: u32, bits: u8) -> Result<Message, String> {
    if bits != 32 {
        return Err(format!("samsung frames are 32 bits, not {}", bits));
    }

    pulse_distance_frame(&timing::SAMSUNG, data, bits)
}

/// Whynter, 32 bits, with the zero bit brackets the original devices send.
pub fn whynter(data: u32, bits: u8) -> Result<Message, String> {
    if bits != 32 {
        return Err(format!("whynter frames are 32 bits, not {}", bits));
    }

    let t = &timing::WHYNTER;
    let mut train = PulseTrain::new();

    train.mark(t.mark);
    train.space(t.zero);

    if let Some((header_mark, header_space)) = t.header {
        train.mark(header_mark);
        train.space(header_space);
    }

    pulse_distance(&mut train, t, &data.view_bits::<Msb0>()[..32]);

    train.mark(t.mark);
    train.space(t.gap);

    Ok(train.into_message(t.carrier_khz))
}

/// MagiQuest, 56 bits of ratio-coded cells: zero padding, the wand id and
/// the swish magnitude.
pub fn magiquest(wand_id: u32, magnitude: u16) -> Result<Message, String> {
    let t = &timing::MAGIQUEST;
    let frame = ((wand_id as u64) << 16) | magnitude as u64;
    let mut train = PulseTrain::new();

    // the final cell's space is indistinguishable from the frame gap and
    // is left off, so the sequence ends on a mark like every other frame
    for (i, bit) in frame.view_bits::<Msb0>()[8..].iter().by_vals().enumerate() {
        let mark = if bit { t.one_mark } else { t.zero_mark };

        train.mark(mark);

        if i < 55 {
            train.space(t.cell - mark);
        }
    }

    Ok(train.into_message(t.carrier_khz))
}

/// Unmodified caller-supplied durations.
pub fn raw(raw: &[u32], carrier_khz: u32) -> Result<Message, String> {
    if raw.is_empty() {
        return Err("missing duration".into());
    }

    if raw.contains(&0) {
        return Err("nonsensical 0 duration".into());
    }

    Ok(Message {
        carrier: Some(carrier_khz * 1000),
        duty_cycle: None,
        raw: raw.to_vec(),
    })
}

/// Dispatch to the encoder for `protocol`. Protocols that are decode-only
/// (Sanyo, Mitsubishi, the toy remotes) are rejected.
pub fn for_protocol(protocol: Protocol, data: u32, bits: u8) -> Result<Message, String> {
    match protocol {
        Protocol::Nec => nec(data, bits),
        Protocol::Sony => sony(data, bits),
        Protocol::Rc5 => rc5(data, bits),
        Protocol::Rc6 => rc6(data, bits),
        Protocol::Dish => dish(data, bits),
        Protocol::Sharp => sharp_raw(data, bits),
        Protocol::Panasonic => panasonic(0x4004, data),
        Protocol::Jvc => jvc(data, bits, false),
        Protocol::Lg => lg(data, bits),
        Protocol::Samsung => samsung(data, bits),
        Protocol::Whynter => whynter(data, bits),
        Protocol::MagiQuest => magiquest(data, 0),
        _ => Err(format!("no encoder for protocol {}", protocol)),
    }
}

/// Header, MSB-first pulse-distance payload, terminating mark and gap: the
/// shape shared by most pulse-distance protocols.
fn pulse_distance_frame(t: &PulseDistanceTiming, data: u32, bits: u8) -> Result<Message, String> {
    check_fits(data, bits)?;

    let mut train = PulseTrain::new();

    if let Some((header_mark, header_space)) = t.header {
        train.mark(header_mark);
        train.space(header_space);
    }

    pulse_distance(&mut train, t, &data.view_bits::<Msb0>()[32 - bits as usize..]);

    train.mark(t.mark);
    train.space(t.gap);

    Ok(train.into_message(t.carrier_khz))
}

/// Frame builders for the decode-only protocols, used by the decoder
/// tests.
#[cfg(test)]
pub(crate) mod frames {
    use super::*;

    pub fn toy(protocol: Protocol, data: u32) -> Message {
        let (t, bits) = match protocol {
            Protocol::SymaR3 => (&timing::SYMA, 23),
            Protocol::SymaR5 => (&timing::SYMA, 31),
            Protocol::FastLane => (&timing::FASTLANE, 23),
            Protocol::USeries => (&timing::USERIES, 32),
            Protocol::FakeSyma1 => (&timing::FAKE_SYMA1, 30),
            _ => panic!("not a toy protocol: {}", protocol),
        };

        match pulse_distance_frame(t, data, bits) {
            Ok(message) => message,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn pulse_width(t: &PulseWidthTiming, data: u32, bits: u8) -> Message {
        let mut train = PulseTrain::new();

        if let Some((header_mark, header_space)) = t.header {
            train.mark(header_mark);
            train.space(header_space);
        }

        super::pulse_width(&mut train, t, &data.view_bits::<Msb0>()[32 - bits as usize..]);

        train.space(t.gap);

        train.into_message(t.carrier_khz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nec_frame_shape() {
        let message = match nec(0x04FB08F7, 32) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        };

        // header, 32 bit pairs, terminating mark, gap
        assert_eq!(message.raw.len(), 68);
        assert_eq!(message.raw[0], 9000);
        assert_eq!(message.raw[1], 4500);
        assert_eq!(message.carrier, Some(38000));

        // address 0x04 starts 0, 0, 1 lsb first
        assert_eq!(&message.raw[2..8], &[560, 560, 560, 560, 560, 1690]);
    }

    #[test]
    fn rejects_bad_bit_counts() {
        assert!(nec(0, 16).is_err());
        assert!(sony(0, 13).is_err());
        assert!(rc5(0, 14).is_err());
        assert!(dish(0, 32).is_err());
        assert!(jvc(0, 8, false).is_err());
    }

    #[test]
    fn rejects_values_wider_than_bits() {
        assert!(sony(0x1000, 12).is_err());
        assert!(rc5(0x2000, 13).is_err());
        assert!(sharp_raw(0x8000, 15).is_err());
    }

    #[test]
    fn jvc_repeat_omits_header() {
        let full = jvc(0xc2b8, 16, false).unwrap();
        let repeat = jvc(0xc2b8, 16, true).unwrap();

        assert_eq!(full.raw.len(), 36);
        assert_eq!(repeat.raw.len(), 34);
        assert_eq!(&full.raw[2..], &repeat.raw[..]);
    }

    #[test]
    fn rc5_merges_adjacent_halves() {
        // field 0 keeps the start mark and the field mark together
        let message = rc5(0x0aaa, 13).unwrap();

        assert_eq!(message.raw[0], 2 * 889);
    }

    #[test]
    fn sharp_appends_echo_frame() {
        let message = sharp(0x04, 0xa9).unwrap();

        // two 15 bit frames, two terminating marks, echo space and gap
        assert_eq!(message.raw.len(), 64);
    }

    #[test]
    fn decode_only_protocols_are_rejected() {
        assert!(for_protocol(Protocol::Sanyo, 0, 12).is_err());
        assert!(for_protocol(Protocol::SymaR3, 0, 23).is_err());
        assert!(for_protocol(Protocol::Unknown, 0, 32).is_err());
    }
}
