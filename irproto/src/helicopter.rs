/*!
 * Packed bit-field payloads for the toy helicopter remotes.
 *
 * These frames carry independent control axes in sub-byte fields. The
 * layouts are given as explicit (offset, width) extractions rather than
 * overlapping in-memory structures, since struct layout is not portable.
 */

use std::fmt;

/// The control axes carried by a toy remote frame.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Helicopter {
    SymaR3 {
        throttle: u8,
        channel: u8,
        pitch: u8,
        yaw: u8,
    },
    SymaR5 {
        trim: u8,
        throttle: u8,
        channel: u8,
        pitch: u8,
        yaw: u8,
    },
    FakeSyma1 {
        trim: u8,
        trim_dir: u8,
        yaw_dir: u8,
        yaw: u8,
        throttle: u8,
        pitch_dir: u8,
        pitch: u8,
        channel: u8,
    },
    USeries {
        checksum: u8,
        right_button: bool,
        left_button: bool,
        turbo: bool,
        channel: u8,
        trim: u8,
        yaw: u8,
        pitch: u8,
        throttle: u8,
    },
    FastLane {
        trim: u8,
        trim_dir: u8,
        yaw_dir: u8,
        fire: bool,
        yaw: u8,
        pitch: u8,
        throttle: u8,
        channel: u8,
    },
}

fn field(value: u32, offset: u32, width: u32) -> u8 {
    ((value >> offset) & ((1 << width) - 1)) as u8
}

/// Syma R3, 23 bits. The spacer bit must be zero.
pub(crate) fn syma_r3(value: u32) -> Option<Helicopter> {
    if field(value, 15, 1) != 0 {
        return None;
    }

    Some(Helicopter::SymaR3 {
        throttle: field(value, 0, 7),
        channel: field(value, 7, 1),
        pitch: field(value, 8, 7),
        yaw: field(value, 16, 7),
    })
}

/// Syma R5, 31 bits. Both spacer bits must be zero.
pub(crate) fn syma_r5(value: u32) -> Option<Helicopter> {
    if field(value, 7, 1) != 0 || field(value, 23, 1) != 0 {
        return None;
    }

    Some(Helicopter::SymaR5 {
        trim: field(value, 0, 7),
        throttle: field(value, 8, 7),
        channel: field(value, 15, 1),
        pitch: field(value, 16, 7),
        yaw: field(value, 24, 7),
    })
}

/// FakeSyma1, 30 bits. Bits 26..27 are always transmitted as zero.
pub(crate) fn fake_syma1(value: u32) -> Option<Helicopter> {
    if field(value, 26, 2) != 0 {
        return None;
    }

    Some(Helicopter::FakeSyma1 {
        trim: field(value, 5, 4),
        trim_dir: field(value, 9, 1),
        yaw_dir: field(value, 10, 1),
        yaw: field(value, 11, 4),
        throttle: field(value, 15, 7),
        pitch_dir: field(value, 22, 1),
        pitch: field(value, 23, 3),
        channel: field(value, 28, 2),
    })
}

/// The USeries checksum: XOR of the payload above bit 2, three bits at a
/// time.
pub(crate) fn useries_checksum(value: u32) -> u8 {
    let mut sum = 0;

    for offset in (3..32).step_by(3) {
        sum ^= field(value, offset, 3);
    }

    sum & 0x7
}

/// USeries, 32 bits. The low 3 bits are a checksum over the rest of the
/// frame; a mismatch fails the decode.
pub(crate) fn useries(value: u32) -> Option<Helicopter> {
    let checksum = field(value, 0, 3);

    if checksum != useries_checksum(value) {
        return None;
    }

    Some(Helicopter::USeries {
        checksum,
        right_button: field(value, 3, 1) != 0,
        left_button: field(value, 4, 1) != 0,
        turbo: field(value, 5, 1) != 0,
        channel: field(value, 6, 2),
        trim: field(value, 8, 6),
        yaw: field(value, 14, 5),
        pitch: field(value, 19, 6),
        throttle: field(value, 25, 7),
    })
}

/// FastLane, 23 bits. The frame carries no redundancy; the header and the
/// exact length gate the decode.
pub(crate) fn fastlane(value: u32) -> Helicopter {
    Helicopter::FastLane {
        trim: field(value, 0, 4),
        trim_dir: field(value, 4, 1),
        yaw_dir: field(value, 5, 1),
        fire: field(value, 6, 1) != 0,
        yaw: field(value, 7, 4),
        pitch: field(value, 11, 4),
        throttle: field(value, 15, 6),
        channel: field(value, 21, 2),
    }
}

impl fmt::Display for Helicopter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Helicopter::SymaR3 {
                throttle,
                channel,
                pitch,
                yaw,
            } => write!(
                f,
                "throttle {}, yaw {}, pitch {}, channel {}",
                throttle, yaw, pitch, channel
            ),
            Helicopter::SymaR5 {
                trim,
                throttle,
                channel,
                pitch,
                yaw,
            } => write!(
                f,
                "throttle {}, yaw {}, pitch {}, trim {}, channel {}",
                throttle, yaw, pitch, trim, channel
            ),
            Helicopter::FakeSyma1 {
                trim,
                trim_dir,
                yaw_dir,
                yaw,
                throttle,
                pitch_dir,
                pitch,
                channel,
            } => write!(
                f,
                "throttle {}, yaw {} (dir {}), pitch {} (dir {}), trim {} (dir {}), channel {}",
                throttle, yaw, yaw_dir, pitch, pitch_dir, trim, trim_dir, channel
            ),
            Helicopter::USeries {
                checksum,
                right_button,
                left_button,
                turbo,
                channel,
                trim,
                yaw,
                pitch,
                throttle,
            } => write!(
                f,
                "throttle {}, yaw {}, pitch {}, trim {}, channel {}, turbo {}, left {}, right {}, checksum {}",
                throttle, yaw, pitch, trim, channel, turbo, left_button, right_button, checksum
            ),
            Helicopter::FastLane {
                trim,
                trim_dir,
                yaw_dir,
                fire,
                yaw,
                pitch,
                throttle,
                channel,
            } => write!(
                f,
                "throttle {}, yaw {} (dir {}), pitch {}, trim {} (dir {}), fire {}, channel {}",
                throttle, yaw, yaw_dir, pitch, trim, trim_dir, fire, channel
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syma_r3_fields() {
        // yaw 63, spacer 0, pitch 32, channel 1, throttle 100
        let value = (63 << 16) | (32 << 8) | (1 << 7) | 100;

        assert_eq!(
            syma_r3(value),
            Some(Helicopter::SymaR3 {
                throttle: 100,
                channel: 1,
                pitch: 32,
                yaw: 63,
            })
        );

        // spacer bit set
        assert_eq!(syma_r3(value | 1 << 15), None);
    }

    #[test]
    fn useries_checksum_gate() {
        let payload = (90 << 25) | (16 << 19) | (15 << 14) | (31 << 8) | (1 << 6);
        let value = payload | useries_checksum(payload) as u32;

        let decoded = useries(value).unwrap();

        assert_eq!(
            decoded,
            Helicopter::USeries {
                checksum: useries_checksum(payload),
                right_button: false,
                left_button: false,
                turbo: false,
                channel: 1,
                trim: 31,
                yaw: 15,
                pitch: 16,
                throttle: 90,
            }
        );

        // flip one payload bit, keep the old checksum
        assert_eq!(useries(value ^ 1 << 20), None);
    }

    #[test]
    fn fastlane_fields() {
        let value = (2 << 21) | (40 << 15) | (8 << 11) | (15 << 7) | (1 << 6) | 9;

        assert_eq!(
            fastlane(value),
            Helicopter::FastLane {
                trim: 9,
                trim_dir: 0,
                yaw_dir: 0,
                fire: true,
                yaw: 15,
                pitch: 8,
                throttle: 40,
                channel: 2,
            }
        );
    }
}
