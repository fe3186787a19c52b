/*!
 * Timing constants shared by the decoders and encoders.
 *
 * Every protocol gets one constant table; the decode and encode paths for a
 * protocol must read the same table, otherwise a frame cannot survive a
 * round trip. Durations are in microseconds, carrier in kHz, tolerance in
 * percent.
 */

/// Receiver skew: marks measure about this much too long, and spaces the
/// same amount too short, due to sensor lag.
pub(crate) const MARK_EXCESS: u32 = 100;

/// Absolute tolerance floor in microseconds, so very short durations are
/// not rejected by the relative check alone.
const ABS_TOLERANCE: u32 = 100;

/// True if `measured` is within `tolerance` percent of `expected`, or
/// within the absolute floor.
pub(crate) fn within(measured: u32, expected: u32, tolerance: u32) -> bool {
    let diff = measured.abs_diff(expected);

    // upcast since diff * 100 may overflow
    diff <= ABS_TOLERANCE || (diff as u64 * 100) <= tolerance as u64 * expected as u64
}

/// Compare a measured mark against its nominal duration, compensating for
/// sensor lag.
pub(crate) fn matches_mark(measured: u32, expected: u32, tolerance: u32) -> bool {
    within(measured, expected + MARK_EXCESS, tolerance)
}

/// Compare a measured space against its nominal duration, compensating for
/// sensor lag.
pub(crate) fn matches_space(measured: u32, expected: u32, tolerance: u32) -> bool {
    within(measured, expected.saturating_sub(MARK_EXCESS), tolerance)
}

/// Pulse-distance protocols: fixed mark, bit value in the following space.
pub(crate) struct PulseDistanceTiming {
    pub header: Option<(u32, u32)>,
    pub mark: u32,
    pub one: u32,
    pub zero: u32,
    pub gap: u32,
    pub carrier_khz: u32,
    pub tolerance: u32,
}

/// Pulse-width protocols: bit value in the mark itself, fixed space.
pub(crate) struct PulseWidthTiming {
    pub header: Option<(u32, u32)>,
    pub one: u32,
    pub zero: u32,
    pub space: u32,
    pub gap: u32,
    pub carrier_khz: u32,
    pub tolerance: u32,
}

/// Biphase protocols: bit value in the position of the mid-cell transition,
/// expressed in half-bit units.
pub(crate) struct BiphaseTiming {
    pub leader: Option<(u32, u32)>,
    pub unit: u32,
    pub gap: u32,
    pub carrier_khz: u32,
    pub tolerance: u32,
}

/// Cell-ratio protocols (MagiQuest): fixed-length bit cells, bit value in
/// the mark share of the cell.
pub(crate) struct CellTiming {
    pub cell: u32,
    pub one_mark: u32,
    pub zero_mark: u32,
    pub carrier_khz: u32,
    pub tolerance: u32,
}

pub(crate) const NEC: PulseDistanceTiming = PulseDistanceTiming {
    header: Some((9000, 4500)),
    mark: 560,
    one: 1690,
    zero: 560,
    gap: 40000,
    carrier_khz: 38,
    tolerance: 25,
};

/// Header space of the short NEC repeat frame.
pub(crate) const NEC_REPEAT_SPACE: u32 = 2250;

pub(crate) const SONY: PulseWidthTiming = PulseWidthTiming {
    header: Some((2400, 600)),
    one: 1200,
    zero: 600,
    space: 600,
    gap: 24000,
    carrier_khz: 40,
    tolerance: 25,
};

pub(crate) const SANYO: PulseWidthTiming = PulseWidthTiming {
    header: Some((3500, 950)),
    one: 2400,
    zero: 700,
    space: 700,
    gap: 45000,
    carrier_khz: 38,
    tolerance: 25,
};

/// Mitsubishi frames carry no header at all; the dispatcher tries this
/// decoder last for that reason.
pub(crate) const MITSUBISHI: PulseWidthTiming = PulseWidthTiming {
    header: None,
    one: 2000,
    zero: 1000,
    space: 600,
    gap: 53000,
    carrier_khz: 38,
    tolerance: 25,
};

pub(crate) const RC5: BiphaseTiming = BiphaseTiming {
    leader: None,
    unit: 889,
    gap: 89000,
    carrier_khz: 36,
    tolerance: 25,
};

pub(crate) const RC6: BiphaseTiming = BiphaseTiming {
    leader: Some((2666, 889)),
    unit: 444,
    gap: 83000,
    carrier_khz: 36,
    tolerance: 25,
};

pub(crate) const PANASONIC: PulseDistanceTiming = PulseDistanceTiming {
    header: Some((3502, 1750)),
    mark: 502,
    one: 1244,
    zero: 400,
    gap: 74000,
    carrier_khz: 35,
    tolerance: 25,
};

pub(crate) const LG: PulseDistanceTiming = PulseDistanceTiming {
    header: Some((8000, 4000)),
    mark: 600,
    one: 1600,
    zero: 550,
    gap: 40000,
    carrier_khz: 38,
    tolerance: 25,
};

pub(crate) const JVC: PulseDistanceTiming = PulseDistanceTiming {
    header: Some((8000, 4500)),
    mark: 600,
    one: 1600,
    zero: 550,
    gap: 50000,
    carrier_khz: 38,
    tolerance: 25,
};

pub(crate) const SAMSUNG: PulseDistanceTiming = PulseDistanceTiming {
    header: Some((5000, 5000)),
    mark: 560,
    one: 1600,
    zero: 560,
    gap: 47000,
    carrier_khz: 38,
    tolerance: 25,
};

/// Whynter frames are bracketed by an explicit zero bit on both sides of
/// the payload.
pub(crate) const WHYNTER: PulseDistanceTiming = PulseDistanceTiming {
    header: Some((2850, 2850)),
    mark: 750,
    one: 2150,
    zero: 750,
    gap: 45000,
    carrier_khz: 38,
    tolerance: 25,
};

pub(crate) const DISH: PulseDistanceTiming = PulseDistanceTiming {
    header: Some((400, 6100)),
    mark: 400,
    one: 1700,
    zero: 2800,
    gap: 6200,
    carrier_khz: 56,
    tolerance: 25,
};

/// Sharp has no header; every transmission is the frame followed by its
/// bit-complement echo, separated by `SHARP_ECHO_SPACE`.
pub(crate) const SHARP: PulseDistanceTiming = PulseDistanceTiming {
    header: None,
    mark: 245,
    one: 1805,
    zero: 795,
    gap: 43000,
    carrier_khz: 38,
    tolerance: 25,
};

pub(crate) const SHARP_ECHO_SPACE: u32 = 3000;

pub(crate) const MAGIQUEST: CellTiming = CellTiming {
    cell: 1150,
    one_mark: 576,
    zero_mark: 288,
    carrier_khz: 38,
    tolerance: 25,
};

// The toy remote timings below are tuned from captures, not published
// documents. Each header differs from every other protocol in at least one
// of its two durations.

pub(crate) const SYMA: PulseDistanceTiming = PulseDistanceTiming {
    header: Some((2000, 2000)),
    mark: 320,
    one: 720,
    zero: 320,
    gap: 60000,
    carrier_khz: 38,
    tolerance: 20,
};

pub(crate) const FASTLANE: PulseDistanceTiming = PulseDistanceTiming {
    header: Some((3100, 550)),
    mark: 300,
    one: 750,
    zero: 300,
    gap: 60000,
    carrier_khz: 38,
    tolerance: 20,
};

pub(crate) const USERIES: PulseDistanceTiming = PulseDistanceTiming {
    header: Some((1700, 570)),
    mark: 280,
    one: 850,
    zero: 280,
    gap: 60000,
    carrier_khz: 38,
    tolerance: 20,
};

pub(crate) const FAKE_SYMA1: PulseDistanceTiming = PulseDistanceTiming {
    header: Some((1550, 750)),
    mark: 360,
    one: 650,
    zero: 260,
    gap: 60000,
    carrier_khz: 38,
    tolerance: 20,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_tolerance() {
        // 25% of 4500 is 1125
        assert!(within(4500 + 1125, 4500, 25));
        assert!(within(4500 - 1125, 4500, 25));
        assert!(!within(4500 + 1126, 4500, 25));
        assert!(!within(4500 - 1126, 4500, 25));
    }

    #[test]
    fn absolute_floor() {
        // 25% of 245 is 61, but the floor accepts a 100us miss
        assert!(within(345, 245, 25));
        assert!(!within(346, 245, 25));
    }

    #[test]
    fn sensor_lag() {
        assert!(matches_mark(660, 560, 25));
        assert!(matches_space(1590, 1690, 25));
    }
}
