/*!
 * The closed set of protocols this crate understands.
 */

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A remote control protocol, or `Unknown` for the fingerprint fallback.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Protocol {
    #[serde(rename = "nec")]
    Nec,
    #[serde(rename = "sony")]
    Sony,
    #[serde(rename = "sanyo")]
    Sanyo,
    #[serde(rename = "mitsubishi")]
    Mitsubishi,
    #[serde(rename = "rc5")]
    Rc5,
    #[serde(rename = "rc6")]
    Rc6,
    #[serde(rename = "dish")]
    Dish,
    #[serde(rename = "sharp")]
    Sharp,
    #[serde(rename = "panasonic")]
    Panasonic,
    #[serde(rename = "jvc")]
    Jvc,
    #[serde(rename = "samsung")]
    Samsung,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "whynter")]
    Whynter,
    #[serde(rename = "magiquest")]
    MagiQuest,
    #[serde(rename = "syma-r3")]
    SymaR3,
    #[serde(rename = "syma-r5")]
    SymaR5,
    #[serde(rename = "useries")]
    USeries,
    #[serde(rename = "fastlane")]
    FastLane,
    #[serde(rename = "fakesyma1")]
    FakeSyma1,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Protocol {
    /// The flag for this protocol in a [`ProtocolSet`].
    pub fn flag(self) -> ProtocolSet {
        match self {
            Protocol::Nec => ProtocolSet::NEC,
            Protocol::Sony => ProtocolSet::SONY,
            Protocol::Sanyo => ProtocolSet::SANYO,
            Protocol::Mitsubishi => ProtocolSet::MITSUBISHI,
            Protocol::Rc5 => ProtocolSet::RC5,
            Protocol::Rc6 => ProtocolSet::RC6,
            Protocol::Dish => ProtocolSet::DISH,
            Protocol::Sharp => ProtocolSet::SHARP,
            Protocol::Panasonic => ProtocolSet::PANASONIC,
            Protocol::Jvc => ProtocolSet::JVC,
            Protocol::Samsung => ProtocolSet::SAMSUNG,
            Protocol::Lg => ProtocolSet::LG,
            Protocol::Whynter => ProtocolSet::WHYNTER,
            Protocol::MagiQuest => ProtocolSet::MAGIQUEST,
            Protocol::SymaR3 => ProtocolSet::SYMA_R3,
            Protocol::SymaR5 => ProtocolSet::SYMA_R5,
            Protocol::USeries => ProtocolSet::USERIES,
            Protocol::FastLane => ProtocolSet::FASTLANE,
            Protocol::FakeSyma1 => ProtocolSet::FAKE_SYMA1,
            Protocol::Unknown => ProtocolSet::empty(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Protocol::Nec => "nec",
            Protocol::Sony => "sony",
            Protocol::Sanyo => "sanyo",
            Protocol::Mitsubishi => "mitsubishi",
            Protocol::Rc5 => "rc5",
            Protocol::Rc6 => "rc6",
            Protocol::Dish => "dish",
            Protocol::Sharp => "sharp",
            Protocol::Panasonic => "panasonic",
            Protocol::Jvc => "jvc",
            Protocol::Samsung => "samsung",
            Protocol::Lg => "lg",
            Protocol::Whynter => "whynter",
            Protocol::MagiQuest => "magiquest",
            Protocol::SymaR3 => "syma-r3",
            Protocol::SymaR5 => "syma-r5",
            Protocol::USeries => "useries",
            Protocol::FastLane => "fastlane",
            Protocol::FakeSyma1 => "fakesyma1",
            Protocol::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Protocol, String> {
        match s.to_lowercase().as_str() {
            "nec" => Ok(Protocol::Nec),
            "sony" => Ok(Protocol::Sony),
            "sanyo" => Ok(Protocol::Sanyo),
            "mitsubishi" => Ok(Protocol::Mitsubishi),
            "rc5" => Ok(Protocol::Rc5),
            "rc6" => Ok(Protocol::Rc6),
            "dish" => Ok(Protocol::Dish),
            "sharp" => Ok(Protocol::Sharp),
            "panasonic" => Ok(Protocol::Panasonic),
            "jvc" => Ok(Protocol::Jvc),
            "samsung" => Ok(Protocol::Samsung),
            "lg" => Ok(Protocol::Lg),
            "whynter" => Ok(Protocol::Whynter),
            "magiquest" => Ok(Protocol::MagiQuest),
            "syma-r3" => Ok(Protocol::SymaR3),
            "syma-r5" => Ok(Protocol::SymaR5),
            "useries" => Ok(Protocol::USeries),
            "fastlane" => Ok(Protocol::FastLane),
            "fakesyma1" => Ok(Protocol::FakeSyma1),
            _ => Err(format!("unknown protocol ‘{}’", s)),
        }
    }
}

bitflags! {
    /// Which decoders the dispatcher is allowed to try.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ProtocolSet: u32 {
        const NEC = 1 << 0;
        const SONY = 1 << 1;
        const SANYO = 1 << 2;
        const MITSUBISHI = 1 << 3;
        const RC5 = 1 << 4;
        const RC6 = 1 << 5;
        const DISH = 1 << 6;
        const SHARP = 1 << 7;
        const PANASONIC = 1 << 8;
        const JVC = 1 << 9;
        const SAMSUNG = 1 << 10;
        const LG = 1 << 11;
        const WHYNTER = 1 << 12;
        const MAGIQUEST = 1 << 13;
        const SYMA_R3 = 1 << 14;
        const SYMA_R5 = 1 << 15;
        const USERIES = 1 << 16;
        const FASTLANE = 1 << 17;
        const FAKE_SYMA1 = 1 << 18;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for p in [
            Protocol::Nec,
            Protocol::Rc6,
            Protocol::SymaR5,
            Protocol::FakeSyma1,
            Protocol::MagiQuest,
        ] {
            assert_eq!(p.to_string().parse::<Protocol>(), Ok(p));
        }

        assert!("gruesome".parse::<Protocol>().is_err());
    }
}
