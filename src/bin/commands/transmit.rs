use super::{encodable_protocols, parse_number};
use irproto::{encode, Message, Protocol};
use irtool::keymap::KeymapFile;
use std::{path::Path, process::exit};

pub fn transmit(matches: &clap::ArgMatches) {
    let message = match build_message(matches) {
        Ok(message) => message,
        Err(e) => {
            eprintln!("error: {}", e);
            exit(2);
        }
    };

    if let Some(carrier) = message.carrier {
        println!("carrier: {}kHz", carrier / 1000);
    }

    println!("rawir: {}", message.print_rawir());
}

fn build_message(matches: &clap::ArgMatches) -> Result<Message, String> {
    if let Some(path) = matches.value_of_os("KEYMAP") {
        return from_keymap(matches, Path::new(path));
    }

    let protocol: Protocol = matches
        .value_of("PROTOCOL")
        .ok_or_else(|| format!("--protocol is required; one of {}", encodable_protocols()))?
        .parse()?;

    let repeat = matches.is_present("REPEAT");

    if protocol == Protocol::Nec && repeat {
        return Ok(encode::nec_repeat());
    }

    match protocol {
        Protocol::Sharp if matches.is_present("ADDRESS") => {
            let address = field(matches, "ADDRESS", "--address", 0x1f)?;
            let command = field(matches, "COMMAND", "--command", 0xff)?;

            encode::sharp(address as u8, command as u8)
        }
        Protocol::Panasonic => {
            let address = match matches.value_of("ADDRESS") {
                Some(s) => parse_number(s)? as u16,
                None => 0x4004,
            };
            let data = data(matches)?;

            encode::panasonic(address, data)
        }
        Protocol::MagiQuest => {
            let magnitude = match matches.value_of("MAGNITUDE") {
                Some(s) => parse_number(s)? as u16,
                None => 0,
            };

            encode::magiquest(data(matches)?, magnitude)
        }
        Protocol::Jvc => encode::jvc(data(matches)?, bits(matches, protocol)?, repeat),
        _ => {
            if repeat {
                return Err(format!("protocol {} has no repeat form", protocol));
            }

            encode::for_protocol(protocol, data(matches)?, bits(matches, protocol)?)
        }
    }
}

fn from_keymap(matches: &clap::ArgMatches, path: &Path) -> Result<Message, String> {
    let key = matches
        .value_of("KEY")
        .ok_or("--key is required with --keymap")?;

    let keymap = KeymapFile::parse(path)?;

    let (remote, code) = keymap
        .lookup(key)
        .ok_or_else(|| format!("key {} not found in {}", key, path.display()))?;

    let bits = match remote.bits {
        Some(bits) => bits,
        None => default_bits(remote.protocol)?,
    };

    encode::for_protocol(remote.protocol, code, bits)
}

fn data(matches: &clap::ArgMatches) -> Result<u32, String> {
    parse_number(matches.value_of("DATA").ok_or("--data is required")?)
}

fn bits(matches: &clap::ArgMatches, protocol: Protocol) -> Result<u8, String> {
    match matches.value_of("BITS") {
        Some(s) => {
            let bits = parse_number(s)?;
            u8::try_from(bits).map_err(|_| format!("invalid bit count {}", bits))
        }
        None => default_bits(protocol),
    }
}

fn field(matches: &clap::ArgMatches, name: &str, flag: &str, max: u32) -> Result<u32, String> {
    let s = matches
        .value_of(name)
        .ok_or_else(|| format!("{} is required", flag))?;

    let value = parse_number(s)?;

    if value > max {
        return Err(format!("{} {} is out of range", flag, s));
    }

    Ok(value)
}

/// The customary frame width per protocol.
fn default_bits(protocol: Protocol) -> Result<u8, String> {
    match protocol {
        Protocol::Nec | Protocol::Samsung | Protocol::Whynter => Ok(32),
        Protocol::Sony => Ok(12),
        Protocol::Rc5 => Ok(13),
        Protocol::Rc6 => Ok(20),
        Protocol::Dish | Protocol::Jvc => Ok(16),
        Protocol::Sharp => Ok(15),
        Protocol::Lg => Ok(28),
        Protocol::Panasonic => Ok(48),
        Protocol::MagiQuest => Ok(56),
        _ => Err(format!("no encoder for protocol {}", protocol)),
    }
}
