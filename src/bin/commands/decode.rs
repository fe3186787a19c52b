use irproto::{decode_with, rawir, Message, Protocol, ProtocolSet};
use irtool::keymap::KeymapFile;
use log::info;
use std::{fs, path::Path, process::exit};

pub fn decode(matches: &clap::ArgMatches) {
    let enabled = match protocol_set(matches) {
        Ok(enabled) => enabled,
        Err(e) => {
            eprintln!("error: {}", e);
            exit(2);
        }
    };

    let keymap = matches.value_of_os("KEYMAP").map(|path| {
        match KeymapFile::parse(Path::new(path)) {
            Ok(keymap) => keymap,
            Err(e) => {
                eprintln!("error: {}", e);
                exit(2);
            }
        }
    });

    let mut seen_input = false;

    for s in matches.values_of("RAWIR").into_iter().flatten() {
        seen_input = true;

        match rawir::parse(s) {
            Ok(raw) => report(&raw, enabled, keymap.as_ref()),
            Err(e) => {
                eprintln!("error: {}", e);
                exit(2);
            }
        }
    }

    for path in matches.values_of_os("FILE").into_iter().flatten() {
        seen_input = true;

        let path = Path::new(path);

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("error: {}: {}", path.display(), e);
                exit(2);
            }
        };

        // a file is either raw ir text or mode2 pulse/space lines
        let message = Message::parse(&contents).or_else(|_| Message::parse_mode2(&contents));

        match message {
            Ok(message) => report(&message.raw, enabled, keymap.as_ref()),
            Err(e) => {
                eprintln!("error: {}: {}", path.display(), e);
                exit(2);
            }
        }
    }

    if !seen_input {
        eprintln!("error: no input; use --raw or --file");
        exit(2);
    }
}

fn report(raw: &[u32], enabled: ProtocolSet, keymap: Option<&KeymapFile>) {
    info!("rawir: {}", rawir::print_to_string(raw));

    let decoded = decode_with(raw, enabled);

    println!("decoded: {}", decoded);

    if let Some(keymap) = keymap {
        if let Some((remote, key)) = keymap.find_key(decoded.protocol, decoded.value) {
            println!("key: {} ({})", key, remote.name);
        }
    }
}

fn protocol_set(matches: &clap::ArgMatches) -> Result<ProtocolSet, String> {
    let mut enabled = ProtocolSet::empty();

    for name in matches.values_of("PROTOCOL").into_iter().flatten() {
        let protocol: Protocol = name.parse()?;
        enabled |= protocol.flag();
    }

    if enabled.is_empty() {
        Ok(ProtocolSet::all())
    } else {
        Ok(enabled)
    }
}
