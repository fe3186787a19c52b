use clap::{Arg, Command};
use log::{LevelFilter, Metadata, Record};

mod commands;

fn main() {
    let matches = Command::new("irtool")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Infrared remote tooling")
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .global(true)
                .multiple_occurrences(true)
                .help("Increase message verbosity"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .global(true)
                .help("Silence all warnings"),
        )
        .subcommand(
            Command::new("decode")
                .about("Decode captured IR")
                .arg_required_else_help(true)
                .arg(
                    Arg::new("RAWIR")
                        .long("raw")
                        .short('r')
                        .help("Raw IR text, e.g. \"+9000 -4500 +560\"")
                        .takes_value(true)
                        .multiple_occurrences(true),
                )
                .arg(
                    Arg::new("FILE")
                        .long("file")
                        .short('f')
                        .help("Read from rawir or mode2 file")
                        .takes_value(true)
                        .allow_invalid_utf8(true)
                        .multiple_occurrences(true),
                )
                .arg(
                    Arg::new("KEYMAP")
                        .long("keymap")
                        .short('k')
                        .help("Look up decoded codes in this keymap")
                        .takes_value(true)
                        .allow_invalid_utf8(true),
                )
                .arg(
                    Arg::new("PROTOCOL")
                        .long("protocol")
                        .short('p')
                        .help("Only try the given protocols")
                        .takes_value(true)
                        .multiple_occurrences(true),
                ),
        )
        .subcommand(
            Command::new("transmit")
                .about("Encode a command and print the transmission")
                .arg_required_else_help(true)
                .arg(
                    Arg::new("PROTOCOL")
                        .long("protocol")
                        .short('p')
                        .help("Protocol to encode")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("DATA")
                        .long("data")
                        .short('d')
                        .help("Value to encode")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("BITS")
                        .long("bits")
                        .short('b')
                        .help("Bit count, defaults to the protocol's usual width")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("REPEAT")
                        .long("repeat")
                        .help("Encode the repeat form (nec, jvc)"),
                )
                .arg(
                    Arg::new("ADDRESS")
                        .long("address")
                        .help("Address field (sharp, panasonic)")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("COMMAND")
                        .long("command")
                        .help("Command field (sharp)")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("MAGNITUDE")
                        .long("magnitude")
                        .help("Swish magnitude (magiquest)")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("KEYMAP")
                        .long("keymap")
                        .short('k')
                        .help("Send a key from this keymap")
                        .takes_value(true)
                        .allow_invalid_utf8(true),
                )
                .arg(
                    Arg::new("KEY")
                        .long("key")
                        .help("Key name to send")
                        .takes_value(true),
                ),
        )
        .get_matches();

    if log::set_logger(&CLI_LOGGER).is_ok() {
        let level = if matches.is_present("quiet") {
            LevelFilter::Error
        } else {
            match matches.occurrences_of("verbosity") {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };

        log::set_max_level(level);
    }

    match matches.subcommand() {
        Some(("decode", matches)) => commands::decode::decode(matches),
        Some(("transmit", matches)) => commands::transmit::transmit(matches),
        _ => unreachable!(),
    }
}

static CLI_LOGGER: CliLogger = CliLogger;

struct CliLogger;

impl log::Log for CliLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        eprintln!(
            "{}: {}",
            match record.level() {
                log::Level::Trace => "trace",
                log::Level::Debug => "debug",
                log::Level::Info => "info",
                log::Level::Warn => "warning",
                log::Level::Error => "error",
            },
            record.args()
        );
    }

    fn flush(&self) {}
}
