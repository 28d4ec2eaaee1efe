use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("statline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Samples host metrics into one status line and fans it out")
        .long_about(
            "Samples host metrics into one status line and fans it out\n\n\
             With -d, runs the daemon: every second the line is set as the window \
             title and written to every file in the fifo directory.\n\
             Without -d, the given words are sent to a running daemon and shown in \
             front of the metrics until replaced. No words clears the message.",
        )
        .arg(
            Arg::new("daemon")
                .short('d')
                .long("daemon")
                .help("Run as the status daemon")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("socket")
                .long("socket")
                .visible_alias("socloc")
                .value_name("PATH")
                .help("Custom control socket location")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("fifo-dir")
                .long("fifo-dir")
                .visible_alias("fifoloc")
                .value_name("DIR")
                .help("Custom fifo folder location")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Config file to use instead of the default location")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("print-config")
                .long("print-config")
                .help("Print the effective configuration as JSON and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Confirm when the message was accepted")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("message")
                .value_name("MESSAGE")
                .help("Words of the override message")
                .num_args(0..)
                .trailing_var_arg(true)
                .conflicts_with("daemon"),
        )
}
