use anyhow::Result;

use statline::cli::build_cli;
use statline::commands;

fn main() -> Result<()> {
    statline::init_logging();

    let matches = build_cli().get_matches();
    let config = commands::load_config(&matches)?;

    if matches.get_flag("print-config") {
        return commands::config::execute(&config);
    }

    if matches.get_flag("daemon") {
        commands::daemon::execute(&config)
    } else {
        commands::notify::execute(&matches, &config)
    }
}
