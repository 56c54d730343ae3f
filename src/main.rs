// SPDX-License-Identifier: MPL-2.0
use cover_swipe::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: cover-swipe [OPTIONS] [DIRECTORY]

Browse album art by swiping the cover left or right.

Arguments:
  [DIRECTORY]           Directory of covers, or a cover file to start on

Options:
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let flags = Flags {
        config_dir,
        directory: args
            .finish()
            .into_iter()
            .next()
            .map(std::path::PathBuf::from),
    };

    app::run(flags)
}
