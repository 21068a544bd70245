// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::{self, Flags};

const HELP: &str = "\
iced_carousel - infinite image carousel

USAGE:
  iced_carousel [OPTIONS] [IMAGE...]

OPTIONS:
  --config-dir DIR   Directory holding settings.toml
  --delay MS         Autoplay period in milliseconds
  --no-autoplay      Start with autoplay disabled
  --rtl              Lay carousels out right-to-left
  -h, --help         Print this help

IMAGE may be a file path or an http(s) URL. Images given here replace the
configured carousels with a single one in the first section.
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        delay_ms: args.opt_value_from_str("--delay")?,
        no_autoplay: args.contains("--no-autoplay"),
        rtl: args.contains("--rtl"),
        images: args
            .finish()
            .into_iter()
            .filter_map(|arg| arg.into_string().ok())
            .collect(),
    };
    Ok(Some(flags))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{HELP}");
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
