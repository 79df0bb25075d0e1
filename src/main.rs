// SPDX-License-Identifier: MPL-2.0
use iced_snackbar::app::{self, Flags};
use iced_snackbar::logging;
use iced_snackbar::ui::theming::ThemeMode;

const HELP: &str = "\
iced_snackbar - snackbar demo

USAGE:
  iced_snackbar [OPTIONS]

OPTIONS:
  --timeout <MS>        Auto-dismiss delay in milliseconds, -1 to disable
  --message <TEXT>      Snackbar message
  --theme <MODE>        light, dark or system
  --config-dir <PATH>   Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    logging::init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        timeout: opt_string(&mut args, "--timeout"),
        message: opt_string(&mut args, "--message"),
        config_dir: opt_string(&mut args, "--config-dir"),
        theme_mode: opt_string(&mut args, "--theme").and_then(|raw| match raw.parse::<ThemeMode>() {
            Ok(mode) => Some(mode),
            Err(err) => {
                tracing::warn!("{err}, using configured theme");
                None
            }
        }),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(flags)
}

fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str::<_, String>(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, key, "invalid command line value");
            None
        }
    }
}
