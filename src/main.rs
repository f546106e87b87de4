// SPDX-License-Identifier: MPL-2.0
use kiosk_dash::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "kiosk_dash=info";

const HELP: &str = "\
kiosk_dash

USAGE:
  kiosk_dash [OPTIONS]

OPTIONS:
  -h, --help                Print help information
  --lang <LOCALE>           Interface language (e.g. en-US, ru)
  --route <PATH>            Initial screen: /login, /register or /dashboard
  --config-dir <DIR>        Directory holding settings.toml
";

fn main() -> iced::Result {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --lang");
        None
    });
    let route: Option<String> = args.opt_value_from_str("--route").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --route");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --config-dir");
        None
    });

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_override(config_dir);

    app::run(Flags { lang, route })
}
