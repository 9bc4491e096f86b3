use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing_subscriber::{EnvFilter, fmt as log_fmt, prelude::*};
use ui::{App, UiApp, UiSettings, build_app_context};
use whys_core::Clock;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyTitle,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyTitle => write!(f, "--title cannot be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--title <text>] [--log <filter>] [--always-on-top]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --title \"Five Whys\"");
    eprintln!("  --log {DEFAULT_LOG_FILTER}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FIVE_WHYS_TITLE, FIVE_WHYS_LOG");
}

struct DesktopApp {
    settings: UiSettings,
}

impl UiApp for DesktopApp {
    fn settings(&self) -> UiSettings {
        self.settings.clone()
    }

    fn clock(&self) -> Clock {
        Clock::system()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    settings: UiSettings,
    log_filter: String,
}

impl Args {
    /// Flags win over environment values, which win over defaults.
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut settings = UiSettings::default();
        if let Some(title) = env("FIVE_WHYS_TITLE").filter(|t| !t.trim().is_empty()) {
            settings.title = title.trim().to_string();
        }
        let mut log_filter = env("FIVE_WHYS_LOG")
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--title" => {
                    let value = require_value(&mut args, "--title")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyTitle);
                    }
                    settings.title = value.trim().to_string();
                }
                "--log" => log_filter = require_value(&mut args, "--log")?,
                "--always-on-top" => settings.always_on_top = true,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self {
            settings,
            log_filter,
        }))
    }
}

fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?} ({err}); using {DEFAULT_LOG_FILTER}");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    tracing_subscriber::registry()
        .with(log_fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .inspect_err(|_| print_usage())?;
    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    init_tracing(&args.log_filter);
    tracing::info!(title = %args.settings.title, "launching desktop window");

    let window = WindowBuilder::new()
        .with_title(args.settings.title.clone())
        .with_always_on_top(args.settings.always_on_top);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        settings: args.settings,
    });
    let context = build_app_context(&app);

    LaunchBuilder::desktop()
        .with_cfg(DesktopConfig::new().with_window(window))
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
