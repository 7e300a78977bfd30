mod logging;

use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use guide_core::catalog::ornament_tutorial;
use guide_core::model::{StepId, Tutorial};
use ui::{App, StepPreset, UiApp, build_app_context, render_static_page};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidStepId { raw: String },
    InvalidOutPath { raw: String },
    UnsupportedFlag { flag: &'static str, command: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidStepId { raw } => write!(f, "invalid step id in --completed: {raw}"),
            ArgsError::InvalidOutPath { raw } => write!(f, "invalid --out value: {raw:?}"),
            ArgsError::UnsupportedFlag { flag, command } => {
                write!(f, "{flag} is not supported by `{command}`")
            }
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

struct DesktopApp {
    tutorial: Arc<Tutorial>,
    preset: StepPreset,
}

impl UiApp for DesktopApp {
    fn tutorial(&self) -> Arc<Tutorial> {
        Arc::clone(&self.tutorial)
    }

    fn preset(&self) -> StepPreset {
        self.preset.clone()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--completed <ids>] [--expanded] [-v]");
    eprintln!("  cargo run -p app -- render [--out <path>] [--completed <ids>] [--expanded] [-v]");
    eprintln!("  cargo run -p app -- steps  [--out <path>] [-v]");
    eprintln!();
    eprintln!("  <ids> is a comma-separated list of step ids, e.g. 1,2");
    eprintln!("  render and steps write to stdout unless --out is given");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  GUIDE_COMPLETED, GUIDE_OUT, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Render,
    Steps,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "render" => Some(Self::Render),
            "steps" => Some(Self::Steps),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Ui => "ui",
            Self::Render => "render",
            Self::Steps => "steps",
        }
    }

    /// Whether the command renders the page and so takes a step preset.
    const fn uses_preset(self) -> bool {
        matches!(self, Self::Ui | Self::Render)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    completed: Vec<StepId>,
    expand_details: bool,
    out: Option<PathBuf>,
    verbose: bool,
}

impl Args {
    fn from_env(cmd: Command) -> Self {
        let completed = std::env::var("GUIDE_COMPLETED")
            .ok()
            .filter(|_| cmd.uses_preset())
            .and_then(|value| parse_step_list(&value).ok())
            .unwrap_or_default();
        let out = std::env::var("GUIDE_OUT")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Self {
            completed,
            out,
            ..Self::default()
        }
    }

    fn parse(
        mut self,
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let preset_only = |flag: &'static str| {
            if cmd.uses_preset() {
                Ok(())
            } else {
                Err(ArgsError::UnsupportedFlag {
                    flag,
                    command: cmd.name(),
                })
            }
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--completed" => {
                    preset_only("--completed")?;
                    let value = require_value(args, "--completed")?;
                    self.completed = parse_step_list(&value)?;
                }
                "--expanded" => {
                    preset_only("--expanded")?;
                    self.expand_details = true;
                }
                "--out" => {
                    let value = require_value(args, "--out")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidOutPath { raw: value });
                    }
                    self.out = Some(PathBuf::from(value));
                }
                "--verbose" | "-v" => self.verbose = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(self)
    }

    fn preset(&self) -> StepPreset {
        StepPreset {
            completed: self.completed.clone(),
            expand_details: self.expand_details,
        }
    }
}

fn parse_step_list(raw: &str) -> Result<Vec<StepId>, ArgsError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<StepId>()
                .map_err(|_| ArgsError::InvalidStepId { raw: part.to_string() })
        })
        .collect()
}

fn write_output(out: Option<&PathBuf>, contents: &str) -> std::io::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, contents)?;
            tracing::info!(path = %path.display(), bytes = contents.len(), "wrote output");
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with('-') {
        argv.remove(0);
    }

    let parsed = Args::from_env(cmd)
        .parse(cmd, &mut argv.into_iter())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    logging::init_logging(parsed.verbose);

    let tutorial = Arc::new(ornament_tutorial()?);
    for id in &parsed.completed {
        if tutorial.step(*id).is_none() {
            tracing::warn!(step = %id, "no such step, ignoring");
        }
    }

    match cmd {
        Command::Ui => {
            tracing::info!(
                title = tutorial.title(),
                steps = tutorial.total_steps(),
                "launching desktop window"
            );
            let window_title = tutorial.title().to_string();
            let app = DesktopApp {
                tutorial,
                preset: parsed.preset(),
            };
            let app: Arc<dyn UiApp> = Arc::new(app);
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(window_title)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Render => {
            let html = render_static_page(Arc::clone(&tutorial), parsed.preset());
            tracing::debug!(bytes = html.len(), "rendered static page");
            write_output(parsed.out.as_ref(), &html)?;
            Ok(())
        }
        Command::Steps => {
            let mut json = serde_json::to_string_pretty(tutorial.steps())?;
            json.push('\n');
            write_output(parsed.out.as_ref(), &json)?;
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
