use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use keycalc::calculator::{Calculator, parse_keys};
use keycalc::config::{Config, DisplayStyle};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about = "Drive the calculator engine with key presses")]
struct Cli {
    /// Keys to press, e.g. `12+3=` or `1 2 + 3 =`. Reads stdin when omitted.
    keys: Vec<String>,
    #[arg(long, help = "Print the display after every key")]
    trace: bool,
    #[arg(long, value_enum, help = "Display style (overrides the config file)")]
    style: Option<DisplayStyle>,
    #[arg(long, help = "Path to a config file")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let style = cli.style.unwrap_or(config.display_style);
    let trace = cli.trace || config.trace;

    let mut calc = Calculator::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.keys.is_empty() {
        run_line(&mut calc, &cli.keys.join(" "), style, trace, &mut out)?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        run_line(&mut calc, &line, style, trace, &mut out)?;
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Press every key on one input line into the session and print the display.
fn run_line(
    calc: &mut Calculator,
    line: &str,
    style: DisplayStyle,
    trace: bool,
    out: &mut impl Write,
) -> Result<()> {
    if line.trim().is_empty() {
        return Ok(());
    }

    for key in parse_keys(line) {
        let token = match key {
            Ok(token) => token,
            Err(err) => {
                warn!(%err, "Skipping key");
                continue;
            }
        };
        let press = calc.press(token);
        if trace {
            writeln!(out, "{token} → {}", style.render(&press.display))?;
        }
    }

    if !trace {
        writeln!(out, "{}", style.render(&calc.display()))?;
    }
    Ok(())
}
