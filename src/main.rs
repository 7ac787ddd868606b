// SPDX-License-Identifier: MIT
//
// dresscode: a design-system color control center for the terminal.
//
// This is the main binary that wires together all the crates:
//
//   dc-color   → hex ↔ HSL conversion and validation
//   dc-theme   → palette ramps, WCAG contrast, audits, presets, token export
//   dc-session → theme history (undo/redo) and the session command language
//
// Every subcommand follows the same shape:
//
//   args + dresscode.toml → DesignSettings + starting color
//   ThemeHistory (apply color) → ColorTheme → report / export on stdout
//
// Logs go to stderr, so stdout can be redirected straight into a file.

mod config;
mod logging;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use chrono::{SecondsFormat, Utc};
use clap::{Parser, Subcommand};
use dc_color::normalize_hex;
use dc_session::command::{self, CommandResult};
use dc_session::ThemeHistory;
use dc_theme::audit::{ComplianceScore, audit_theme, suggestions};
use dc_theme::contrast::{
    WCAG_AA, WCAG_AAA, accessible_text_color, contrast_ratio, suggest_accessible_color,
};
use dc_theme::export::{ExportFormat, export_theme};
use dc_theme::settings::{ColorMode, DesignSettings};

use crate::config::Config;

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "dresscode",
    version,
    about = "Design-system colors: palettes, WCAG contrast, token export"
)]
struct Cli {
    /// Config file (default: ./dresscode.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the configured light/dark mode
    #[arg(long, global = true, value_name = "MODE")]
    mode: Option<ColorMode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the primary, complementary and all four ramps
    Palette {
        /// Hex color or preset id (default: configured primary)
        color: Option<String>,
    },

    /// Score a foreground/background pair against WCAG
    Contrast {
        foreground: String,
        background: String,

        /// Ratio a suggested background has to reach
        #[arg(long, default_value_t = WCAG_AA)]
        target: f64,
    },

    /// Run the standard accessibility checks on a theme
    Audit {
        /// Hex color or preset id (default: configured primary)
        color: Option<String>,
    },

    /// Render the theme as design tokens
    Export {
        /// Hex color or preset id (default: configured primary)
        color: Option<String>,

        /// css, scss, tailwind or json
        #[arg(long, short, default_value = "css")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// List the builtin presets
    Presets,

    /// Read session commands from stdin (try `help`)
    Session,
}

// ─── Setup ──────────────────────────────────────────────────────────────────

/// Settings and starting color, resolved from the config file and flags.
struct Setup {
    settings: DesignSettings,
    default_color: Option<String>,
}

impl Setup {
    fn new(config: Config, mode: Option<ColorMode>) -> Self {
        let mut settings = config.design;
        if let Some(mode) = mode {
            settings.mode = mode;
        }
        Self {
            settings,
            default_color: config.colors.primary,
        }
    }

    /// A fresh history with `color` (or the configured default) applied.
    fn history_for(&self, color: Option<&str>) -> Result<ThemeHistory> {
        let mut history = ThemeHistory::new();
        if let Some(color) = color.or(self.default_color.as_deref()) {
            history
                .apply_preset(color)
                .with_context(|| format!("{color:?} is neither a hex color nor a preset id"))?;
        }
        Ok(history)
    }
}

// ─── Subcommands ────────────────────────────────────────────────────────────

fn run(cli: Cli, setup: &Setup, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Palette { color } => {
            let history = setup.history_for(color.as_deref())?;
            writeln!(out, "{}", command::palette_report(&history))?;
        }
        Commands::Contrast {
            foreground,
            background,
            target,
        } => contrast_report(&foreground, &background, target, out)?,
        Commands::Audit { color } => {
            let history = setup.history_for(color.as_deref())?;
            audit_report(&history, &setup.settings, out)?;
        }
        Commands::Export {
            color,
            format,
            output,
        } => {
            let history = setup.history_for(color.as_deref())?;
            let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            let text = export_theme(&history.theme(), &setup.settings, format, &generated_at)
                .with_context(|| format!("failed to export {}", format.label()))?;
            match output {
                Some(path) => {
                    fs::write(&path, &text)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), %format, "theme exported");
                    writeln!(out, "Wrote {} to {}", format.label(), path.display())?;
                }
                None => write!(out, "{text}")?,
            }
        }
        Commands::Presets => writeln!(out, "{}", command::preset_list())?,
        Commands::Session => {
            let stdin = io::stdin();
            session(stdin.lock(), out)?;
        }
    }
    Ok(())
}

fn contrast_report(fg: &str, bg: &str, target: f64, out: &mut impl Write) -> Result<()> {
    let Some(fg) = normalize_hex(fg) else {
        bail!("invalid foreground color {fg:?}");
    };
    let Some(bg) = normalize_hex(bg) else {
        bail!("invalid background color {bg:?}");
    };
    let ratio = contrast_ratio(&fg, &bg).context("contrast of normalized colors")?;

    writeln!(out, "{fg} on {bg}: {ratio:.2}:1")?;
    writeln!(out, "  AA  (4.5:1) {}", verdict(ratio >= WCAG_AA))?;
    writeln!(out, "  AAA (7:1)   {}", verdict(ratio >= WCAG_AAA))?;
    let tone = accessible_text_color(&bg);
    writeln!(out, "  best text on {bg}: {}", tone.hex())?;

    if let Some(s) = suggest_accessible_color(&bg, &fg, target) {
        writeln!(
            out,
            "  suggestion: {} -> {} (+{:.2})",
            s.reason, s.suggested, s.improvement
        )?;
    } else if ratio < target {
        writeln!(out, "  no background within ±20% lightness reaches {target}:1")?;
    }
    Ok(())
}

fn audit_report(history: &ThemeHistory, settings: &DesignSettings, out: &mut impl Write) -> Result<()> {
    let checks = audit_theme(&history.theme(), settings);
    writeln!(out, "{} ({} mode)", command::status_line(history), settings.mode)?;
    for c in &checks {
        writeln!(
            out,
            "  {:<5}{:>6.2}:1  {:<28}{} on {}",
            c.grade(),
            c.contrast,
            c.label,
            c.foreground,
            c.background
        )?;
    }

    let score = ComplianceScore::from_checks(&checks);
    writeln!(
        out,
        "AA {}/{} ({}%)  AAA {}/{} ({}%)",
        score.passing_aa,
        score.total,
        score.percentage_aa,
        score.passing_aaa,
        score.total,
        score.percentage_aaa
    )?;

    for (check, s) in suggestions(&checks) {
        writeln!(out, "  {}: {} -> {}", check.label, s.reason, s.suggested)?;
    }
    Ok(())
}

/// Run session commands from `input` until EOF or `quit`.
fn session(input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut history = ThemeHistory::new();
    for line in input.lines() {
        let line = line.context("failed to read session input")?;
        match command::run_line(&line, &mut history) {
            CommandResult::Ok(Some(msg)) => writeln!(out, "{msg}")?,
            CommandResult::Ok(None) => {}
            CommandResult::Err(msg) => {
                tracing::warn!(input = %line, "{msg}");
                writeln!(out, "error: {msg}")?;
            }
            CommandResult::Quit => break,
        }
    }
    Ok(())
}

const fn verdict(pass: bool) -> &'static str {
    if pass { "pass" } else { "fail" }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("dresscode: {:#}", anyhow::Error::new(e));
            return ExitCode::FAILURE;
        }
    };
    match config.log_level() {
        Ok(level) => logging::init(level),
        Err(e) => {
            eprintln!("dresscode: {e}");
            return ExitCode::FAILURE;
        }
    }

    let setup = Setup::new(config, cli.mode);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(cli, &setup, &mut out) {
        eprintln!("dresscode: {e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

// ─── Tests ──────────────────────────────────────────────────────────────────
