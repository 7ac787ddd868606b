//! Session commands: a line-oriented interface to [`ThemeHistory`].
//!
//! Each input line is parsed into a [`Command`] and executed against the
//! history. The result is a [`CommandResult`] carrying an optional message
//! for the user, an error message, or a request to end the session.
//!
//! # Supported commands
//!
//! | Command                 | Action                                        |
//! |-------------------------|-----------------------------------------------|
//! | `hue H [S [L]]`         | Set the primary by HSL (S = 100, L = 50)      |
//! | `primary HEX`           | Set the primary from hex                      |
//! | `complementary HEX`     | Set the complementary on its own              |
//! | `preset ID\|HEX`         | Apply a named preset, or a raw hex            |
//! | `undo` / `u`            | Step back one change                          |
//! | `redo` / `r`            | Step forward one change                       |
//! | `reset`                 | Return to the default colors, clear history   |
//! | `show`                  | Print the current palette                     |
//! | `presets`               | List preset ids                               |
//! | `help` / `?`            | Print this table                              |
//! | `quit` / `q` / `exit`   | End the session                               |
//!
//! Blank lines and lines starting with `#` are ignored.

use std::fmt::Write as _;

use dc_theme::presets::presets_by_category;

use crate::history::ThemeHistory;

/// Short reference printed by `help`.
pub const HELP: &str = "\
hue H [S [L]]        set primary by HSL (S=100, L=50)
primary HEX          set primary from hex
complementary HEX    set complementary independently
preset ID|HEX        apply a preset
undo | redo          step through history
reset                back to defaults
show                 print the current palette
presets              list preset ids
quit                 end the session";

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A parsed session command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `hue H [S [L]]`: set the primary by HSL, complementary follows.
    Hue {
        hue: f64,
        saturation: f64,
        lightness: f64,
    },

    /// `primary HEX`
    Primary(String),

    /// `complementary HEX`
    Complementary(String),

    /// `preset ID|HEX`
    Preset(String),

    Undo,
    Redo,
    Reset,
    Show,
    Presets,
    Help,
    Quit,

    /// Blank line or comment.
    Nop,

    /// Unknown or malformed command, with the full input for error reporting.
    Unknown(String),
}

/// The result of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Command succeeded. Optional message for the user.
    Ok(Option<String>),

    /// Command failed. Error message for the user.
    Err(String),

    /// The session should end.
    Quit,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse one input line into a [`Command`].
#[must_use]
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Command::Nop;
    }

    // Split into command and arguments.
    let (cmd, arg) = trimmed
        .find(char::is_whitespace)
        .map_or((trimmed, ""), |pos| {
            (&trimmed[..pos], trimmed[pos..].trim_start())
        });

    let unknown = || Command::Unknown(trimmed.to_string());

    match cmd.to_ascii_lowercase().as_str() {
        "hue" => parse_hue(arg).unwrap_or_else(unknown),
        "primary" | "p" if !arg.is_empty() => Command::Primary(arg.to_string()),
        "complementary" | "comp" | "c" if !arg.is_empty() => {
            Command::Complementary(arg.to_string())
        }
        "preset" if !arg.is_empty() => Command::Preset(arg.to_string()),
        "undo" | "u" if arg.is_empty() => Command::Undo,
        "redo" | "r" if arg.is_empty() => Command::Redo,
        "reset" if arg.is_empty() => Command::Reset,
        "show" if arg.is_empty() => Command::Show,
        "presets" if arg.is_empty() => Command::Presets,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => unknown(),
    }
}

/// `H [S [L]]`, all finite numbers, nothing trailing.
fn parse_hue(arg: &str) -> Option<Command> {
    let mut nums = arg.split_whitespace().map(|t| {
        t.trim_end_matches(['%', '°'])
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    });

    let hue = nums.next()??;
    let saturation = nums.next().unwrap_or(Some(100.0))?;
    let lightness = nums.next().unwrap_or(Some(50.0))?;
    if nums.next().is_some() {
        return None;
    }

    Some(Command::Hue {
        hue,
        saturation,
        lightness,
    })
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Run `cmd` against `history`.
pub fn execute(cmd: &Command, history: &mut ThemeHistory) -> CommandResult {
    match cmd {
        Command::Hue {
            hue,
            saturation,
            lightness,
        } => {
            history.update_primary_hsl(*hue, *saturation, *lightness);
            CommandResult::Ok(Some(status_line(history)))
        }
        Command::Primary(hex) => applied(history.update_primary_from_hex(hex), history),
        Command::Complementary(hex) => {
            applied(history.update_complementary_from_hex(hex), history)
        }
        Command::Preset(id) => match history.apply_preset(id) {
            Ok(()) => CommandResult::Ok(Some(status_line(history))),
            Err(_) => CommandResult::Err(format!("Unknown preset or invalid hex: {id}")),
        },
        Command::Undo => match history.undo() {
            Some(_) => CommandResult::Ok(Some(status_line(history))),
            None => CommandResult::Err("Already at oldest change".to_string()),
        },
        Command::Redo => match history.redo() {
            Some(_) => CommandResult::Ok(Some(status_line(history))),
            None => CommandResult::Err("Already at newest change".to_string()),
        },
        Command::Reset => {
            history.reset_colors();
            CommandResult::Ok(Some(status_line(history)))
        }
        Command::Show => CommandResult::Ok(Some(palette_report(history))),
        Command::Presets => CommandResult::Ok(Some(preset_list())),
        Command::Help => CommandResult::Ok(Some(HELP.to_string())),
        Command::Quit => CommandResult::Quit,
        Command::Nop => CommandResult::Ok(None),
        Command::Unknown(input) => CommandResult::Err(format!("Not a command: {input}")),
    }
}

/// Parse and run one line.
pub fn run_line(input: &str, history: &mut ThemeHistory) -> CommandResult {
    execute(&parse_command(input), history)
}

fn applied<E: std::fmt::Display>(result: Result<(), E>, history: &ThemeHistory) -> CommandResult {
    match result {
        Ok(()) => CommandResult::Ok(Some(status_line(history))),
        Err(e) => CommandResult::Err(e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// One-line summary: both colors and the cursor position.
///
/// `primary #3EFF29 hsl(114, 100%, 58%) | complementary #EA29FF hsl(294, 100%, 58%) | 1/1`
#[must_use]
pub fn status_line(history: &ThemeHistory) -> String {
    let entry = history.current();
    format!(
        "primary {} {} | complementary {} {} | {}/{}",
        entry.primary.to_hex(),
        entry.primary,
        entry.complementary.to_hex(),
        entry.complementary,
        history.index() + 1,
        history.len(),
    )
}

/// The status line followed by every ramp.
#[must_use]
pub fn palette_report(history: &ThemeHistory) -> String {
    let theme = history.theme();
    let mut out = status_line(history);
    for (name, ramp) in [
        ("tints", &theme.tints),
        ("shades", &theme.shades),
        ("neutral-light", &theme.neutral_lighter),
        ("neutral-dark", &theme.neutral_darker),
    ] {
        let _ = write!(out, "\n{name:<14}{}", ramp.join(" "));
    }
    out
}

/// Preset ids grouped by category.
#[must_use]
pub fn preset_list() -> String {
    let mut out = String::new();
    for (category, presets) in presets_by_category() {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = write!(out, "{category}:");
        for p in presets {
            let _ = write!(out, "\n  {:<22}{}  {}", p.id, p.primary, p.name);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // -- Parsing ------------------------------------------------------------

    #[test]
    fn parse_hue_defaults() {
        assert_eq!(
            parse_command("hue 200"),
            Command::Hue {
                hue: 200.0,
                saturation: 100.0,
                lightness: 50.0
            }
        );
    }

    #[test]
    fn parse_hue_full() {
        assert_eq!(
            parse_command("hue 217 91% 60%"),
            Command::Hue {
                hue: 217.0,
                saturation: 91.0,
                lightness: 60.0
            }
        );
    }

    #[test]
    fn parse_hue_rejects_garbage() {
        assert_eq!(parse_command("hue"), Command::Unknown("hue".to_string()));
        assert_eq!(
            parse_command("hue blue"),
            Command::Unknown("hue blue".to_string())
        );
        assert_eq!(
            parse_command("hue 1 2 3 4"),
            Command::Unknown("hue 1 2 3 4".to_string())
        );
        assert!(matches!(parse_command("hue NaN"), Command::Unknown(_)));
    }

    #[test]
    fn parse_hex_commands() {
        assert_eq!(
            parse_command("primary #3B82F6"),
            Command::Primary("#3B82F6".to_string())
        );
        assert_eq!(
            parse_command("  comp   fff "),
            Command::Complementary("fff".to_string())
        );
        assert_eq!(
            parse_command("preset brand-blue"),
            Command::Preset("brand-blue".to_string())
        );
    }

    #[test]
    fn parse_missing_argument_is_unknown() {
        assert_eq!(
            parse_command("primary"),
            Command::Unknown("primary".to_string())
        );
        assert!(matches!(parse_command("preset"), Command::Unknown(_)));
    }

    #[test]
    fn parse_bare_commands() {
        assert_eq!(parse_command("undo"), Command::Undo);
        assert_eq!(parse_command("U"), Command::Undo);
        assert_eq!(parse_command("redo"), Command::Redo);
        assert_eq!(parse_command("reset"), Command::Reset);
        assert_eq!(parse_command("show"), Command::Show);
        assert_eq!(parse_command("presets"), Command::Presets);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("exit"), Command::Quit);
    }

    #[test]
    fn parse_bare_command_with_argument_is_unknown() {
        assert_eq!(
            parse_command("undo 3"),
            Command::Unknown("undo 3".to_string())
        );
    }

    #[test]
    fn parse_blank_and_comment() {
        assert_eq!(parse_command(""), Command::Nop);
        assert_eq!(parse_command("   "), Command::Nop);
        assert_eq!(parse_command("# brand exploration"), Command::Nop);
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            parse_command("foobar"),
            Command::Unknown("foobar".to_string())
        );
    }

    // -- Execution ----------------------------------------------------------

    #[test]
    fn execute_hue_updates_history() {
        let mut h = ThemeHistory::new();
        let r = run_line("hue 200", &mut h);
        assert!(matches!(r, CommandResult::Ok(Some(_))));
        assert_eq!(h.primary().h, 200.0);
        assert_eq!(h.complementary().h, 20.0);
    }

    #[test]
    fn execute_invalid_hex_reports_error() {
        let mut h = ThemeHistory::new();
        let r = run_line("primary #12", &mut h);
        assert_eq!(r, CommandResult::Err("invalid hex color: \"#12\"".to_string()));
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn execute_preset() {
        let mut h = ThemeHistory::new();
        assert!(matches!(
            run_line("preset material-teal", &mut h),
            CommandResult::Ok(_)
        ));
        assert_eq!(h.primary().to_hex(), "#009688");
        assert_eq!(
            run_line("preset plaid", &mut h),
            CommandResult::Err("Unknown preset or invalid hex: plaid".to_string())
        );
    }

    #[test]
    fn execute_undo_redo_boundaries() {
        let mut h = ThemeHistory::new();
        assert_eq!(
            run_line("undo", &mut h),
            CommandResult::Err("Already at oldest change".to_string())
        );
        assert_eq!(
            run_line("redo", &mut h),
            CommandResult::Err("Already at newest change".to_string())
        );
        run_line("hue 10", &mut h);
        assert!(matches!(run_line("undo", &mut h), CommandResult::Ok(_)));
        assert_eq!(h.index(), 0);
        assert!(matches!(run_line("redo", &mut h), CommandResult::Ok(_)));
        assert_eq!(h.index(), 1);
    }

    #[test]
    fn execute_reset() {
        let mut h = ThemeHistory::new();
        run_line("hue 10", &mut h);
        run_line("reset", &mut h);
        assert_eq!(h.len(), 1);
        assert_eq!(h.primary().to_hex(), "#3EFF29");
    }

    #[test]
    fn execute_quit_and_nop() {
        let mut h = ThemeHistory::new();
        assert_eq!(run_line("quit", &mut h), CommandResult::Quit);
        assert_eq!(run_line("", &mut h), CommandResult::Ok(None));
    }

    #[test]
    fn execute_unknown() {
        let mut h = ThemeHistory::new();
        assert_eq!(
            run_line("paint it black", &mut h),
            CommandResult::Err("Not a command: paint it black".to_string())
        );
    }

    // -- Reports ------------------------------------------------------------

    #[test]
    fn status_line_format() {
        let h = ThemeHistory::new();
        assert_eq!(
            status_line(&h),
            "primary #3EFF29 hsl(114, 100%, 58%) | complementary #EA29FF hsl(294, 100%, 58%) | 1/1"
        );
    }

    #[test]
    fn palette_report_lists_ramps() {
        let h = ThemeHistory::new();
        let report = palette_report(&h);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("tints"));
        assert!(lines[4].starts_with("neutral-dark"));
        assert_eq!(lines[1].split_whitespace().count(), 10);
    }

    #[test]
    fn preset_listing_has_every_category() {
        let mut h = ThemeHistory::new();
        let CommandResult::Ok(Some(text)) = run_line("presets", &mut h) else {
            panic!("presets should succeed");
        };
        assert!(text.starts_with("Brand Colors:"));
        assert!(text.contains("Material Design:"));
        assert!(text.contains("  analogous-purple"));
    }
}
