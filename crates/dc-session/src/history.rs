//! Theme history: the one piece of mutable state in the engine.
//!
//! Holds the current primary/complementary pair and a bounded, linear
//! undo/redo log of snapshots. Every mutation pushes a [`HistoryEntry`];
//! [`ThemeHistory::undo`] and [`ThemeHistory::redo`] move a cursor over the
//! log and restore the entry under it.
//!
//! - The log never holds more than [`MAX_HISTORY_SIZE`] entries. Once full,
//!   the oldest entry is evicted on every push.
//! - Pushing after an undo discards everything past the cursor. There is no
//!   undo tree.
//! - Setting the primary always recomputes the complementary as its hue
//!   complement. Setting the complementary directly breaks that link until
//!   the next primary change.
//!
//! Malformed hex is rejected before it reaches the log, so a failed
//! operation never leaves a partial entry behind.
//!
//! `ThemeHistory` is a plain owned value with a single writer. Wrap it in a
//! mutex if it is ever shared across threads.

use std::collections::VecDeque;

use dc_color::{ColorError, Hsl, hex_to_hsl};
use dc_theme::palette::{ColorTheme, complementary_hue};
use dc_theme::presets::preset_by_id;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Maximum number of snapshots kept in the log.
pub const MAX_HISTORY_SIZE: usize = 50;

/// Primary color at startup and after a reset.
pub const DEFAULT_PRIMARY: Hsl = Hsl {
    h: 114.0,
    s: 100.0,
    l: 58.0,
};

/// Complementary color at startup and after a reset.
pub const DEFAULT_COMPLEMENTARY: Hsl = Hsl {
    h: 294.0,
    s: 100.0,
    l: 58.0,
};

// ---------------------------------------------------------------------------
// HistoryEntry
// ---------------------------------------------------------------------------

/// An immutable snapshot of the two source colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub primary: Hsl,
    pub complementary: Hsl,
}

impl HistoryEntry {
    #[must_use]
    pub const fn new(primary: Hsl, complementary: Hsl) -> Self {
        Self {
            primary,
            complementary,
        }
    }
}

impl Default for HistoryEntry {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY, DEFAULT_COMPLEMENTARY)
    }
}

// ---------------------------------------------------------------------------
// ThemeHistory
// ---------------------------------------------------------------------------

/// Current colors plus a bounded undo/redo log.
///
/// Invariant: `cursor < entries.len()`, `entries.len() <= MAX_HISTORY_SIZE`,
/// and `current == entries[cursor]`.
#[derive(Debug, Clone)]
pub struct ThemeHistory {
    entries: VecDeque<HistoryEntry>,
    cursor: usize,
    current: HistoryEntry,
}

impl ThemeHistory {
    /// Start from the default colors with a single-entry log.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(HistoryEntry::default())
    }

    /// Start from `entry` with a single-entry log.
    #[must_use]
    pub fn starting_at(entry: HistoryEntry) -> Self {
        let mut entries = VecDeque::with_capacity(MAX_HISTORY_SIZE);
        entries.push_back(entry);
        Self {
            entries,
            cursor: 0,
            current: entry,
        }
    }

    // -- Mutations ----------------------------------------------------------

    /// Set the primary hue at full saturation and 50% lightness.
    pub fn update_primary_color(&mut self, hue: f64) {
        self.update_primary_hsl(hue, 100.0, 50.0);
    }

    /// Set the primary color. The complementary follows it: opposite hue,
    /// same saturation and lightness.
    pub fn update_primary_hsl(&mut self, hue: f64, saturation: f64, lightness: f64) {
        let primary = Hsl::new(hue, saturation, lightness);
        let complementary = Hsl::new(complementary_hue(primary.h), primary.s, primary.l);
        self.push(HistoryEntry::new(primary, complementary));
    }

    /// Set the primary from a hex string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] and leaves the state untouched if
    /// `hex` is malformed.
    pub fn update_primary_from_hex(&mut self, hex: &str) -> Result<(), ColorError> {
        let hsl = parse_hex(hex)?;
        self.update_primary_hsl(hsl.h, hsl.s, hsl.l);
        Ok(())
    }

    /// Set the complementary independently of the primary.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] and leaves the state untouched if
    /// `hex` is malformed.
    pub fn update_complementary_from_hex(&mut self, hex: &str) -> Result<(), ColorError> {
        let complementary = parse_hex(hex)?;
        self.push(HistoryEntry::new(self.current.primary, complementary));
        Ok(())
    }

    /// Apply a preset, given either a preset id or a hex color.
    ///
    /// Behaves exactly like [`update_primary_from_hex`](Self::update_primary_from_hex)
    /// with the preset's primary.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] if `preset` is neither a known id
    /// nor valid hex.
    pub fn apply_preset(&mut self, preset: &str) -> Result<(), ColorError> {
        let hex = preset_by_id(preset.trim()).map_or(preset, |p| p.primary);
        self.update_primary_from_hex(hex)
    }

    /// Drop the whole log and return to the defaults.
    pub fn reset_colors(&mut self) {
        *self = Self::new();
        debug!("history reset to defaults");
    }

    /// Step back one entry. Returns the restored entry, or `None` if already
    /// at the oldest one.
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        if self.cursor == 0 {
            return None;
        }
        self.move_to(self.cursor - 1)
    }

    /// Step forward one entry. Returns the restored entry, or `None` if
    /// already at the newest one.
    pub fn redo(&mut self) -> Option<HistoryEntry> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.move_to(self.cursor + 1)
    }

    // -- Queries ------------------------------------------------------------

    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of entries in the log. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the log holds at least the starting entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor position in the log.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn current(&self) -> HistoryEntry {
        self.current
    }

    #[must_use]
    pub const fn primary(&self) -> Hsl {
        self.current.primary
    }

    #[must_use]
    pub const fn complementary(&self) -> Hsl {
        self.current.complementary
    }

    /// Oldest to newest.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The full palette derived from the current colors.
    #[must_use]
    pub fn theme(&self) -> ColorTheme {
        ColorTheme::derive(self.current.primary, self.current.complementary)
    }

    // -- Internals ----------------------------------------------------------

    /// Truncate everything past the cursor, append, evict from the front if
    /// over capacity, and make the new entry current.
    fn push(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(entry);
        if self.entries.len() > MAX_HISTORY_SIZE {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
        self.current = entry;
        debug!(
            cursor = self.cursor,
            len = self.entries.len(),
            primary = %entry.primary,
            complementary = %entry.complementary,
            "history push"
        );
    }

    fn move_to(&mut self, index: usize) -> Option<HistoryEntry> {
        let entry = *self.entries.get(index)?;
        self.cursor = index;
        self.current = entry;
        debug!(cursor = self.cursor, len = self.entries.len(), "history move");
        Some(entry)
    }
}

impl Default for ThemeHistory {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_hex(hex: &str) -> Result<Hsl, ColorError> {
    hex_to_hsl(hex).ok_or_else(|| {
        warn!(input = hex, "rejected malformed hex color");
        ColorError::InvalidHex(hex.to_string())
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
