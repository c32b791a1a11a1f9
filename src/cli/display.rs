// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the klein CLI.
//!
//! Result cards that respect your color scheme. OneDark for dark terminals,
//! One Light for light ones. Respects `NO_COLOR` and stays plain when stdout
//! isn't a TTY, so piping into other tools just works.
//!
//! Cards use a left gutter instead of a full box: page text is often CJK, and
//! double-width characters make right borders impossible to line up.
//!
//! # Theme detection order
//!
//! 1. `KLEIN_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::fmt::Write as _;
use std::sync::OnceLock;

use chrono::{DateTime, Local};
use klein::{block_link, AggregatedBlock, Timestamp};

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via KLEIN_THEME
    if let Ok(theme) = std::env::var("KLEIN_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Local date and time for a Unix timestamp, or the raw number if out of range.
pub fn format_timestamp(ts: Timestamp) -> String {
    match DateTime::from_timestamp(ts, 0) {
        Some(utc) => utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => ts.to_string(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT CARDS
// ═══════════════════════════════════════════════════════════════════════════

/// How to render result cards.
#[derive(Debug, Clone)]
pub struct CardStyle<'a> {
    pub base_url: &'a str,
    pub project: &'a str,
    /// Blocks with more lines than this show only the first lines.
    pub collapse_lines: usize,
    pub expand: bool,
}

/// Render one block as a card.
///
/// ```text
/// ▌ Page title · 2024-05-01 12:34
/// ▌ https://scrapbox.io/project/Page%20title#5f0c...
///   first line
///   second line
/// ```
pub fn render_card(block: &AggregatedBlock, style: &CardStyle<'_>) -> String {
    let gutter = themed(BLUE, &[BOLD], "▌");
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {} {}",
        gutter,
        themed(CYAN, &[BOLD], &block.title),
        themed(GRAY, &[], &format!("· {}", format_timestamp(block.updated)))
    );
    let _ = writeln!(
        out,
        "{} {}",
        gutter,
        themed(GRAY, &[DIM], &block_link(style.base_url, style.project, block))
    );

    let total = block.line_count();
    let collapsed = !style.expand && total > style.collapse_lines;
    let shown = if collapsed { style.collapse_lines } else { total };

    for line in block.lines().take(shown) {
        let _ = writeln!(out, "  {}", line);
    }
    if collapsed {
        let _ = writeln!(
            out,
            "  {}",
            themed(
                YELLOW,
                &[],
                &format!("… {} lines in total (--expand to show all)", total)
            )
        );
    }
    out
}

/// One-line summary printed before the cards.
pub fn summary(found: usize, shown: usize, filter: Option<&str>) -> String {
    match filter {
        Some(filter) if !filter.is_empty() => themed(
            GREEN,
            &[BOLD],
            &format!("✓ {} blocks found, {} match \"{}\"", found, shown, filter),
        ),
        _ => themed(GREEN, &[BOLD], &format!("✓ {} blocks found", found)),
    }
}

/// Message for an empty result or an empty narrowed result.
pub fn nothing_found(found: usize) -> String {
    if found == 0 {
        themed(YELLOW, &[], "No block mentions that word. Try another search word.")
    } else {
        themed(YELLOW, &[], "No block matches the filter. Try another filter word.")
    }
}

/// Error line for the terminal.
pub fn error_line(message: &str) -> String {
    themed(RED, &[BOLD], &format!("✗ {}", message))
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
