// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the autocomplete CLI.
//!
//! Results print as `weight<TAB>query`, the same shape the dataset uses, so
//! output can be piped straight back in. When stdout is a terminal the weights
//! and headers pick up OneDark or One Light colors. `NO_COLOR` turns all of
//! that off.
//!
//! # Theme detection order
//!
//! 1. `AUTOCOMPLETE_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use autocomplete::Term;
use std::sync::OnceLock;

/// Prompt printed before each interactive read.
pub const PROMPT: &str = "Enter a prefix (or ctrl-d to quit): ";

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    if let Some(theme) = explicit {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", background 7+ (except 8) is a light terminal
    if let Some(bg) = colorfgbg.and_then(|v| v.split(';').next_back()) {
        if let Ok(bg_num) = bg.parse::<u8>() {
            if bg_num >= 7 && bg_num != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

fn detect_theme() -> Theme {
    let explicit = std::env::var("AUTOCOMPLETE_THEME").ok();
    let colorfgbg = std::env::var("COLORFGBG").ok();
    parse_theme(explicit.as_deref(), colorfgbg.as_deref())
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
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

theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
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

/// Calculate visible length (excluding ANSI codes)
#[allow(dead_code)]
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Header line above a result listing.
///
/// `shown` is how many results will be printed, `total` how many matched.
pub fn matches_header(prefix: &str, shown: usize, total: usize) -> String {
    if total == 0 {
        return themed(GRAY, &[], "No matches");
    }
    let scope = if total > shown {
        format!("First {}", shown)
    } else {
        "All".to_string()
    };
    let text = format!(
        "{} matches for \"{}\", in descending order by weight:",
        scope, prefix
    );
    themed(CYAN, &[BOLD], &text)
}

/// Section title, e.g. `Top 10 by reverse-weight order:`.
pub fn listing_header(text: &str) -> String {
    themed(CYAN, &[BOLD], text)
}

/// One result: weight and query separated by a tab.
pub fn term_line(term: &Term) -> String {
    format!(
        "{}\t{}",
        themed(YELLOW, &[], &term.weight().to_string()),
        term.query()
    )
}

/// `count<TAB>prefix`, with the prefix quoted so empty prefixes stay visible.
pub fn count_line(prefix: &str, count: usize) -> String {
    let count_text = count.to_string();
    let count_text = if count == 0 {
        themed(GRAY, &[], &count_text)
    } else {
        themed(YELLOW, &[BOLD], &count_text)
    };
    format!("{}\t\"{}\"", count_text, prefix)
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
