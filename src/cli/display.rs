// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the tissue-search CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. `TISSUE_THEME`
//! picks explicitly, otherwise `COLORFGBG` is consulted, otherwise dark.
//! `NO_COLOR` and non-TTY stdout turn colors off entirely, which also keeps
//! `--html` output clean when piped.

use std::collections::HashSet;
use std::sync::OnceLock;

use tissue_search::{CheckReport, IssueKind, ResultSet, SearchIndex};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("TISSUE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": backgrounds 7 and up (except 8) are light
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

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

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
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

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

/// Cut to `max` visible characters, marking the cut with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = border();
    let reset = reset();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset,
        content,
        " ".repeat(pad),
        border,
        reset
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border();
    let reset = reset();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset,
        label_part,
        border,
        "─".repeat(remaining),
        reset
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// COMMAND OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// Matches for `search`, one row per entry: title then url.
pub fn print_results(query: &str, results: &ResultSet<'_>, total: usize) {
    let label = if query.trim().is_empty() {
        "ALL ENTRIES".to_string()
    } else {
        format!("RESULTS FOR {:?}", query.trim())
    };
    section_top(&label);

    if results.is_empty() {
        row(&format!(" {}", themed(YELLOW, &[], "No matches found.")));
    }

    let title_width = BOX_WIDTH / 2 - 2;
    for entry in results.iter() {
        let title = truncate(&entry.title, title_width);
        let pad = title_width.saturating_sub(visible_len(&title));
        let url = truncate(&entry.url, BOX_WIDTH - title_width - 3);
        row(&format!(
            " {}{} {}",
            themed(BLUE, &[BOLD], &title),
            " ".repeat(pad),
            themed(GRAY, &[DIM], &url)
        ));
    }

    row("");
    row(&format!(
        " {} of {} entries",
        themed(GREEN, &[BOLD], &results.len().to_string()),
        total
    ));
    section_bot();
}

/// Findings for `check`.
pub fn print_report(report: &CheckReport) {
    section_top("INDEX CHECK");
    if report.is_clean() {
        row(&format!(
            " {} {} entries, no issues",
            themed(GREEN, &[BOLD], "✓"),
            report.entries
        ));
        section_bot();
        return;
    }

    for issue in &report.issues {
        let badge = match issue.kind {
            IssueKind::UppercaseKeyword { .. } => themed(YELLOW, &[BOLD], "case"),
            IssueKind::NoKeywords => themed(YELLOW, &[BOLD], "empty"),
            IssueKind::DuplicateUrl { .. } => themed(RED, &[BOLD], "dup"),
        };
        let pad = 5usize.saturating_sub(visible_len(&badge));
        let line = truncate(&issue.to_string(), BOX_WIDTH - 9);
        row(&format!(" {}{} {}", badge, " ".repeat(pad), line));
    }
    row("");
    row(&format!(
        " {} issues in {} entries",
        themed(RED, &[BOLD], &report.issues.len().to_string()),
        report.entries
    ));
    section_bot();
}

/// Summary for `inspect`.
pub fn print_summary(index: &SearchIndex) {
    let keywords: usize = index.iter().map(|e| e.keywords.len()).sum();
    let distinct_urls: HashSet<&str> = index.iter().map(|e| e.url.as_str()).collect();

    section_top("SEARCH INDEX");
    row(&format!(" {:<16}{}", "entries", index.len()));
    row(&format!(" {:<16}{}", "keywords", keywords));
    row(&format!(" {:<16}{}", "distinct urls", distinct_urls.len()));
    section_bot();
}
