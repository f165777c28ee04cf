use std::io::{self, Write};

use crate::ui::contact::{ContactForm, Notification};
use crate::ui::panel::{BadgeStyle, DiagnosisStatus, ResultPanel};

// @module: Terminal rendering of view state
//
// Render functions take a state value and a write handle, so tests can
// render into a buffer and the CLI into stdout.

const BOLD_GREEN: &str = "\x1B[1;32m";
const BOLD_BLUE: &str = "\x1B[1;34m";
const BOLD_YELLOW: &str = "\x1B[1;33m";
const BOLD_RED: &str = "\x1B[1;31m";
const GRAY: &str = "\x1B[0;90m";
const RESET: &str = "\x1B[0m";

/// ANSI style for a badge
fn badge_color(style: BadgeStyle) -> &'static str {
    match style {
        BadgeStyle::Neutral => GRAY,
        BadgeStyle::Online => BOLD_BLUE,
        BadgeStyle::Offline => BOLD_YELLOW,
    }
}

/// ANSI style for the diagnosis label
fn status_color(status: &DiagnosisStatus) -> &'static str {
    match status {
        DiagnosisStatus::Idle | DiagnosisStatus::Analyzing => GRAY,
        DiagnosisStatus::Diagnosed(_) => BOLD_GREEN,
        DiagnosisStatus::Error | DiagnosisStatus::ConnectionFailed => BOLD_RED,
    }
}

/// Render the result panel
///
/// A hidden panel renders nothing; it only becomes visible once an upload
/// has been staged.
pub fn render_panel<W: Write>(panel: &ResultPanel, out: &mut W) -> io::Result<()> {
    if !panel.visible {
        return Ok(());
    }

    if let Some(file_name) = &panel.file_name {
        writeln!(out, "Selected: {}", file_name)?;
    }

    writeln!(
        out,
        "{}{}{}  {}[{}]{}",
        status_color(&panel.status),
        panel.status,
        RESET,
        badge_color(panel.badge.style),
        panel.badge.text,
        RESET
    )?;

    if let Some(notice) = &panel.notice {
        writeln!(out, "{}{}{}", BOLD_RED, notice, RESET)?;
    }
    if let Some(hint) = &panel.hint {
        writeln!(out, "{}{}{}", BOLD_YELLOW, hint, RESET)?;
    }

    if let Some(image_path) = &panel.image_path {
        writeln!(out, "Image:       {}", image_path)?;
    }
    writeln!(out, "Description: {}", panel.description)?;
    writeln!(out, "Remedy:      {}", panel.remedy)?;
    if let Some(search_url) = &panel.search_url {
        writeln!(out, "Learn more:  {}", search_url)?;
    }

    Ok(())
}

/// Render the contact form's control state and last notification
pub fn render_contact<W: Write>(form: &ContactForm, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}[{}]{}",
        if form.sending { GRAY } else { BOLD_GREEN },
        form.submit_label,
        RESET
    )?;

    match &form.notification {
        Some(Notification::Success(message)) => {
            writeln!(out, "{}✅ {}{}", BOLD_GREEN, message, RESET)?;
        }
        Some(Notification::Failure(message)) => {
            writeln!(out, "{}❌ Failed: {}{}", BOLD_RED, message, RESET)?;
        }
        None => {}
    }

    Ok(())
}
