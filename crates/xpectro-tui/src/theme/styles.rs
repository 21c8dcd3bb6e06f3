//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use xpectro_core::{DomainStatus, TaskStatus};

use super::Palette;

// --- Text styles ---
pub fn text(p: &Palette) -> Style {
    Style::default().fg(p.text)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn title(p: &Palette) -> Style {
    Style::default().fg(p.text).add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    accent(p).add_modifier(Modifier::BOLD)
}

/// Highlighted row/entry
pub fn selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.background)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

pub fn keycap(p: &Palette) -> Style {
    Style::default().fg(p.accent_alt).add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn success(p: &Palette) -> Style {
    Style::default().fg(p.success)
}

pub fn warning(p: &Palette) -> Style {
    Style::default().fg(p.warning)
}

pub fn danger(p: &Palette) -> Style {
    Style::default().fg(p.danger)
}

pub fn task_status(p: &Palette, status: TaskStatus) -> Style {
    match status {
        TaskStatus::HighRisk => danger(p).add_modifier(Modifier::BOLD),
        TaskStatus::Safe => success(p),
        TaskStatus::Review => warning(p),
    }
}

pub fn domain_status(p: &Palette, status: DomainStatus) -> Style {
    match status {
        DomainStatus::Secured => success(p),
        DomainStatus::Review => warning(p),
        DomainStatus::Pending => text_secondary(p),
    }
}

// --- Blocks ---
/// Rounded card container
pub fn card_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { p.border_active } else { p.border }))
        .style(Style::default().bg(p.card))
}

pub fn popup_block(p: &Palette, title: &'static str) -> Block<'static> {
    Block::default()
        .title(title)
        .title_style(accent_bold(p))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border_active))
        .style(Style::default().bg(p.popup))
}
