//! Domain security view: summary, add form and the monitored domain table

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Row, Table, Widget},
};
use xpectro_app::view_model::DomainsModel;
use xpectro_core::StatusFilter;

use super::CARET;
use crate::theme::{styles, Palette};

/// Which line of the view has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainsFocus {
    #[default]
    Table,
    Search,
    Form,
}

pub struct DomainsView<'a> {
    model: &'a DomainsModel,
    focus: DomainsFocus,
    palette: &'a Palette,
}

impl<'a> DomainsView<'a> {
    pub fn new(model: &'a DomainsModel, palette: &'a Palette) -> Self {
        Self {
            model,
            focus: DomainsFocus::Table,
            palette,
        }
    }

    pub fn focus(mut self, focus: DomainsFocus) -> Self {
        self.focus = focus;
        self
    }

    fn render_summary(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        Line::from(vec![
            Span::styled(" Monitored: ", styles::text_muted(p)),
            Span::styled(self.model.total.to_string(), styles::title(p)),
            Span::styled("   SSL enabled: ", styles::text_muted(p)),
            Span::styled(self.model.ssl_enabled.to_string(), styles::success(p)),
        ])
        .render(area, buf);
    }

    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let editing = self.focus == DomainsFocus::Form;
        let url = if self.model.draft_url.is_empty() && !editing {
            Span::styled("domain.com", styles::text_muted(p))
        } else {
            Span::styled(
                format!("{}{}", self.model.draft_url, if editing { CARET } else { "" }),
                styles::text(p),
            )
        };
        let label_style = if editing {
            styles::accent_bold(p)
        } else {
            styles::text_muted(p)
        };
        Line::from(vec![
            Span::styled(" + Add ", label_style),
            Span::styled(
                format!("[{}://] ", self.model.draft_protocol.as_str()),
                styles::keycap(p),
            ),
            url,
        ])
        .render(area, buf);
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let caret = if self.focus == DomainsFocus::Search {
            CARET
        } else {
            ""
        };
        let status = match self.model.query.status_filter {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        };
        Line::from(vec![
            Span::styled(" ⌕ ", styles::accent(p)),
            Span::styled(format!("{}{}", self.model.query.text, caret), styles::text(p)),
            Span::styled("   status: ", styles::text_muted(p)),
            Span::styled(status, styles::accent(p)),
        ])
        .render(area, buf);
    }

    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let rows = self.model.records.iter().enumerate().map(|(i, record)| {
            let ssl = if record.ssl_enabled {
                Span::styled("● on", styles::success(p))
            } else {
                Span::styled("○ off", styles::danger(p))
            };
            let row = Row::new(vec![
                Cell::from(Span::styled(
                    format!("{}://{}", record.protocol.as_str(), record.url),
                    styles::text(p),
                )),
                Cell::from(Span::styled(
                    record.status.label(),
                    styles::domain_status(p, record.status),
                )),
                Cell::from(ssl),
                Cell::from(Span::styled(
                    record.added_date.format("%Y-%m-%d").to_string(),
                    styles::text_muted(p),
                )),
            ]);
            if i == self.model.selected && self.focus == DomainsFocus::Table {
                row.style(styles::selected(p))
            } else {
                row
            }
        });

        Table::new(
            rows,
            [
                Constraint::Min(24),
                Constraint::Length(9),
                Constraint::Length(6),
                Constraint::Length(11),
            ],
        )
        .header(Row::new(vec!["Domain", "Status", "SSL", "Added"]).style(styles::title(p)))
        .block(styles::card_block(p, self.focus == DomainsFocus::Table).title(" Domains "))
        .render(area, buf);
    }
}

impl Widget for DomainsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [summary, form, search, table] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .areas(area);

        self.render_summary(summary, buf);
        self.render_form(form, buf);
        self.render_search(search, buf);
        self.render_table(table, buf);
    }
}
