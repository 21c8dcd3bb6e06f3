//! Detection views (smishing, deepfake audio, vishing)
//!
//! Sub-tabs across the top, then either the filtered task list or the
//! analytics charts, with the educational card alongside.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Cell, Gauge, Paragraph, Row, Table, Tabs, Widget, Wrap},
};
use xpectro_app::view_model::DetectionModel;
use xpectro_core::StatusFilter;

use super::CARET;
use crate::theme::{styles, Palette};

pub struct DetectionView<'a> {
    model: &'a DetectionModel,
    searching: bool,
    palette: &'a Palette,
}

impl<'a> DetectionView<'a> {
    pub fn new(model: &'a DetectionModel, palette: &'a Palette) -> Self {
        Self {
            model,
            searching: false,
            palette,
        }
    }

    /// Draw the search box as focused
    pub fn searching(mut self, searching: bool) -> Self {
        self.searching = searching;
        self
    }

    fn render_tabs(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        Tabs::new(self.model.sub_tabs.iter().map(|t| Line::from(*t)))
            .select(self.model.active_sub_tab)
            .style(styles::text_secondary(p))
            .highlight_style(styles::selected(p))
            .divider(Span::styled("│", styles::text_muted(p)))
            .render(area, buf);
    }

    fn render_tasks(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let [search_area, table_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(area);

        let status = match self.model.query.status_filter {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        };
        let caret = if self.searching { CARET } else { "" };
        Line::from(vec![
            Span::styled(" ⌕ ", styles::accent(p)),
            Span::styled(format!("{}{}", self.model.query.text, caret), styles::text(p)),
            Span::styled("   status: ", styles::text_muted(p)),
            Span::styled(status, styles::accent(p)),
        ])
        .render(search_area, buf);

        let rows = self.model.tasks.iter().map(|task| {
            Row::new(vec![
                Cell::from(Span::styled(task.id.clone(), styles::text_secondary(p))),
                Cell::from(Span::styled(
                    task.status.label(),
                    styles::task_status(p, task.status),
                )),
                Cell::from(Span::styled(task.description.clone(), styles::text(p))),
                Cell::from(Span::styled(task.timestamp.clone(), styles::text_muted(p))),
            ])
        });
        let title = format!(" Live {} Tasks ", self.model.kind.label());
        Table::new(
            rows,
            [
                Constraint::Length(9),
                Constraint::Length(10),
                Constraint::Min(20),
                Constraint::Length(12),
            ],
        )
        .header(Row::new(vec!["ID", "Status", "Description", "When"]).style(styles::title(p)))
        .block(styles::card_block(p, self.searching).title(title))
        .render(table_area, buf);
    }

    fn render_analytics(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let [scans_area, radar_area] =
            Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);

        let bars: Vec<[Bar; 2]> = self
            .model
            .monthly_scans
            .iter()
            .map(|point| {
                [
                    Bar::default()
                        .value(point.scans)
                        .style(Style::default().fg(p.accent_alt))
                        .value_style(Style::default().fg(p.accent_alt).bg(p.accent_alt)),
                    Bar::default()
                        .value(point.risk)
                        .style(Style::default().fg(p.danger))
                        .value_style(Style::default().fg(p.danger).bg(p.danger)),
                ]
            })
            .collect();
        let mut chart = BarChart::default()
            .block(styles::card_block(p, false).title(" Scans vs Risk "))
            .bar_width(2)
            .bar_gap(0)
            .group_gap(2);
        for (point, group) in self.model.monthly_scans.iter().zip(&bars) {
            chart = chart.data(BarGroup::default().label(Line::from(point.month)).bars(group));
        }
        chart.render(scans_area, buf);

        let block = styles::card_block(p, false).title(" Biometric Analysis ");
        let inner = block.inner(radar_area);
        block.render(radar_area, buf);
        let rows = Layout::vertical(self.model.biometrics.iter().map(|_| Constraint::Length(1)))
            .split(inner);
        for (axis, row) in self.model.biometrics.iter().zip(rows.iter()) {
            let ratio = if axis.full_mark == 0 {
                0.0
            } else {
                (axis.value as f64 / axis.full_mark as f64).min(1.0)
            };
            Gauge::default()
                .gauge_style(Style::default().fg(p.accent).bg(p.card))
                .ratio(ratio)
                .label(format!("{} {}/{}", axis.subject, axis.value, axis.full_mark))
                .render(*row, buf);
        }
    }

    fn render_content(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let content = &self.model.content;
        let mut lines = vec![
            Line::from(Span::styled(content.title, styles::accent_bold(p))),
            Line::default(),
            Line::from(Span::styled(content.description, styles::text(p))),
            Line::default(),
            Line::from(Span::styled("Example", styles::text_muted(p))),
            Line::from(Span::styled(content.example, styles::warning(p))),
            Line::default(),
        ];
        lines.extend(content.tips.iter().map(|tip| {
            Line::from(vec![
                Span::styled("✓ ", styles::success(p)),
                Span::styled(*tip, styles::text_secondary(p)),
            ])
        }));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(styles::card_block(p, false))
            .render(area, buf);
    }
}

impl Widget for DetectionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [tabs_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(4)]).areas(area);
        self.render_tabs(tabs_area, buf);

        let [main_area, content_area] =
            Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
                .areas(body_area);
        if self.model.is_analytics() {
            self.render_analytics(main_area, buf);
        } else {
            self.render_tasks(main_area, buf);
        }
        self.render_content(content_area, buf);
    }
}
