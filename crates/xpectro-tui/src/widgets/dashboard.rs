//! Dashboard: stat cards, weekly threat chart and distribution

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Gauge, Paragraph, Widget},
};
use xpectro_app::view_model::DashboardModel;
use xpectro_core::StatCard;

use crate::theme::{styles, Palette};

pub struct DashboardView<'a> {
    model: &'a DashboardModel,
    palette: &'a Palette,
}

impl<'a> DashboardView<'a> {
    pub fn new(model: &'a DashboardModel, palette: &'a Palette) -> Self {
        Self { model, palette }
    }

    fn render_card(&self, card: &StatCard, selected: bool, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, selected).title(Line::from(Span::styled(
            format!(" {} ", card.title),
            styles::text_secondary(p),
        )));
        let inner = block.inner(area);
        block.render(area, buf);

        // Threat counts going up are bad
        let change_style = if card.is_rising() {
            styles::danger(p)
        } else {
            styles::success(p)
        };
        Paragraph::new(vec![Line::from(vec![
            Span::styled(card.value.clone(), styles::title(p)),
            Span::raw("  "),
            Span::styled(card.change.clone(), change_style),
        ])])
        .render(inner, buf);
    }

    fn render_weekly(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let series = [p.accent, p.danger, p.warning];
        let bars: Vec<Vec<Bar>> = self
            .model
            .weekly_threats
            .iter()
            .map(|point| {
                [point.smishing, point.voice, point.vishing]
                    .into_iter()
                    .zip(series)
                    .map(|(value, color)| {
                        Bar::default()
                            .value(value)
                            .style(Style::default().fg(color))
                            .value_style(Style::default().fg(color).bg(color))
                    })
                    .collect()
            })
            .collect();

        let mut chart = BarChart::default()
            .block(styles::card_block(p, false).title(" Weekly Threats "))
            .bar_width(1)
            .bar_gap(0)
            .group_gap(2);
        for (point, group) in self.model.weekly_threats.iter().zip(&bars) {
            chart = chart.data(BarGroup::default().label(Line::from(point.day)).bars(group));
        }
        chart.render(area, buf);
    }

    fn render_distribution(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, false).title(" Threat Distribution ");
        let inner = block.inner(area);
        block.render(area, buf);

        let total: u64 = self.model.distribution.iter().map(|s| s.value).sum();
        let colors = [p.success, p.warning, p.danger];
        let rows = Layout::vertical(
            self.model
                .distribution
                .iter()
                .map(|_| Constraint::Length(2)),
        )
        .split(inner);

        for ((slice, color), row) in self.model.distribution.iter().zip(colors).zip(rows.iter()) {
            let ratio = if total == 0 {
                0.0
            } else {
                slice.value as f64 / total as f64
            };
            Gauge::default()
                .gauge_style(Style::default().fg(color).bg(p.card))
                .ratio(ratio)
                .label(format!("{} {}%", slice.name, slice.value))
                .render(*row, buf);
        }
    }
}

impl Widget for DashboardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [cards_area, charts_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(6)]).areas(area);

        let card_areas = Layout::horizontal(
            self.model
                .cards
                .iter()
                .map(|_| Constraint::Ratio(1, self.model.cards.len().max(1) as u32)),
        )
        .split(cards_area);
        for (i, (card, card_area)) in self.model.cards.iter().zip(card_areas.iter()).enumerate() {
            self.render_card(card, i == self.model.selected_card, *card_area, buf);
        }

        let [weekly_area, distribution_area] =
            Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
                .areas(charts_area);
        self.render_weekly(weekly_area, buf);
        self.render_distribution(distribution_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use xpectro_app::{AppState, Message, ViewModel};

    fn dashboard_model() -> DashboardModel {
        let mut state = AppState::new();
        xpectro_app::process_message(&mut state, Message::Login);
        match state.view_model() {
            ViewModel::Dashboard(model) => model,
            other => panic!("expected dashboard, got {:?}", other),
        }
    }

    #[test]
    fn test_dashboard_renders_cards() {
        let model = dashboard_model();
        let mut term = TestTerminal::with_size(120, 30);
        term.render_widget(DashboardView::new(&model, &DARK), term.area());

        assert!(term.buffer_contains("Smishing Threats"));
        assert!(term.buffer_contains("1,240"));
        assert!(term.buffer_contains("+24%"));
    }

    #[test]
    fn test_dashboard_renders_charts() {
        let model = dashboard_model();
        let mut term = TestTerminal::with_size(120, 30);
        term.render_widget(DashboardView::new(&model, &DARK), term.area());

        assert!(term.buffer_contains("Weekly Threats"));
        assert!(term.buffer_contains("Mon"));
        assert!(term.buffer_contains("Suspicious 25%"));
    }
}
