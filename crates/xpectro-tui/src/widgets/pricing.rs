//! Pricing plans with the monthly/yearly toggle

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use xpectro_app::view_model::PricingModel;
use xpectro_core::PricingPlan;

use crate::theme::{styles, Palette};

pub struct PricingView<'a> {
    model: &'a PricingModel,
    palette: &'a Palette,
}

impl<'a> PricingView<'a> {
    pub fn new(model: &'a PricingModel, palette: &'a Palette) -> Self {
        Self { model, palette }
    }

    fn render_plan(&self, plan: &PricingPlan, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut title = vec![Span::styled(format!(" {} ", plan.name), styles::title(p))];
        if plan.highlighted {
            title.push(Span::styled("★ Popular ", styles::accent(p)));
        }
        let block = styles::card_block(p, plan.highlighted).title(Line::from(title));

        let mut lines = vec![
            Line::from(Span::styled(plan.audience, styles::text_muted(p))),
            Line::default(),
            Line::from(vec![
                Span::styled(format!("${}", plan.price), styles::accent_bold(p)),
                Span::styled(format!("/{}", plan.period), styles::text_secondary(p)),
            ]),
            Line::default(),
        ];
        lines.extend(plan.features.iter().map(|feature| {
            Line::from(vec![
                Span::styled("✓ ", styles::success(p)),
                Span::styled(feature.clone(), styles::text(p)),
            ])
        }));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

impl Widget for PricingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let [toggle_area, plans_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(6)]).areas(area);

        let (monthly, yearly) = if self.model.yearly {
            (styles::text_muted(p), styles::selected(p))
        } else {
            (styles::selected(p), styles::text_muted(p))
        };
        Line::from(vec![
            Span::styled(" Monthly ", monthly),
            Span::raw(" "),
            Span::styled(" Yearly ", yearly),
        ])
        .centered()
        .render(toggle_area, buf);

        let columns = Layout::horizontal(
            self.model
                .plans
                .iter()
                .map(|_| Constraint::Ratio(1, self.model.plans.len().max(1) as u32)),
        )
        .split(plans_area);
        for (plan, column) in self.model.plans.iter().zip(columns.iter()) {
            self.render_plan(plan, *column, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use xpectro_core::{DataProvider, DemoData};

    #[test]
    fn test_monthly_prices() {
        let model = PricingModel {
            yearly: false,
            plans: DemoData.pricing_plans(false),
        };
        let mut term = TestTerminal::with_size(120, 16);
        term.render_widget(PricingView::new(&model, &DARK), term.area());

        assert!(term.buffer_contains("Scout"));
        assert!(term.buffer_contains("$10/mo"));
        assert!(term.buffer_contains("$30/mo"));
        assert!(term.buffer_contains("Popular"));
    }

    #[test]
    fn test_yearly_prices() {
        let model = PricingModel {
            yearly: true,
            plans: DemoData.pricing_plans(true),
        };
        let mut term = TestTerminal::with_size(120, 16);
        term.render_widget(PricingView::new(&model, &DARK), term.area());

        assert!(term.buffer_contains("$180/yr"));
        assert!(term.buffer_contains("Unlimited Monitored Domains"));
    }
}
