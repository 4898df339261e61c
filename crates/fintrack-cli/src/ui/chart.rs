//! Horizontal bar chart of spending per category.

use std::io::Write;

use fintrack_core::{CategoryTotals, Result, SpendingChart};

use super::context::UiContext;
use super::format::{format_money, pad_right, truncate};
use super::theme::{styled, styles, symbols};

const MAX_LABEL_WIDTH: usize = 20;
const TITLE: &str = "Spending by category";
pub const EMPTY_MESSAGE: &str = "No expenses to chart.";

/// Draws one bar per category, scaled to the largest total.
pub struct TerminalBarChart<W: Write> {
    out: W,
    unicode: bool,
    color: bool,
    width: usize,
    currency: String,
}

impl<W: Write> TerminalBarChart<W> {
    pub fn new(out: W, ctx: &UiContext) -> Self {
        Self {
            out,
            unicode: ctx.unicode,
            color: ctx.color,
            width: ctx.width,
            currency: ctx.currency.clone(),
        }
    }
}

impl<W: Write> SpendingChart for TerminalBarChart<W> {
    fn render(&mut self, totals: &CategoryTotals) -> Result<()> {
        if totals.is_empty() {
            writeln!(self.out, "{}", EMPTY_MESSAGE)?;
            return Ok(());
        }

        let label_width = totals
            .keys()
            .map(|k| k.chars().count().min(MAX_LABEL_WIDTH))
            .max()
            .unwrap_or(0);
        let amounts: Vec<String> = totals
            .values()
            .map(|v| format_money(*v, &self.currency))
            .collect();
        let amount_width = amounts.iter().map(|a| a.chars().count()).max().unwrap_or(0);
        let max = totals.values().cloned().fold(0.0_f64, f64::max);

        // label, " | ", bar, " ", amount
        let bar_room = self
            .width
            .saturating_sub(label_width + amount_width + 4)
            .clamp(10, 60);
        let axis = symbols::AXIS.get(self.unicode);
        let cell = symbols::BAR.get(self.unicode);

        writeln!(self.out, "{}", styled(TITLE, styles::bold(), self.color))?;
        for ((category, total), amount) in totals.iter().zip(amounts) {
            let len = if max > 0.0 {
                ((total / max) * bar_room as f64).round() as usize
            } else {
                0
            };
            let label = pad_right(&truncate(category, MAX_LABEL_WIDTH), label_width);
            let bar = styled(&cell.repeat(len), styles::expense(), self.color);
            writeln!(self.out, "{} {} {} {}", label, axis, bar, amount)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render::tests::{plain_ctx, pretty_ctx};

    fn draw(ctx: &UiContext, totals: &CategoryTotals) -> String {
        let mut buf = Vec::new();
        TerminalBarChart::new(&mut buf, ctx).render(totals).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_totals() {
        assert_eq!(draw(&plain_ctx(), &CategoryTotals::new()), "No expenses to chart.\n");
    }

    #[test]
    fn test_bars_scale_to_largest() {
        let mut totals = CategoryTotals::new();
        totals.insert("Food".to_string(), 100.0);
        totals.insert("Rent".to_string(), 50.0);

        let out = draw(&plain_ctx(), &totals);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Spending by category");
        assert!(lines[1].starts_with("Food | #"));
        assert!(lines[1].ends_with("100.00 руб."));

        let food = lines[1].matches('#').count();
        let rent = lines[2].matches('#').count();
        assert!(food > 0);
        assert_eq!(rent, (food as f64 / 2.0).round() as usize);
    }

    #[test]
    fn test_unicode_bars() {
        let mut totals = CategoryTotals::new();
        totals.insert("Food".to_string(), 10.0);
        let out = draw(&pretty_ctx(), &totals);
        assert!(out.contains('\u{2588}'));
        assert!(out.contains('\u{2502}'));
    }
}
