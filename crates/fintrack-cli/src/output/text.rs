//! Human and plain-text renderings of ledger data.

use fintrack_core::entry::{format_amount, DATE_FORMAT};
use fintrack_core::{Entry, MonthlyReport};

use crate::ui::format::format_money;
use crate::ui::theme::{styled, styles};
use crate::ui::{divider, kv, table, Column, UiContext};

const ENTRY_COLUMNS: [Column; 5] = [
    Column::numeric("#"),
    Column::new("Date"),
    Column::new("Type"),
    Column::new("Category"),
    Column::numeric("Amount"),
];

/// Numbered entry lines (`0. 2023-10-01 | INCOME | Salary: 2500.0 руб.`).
pub fn entry_lines(ctx: &UiContext, entries: &[Entry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. {}", i, entry.render(&ctx.currency)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Entry list: a table in pretty mode, numbered lines otherwise.
pub fn entry_list(ctx: &UiContext, entries: &[Entry]) -> String {
    if !ctx.mode.is_pretty() {
        return entry_lines(ctx, entries);
    }
    let rows: Vec<Vec<String>> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            vec![
                i.to_string(),
                entry.date().format(DATE_FORMAT).to_string(),
                entry.kind().label().to_string(),
                entry.category().to_string(),
                amount_cell(ctx, entry),
            ]
        })
        .collect();
    table(ctx, &ENTRY_COLUMNS, &rows)
}

fn amount_cell(ctx: &UiContext, entry: &Entry) -> String {
    let text = format!("{:.2} {}", entry.amount(), ctx.currency);
    let style = if entry.kind().is_income() {
        styles::income()
    } else {
        styles::expense()
    };
    styled(&text, style, ctx.color)
}

/// Monthly report: entries followed by income, expense and net totals.
pub fn report(ctx: &UiContext, report: &MonthlyReport) -> String {
    let mut lines = Vec::new();
    if ctx.mode.is_pretty() {
        let title = format!("Report for {}:", report.period());
        lines.push(styled(&title, styles::bold(), ctx.color));
        let rows: Vec<Vec<String>> = report
            .entries()
            .iter()
            .map(|entry| {
                vec![
                    entry.date().format(DATE_FORMAT).to_string(),
                    entry.kind().as_str().to_string(),
                    entry.category().to_string(),
                    amount_cell(ctx, entry),
                ]
            })
            .collect();
        let columns = [
            Column::new("Date"),
            Column::new("Type"),
            Column::new("Category"),
            Column::numeric("Amount"),
        ];
        lines.push(table(ctx, &columns, &rows));
        lines.push(divider(ctx));
    } else {
        lines.push(kv(ctx, "Period", &report.period()));
        for entry in report.entries() {
            lines.push(format!(
                "{} {} {} {}",
                entry.date().format(DATE_FORMAT),
                entry.kind(),
                entry.category(),
                format_amount(entry.amount())
            ));
        }
    }

    lines.push(kv(ctx, "Total income", &format_money(report.income(), &ctx.currency)));
    lines.push(kv(ctx, "Total expenses", &format_money(report.expense(), &ctx.currency)));
    lines.push(kv(ctx, "Net for period", &format_money(report.net(), &ctx.currency)));
    lines.join("\n")
}

pub fn balance(ctx: &UiContext, balance: f64) -> String {
    kv(ctx, "Current balance", &format_money(balance, &ctx.currency))
}
