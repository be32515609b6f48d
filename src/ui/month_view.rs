//! Terminal rendering of a month: entry table, nominal info and payroll.

use crate::config::Config;
use crate::models::entry::Entry;
use crate::models::month_summary::MonthSummary;
use crate::models::year_month::YearMonth;
use crate::utils::formatting::{day_label, fixed2, hours, money, month_label, resolve_locale};
use crate::utils::table::{Column, Table};
use ansi_term::{Colour, Style};

const NOTE_WIDTH: usize = 32;

pub fn render_title(month: YearMonth, cfg: &Config) -> String {
    let label = month_label(month, resolve_locale(&cfg.locale));
    format!("Summary: {} ({})", label, month)
}

pub fn render_entries(entries: &[Entry], cfg: &Config) -> String {
    let locale = resolve_locale(&cfg.locale);

    let mut table = Table::new(
        vec![
            Column::left("Day"),
            Column::left("Time"),
            Column::right("Hours"),
            Column::left("Note"),
            Column::right("Bonus"),
            Column::right("ID"),
        ],
        cfg.separator(),
    );

    for e in entries {
        let note = textwrap::wrap(&e.note, NOTE_WIDTH).join("\n");
        table.add_row(vec![
            day_label(e.date, locale),
            format!("{} - {}", e.start_str(), e.end_str()),
            fixed2(e.hours()),
            note,
            fixed2(e.bonus),
            e.id.to_string(),
        ]);
    }

    table.render()
}

pub fn render_nominal(summary: &MonthSummary) -> String {
    format!(
        "{} working days, nominal {}h",
        summary.working_days, summary.nominal_hours
    )
}

pub fn render_summary(summary: &MonthSummary, entries: &[Entry]) -> String {
    let b = Style::new().bold();
    let mut lines = vec![
        format!("Hours worked:      {}", b.paint(hours(summary.total_hours))),
        format!("Base hours:        {}", b.paint(hours(summary.base_hours))),
        format!("Overtime hours:    {}", b.paint(hours(summary.overtime_hours))),
        format!("Base pay:          {}", b.paint(money(summary.base_pay))),
        format!("Overtime pay:      {}", b.paint(money(summary.overtime_pay))),
        format!("Bonuses:           {}", b.paint(money(summary.total_bonus))),
    ];

    for e in entries {
        let note = if e.note.is_empty() { "-" } else { e.note.as_str() };
        lines.push(format!("  - {}: {}", note, money(e.bonus)));
    }

    lines.push(format!("On account:        {}", b.paint(money(summary.on_account))));

    let colour = if summary.payout < 0.0 {
        Colour::Red
    } else {
        Colour::Green
    };
    lines.push(format!(
        "Total payout:      {}",
        colour.bold().paint(money(summary.payout))
    ));

    lines.join("\n")
}
