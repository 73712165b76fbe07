//! Pretty output formatting.

use chrono::{Datelike, NaiveDate};
use shiftsync_core::calendar::{DateKey, DayCell, GridCell, MonthGrid, WEEKDAY_LABELS};
use shiftsync_core::schedule::{DayStats, Location, ScheduleEntry, SelectionSet, WorkStatus};
use shiftsync_core::session::{LoadState, ScheduleSession};

const CELL_WIDTH: usize = 4;

/// Format the whole month view of a session.
pub fn format_month(session: &ScheduleSession, today: NaiveDate) -> String {
    let scope = session.scope();
    let mut output = format!("{} {}", scope.month_name(), scope.year());
    if let Some(role) = session.role() {
        output.push_str(&format!(" [{}]", role));
    }
    if session.is_dirty() {
        output.push_str("  * Есть несохраненные изменения");
    }
    if let Some(banner) = session.banner() {
        output.push_str(&format!("\n! {}", banner));
    }

    match session.state() {
        LoadState::Loading => {
            output.push_str("\nЗагрузка данных...");
            return output;
        }
        LoadState::Error(error) if error.is_terminal() => {
            output.push_str(&format!("\n{}", error));
            return output;
        }
        _ => {}
    }

    output.push('\n');
    output.push_str(&format_grid(&session.grid(today), Some(session.selection())));
    output.push('\n');
    output.push_str(&format_legend());
    output.push_str("\n\n");
    output.push_str(&format_stats(&session.stats()));
    output
}

/// Format a month grid, marking selected days when a selection is given.
pub fn format_grid(grid: &MonthGrid<'_>, selection: Option<&SelectionSet>) -> String {
    let header: Vec<String> = WEEKDAY_LABELS
        .iter()
        .map(|label| format!("{:>width$}", label, width = CELL_WIDTH))
        .collect();
    let mut output = header.join(" ");

    for week in grid.weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                GridCell::Blank => " ".repeat(CELL_WIDTH),
                GridCell::Day(day) => format_cell(day, selection),
            })
            .collect();
        output.push('\n');
        output.push_str(row.join(" ").trim_end());
    }
    output
}

fn format_cell(cell: &DayCell<'_>, selection: Option<&SelectionSet>) -> String {
    let prefix = if selection.is_some_and(|s| s.contains(cell.day)) {
        '>'
    } else if cell.is_today {
        '*'
    } else {
        ' '
    };
    format!("{}{:>2}{}", prefix, cell.day, status_marker(cell.entry))
}

/// One-character marker for a day: site letter, off or empty.
fn status_marker(entry: Option<&ScheduleEntry>) -> char {
    match entry {
        None => ' ',
        Some(entry) => match (entry.status, entry.location) {
            (WorkStatus::Off, _) => '-',
            (WorkStatus::Work, Some(location)) => location_marker(location),
            (WorkStatus::Work, None) => 'W',
        },
    }
}

fn location_marker(location: Location) -> char {
    match location {
        Location::Tastak => 'A',
        Location::Saryarka => 'B',
    }
}

pub fn format_legend() -> String {
    let mut parts: Vec<String> = Location::ALL
        .iter()
        .map(|location| format!("{} {}", location_marker(*location), location))
        .collect();
    parts.push(format!("- {}", WorkStatus::Off.label()));
    parts.push("* сегодня".to_string());
    parts.push("> выбран".to_string());
    parts.join("   ")
}

/// Format day counts.
pub fn format_stats(stats: &DayStats) -> String {
    format!(
        "Всего рабочих смен: {}\n  Тастак:   {}\n  Сарыарка: {}\n  Выходные: {}",
        stats.work_days, stats.tastak_days, stats.saryarka_days, stats.off_days
    )
}

/// Format the details of one day.
pub fn format_day(date: DateKey, entry: Option<&ScheduleEntry>) -> String {
    let weekday = WEEKDAY_LABELS[date.date().weekday().num_days_from_monday() as usize];
    let mut output = format!("{} ({})", date, weekday);

    let Some(entry) = entry else {
        output.push_str("\n  Нет данных");
        return output;
    };

    output.push_str(&format!("\n  Статус: {}", entry.status.label()));
    if entry.is_work() {
        if let Some(location) = entry.location {
            output.push_str(&format!("\n  Локация: {}", location));
        }
        if let Some(partner) = entry.partner {
            output.push_str(&format!(
                "\n  Менеджер: {} ({})",
                partner.display_name(),
                partner.code()
            ));
        }
    }
    output
}
