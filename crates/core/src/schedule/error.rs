use thiserror::Error;

/// Errors raised by local schedule mutations.
///
/// These are rejected before any change is made to the schedule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Выберите хотя бы один день")]
    EmptySelection,
    #[error("День {day} вне месяца (1-{days_in_month})")]
    DayOutOfRange { day: u32, days_in_month: u32 },
}
