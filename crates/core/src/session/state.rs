//! Client-side schedule session.
//!
//! [`ScheduleSession`] holds everything a schedule view needs between events:
//! the month being shown, the local copy of its schedule, the bulk selection,
//! and the load, dirty and saving flags. Each transition is a plain method.
//! Remote calls happen outside; the session hands out tickets describing what
//! to send and accepts the results back, discarding any that arrive late.

use chrono::NaiveDate;

use crate::access::Role;
use crate::calendar::{build_month_grid, MonthGrid, Scope};
use crate::schedule::{
    self, compute_stats, fallback_schedule, BulkTemplate, DayEdit, DayStats, ScheduleEntry,
    ScheduleError, ScheduleIndex, ScheduleList, SelectionSet,
};

use super::error::{RemoteError, SessionError};
use super::wire::{FetchResponse, SavePayload};

/// Where the session is in loading the current month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Auth errors are terminal. Transport errors leave fallback data usable.
    Error(SessionError),
}

impl LoadState {
    /// Returns true if the schedule can be viewed and edited.
    pub fn is_usable(&self) -> bool {
        match self {
            LoadState::Loading => false,
            LoadState::Ready => true,
            LoadState::Error(error) => !error.is_terminal(),
        }
    }
}

/// Permission to fetch one month. Only the latest ticket is honoured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    scope: Scope,
    credential: String,
    generation: u64,
}

impl FetchTicket {
    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }
}

/// A snapshot of the schedule to save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTicket {
    scope: Scope,
    credential: String,
    revision: u64,
    payload: SavePayload,
}

impl SaveTicket {
    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    pub fn payload(&self) -> &SavePayload {
        &self.payload
    }
}

/// What a finished fetch did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The stored schedule was loaded.
    Applied,
    /// Nothing was stored for the month; fallback data was loaded.
    Fallback,
    /// The remote could not be reached; fallback data was loaded.
    Offline,
    /// The credential was rejected. The session is over.
    Denied,
    /// A newer fetch was started; the result was ignored.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The month changed and its schedule must be fetched.
    Started(FetchTicket),
    /// Unsaved changes were kept.
    Cancelled,
    /// The target is the month already shown.
    Unchanged,
    /// The session ended with an auth error.
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The saved snapshot matches the local schedule.
    Saved,
    /// The snapshot was saved, but the schedule changed since it was taken.
    SavedWithPendingChanges,
}

/// State of one client viewing and editing schedules.
#[derive(Debug, Clone)]
pub struct ScheduleSession {
    credential: Option<String>,
    scope: Scope,
    role: Option<Role>,
    list: ScheduleList,
    selection: SelectionSet,
    state: LoadState,
    dirty: bool,
    saving: bool,
    banner: Option<String>,
    generation: u64,
    revision: u64,
}

impl ScheduleSession {
    /// Creates a session for the given month. Call [`Self::begin_fetch`] next.
    pub fn new(credential: Option<String>, scope: Scope) -> Self {
        Self {
            credential: credential.filter(|c| !c.trim().is_empty()),
            scope,
            role: None,
            list: ScheduleList::new(),
            selection: SelectionSet::new(scope),
            state: LoadState::Loading,
            dirty: false,
            saving: false,
            banner: None,
            generation: 0,
            revision: 0,
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn list(&self) -> &ScheduleList {
        &self.list
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The message to show above the calendar, if any.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Returns true if the schedule is loaded and the role may change it.
    pub fn can_edit(&self) -> bool {
        self.state.is_usable() && self.role.is_some_and(|role| role.can_edit())
    }

    /// Starts loading the current month.
    ///
    /// Returns `None` if the session has ended or has no credential, in which
    /// case the state records why.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.is_terminated() {
            return None;
        }
        let Some(credential) = self.credential.clone() else {
            self.state = LoadState::Error(SessionError::MissingCredential);
            return None;
        };

        self.generation += 1;
        self.state = LoadState::Loading;
        Some(FetchTicket {
            scope: self.scope,
            credential,
            generation: self.generation,
        })
    }

    /// Applies the result of a fetch started with [`Self::begin_fetch`].
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<FetchResponse, RemoteError>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation || ticket.scope != self.scope {
            return FetchOutcome::Stale;
        }

        match result {
            Ok(response) => {
                self.role = Some(response.role);
                self.banner = None;
                self.state = LoadState::Ready;
                match response.schedule {
                    Some(list) => {
                        self.replace_list(list);
                        FetchOutcome::Applied
                    }
                    None => {
                        self.replace_list(fallback_schedule(self.scope));
                        FetchOutcome::Fallback
                    }
                }
            }
            Err(RemoteError::Unauthorized { .. }) => {
                self.role = None;
                self.replace_list(ScheduleList::new());
                self.state = LoadState::Error(SessionError::AccessDenied);
                FetchOutcome::Denied
            }
            Err(RemoteError::Transport(message)) => {
                let error = SessionError::Transport(message);
                self.banner = Some(error.to_string());
                self.state = LoadState::Error(error);
                self.replace_list(fallback_schedule(self.scope));
                FetchOutcome::Offline
            }
        }
    }

    /// Switches to another month.
    ///
    /// With unsaved changes, `confirm_discard` is asked first; declining keeps
    /// the month, schedule and dirty flag as they are.
    pub fn navigate(
        &mut self,
        target: Scope,
        confirm_discard: impl FnOnce() -> bool,
    ) -> NavigationOutcome {
        if self.is_terminated() {
            return NavigationOutcome::Blocked;
        }
        if target == self.scope {
            return NavigationOutcome::Unchanged;
        }
        if self.dirty && !confirm_discard() {
            return NavigationOutcome::Cancelled;
        }

        self.scope = target;
        self.banner = None;
        self.replace_list(ScheduleList::new());
        match self.begin_fetch() {
            Some(ticket) => NavigationOutcome::Started(ticket),
            None => NavigationOutcome::Blocked,
        }
    }

    pub fn next_month(&mut self, confirm_discard: impl FnOnce() -> bool) -> NavigationOutcome {
        self.navigate(self.scope.next(), confirm_discard)
    }

    pub fn prev_month(&mut self, confirm_discard: impl FnOnce() -> bool) -> NavigationOutcome {
        self.navigate(self.scope.prev(), confirm_discard)
    }

    /// Sets one day of the current month. Returns the entry it replaced.
    pub fn edit_day(
        &mut self,
        day: u32,
        edit: &DayEdit,
    ) -> Result<Option<ScheduleEntry>, SessionError> {
        self.ensure_editable()?;
        let date = self
            .scope
            .date_key(day)
            .ok_or(ScheduleError::DayOutOfRange {
                day,
                days_in_month: self.scope.days_in_month(),
            })?;

        let replaced = schedule::apply_day_edit(&mut self.list, date, edit);
        self.mark_changed();
        Ok(replaced)
    }

    /// Toggles a day in the bulk selection. Returns whether it is now selected.
    pub fn toggle_day(&mut self, day: u32) -> Result<bool, SessionError> {
        self.ensure_editable()?;
        Ok(self.selection.toggle(day)?)
    }

    /// Selects every day of the current month.
    pub fn select_all(&mut self) -> Result<(), SessionError> {
        self.ensure_editable()?;
        self.selection.select_all(self.scope.days_in_month());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Writes the template to every selected day and clears the selection.
    pub fn apply_bulk(&mut self, template: &BulkTemplate) -> Result<usize, SessionError> {
        self.ensure_editable()?;
        let applied = schedule::apply_bulk(&mut self.list, &self.selection, template)?;
        self.selection.clear();
        self.mark_changed();
        Ok(applied)
    }

    /// Removes the entries of the selected days once `confirm` agrees.
    ///
    /// `confirm` receives the number of selected days. Returns `None` when it
    /// declines, otherwise the number of entries removed.
    pub fn delete_selected(
        &mut self,
        confirm: impl FnOnce(usize) -> bool,
    ) -> Result<Option<usize>, SessionError> {
        self.ensure_editable()?;
        if self.selection.is_empty() {
            return Err(ScheduleError::EmptySelection.into());
        }
        if !confirm(self.selection.len()) {
            return Ok(None);
        }

        let removed = schedule::delete_selected(&mut self.list, &self.selection)?;
        self.selection.clear();
        self.mark_changed();
        Ok(Some(removed))
    }

    /// Takes a snapshot of the schedule for saving.
    pub fn begin_save(&mut self) -> Result<SaveTicket, SessionError> {
        let credential = self
            .credential
            .clone()
            .ok_or(SessionError::MissingCredential)?;
        self.ensure_editable()?;
        if self.saving {
            return Err(SessionError::SaveInProgress);
        }

        self.saving = true;
        Ok(SaveTicket {
            scope: self.scope,
            credential,
            revision: self.revision,
            payload: SavePayload {
                schedule: self.list.clone(),
            },
        })
    }

    /// Applies the result of a save started with [`Self::begin_save`].
    ///
    /// On failure the schedule and dirty flag are left untouched so the save
    /// can be retried.
    pub fn complete_save(
        &mut self,
        ticket: SaveTicket,
        result: Result<(), RemoteError>,
    ) -> Result<SaveOutcome, SessionError> {
        self.saving = false;

        match result {
            Ok(()) => {
                if ticket.scope == self.scope && ticket.revision == self.revision {
                    self.dirty = false;
                    Ok(SaveOutcome::Saved)
                } else {
                    Ok(SaveOutcome::SavedWithPendingChanges)
                }
            }
            Err(error) => {
                let error = SessionError::from(error);
                self.banner = Some(format!("Ошибка при сохранении! {error}"));
                Err(error)
            }
        }
    }

    /// Lookup over the current schedule.
    pub fn index(&self) -> ScheduleIndex<'_> {
        self.list.index()
    }

    /// Day counts over the whole loaded schedule.
    pub fn stats(&self) -> DayStats {
        compute_stats(self.list.entries())
    }

    pub fn grid(&self, today: NaiveDate) -> MonthGrid<'_> {
        build_month_grid(self.scope, &self.list.index(), today)
    }

    /// The entry for a day of the current month.
    pub fn entry(&self, day: u32) -> Option<&ScheduleEntry> {
        self.scope.date_key(day).and_then(|date| self.list.get(&date))
    }

    fn is_terminated(&self) -> bool {
        matches!(&self.state, LoadState::Error(error) if error.is_terminal())
    }

    fn ensure_editable(&self) -> Result<(), SessionError> {
        if !self.state.is_usable() {
            return Err(match &self.state {
                LoadState::Error(error) => error.clone(),
                _ => SessionError::NotReady,
            });
        }
        if !self.role.is_some_and(|role| role.can_edit()) {
            return Err(SessionError::ReadOnly);
        }
        Ok(())
    }

    fn replace_list(&mut self, list: ScheduleList) {
        self.list = list;
        self.selection = SelectionSet::new(self.scope);
        self.dirty = false;
        self.revision += 1;
    }

    fn mark_changed(&mut self) {
        self.dirty = true;
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DateKey;
    use crate::schedule::{default_schedule, Location, PartnerCode, WorkStatus, DEFAULT_SCOPE};

    fn december() -> Scope {
        DEFAULT_SCOPE
    }

    fn response(scope: Scope, role: Role, schedule: Option<ScheduleList>) -> FetchResponse {
        FetchResponse {
            schedule,
            role,
            month: scope.month(),
            year: scope.year(),
        }
    }

    fn loaded(role: Role) -> ScheduleSession {
        let mut session = ScheduleSession::new(Some("secret".into()), december());
        let ticket = session.begin_fetch().unwrap();
        let outcome =
            session.complete_fetch(ticket, Ok(response(december(), role, Some(default_schedule()))));
        assert_eq!(outcome, FetchOutcome::Applied);
        session
    }

    fn never() -> bool {
        panic!("confirmation should not be asked")
    }

    #[test]
    fn test_missing_credential_is_terminal() {
        let mut session = ScheduleSession::new(None, december());

        assert!(session.begin_fetch().is_none());
        assert_eq!(
            session.state(),
            &LoadState::Error(SessionError::MissingCredential)
        );
        assert_eq!(
            session.navigate(december().next(), never),
            NavigationOutcome::Blocked
        );
        assert_eq!(session.scope(), december());
    }

    #[test]
    fn test_blank_credential_counts_as_missing() {
        let mut session = ScheduleSession::new(Some("  ".into()), december());
        assert!(session.begin_fetch().is_none());
    }

    #[test]
    fn test_fetch_applies_remote_schedule() {
        let session = loaded(Role::Admin);

        assert_eq!(session.state(), &LoadState::Ready);
        assert_eq!(session.role(), Some(Role::Admin));
        assert_eq!(session.list().len(), 31);
        assert!(!session.is_dirty());
        assert!(session.can_edit());
    }

    #[test]
    fn test_null_schedule_uses_seed_for_default_month_only() {
        let mut session = ScheduleSession::new(Some("secret".into()), december());
        let ticket = session.begin_fetch().unwrap();
        let outcome = session.complete_fetch(ticket, Ok(response(december(), Role::User, None)));
        assert_eq!(outcome, FetchOutcome::Fallback);
        assert_eq!(session.list(), &default_schedule());

        let NavigationOutcome::Started(ticket) = session.next_month(never) else {
            panic!("expected a fetch to start");
        };
        let january = december().next();
        let outcome = session.complete_fetch(ticket, Ok(response(january, Role::User, None)));
        assert_eq!(outcome, FetchOutcome::Fallback);
        assert!(session.list().is_empty());
    }

    #[test]
    fn test_unauthorized_ends_session() {
        let mut session = ScheduleSession::new(Some("wrong".into()), december());
        let ticket = session.begin_fetch().unwrap();

        let outcome =
            session.complete_fetch(ticket, Err(RemoteError::Unauthorized { status: 401 }));

        assert_eq!(outcome, FetchOutcome::Denied);
        assert_eq!(session.state(), &LoadState::Error(SessionError::AccessDenied));
        assert!(session.begin_fetch().is_none());
        assert!(session.list().is_empty());
    }

    #[test]
    fn test_transport_failure_falls_back_and_shows_banner() {
        let mut session = ScheduleSession::new(Some("secret".into()), december());
        let ticket = session.begin_fetch().unwrap();

        let outcome =
            session.complete_fetch(ticket, Err(RemoteError::Transport("connection refused".into())));

        assert_eq!(outcome, FetchOutcome::Offline);
        assert_eq!(session.list(), &default_schedule());
        assert!(session.state().is_usable());
        assert!(session.banner().unwrap().contains("connection refused"));

        session.dismiss_banner();
        assert!(session.banner().is_none());

        assert!(matches!(
            session.navigate(december().next(), never),
            NavigationOutcome::Started(_)
        ));
    }

    #[test]
    fn test_stale_fetch_is_ignored() {
        let mut session = loaded(Role::Admin);
        let NavigationOutcome::Started(january) = session.next_month(never) else {
            panic!("expected a fetch to start");
        };
        let NavigationOutcome::Started(february) = session.next_month(never) else {
            panic!("expected a fetch to start");
        };

        let late = session.complete_fetch(
            january.clone(),
            Ok(response(january.scope(), Role::Admin, Some(default_schedule()))),
        );
        assert_eq!(late, FetchOutcome::Stale);
        assert_eq!(session.state(), &LoadState::Loading);
        assert!(session.list().is_empty());

        let current =
            session.complete_fetch(february, Ok(response(december(), Role::Admin, None)));
        assert_eq!(current, FetchOutcome::Fallback);
        assert_eq!(session.scope(), Scope::new(2026, 2).unwrap());
    }

    #[test]
    fn test_refetch_of_same_month_supersedes_earlier_ticket() {
        let mut session = ScheduleSession::new(Some("secret".into()), december());
        let first = session.begin_fetch().unwrap();
        let second = session.begin_fetch().unwrap();

        assert_eq!(
            session.complete_fetch(first, Ok(response(december(), Role::Admin, None))),
            FetchOutcome::Stale
        );
        assert_eq!(
            session.complete_fetch(second, Ok(response(december(), Role::Admin, None))),
            FetchOutcome::Fallback
        );
    }

    #[test]
    fn test_edit_marks_dirty() {
        let mut session = loaded(Role::Admin);

        let replaced = session
            .edit_day(3, &DayEdit::work(Location::Saryarka, PartnerCode::G))
            .unwrap();

        assert_eq!(replaced.map(|e| e.status), Some(WorkStatus::Off));
        assert!(session.is_dirty());
        assert_eq!(session.entry(3).map(|e| e.status), Some(WorkStatus::Work));
        assert_eq!(session.stats().work_days, 22);
    }

    #[test]
    fn test_edit_rejects_day_outside_month() {
        let mut session = loaded(Role::Admin);
        assert_eq!(
            session.edit_day(32, &DayEdit::off()),
            Err(SessionError::Schedule(ScheduleError::DayOutOfRange {
                day: 32,
                days_in_month: 31
            }))
        );
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_user_role_is_read_only() {
        let mut session = loaded(Role::User);

        assert!(!session.can_edit());
        assert_eq!(
            session.edit_day(1, &DayEdit::off()),
            Err(SessionError::ReadOnly)
        );
        assert_eq!(session.toggle_day(1), Err(SessionError::ReadOnly));
        assert_eq!(session.begin_save(), Err(SessionError::ReadOnly));
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_mutations_wait_for_load() {
        let mut session = ScheduleSession::new(Some("secret".into()), december());
        session.begin_fetch().unwrap();

        assert_eq!(
            session.edit_day(1, &DayEdit::off()),
            Err(SessionError::NotReady)
        );
    }

    #[test]
    fn test_navigation_while_dirty_without_confirmation_keeps_everything() {
        let mut session = loaded(Role::Admin);
        session.edit_day(3, &DayEdit::work(Location::Tastak, PartnerCode::A)).unwrap();
        let before = session.list().clone();

        let outcome = session.next_month(|| false);

        assert_eq!(outcome, NavigationOutcome::Cancelled);
        assert_eq!(session.scope(), december());
        assert_eq!(session.list(), &before);
        assert!(session.is_dirty());
        assert_eq!(session.state(), &LoadState::Ready);
    }

    #[test]
    fn test_navigation_while_dirty_with_confirmation_discards() {
        let mut session = loaded(Role::Admin);
        session.edit_day(3, &DayEdit::work(Location::Tastak, PartnerCode::A)).unwrap();

        let outcome = session.prev_month(|| true);

        let NavigationOutcome::Started(ticket) = outcome else {
            panic!("expected a fetch to start");
        };
        assert_eq!(ticket.scope(), Scope::new(2025, 11).unwrap());
        assert_eq!(ticket.credential(), "secret");
        assert!(!session.is_dirty());
        assert!(session.list().is_empty());
        assert_eq!(session.state(), &LoadState::Loading);
    }

    #[test]
    fn test_navigation_to_same_month_is_a_no_op() {
        let mut session = loaded(Role::Admin);
        assert_eq!(
            session.navigate(december(), never),
            NavigationOutcome::Unchanged
        );
        assert_eq!(session.state(), &LoadState::Ready);
    }

    #[test]
    fn test_bulk_apply_clears_selection() {
        let mut session = loaded(Role::Admin);
        session.toggle_day(3).unwrap();
        session.toggle_day(4).unwrap();

        let applied = session.apply_bulk(&BulkTemplate::default()).unwrap();

        assert_eq!(applied, 2);
        assert!(session.selection().is_empty());
        assert!(session.is_dirty());
        assert_eq!(session.stats().work_days, 23);
    }

    #[test]
    fn test_empty_selection_is_rejected_without_changes() {
        let mut session = loaded(Role::Admin);
        let before = session.list().clone();

        assert_eq!(
            session.apply_bulk(&BulkTemplate::default()),
            Err(SessionError::Schedule(ScheduleError::EmptySelection))
        );
        assert_eq!(
            session.delete_selected(|_| panic!("confirmation should not be asked")),
            Err(SessionError::Schedule(ScheduleError::EmptySelection))
        );
        assert_eq!(session.list(), &before);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_delete_selected_asks_for_confirmation() {
        let mut session = loaded(Role::Admin);
        session.select_all().unwrap();

        assert_eq!(session.delete_selected(|_| false), Ok(None));
        assert_eq!(session.list().len(), 31);
        assert_eq!(session.selection().len(), 31);

        let mut asked = 0;
        let removed = session
            .delete_selected(|count| {
                asked = count;
                true
            })
            .unwrap();
        assert_eq!(asked, 31);
        assert_eq!(removed, Some(31));
        assert!(session.list().is_empty());
        assert!(session.is_dirty());
    }

    #[test]
    fn test_save_success_clears_dirty() {
        let mut session = loaded(Role::Admin);
        session.edit_day(3, &DayEdit::work(Location::Tastak, PartnerCode::A)).unwrap();

        let ticket = session.begin_save().unwrap();
        assert!(session.is_saving());
        assert_eq!(ticket.payload().schedule, session.list().clone());
        assert_eq!(session.begin_save(), Err(SessionError::SaveInProgress));

        assert_eq!(session.complete_save(ticket, Ok(())), Ok(SaveOutcome::Saved));
        assert!(!session.is_dirty());
        assert!(!session.is_saving());
    }

    #[test]
    fn test_save_failure_keeps_local_state() {
        let mut session = loaded(Role::Admin);
        session.edit_day(3, &DayEdit::work(Location::Tastak, PartnerCode::A)).unwrap();
        let before = session.list().clone();

        let ticket = session.begin_save().unwrap();
        let result = session.complete_save(ticket, Err(RemoteError::Transport("HTTP 500".into())));

        assert_eq!(result, Err(SessionError::Transport("HTTP 500".into())));
        assert!(session.is_dirty());
        assert!(!session.is_saving());
        assert_eq!(session.list(), &before);
        assert!(session.banner().is_some());
    }

    #[test]
    fn test_edit_during_save_stays_dirty() {
        let mut session = loaded(Role::Admin);
        session.edit_day(3, &DayEdit::work(Location::Tastak, PartnerCode::A)).unwrap();

        let ticket = session.begin_save().unwrap();
        session.edit_day(4, &DayEdit::work(Location::Tastak, PartnerCode::A)).unwrap();

        assert_eq!(
            session.complete_save(ticket, Ok(())),
            Ok(SaveOutcome::SavedWithPendingChanges)
        );
        assert!(session.is_dirty());
    }

    #[test]
    fn test_save_allowed_on_fallback_data_after_transport_error() {
        let mut session = loaded(Role::Admin);
        let ticket = session.begin_fetch().unwrap();
        session.complete_fetch(ticket, Err(RemoteError::Transport("timeout".into())));

        assert!(session.can_edit());
        assert!(session.begin_save().is_ok());
    }

    #[test]
    fn test_grid_reflects_session() {
        let session = loaded(Role::User);
        let today = NaiveDate::from_ymd_opt(2025, 12, 24).unwrap();

        let grid = session.grid(today);

        assert_eq!(grid.scope, december());
        assert_eq!(grid.days().count(), 31);
        assert_eq!(
            grid.days().find(|c| c.is_today).map(|c| c.day),
            Some(24)
        );
    }

    #[test]
    fn test_stats_count_every_loaded_entry() {
        let mut schedule = default_schedule();
        schedule.upsert(ScheduleEntry::off(DateKey::new(2026, 1, 1).unwrap()));
        let mut session = ScheduleSession::new(Some("secret".into()), december());
        let ticket = session.begin_fetch().unwrap();
        session.complete_fetch(ticket, Ok(response(december(), Role::Admin, Some(schedule))));

        let stats = session.stats();

        assert_eq!(session.list().len(), 32);
        assert_eq!(stats, compute_stats(session.list().entries()));
        assert_eq!(stats.off_days, compute_stats(default_schedule().entries()).off_days + 1);
    }
}
