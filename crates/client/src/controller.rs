//! Drives a [`ScheduleSession`] against a [`ScheduleRemote`].
//!
//! The session decides every state transition; the controller only performs
//! the remote calls the session asks for and feeds the results back.

use shiftsync_core::calendar::Scope;
use shiftsync_core::session::{
    FetchOutcome, LoadState, NavigationOutcome, SaveOutcome, ScheduleSession, SessionError,
};

use crate::remote::ScheduleRemote;

/// Fetch-on-navigation and explicit save for one client.
pub struct SyncController<R> {
    remote: R,
    session: ScheduleSession,
}

impl<R: ScheduleRemote> SyncController<R> {
    pub fn new(remote: R, credential: Option<String>, scope: Scope) -> Self {
        Self {
            remote,
            session: ScheduleSession::new(credential, scope),
        }
    }

    pub fn session(&self) -> &ScheduleSession {
        &self.session
    }

    /// Access for local mutations (edits, selection, bulk operations).
    pub fn session_mut(&mut self) -> &mut ScheduleSession {
        &mut self.session
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Loads the initial month.
    pub async fn open(&mut self) -> Result<FetchOutcome, SessionError> {
        self.reload().await
    }

    /// Fetches the current month again. Unsaved changes are dropped.
    pub async fn reload(&mut self) -> Result<FetchOutcome, SessionError> {
        let Some(ticket) = self.session.begin_fetch() else {
            return Err(self.terminal_error());
        };

        let scope = ticket.scope();
        tracing::debug!(%scope, "fetching schedule");
        let result = self.remote.fetch(ticket.credential(), scope).await;
        let outcome = self.session.complete_fetch(ticket, result);
        log_fetch(scope, outcome, &self.session);

        match outcome {
            FetchOutcome::Denied => Err(self.terminal_error()),
            outcome => Ok(outcome),
        }
    }

    /// Switches month and loads it.
    ///
    /// Returns `Ok(None)` when nothing happened: the target is already shown
    /// or `confirm_discard` declined dropping unsaved changes.
    pub async fn navigate(
        &mut self,
        target: Scope,
        confirm_discard: impl FnOnce() -> bool,
    ) -> Result<Option<FetchOutcome>, SessionError> {
        let ticket = match self.session.navigate(target, confirm_discard) {
            NavigationOutcome::Started(ticket) => ticket,
            NavigationOutcome::Cancelled => {
                tracing::debug!(%target, "navigation cancelled, keeping unsaved changes");
                return Ok(None);
            }
            NavigationOutcome::Unchanged => return Ok(None),
            NavigationOutcome::Blocked => return Err(self.terminal_error()),
        };

        let scope = ticket.scope();
        let result = self.remote.fetch(ticket.credential(), scope).await;
        let outcome = self.session.complete_fetch(ticket, result);
        log_fetch(scope, outcome, &self.session);

        match outcome {
            FetchOutcome::Denied => Err(self.terminal_error()),
            outcome => Ok(Some(outcome)),
        }
    }

    pub async fn next_month(
        &mut self,
        confirm_discard: impl FnOnce() -> bool,
    ) -> Result<Option<FetchOutcome>, SessionError> {
        let target = self.session.scope().next();
        self.navigate(target, confirm_discard).await
    }

    pub async fn prev_month(
        &mut self,
        confirm_discard: impl FnOnce() -> bool,
    ) -> Result<Option<FetchOutcome>, SessionError> {
        let target = self.session.scope().prev();
        self.navigate(target, confirm_discard).await
    }

    /// Sends the whole month to the remote, replacing what is stored.
    pub async fn save(&mut self) -> Result<SaveOutcome, SessionError> {
        let ticket = self.session.begin_save()?;
        let scope = ticket.scope();
        let entries = ticket.payload().schedule.len();

        let result = self
            .remote
            .save(ticket.credential(), scope, ticket.payload())
            .await;

        match self.session.complete_save(ticket, result) {
            Ok(outcome) => {
                tracing::info!(%scope, entries, ?outcome, "schedule saved");
                Ok(outcome)
            }
            Err(error) => {
                tracing::warn!(%scope, %error, "failed to save schedule");
                Err(error)
            }
        }
    }

    fn terminal_error(&self) -> SessionError {
        match self.session.state() {
            LoadState::Error(error) => error.clone(),
            _ => SessionError::NotReady,
        }
    }
}

fn log_fetch(scope: Scope, outcome: FetchOutcome, session: &ScheduleSession) {
    match outcome {
        FetchOutcome::Applied => {
            tracing::debug!(%scope, entries = session.list().len(), "schedule loaded")
        }
        FetchOutcome::Fallback => tracing::debug!(%scope, "no stored schedule, using fallback"),
        FetchOutcome::Offline => tracing::warn!(
            %scope,
            banner = session.banner().unwrap_or_default(),
            "remote unavailable, using fallback"
        ),
        FetchOutcome::Denied => tracing::warn!(%scope, "access key rejected"),
        FetchOutcome::Stale => tracing::debug!(%scope, "discarded stale fetch result"),
    }
}
