//! `GET`/`POST /api/schedule`: one stored document per month.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::Deserialize;

use shiftsync_core::access::{resolve_role, Role};
use shiftsync_core::calendar::Scope;
use shiftsync_core::schedule::DEFAULT_SCOPE;
use shiftsync_core::session::{FetchResponse, SavePayload, SaveResponse};
use shiftsync_core::storage::validate_remote_scope;

use crate::{
    context::RequestContext,
    handlers::{AppError, RequestError},
    state::AppState,
};

/// Query string shared by both methods.
///
/// Kept as raw strings so malformed numbers become a 400 with a JSON body
/// instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ScheduleQuery {
    pub key: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

impl ScheduleQuery {
    /// The requested month. A missing `month` or `year` falls back to the
    /// corresponding part of the built-in month.
    pub fn scope(&self) -> Result<Scope, RequestError> {
        let month = match self.month.as_deref() {
            Some(raw) => parse_number(raw, "month")?,
            None => DEFAULT_SCOPE.month(),
        };
        let year = match self.year.as_deref() {
            Some(raw) => parse_number(raw, "year")?,
            None => DEFAULT_SCOPE.year(),
        };
        Ok(validate_remote_scope(month, year)?)
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T, RequestError> {
    raw.trim()
        .parse()
        .map_err(|_| RequestError::InvalidScope(format!("{name}={raw}")))
}

fn authorize(state: &AppState, query: &ScheduleQuery) -> Result<Role, RequestError> {
    resolve_role(&state.keys, query.key.as_deref()).ok_or(RequestError::InvalidKey)
}

/// Fetch one month (GET /api/schedule?key=&month=&year=).
///
/// `schedule` is `null` when nothing was saved for that month.
pub async fn get_schedule(
    State(state): State<AppState>,
    ctx: RequestContext,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<FetchResponse>, AppError> {
    let role = authorize(&state, &query)?;
    let scope = query.scope()?;

    let schedule = state.schedules.get_schedule(scope).await?;

    tracing::debug!(
        request_id = %ctx.request_id,
        %scope,
        %role,
        entries = schedule.as_ref().map(|s| s.len()),
        "Fetched schedule"
    );

    Ok(Json(FetchResponse {
        schedule,
        role,
        month: scope.month(),
        year: scope.year(),
    }))
}

/// Replace one month (POST /api/schedule?key=&month=&year=). Admin only.
pub async fn save_schedule(
    State(state): State<AppState>,
    ctx: RequestContext,
    Query(query): Query<ScheduleQuery>,
    payload: Result<Json<SavePayload>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    let role = authorize(&state, &query)?;
    if !role.can_edit() {
        tracing::warn!(request_id = %ctx.request_id, %role, "Rejected save from read-only key");
        return Err(RequestError::AdminOnly.into());
    }
    let scope = query.scope()?;

    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(request_id = %ctx.request_id, %rejection, "Rejected schedule payload");
        RequestError::InvalidPayload
    })?;

    state.schedules.put_schedule(scope, &payload.schedule).await?;

    tracing::info!(
        request_id = %ctx.request_id,
        %scope,
        entries = payload.schedule.len(),
        "Saved schedule"
    );

    Ok(Json(SaveResponse { success: true }))
}

/// Any other method on the schedule route.
pub async fn method_not_allowed() -> AppError {
    RequestError::MethodNotAllowed.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(month: Option<&str>, year: Option<&str>) -> ScheduleQuery {
        ScheduleQuery {
            key: None,
            month: month.map(str::to_string),
            year: year.map(str::to_string),
        }
    }

    #[test]
    fn test_scope_defaults_to_builtin_month() {
        assert_eq!(query(None, None).scope().unwrap(), DEFAULT_SCOPE);
        assert_eq!(
            query(Some("3"), None).scope().unwrap(),
            Scope::new(DEFAULT_SCOPE.year(), 3).unwrap()
        );
    }

    #[test]
    fn test_scope_parses_query_values() {
        assert_eq!(
            query(Some("1"), Some("2026")).scope().unwrap(),
            Scope::new(2026, 1).unwrap()
        );
    }

    #[test]
    fn test_scope_rejects_out_of_range_and_garbage() {
        assert!(matches!(
            query(Some("13"), Some("2025")).scope(),
            Err(RequestError::InvalidScope(_))
        ));
        assert!(matches!(
            query(Some("5"), Some("1999")).scope(),
            Err(RequestError::InvalidScope(_))
        ));
        assert!(matches!(
            query(Some("may"), Some("2025")).scope(),
            Err(RequestError::InvalidScope(_))
        ));
    }
}
