use thiserror::Error;

use crate::schedule::ScheduleError;

/// How an error is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or rejected credential. Ends the session.
    Auth,
    /// Network or server failure. Recoverable.
    Transport,
    /// Rejected locally before any remote call.
    Validation,
}

/// Errors surfaced by the schedule session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Отсутствует ключ доступа")]
    MissingCredential,

    #[error("Неверный ключ доступа")]
    AccessDenied,

    #[error("Ошибка подключения к серверу: {0}")]
    Transport(String),

    #[error("Только админ может изменять расписание")]
    ReadOnly,

    #[error("Расписание ещё не загружено")]
    NotReady,

    #[error("Сохранение уже выполняется")]
    SaveInProgress,

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredential | Self::AccessDenied => ErrorKind::Auth,
            Self::Transport(_) => ErrorKind::Transport,
            Self::ReadOnly | Self::NotReady | Self::SaveInProgress | Self::Schedule(_) => {
                ErrorKind::Validation
            }
        }
    }

    /// Returns true if the session cannot recover from this error.
    pub fn is_terminal(&self) -> bool {
        self.kind() == ErrorKind::Auth
    }
}

/// Failure reported by the remote schedule store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("credential rejected with status {status}")]
    Unauthorized { status: u16 },

    #[error("{0}")]
    Transport(String),
}

impl From<RemoteError> for SessionError {
    fn from(error: RemoteError) -> Self {
        match error {
            RemoteError::Unauthorized { .. } => Self::AccessDenied,
            RemoteError::Transport(message) => Self::Transport(message),
        }
    }
}
