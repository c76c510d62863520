use skybook_catalog::CatalogError;
use skybook_core::CoreError;
use skybook_ledger::LedgerError;

/// Failures inside the menu loop.
///
/// Everything except I/O on the console itself and end of input is recovered
/// by printing [`SessionError::notice`] and returning to the enclosing menu.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Credentials(#[from] CoreError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Invalid choice: {0}")]
    InvalidChoice(u32),
    #[error("Invalid admin credentials")]
    AdminRejected,
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("End of input")]
    EndOfInput,
}

pub type SessionResult<T> = Result<T, SessionError>;

impl SessionError {
    /// Errors that end the session instead of being reported to the user.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SessionError::Io(_) | SessionError::EndOfInput)
    }

    /// Message printed to the user for a recoverable error.
    pub fn notice(&self) -> String {
        match self {
            SessionError::Credentials(CoreError::NotFound(_)) => {
                "Invalid username or password.".to_string()
            }
            SessionError::Credentials(err) => {
                tracing::error!("Credential store failure: {}", err);
                format!("Error: {}", err)
            }
            SessionError::Catalog(CatalogError::NotFound(number)) => {
                format!("Flight {} not found.", number)
            }
            SessionError::Catalog(CatalogError::InvalidSeatClass(class)) => format!(
                "Invalid seat class '{}'. Choose Economy, Business or FirstClass.",
                class
            ),
            SessionError::Ledger(LedgerError::NotFound(id)) => format!("Ticket {} not found.", id),
            SessionError::Ledger(err) => {
                tracing::error!("Ledger failure: {}", err);
                format!("Unable to book ticket: {}", err)
            }
            SessionError::InvalidChoice(_) => "Invalid Choice! Please try again.".to_string(),
            SessionError::AdminRejected => "Invalid admin credentials.".to_string(),
            SessionError::Io(err) => format!("Error: {}", err),
            SessionError::EndOfInput => "Goodbye!".to_string(),
        }
    }
}
