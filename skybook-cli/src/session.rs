use std::io::{BufRead, Write};

use skybook_catalog::FlightCatalog;
use skybook_core::CredentialStore;
use skybook_ledger::{TicketIdGenerator, TicketLedger};
use skybook_store::app_config::AdminConfig;
use skybook_store::{Config, FileCredentialStore};
use uuid::Uuid;

use crate::console::Console;
use crate::error::{SessionError, SessionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    Login,
    Register,
    AdminLogin,
    Exit,
}

impl MainChoice {
    fn from_choice(choice: u32) -> SessionResult<Self> {
        match choice {
            1 => Ok(MainChoice::Login),
            2 => Ok(MainChoice::Register),
            3 => Ok(MainChoice::AdminLogin),
            4 => Ok(MainChoice::Exit),
            other => Err(SessionError::InvalidChoice(other)),
        }
    }
}

/// One interactive run: the catalog, the ledger and the credential store
/// live exactly as long as the session.
///
/// The logged-in user is not stored here. Login hands the record to the user
/// menu, which passes it down to the operations that need it.
pub struct BookingSession<S> {
    pub(crate) id: Uuid,
    pub(crate) store: S,
    pub(crate) catalog: FlightCatalog,
    pub(crate) ledger: TicketLedger,
    pub(crate) admin: AdminConfig,
}

impl BookingSession<FileCredentialStore> {
    pub fn from_config(config: &Config) -> Self {
        let store = FileCredentialStore::new(config.credentials.path.clone());
        let ids = TicketIdGenerator::new(config.ledger.id_prefix.clone(), config.ledger.id_range);
        Self::new(store, TicketLedger::new(ids), config.admin.clone())
    }
}

impl<S: CredentialStore> BookingSession<S> {
    pub fn new(store: S, ledger: TicketLedger, admin: AdminConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            store,
            catalog: FlightCatalog::new(),
            ledger,
            admin,
        }
    }

    pub fn catalog(&self) -> &FlightCatalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &TicketLedger {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run the main menu until the user exits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> SessionResult<()> {
        let span = tracing::info_span!("session", session_id = %self.id);
        let _guard = span.enter();
        tracing::info!("Session started");

        match self.main_menu(console) {
            Err(SessionError::EndOfInput) => {
                tracing::info!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> SessionResult<()> {
        loop {
            console.say("\n===== Airline Ticket Booking System =====")?;
            console.say("1. Login")?;
            console.say("2. Register")?;
            console.say("3. Admin Login")?;
            console.say("4. Exit")?;

            let choice = console.read_choice()?;
            let outcome = match MainChoice::from_choice(choice) {
                Ok(MainChoice::Login) => self.login(console),
                Ok(MainChoice::Register) => self.register(console),
                Ok(MainChoice::AdminLogin) => self.admin_login(console),
                Ok(MainChoice::Exit) => {
                    console.say("Goodbye!")?;
                    return Ok(());
                }
                Err(e) => Err(e),
            };
            report(console, outcome)?;
        }
    }
}

/// Print the notice for a recoverable error; pass fatal ones up.
pub(crate) fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    outcome: SessionResult<()>,
) -> SessionResult<()> {
    match outcome {
        Ok(()) => Ok(()),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            tracing::debug!(error = %e, "Operation failed");
            console.say(e.notice())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_choice_mapping() {
        assert_eq!(MainChoice::from_choice(1).unwrap(), MainChoice::Login);
        assert_eq!(MainChoice::from_choice(4).unwrap(), MainChoice::Exit);
        assert!(matches!(
            MainChoice::from_choice(0),
            Err(SessionError::InvalidChoice(0))
        ));
    }
}
