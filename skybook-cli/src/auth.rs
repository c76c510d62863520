use std::io::{BufRead, Write};

use skybook_core::{CredentialStore, Registration, UserRecord};

use crate::console::Console;
use crate::error::{SessionError, SessionResult};
use crate::session::BookingSession;

impl<S: CredentialStore> BookingSession<S> {
    pub(crate) fn register<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> SessionResult<()> {
        let registration = Registration {
            name: console.read_line("Enter full name: ")?,
            email: console.read_token("Enter email: ")?,
            phone: console.read_token("Enter phone number: ")?,
            dob: console.read_token("Enter date of birth: ")?,
            username: console.read_token("Enter username: ")?,
            password: console.read_token("Enter password: ")?,
        };

        UserRecord::register(&self.store, registration)?;
        console.say("Registration successful!")
    }

    /// On success the user menu runs until logout, with the record as context.
    pub(crate) fn login<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> SessionResult<()> {
        let username = console.read_token("Enter username: ")?;
        let password = console.read_token("Enter password: ")?;

        let user = UserRecord::login(&self.store, &username, &password)?;
        console.say("Login successful!")?;
        self.user_menu(console, &user)
    }

    pub(crate) fn admin_login<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> SessionResult<()> {
        let username = console.read_token("Enter admin username: ")?;
        let password = console.read_token("Enter admin password: ")?;

        if username != self.admin.username || password != *self.admin.password.expose() {
            tracing::warn!(username = %username, "Admin login rejected");
            return Err(SessionError::AdminRejected);
        }

        tracing::info!("Admin logged in");
        console.say("Admin login successful!")?;
        self.admin_menu(console)
    }
}
