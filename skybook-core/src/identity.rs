use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skybook_shared::Masked;

use crate::repository::CredentialStore;
use crate::{CoreError, CoreResult};

/// Fields collected from the registration prompts.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
    pub username: String,
    pub password: String,
}

/// A registered account as stored in the credential file.
///
/// Usernames are not unique: registering the same name twice stores two
/// records and login returns whichever comes first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
    pub username: String,
    pub password: Masked<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<DateTime<Utc>>,
}

impl From<Registration> for UserRecord {
    fn from(registration: Registration) -> Self {
        Self {
            name: registration.name,
            email: registration.email,
            phone: registration.phone,
            dob: registration.dob,
            username: registration.username,
            password: Masked(registration.password),
            registered_at: Some(Utc::now()),
        }
    }
}

impl UserRecord {
    /// Exact, case-sensitive comparison of both credentials.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.expose() == password
    }

    /// Append a new account to the store.
    pub fn register<S>(store: &S, registration: Registration) -> CoreResult<Self>
    where
        S: CredentialStore + ?Sized,
    {
        let record = UserRecord::from(registration);
        store.append(&record)?;
        tracing::info!(username = %record.username, "Registered user");
        Ok(record)
    }

    /// Look up the first record matching both credentials.
    pub fn login<S>(store: &S, username: &str, password: &str) -> CoreResult<Self>
    where
        S: CredentialStore + ?Sized,
    {
        match store.find(username, password)? {
            Some(record) => {
                tracing::info!(username = %record.username, "User logged in");
                Ok(record)
            }
            None => {
                tracing::debug!(username, "Login rejected");
                Err(CoreError::NotFound(username.to_string()))
            }
        }
    }
}
