pub mod admin;
pub mod auth;
pub mod bookings;
pub mod console;
pub mod error;
pub mod search;
pub mod session;

pub use console::Console;
pub use error::{SessionError, SessionResult};
pub use session::BookingSession;
