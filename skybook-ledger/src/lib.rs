pub mod models;
pub mod ticket_id;
pub mod ledger;

pub use models::Ticket;
pub use ticket_id::TicketIdGenerator;
pub use ledger::{LedgerError, LedgerResult, TicketLedger};
