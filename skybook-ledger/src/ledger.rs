use crate::models::Ticket;
use crate::ticket_id::TicketIdGenerator;

/// In-memory, insertion-ordered record of booked tickets.
pub struct TicketLedger {
    tickets: Vec<Ticket>,
    ids: TicketIdGenerator,
}

impl TicketLedger {
    pub fn new(ids: TicketIdGenerator) -> Self {
        Self {
            tickets: Vec::new(),
            ids,
        }
    }

    /// Issue a ticket and append it to the ledger.
    ///
    /// No inventory or seat checks are made. The only failure is running out
    /// of ticket ids.
    pub fn book(
        &mut self,
        passenger_name: &str,
        flight_number: &str,
        seat_number: &str,
        seat_class: &str,
    ) -> LedgerResult<Ticket> {
        let id = self.ids.next_id()?;
        let ticket = Ticket::new(
            id,
            passenger_name.to_string(),
            flight_number.to_string(),
            seat_number.to_string(),
            seat_class.to_string(),
        );

        tracing::info!(
            ticket_id = %ticket.id,
            flight_number = %ticket.flight_number,
            seat_number = %ticket.seat_number,
            "Ticket booked"
        );
        self.tickets.push(ticket.clone());
        Ok(ticket)
    }

    /// Remove every ticket with this id; returns how many were removed
    pub fn cancel_by_id(&mut self, ticket_id: &str) -> usize {
        let before = self.tickets.len();
        self.tickets.retain(|t| t.id != ticket_id);
        let removed = before - self.tickets.len();

        tracing::info!(ticket_id, removed, "Ticket cancellation");
        removed
    }

    pub fn list_all(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

impl Default for TicketLedger {
    fn default() -> Self {
        Self::new(TicketIdGenerator::default())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Ticket not found: {0}")]
    NotFound(String),

    #[error("All {range} ticket ids are in use")]
    IdSpaceExhausted { range: u32 },
}

pub type LedgerResult<T> = Result<T, LedgerError>;
