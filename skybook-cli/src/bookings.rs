use std::io::{BufRead, Write};

use skybook_core::{CredentialStore, UserRecord};
use skybook_ledger::LedgerError;

use crate::console::Console;
use crate::error::{SessionError, SessionResult};
use crate::session::{report, BookingSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UserChoice {
    ViewFlights,
    SearchFlights,
    SeatAvailability,
    BookTicket,
    CancelTicket,
    ViewTickets,
    Logout,
}

impl UserChoice {
    fn from_choice(choice: u32) -> Result<Self, SessionError> {
        match choice {
            1 => Ok(UserChoice::ViewFlights),
            2 => Ok(UserChoice::SearchFlights),
            3 => Ok(UserChoice::SeatAvailability),
            4 => Ok(UserChoice::BookTicket),
            5 => Ok(UserChoice::CancelTicket),
            6 => Ok(UserChoice::ViewTickets),
            7 => Ok(UserChoice::Logout),
            other => Err(SessionError::InvalidChoice(other)),
        }
    }
}

impl<S: CredentialStore> BookingSession<S> {
    pub(crate) fn user_menu<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        user: &UserRecord,
    ) -> SessionResult<()> {
        loop {
            console.say(format!("\nWelcome, {}!", user.name))?;
            console.say("===== User Menu =====")?;
            console.say("1. View All Flights")?;
            console.say("2. Search Flights by Route")?;
            console.say("3. Display Seat Availability")?;
            console.say("4. Book Ticket")?;
            console.say("5. Cancel Ticket")?;
            console.say("6. View Booked Tickets")?;
            console.say("7. Logout")?;

            let choice = console.read_choice()?;
            let outcome = match UserChoice::from_choice(choice) {
                Ok(UserChoice::ViewFlights) => self.show_all_flights(console),
                Ok(UserChoice::SearchFlights) => self.search_by_route(console),
                Ok(UserChoice::SeatAvailability) => self.show_seat_availability(console),
                Ok(UserChoice::BookTicket) => self.book_ticket(console, user),
                Ok(UserChoice::CancelTicket) => self.cancel_ticket(console),
                Ok(UserChoice::ViewTickets) => self.show_tickets(console),
                Ok(UserChoice::Logout) => {
                    tracing::info!(username = %user.username, "User logged out");
                    return console.say("Logged out.");
                }
                Err(e) => Err(e),
            };
            report(console, outcome)?;
        }
    }

    /// Books in the current user's name. The flight number, seat and class are
    /// taken as typed; an unknown flight or class is reported, then booked anyway.
    fn book_ticket<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        user: &UserRecord,
    ) -> SessionResult<()> {
        if self.catalog.is_empty() {
            return console.say("No flights available.");
        }
        self.show_all_flights(console)?;

        let flight_number = console.read_token("Enter flight number: ")?;
        let seat_class = console.read_token("Select seat class (Economy/Business/FirstClass): ")?;
        self.show_seat_range(console, &flight_number, &seat_class)?;
        let seat_number = console.read_token("Select seat number: ")?;

        let ticket = self
            .ledger
            .book(&user.name, &flight_number, &seat_number, &seat_class)?;
        console.say("Ticket booked successfully!")?;
        console.say(ticket)
    }

    fn cancel_ticket<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> SessionResult<()> {
        let ticket_id = console.read_token("Enter ticket ID: ")?;

        match self.ledger.cancel_by_id(&ticket_id) {
            0 => Err(LedgerError::NotFound(ticket_id).into()),
            _ => console.say(format!("Ticket {} cancelled.", ticket_id)),
        }
    }

    fn show_tickets<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> SessionResult<()> {
        let tickets = self.ledger.list_all();
        if tickets.is_empty() {
            return console.say("No tickets booked.");
        }

        console.say("Booked tickets:")?;
        for ticket in tickets {
            console.say(format!("{}\n", ticket))?;
        }
        Ok(())
    }
}
