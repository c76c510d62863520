use std::io::{BufRead, Write};

use skybook_catalog::{CatalogError, Flight, SeatClass};
use skybook_core::CredentialStore;

use crate::console::Console;
use crate::error::{SessionError, SessionResult};
use crate::session::BookingSession;

impl<S: CredentialStore> BookingSession<S> {
    pub(crate) fn show_all_flights<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> SessionResult<()> {
        let flights = self.catalog.list_all();
        if flights.is_empty() {
            return console.say("No flights available.");
        }
        print_flights(console, flights.iter())
    }

    pub(crate) fn search_by_route<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> SessionResult<()> {
        let origin = console.read_token("Enter origin: ")?;
        let destination = console.read_token("Enter destination: ")?;

        let flights = self.catalog.find_by_route(&origin, &destination);
        if flights.is_empty() {
            return console.say(format!("No flights found from {} to {}.", origin, destination));
        }
        print_flights(console, flights.into_iter())
    }

    /// Seat counts of every class on every flight.
    pub(crate) fn show_seat_availability<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> SessionResult<()> {
        let flights = self.catalog.list_all();
        if flights.is_empty() {
            return console.say("No flights available.");
        }

        console.say("Seat availability:")?;
        for flight in flights {
            console.say(format!(
                "\nFlight: {} ({} to {})",
                flight.flight_number, flight.origin, flight.destination
            ))?;
            for class in SeatClass::ALL {
                let seats = self.catalog.seats_available(flight, class.as_str());
                console.say(format!("{} Seats: {}", class.label(), seats))?;
            }
        }
        Ok(())
    }

    /// Seat-number hint shown while booking. Problems are reported but never
    /// stop the booking.
    pub(crate) fn show_seat_range<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        flight_number: &str,
        seat_class: &str,
    ) -> SessionResult<()> {
        let class = match seat_class.parse::<SeatClass>() {
            Ok(class) => class,
            Err(e) => return console.say(SessionError::from(e).notice()),
        };

        let mut matched = false;
        for flight in self
            .catalog
            .list_all()
            .iter()
            .filter(|f| f.flight_number == flight_number)
        {
            matched = true;
            let seats = self.catalog.seats_available(flight, seat_class);
            console.say(format!("{} Seats: 1 - {}", class.label(), seats))?;
        }

        if !matched {
            let notice = SessionError::from(CatalogError::NotFound(flight_number.to_string()));
            console.say(notice.notice())?;
        }
        Ok(())
    }
}

fn print_flights<'a, R, W, I>(console: &mut Console<R, W>, flights: I) -> SessionResult<()>
where
    R: BufRead,
    W: Write,
    I: Iterator<Item = &'a Flight>,
{
    console.say(Flight::table_header())?;
    for flight in flights {
        console.say(flight)?;
    }
    Ok(())
}
