use std::io::{BufRead, Write};

use skybook_catalog::{CatalogError, Flight};
use skybook_core::CredentialStore;

use crate::console::Console;
use crate::error::{SessionError, SessionResult};
use crate::session::{report, BookingSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminChoice {
    AddFlight,
    RemoveFlight,
    ViewFlights,
    Back,
}

impl AdminChoice {
    fn from_choice(choice: u32) -> Result<Self, SessionError> {
        match choice {
            1 => Ok(AdminChoice::AddFlight),
            2 => Ok(AdminChoice::RemoveFlight),
            3 => Ok(AdminChoice::ViewFlights),
            4 => Ok(AdminChoice::Back),
            other => Err(SessionError::InvalidChoice(other)),
        }
    }
}

impl<S: CredentialStore> BookingSession<S> {
    pub(crate) fn admin_menu<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> SessionResult<()> {
        loop {
            console.say("\n===== Admin Menu =====")?;
            console.say("1. Add Flight")?;
            console.say("2. Remove Flight")?;
            console.say("3. View All Flights")?;
            console.say("4. Back to Main Menu")?;

            let choice = console.read_choice()?;
            let outcome = match AdminChoice::from_choice(choice) {
                Ok(AdminChoice::AddFlight) => self.add_flight(console),
                Ok(AdminChoice::RemoveFlight) => self.remove_flight(console),
                Ok(AdminChoice::ViewFlights) => self.show_all_flights(console),
                Ok(AdminChoice::Back) => return Ok(()),
                Err(e) => Err(e),
            };
            report(console, outcome)?;
        }
    }

    fn add_flight<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> SessionResult<()> {
        let flight = Flight {
            flight_number: console.read_token("Enter flight number: ")?,
            origin: console.read_token("Enter origin: ")?,
            destination: console.read_token("Enter destination: ")?,
            departure_time: console.read_token("Enter departure time: ")?,
            arrival_time: console.read_token("Enter arrival time: ")?,
            economy_seats: console.read_number("Enter economy seats: ")?,
            business_seats: console.read_number("Enter business seats: ")?,
            first_class_seats: console.read_number("Enter first class seats: ")?,
        };

        self.catalog.add(flight);
        console.say("Flight added successfully!")
    }

    fn remove_flight<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> SessionResult<()> {
        let flight_number = console.read_token("Enter flight number to remove: ")?;

        match self.catalog.remove_by_number(&flight_number) {
            0 => Err(CatalogError::NotFound(flight_number).into()),
            removed => console.say(format!(
                "Removed {} flight(s) with number {}.",
                removed, flight_number
            )),
        }
    }
}
