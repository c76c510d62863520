use crate::flight::{Flight, SeatClass};

/// In-memory, insertion-ordered flight catalog maintained by the administrator.
///
/// Flight numbers are not unique; every lookup by number treats duplicates as
/// separate entries.
#[derive(Debug, Default)]
pub struct FlightCatalog {
    flights: Vec<Flight>,
}

impl FlightCatalog {
    pub fn new() -> Self {
        Self {
            flights: Vec::new(),
        }
    }

    /// Append a flight to the end of the catalog
    pub fn add(&mut self, flight: Flight) {
        tracing::info!(
            flight_number = %flight.flight_number,
            origin = %flight.origin,
            destination = %flight.destination,
            "Flight added"
        );
        self.flights.push(flight);
    }

    /// Remove every flight with this number; returns how many were removed
    pub fn remove_by_number(&mut self, flight_number: &str) -> usize {
        let before = self.flights.len();
        self.flights.retain(|f| f.flight_number != flight_number);
        let removed = before - self.flights.len();

        tracing::info!(flight_number, removed, "Flight removal");
        removed
    }

    pub fn list_all(&self) -> &[Flight] {
        &self.flights
    }

    /// Flights matching origin and destination exactly, in catalog order
    pub fn find_by_route(&self, origin: &str, destination: &str) -> Vec<&Flight> {
        self.flights
            .iter()
            .filter(|f| f.serves(origin, destination))
            .collect()
    }

    /// First flight carrying this number
    pub fn find_by_number(&self, flight_number: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.flight_number == flight_number)
    }

    /// Configured seat count for `class` on `flight`. Unrecognized class names
    /// (including case mismatches) report zero seats. Bookings never reduce it.
    pub fn seats_available(&self, flight: &Flight, class: &str) -> u32 {
        class
            .parse::<SeatClass>()
            .map(|class| flight.seats(class))
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Flight not found: {0}")]
    NotFound(String),

    #[error("Invalid seat class: {0}")]
    InvalidSeatClass(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(number: &str, origin: &str, destination: &str) -> Flight {
        Flight {
            flight_number: number.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_time: "10:00".to_string(),
            arrival_time: "18:00".to_string(),
            economy_seats: 5,
            business_seats: 2,
            first_class_seats: 1,
        }
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut catalog = FlightCatalog::new();
        catalog.add(flight("AA100", "NYC", "LON"));
        catalog.add(flight("BA200", "LON", "PAR"));

        let numbers: Vec<&str> = catalog
            .list_all()
            .iter()
            .map(|f| f.flight_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["AA100", "BA200"]);
    }

    #[test]
    fn test_remove_by_number_removes_all_duplicates() {
        let mut catalog = FlightCatalog::new();
        catalog.add(flight("AA100", "NYC", "LON"));
        catalog.add(flight("BA200", "LON", "PAR"));
        catalog.add(flight("AA100", "NYC", "LON"));

        assert_eq!(catalog.remove_by_number("AA100"), 2);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find_by_route("NYC", "LON").is_empty());
        assert!(catalog.find_by_number("AA100").is_none());
    }

    #[test]
    fn test_remove_missing_number_is_noop() {
        let mut catalog = FlightCatalog::new();
        catalog.add(flight("AA100", "NYC", "LON"));

        assert_eq!(catalog.remove_by_number("ZZ999"), 0);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_find_by_route_exact_match() {
        let mut catalog = FlightCatalog::new();
        catalog.add(flight("AA100", "NYC", "LON"));
        catalog.add(flight("AA101", "NYC", "LON"));
        catalog.add(flight("AA102", "nyc", "LON"));

        let found = catalog.find_by_route("NYC", "LON");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].flight_number, "AA100");
        assert_eq!(found[1].flight_number, "AA101");
    }

    #[test]
    fn test_seats_available_by_class() {
        let catalog = FlightCatalog::new();
        let f = flight("AA100", "NYC", "LON");

        assert_eq!(catalog.seats_available(&f, "Economy"), 5);
        assert_eq!(catalog.seats_available(&f, "Business"), 2);
        assert_eq!(catalog.seats_available(&f, "FirstClass"), 1);
        assert_eq!(catalog.seats_available(&f, "economy"), 0);
        assert_eq!(catalog.seats_available(&f, "Premium"), 0);
    }
}
