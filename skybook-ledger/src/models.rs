use chrono::{DateTime, Utc};
use std::fmt;

/// A booked ticket.
///
/// Nothing here is checked against the flight catalog: the flight number may
/// not exist, the seat may be taken or beyond capacity, and the class is the
/// text the passenger typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: String,
    pub passenger_name: String,
    pub flight_number: String,
    pub seat_number: String,
    pub seat_class: String,
    pub booked_at: DateTime<Utc>,
}

impl Ticket {
    pub fn new(
        id: String,
        passenger_name: String,
        flight_number: String,
        seat_number: String,
        seat_class: String,
    ) -> Self {
        Self {
            id,
            passenger_name,
            flight_number,
            seat_number,
            seat_class,
            booked_at: Utc::now(),
        }
    }
}

/// Multi-line ticket details block.
impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**** TICKET DETAILS ****")?;
        writeln!(f, "Ticket ID: {}", self.id)?;
        writeln!(f, "Passenger: {}", self.passenger_name)?;
        writeln!(f, "Flight Number: {}", self.flight_number)?;
        writeln!(f, "Seat Number: {}", self.seat_number)?;
        write!(f, "Seat Class: {}", self.seat_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_block_lists_every_field() {
        let ticket = Ticket::new(
            "TKT42".to_string(),
            "Alice Smith".to_string(),
            "AA100".to_string(),
            "12A".to_string(),
            "Economy".to_string(),
        );

        let details = ticket.to_string();
        let lines: Vec<&str> = details.lines().collect();
        assert_eq!(
            lines,
            vec![
                "**** TICKET DETAILS ****",
                "Ticket ID: TKT42",
                "Passenger: Alice Smith",
                "Flight Number: AA100",
                "Seat Number: 12A",
                "Seat Class: Economy",
            ]
        );
    }
}
