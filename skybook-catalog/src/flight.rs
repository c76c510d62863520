use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::CatalogError;

/// Cabin classes a flight carries seats for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SeatClass {
    Economy,
    Business,
    FirstClass,
}

impl SeatClass {
    pub const ALL: [SeatClass; 3] = [SeatClass::Economy, SeatClass::Business, SeatClass::FirstClass];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeatClass::Economy => "Economy",
            SeatClass::Business => "Business",
            SeatClass::FirstClass => "FirstClass",
        }
    }

    /// Human-readable name for listings.
    pub fn label(&self) -> &'static str {
        match self {
            SeatClass::FirstClass => "First Class",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for SeatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the class name.
impl FromStr for SeatClass {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Economy" => Ok(SeatClass::Economy),
            "Business" => Ok(SeatClass::Business),
            "FirstClass" => Ok(SeatClass::FirstClass),
            other => Err(CatalogError::InvalidSeatClass(other.to_string())),
        }
    }
}

/// A scheduled flight. Times are free text as entered by the administrator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flight {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub economy_seats: u32,
    pub business_seats: u32,
    pub first_class_seats: u32,
}

impl Flight {
    /// Seat count configured for a class at creation time.
    pub fn seats(&self, class: SeatClass) -> u32 {
        match class {
            SeatClass::Economy => self.economy_seats,
            SeatClass::Business => self.business_seats,
            SeatClass::FirstClass => self.first_class_seats,
        }
    }

    pub fn serves(&self, origin: &str, destination: &str) -> bool {
        self.origin == origin && self.destination == destination
    }
}

/// Width of each column in the flight table.
const COLUMN_WIDTH: usize = 15;

impl Flight {
    /// Column titles and rule matching the `Display` row layout.
    pub fn table_header() -> String {
        format!(
            "{:<w$}{:<w$}{:<w$}{:<w$}{:<w$}\n{}",
            "Flight Number",
            "Origin",
            "Destination",
            "Departure",
            "Arrival",
            "-".repeat(COLUMN_WIDTH * 5),
            w = COLUMN_WIDTH,
        )
    }
}

/// One left-aligned table row.
impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<w$}{:<w$}{:<w$}{:<w$}{:<w$}",
            self.flight_number,
            self.origin,
            self.destination,
            self.departure_time,
            self.arrival_time,
            w = COLUMN_WIDTH,
        )
    }
}
