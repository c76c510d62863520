pub mod flight;
pub mod catalog;

pub use flight::{Flight, SeatClass};
pub use catalog::{CatalogError, FlightCatalog};
