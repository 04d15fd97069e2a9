//! Venue search adapters

mod catalog;

pub use catalog::{CatalogVenue, CatalogVenueSearch};
