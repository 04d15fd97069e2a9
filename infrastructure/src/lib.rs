//! Infrastructure layer for kanji
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod alignment;
pub mod config;
pub mod context;
pub mod logging;
pub mod store;
pub mod venue;

// Re-export commonly used types
pub use alignment::TemplateAlignmentAdvisor;
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileContextConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FilePlanningConfig,
};
pub use context::InMemoryEventContextStore;
pub use logging::JsonlPlanEventLogger;
pub use store::InMemoryPlanStore;
pub use venue::{CatalogVenue, CatalogVenueSearch};
