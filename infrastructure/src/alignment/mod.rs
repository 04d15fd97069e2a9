//! Alignment message adapters

mod template;

pub use template::TemplateAlignmentAdvisor;
