// src/scrape/mod.rs
pub mod cache;
pub mod source;
pub mod workflow;

pub use cache::TableCache;
pub use source::{ScrapeParams, ScrapeSource};
pub use workflow::{ScrapeWorkflow, WorkflowConfig};
