// src/lib.rs
//! Data-acquisition scaffolding for a residential AVM: rate-limited HTTP
//! sessions, retry with exponential backoff, file-backed table caching,
//! and the shared validation and geography steps every scrape source needs.
//!
//! A source implements [`ScrapeSource`] (fetch plus parse) and hands the
//! rest to [`ScrapeWorkflow`]:
//!
//! ```no_run
//! use avm_scrape::{
//!     DataTable, ScrapeError, ScrapeParams, ScrapeSource, ScrapeWorkflow,
//!     SessionManager, WorkflowConfig,
//! };
//!
//! struct CountyRecords {
//!     session: SessionManager,
//! }
//!
//! impl ScrapeSource for CountyRecords {
//!     type Raw = String;
//!
//!     fn name(&self) -> &'static str {
//!         "CountyRecords"
//!     }
//!
//!     fn fetch(&mut self, params: &ScrapeParams) -> Result<String, ScrapeError> {
//!         let zip = params.get("zip").unwrap_or("75201");
//!         let url = format!("https://records.example.com/sales?zip={zip}");
//!         self.session
//!             .get(&url)?
//!             .text()
//!             .map_err(|e| ScrapeError::Network(e.to_string()))
//!     }
//!
//!     fn parse(&self, raw: String) -> Result<DataTable, ScrapeError> {
//!         let mut table = DataTable::new(["address", "price"]);
//!         for line in raw.lines() {
//!             if let Some((address, price)) = line.split_once(';') {
//!                 table.push_row(vec![Some(address.to_string()), Some(price.to_string())])?;
//!             }
//!         }
//!         Ok(table)
//!     }
//! }
//!
//! fn main() -> Result<(), ScrapeError> {
//!     let workflow = ScrapeWorkflow::new(WorkflowConfig::default())?;
//!     let mut source = CountyRecords {
//!         session: SessionManager::new()?,
//!     };
//!     let params = ScrapeParams::new().with("zip", "75201");
//!
//!     let table = workflow.scrape(&mut source, true, &params)?;
//!     let clean = workflow.validate(table, &["price"])?;
//!     println!("{} rows", clean.len());
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod geo;
pub mod logging;
pub mod net;
pub mod scrape;
pub mod settings;
pub mod table;
pub mod util;

#[cfg(test)]
mod tests;

pub use errors::ScrapeError;
pub use geo::{validate_coordinates, GeoBounds, DFW_BOUNDS};
pub use net::{RateLimiter, RetryPolicy, SessionConfig, SessionManager};
pub use scrape::{ScrapeParams, ScrapeSource, ScrapeWorkflow, TableCache, WorkflowConfig};
pub use settings::Settings;
pub use table::DataTable;
pub use util::FileError;
