#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! npm-stats - download statistics for npm packages and users
//!
//! Package pages and user profile pages are fetched from the npm website,
//! download counts are scraped out of the HTML and printed as a table.
//!
//! ## Usage
//! ```rust,ignore
//! use npm_stats::{pipeline, report, Config, PageFetcher};
//!
//! async fn example() -> npm_stats::Result<()> {
//!     let config = Config::from_args(["sindresorhus"], ["left-pad"]);
//!     let stats = pipeline::run(&PageFetcher::new(), config).await;
//!     println!("{}", report::render(&stats));
//!     Ok(())
//! }
//! ```

/// Command line flow
pub mod cli;
/// The stored query and its file
pub mod config;
/// Error handling types and utilities
pub mod error;
/// HTTP page fetching
pub mod fetcher;
/// Logging configuration and utilities
pub mod logging;
/// Settle-all concurrency helpers
pub mod parallel;
pub mod pipeline;
pub mod report;
/// HTML scrapers for package and user pages
pub mod scrapers;

// Re-export common types
pub use config::{Config, QueryStore};
pub use error::{Result, StatsError};
pub use fetcher::{PageFetcher, PageSource};
pub use pipeline::StatsTable;
pub use scrapers::PackageStats;
