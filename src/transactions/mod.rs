//! The transactions of an artifact download: resolving a run, listing its artifacts, and fetching them.

#![cfg(feature = "transactions")]

mod download_and_extract_archive;
mod download_artifact;
mod extract_archive;
mod fetch_artifacts;
mod latest_successful_run;

pub use download_and_extract_archive::*;
pub use download_artifact::*;
pub use extract_archive::*;
pub use fetch_artifacts::*;
pub use latest_successful_run::*;
