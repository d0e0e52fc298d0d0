//! CI tooling for downloading GitHub Actions artifacts and gating builds on security reports.

pub mod env;
pub mod error;
pub mod example;
pub mod exit;
pub mod gates;
pub mod logging;
pub mod transactions;
pub mod workflow;

#[cfg(feature = "transactions")]
pub mod driver;

pub use error::{Error, Result};
pub use exit::Exit;
