//! A small validated record and an item transform, kept as a starting point for new modules.

use std::{fs, path::Path};

use thiserror::Error;
use tracing::{debug, info};

/// Errors raised by the example module.
#[derive(Debug, Error)]
pub enum ExampleError {
    /// The record name is empty.
    #[error("name cannot be empty")]
    EmptyName,
    /// The record value is negative.
    #[error("value must be non-negative, got {0}")]
    NegativeValue(i64),
    /// No items were given.
    #[error("items cannot be empty")]
    NoItems,
    /// The output file could not be written.
    #[error("failed to write {}", path.display())]
    Write {
        /// The output path.
        path: std::path::PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// An immutable, validated record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleRecord {
    name: String,
    value: i64,
    tags: Option<Vec<String>>,
}

/// The summary produced by [`ExampleRecord::process`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    /// The record name.
    pub name: String,
    /// The record value.
    pub value: i64,
    /// How many tags the record carries, zero without tags.
    pub tag_count: usize,
}

impl ExampleRecord {
    /// Creates a record with a non-empty name and a non-negative value.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleError::EmptyName`] or [`ExampleError::NegativeValue`].
    pub fn new<S: Into<String>>(
        name: S,
        value: i64,
        tags: Option<Vec<String>>,
    ) -> Result<Self, ExampleError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ExampleError::EmptyName);
        }
        if value < 0 {
            return Err(ExampleError::NegativeValue(value));
        }
        Ok(Self { name, value, tags })
    }

    /// The record name, never empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The record value, never negative.
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// The record tags, if any were given.
    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }

    /// Summarizes the record.
    pub fn process(&self) -> Processed {
        info!("processing example: {} with value {}", self.name, self.value);
        Processed {
            name: self.name.clone(),
            value: self.value,
            tag_count: self.tags.as_ref().map_or(0, Vec::len),
        }
    }
}

/// Uppercases every item, optionally writing them one per line to `output_path`.
///
/// # Errors
///
/// Returns [`ExampleError::NoItems`] on empty input, or [`ExampleError::Write`] if the file cannot
/// be written.
pub fn uppercase_items<S: AsRef<str>>(
    items: &[S],
    output_path: Option<&Path>,
) -> Result<Vec<String>, ExampleError> {
    if items.is_empty() {
        return Err(ExampleError::NoItems);
    }

    let processed: Vec<String> = items.iter().map(|item| item.as_ref().to_uppercase()).collect();
    debug!("processed {} items", processed.len());

    if let Some(path) = output_path {
        fs::write(path, processed.join("\n")).map_err(|source| ExampleError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("wrote results to {}", path.display());
    }

    Ok(processed)
}
