//! Price table for the known ice types.
//!
//! The built-in defaults cover the four products the business sells; a
//! `config.toml` with a `[[prices]]` array can override them without a
//! rebuild. Lookups for unknown labels return zero rather than an error.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

/// One price entry as it appears in `config.toml`.
#[derive(Deserialize, Debug, Clone)]
pub struct PriceEntry {
    /// Ice-type label, e.g. "Đá cây"
    pub label: String,
    /// Price per unit in VND
    pub unit_price: i64,
}

#[derive(Deserialize, Debug)]
struct PriceFile {
    prices: Vec<PriceEntry>,
}

/// Mapping from ice-type label to per-unit price.
#[derive(Debug, Clone)]
pub struct PriceTable {
    prices: HashMap<String, i64>,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::from_entries([
            ("Đá cây", 10_000),
            ("Đá mi", 8_000),
            ("Đá xay", 7_000),
            ("Đá cắt", 9_000),
        ])
    }
}

impl PriceTable {
    /// Builds a table from label/price pairs.
    pub fn from_entries<L, I>(entries: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, i64)>,
    {
        Self {
            prices: entries
                .into_iter()
                .map(|(label, price)| (label.into(), price))
                .collect(),
        }
    }

    /// Loads a price table from a TOML file with a `[[prices]]` array.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        tracing::debug!("Attempting to load price table from: {:?}", path_ref);
        let contents = fs::read_to_string(path_ref).map_err(|e| {
            Error::Config(format!("Failed to read config file {path_ref:?}: {e}"))
        })?;
        let file: PriceFile = toml::from_str(&contents).map_err(|e| {
            Error::Config(format!(
                "Failed to parse TOML from config file {path_ref:?}: {e}"
            ))
        })?;
        Ok(Self::from_entries(
            file.prices.into_iter().map(|e| (e.label, e.unit_price)),
        ))
    }

    /// Loads the price table from the given path, falling back to the
    /// built-in defaults when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            tracing::debug!("No price config file found, using built-in price list");
            Ok(Self::default())
        }
    }

    /// Returns the per-unit price for `label`, or `0` for an unknown label.
    ///
    /// The zero fallback is deliberate: the form never blocks on an
    /// unrecognized type, it just prices it at nothing.
    #[must_use]
    pub fn unit_price(&self, label: &str) -> i64 {
        self.prices.get(label).copied().unwrap_or(0)
    }

    /// Known labels, for presenting a choice of ice types.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.prices.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }
}
