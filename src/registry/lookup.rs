//! Lookup collaborator traits and the in-memory registry

use std::path::Path;

use crate::model::SelectOption;

use super::parser::{parse_registry, ParseError};

/// Error returned by a lookup collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The registry could not be reached (network down, service missing)
    Unavailable(String),
    /// The registry answered but the request failed
    Failed(String),
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::Unavailable(reason) => write!(f, "lookup unavailable: {}", reason),
            LookupError::Failed(reason) => write!(f, "lookup failed: {}", reason),
        }
    }
}

impl std::error::Error for LookupError {}

/// A name registry for one entity domain
///
/// Implementations return matching labels in whatever order they consider
/// relevant. Case folding for equality checks is done by the caller.
pub trait Lookup: Send + Sync {
    fn lookup(&self, query: &str) -> Result<Vec<String>, LookupError>;
}

impl<F> Lookup for F
where
    F: Fn(&str) -> Result<Vec<String>, LookupError> + Send + Sync,
{
    fn lookup(&self, query: &str) -> Result<Vec<String>, LookupError> {
        self(query)
    }
}

/// A lookup that returns options with separate value identifiers and labels
pub trait OptionLookup: Send + Sync {
    fn lookup_options(&self, query: &str) -> Result<Vec<SelectOption>, LookupError>;
}

impl<F> OptionLookup for F
where
    F: Fn(&str) -> Result<Vec<SelectOption>, LookupError> + Send + Sync,
{
    fn lookup_options(&self, query: &str) -> Result<Vec<SelectOption>, LookupError> {
        self(query)
    }
}

/// Bridges a name [`Lookup`] into an [`OptionLookup`] whose values equal their labels
#[derive(Debug, Clone)]
pub struct NameLookup<L> {
    inner: L,
}

impl<L: Lookup> NameLookup<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }
}

impl<L: Lookup> OptionLookup for NameLookup<L> {
    fn lookup_options(&self, query: &str) -> Result<Vec<SelectOption>, LookupError> {
        let names = self.inner.lookup(query)?;
        Ok(names.into_iter().map(SelectOption::from_name).collect())
    }
}

/// In-memory registry of names, matched by case-insensitive substring
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    names: Vec<String>,
}

impl StaticRegistry {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a registry from CSV text (first column of every row)
    pub fn from_csv_str(content: &str) -> Result<Self, ParseError> {
        Ok(Self::new(parse_registry(content)?))
    }

    /// Load a registry file from disk
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let registry = Self::from_csv_str(&content)?;
        tracing::info!(
            "Loaded {} registry names from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Lookup for StaticRegistry {
    fn lookup(&self, query: &str) -> Result<Vec<String>, LookupError> {
        let needle = query.trim().to_lowercase();
        Ok(self
            .names
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
