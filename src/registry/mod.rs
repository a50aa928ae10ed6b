//! Name registries and lookup collaborators
//!
//! A lookup collaborator answers "which names match this query?" for one
//! entity domain (suppliers, facilities, locations, item types, use cases).
//! Lookups are blocking calls that may fail; the runtime runs them on worker
//! threads and feeds the results back as messages.
//!
//! ```text
//! Lookup (names)  ──NameLookup──▶  OptionLookup (value + label)  ──▶ Source::Remote
//! StaticRegistry  (in-memory names, case-insensitive substring match)
//! ```

mod domain;
mod lookup;
mod parser;

pub use domain::EntityDomain;
pub use lookup::{Lookup, LookupError, NameLookup, OptionLookup, StaticRegistry};
pub use parser::{parse_registry, ParseError};
