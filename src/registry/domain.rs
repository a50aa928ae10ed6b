//! Entity domains served by name registries

use serde::{Deserialize, Serialize};

/// The kinds of names a search-select field can look up
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum EntityDomain {
    Facility,
    Location,
    Supplier,
    ItemType,
    UseCase,
}

impl EntityDomain {
    pub const ALL: [EntityDomain; 5] = [
        EntityDomain::Facility,
        EntityDomain::Location,
        EntityDomain::Supplier,
        EntityDomain::ItemType,
        EntityDomain::UseCase,
    ];

    /// Snake-case key used in config files and registry file names
    pub fn key(self) -> &'static str {
        match self {
            EntityDomain::Facility => "facility",
            EntityDomain::Location => "location",
            EntityDomain::Supplier => "supplier",
            EntityDomain::ItemType => "item_type",
            EntityDomain::UseCase => "use_case",
        }
    }

    /// Noun used in the "New <noun>: <text>" entry
    pub fn noun(self) -> &'static str {
        match self {
            EntityDomain::Facility => "facility",
            EntityDomain::Location => "location",
            EntityDomain::Supplier => "supplier",
            EntityDomain::ItemType => "type",
            EntityDomain::UseCase => "use case",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            EntityDomain::Facility => "Search facilities...",
            EntityDomain::Location => "Search locations...",
            EntityDomain::Supplier => "Search suppliers...",
            EntityDomain::ItemType => "Search item types...",
            EntityDomain::UseCase => "Search use cases...",
        }
    }

    /// Column header used by grid presets
    pub fn title(self) -> &'static str {
        match self {
            EntityDomain::Facility => "Facility",
            EntityDomain::Location => "Location",
            EntityDomain::Supplier => "Supplier",
            EntityDomain::ItemType => "Item Type",
            EntityDomain::UseCase => "Use Case",
        }
    }
}
