//! Mining locations: the default catalog plus the mutable runtime records
//! the host owns and hands to the resolver.

pub mod data;
pub mod types;

pub use data::get_all_locations;
pub use types::MiningLocation;

use serde::{Deserialize, Serialize};

/// The host-owned set of location records. Lookup by id, mutable access for
/// the resolver, immutable iteration for progression's unlock scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationCatalog {
    locations: Vec<MiningLocation>,
}

impl LocationCatalog {
    /// The standard catalog shipped with the engine.
    pub fn standard() -> Self {
        Self {
            locations: get_all_locations(),
        }
    }

    pub fn from_locations(locations: Vec<MiningLocation>) -> Self {
        Self { locations }
    }

    pub fn get(&self, id: &str) -> Option<&MiningLocation> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut MiningLocation> {
        self.locations.iter_mut().find(|l| l.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MiningLocation> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
