//! Mineral catalog: immutable definitions, rarity tiers, and the lookup
//! wrapper handed to the engine by the host.

pub mod data;
pub mod types;

pub use data::{class_members, ALL_MINERALS};
pub use types::{Mineral, MineralClass, Rarity};

/// Read-only lookup over a set of minerals. The host builds one at startup
/// and hands it to the resolver and market engine.
#[derive(Debug, Clone)]
pub struct MineralCatalog {
    minerals: Vec<Mineral>,
}

impl MineralCatalog {
    /// The standard catalog shipped with the engine.
    pub fn standard() -> Self {
        Self {
            minerals: ALL_MINERALS.to_vec(),
        }
    }

    /// A catalog over an explicit mineral set (tests, host overrides).
    pub fn from_minerals(minerals: Vec<Mineral>) -> Self {
        Self { minerals }
    }

    pub fn get(&self, id: &str) -> Option<&Mineral> {
        self.minerals.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mineral> {
        self.minerals.iter()
    }

    pub fn len(&self) -> usize {
        self.minerals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minerals.is_empty()
    }

    /// All minerals of a given rarity, in catalog order.
    pub fn by_rarity(&self, rarity: Rarity) -> Vec<&Mineral> {
        self.minerals.iter().filter(|m| m.rarity == rarity).collect()
    }
}
