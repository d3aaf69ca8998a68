//! Equipment catalog and equip/unequip operations.
//!
//! How items reach the player's possession is the host's concern (shops,
//! rewards, starting kit); the engine only validates ids, enforces one item
//! per slot, and feeds the bonuses into the modifier aggregator.

use crate::errors::EngineError;
use crate::player::Player;

/// Equipment slots. One item per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentSlot {
    Drill,
    Suit,
    Scanner,
}

/// Static equipment definition.
#[derive(Debug, Clone, Copy)]
pub struct ItemDef {
    pub id: &'static str,
    pub name: &'static str,
    pub slot: EquipmentSlot,
    /// Additive success-rate delta.
    pub success_bonus: f64,
    /// Additive mined-value bonus (0.10 = +10%).
    pub value_bonus: f64,
    /// Multiplier on stamina cost.
    pub stamina_mult: f64,
    /// Additive bonus-discovery chance.
    pub bonus_discovery_bonus: f64,
}

/// All equippable items.
pub const ALL_ITEMS: &[ItemDef] = &[
    ItemDef {
        id: "basic-drill",
        name: "Basic Rotary Drill",
        slot: EquipmentSlot::Drill,
        success_bonus: 0.02,
        value_bonus: 0.0,
        stamina_mult: 1.0,
        bonus_discovery_bonus: 0.0,
    },
    ItemDef {
        id: "plasma-drill",
        name: "Plasma Bore Drill",
        slot: EquipmentSlot::Drill,
        success_bonus: 0.05,
        value_bonus: 0.0,
        stamina_mult: 1.0,
        bonus_discovery_bonus: 0.0,
    },
    ItemDef {
        id: "quantum-bore",
        name: "Quantum Phase Bore",
        slot: EquipmentSlot::Drill,
        success_bonus: 0.08,
        value_bonus: 0.05,
        stamina_mult: 1.0,
        bonus_discovery_bonus: 0.0,
    },
    ItemDef {
        id: "padded-suit",
        name: "Padded Work Suit",
        slot: EquipmentSlot::Suit,
        success_bonus: 0.0,
        value_bonus: 0.0,
        stamina_mult: 0.95,
        bonus_discovery_bonus: 0.0,
    },
    ItemDef {
        id: "exo-suit",
        name: "Servo Exo-Suit",
        slot: EquipmentSlot::Suit,
        success_bonus: 0.0,
        value_bonus: 0.0,
        stamina_mult: 0.85,
        bonus_discovery_bonus: 0.0,
    },
    ItemDef {
        id: "ore-scanner",
        name: "Handheld Ore Scanner",
        slot: EquipmentSlot::Scanner,
        success_bonus: 0.0,
        value_bonus: 0.05,
        stamina_mult: 1.0,
        bonus_discovery_bonus: 0.0,
    },
    ItemDef {
        id: "spectral-scanner",
        name: "Spectral Deep Scanner",
        slot: EquipmentSlot::Scanner,
        success_bonus: 0.0,
        value_bonus: 0.15,
        stamina_mult: 1.0,
        bonus_discovery_bonus: 0.02,
    },
];

/// Item definition lookup.
pub fn get_item(id: &str) -> Option<&'static ItemDef> {
    ALL_ITEMS.iter().find(|i| i.id == id)
}

/// Equip an item, replacing whatever occupied its slot.
/// Returns the id of the replaced item, if any.
pub fn equip_item(player: &mut Player, item_id: &str) -> Result<Option<String>, EngineError> {
    let item = get_item(item_id).ok_or_else(|| EngineError::UnknownItem(item_id.to_string()))?;

    let replaced = player
        .equipped_items
        .iter()
        .position(|id| get_item(id).map(|i| i.slot) == Some(item.slot))
        .map(|idx| player.equipped_items.remove(idx));

    player.equipped_items.push(item_id.to_string());
    Ok(replaced)
}

/// Remove whatever occupies a slot. Returns the removed item id, if any.
pub fn unequip_slot(player: &mut Player, slot: EquipmentSlot) -> Option<String> {
    let idx = player
        .equipped_items
        .iter()
        .position(|id| get_item(id).map(|i| i.slot) == Some(slot))?;
    Some(player.equipped_items.remove(idx))
}
