// Mining resolution
pub const BASE_SUCCESS_RATE: f64 = 0.75;
pub const SUCCESS_RATE_MIN: f64 = 0.10;
pub const SUCCESS_RATE_MAX: f64 = 0.95;
pub const DANGER_BONUS_STEP: f64 = 0.05;
pub const HIGH_RISK_THRESHOLD: f64 = 1.5;
pub const HIGH_RISK_PENALTY: f64 = 0.9;
pub const MIN_RISK_MULTIPLIER: f64 = 0.5;
pub const MAX_RISK_MULTIPLIER: f64 = 3.0;

// Stamina
pub const STAMINA_COST_BASE: f64 = 10.0;
pub const BASE_MAX_STAMINA: u32 = 100;

// Rarity-weighted sampling: weight = max(1, CEILING - tier) * risk^(tier - 1)
pub const RARITY_WEIGHT_CEILING: u32 = 8;

// Consolation XP band on a failed attempt (inclusive bounds)
pub const CONSOLATION_XP_MIN: u32 = 1;
pub const CONSOLATION_XP_MAX: u32 = 9;

// Bonus discovery (secondary roll on a successful mine)
pub const BONUS_DISCOVERY_BASE_CHANCE: f64 = 0.05;
pub const BONUS_DISCOVERY_VALUE_MULT: f64 = 1.5;

// Experience formula terms
pub const VALUE_XP_DIVISOR: u64 = 10_000;
pub const RISK_XP_FACTOR: f64 = 0.5;

// Weather re-roll chance per visit
pub const WEATHER_SHIFT_CHANCE: f64 = 0.25;

// Market engine
pub const MARKET_TICK_INTERVAL_SECS: i64 = 300;
pub const PRICE_MULTIPLIER_FLOOR: f64 = 0.1;
pub const BASE_SUPPLY: f64 = 100.0;
pub const BASE_DEMAND: f64 = 100.0;
pub const SUPPLY_DEMAND_MIN: f64 = 10.0;
pub const SUPPLY_DEMAND_MAX: f64 = 200.0;
pub const SALE_SUPPLY_PER_UNIT: f64 = 0.1;
pub const SALE_DEMAND_PER_UNIT: f64 = 0.05;
pub const ECONOMIC_EVENT_CHANCE: f64 = 0.10;
pub const SPECIAL_EVENT_CHANCE: f64 = 0.05;
pub const SELL_DEMAND_FLOOR: f64 = 0.5;
pub const SELL_SUPPLY_FLOOR: f64 = 0.5;
// Trend reads Stable while |change_percent| stays under this
pub const TREND_THRESHOLD_PERCENT: f64 = 0.5;

// Player defaults
pub const STARTING_MONEY: u64 = 500;
pub const STARTING_LOCATION: &str = "surface-strip";
pub const PLAYER_NAME_MAX_LENGTH: usize = 16;
