//! The three business scenarios and their fixed economics.
//!
//! Every figure the formulas depend on lives in one of the constants structs
//! below, built once at startup (defaults, optionally overridden by the
//! config file) and injected into the models. The presentation layer never
//! holds an economic number of its own.

use serde::{Deserialize, Serialize};

/// Which simulation a page or theme is talking about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    Lemonade,
    Broadway,
    CopyShop,
}

impl Scenario {
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Lemonade => "Lemonade Stand",
            Scenario::Broadway => "Broadway Play",
            Scenario::CopyShop => "Copy Shop",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Scenario::Lemonade => "🍋",
            Scenario::Broadway => "🎭",
            Scenario::CopyShop => "🖨️",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Scenario::Lemonade => "one product, one price, one question",
            Scenario::Broadway => "five million up front, 800 seats a night",
            Scenario::CopyShop => "how many machines is too many?",
        }
    }
}

/// Weekly economics of the lemonade stand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LemonadeConstants {
    pub fixed_cost: f64,
    pub price_per_cup: f64,
    pub default_variable_cost: f64,
}

impl Default for LemonadeConstants {
    fn default() -> Self {
        Self {
            fixed_cost: 50.00,
            price_per_cup: 0.50,
            default_variable_cost: 0.20,
        }
    }
}

/// Sales volumes the sweep and matrix views show by default.
pub const DEFAULT_SALES_VOLUMES: [u32; 9] = [100, 150, 200, 250, 300, 350, 400, 450, 500];

/// Variable-cost column axis for the lemonade matrix.
pub const DEFAULT_VARIABLE_COSTS: [f64; 8] = [0.10, 0.15, 0.20, 0.25, 0.30, 0.35, 0.40, 0.45];

/// Economics of mounting and running the play.
///
/// The theater opens seven nights a week whether or not a show plays, so the
/// nightly opening cost is charged per night, not per show.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TheaterConstants {
    pub development_cost: f64,
    pub shows_per_week: u32,
    pub nightly_opening_cost: f64,
    pub ticket_price: f64,
    pub dealer_profit_per_ticket: f64,
    pub capacity: u32,
    pub baseline_occupancy: f64,
}

impl Default for TheaterConstants {
    fn default() -> Self {
        Self {
            development_cost: 5_000_000.0,
            shows_per_week: 8,
            nightly_opening_cost: 1_000.0,
            ticket_price: 50.00,
            dealer_profit_per_ticket: 1.50,
            capacity: 800,
            baseline_occupancy: 0.80,
        }
    }
}

/// Run length assumed when the user has not chosen one.
pub const DEFAULT_OPERATING_WEEKS: u32 = 100;

pub const DEFAULT_OCCUPANCIES: [f64; 9] = [0.60, 0.65, 0.70, 0.75, 0.80, 0.85, 0.90, 0.95, 1.00];

pub const DEFAULT_TICKET_PRICES: [f64; 9] = [30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0];

/// Run lengths (weeks) for the price matrix columns.
pub const DEFAULT_RUN_LENGTHS: [u32; 9] = [40, 60, 80, 100, 120, 140, 160, 180, 200];

/// Annual economics of the copy shop.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CopyShopConstants {
    pub rental_cost_per_machine: f64,
    pub fixed_overhead_per_year: f64,
    pub per_copy_revenue: f64,
    pub per_copy_cost: f64,
    pub per_machine_annual_capacity: f64,
}

impl Default for CopyShopConstants {
    fn default() -> Self {
        Self {
            rental_cost_per_machine: 5_000.0,
            // 400 a month for rent and utilities.
            fixed_overhead_per_year: 4_800.0,
            per_copy_revenue: 0.10,
            per_copy_cost: 0.03,
            per_machine_annual_capacity: 100_000.0,
        }
    }
}

pub const DAYS_PER_YEAR: f64 = 365.0;

pub const DEFAULT_DAILY_DEMANDS: [f64; 4] = [500.0, 1000.0, 1500.0, 2000.0];

pub const DEFAULT_FLEET_SIZES: [u32; 5] = [1, 2, 3, 4, 5];
