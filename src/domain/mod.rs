//! The scenario-calculation engine. Pure functions over immutable constants;
//! no UI types, no I/O, independently testable.

pub mod app_state;
pub mod broadway;
pub mod copy_shop;
pub mod error;
pub mod grid;
pub mod input;
pub mod lemonade;
pub mod scenario;

pub use app_state::AppState;
pub use broadway::BroadwayPlay;
pub use copy_shop::CopyShop;
pub use error::ModelError;
pub use grid::{MatrixRow, SweepRow};
pub use lemonade::{LemonadeStand, ProfitResult};
pub use scenario::{
    CopyShopConstants, LemonadeConstants, Scenario, TheaterConstants, DAYS_PER_YEAR,
    DEFAULT_DAILY_DEMANDS, DEFAULT_FLEET_SIZES, DEFAULT_OCCUPANCIES, DEFAULT_OPERATING_WEEKS,
    DEFAULT_RUN_LENGTHS, DEFAULT_SALES_VOLUMES, DEFAULT_TICKET_PRICES, DEFAULT_VARIABLE_COSTS,
};
