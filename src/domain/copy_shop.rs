//! Copy shop: rented machines with a hard per-machine capacity, analyzed per
//! fleet size and daily demand.
//!
//! Two capacity-capping rules coexist on purpose. [`fleet_profit`] truncates
//! demand per machine before multiplying back up (so a three-machine shop
//! serving 182,500 copies produces 182,499), while [`pooled_profit`] caps the
//! raw annual demand against the whole fleet's capacity. The source scenario
//! used each rule in different panels without reconciling them, and the two
//! genuinely disagree whenever demand does not divide evenly, so both are kept
//! and surfaced side by side.
//!
//! [`fleet_profit`]: CopyShop::fleet_profit
//! [`pooled_profit`]: CopyShop::pooled_profit

use super::error::ModelError;
use super::grid::{self, MatrixRow};
use super::scenario::{CopyShopConstants, DAYS_PER_YEAR};

#[derive(Clone, Copy, Debug, Default)]
pub struct CopyShop {
    constants: CopyShopConstants,
}

impl CopyShop {
    pub fn new(constants: CopyShopConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &CopyShopConstants {
        &self.constants
    }

    fn profit_on_copies(&self, machines: u32, copies: f64) -> f64 {
        let c = &self.constants;
        let revenue = copies * c.per_copy_revenue;
        let cost = machines as f64 * c.rental_cost_per_machine
            + c.fixed_overhead_per_year
            + copies * c.per_copy_cost;
        revenue - cost
    }

    /// Annual profit with demand split evenly across the fleet and each
    /// machine capped individually.
    ///
    /// The share per machine is truncated to whole copies before being
    /// multiplied back by the fleet size, so up to `machines - 1` copies of
    /// demand go unserved when the split is uneven.
    pub fn fleet_profit(&self, machines: u32, daily_demand: f64) -> f64 {
        let c = &self.constants;
        let annual_demand = daily_demand * DAYS_PER_YEAR;
        let copies_per_machine =
            (annual_demand / machines as f64).floor().min(c.per_machine_annual_capacity);
        let total_copies = copies_per_machine * machines as f64;
        self.profit_on_copies(machines, total_copies)
    }

    /// Annual profit with demand capped against the pooled capacity of the
    /// whole fleet, no per-machine split and no truncation.
    pub fn pooled_profit(&self, machines: u32, daily_demand: f64) -> f64 {
        let c = &self.constants;
        let annual_demand = daily_demand * DAYS_PER_YEAR;
        let copies_made = annual_demand.min(machines as f64 * c.per_machine_annual_capacity);
        self.profit_on_copies(machines, copies_made)
    }

    /// Copies per year a fleet must sell for revenue to cover rental,
    /// overhead, and per-copy cost.
    ///
    /// Undefined when a copy brings in no margin: selling more copies can
    /// then never cover the fixed bill.
    pub fn break_even_copies(&self, machines: u32) -> Result<f64, ModelError> {
        let c = &self.constants;
        let margin_per_copy = c.per_copy_revenue - c.per_copy_cost;
        if margin_per_copy <= 0.0 {
            return Err(ModelError::degenerate(format!(
                "a copy earns {:.2} but costs {:.2}, so no volume of copies breaks even",
                c.per_copy_revenue, c.per_copy_cost
            )));
        }
        let fixed_bill = machines as f64 * c.rental_cost_per_machine + c.fixed_overhead_per_year;
        Ok(fixed_bill / margin_per_copy)
    }

    /// Largest number of copies the fleet can produce in a year.
    pub fn fleet_capacity(&self, machines: u32) -> f64 {
        machines as f64 * self.constants.per_machine_annual_capacity
    }

    /// Daily-demand rows crossed with fleet-size columns, using the
    /// per-machine capping rule.
    pub fn fleet_demand_matrix(&self, demands: &[f64], fleet_sizes: &[u32]) -> Vec<MatrixRow> {
        grid::sweep_2d(demands, fleet_sizes, |demand, machines| {
            self.fleet_profit(machines, demand)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::{DEFAULT_DAILY_DEMANDS, DEFAULT_FLEET_SIZES};

    fn shop() -> CopyShop {
        CopyShop::default()
    }

    #[test]
    fn three_machines_at_500_a_day_lose_seven_thousand() {
        // 500 * 365 = 182,500 a year; 60,833 whole copies per machine;
        // 182,499 sold. Revenue 18,249.90 against 15,000 rental + 4,800
        // overhead + 5,474.97 running cost.
        let profit = shop().fleet_profit(3, 500.0);
        assert!((profit - (-7_025.07)).abs() < 1e-6);
    }

    #[test]
    fn the_two_capping_rules_disagree_by_the_truncated_copies() {
        // Pooled capping serves all 182,500 copies; per-machine capping
        // drops one, i.e. exactly one copy's margin of profit.
        let shop = shop();
        let gap = shop.pooled_profit(3, 500.0) - shop.fleet_profit(3, 500.0);
        assert!((gap - 0.07).abs() < 1e-9);
    }

    #[test]
    fn the_two_capping_rules_agree_when_capacity_binds() {
        // 2,000 a day is 730,000 a year, far past three machines' 300,000:
        // both rules saturate at full capacity.
        let shop = shop();
        let per_machine = shop.fleet_profit(3, 2000.0);
        let pooled = shop.pooled_profit(3, 2000.0);
        assert_eq!(per_machine, pooled);
        assert!((per_machine - (300_000.0 * 0.07 - 19_800.0)).abs() < 1e-6);
    }

    #[test]
    fn break_even_copies_for_three_machines() {
        // (3 * 5,000 + 4,800) / (0.10 - 0.03)
        let copies = shop().break_even_copies(3).unwrap();
        assert!((copies - 282_857.142857).abs() < 1e-4);
    }

    #[test]
    fn break_even_is_degenerate_without_a_margin_per_copy() {
        let giveaway = CopyShop::new(CopyShopConstants {
            per_copy_revenue: 0.03,
            ..CopyShopConstants::default()
        });
        assert!(matches!(
            giveaway.break_even_copies(1),
            Err(ModelError::DegenerateScenario(_))
        ));
    }

    #[test]
    fn a_single_machine_cannot_reach_its_own_break_even() {
        // 140,000 copies needed, 100,000 possible: the sizing view must be
        // able to flag this combination.
        let shop = shop();
        let needed = shop.break_even_copies(1).unwrap();
        assert!(needed > shop.fleet_capacity(1));
        assert!(shop.pooled_profit(1, needed / DAYS_PER_YEAR) < 0.0);
    }

    #[test]
    fn matrix_rows_are_demands_and_columns_are_fleet_sizes() {
        let shop = shop();
        let matrix = shop.fleet_demand_matrix(&DEFAULT_DAILY_DEMANDS, &DEFAULT_FLEET_SIZES);
        assert_eq!(matrix.len(), DEFAULT_DAILY_DEMANDS.len());
        for (row, &demand) in matrix.iter().zip(&DEFAULT_DAILY_DEMANDS) {
            assert_eq!(row.cells.len(), DEFAULT_FLEET_SIZES.len());
            for (cell, &machines) in row.cells.iter().zip(&DEFAULT_FLEET_SIZES) {
                assert_eq!(*cell, shop.fleet_profit(machines, demand));
            }
        }
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let shop = shop();
        assert_eq!(shop.fleet_profit(4, 1250.0), shop.fleet_profit(4, 1250.0));
        assert_eq!(shop.break_even_copies(5), shop.break_even_copies(5));
    }
}
