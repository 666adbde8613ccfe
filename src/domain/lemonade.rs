//! Lemonade stand: a single product sold at a fixed price against a weekly
//! fixed cost.

use serde::Serialize;

use super::error::ModelError;
use super::grid::{self, MatrixRow, SweepRow};
use super::scenario::LemonadeConstants;

/// Full cost/revenue breakdown for one sales volume.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProfitResult {
    pub revenue: f64,
    pub variable_cost: f64,
    pub total_cost: f64,
    pub profit: f64,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LemonadeStand {
    constants: LemonadeConstants,
}

impl LemonadeStand {
    pub fn new(constants: LemonadeConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &LemonadeConstants {
        &self.constants
    }

    /// Profit for selling `sales_volume` cups at the given variable cost.
    /// Defined for every input, including volumes below break-even.
    pub fn profit(&self, sales_volume: u32, variable_cost_per_cup: f64) -> ProfitResult {
        let revenue = sales_volume as f64 * self.constants.price_per_cup;
        let variable_cost = sales_volume as f64 * variable_cost_per_cup;
        let total_cost = self.constants.fixed_cost + variable_cost;
        ProfitResult {
            revenue,
            variable_cost,
            total_cost,
            profit: revenue - total_cost,
        }
    }

    /// Smallest sales volume at which the stand stops losing money.
    ///
    /// Unreachable when the variable cost eats the whole price: that is a
    /// `DegenerateScenario`, not a huge or negative volume.
    pub fn break_even_volume(&self, variable_cost_per_cup: f64) -> Result<u32, ModelError> {
        let margin_per_cup = self.constants.price_per_cup - variable_cost_per_cup;
        if margin_per_cup <= 0.0 {
            return Err(ModelError::degenerate(format!(
                "a cup sells for {:.2} but costs {:.2} to make, so no sales volume breaks even",
                self.constants.price_per_cup, variable_cost_per_cup
            )));
        }
        Ok((self.constants.fixed_cost / margin_per_cup).ceil() as u32)
    }

    /// Profit at each sales volume, one row per volume in input order.
    pub fn sweep_by_volume(&self, volumes: &[u32], variable_cost_per_cup: f64) -> Vec<SweepRow> {
        grid::sweep_1d(volumes, |volume| {
            self.profit(volume, variable_cost_per_cup).profit
        })
    }

    /// Volume rows crossed with variable-cost columns.
    pub fn volume_cost_matrix(&self, volumes: &[u32], variable_costs: &[f64]) -> Vec<MatrixRow> {
        grid::sweep_2d(volumes, variable_costs, |volume, cost| {
            self.profit(volume, cost).profit
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::{DEFAULT_SALES_VOLUMES, DEFAULT_VARIABLE_COSTS};

    fn stand() -> LemonadeStand {
        LemonadeStand::default()
    }

    #[test]
    fn profit_breakdown_holds_its_invariants() {
        let result = stand().profit(200, 0.20);
        assert_eq!(result.revenue, 100.0);
        assert_eq!(result.variable_cost, 40.0);
        assert_eq!(result.total_cost, 90.0);
        assert_eq!(result.profit, result.revenue - result.total_cost);
        assert_eq!(result.profit, 10.0);
    }

    #[test]
    fn profit_is_strictly_increasing_in_volume_below_price() {
        let stand = stand();
        for cost in [0.0, 0.20, 0.49] {
            let mut last = f64::NEG_INFINITY;
            for volume in [0, 1, 50, 100, 500, 1000] {
                let profit = stand.profit(volume, cost).profit;
                assert!(profit > last, "profit not increasing at volume {volume}, cost {cost}");
                last = profit;
            }
        }
    }

    #[test]
    fn break_even_at_default_cost_is_167_cups() {
        // 50 / (0.50 - 0.20) = 166.67, rounded up to the next whole cup.
        assert_eq!(stand().break_even_volume(0.20), Ok(167));
    }

    #[test]
    fn break_even_is_degenerate_once_cost_reaches_price() {
        let stand = stand();
        for cost in [0.50, 0.55, 1.00] {
            assert!(matches!(
                stand.break_even_volume(cost),
                Err(ModelError::DegenerateScenario(_))
            ));
        }
    }

    #[test]
    fn break_even_volume_really_is_the_first_non_negative_volume() {
        let stand = stand();
        let volume = stand.break_even_volume(0.20).unwrap();
        assert!(stand.profit(volume, 0.20).profit >= 0.0);
        assert!(stand.profit(volume - 1, 0.20).profit < 0.0);
    }

    #[test]
    fn volume_sweep_keeps_the_requested_order() {
        let rows = stand().sweep_by_volume(&DEFAULT_SALES_VOLUMES, 0.20);
        assert_eq!(rows.len(), DEFAULT_SALES_VOLUMES.len());
        assert_eq!(rows[0].parameter, 100.0);
        assert_eq!(rows[0].profit, stand().profit(100, 0.20).profit);
        assert_eq!(rows[8].parameter, 500.0);
    }

    #[test]
    fn matrix_cells_match_single_profit_calls() {
        let stand = stand();
        let matrix = stand.volume_cost_matrix(&DEFAULT_SALES_VOLUMES, &DEFAULT_VARIABLE_COSTS);
        assert_eq!(matrix.len(), DEFAULT_SALES_VOLUMES.len());
        for (row, &volume) in matrix.iter().zip(&DEFAULT_SALES_VOLUMES) {
            assert_eq!(row.cells.len(), DEFAULT_VARIABLE_COSTS.len());
            for (cell, &cost) in row.cells.iter().zip(&DEFAULT_VARIABLE_COSTS) {
                assert_eq!(*cell, stand.profit(volume, cost).profit);
            }
        }
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let stand = stand();
        assert_eq!(stand.profit(333, 0.27), stand.profit(333, 0.27));
        assert_eq!(
            stand.sweep_by_volume(&[10, 20], 0.15),
            stand.sweep_by_volume(&[10, 20], 0.15)
        );
    }
}
