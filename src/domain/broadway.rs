//! Broadway play: a fixed-capacity venue paying back a large development
//! cost, analyzed three ways (payback period, occupancy sensitivity,
//! ticket-price × run-length matrix).

use super::error::ModelError;
use super::grid::{self, MatrixRow, SweepRow};
use super::scenario::TheaterConstants;

/// Nights per week the theater must be opened, independent of how many
/// shows actually play.
const OPENING_NIGHTS_PER_WEEK: f64 = 7.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct BroadwayPlay {
    constants: TheaterConstants,
}

impl BroadwayPlay {
    pub fn new(constants: TheaterConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &TheaterConstants {
        &self.constants
    }

    /// Ticket revenue per week at baseline occupancy and list price.
    pub fn revenue_per_week(&self) -> f64 {
        let c = &self.constants;
        c.capacity as f64 * c.baseline_occupancy * c.ticket_price * c.shows_per_week as f64
    }

    /// Revenue target for recouping the development cost twice over.
    pub fn full_return_target(&self) -> f64 {
        self.constants.development_cost * 2.0
    }

    /// Weeks of baseline-occupancy sales until revenue reaches twice the
    /// development cost.
    ///
    /// With the stock constants the weekly revenue is always positive, but a
    /// configured scenario can zero out capacity or occupancy, so the
    /// division is guarded rather than left to produce infinity.
    pub fn weeks_for_full_return(&self) -> Result<f64, ModelError> {
        let revenue_per_week = self.revenue_per_week();
        if revenue_per_week <= 0.0 {
            return Err(ModelError::degenerate(
                "the theater earns nothing per week, so the investment is never returned",
            ));
        }
        Ok(self.full_return_target() / revenue_per_week)
    }

    /// Net profit of a run at the given occupancy, over `operating_weeks`
    /// weeks, including the dealer's cut per ticket and the nightly cost of
    /// opening the house.
    pub fn profit_for_occupancy(&self, occupancy: f64, operating_weeks: u32) -> f64 {
        let c = &self.constants;
        let weekly_take = c.shows_per_week as f64
            * c.capacity as f64
            * occupancy
            * (c.ticket_price + c.dealer_profit_per_ticket);
        let weekly_opening = c.nightly_opening_cost * OPENING_NIGHTS_PER_WEEK;
        operating_weeks as f64 * (weekly_take - weekly_opening) - c.development_cost
    }

    pub fn sweep_occupancy(&self, occupancies: &[f64], operating_weeks: u32) -> Vec<SweepRow> {
        grid::sweep_1d(occupancies, |occupancy| {
            self.profit_for_occupancy(occupancy, operating_weeks)
        })
    }

    /// Same run economics as [`profit_for_occupancy`], but at baseline
    /// occupancy with the ticket price as the free variable.
    ///
    /// [`profit_for_occupancy`]: BroadwayPlay::profit_for_occupancy
    pub fn profit_for_price_and_weeks(&self, ticket_price: f64, weeks: u32) -> f64 {
        let c = &self.constants;
        let weekly_take = c.shows_per_week as f64
            * c.capacity as f64
            * c.baseline_occupancy
            * (ticket_price + c.dealer_profit_per_ticket);
        let weekly_opening = c.nightly_opening_cost * OPENING_NIGHTS_PER_WEEK;
        weeks as f64 * (weekly_take - weekly_opening) - c.development_cost
    }

    /// Ticket-price rows crossed with run-length columns.
    pub fn price_weeks_matrix(&self, prices: &[f64], week_counts: &[u32]) -> Vec<MatrixRow> {
        grid::sweep_2d(prices, week_counts, |price, weeks| {
            self.profit_for_price_and_weeks(price, weeks)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::{
        DEFAULT_OCCUPANCIES, DEFAULT_OPERATING_WEEKS, DEFAULT_RUN_LENGTHS, DEFAULT_TICKET_PRICES,
    };

    fn play() -> BroadwayPlay {
        BroadwayPlay::default()
    }

    #[test]
    fn full_return_takes_just_over_39_weeks() {
        // 10,000,000 / (800 * 0.80 * 50 * 8) = 10,000,000 / 256,000.
        assert_eq!(play().revenue_per_week(), 256_000.0);
        assert_eq!(play().weeks_for_full_return(), Ok(39.0625));
    }

    #[test]
    fn full_return_is_degenerate_when_the_house_earns_nothing() {
        let dark = BroadwayPlay::new(TheaterConstants {
            baseline_occupancy: 0.0,
            ..TheaterConstants::default()
        });
        assert!(matches!(
            dark.weeks_for_full_return(),
            Err(ModelError::DegenerateScenario(_))
        ));
    }

    #[test]
    fn baseline_occupancy_profit_for_a_hundred_weeks() {
        // 100 * (8 * 800 * 0.80 * 51.50 - 7,000) - 5,000,000
        let profit = play().profit_for_occupancy(0.80, DEFAULT_OPERATING_WEEKS);
        assert!((profit - 20_668_000.0).abs() < 1e-6);
    }

    #[test]
    fn occupancy_and_price_formulas_agree_at_the_baseline() {
        let play = play();
        for weeks in [40, 100, 200] {
            let by_occupancy = play.profit_for_occupancy(0.80, weeks);
            let by_price = play.profit_for_price_and_weeks(50.0, weeks);
            assert!((by_occupancy - by_price).abs() < 1e-6);
        }
    }

    #[test]
    fn occupancy_sweep_covers_the_default_axis_in_order() {
        let rows = play().sweep_occupancy(&DEFAULT_OCCUPANCIES, DEFAULT_OPERATING_WEEKS);
        assert_eq!(rows.len(), 9);
        assert_eq!(rows.first().unwrap().parameter, 0.60);
        assert_eq!(rows.last().unwrap().parameter, 1.00);
        // A fuller house is always worth more.
        for pair in rows.windows(2) {
            assert!(pair[1].profit > pair[0].profit);
        }
    }

    #[test]
    fn price_matrix_has_one_row_per_price_and_one_cell_per_run_length() {
        let play = play();
        let matrix = play.price_weeks_matrix(&DEFAULT_TICKET_PRICES, &DEFAULT_RUN_LENGTHS);
        assert_eq!(matrix.len(), DEFAULT_TICKET_PRICES.len());
        for (row, &price) in matrix.iter().zip(&DEFAULT_TICKET_PRICES) {
            assert_eq!(row.cells.len(), DEFAULT_RUN_LENGTHS.len());
            for (cell, &weeks) in row.cells.iter().zip(&DEFAULT_RUN_LENGTHS) {
                assert_eq!(*cell, play.profit_for_price_and_weeks(price, weeks));
            }
        }
    }

    #[test]
    fn profit_rises_with_price_and_with_run_length() {
        let play = play();
        assert!(play.profit_for_price_and_weeks(35.0, 100) > play.profit_for_price_and_weeks(30.0, 100));
        // At every default price the weekly net is positive, so longer runs win.
        for &price in &DEFAULT_TICKET_PRICES {
            assert!(play.profit_for_price_and_weeks(price, 200) > play.profit_for_price_and_weeks(price, 40));
        }
    }
}
