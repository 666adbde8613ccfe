use super::broadway::BroadwayPlay;
use super::copy_shop::CopyShop;
use super::lemonade::LemonadeStand;
use super::scenario::{CopyShopConstants, LemonadeConstants, TheaterConstants};

/// The three constructed models, shared with every page via context.
///
/// Built once at startup and never mutated afterwards: the models are pure
/// functions over the constants they were constructed with, so the whole
/// state is `Copy` and safe to read from any handler.
#[derive(Clone, Copy, Debug, Default)]
pub struct AppState {
    pub lemonade: LemonadeStand,
    pub theater: BroadwayPlay,
    pub copy_shop: CopyShop,
}

impl AppState {
    /// Rebuilds the models from explicit constants, used when the startup
    /// config file overrides one or more scenarios.
    pub fn with_constants(
        lemonade: LemonadeConstants,
        theater: TheaterConstants,
        copy_shop: CopyShopConstants,
    ) -> Self {
        Self {
            lemonade: LemonadeStand::new(lemonade),
            theater: BroadwayPlay::new(theater),
            copy_shop: CopyShop::new(copy_shop),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_constants_reach_the_models() {
        let state = AppState::with_constants(
            LemonadeConstants {
                fixed_cost: 80.0,
                ..LemonadeConstants::default()
            },
            TheaterConstants::default(),
            CopyShopConstants::default(),
        );
        assert_eq!(state.lemonade.constants().fixed_cost, 80.0);
        assert_eq!(state.lemonade.profit(0, 0.20).total_cost, 80.0);
    }
}
