pub mod broadway;
pub mod copy_shop;
pub mod lemonade;
pub mod overview;

pub use broadway::BroadwayPage;
pub use copy_shop::CopyShopPage;
pub use lemonade::LemonadePage;
pub use overview::OverviewPage;
