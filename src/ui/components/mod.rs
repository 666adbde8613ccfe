pub mod kpi_card;
pub mod matrix_table;
pub mod profit_badge;
pub mod profit_indicator;
pub mod sweep_table;
pub mod toast;
