pub mod bar_chart;
pub mod filter_panel;
pub mod stat_card;
pub mod stepper;

pub use bar_chart::BarChart;
pub use filter_panel::FilterPanel;
pub use stat_card::StatCard;
pub use stepper::BookingStepper;
