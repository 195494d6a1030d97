pub mod block;
mod calculator;
mod help;
mod results;

pub use calculator::{CalculatorState, CalculatorWidget, Outcome};
pub use help::{HelpWidget, HELP_HEIGHT, HELP_WIDTH};
pub use results::ResultsWidget;
