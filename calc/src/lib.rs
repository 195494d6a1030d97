mod engine;
pub mod format;
pub mod model;
mod parse;

pub use engine::{calculate, evaluate, InvalidInputError};
pub use format::{format_currency, format_percent, Report, Thresholds, DEFAULT_CURRENCY};
pub use model::{Field, OutputField, RawInput, RoiInput, RoiResult};
pub use parse::{parse_number, DEFAULT_DEPOSIT_PERCENT};
