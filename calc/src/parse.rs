use crate::model::{RawInput, RoiInput};

/// Deposit used when the deposit field is empty or not a number.
pub const DEFAULT_DEPOSIT_PERCENT: f64 = 25.0;

/// Reads the leading decimal number of `raw`, ignoring surrounding whitespace and thousands
/// separators. Trailing text after the number is ignored, so `"1200/month"` reads as `1200`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();

    let len = numeric_prefix_len(cleaned.as_bytes());
    if len == 0 {
        return None;
    }

    cleaned[..len].parse::<f64>().ok().filter(|value| value.is_finite())
}

fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut idx = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        idx += 1;
    }

    let int_digits = count_digits(&bytes[idx..]);
    idx += int_digits;

    let mut frac_digits = 0;
    if bytes.get(idx) == Some(&b'.') {
        frac_digits = count_digits(&bytes[idx + 1..]);

        if int_digits > 0 || frac_digits > 0 {
            idx += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    // Exponent only counts when it has digits, "12e" reads as 12
    if matches!(bytes.get(idx), Some(b'e') | Some(b'E')) {
        let mut exp_idx = idx + 1;
        if matches!(bytes.get(exp_idx), Some(b'+') | Some(b'-')) {
            exp_idx += 1;
        }

        let exp_digits = count_digits(&bytes[exp_idx..]);
        if exp_digits > 0 {
            idx = exp_idx + exp_digits;
        }
    }

    idx
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

impl RoiInput {
    /// Coerces raw form values. Price, rent and expenses fall back to `0`, deposit falls back to
    /// [`DEFAULT_DEPOSIT_PERCENT`]. Nothing is rejected here, see [`crate::calculate`].
    pub fn from_raw(raw: &RawInput) -> RoiInput {
        RoiInput {
            property_price: parse_number(&raw.property_price).unwrap_or(0.0),
            monthly_rent: parse_number(&raw.monthly_rent).unwrap_or(0.0),
            annual_expenses: parse_number(&raw.annual_expenses).unwrap_or(0.0),
            deposit_percent: parse_number(&raw.deposit_percent)
                .unwrap_or(DEFAULT_DEPOSIT_PERCENT),
        }
    }
}
