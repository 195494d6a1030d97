use thiserror::Error;

use crate::model::{RawInput, RoiInput, RoiResult};

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Please enter valid property price and monthly rent values.")]
pub struct InvalidInputError {
    pub property_price: f64,
    pub monthly_rent: f64,
}

/// Computes yield, cash-on-cash ROI, cash flow and deposit for a single property.
///
/// Financing costs are not modelled: cash flow is net operating income only. Negative expenses
/// are accepted as-is and simply raise net income.
pub fn calculate(input: &RoiInput) -> Result<RoiResult, InvalidInputError> {
    // `!(x > 0)` also rejects NaN
    if !(input.property_price > 0.0) || !(input.monthly_rent > 0.0) {
        return Err(InvalidInputError {
            property_price: input.property_price,
            monthly_rent: input.monthly_rent,
        });
    }

    let annual_rent = input.monthly_rent * 12.0;
    let net_annual_income = annual_rent - input.annual_expenses;
    let deposit_amount = input.property_price * input.deposit_percent / 100.0;

    let rental_yield_percent = (annual_rent / input.property_price) * 100.0;
    let cash_on_cash_roi_percent = if deposit_amount > 0.0 {
        (net_annual_income / deposit_amount) * 100.0
    } else {
        0.0
    };
    let monthly_cash_flow = net_annual_income / 12.0;

    Ok(RoiResult {
        rental_yield_percent,
        cash_on_cash_roi_percent,
        monthly_cash_flow,
        deposit_amount,
    })
}

/// Parses raw form values and runs [`calculate`] on them.
pub fn evaluate(raw: &RawInput) -> Result<RoiResult, InvalidInputError> {
    calculate(&RoiInput::from_raw(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(price: f64, rent: f64, expenses: f64, deposit: f64) -> RoiInput {
        RoiInput {
            property_price: price,
            monthly_rent: rent,
            annual_expenses: expenses,
            deposit_percent: deposit,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_typical_buy_to_let() {
        let result = calculate(&input(200000.0, 1200.0, 2000.0, 25.0)).unwrap();

        assert_close(result.rental_yield_percent, 7.2);
        assert_close(result.cash_on_cash_roi_percent, 24.8);
        assert_close(result.monthly_cash_flow, 12400.0 / 12.0);
        assert_close(result.deposit_amount, 50000.0);
        assert_eq!(result.monthly_cash_flow.round(), 1033.0);
    }

    #[test]
    fn test_zero_rent_rejected() {
        let err = calculate(&input(300000.0, 0.0, 0.0, 25.0)).unwrap_err();

        assert_eq!(err.property_price, 300000.0);
        assert_eq!(err.monthly_rent, 0.0);
        assert_eq!(
            err.to_string(),
            "Please enter valid property price and monthly rent values."
        );
    }

    #[test]
    fn test_non_positive_price_or_rent_rejected() {
        let cases = vec![
            input(0.0, 1000.0, 0.0, 25.0),
            input(-1.0, 1000.0, 0.0, 25.0),
            input(100000.0, -5.0, 0.0, 25.0),
            input(0.0, 0.0, 0.0, 25.0),
            input(f64::NAN, 1000.0, 0.0, 25.0),
        ];

        for case in cases {
            assert!(calculate(&case).is_err(), "{:?} should be rejected", case);
        }
    }

    #[test]
    fn test_zero_deposit_has_zero_roi() {
        let result = calculate(&input(150000.0, 800.0, 0.0, 0.0)).unwrap();

        assert_eq!(result.deposit_amount, 0.0);
        assert_eq!(result.cash_on_cash_roi_percent, 0.0);
        assert!(result.cash_on_cash_roi_percent.is_finite());
        assert_close(result.rental_yield_percent, 6.4);
    }

    #[test]
    fn test_negative_net_income_accepted() {
        let result = calculate(&input(100000.0, 500.0, 8000.0, 10.0)).unwrap();

        assert_close(result.deposit_amount, 10000.0);
        assert_close(result.rental_yield_percent, 6.0);
        assert_close(result.cash_on_cash_roi_percent, -20.0);
        assert_close(result.monthly_cash_flow, -2000.0 / 12.0);
    }

    #[test]
    fn test_negative_expenses_raise_income() {
        let base = calculate(&input(100000.0, 500.0, 0.0, 25.0)).unwrap();
        let subsidised = calculate(&input(100000.0, 500.0, -1200.0, 25.0)).unwrap();

        assert_close(subsidised.monthly_cash_flow, base.monthly_cash_flow + 100.0);
        assert!(subsidised.cash_on_cash_roi_percent > base.cash_on_cash_roi_percent);
    }

    #[test]
    fn test_yield_matches_formula() {
        let cases = vec![
            (200000.0, 1200.0),
            (87500.0, 613.0),
            (1.0, 0.01),
            (999999.99, 4321.5),
        ];

        for (price, rent) in cases {
            let result = calculate(&input(price, rent, 0.0, 25.0)).unwrap();
            assert_eq!(result.rental_yield_percent, (rent * 12.0 / price) * 100.0);
        }
    }

    #[test]
    fn test_repeated_calls_identical() {
        let input = input(245000.0, 1375.0, 3100.0, 20.0);

        let first = calculate(&input).unwrap();
        let second = calculate(&input).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.cash_on_cash_roi_percent.to_bits(),
            second.cash_on_cash_roi_percent.to_bits()
        );
    }

    #[test]
    fn test_evaluate_raw_input() {
        let raw = RawInput {
            property_price: "200,000".into(),
            monthly_rent: "1,200".into(),
            annual_expenses: "2,000".into(),
            deposit_percent: String::new(),
        };

        let result = evaluate(&raw).unwrap();

        assert_close(result.deposit_amount, 50000.0);
        assert_close(result.cash_on_cash_roi_percent, 24.8);
    }

    #[test]
    fn test_evaluate_missing_rent() {
        let raw = RawInput {
            property_price: "300000".into(),
            ..RawInput::default()
        };

        assert!(evaluate(&raw).is_err());
    }
}
