use serde::Serialize;

/// Input fields of the calculator form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PropertyPrice,
    MonthlyRent,
    AnnualExpenses,
    DepositPercent,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::PropertyPrice,
        Field::MonthlyRent,
        Field::AnnualExpenses,
        Field::DepositPercent,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Field::PropertyPrice => "property-price",
            Field::MonthlyRent => "monthly-rent",
            Field::AnnualExpenses => "annual-expenses",
            Field::DepositPercent => "deposit-percent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::PropertyPrice => "Property Price",
            Field::MonthlyRent => "Monthly Rent",
            Field::AnnualExpenses => "Annual Expenses",
            Field::DepositPercent => "Deposit (%)",
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Field::PropertyPrice => 0,
            Field::MonthlyRent => 1,
            Field::AnnualExpenses => 2,
            Field::DepositPercent => 3,
        }
    }

    pub fn next(self) -> Field {
        Field::ALL[(self.idx() + 1) % Field::ALL.len()]
    }

    pub fn prev(self) -> Field {
        Field::ALL[(self.idx() + Field::ALL.len() - 1) % Field::ALL.len()]
    }
}

/// Output fields written back to the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputField {
    RentalYield,
    CashOnCashRoi,
    MonthlyCashFlow,
    InitialInvestment,
}

impl OutputField {
    pub const ALL: [OutputField; 4] = [
        OutputField::RentalYield,
        OutputField::CashOnCashRoi,
        OutputField::MonthlyCashFlow,
        OutputField::InitialInvestment,
    ];

    pub fn id(self) -> &'static str {
        match self {
            OutputField::RentalYield => "rental-yield",
            OutputField::CashOnCashRoi => "cash-roi",
            OutputField::MonthlyCashFlow => "monthly-cash-flow",
            OutputField::InitialInvestment => "initial-investment",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutputField::RentalYield => "Rental Yield",
            OutputField::CashOnCashRoi => "Cash-on-Cash ROI",
            OutputField::MonthlyCashFlow => "Monthly Cash Flow",
            OutputField::InitialInvestment => "Initial Investment",
        }
    }
}

/// Raw field values as typed by the user, before any parsing.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct RawInput {
    pub property_price: String,
    pub monthly_rent: String,
    pub annual_expenses: String,
    pub deposit_percent: String,
}

impl RawInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::PropertyPrice => &self.property_price,
            Field::MonthlyRent => &self.monthly_rent,
            Field::AnnualExpenses => &self.annual_expenses,
            Field::DepositPercent => &self.deposit_percent,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::PropertyPrice => &mut self.property_price,
            Field::MonthlyRent => &mut self.monthly_rent,
            Field::AnnualExpenses => &mut self.annual_expenses,
            Field::DepositPercent => &mut self.deposit_percent,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiInput {
    pub property_price: f64,
    pub monthly_rent: f64,
    /// Operating costs only, mortgage payments excluded
    pub annual_expenses: f64,
    pub deposit_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiResult {
    pub rental_yield_percent: f64,
    pub cash_on_cash_roi_percent: f64,
    pub monthly_cash_flow: f64,
    pub deposit_amount: f64,
}
