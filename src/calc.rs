//! Expense normalization
//!
//! Converts one expense record into comparable daily/monthly/yearly figures.
//! The conversion is a pure function of the record, the category's policy
//! and the user's age; nothing here touches storage.
//!
//! Calendar conventions are deliberately simple: a month is 30 days and a
//! year is 365 days, everywhere.

use crate::models::{CategoryPolicy, Expense, ExpenseKind, Frequency};

/// Days per month used for day/month conversions
pub const DAYS_PER_MONTH: f64 = 30.0;
/// Days per year used for day/year conversions
pub const DAYS_PER_YEAR: f64 = 365.0;
/// Months per year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// An expense normalized to equivalent daily, monthly and yearly cost
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalized {
    pub daily: f64,
    pub monthly: f64,
    pub yearly: f64,
}

impl Normalized {
    /// The figure for one display rate
    pub fn at(&self, rate: Rate) -> f64 {
        match rate {
            Rate::Daily => self.daily,
            Rate::Monthly => self.monthly,
            Rate::Yearly => self.yearly,
        }
    }

    /// Derive the triple from an annual total
    fn from_yearly(yearly: f64) -> Self {
        Self {
            daily: yearly / DAYS_PER_YEAR,
            monthly: yearly / MONTHS_PER_YEAR,
            yearly,
        }
    }
}

/// Display rate for normalized figures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rate {
    Daily,
    Monthly,
    Yearly,
}

impl Rate {
    pub fn key(&self) -> &'static str {
        match self {
            Rate::Daily => "daily",
            Rate::Monthly => "monthly",
            Rate::Yearly => "yearly",
        }
    }

    /// Localized per-period suffix (e.g. `¥100/日`)
    pub fn suffix(&self) -> &'static str {
        match self {
            Rate::Daily => "/日",
            Rate::Monthly => "/月",
            Rate::Yearly => "/年",
        }
    }
}

impl std::fmt::Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for Rate {
    type Err = crate::error::KakeiboError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Rate::Daily),
            "monthly" => Ok(Rate::Monthly),
            "yearly" => Ok(Rate::Yearly),
            _ => Err(crate::error::KakeiboError::Validation(format!(
                "Unknown rate '{}' (expected daily, monthly or yearly)",
                s
            ))),
        }
    }
}

/// Remaining amortization horizon in years for lifetime expenses
///
/// From age 60 upward the horizon holds at 20 years; below that it is the
/// years left until 80. A rough life-expectancy model, not an actuarial one.
pub fn remaining_years(age: u32) -> f64 {
    if age >= 60 {
        20.0
    } else {
        80.0 - age as f64
    }
}

/// Normalize one expense to its daily/monthly/yearly equivalents
///
/// A regular category recurs at the cadence implied by the expense kind
/// itself: a `once` record is read as an everyday cost, a `monthly` record
/// as a monthly bill, and so on. An irregular category instead occurs
/// `annual_count` times per year (floored at 1); the kind then only says
/// which unit the raw amount was quoted in, and the amount is scaled as a
/// per-occurrence figure. A `monthly`-kind amount in an irregular category
/// is deliberately NOT multiplied by 12 first.
pub fn normalize(expense: &Expense, policy: &CategoryPolicy, age: u32) -> Normalized {
    let amount = expense.amount.as_f64();

    match policy.frequency {
        Frequency::Regular => match expense.kind {
            ExpenseKind::Once => Normalized {
                daily: amount,
                monthly: amount * DAYS_PER_MONTH,
                yearly: amount * DAYS_PER_YEAR,
            },
            ExpenseKind::Monthly => Normalized {
                daily: amount / DAYS_PER_MONTH,
                monthly: amount,
                yearly: amount * MONTHS_PER_YEAR,
            },
            ExpenseKind::Yearly => Normalized {
                daily: amount / DAYS_PER_YEAR,
                monthly: amount / MONTHS_PER_YEAR,
                yearly: amount,
            },
            ExpenseKind::Lifetime => {
                let years = remaining_years(age);
                Normalized {
                    daily: amount / (years * DAYS_PER_YEAR),
                    monthly: amount / (years * MONTHS_PER_YEAR),
                    yearly: amount / years,
                }
            }
        },
        Frequency::Irregular => {
            let count = policy.occurrences_per_year() as f64;
            let annual = amount * count;

            match expense.kind {
                ExpenseKind::Once | ExpenseKind::Monthly | ExpenseKind::Yearly => {
                    Normalized::from_yearly(annual)
                }
                ExpenseKind::Lifetime => {
                    let years = remaining_years(age);
                    Normalized {
                        daily: annual / (years * DAYS_PER_YEAR),
                        monthly: annual / (years * MONTHS_PER_YEAR),
                        yearly: annual / years,
                    }
                }
            }
        }
    }
}
