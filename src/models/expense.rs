//! Expense record and recurrence kind
//!
//! An expense stores the amount exactly as the user quoted it; the `kind`
//! says which unit that quote is denominated in (a single purchase, a
//! monthly bill, a yearly bill, or a lifetime investment). Conversion to
//! comparable figures happens in the calculation layer, never here.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ExpenseId;
use super::money::Money;
use super::Category;
use crate::error::KakeiboError;

/// Maximum memo length accepted at the input boundary
const MAX_MEMO_LEN: usize = 200;

/// Recurrence semantics of how an expense amount was quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    /// A one-off purchase
    Once,
    /// A recurring monthly bill
    Monthly,
    /// A recurring yearly bill
    Yearly,
    /// A one-time outlay amortized over remaining life years
    Lifetime,
}

impl ExpenseKind {
    pub const ALL: [ExpenseKind; 4] = [
        ExpenseKind::Once,
        ExpenseKind::Monthly,
        ExpenseKind::Yearly,
        ExpenseKind::Lifetime,
    ];

    /// The stable lowercase key used on the wire and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            ExpenseKind::Once => "once",
            ExpenseKind::Monthly => "monthly",
            ExpenseKind::Yearly => "yearly",
            ExpenseKind::Lifetime => "lifetime",
        }
    }

    /// Localized display label
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseKind::Once => "単発",
            ExpenseKind::Monthly => "月額",
            ExpenseKind::Yearly => "年額",
            ExpenseKind::Lifetime => "長期投資",
        }
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ExpenseKind {
    type Err = KakeiboError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "once" => Ok(ExpenseKind::Once),
            "monthly" => Ok(ExpenseKind::Monthly),
            "yearly" => Ok(ExpenseKind::Yearly),
            "lifetime" => Ok(ExpenseKind::Lifetime),
            _ => Err(KakeiboError::Validation(format!(
                "Unknown expense type '{}' (expected once, monthly, yearly or lifetime)",
                s
            ))),
        }
    }
}

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned at creation, immutable
    pub id: ExpenseId,

    /// Calendar date the expense is logged against
    pub date: NaiveDate,

    /// Category key
    pub category: Category,

    /// Amount in whole yen, as quoted for `kind`
    pub amount: Money,

    /// Recurrence semantics of the quoted amount
    #[serde(rename = "type")]
    pub kind: ExpenseKind,

    /// Optional free-text annotation, no semantic effect
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl Expense {
    /// Create a new expense with a freshly assigned ID
    pub fn new(date: NaiveDate, category: Category, amount: Money, kind: ExpenseKind) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            category,
            amount,
            kind,
            memo: None,
        }
    }

    /// Attach a memo, dropping it if blank
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        let memo = memo.into();
        self.memo = if memo.trim().is_empty() {
            None
        } else {
            Some(memo)
        };
        self
    }

    /// The `YYYY-MM` bucket key for this expense's date
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.date.year(), self.date.month())
    }

    /// Validate the record at the input boundary
    ///
    /// The calculation layer assumes well-formed input and never
    /// re-validates.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount.yen()));
        }

        if let Some(memo) = &self.memo {
            if memo.chars().count() > MAX_MEMO_LEN {
                return Err(ExpenseValidationError::MemoTooLong(memo.chars().count()));
            }
        }

        Ok(())
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount(i64),
    MemoTooLong(usize),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(yen) => {
                write!(f, "Expense amount cannot be negative (got {})", yen)
            }
            Self::MemoTooLong(len) => {
                write!(f, "Memo too long ({} chars, max {})", len, MAX_MEMO_LEN)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(
            date(2026, 3, 15),
            Category::Food,
            Money::from_yen(800),
            ExpenseKind::Once,
        );

        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.amount.yen(), 800);
        assert!(expense.memo.is_none());
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_with_memo() {
        let expense = Expense::new(
            date(2026, 3, 15),
            Category::Food,
            Money::from_yen(800),
            ExpenseKind::Once,
        )
        .with_memo("lunch");
        assert_eq!(expense.memo.as_deref(), Some("lunch"));

        let blank = Expense::new(
            date(2026, 3, 15),
            Category::Food,
            Money::from_yen(800),
            ExpenseKind::Once,
        )
        .with_memo("   ");
        assert!(blank.memo.is_none());
    }

    #[test]
    fn test_month_key() {
        let expense = Expense::new(
            date(2026, 3, 5),
            Category::Travel,
            Money::from_yen(40000),
            ExpenseKind::Once,
        );
        assert_eq!(expense.month_key(), "2026-03");
    }

    #[test]
    fn test_validation() {
        let mut expense = Expense::new(
            date(2026, 3, 15),
            Category::Food,
            Money::from_yen(800),
            ExpenseKind::Once,
        );
        assert!(expense.validate().is_ok());

        expense.amount = Money::from_yen(-1);
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::NegativeAmount(-1))
        );

        expense.amount = Money::from_yen(800);
        expense.memo = Some("x".repeat(201));
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::MemoTooLong(_))
        ));
    }

    #[test]
    fn test_wire_shape() {
        let expense = Expense::new(
            date(2026, 3, 15),
            Category::Clothing,
            Money::from_yen(8000),
            ExpenseKind::Once,
        );

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["category"], "clothing");
        assert_eq!(json["type"], "once");
        assert_eq!(json["amount"], 8000);
        assert_eq!(json["date"], "2026-03-15");
        assert!(json.get("memo").is_none());

        let back: Expense = serde_json::from_value(json).unwrap();
        assert_eq!(back, expense);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("once".parse::<ExpenseKind>().unwrap(), ExpenseKind::Once);
        assert_eq!(
            "LIFETIME".parse::<ExpenseKind>().unwrap(),
            ExpenseKind::Lifetime
        );
        assert!("weekly".parse::<ExpenseKind>().is_err());
    }
}
