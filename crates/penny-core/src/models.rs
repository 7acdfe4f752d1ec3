//! Domain models for Penny

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Whether a transaction adds to or draws from the month's balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Spending categories known to the engine
///
/// Category labels arrive as free text from whatever loaded the ledger.
/// Known labels map onto fixed variants so membership checks (the
/// discretionary allow-list, the cut-eligible set) are matches on an
/// enumeration rather than string comparisons; anything else lands in
/// `Other` with the raw label preserved for grouping and display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Salary,
    Rent,
    Utilities,
    Insurance,
    CarPayment,
    Phone,
    Groceries,
    Gas,
    Healthcare,
    PersonalCare,
    Dining,
    Shopping,
    Rideshare,
    Entertainment,
    Subscriptions,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Salary => "Salary",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Insurance => "Insurance",
            Self::CarPayment => "Car Payment",
            Self::Phone => "Phone",
            Self::Groceries => "Groceries",
            Self::Gas => "Gas",
            Self::Healthcare => "Healthcare",
            Self::PersonalCare => "Personal Care",
            Self::Dining => "Dining",
            Self::Shopping => "Shopping",
            Self::Rideshare => "Rideshare",
            Self::Entertainment => "Entertainment",
            Self::Subscriptions => "Subscriptions",
            Self::Other(label) => label,
        }
    }

    /// Categories counted toward discretionary spending.
    ///
    /// This is a fixed allow-list. Subscriptions sits outside it even though
    /// it reads as optional spending; the burn-rate figure deliberately
    /// tracks day-to-day lifestyle spending only.
    pub fn is_discretionary(&self) -> bool {
        matches!(
            self,
            Self::Dining | Self::Shopping | Self::Rideshare | Self::Entertainment
        )
    }

    /// Categories the analyzer will propose spending caps for.
    ///
    /// The discretionary allow-list plus Subscriptions, which can be capped
    /// even though it does not count toward the burn rate.
    pub fn is_cut_eligible(&self) -> bool {
        self.is_discretionary() || matches!(self, Self::Subscriptions)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        match label {
            "Salary" => Self::Salary,
            "Rent" => Self::Rent,
            "Utilities" => Self::Utilities,
            "Insurance" => Self::Insurance,
            "Car Payment" => Self::CarPayment,
            "Phone" => Self::Phone,
            "Groceries" => Self::Groceries,
            "Gas" => Self::Gas,
            "Healthcare" => Self::Healthcare,
            "Personal Care" => Self::PersonalCare,
            "Dining" => Self::Dining,
            "Shopping" => Self::Shopping,
            "Rideshare" => Self::Rideshare,
            "Entertainment" => Self::Entertainment,
            "Subscriptions" => Self::Subscriptions,
            _ => Self::Other(label.to_string()),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Categories travel as their plain labels on the wire, so the `Other`
// fallback round-trips unknown labels unchanged.
impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from(label.as_str()))
    }
}

/// A single dated ledger entry
///
/// Amounts are always positive; `kind` carries the direction. Transactions
/// are never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
    pub kind: TransactionKind,
}

/// Fixed monthly budget figures
///
/// These four figures are independent inputs, not derived from the
/// transaction list, and may disagree with the actual totals. The engine
/// does not reconcile them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonthlyBudget {
    pub income: f64,
    pub fixed: f64,
    pub essentials: f64,
    pub discretionary: f64,
}

/// A category paired with its summed expense total for the period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: Category,
    pub amount: f64,
}

/// A known upcoming charge surfaced on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringExpense {
    pub name: String,
    pub amount: f64,
    pub category: Category,
    pub next_date: NaiveDate,
}

/// Format an amount as whole dollars with thousands separators.
///
/// Narrative strings round to the nearest dollar; fractional cents never
/// reach the user.
pub fn format_dollars(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if rounded < 0 {
        format!("-{}", out)
    } else {
        out
    }
}
