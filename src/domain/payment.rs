use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// Represents a non-negative monetary amount carried by a payment record.
///
/// This is a wrapper around `rust_decimal::Decimal` so that amounts are never
/// routed through binary floating point on their way to the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);
    /// Largest accepted amount. Keeps any in-memory sum far below `Decimal::MAX`.
    pub const MAX: Self = Self(rust_decimal_macros::dec!(1_000_000_000_000_000));

    pub fn new(value: Decimal) -> Result<Self, PaymentError> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(PaymentError::ValidationError(format!(
                "Amount must not be negative, got {value}"
            )))
        } else if value > Self::MAX.0 {
            Err(PaymentError::ValidationError(format!(
                "Amount must not exceed {}, got {value}",
                Self::MAX.0
            )))
        } else {
            Ok(Self(value))
        }
    }

    /// For literals already known to be non-negative.
    pub(crate) const fn new_unchecked(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(try_from = "String")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [Self::Paid, Self::Pending, Self::Failed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PaymentError::ValidationError(format!("Unknown payment status: {s}")))
    }
}

impl TryFrom<String> for PaymentStatus {
    type Error = PaymentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A single payment transaction as listed on the payments page.
///
/// Records are read-only once loaded. The optional fields are resolved to
/// their display defaults by `interfaces::details::PaymentDetails`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct PaymentRecord {
    /// Unique payment identifier, e.g. `PAY-87654`.
    pub id: String,
    pub customer: String,
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub amount: Amount,
    pub status: PaymentStatus,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl PaymentRecord {
    /// Builds a record with the mandatory fields only.
    pub fn new(
        id: impl Into<String>,
        customer: impl Into<String>,
        date: impl Into<String>,
        amount: Amount,
        status: PaymentStatus,
        method: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            customer: customer.into(),
            date: date.into(),
            amount,
            status,
            method: method.into(),
            card_number: None,
            product_id: None,
            address: None,
        }
    }
}
