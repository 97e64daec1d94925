//! Money value object and Brazilian Real rendering.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Separator between the currency symbol and the amount (U+00A0).
const SYMBOL_SEPARATOR: char = '\u{a0}';

/// Exact decimal money amount.
///
/// Amounts keep the precision they were loaded with; sums of sub-cent
/// values stay exact. Rounding to cents happens only when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Largest amount accepted from input, in reais.
    ///
    /// A line value is at most this times `u32::MAX`, which leaves room for
    /// millions of lines in one sum before the decimal range runs out.
    pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

    /// Creates a new Money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
        }
    }

    /// Creates a Money amount from an exact decimal value such as `1234.505`.
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Returns zero money.
    pub const fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
        }
    }

    /// Returns the exact amount.
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the amount rounded to cents, half away from zero.
    pub fn cents(&self) -> i128 {
        let mut rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        rounded.mantissa()
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Multiplies by a quantity, saturating at the decimal range.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            amount: self.amount.saturating_mul(Decimal::from(quantity)),
        }
    }

    /// Renders the amount as Brazilian Portuguese currency, e.g. `R$ 1.234,56`.
    ///
    /// The symbol is followed by a non-breaking space, thousands are grouped
    /// with `.` and the decimal separator is `,`. The amount is rounded to
    /// cents half away from zero.
    pub fn to_brl(&self) -> String {
        let cents = self.cents();
        let digits = (cents.unsigned_abs() / 100).to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        let sign = if cents < 0 { "-" } else { "" };
        format!(
            "{sign}R${SYMBOL_SEPARATOR}{grouped},{:02}",
            cents.unsigned_abs() % 100
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::from_decimal(amount)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_brl())
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            amount: self.amount.saturating_add(rhs.amount),
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
