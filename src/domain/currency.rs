//! Norrathian coin: platinum, gold, silver and copper.
//!
//! Every price is stored as a plain copper count. The p/g/s/c breakdown is only ever
//! derived for display and for pre-filling the price inputs.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const COPPER_PER_PLATINUM: u64 = 1000;
pub const COPPER_PER_GOLD: u64 = 100;
pub const COPPER_PER_SILVER: u64 = 10;

/// A non-negative amount of coin, counted in copper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

/// Canonical split of an amount into its four denominations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Denominations {
    pub platinum: u64,
    pub gold: u64,
    pub silver: u64,
    pub copper: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    #[error("{denomination} must be a whole, non-negative number (got \"{input}\")")]
    InvalidAmount {
        denomination: &'static str,
        input: String,
    },
    #[error("amount is too large")]
    Overflow,
    #[error("unrecognised coin term \"{0}\"")]
    InvalidTerm(String),
    #[error("denomination '{0}' appears more than once")]
    RepeatedTerm(char),
}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_copper(copper: u64) -> Self {
        Self(copper)
    }

    pub const fn copper(self) -> u64 {
        self.0
    }

    /// Builds an amount from the four denominations.
    pub fn from_parts(platinum: u64, gold: u64, silver: u64, copper: u64) -> Result<Self, CurrencyError> {
        let total = platinum
            .checked_mul(COPPER_PER_PLATINUM)
            .and_then(|sum| sum.checked_add(gold.checked_mul(COPPER_PER_GOLD)?))
            .and_then(|sum| sum.checked_add(silver.checked_mul(COPPER_PER_SILVER)?))
            .and_then(|sum| sum.checked_add(copper))
            .ok_or(CurrencyError::Overflow)?;
        Ok(Self(total))
    }

    /// Builds an amount from raw text inputs, one per denomination.
    ///
    /// Blank inputs count as zero. Anything else must parse as a non-negative integer.
    pub fn from_inputs(platinum: &str, gold: &str, silver: &str, copper: &str) -> Result<Self, CurrencyError> {
        Self::from_parts(
            parse_input("Platinum", platinum)?,
            parse_input("Gold", gold)?,
            parse_input("Silver", silver)?,
            parse_input("Copper", copper)?,
        )
    }

    pub fn denominations(self) -> Denominations {
        let total = self.0;
        Denominations {
            platinum: total / COPPER_PER_PLATINUM,
            gold: (total % COPPER_PER_PLATINUM) / COPPER_PER_GOLD,
            silver: (total % COPPER_PER_GOLD) / COPPER_PER_SILVER,
            copper: total % COPPER_PER_SILVER,
        }
    }

    /// Price of `quantity` units at this unit price.
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

fn parse_input(denomination: &'static str, input: &str) -> Result<u64, CurrencyError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| CurrencyError::InvalidAmount {
        denomination,
        input: input.to_string(),
    })
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

/// Renders e.g. `1p 2g 3s 4c`. Zero denominations are left out, and copper is shown
/// when it is non-zero or when nothing else would be shown.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self.denominations();
        let mut terms = Vec::with_capacity(4);
        if parts.platinum > 0 {
            terms.push(format!("{}p", parts.platinum));
        }
        if parts.gold > 0 {
            terms.push(format!("{}g", parts.gold));
        }
        if parts.silver > 0 {
            terms.push(format!("{}s", parts.silver));
        }
        if parts.copper > 0 || terms.is_empty() {
            terms.push(format!("{}c", parts.copper));
        }
        f.write_str(&terms.join(" "))
    }
}

/// Accepts the display form back, e.g. `"1p 3s"` or `"0c"`.
impl FromStr for Money {
    type Err = CurrencyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = Denominations::default();
        let mut seen = [false; 4];

        for term in input.split_whitespace() {
            let Some(unit) = term.chars().last() else {
                continue;
            };
            let digits = &term[..term.len() - unit.len_utf8()];
            let (slot, index) = match unit.to_ascii_lowercase() {
                'p' => (&mut parts.platinum, 0),
                'g' => (&mut parts.gold, 1),
                's' => (&mut parts.silver, 2),
                'c' => (&mut parts.copper, 3),
                _ => return Err(CurrencyError::InvalidTerm(term.to_string())),
            };
            if seen[index] {
                return Err(CurrencyError::RepeatedTerm(unit));
            }
            seen[index] = true;
            *slot = digits
                .parse()
                .map_err(|_| CurrencyError::InvalidTerm(term.to_string()))?;
        }

        if !seen.iter().any(|flag| *flag) {
            return Err(CurrencyError::InvalidTerm(input.to_string()));
        }

        Money::from_parts(parts.platinum, parts.gold, parts.silver, parts.copper)
    }
}

#[cfg(test)]
#[path = "currency_tests.rs"]
mod tests;
