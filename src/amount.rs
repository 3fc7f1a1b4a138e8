// 💰 Amount Accumulator - Indian numbering units
// Builds a running total from chained crore / lacs / thousand calls

use anyhow::{anyhow, Result};
use std::fmt;
use std::str::FromStr;
use tracing::info;

// ============================================================================
// UNITS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// 1,00,00,000
    Crore,
    /// 1,00,000
    Lacs,
    /// 1,000
    Thousand,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Crore, Unit::Lacs, Unit::Thousand];

    /// Fixed scale applied to every magnitude given in this unit
    pub fn multiplier(&self) -> f64 {
        match self {
            Unit::Crore => 10_000_000.0,
            Unit::Lacs => 100_000.0,
            Unit::Thousand => 1_000.0,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Unit::Crore => "crore",
            Unit::Lacs => "lacs",
            Unit::Thousand => "thousand",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "crore" | "crores" => Ok(Unit::Crore),
            "lacs" | "lac" | "lakh" | "lakhs" => Ok(Unit::Lacs),
            "thousand" | "thousands" => Ok(Unit::Thousand),
            other => Err(anyhow!(
                "Unknown unit '{}' (expected one of: crore, lacs, thousand)",
                other
            )),
        }
    }
}

// ============================================================================
// ACCUMULATOR
// ============================================================================

/// AmountAccumulator - running total built from unit calls
///
/// Every call adds `v * unit.multiplier()`. Calls may come in any order and
/// the same unit may repeat; each call counts on its own. There is no reset:
/// start a new accumulator for an independent computation.
///
/// Inputs are not validated. Negative and fractional magnitudes are scaled
/// as given, and a NaN magnitude turns the total into NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AmountAccumulator {
    amount: f64,
}

impl AmountAccumulator {
    /// Create an accumulator starting at zero
    pub fn new() -> Self {
        AmountAccumulator { amount: 0.0 }
    }

    /// Builder: add `v` of the given unit
    pub fn add(mut self, unit: Unit, v: f64) -> Self {
        self.amount += v * unit.multiplier();
        self
    }

    /// Builder: add `v` crore
    pub fn crore(self, v: f64) -> Self {
        self.add(Unit::Crore, v)
    }

    /// Builder: add `v` lacs
    pub fn lacs(self, v: f64) -> Self {
        self.add(Unit::Lacs, v)
    }

    /// Builder: add `v` thousand
    pub fn thousand(self, v: f64) -> Self {
        self.add(Unit::Thousand, v)
    }

    /// Current total. Emits the accumulator state as a diagnostic event first.
    pub fn value(&self) -> f64 {
        info!(state = ?self, "amount accumulator state");
        self.amount
    }
}

/// Fold a sequence of unit calls into a total
pub fn compute_amount<I>(calls: I) -> f64
where
    I: IntoIterator<Item = (Unit, f64)>,
{
    calls
        .into_iter()
        .fold(AmountAccumulator::new(), |acc, (unit, v)| acc.add(unit, v))
        .value()
}

// ============================================================================
// TESTS
// ============================================================================
