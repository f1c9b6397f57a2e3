//! Progressive income-tax calculator
//!
//! Implements the simplified annual IRPF schedule: tax base = annual income
//! minus deductions minus a fixed per-dependent allowance, then a five-bracket
//! progressive table. Each bracket carries a deduction constant chosen so the
//! piecewise function stays continuous across boundaries.
//!
//! The calculator is a pure function over its three inputs and the immutable
//! table below. It performs no validation and cannot fail: negative inputs
//! flow through the arithmetic, and a non-positive base simply yields zero
//! tax.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Annual allowance subtracted from the base per dependent (2275.08 * 12).
pub const DEPENDENT_ANNUAL_ALLOWANCE: Decimal = dec!(27300.96);

/// One row of the progressive schedule.
///
/// Brackets are ordered ascending; membership is "base <= upper", scanned in
/// order, so a base exactly on a boundary belongs to the lower bracket. The
/// top bracket has no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    pub upper: Option<Decimal>,
    /// Marginal rate as a fraction (0.075 = 7.5%)
    pub rate: Decimal,
    /// Constant subtracted from `base * rate` to keep the schedule continuous
    pub deduction: Decimal,
}

/// The simplified annual schedule (2025 table).
const TABLE: [TaxBracket; 5] = [
    TaxBracket {
        upper: Some(dec!(22847.76)),
        rate: Decimal::ZERO,
        deduction: Decimal::ZERO,
    },
    TaxBracket {
        upper: Some(dec!(33919.80)),
        rate: dec!(0.075),
        deduction: dec!(1713.58),
    },
    TaxBracket {
        upper: Some(dec!(45012.60)),
        rate: dec!(0.15),
        deduction: dec!(4257.57),
    },
    TaxBracket {
        upper: Some(dec!(55976.16)),
        rate: dec!(0.225),
        deduction: dec!(7633.51),
    },
    TaxBracket {
        upper: None,
        rate: dec!(0.275),
        deduction: dec!(10432.32),
    },
];

/// Result of assessing one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    /// Taxable base, rounded to cents (may be negative)
    pub tax_base: Decimal,
    /// Marginal rate as a percent number (e.g. 7.5)
    pub rate_percent: Decimal,
    /// Tax owed, rounded to cents, never negative
    pub tax_due: Decimal,
}

/// Assess the annual tax owed for the given income, deductions and number of
/// dependents.
pub fn calculate(annual_income: Decimal, deductions: Decimal, dependents: i32) -> Assessment {
    let base = annual_income - deductions - Decimal::from(dependents) * DEPENDENT_ANNUAL_ALLOWANCE;

    let bracket = if base <= Decimal::ZERO {
        &TABLE[0]
    } else {
        bracket_for(base)
    };

    // The deduction constant can exceed base * rate just above a bracket's
    // lower edge; the schedule clamps instead of going negative.
    let due = (base * bracket.rate - bracket.deduction).max(Decimal::ZERO);

    Assessment {
        tax_base: round_cents(base),
        rate_percent: bracket.rate * dec!(100),
        tax_due: round_cents(due),
    }
}

fn bracket_for(base: Decimal) -> &'static TaxBracket {
    TABLE
        .iter()
        .find(|bracket| match bracket.upper {
            Some(upper) => base <= upper,
            None => true,
        })
        .expect("last bracket is unbounded")
}

/// Half-up rounding to two decimal places, away from zero at the midpoint.
fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
