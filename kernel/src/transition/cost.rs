//! Action costs and the tunable cost table.
//!
//! Costs are fixed-point: one unit is 1000 millis. Sums are exact and
//! totals serialize as integers.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::Serialize;

/// Millis per whole cost unit.
pub const MILLIS_PER_UNIT: u64 = 1000;

/// Invalid cost constant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CostError {
    /// NaN or infinite.
    #[error("cost {name} is not finite: {value}")]
    NotFinite { name: &'static str, value: f64 },
    /// Below zero.
    #[error("cost {name} is negative: {value}")]
    Negative { name: &'static str, value: f64 },
    /// Finer than a thousandth of a unit, or too large to represent.
    #[error("cost {name} is not representable in thousandths: {value}")]
    NotRepresentable { name: &'static str, value: f64 },
    /// Zero-cost actions are not allowed in a cost table.
    #[error("cost {name} must be greater than zero")]
    Zero { name: &'static str },
}

/// A non-negative action or path cost in thousandths of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Cost(u64);

impl Cost {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Whole units.
    #[must_use]
    pub const fn units(units: u64) -> Self {
        Self(units.saturating_mul(MILLIS_PER_UNIT))
    }

    /// Convert a fractional unit value, e.g. `0.25`.
    ///
    /// `name` labels the value in errors.
    ///
    /// # Errors
    ///
    /// Returns a [`CostError`] if `value` is not finite, negative, or not a
    /// whole number of thousandths.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn try_from_units(name: &'static str, value: f64) -> Result<Self, CostError> {
        if !value.is_finite() {
            return Err(CostError::NotFinite { name, value });
        }
        if value < 0.0 {
            return Err(CostError::Negative { name, value });
        }
        let scaled = value * MILLIS_PER_UNIT as f64;
        let rounded = scaled.round();
        if (scaled - rounded).abs() > 1e-6 || rounded >= u64::MAX as f64 {
            return Err(CostError::NotRepresentable { name, value });
        }
        Ok(Self(rounded as u64))
    }

    #[must_use]
    pub const fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Add for Cost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Cost> for Cost {
    fn sum<I: Iterator<Item = &'a Cost>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Prints the shortest exact decimal: `10`, `0.25`, `1.5`.
impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / MILLIS_PER_UNIT;
        let frac = self.0 % MILLIS_PER_UNIT;
        if frac == 0 {
            return write!(f, "{whole}");
        }
        let digits = format!("{frac:03}");
        write!(f, "{whole}.{}", digits.trim_end_matches('0'))
    }
}

/// Per-action cost constants.
///
/// Earlier revisions of the puzzle disagreed on these numbers, so they are
/// configuration rather than literals. [`CostTableV1::default`] is the
/// canonical set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CostTableV1 {
    /// Walking through an open hallway.
    pub hallway: Cost,
    /// Forcing a closed door without the key.
    pub forced_door: Cost,
    /// Opening a closed door with the key (consumes the key).
    pub keyed_door: Cost,
    /// Picking up the room's object.
    pub pickup: Cost,
    /// Dropping the held object into an empty room.
    pub drop: Cost,
}

impl CostTableV1 {
    /// Hallway 1, forced door 10, keyed door 1, pickup and drop 1.
    #[must_use]
    pub const fn unit_handling() -> Self {
        Self {
            hallway: Cost::units(1),
            forced_door: Cost::units(10),
            keyed_door: Cost::units(1),
            pickup: Cost::units(1),
            drop: Cost::units(1),
        }
    }

    /// Hallway 4, forced door 40, keyed door 1, pickup and drop 0.25.
    #[must_use]
    pub const fn slow_corridors() -> Self {
        Self {
            hallway: Cost::units(4),
            forced_door: Cost::units(40),
            keyed_door: Cost::units(1),
            pickup: Cost::from_millis(250),
            drop: Cost::from_millis(250),
        }
    }

    /// Named entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, Cost); 5] {
        [
            ("hallway", self.hallway),
            ("forced_door", self.forced_door),
            ("keyed_door", self.keyed_door),
            ("pickup", self.pickup),
            ("drop", self.drop),
        ]
    }

    /// Check that every action has a positive cost.
    ///
    /// # Errors
    ///
    /// Returns [`CostError::Zero`] naming the first zero entry.
    pub fn validate(&self) -> Result<(), CostError> {
        match self.entries().into_iter().find(|(_, c)| c.is_zero()) {
            Some((name, _)) => Err(CostError::Zero { name }),
            None => Ok(()),
        }
    }
}

/// Hallway 1, forced door 10, keyed door 1, pickup and drop 0.25.
impl Default for CostTableV1 {
    fn default() -> Self {
        Self {
            hallway: Cost::units(1),
            forced_door: Cost::units(10),
            keyed_door: Cost::units(1),
            pickup: Cost::from_millis(250),
            drop: Cost::from_millis(250),
        }
    }
}
