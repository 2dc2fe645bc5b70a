//! This module defines the unit types used for emission quantities and their conversions.
//!
//! All emission quantities are kilograms of CO₂-equivalent. The types differ only in the period
//! they refer to, which keeps the daily/monthly/annual conversions in one place.
use serde::{Deserialize, Serialize};

/// The number of days in a year, used to turn annual figures into daily ones
pub const DAYS_PER_YEAR: f64 = 365.0;

/// The number of days in a month, used to turn daily figures into monthly ones
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Represents a dimensionless quantity (a multiplier or share).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, derive_more::Add, derive_more::Sub)]
pub struct Dimensionless(pub f64);

impl std::ops::Mul for Dimensionless {
    type Output = Dimensionless;

    fn mul(self, rhs: Dimensionless) -> Self::Output {
        Dimensionless(self.0 * rhs.0)
    }
}

impl From<f64> for Dimensionless {
    fn from(val: f64) -> Self {
        Self(val)
    }
}

impl From<Dimensionless> for f64 {
    fn from(val: Dimensionless) -> Self {
        val.0
    }
}

/// Round a value to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

macro_rules! unit_struct {
    ($name:ident) => {
        /// Represents a type of quantity.
        #[derive(
            Debug,
            Default,
            Clone,
            Copy,
            PartialEq,
            PartialOrd,
            Serialize,
            Deserialize,
            derive_more::Add,
            derive_more::Sub,
            derive_more::AddAssign,
            derive_more::SubAssign,
            derive_more::Display,
        )]
        pub struct $name(pub f64);

        impl $name {
            /// Returns the value of the unit type as a f64.
            pub fn value(self) -> f64 {
                self.0
            }

            /// The same quantity rounded to two decimal places
            pub fn round2(self) -> Self {
                Self(round2(self.0))
            }
        }

        impl std::ops::Mul<Dimensionless> for $name {
            type Output = $name;
            fn mul(self, rhs: Dimensionless) -> $name {
                $name(self.0 * rhs.0)
            }
        }

        impl std::ops::Mul<$name> for Dimensionless {
            type Output = $name;
            fn mul(self, rhs: $name) -> $name {
                $name(self.0 * rhs.0)
            }
        }

        impl std::ops::Div<Dimensionless> for $name {
            type Output = $name;
            fn div(self, rhs: Dimensionless) -> $name {
                $name(self.0 / rhs.0)
            }
        }

        impl std::iter::Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold($name(0.0), |acc, x| acc + x)
            }
        }

        impl float_cmp::ApproxEq for $name {
            type Margin = float_cmp::F64Margin;

            fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
                self.0.approx_eq(other.0, margin)
            }
        }
    };
}

// Emissions over an arbitrary period (e.g. a month or a single bill)
unit_struct!(KgCO2e);

// Emission rates
unit_struct!(KgCO2ePerDay);
unit_struct!(KgCO2ePerYear);

impl KgCO2ePerYear {
    /// Convert an annual figure into a daily one
    pub fn per_day(self) -> KgCO2ePerDay {
        KgCO2ePerDay(self.0 / DAYS_PER_YEAR)
    }
}

impl KgCO2ePerDay {
    /// The emissions accumulated over a month at this daily rate.
    ///
    /// Monthly figures are always derived from the daily figure through this method.
    pub fn per_month(self) -> KgCO2e {
        KgCO2e(self.0 * DAYS_PER_MONTH)
    }
}
