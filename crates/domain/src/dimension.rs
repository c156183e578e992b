//! Test dimensions and fixed-order triples.
//!
//! Every athlete is measured on exactly three tests. `TestTriple` stores one
//! value per test in the order Resistance, Strength, Velocity so that scores,
//! difficulties and derived contributions always stay index-aligned.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::ops::Index;

/// One of the three fitness tests an athlete performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestDimension {
    /// Endurance test
    Resistance,
    /// Strength test
    Strength,
    /// Speed test
    Velocity,
}

impl TestDimension {
    /// All dimensions in storage and reporting order
    pub const ALL: [TestDimension; 3] = [
        TestDimension::Resistance,
        TestDimension::Strength,
        TestDimension::Velocity,
    ];

    /// Position of this dimension inside a triple
    pub fn index(&self) -> usize {
        match self {
            Self::Resistance => 0,
            Self::Strength => 1,
            Self::Velocity => 2,
        }
    }

    /// Human-readable label used in reports and charts
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Resistance => "Resistance",
            Self::Strength => "Strength",
            Self::Velocity => "Velocity",
        }
    }
}

impl Display for TestDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Exactly one value per test dimension, in fixed order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestTriple<T> {
    /// Value for the resistance test
    pub resistance: T,
    /// Value for the strength test
    pub strength: T,
    /// Value for the velocity test
    pub velocity: T,
}

impl<T> TestTriple<T> {
    /// Create a triple from values in Resistance, Strength, Velocity order
    pub const fn new(resistance: T, strength: T, velocity: T) -> Self {
        Self {
            resistance,
            strength,
            velocity,
        }
    }

    /// Build a triple by evaluating `f` for every dimension
    pub fn from_fn(mut f: impl FnMut(TestDimension) -> T) -> Self {
        Self::new(
            f(TestDimension::Resistance),
            f(TestDimension::Strength),
            f(TestDimension::Velocity),
        )
    }

    /// Value for a given dimension
    pub fn get(&self, dimension: TestDimension) -> &T {
        match dimension {
            TestDimension::Resistance => &self.resistance,
            TestDimension::Strength => &self.strength,
            TestDimension::Velocity => &self.velocity,
        }
    }

    /// Iterate over `(dimension, value)` pairs in fixed order
    pub fn iter(&self) -> impl Iterator<Item = (TestDimension, &T)> {
        TestDimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// Apply `f` to every value, keeping alignment
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> TestTriple<U> {
        TestTriple::new(f(self.resistance), f(self.strength), f(self.velocity))
    }

    /// Combine two triples element-wise
    pub fn zip_with<U, V>(self, other: TestTriple<U>, mut f: impl FnMut(T, U) -> V) -> TestTriple<V> {
        TestTriple::new(
            f(self.resistance, other.resistance),
            f(self.strength, other.strength),
            f(self.velocity, other.velocity),
        )
    }
}

impl<T: Copy> TestTriple<T> {
    /// Copy the values out as an array in fixed order
    pub fn to_array(&self) -> [T; 3] {
        [self.resistance, self.strength, self.velocity]
    }
}

impl TestTriple<f64> {
    /// Sum of the three values
    pub fn sum(&self) -> f64 {
        self.resistance + self.strength + self.velocity
    }
}

impl<T> Index<TestDimension> for TestTriple<T> {
    type Output = T;

    fn index(&self, dimension: TestDimension) -> &T {
        self.get(dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_order_matches_index() {
        for (i, d) in TestDimension::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }

    #[test]
    fn test_triple_indexing() {
        let t = TestTriple::new(1, 2, 3);
        assert_eq!(t[TestDimension::Resistance], 1);
        assert_eq!(t[TestDimension::Strength], 2);
        assert_eq!(t[TestDimension::Velocity], 3);
        assert_eq!(t.to_array(), [1, 2, 3]);
    }

    #[test]
    fn test_zip_with_keeps_alignment() {
        let a = TestTriple::new(10.0, 20.0, 30.0);
        let b = TestTriple::new(1.0, 2.0, 3.0);
        let product = a.zip_with(b, |x, y| x * y);
        assert_eq!(product.to_array(), [10.0, 40.0, 90.0]);
        assert_eq!(product.sum(), 140.0);
    }

    #[test]
    fn test_dimension_serialization() {
        let json = serde_json::to_string(&TestDimension::Velocity).unwrap();
        assert_eq!(json, "\"velocity\"");
        assert_eq!(TestDimension::Strength.to_string(), "Strength");
    }
}
