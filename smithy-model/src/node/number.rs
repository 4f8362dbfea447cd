/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// A number type that implements JSON semantics, modeled on serde_json.
///
/// Integers keep their exact representation; comparisons are
/// representation-strict, so `PosInt(1)` and `Float(1.0)` are not equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An unsigned integer.
    PosInt(u64),
    /// A negative integer.
    NegInt(i64),
    /// A floating point value.
    Float(f64),
}

impl Number {
    /// Converts to an `f64`, possibly losing precision for large integers.
    pub fn to_f64_lossy(self) -> f64 {
        match self {
            Number::PosInt(value) => value as f64,
            Number::NegInt(value) => value as f64,
            Number::Float(value) => value,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Number;

    #[test]
    fn lossy_conversion() {
        assert_eq!(Number::PosInt(5).to_f64_lossy(), 5.0);
        assert_eq!(Number::NegInt(-5).to_f64_lossy(), -5.0);
        assert_eq!(Number::Float(0.25).to_f64_lossy(), 0.25);
    }

    #[test]
    fn representation_strict_equality() {
        assert_ne!(Number::PosInt(1), Number::Float(1.0));
        assert_eq!(Number::PosInt(1), Number::PosInt(1));
    }
}
