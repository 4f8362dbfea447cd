/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;
use std::str::FromStr;

/// A namespaced shape identifier.
///
/// Shape IDs uniquely identify shapes in a model and key the trait registry.
/// Format: `namespace#shapeName` or `namespace#shapeName$memberName`.
///
/// The ordering and hash of a shape ID follow its absolute string form, so
/// IDs can be used directly as sorted or hashed map keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId {
    value: String,
}

impl ShapeId {
    /// Creates a shape ID from a known-good string.
    ///
    /// No validation is performed; use the [`FromStr`] impl to validate
    /// externally supplied text.
    ///
    /// ```
    /// use smithy_model::shapes::ShapeId;
    ///
    /// let id = ShapeId::new("smithy.api#deprecated");
    /// assert_eq!(id.namespace(), Some("smithy.api"));
    /// assert_eq!(id.shape_name(), Some("deprecated"));
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the absolute string form of this shape ID.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the namespace portion of the shape ID.
    pub fn namespace(&self) -> Option<&str> {
        self.value.split_once('#').map(|(namespace, _)| namespace)
    }

    /// Returns the shape name portion of the shape ID.
    pub fn shape_name(&self) -> Option<&str> {
        self.value
            .split_once('#')
            .map(|(_, rest)| rest.split_once('$').map(|(name, _)| name).unwrap_or(rest))
    }

    /// Returns the member name if this is a member shape ID.
    pub fn member_name(&self) -> Option<&str> {
        self.value
            .split_once('#')
            .and_then(|(_, rest)| rest.split_once('$').map(|(_, member)| member))
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<String> for ShapeId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for ShapeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Validating parse of externally supplied shape ID text.
///
/// ```
/// use smithy_model::shapes::ShapeId;
///
/// let id: ShapeId = "ns.qux#foo$bar".parse().unwrap();
/// assert_eq!(id.member_name(), Some("bar"));
/// assert!("ns.qux".parse::<ShapeId>().is_err());
/// assert!("#foo".parse::<ShapeId>().is_err());
/// ```
impl FromStr for ShapeId {
    type Err = ShapeIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let error = |message| ShapeIdError {
            value: value.to_string(),
            message,
        };
        let (namespace, rest) = value
            .split_once('#')
            .ok_or_else(|| error("missing a '#' between namespace and shape name"))?;
        if rest.contains('#') {
            return Err(error("contains more than one '#'"));
        }
        if !namespace.split('.').all(is_identifier) {
            return Err(error("namespace must be '.'-separated identifiers"));
        }
        let (name, member) = match rest.split_once('$') {
            Some((name, member)) => (name, Some(member)),
            None => (rest, None),
        };
        if !is_identifier(name) {
            return Err(error("shape name must be an identifier"));
        }
        if let Some(member) = member {
            if !is_identifier(member) {
                return Err(error("member name must be an identifier"));
            }
        }
        Ok(ShapeId::new(value))
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// The error returned when shape ID text fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeIdError {
    value: String,
    message: &'static str,
}

impl fmt::Display for ShapeIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid shape ID `{}`: {}", self.value, self.message)
    }
}

impl std::error::Error for ShapeIdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let id = ShapeId::new("smithy.api#deprecated");
        assert_eq!(id.as_str(), "smithy.api#deprecated");
        assert_eq!(id.namespace(), Some("smithy.api"));
        assert_eq!(id.shape_name(), Some("deprecated"));
        assert_eq!(id.member_name(), None);

        let member = ShapeId::new("com.example#MyStruct$member");
        assert_eq!(member.namespace(), Some("com.example"));
        assert_eq!(member.shape_name(), Some("MyStruct"));
        assert_eq!(member.member_name(), Some("member"));

        assert_eq!(ShapeId::new("NoNamespace").namespace(), None);
        assert_eq!(ShapeId::new("NoNamespace").shape_name(), None);
    }

    #[test]
    fn display_is_the_absolute_form() {
        assert_eq!(
            format!("{}", ShapeId::new("ns.qux#foo")),
            "ns.qux#foo"
        );
    }

    #[test]
    fn ordering_follows_the_absolute_form() {
        let mut ids = vec![
            ShapeId::new("smithy.api#sensitive"),
            ShapeId::new("ns.qux#foo"),
            ShapeId::new("smithy.api#deprecated"),
        ];
        ids.sort();
        assert_eq!(
            ids.iter().map(ShapeId::as_str).collect::<Vec<_>>(),
            vec!["ns.qux#foo", "smithy.api#deprecated", "smithy.api#sensitive"]
        );
    }

    #[test]
    fn parse_accepts_valid_ids() {
        for valid in ["ns.qux#foo", "smithy.api#deprecated", "a._b.c#D$e_1"] {
            valid.parse::<ShapeId>().expect(valid);
        }
    }

    #[test]
    fn parse_rejects_invalid_ids() {
        for invalid in [
            "",
            "foo",
            "#foo",
            "ns.qux#",
            "ns.qux#foo#bar",
            "ns..qux#foo",
            "1ns#foo",
            "ns.qux#1foo",
            "ns.qux#foo$",
            "ns qux#foo",
        ] {
            invalid.parse::<ShapeId>().expect_err(invalid);
        }
    }

    #[test]
    fn parse_error_names_the_offending_value() {
        let err = "ns.qux".parse::<ShapeId>().expect_err("no '#'");
        assert_eq!(
            format!("{}", err),
            "invalid shape ID `ns.qux`: missing a '#' between namespace and shape name"
        );
    }
}
