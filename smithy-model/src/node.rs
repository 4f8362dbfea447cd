/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! The generic structured-data values that model text parses into.
//!
//! A [`Node`] is an immutable JSON-like value (object, array, string, number,
//! boolean, or null) tagged with the [`SourceLocation`] it was parsed from.
//! Trait builders consume nodes through the checked `expect_*` accessors,
//! which produce [`NodeError`]s pointing at the offending node so that a
//! model author can find the mistake in the original source text.
//!
//! Node equality compares values only. Two nodes with the same content are
//! equal even when one was parsed from a file and the other was built in
//! memory, which is what makes `to_node()` round-trips comparable.

mod error;
mod number;
mod parse;
mod source_location;
mod write;

pub use error::NodeError;
pub use number::Number;
pub use source_location::SourceLocation;

use std::collections::HashMap;

/// A structured-data value with an attached source location.
#[derive(Debug, Clone)]
pub struct Node {
    value: NodeValue,
    location: SourceLocation,
}

/// The value inside a [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    /// An object of named members.
    Object(HashMap<String, Node>),
    /// An ordered list of values.
    Array(Vec<Node>),
    /// A number with JSON semantics.
    Number(Number),
    /// A UTF-8 string.
    String(String),
    /// A boolean.
    Bool(bool),
    /// A null value.
    Null,
}

/// The kind tag of a [`Node`], used in diagnostics and type checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// An object node.
    Object,
    /// An array node.
    Array,
    /// A string node.
    String,
    /// A number node.
    Number,
    /// A boolean node.
    Boolean,
    /// A null node.
    Null,
}

impl NodeType {
    /// Returns the lowercase name of this node type, e.g. `"object"`.
    pub fn name(&self) -> &'static str {
        match self {
            NodeType::Object => "object",
            NodeType::Array => "array",
            NodeType::String => "string",
            NodeType::Number => "number",
            NodeType::Boolean => "boolean",
            NodeType::Null => "null",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Node {
    /// Creates a null node with an unknown source location.
    pub fn null() -> Self {
        NodeValue::Null.into()
    }

    /// Creates a string node with an unknown source location.
    pub fn string(value: impl Into<String>) -> Self {
        NodeValue::String(value.into()).into()
    }

    /// Creates a boolean node with an unknown source location.
    pub fn boolean(value: bool) -> Self {
        NodeValue::Bool(value).into()
    }

    /// Creates a number node with an unknown source location.
    pub fn number(value: Number) -> Self {
        NodeValue::Number(value).into()
    }

    /// Creates an array node with an unknown source location.
    pub fn array(values: Vec<Node>) -> Self {
        NodeValue::Array(values).into()
    }

    /// Creates an object node with an unknown source location.
    pub fn object(members: HashMap<String, Node>) -> Self {
        NodeValue::Object(members).into()
    }

    /// Creates an empty object node with an unknown source location.
    pub fn empty_object() -> Self {
        Self::object(HashMap::new())
    }

    /// Returns a builder for constructing object nodes member by member.
    pub fn object_builder() -> ObjectNodeBuilder {
        ObjectNodeBuilder::default()
    }

    /// Returns this node with its source location replaced.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    /// Returns the kind tag of this node.
    pub fn node_type(&self) -> NodeType {
        match &self.value {
            NodeValue::Object(_) => NodeType::Object,
            NodeValue::Array(_) => NodeType::Array,
            NodeValue::Number(_) => NodeType::Number,
            NodeValue::String(_) => NodeType::String,
            NodeValue::Bool(_) => NodeType::Boolean,
            NodeValue::Null => NodeType::Null,
        }
    }

    /// Returns where this node was parsed from.
    pub fn source_location(&self) -> &SourceLocation {
        &self.location
    }

    /// Returns the value inside this node.
    pub fn value(&self) -> &NodeValue {
        &self.value
    }

    /// Returns the members of this node if it is an object.
    pub fn as_object(&self) -> Option<&HashMap<String, Node>> {
        match &self.value {
            NodeValue::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Returns the elements of this node if it is an array.
    pub fn as_array(&self) -> Option<&[Node]> {
        match &self.value {
            NodeValue::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the string value of this node if it is a string.
    pub fn as_string(&self) -> Option<&str> {
        match &self.value {
            NodeValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the numeric value of this node if it is a number.
    pub fn as_number(&self) -> Option<Number> {
        match &self.value {
            NodeValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean value of this node if it is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match &self.value {
            NodeValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this is a null node.
    pub fn is_null(&self) -> bool {
        matches!(&self.value, NodeValue::Null)
    }

    /// Looks up a member by name. Returns `None` for missing members and for
    /// non-object nodes.
    pub fn member(&self, name: &str) -> Option<&Node> {
        self.as_object().and_then(|members| members.get(name))
    }

    /// Returns the members of this node, or an error located at this node if
    /// it is not an object.
    pub fn expect_object(&self) -> Result<&HashMap<String, Node>, NodeError> {
        self.as_object().ok_or_else(|| self.type_mismatch(NodeType::Object))
    }

    /// Returns the elements of this node, or an error located at this node if
    /// it is not an array.
    pub fn expect_array(&self) -> Result<&[Node], NodeError> {
        self.as_array().ok_or_else(|| self.type_mismatch(NodeType::Array))
    }

    /// Returns the string value of this node, or an error located at this
    /// node if it is not a string.
    pub fn expect_string(&self) -> Result<&str, NodeError> {
        self.as_string().ok_or_else(|| self.type_mismatch(NodeType::String))
    }

    /// Returns the numeric value of this node, or an error located at this
    /// node if it is not a number.
    pub fn expect_number(&self) -> Result<Number, NodeError> {
        self.as_number().ok_or_else(|| self.type_mismatch(NodeType::Number))
    }

    /// Returns the boolean value of this node, or an error located at this
    /// node if it is not a boolean.
    pub fn expect_bool(&self) -> Result<bool, NodeError> {
        self.as_bool().ok_or_else(|| self.type_mismatch(NodeType::Boolean))
    }

    fn type_mismatch(&self, expected: NodeType) -> NodeError {
        NodeError::unexpected_node_type(expected, self.node_type(), self.location.clone())
    }
}

/// Equality ignores source locations: a parsed node and an equivalent
/// programmatically constructed node compare equal.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl From<NodeValue> for Node {
    fn from(value: NodeValue) -> Self {
        Node {
            value,
            location: SourceLocation::unknown(),
        }
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::boolean(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::string(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::string(value)
    }
}

impl From<Number> for Node {
    fn from(value: Number) -> Self {
        Node::number(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(values: Vec<Node>) -> Self {
        Node::array(values)
    }
}

impl From<HashMap<String, Node>> for Node {
    fn from(members: HashMap<String, Node>) -> Self {
        Node::object(members)
    }
}

impl From<u64> for Node {
    fn from(value: u64) -> Self {
        Node::number(Number::PosInt(value))
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::number(Number::NegInt(value))
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::number(Number::NegInt(value as i64))
    }
}

/// Builder for object nodes.
///
/// ```
/// use smithy_model::node::Node;
///
/// let node = Node::object_builder()
///     .member("message", "Use X shape instead.")
///     .member("since", "2020-01-01")
///     .build();
/// assert_eq!(node.member("since").and_then(Node::as_string), Some("2020-01-01"));
/// ```
#[derive(Debug, Default)]
pub struct ObjectNodeBuilder {
    members: HashMap<String, Node>,
}

impl ObjectNodeBuilder {
    /// Adds a member to the object. A member added twice keeps the last value.
    pub fn member(mut self, name: impl Into<String>, value: impl Into<Node>) -> Self {
        self.members.insert(name.into(), value.into());
        self
    }

    /// Builds the object node.
    pub fn build(self) -> Node {
        Node::object(self.members)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn equality_ignores_source_location() {
        let located = Node::string("abc").with_location(SourceLocation::new("model.json", 3, 7));
        assert_eq!(located, Node::string("abc"));
        assert_ne!(located, Node::string("abd"));
    }

    #[test]
    fn node_types() {
        assert_eq!(Node::null().node_type(), NodeType::Null);
        assert_eq!(Node::string("x").node_type(), NodeType::String);
        assert_eq!(Node::boolean(true).node_type(), NodeType::Boolean);
        assert_eq!(Node::from(5u64).node_type(), NodeType::Number);
        assert_eq!(Node::array(vec![]).node_type(), NodeType::Array);
        assert_eq!(Node::empty_object().node_type(), NodeType::Object);
    }

    #[test]
    fn member_lookup() {
        let node = Node::object_builder()
            .member("message", "hello")
            .member("count", 3u64)
            .build();
        assert_eq!(node.member("message").and_then(Node::as_string), Some("hello"));
        assert_eq!(
            node.member("count").and_then(Node::as_number),
            Some(Number::PosInt(3))
        );
        assert!(node.member("missing").is_none());
        assert!(Node::string("not an object").member("message").is_none());
    }

    #[test]
    fn expect_accessors_carry_the_node_location() {
        let location = SourceLocation::new("model.json", 12, 5);
        let node = Node::string("abc").with_location(location.clone());
        let err = node.expect_object().expect_err("string is not an object");
        assert_eq!(err.location(), &location);
        assert_eq!(
            format!("{}", err),
            "error at model.json [12, 5]: expected object node, found string node"
        );
    }

    #[test]
    fn expect_accessors_pass_through_matching_types() {
        assert_eq!(Node::string("abc").expect_string().unwrap(), "abc");
        assert!(Node::boolean(true).expect_bool().unwrap());
        assert_eq!(
            Node::from(-2i64).expect_number().unwrap(),
            Number::NegInt(-2)
        );
        assert!(Node::empty_object().expect_object().unwrap().is_empty());
        assert!(Node::array(vec![]).expect_array().unwrap().is_empty());
    }
}
