/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::node::{Node, NodeError};
use crate::shapes::ShapeId;
use crate::traits::Trait;
use std::any::Any;
use std::sync::LazyLock;

static ID: LazyLock<ShapeId> = LazyLock::new(|| ShapeId::new("smithy.api#documentation"));

/// Attaches free-text documentation to a shape.
///
/// The node representation is a plain string node.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentationTrait {
    value: String,
    node: Node,
}

impl DocumentationTrait {
    /// The shape ID of this trait: `smithy.api#documentation`.
    pub fn id() -> &'static ShapeId {
        &ID
    }

    /// Creates the trait from documentation text.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let node = Node::string(value.clone());
        Self { value, node }
    }

    /// Loads the trait from its node representation, which must be a string
    /// node.
    pub fn from_node(node: Node) -> Result<Self, NodeError> {
        let value = node.expect_string()?.to_string();
        Ok(Self { value, node })
    }

    /// Returns the documentation text.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Trait for DocumentationTrait {
    fn trait_id(&self) -> &ShapeId {
        DocumentationTrait::id()
    }

    fn to_node(&self) -> Node {
        self.node.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeType;

    #[test]
    fn loads_from_a_string_node() {
        let doc = DocumentationTrait::from_node(Node::string("Returns a thing.")).unwrap();
        assert_eq!(doc.value(), "Returns a thing.");
        assert_eq!(doc.to_node(), Node::string("Returns a thing."));
    }

    #[test]
    fn rejects_non_string_nodes() {
        let err = DocumentationTrait::from_node(Node::empty_object()).expect_err("not a string");
        assert_eq!(
            format!("{}", err),
            format!("expected {} node, found {} node", NodeType::String, NodeType::Object)
        );
    }
}
