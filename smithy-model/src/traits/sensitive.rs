/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::node::{Node, NodeError};
use crate::shapes::ShapeId;
use crate::traits::Trait;
use std::any::Any;
use std::sync::LazyLock;

static ID: LazyLock<ShapeId> = LazyLock::new(|| ShapeId::new("smithy.api#sensitive"));

/// Marks a shape as carrying sensitive data.
///
/// An annotation trait: its node representation is an object with no
/// meaningful members (typically empty).
#[derive(Debug, Clone, PartialEq)]
pub struct SensitiveTrait {
    node: Node,
}

impl SensitiveTrait {
    /// The shape ID of this trait: `smithy.api#sensitive`.
    pub fn id() -> &'static ShapeId {
        &ID
    }

    /// Creates the trait with an empty object node.
    pub fn new() -> Self {
        Self {
            node: Node::empty_object(),
        }
    }

    /// Loads the trait from its node representation, which must be an
    /// object node. Members are ignored.
    pub fn from_node(node: Node) -> Result<Self, NodeError> {
        node.expect_object()?;
        Ok(Self { node })
    }
}

impl Default for SensitiveTrait {
    fn default() -> Self {
        Self::new()
    }
}

impl Trait for SensitiveTrait {
    fn trait_id(&self) -> &ShapeId {
        SensitiveTrait::id()
    }

    fn to_node(&self) -> Node {
        self.node.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
