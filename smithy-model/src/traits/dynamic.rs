/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::node::Node;
use crate::shapes::ShapeId;
use crate::traits::Trait;
use std::any::Any;

/// A trait carrying an unvalidated node for an unrecognized trait ID.
///
/// The trait factory returns an absent result for IDs it has no builder for;
/// callers that want to keep such traits attached to a shape wrap the raw
/// node in a `DynamicTrait`. The node round-trips untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicTrait {
    id: ShapeId,
    node: Node,
}

impl DynamicTrait {
    /// Creates a trait from a raw node.
    pub fn new(id: ShapeId, node: Node) -> Self {
        Self { id, node }
    }
}

impl Trait for DynamicTrait {
    fn trait_id(&self) -> &ShapeId {
        &self.id
    }

    fn to_node(&self) -> Node {
        self.node.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
