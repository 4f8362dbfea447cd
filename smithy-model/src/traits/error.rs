/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::node::{NodeError, SourceLocation};
use crate::shapes::ShapeId;
use std::fmt;

/// The error returned when a trait's node representation does not match the
/// shape its builder requires.
///
/// Carries the trait ID, the ID of the shape the trait is attached to, and
/// (through the underlying [`NodeError`]) the source location of the
/// offending node.
#[derive(Debug)]
pub struct TraitError {
    trait_id: ShapeId,
    target: ShapeId,
    source: NodeError,
}

impl TraitError {
    pub(crate) fn new(trait_id: ShapeId, target: ShapeId, source: NodeError) -> Self {
        Self {
            trait_id,
            target,
            source,
        }
    }

    /// Returns the ID of the trait that failed to load.
    pub fn trait_id(&self) -> &ShapeId {
        &self.trait_id
    }

    /// Returns the ID of the shape the trait is attached to.
    pub fn target(&self) -> &ShapeId {
        &self.target
    }

    /// Returns the source location of the offending node.
    pub fn source_location(&self) -> &SourceLocation {
        self.source.location()
    }
}

impl fmt::Display for TraitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unable to load trait `{}` on `{}`: {}",
            self.trait_id, self.target, self.source
        )
    }
}

impl std::error::Error for TraitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
