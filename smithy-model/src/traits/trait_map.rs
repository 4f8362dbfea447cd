/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::shapes::ShapeId;
use crate::traits::Trait;
use std::collections::HashMap;

/// A map of traits keyed by their shape ID.
///
/// Schema elements own their traits through this container.
#[derive(Debug, Default)]
pub struct TraitMap {
    traits: HashMap<ShapeId, Box<dyn Trait>>,
}

impl TraitMap {
    /// Creates a new empty trait map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a trait, replacing any previous trait with the same ID.
    pub fn insert(&mut self, value: Box<dyn Trait>) {
        let id = value.trait_id().clone();
        self.traits.insert(id, value);
    }

    /// Gets a trait by its shape ID.
    pub fn get(&self, id: &ShapeId) -> Option<&dyn Trait> {
        self.traits.get(id).map(|t| t.as_ref())
    }

    /// Gets a trait by its shape ID, downcast to a concrete type.
    ///
    /// Returns `None` when the trait is absent or is not a `T`.
    pub fn get_as<T: Trait>(&self, id: &ShapeId) -> Option<&T> {
        self.get(id).and_then(|t| t.as_any().downcast_ref::<T>())
    }

    /// Returns true if the map contains a trait with the given shape ID.
    pub fn contains(&self, id: &ShapeId) -> bool {
        self.traits.contains_key(id)
    }

    /// Returns an iterator over all traits.
    pub fn iter(&self) -> impl Iterator<Item = (&ShapeId, &dyn Trait)> {
        self.traits.iter().map(|(id, t)| (id, t.as_ref()))
    }

    /// Returns the number of traits in the map.
    pub fn len(&self) -> usize {
        self.traits.len()
    }

    /// Returns true if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }
}
