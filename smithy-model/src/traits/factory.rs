/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::node::{Node, NodeError};
use crate::shapes::ShapeId;
use crate::traits::{
    DeprecatedTrait, DocumentationTrait, SensitiveTrait, Trait, TraitError,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

type BuilderFn = Box<dyn Fn(&ShapeId, Node) -> Result<Box<dyn Trait>, NodeError> + Send + Sync>;

/// Creates trait instances from their node representation.
///
/// A factory is an immutable mapping from trait ID to builder function,
/// assembled once through [`TraitFactory::builder`] and read-only afterwards,
/// so any number of [`create_trait`](TraitFactory::create_trait) calls may
/// run concurrently without coordination.
pub struct TraitFactory {
    builders: HashMap<ShapeId, BuilderFn>,
}

impl TraitFactory {
    /// Returns the process-wide factory over the built-in trait set.
    pub fn standard() -> &'static TraitFactory {
        static STANDARD: LazyLock<TraitFactory> = LazyLock::new(|| {
            TraitFactory::builder()
                .register(DeprecatedTrait::id().clone(), |_, node| {
                    DeprecatedTrait::from_node(node).map(|t| Box::new(t) as _)
                })
                .register(DocumentationTrait::id().clone(), |_, node| {
                    DocumentationTrait::from_node(node).map(|t| Box::new(t) as _)
                })
                .register(SensitiveTrait::id().clone(), |_, node| {
                    SensitiveTrait::from_node(node).map(|t| Box::new(t) as _)
                })
                .build()
        });
        &STANDARD
    }

    /// Returns a builder for assembling a factory with custom trait kinds.
    pub fn builder() -> TraitFactoryBuilder {
        TraitFactoryBuilder {
            builders: HashMap::new(),
        }
    }

    /// Returns true if a builder is registered for the given trait ID.
    pub fn is_registered(&self, id: &ShapeId) -> bool {
        self.builders.contains_key(id)
    }

    /// Creates a trait instance for `id` from its node representation.
    ///
    /// Returns `Ok(None)` when no builder is registered for `id`: unknown
    /// traits are not an error, so models written against a newer trait
    /// vocabulary still load. A registered builder that rejects the node
    /// produces a [`TraitError`] naming the trait, the target shape, and the
    /// source location of the offending node.
    pub fn create_trait(
        &self,
        id: &ShapeId,
        target: &ShapeId,
        value: Node,
    ) -> Result<Option<Box<dyn Trait>>, TraitError> {
        match self.builders.get(id) {
            None => {
                tracing::trace!(trait_id = %id, target = %target, "no builder registered for trait, leaving it unrecognized");
                Ok(None)
            }
            Some(build) => build(target, value)
                .map(Some)
                .map_err(|source| TraitError::new(id.clone(), target.clone(), source)),
        }
    }
}

impl fmt::Debug for TraitFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.builders.keys().collect();
        ids.sort();
        f.debug_struct("TraitFactory").field("registered", &ids).finish()
    }
}

/// Builder for [`TraitFactory`].
///
/// Registration is a startup-time operation: assemble the factory once,
/// then dispatch against the frozen result.
pub struct TraitFactoryBuilder {
    builders: HashMap<ShapeId, BuilderFn>,
}

impl TraitFactoryBuilder {
    /// Registers a builder function for a trait ID.
    ///
    /// The function receives the ID of the shape the trait is attached to
    /// and the trait's node representation.
    ///
    /// # Panics
    ///
    /// Panics if a builder is already registered for `id`. Duplicate
    /// registration is a programming fault in factory assembly, and failing
    /// loudly at startup beats silently replacing a builder.
    pub fn register<F>(mut self, id: ShapeId, build: F) -> Self
    where
        F: Fn(&ShapeId, Node) -> Result<Box<dyn Trait>, NodeError> + Send + Sync + 'static,
    {
        if self.builders.contains_key(&id) {
            panic!("a trait builder is already registered for `{id}`");
        }
        tracing::debug!(trait_id = %id, "registered trait builder");
        self.builders.insert(id, Box::new(build));
        self
    }

    /// Freezes the registrations into a factory.
    pub fn build(self) -> TraitFactory {
        TraitFactory {
            builders: self.builders,
        }
    }
}

impl fmt::Debug for TraitFactoryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.builders.keys().collect();
        ids.sort();
        f.debug_struct("TraitFactoryBuilder").field("registered", &ids).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::DynamicTrait;

    #[test]
    fn standard_factory_registers_the_builtin_traits() {
        let factory = TraitFactory::standard();
        assert!(factory.is_registered(DeprecatedTrait::id()));
        assert!(factory.is_registered(DocumentationTrait::id()));
        assert!(factory.is_registered(SensitiveTrait::id()));
        assert!(!factory.is_registered(&ShapeId::new("ns.qux#unknown")));
    }

    #[test]
    fn unknown_traits_are_not_an_error() {
        let factory = TraitFactory::standard();
        let result = factory
            .create_trait(
                &ShapeId::new("ns.qux#unknown"),
                &ShapeId::new("ns.qux#foo"),
                Node::string("anything at all"),
            )
            .expect("unknown traits load as None");
        assert!(result.is_none());
    }

    #[test]
    fn custom_registrations_dispatch() {
        let custom_id = ShapeId::new("ns.qux#custom");
        let factory = TraitFactory::builder()
            .register(custom_id.clone(), |_, node| {
                Ok(Box::new(DynamicTrait::new(
                    ShapeId::new("ns.qux#custom"),
                    node,
                )) as _)
            })
            .build();
        let loaded = factory
            .create_trait(&custom_id, &ShapeId::new("ns.qux#foo"), Node::boolean(true))
            .expect("builder accepts any node")
            .expect("registered");
        assert_eq!(loaded.trait_id(), &custom_id);
        assert_eq!(loaded.to_node(), Node::boolean(true));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn duplicate_registration_panics() {
        let id = ShapeId::new("ns.qux#custom");
        let _ = TraitFactory::builder()
            .register(id.clone(), |_, node| {
                Ok(Box::new(DynamicTrait::new(ShapeId::new("ns.qux#custom"), node)) as _)
            })
            .register(id, |_, node| {
                Ok(Box::new(DynamicTrait::new(ShapeId::new("ns.qux#custom"), node)) as _)
            });
    }

    #[test]
    fn builder_failures_carry_trait_and_target_ids() {
        let factory = TraitFactory::standard();
        let err = factory
            .create_trait(
                DeprecatedTrait::id(),
                &ShapeId::new("ns.qux#foo"),
                Node::string("abc"),
            )
            .expect_err("a string node is not a valid deprecated trait");
        assert_eq!(err.trait_id(), DeprecatedTrait::id());
        assert_eq!(err.target(), &ShapeId::new("ns.qux#foo"));
    }
}
