/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! The trait registry and the known trait implementations.
//!
//! Traits are typed, validated annotations attached to schema elements. The
//! [`TraitFactory`] maps trait IDs to builder functions that turn a trait's
//! [`Node`](crate::node::Node) representation into a trait instance, or fail
//! with an error pointing at the offending node.

mod deprecated;
mod documentation;
mod dynamic;
mod error;
mod factory;
mod sensitive;
mod trait_map;

pub use deprecated::{DeprecatedTrait, DeprecatedTraitBuilder};
pub use documentation::DocumentationTrait;
pub use dynamic::DynamicTrait;
pub use error::TraitError;
pub use factory::{TraitFactory, TraitFactoryBuilder};
pub use sensitive::SensitiveTrait;
pub use trait_map::TraitMap;

use crate::node::Node;
use crate::shapes::ShapeId;
use std::any::Any;
use std::fmt;

/// A trait instance at runtime.
///
/// Every instance is immutable once built and can reproduce the node it was
/// built from, so traits round-trip through their generic representation.
pub trait Trait: Any + Send + Sync + fmt::Debug {
    /// Returns the shape ID of this trait.
    fn trait_id(&self) -> &ShapeId;

    /// Returns the node representation of this trait.
    ///
    /// Instances loaded from a node reproduce that node; programmatically
    /// built instances produce a canonical form.
    fn to_node(&self) -> Node;

    /// Returns this trait as `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}
