/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Runtime model types for Smithy-style schemas.
//!
//! This crate provides the pieces needed to load trait annotations from a
//! parsed model: a generic [`Node`] tree tagged with source locations, shape
//! identifiers and types, and a [`TraitFactory`] that turns a trait's node
//! representation into a strongly-typed, validated trait instance.
//!
//! ```
//! use smithy_model::node::Node;
//! use smithy_model::shapes::ShapeId;
//! use smithy_model::traits::{DeprecatedTrait, TraitFactory};
//!
//! let factory = TraitFactory::standard();
//! let loaded = factory
//!     .create_trait(
//!         DeprecatedTrait::id(),
//!         &ShapeId::new("ns.qux#foo"),
//!         Node::object_builder().member("since", "2020-01-01").build(),
//!     )
//!     .expect("node shape is valid")
//!     .expect("the deprecated trait is registered");
//! let deprecated = loaded
//!     .as_any()
//!     .downcast_ref::<DeprecatedTrait>()
//!     .expect("loaded by the deprecated builder");
//! assert_eq!(deprecated.since(), Some("2020-01-01"));
//! ```
//!
//! Unknown trait IDs are not an error: [`TraitFactory::create_trait`] returns
//! `Ok(None)` for them so that models written against a newer trait vocabulary
//! still load.

#![allow(clippy::derive_partial_eq_without_eq)]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod node;
pub mod shapes;
pub mod traits;

pub use node::{Node, NodeError, NodeType, Number, SourceLocation};
pub use shapes::{ShapeId, ShapeType};
pub use traits::{Trait, TraitError, TraitFactory};
