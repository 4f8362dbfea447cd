/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::node::{Node, NodeError};
use crate::shapes::{ShapeId, ShapeType};
use crate::traits::Trait;
use std::any::Any;
use std::sync::LazyLock;

static ID: LazyLock<ShapeId> = LazyLock::new(|| ShapeId::new("smithy.api#deprecated"));

/// Marks a shape as deprecated, optionally carrying a free-text message and
/// the version or date the deprecation took effect.
///
/// Both fields are optional, and an unset field is distinct from an empty
/// string: a field absent from the source node stays unset rather than
/// defaulting.
#[derive(Debug, Clone, PartialEq)]
pub struct DeprecatedTrait {
    message: Option<String>,
    since: Option<String>,
    node: Node,
}

impl DeprecatedTrait {
    /// The shape ID of this trait: `smithy.api#deprecated`.
    pub fn id() -> &'static ShapeId {
        &ID
    }

    /// Returns a builder for programmatic construction.
    pub fn builder() -> DeprecatedTraitBuilder {
        DeprecatedTraitBuilder::default()
    }

    /// Loads the trait from its node representation.
    ///
    /// The node must be an object (an empty object is fine). The optional
    /// `message` and `since` members must be strings when present; any other
    /// member is ignored so that newer model vocabularies still load. Errors
    /// point at the offending node: the whole value when it is not an
    /// object, the member value when one has the wrong type.
    pub fn from_node(node: Node) -> Result<Self, NodeError> {
        let (message, since) = {
            let members = node.expect_object()?;
            let string_member = |name: &str| -> Result<Option<String>, NodeError> {
                members
                    .get(name)
                    .map(|member| member.expect_string().map(str::to_string))
                    .transpose()
            };
            (string_member("message")?, string_member("since")?)
        };
        Ok(DeprecatedTrait {
            message,
            since,
            node,
        })
    }

    /// Returns the deprecation message, if set.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the version or date the shape was deprecated, if set.
    pub fn since(&self) -> Option<&str> {
        self.since.as_deref()
    }

    /// Synthesizes a human-readable deprecation description for a shape of
    /// the given type.
    ///
    /// ```
    /// use smithy_model::shapes::ShapeType;
    /// use smithy_model::traits::DeprecatedTrait;
    ///
    /// let deprecated = DeprecatedTrait::builder().since("2020-01-01").build();
    /// assert_eq!(
    ///     deprecated.deprecated_description(ShapeType::String),
    ///     "This shape is deprecated since 2020-01-01.",
    /// );
    /// ```
    pub fn deprecated_description(&self, shape_type: ShapeType) -> String {
        let descriptor = match shape_type {
            ShapeType::Operation => "operation",
            _ => "shape",
        };
        let mut description = format!("This {descriptor} is deprecated");
        if let Some(since) = &self.since {
            description.push_str(" since ");
            description.push_str(since);
        }
        match &self.message {
            Some(message) => {
                description.push_str(": ");
                description.push_str(message);
            }
            None => description.push('.'),
        }
        description
    }
}

impl Trait for DeprecatedTrait {
    fn trait_id(&self) -> &ShapeId {
        DeprecatedTrait::id()
    }

    fn to_node(&self) -> Node {
        self.node.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Builder for [`DeprecatedTrait`].
#[derive(Debug, Default)]
pub struct DeprecatedTraitBuilder {
    message: Option<String>,
    since: Option<String>,
}

impl DeprecatedTraitBuilder {
    /// Sets the deprecation message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the version or date the shape was deprecated.
    pub fn since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }

    /// Builds the trait, synthesizing its canonical node representation:
    /// an object holding only the members that were set.
    pub fn build(self) -> DeprecatedTrait {
        let mut node = Node::object_builder();
        if let Some(message) = &self.message {
            node = node.member("message", message.clone());
        }
        if let Some(since) = &self.since {
            node = node.member("since", since.clone());
        }
        DeprecatedTrait {
            message: self.message,
            since: self.since,
            node: node.build(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::SourceLocation;

    #[test]
    fn unset_fields_stay_unset() {
        let deprecated = DeprecatedTrait::from_node(Node::empty_object()).unwrap();
        assert_eq!(deprecated.message(), None);
        assert_eq!(deprecated.since(), None);
    }

    #[test]
    fn unset_is_distinct_from_empty() {
        let deprecated =
            DeprecatedTrait::from_node(Node::object_builder().member("message", "").build())
                .unwrap();
        assert_eq!(deprecated.message(), Some(""));
        assert_eq!(deprecated.since(), None);
    }

    #[test]
    fn unrecognized_members_are_ignored_but_preserved() {
        let node = Node::object_builder()
            .member("message", "Use X shape instead.")
            .member("replacement", "ns.qux#X")
            .build();
        let deprecated = DeprecatedTrait::from_node(node.clone()).unwrap();
        assert_eq!(deprecated.message(), Some("Use X shape instead."));
        assert_eq!(deprecated.to_node(), node);
    }

    #[test]
    fn non_string_member_errors_at_the_member() {
        let location = SourceLocation::new("model.json", 4, 17);
        let node = Node::object_builder()
            .member("since", Node::from(2020i64).with_location(location.clone()))
            .build();
        let err = DeprecatedTrait::from_node(node).expect_err("since must be a string");
        assert_eq!(err.location(), &location);
    }

    #[test]
    fn builder_synthesizes_the_canonical_node() {
        let deprecated = DeprecatedTrait::builder()
            .message("Use X shape instead.")
            .build();
        assert_eq!(
            deprecated.to_node(),
            Node::object_builder()
                .member("message", "Use X shape instead.")
                .build()
        );
        assert_eq!(
            DeprecatedTrait::builder().build().to_node(),
            Node::empty_object()
        );
    }

    #[test]
    fn operation_description() {
        let deprecated = DeprecatedTrait::builder().build();
        assert_eq!(
            deprecated.deprecated_description(ShapeType::Operation),
            "This operation is deprecated."
        );
    }

    #[test]
    fn description_round_trips_through_the_node_form() {
        let built = DeprecatedTrait::builder()
            .since("2020-01-01")
            .message("Use X shape instead.")
            .build();
        let reloaded = DeprecatedTrait::from_node(built.to_node()).unwrap();
        assert_eq!(
            built.deprecated_description(ShapeType::Structure),
            reloaded.deprecated_description(ShapeType::Structure)
        );
    }
}
