/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::node::{NodeType, SourceLocation};
use std::borrow::Cow;
use std::fmt;

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub(crate) enum NodeErrorKind {
    UnexpectedNodeType { expected: NodeType, found: NodeType },
    UnexpectedCharacter { found: char, expected: &'static str },
    UnexpectedControlCharacter(char),
    UnexpectedEndOfInput,
    InvalidEscape(char),
    InvalidUnicodeEscape,
    InvalidNumber,
    Custom(Cow<'static, str>),
}

/// An error describing a node whose shape or content did not meet an
/// expectation, or text that failed to parse into a node.
///
/// Carries the source location of the offending node or character so the
/// mistake can be found in the original source text.
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct NodeError {
    kind: NodeErrorKind,
    location: SourceLocation,
}

impl NodeError {
    pub(crate) fn new(kind: NodeErrorKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }

    /// Creates an error for a node of the wrong kind, e.g. a string node
    /// where an object node is required.
    pub fn unexpected_node_type(
        expected: NodeType,
        found: NodeType,
        location: SourceLocation,
    ) -> Self {
        Self::new(NodeErrorKind::UnexpectedNodeType { expected, found }, location)
    }

    /// Creates an error with a custom message.
    pub fn custom(message: impl Into<Cow<'static, str>>, location: SourceLocation) -> Self {
        Self::new(NodeErrorKind::Custom(message.into()), location)
    }

    /// Returns the location of the offending node or character.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use NodeErrorKind::*;
        if !self.location.is_unknown() {
            write!(f, "error at {}: ", self.location)?;
        }
        match &self.kind {
            UnexpectedNodeType { expected, found } => {
                write!(f, "expected {expected} node, found {found} node")
            }
            UnexpectedCharacter { found, expected } => {
                write!(f, "unexpected character '{found}', expected {expected}")
            }
            UnexpectedControlCharacter(value) => write!(
                f,
                "unescaped control character in string: {:#06x}",
                *value as u32
            ),
            UnexpectedEndOfInput => write!(f, "unexpected end of input"),
            InvalidEscape(escape) => write!(f, "invalid escape sequence: \\{escape}"),
            InvalidUnicodeEscape => write!(f, "invalid unicode escape sequence"),
            InvalidNumber => write!(f, "invalid number"),
            Custom(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for NodeError {}
