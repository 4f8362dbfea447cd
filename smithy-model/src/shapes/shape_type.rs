/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Enumeration of schema element kinds.
///
/// This is the closed set of shape categories a trait can be attached to,
/// covering simple types, aggregate types, the service section, and the
/// special member type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ShapeType {
    // Simple types
    /// Boolean type
    Boolean,
    /// 8-bit signed integer
    Byte,
    /// 16-bit signed integer
    Short,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// 32-bit floating point
    Float,
    /// 64-bit floating point
    Double,
    /// Arbitrary precision integer
    BigInteger,
    /// Arbitrary precision decimal
    BigDecimal,
    /// UTF-8 string
    String,
    /// String-backed enumeration
    Enum,
    /// Integer-backed enumeration
    IntEnum,
    /// Binary data
    Blob,
    /// Timestamp
    Timestamp,
    /// Open document type
    Document,

    // Aggregate types
    /// List type
    List,
    /// Map type
    Map,
    /// Structure type
    Structure,
    /// Union type
    Union,

    // Service section
    /// Service shape
    Service,
    /// Resource shape
    Resource,
    /// Operation shape
    Operation,

    // Member
    /// Member shape
    Member,
}

impl ShapeType {
    /// Returns true if this is a simple type.
    #[inline]
    pub fn is_simple(&self) -> bool {
        matches!(
            self,
            Self::Boolean
                | Self::Byte
                | Self::Short
                | Self::Integer
                | Self::Long
                | Self::Float
                | Self::Double
                | Self::BigInteger
                | Self::BigDecimal
                | Self::String
                | Self::Enum
                | Self::IntEnum
                | Self::Blob
                | Self::Timestamp
                | Self::Document
        )
    }

    /// Returns true if this is an aggregate type.
    #[inline]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::List | Self::Map | Self::Structure | Self::Union)
    }

    /// Returns true if this is a service, resource, or operation type.
    #[inline]
    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service | Self::Resource | Self::Operation)
    }

    /// Returns true if this is a member type.
    #[inline]
    pub fn is_member(&self) -> bool {
        matches!(self, Self::Member)
    }
}
