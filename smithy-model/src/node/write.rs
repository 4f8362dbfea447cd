/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Serialization of nodes back into JSON text.

use crate::node::{Node, NodeValue, Number};
use std::borrow::Cow;

impl Node {
    /// Serializes this node as compact JSON.
    ///
    /// Object members are written in sorted key order so output is
    /// deterministic. NaN and infinite floats have no JSON representation
    /// and are written as `null`, matching serde_json.
    pub fn to_json(&self) -> String {
        let mut json = String::new();
        write_value(self, &mut json);
        json
    }
}

fn write_value(node: &Node, json: &mut String) {
    match node.value() {
        NodeValue::Object(members) => {
            json.push('{');
            let mut sorted: Vec<_> = members.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(b.0));
            for (index, (key, value)) in sorted.into_iter().enumerate() {
                if index > 0 {
                    json.push(',');
                }
                append_string(json, key);
                json.push(':');
                write_value(value, json);
            }
            json.push('}');
        }
        NodeValue::Array(values) => {
            json.push('[');
            for (index, value) in values.iter().enumerate() {
                if index > 0 {
                    json.push(',');
                }
                write_value(value, json);
            }
            json.push(']');
        }
        NodeValue::Number(value) => append_number(json, *value),
        NodeValue::String(value) => append_string(json, value),
        NodeValue::Bool(value) => json.push_str(match value {
            true => "true",
            _ => "false",
        }),
        NodeValue::Null => json.push_str("null"),
    }
}

fn append_string(json: &mut String, value: &str) {
    json.push('"');
    json.push_str(&escape_string(value));
    json.push('"');
}

fn append_number(json: &mut String, value: Number) {
    match value {
        Number::PosInt(value) => {
            // itoa::Buffer is a fixed-size stack allocation, so this is cheap
            json.push_str(itoa::Buffer::new().format(value));
        }
        Number::NegInt(value) => {
            json.push_str(itoa::Buffer::new().format(value));
        }
        Number::Float(value) => {
            if value.is_nan() || value.is_infinite() {
                json.push_str("null");
            } else {
                // ryu::Buffer is a fixed-size stack allocation, so this is cheap
                json.push_str(ryu::Buffer::new().format_finite(value));
            }
        }
    }
}

/// Escapes a string for embedding in a JSON string value.
fn escape_string(value: &str) -> Cow<'_, str> {
    let bytes = value.as_bytes();
    for (index, byte) in bytes.iter().enumerate() {
        match byte {
            0..=0x1F | b'"' | b'\\' => {
                return Cow::Owned(escape_string_inner(&bytes[0..index], &bytes[index..]))
            }
            _ => {}
        }
    }
    Cow::Borrowed(value)
}

fn escape_string_inner(start: &[u8], rest: &[u8]) -> String {
    let mut escaped = start.to_vec();
    for byte in rest {
        match byte {
            b'"' => escaped.extend("\\\"".bytes()),
            b'\\' => escaped.extend("\\\\".bytes()),
            0x08 => escaped.extend("\\b".bytes()),
            0x0C => escaped.extend("\\f".bytes()),
            b'\n' => escaped.extend("\\n".bytes()),
            b'\r' => escaped.extend("\\r".bytes()),
            b'\t' => escaped.extend("\\t".bytes()),
            0..=0x1F => escaped.extend(format!("\\u{:04x}", byte).bytes()),
            _ => escaped.push(*byte),
        }
    }
    // The input was valid UTF-8 and escaping only replaces ASCII bytes
    debug_assert!(String::from_utf8(escaped.clone()).is_ok());
    unsafe { String::from_utf8_unchecked(escaped) }
}
