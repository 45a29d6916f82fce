//! Query-language literal rendering.
//!
//! The target query language writes object literals with bare keys, unlike
//! data-interchange JSON: `{name:"atl-edge-01",port_count:48}`. String
//! values keep their quotes and escapes. Output is compact.

use crate::{MutationError, MutationResult};
use std::fmt::Write;
use trellis_core::Value;

/// Render a value as a query-language literal.
///
/// Fails with [`MutationError::Serialization`] when a value has no literal
/// form (non-finite floats).
pub fn render_literal(value: &Value) -> MutationResult<String> {
    let mut out = String::new();
    write_value(&mut out, value)?;
    Ok(out)
}

fn write_value(out: &mut String, value: &Value) -> MutationResult<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => {
            let _ = write!(out, "{}", b);
        }
        Value::Int(i) => {
            let _ = write!(out, "{}", i);
        }
        Value::Float(x) => {
            if !x.is_finite() {
                return Err(MutationError::serialization(format!(
                    "non-finite float {}",
                    x
                )));
            }
            let _ = write!(out, "{}", x);
        }
        Value::String(s) => write_string(out, s),
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item)?;
            }
            out.push(']');
        }
        Value::Object(pairs) => {
            out.push('{');
            for (i, (key, item)) in pairs.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                // Keys are rendered bare and are not validated here; data
                // keys are the caller's responsibility.
                out.push_str(key);
                out.push(':');
                write_value(out, item)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
