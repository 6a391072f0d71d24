//! PDF object model
//!
//! The handful of PDF object kinds the resume writer needs, each knowing how
//! to serialize itself into the output buffer. Dictionaries keep sorted keys
//! so output is deterministic.

use std::collections::BTreeMap;
use std::io::Write as _;

#[derive(Debug, Clone)]
pub enum Object {
    Integer(i64),
    Real(f64),
    Name(String),
    /// Literal string, written with parenthesis escaping.
    Text(Vec<u8>),
    Array(Vec<Object>),
    Dictionary(Dictionary),
    Stream(Stream),
    /// Indirect reference, generation 0.
    Reference(u32),
}

impl Object {
    pub fn name(s: impl Into<String>) -> Self {
        Object::Name(s.into())
    }

    pub fn text(s: &str) -> Self {
        Object::Text(s.as_bytes().to_vec())
    }

    pub fn write(&self, out: &mut Vec<u8>) {
        match self {
            Object::Integer(n) => {
                let _ = write!(out, "{n}");
            }
            Object::Real(n) => {
                let _ = write!(out, "{}", fmt_real(*n));
            }
            Object::Name(name) => write_name(out, name),
            Object::Text(data) => write_literal(out, data),
            Object::Array(items) => {
                out.push(b'[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(b' ');
                    }
                    item.write(out);
                }
                out.push(b']');
            }
            Object::Dictionary(dict) => dict.write(out),
            Object::Stream(stream) => stream.write(out),
            Object::Reference(num) => {
                let _ = write!(out, "{num} 0 R");
            }
        }
    }
}

/// Format a real with trailing zeros trimmed.
pub fn fmt_real(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        let s = format!("{n:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn write_name(out: &mut Vec<u8>, name: &str) {
    out.push(b'/');
    for byte in name.bytes() {
        match byte {
            0x21..=0x7E
                if !matches!(
                    byte,
                    b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
                ) =>
            {
                out.push(byte);
            }
            _ => {
                let _ = write!(out, "#{byte:02X}");
            }
        }
    }
}

fn write_literal(out: &mut Vec<u8>, data: &[u8]) {
    out.push(b'(');
    for &byte in data {
        match byte {
            b'(' | b')' | b'\\' => {
                out.push(b'\\');
                out.push(byte);
            }
            0x0A => out.extend_from_slice(b"\\n"),
            0x0D => out.extend_from_slice(b"\\r"),
            0x20..=0x7E => out.push(byte),
            _ => {
                let _ = write!(out, "\\{byte:03o}");
            }
        }
    }
    out.push(b')');
}

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: BTreeMap<String, Object>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(type_name: &str) -> Self {
        let mut dict = Self::new();
        dict.set("Type", Object::name(type_name));
        dict
    }

    pub fn set(&mut self, key: impl Into<String>, value: Object) {
        self.entries.insert(key.into(), value);
    }

    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"<<");
        for (key, value) in &self.entries {
            out.push(b' ');
            write_name(out, key);
            out.push(b' ');
            value.write(out);
        }
        out.extend_from_slice(b" >>");
    }
}

#[derive(Debug, Clone)]
pub struct Stream {
    pub dict: Dictionary,
    pub data: Vec<u8>,
}

impl Stream {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            dict: Dictionary::new(),
            data,
        }
    }

    fn write(&self, out: &mut Vec<u8>) {
        let mut dict = self.dict.clone();
        dict.set("Length", Object::Integer(self.data.len() as i64));
        dict.write(out);
        out.extend_from_slice(b"\nstream\n");
        out.extend_from_slice(&self.data);
        out.extend_from_slice(b"\nendstream");
    }
}
