//! Event-driven YAML loader that records where every node starts.
//!
//! `yaml-rust2` reports a [`Marker`] with each parser event. The loader
//! folds the event stream into a plain [`serde_json::Value`] while keeping a
//! side table from document path to source position, so validation can run
//! on plain data and still point back into the original text.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Number, Value};
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

use super::{DocPath, PathSegment, Position, PositionTable};
use crate::error::{Error, Result};

static INT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]?[0-9]+$").unwrap());
static FLOAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?(\.[0-9]+|[0-9]+(\.[0-9]*)?)([eE][-+]?[0-9]+)?$").unwrap()
});

/// Load YAML (or JSON, which the YAML grammar accepts) into a value and a
/// position table.
pub(crate) fn load(text: &str) -> Result<(Value, PositionTable)> {
    let mut builder = TreeBuilder::default();
    let mut parser = Parser::new(text.chars());
    parser.load(&mut builder, false).map_err(|e| {
        let mark = e.marker();
        Error::parse_at(e.info().to_string(), mark.line(), mark.col() + 1)
    })?;

    if let Some(err) = builder.error {
        return Err(err);
    }
    let root = builder.root.unwrap_or(Value::Null);
    log::debug!("loaded document with {} positioned nodes", builder.positions.len());
    Ok((root, builder.positions))
}

enum Frame {
    Sequence {
        items: Vec<Value>,
        anchor: usize,
    },
    Mapping {
        entries: Map<String, Value>,
        pending_key: Option<String>,
        anchor: usize,
    },
}

#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Frame>,
    path: DocPath,
    positions: PositionTable,
    anchors: HashMap<usize, Value>,
    root: Option<Value>,
    error: Option<Error>,
}

impl TreeBuilder {
    fn expecting_key(&self) -> bool {
        matches!(
            self.stack.last(),
            Some(Frame::Mapping {
                pending_key: None,
                ..
            })
        )
    }

    /// Segment under which the next value will be stored in its parent.
    fn next_segment(&self) -> Option<PathSegment> {
        match self.stack.last() {
            None => None,
            Some(Frame::Sequence { items, .. }) => Some(PathSegment::Index(items.len())),
            Some(Frame::Mapping { pending_key, .. }) => {
                pending_key.as_ref().map(|k| PathSegment::Key(k.clone()))
            }
        }
    }

    fn record_position(&mut self, segment: Option<&PathSegment>, mark: Marker) {
        let path = match segment {
            Some(segment) => self.path.child(segment.clone()),
            None => self.path.clone(),
        };
        self.positions.insert(path, position_of(mark));
    }

    fn attach(&mut self, value: Value) {
        match self.stack.last_mut() {
            None => self.root = Some(value),
            Some(Frame::Sequence { items, .. }) => items.push(value),
            Some(Frame::Mapping {
                entries,
                pending_key,
                ..
            }) => {
                if let Some(key) = pending_key.take() {
                    if entries.insert(key.clone(), value).is_some() {
                        log::warn!("duplicate key `{}` in mapping, keeping the last value", key);
                    }
                }
            }
        }
    }

    fn set_key(&mut self, key: String) {
        if let Some(Frame::Mapping { pending_key, .. }) = self.stack.last_mut() {
            *pending_key = Some(key);
        }
    }

    fn fail(&mut self, message: &str, mark: Marker) {
        if self.error.is_none() {
            let pos = position_of(mark);
            self.error = Some(Error::parse_at(message, pos.line, pos.column));
        }
    }

    fn open(&mut self, frame: Frame, mark: Marker) {
        if self.expecting_key() {
            self.fail("complex mapping keys are not supported", mark);
            return;
        }
        let segment = self.next_segment();
        self.record_position(segment.as_ref(), mark);
        if let Some(segment) = segment {
            self.path.push(segment);
        }
        self.stack.push(frame);
    }

    fn close(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let (value, anchor) = match frame {
            Frame::Sequence { items, anchor } => (Value::Array(items), anchor),
            Frame::Mapping {
                entries, anchor, ..
            } => (Value::Object(entries), anchor),
        };
        if !self.stack.is_empty() {
            self.path.pop();
        }
        if anchor > 0 {
            self.anchors.insert(anchor, value.clone());
        }
        self.attach(value);
    }
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, ev: Event, mark: Marker) {
        if self.error.is_some() {
            return;
        }

        match ev {
            Event::Scalar(text, style, anchor, ..) => {
                if self.expecting_key() {
                    self.set_key(text);
                    return;
                }
                let value = resolve_scalar(&text, style);
                let segment = self.next_segment();
                self.record_position(segment.as_ref(), mark);
                if anchor > 0 {
                    self.anchors.insert(anchor, value.clone());
                }
                self.attach(value);
            }
            Event::Alias(id) => {
                let Some(value) = self.anchors.get(&id).cloned() else {
                    self.fail("unknown anchor", mark);
                    return;
                };
                if self.expecting_key() {
                    match value {
                        Value::String(key) => self.set_key(key),
                        _ => self.fail("aliased mapping keys must be strings", mark),
                    }
                    return;
                }
                let segment = self.next_segment();
                self.record_position(segment.as_ref(), mark);
                self.attach(value);
            }
            Event::SequenceStart(anchor, ..) => {
                self.open(
                    Frame::Sequence {
                        items: Vec::new(),
                        anchor,
                    },
                    mark,
                );
            }
            Event::MappingStart(anchor, ..) => {
                self.open(
                    Frame::Mapping {
                        entries: Map::new(),
                        pending_key: None,
                        anchor,
                    },
                    mark,
                );
            }
            Event::SequenceEnd | Event::MappingEnd => self.close(),
            _ => {}
        }
    }
}

fn position_of(mark: Marker) -> Position {
    // yaml-rust2 lines are 1-based, columns 0-based.
    Position::new(mark.line().max(1), mark.col() + 1)
}

/// Resolve a scalar to a JSON value following the YAML 1.2 core schema.
/// Quoted and block scalars are always strings.
fn resolve_scalar(text: &str, style: TScalarStyle) -> Value {
    if !matches!(style, TScalarStyle::Plain) {
        return Value::String(text.to_string());
    }

    match text {
        "" | "~" | "null" | "Null" | "NULL" => return Value::Null,
        "true" | "True" | "TRUE" => return Value::Bool(true),
        "false" | "False" | "FALSE" => return Value::Bool(false),
        _ => {}
    }

    if INT_RE.is_match(text) {
        if let Ok(n) = text.parse::<i64>() {
            return Value::Number(n.into());
        }
    }
    if let Some(hex) = text.strip_prefix("0x") {
        if let Ok(n) = i64::from_str_radix(hex, 16) {
            return Value::Number(n.into());
        }
    }
    if let Some(oct) = text.strip_prefix("0o") {
        if let Ok(n) = i64::from_str_radix(oct, 8) {
            return Value::Number(n.into());
        }
    }
    if FLOAT_RE.is_match(text) {
        if let Some(n) = text.parse::<f64>().ok().and_then(Number::from_f64) {
            return Value::Number(n);
        }
    }

    Value::String(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_scalars() {
        assert_eq!(resolve_scalar("~", TScalarStyle::Plain), Value::Null);
        assert_eq!(resolve_scalar("true", TScalarStyle::Plain), Value::Bool(true));
        assert_eq!(resolve_scalar("42", TScalarStyle::Plain), Value::from(42));
        assert_eq!(resolve_scalar("0x1F", TScalarStyle::Plain), Value::from(31));
        assert_eq!(resolve_scalar("2.5", TScalarStyle::Plain), Value::from(2.5));
        assert_eq!(
            resolve_scalar("2025-01-01", TScalarStyle::Plain),
            Value::from("2025-01-01")
        );
        assert_eq!(resolve_scalar("2.5cm", TScalarStyle::Plain), Value::from("2.5cm"));
    }

    #[test]
    fn test_quoted_scalars_stay_strings() {
        assert_eq!(
            resolve_scalar("true", TScalarStyle::DoubleQuoted),
            Value::from("true")
        );
        assert_eq!(resolve_scalar("12", TScalarStyle::SingleQuoted), Value::from("12"));
    }

    #[test]
    fn test_load_nested_positions() {
        let text = "content:\n  basics:\n    name: Jane Doe\n  education:\n    - area: Physics\n      degree: Master\n";
        let (value, positions) = load(text).unwrap();

        assert_eq!(value["content"]["basics"]["name"], "Jane Doe");
        assert_eq!(value["content"]["education"][0]["degree"], "Master");

        let name = DocPath::from_segments(["content", "basics", "name"]);
        assert_eq!(positions.get(&name), Some(Position::new(3, 11)));

        let degree = DocPath::from_segments(["content", "education"])
            .child(0)
            .child("degree");
        assert_eq!(positions.get(&degree), Some(Position::new(6, 15)));
    }

    #[test]
    fn test_load_json_flow_style() {
        let text = "{\n  \"content\": {\n    \"basics\": {\"name\": \"Jane\"}\n  }\n}";
        let (value, positions) = load(text).unwrap();
        assert_eq!(value["content"]["basics"]["name"], "Jane");

        let name = DocPath::from_segments(["content", "basics", "name"]);
        assert_eq!(positions.get(&name).map(|p| p.line), Some(3));
    }

    #[test]
    fn test_load_anchor_and_alias() {
        let text = "a: &x hello\nb: *x\n";
        let (value, _) = load(text).unwrap();
        assert_eq!(value["b"], "hello");
    }

    #[test]
    fn test_load_empty_document() {
        let (value, positions) = load("").unwrap();
        assert_eq!(value, Value::Null);
        assert!(positions.is_empty());
    }

    #[test]
    fn test_load_malformed() {
        let err = load("content:\n  basics: [unclosed\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: Some(_), .. }));
    }
}
