// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON snapshots of node trees.
//!
//! [`snapshot`] captures a subtree as nested objects:
//!
//! ```json
//! {
//!   "kind": "div",
//!   "class": "time-display unified",
//!   "children": [
//!     { "kind": "div", "class": "time-main", "children": [ ... ] }
//!   ]
//! }
//! ```
//!
//! `class`, `text`, `attrs`, and `children` are omitted when empty, so
//! snapshots stay small enough to diff by eye. Slot indices and generations
//! are never included, so a snapshot depends only on tree content.

use std::io::{self, Write};

use serde_json::{Map, Value, json};

use horologium_core::node::{AttrValue, NodeId, NodeStore};

/// Captures `root` and its descendants.
///
/// # Panics
///
/// Panics if `root` is stale.
#[must_use]
pub fn snapshot(store: &NodeStore, root: NodeId) -> Value {
    let mut node = Map::new();
    node.insert("kind".into(), json!(store.kind(root).tag()));
    if let Some(class) = store.class(root) {
        node.insert("class".into(), json!(class));
    }
    if let Some(text) = store.text(root) {
        node.insert("text".into(), json!(text));
    }
    let attrs = store.attrs(root);
    if !attrs.is_empty() {
        let attrs: Map<String, Value> = attrs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), attr_value(value)))
            .collect();
        node.insert("attrs".into(), Value::Object(attrs));
    }
    let children: Vec<Value> = store
        .children(root)
        .map(|child| snapshot(store, child))
        .collect();
    if !children.is_empty() {
        node.insert("children".into(), Value::Array(children));
    }
    Value::Object(node)
}

/// Writes snapshots of every tree in `roots` as a pretty-printed JSON array.
///
/// # Panics
///
/// Panics if any root is stale.
pub fn export(store: &NodeStore, roots: &[NodeId], writer: &mut dyn Write) -> io::Result<()> {
    let trees: Vec<Value> = roots.iter().map(|&root| snapshot(store, root)).collect();
    serde_json::to_writer_pretty(writer, &trees)?;
    Ok(())
}

/// Numbers stay numbers; non-finite values have no JSON form and become
/// `null`.
fn attr_value(value: &AttrValue) -> Value {
    match value {
        AttrValue::Number(n) => json!(n),
        AttrValue::Text(text) => json!(text),
    }
}

#[cfg(test)]
mod tests {
    use horologium_core::display::{Display, Unified};
    use horologium_core::node::NodeKind;
    use horologium_core::render::render;

    use super::*;

    #[test]
    fn snapshot_nests_children() {
        let mut store = NodeStore::new();
        let root = store.create_node(NodeKind::Block);
        render(
            &mut store,
            &Display::from(Unified::new("1700000000").with_label("Unix epoch")),
            root,
        );

        assert_eq!(
            snapshot(&store, root),
            json!({
                "kind": "div",
                "class": "time-display unified",
                "children": [
                    {
                        "kind": "div",
                        "class": "time-main",
                        "children": [
                            { "kind": "span", "class": "time-value", "text": "1700000000" }
                        ]
                    },
                    { "kind": "div", "class": "time-label", "text": "Unix epoch" }
                ]
            })
        );
    }

    #[test]
    fn attributes_keep_their_types() {
        let mut store = NodeStore::new();
        let line = store.create_node(NodeKind::Line);
        store.set_attr(line, "x2", 12.5);
        store.set_attr(line, "transform", "rotate(-90 50 50)");
        store.set_attr(line, "angle", f64::NAN);

        let value = snapshot(&store, line);
        assert_eq!(value["kind"], "line");
        assert_eq!(value["attrs"]["x2"], 12.5);
        assert_eq!(value["attrs"]["transform"], "rotate(-90 50 50)");
        assert!(value["attrs"]["angle"].is_null());
        assert!(value.get("children").is_none());
    }

    #[test]
    fn export_writes_one_entry_per_root() {
        let mut store = NodeStore::new();
        let a = store.create_node(NodeKind::Block);
        let b = store.create_node(NodeKind::Svg);

        let mut out = Vec::new();
        export(&store, &[a, b], &mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&String::from_utf8(out).unwrap()).unwrap();
        assert_eq!(parsed, vec![json!({ "kind": "div" }), json!({ "kind": "svg" })]);
    }

    #[test]
    fn export_empty() {
        let store = NodeStore::new();
        let mut out = Vec::new();
        export(&store, &[], &mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&String::from_utf8(out).unwrap()).unwrap();
        assert!(parsed.is_empty());
    }
}
