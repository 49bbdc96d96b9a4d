//! Hierarchical configuration tree.
//!
//! A [`Node`] is a named value with ordered children, addressed by dotted
//! paths (`"Server.Port"`). The command-line parser owns exactly one tree
//! per parse call: defaults are seeded first, then matched options overwrite
//! them. Values are stored as the raw strings the user typed; typed reads go
//! through [`Node::value_as_default`].

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::str::FromStr;

/// One node in the configuration tree.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Node {
    key: String,
    value: String,
    children: Vec<Node>,
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl Node {
    pub fn new(key: impl Into<String>) -> Self {
        Node { key: key.into(), ..Node::default() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Direct child by key. With duplicate keys, the first one wins.
    pub fn child(&self, key: &str) -> Option<&Node> {
        self.index.get(key).map(|&pos| &self.children[pos])
    }

    /// Append a child node. Duplicate keys are allowed; lookups keep
    /// resolving to the first occurrence.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Node {
        let key = key.into();
        let mut node = Node::new(key.clone());
        node.value = value.into();
        self.children.push(node);
        let pos = self.children.len() - 1;
        self.index.entry(key).or_insert(pos);
        &mut self.children[pos]
    }

    pub fn remove_children(&mut self) {
        self.children.clear();
        self.index.clear();
    }

    /// Node at a dotted path, if every segment exists.
    pub fn get(&self, path: &str) -> Option<&Node> {
        let mut node = self;
        for segment in path.split('.') {
            node = node.child(segment)?;
        }
        Some(node)
    }

    /// Node at a dotted path, creating missing segments along the way.
    pub fn entry(&mut self, path: &str) -> &mut Node {
        let mut node = self;
        for segment in path.split('.') {
            if !node.index.contains_key(segment) {
                node.children.push(Node::new(segment));
                let pos = node.children.len() - 1;
                node.index.insert(segment.to_string(), pos);
            }
            let pos = node.index[segment];
            node = &mut node.children[pos];
        }
        node
    }

    /// Set the value at a dotted path, creating missing segments.
    pub fn set(&mut self, path: &str, value: impl Into<String>) {
        self.entry(path).value = value.into();
    }

    /// Parse this node's value, `None` when empty or unparsable.
    pub fn value_as<T: FromStr>(&self) -> Option<T> {
        self.value.parse().ok()
    }

    /// Typed read at a dotted path, falling back to `default` when the path
    /// is missing or the value does not parse.
    pub fn value_as_default<T: FromStr>(&self, path: &str, default: T) -> T {
        self.get(path).and_then(Node::value_as).unwrap_or(default)
    }

    /// Boolean read accepting the same spellings the boolean parameter
    /// validator accepts (a switch may legitimately store `"yes"` or `"1"`).
    pub fn bool_default(&self, path: &str, default: bool) -> bool {
        match self.get(path) {
            Some(node) if !node.value.is_empty() => parse_bool(&node.value),
            _ => default,
        }
    }
}

/// Lenient boolean parse: `true`/`yes`/`on`/`1` in any case are true,
/// everything else is false. Validation of user input happens earlier, in
/// the boolean parameter type.
pub fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "yes" | "on" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_creates_intermediate_nodes() {
        let mut root = Node::new("CommandLine");
        root.set("Server.Port", "8080");
        assert_eq!(root.get("Server.Port").map(Node::value), Some("8080"));
        assert_eq!(root.get("Server").map(Node::value), Some(""));
        assert!(root.get("Server.Host").is_none());
    }

    #[test]
    fn set_overwrites_existing_value() {
        let mut root = Node::new("CommandLine");
        root.set("Timeout", "30");
        root.set("Timeout", "90");
        assert_eq!(root.get("Timeout").map(Node::value), Some("90"));
        assert_eq!(root.num_children(), 1);
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut root = Node::new("CommandLine");
        let node = root.entry("Image.Size");
        node.add("Width", "336");
        node.add("Height", "112");
        let keys: Vec<&str> = root.get("Image.Size").unwrap().children().map(Node::key).collect();
        assert_eq!(keys, vec!["Width", "Height"]);
    }

    #[test]
    fn remove_children_clears_lookup() {
        let mut root = Node::new("CommandLine");
        root.entry("Opt").add("A", "1");
        root.entry("Opt").remove_children();
        assert_eq!(root.get("Opt").unwrap().num_children(), 0);
        assert!(root.get("Opt.A").is_none());
    }

    #[test]
    fn typed_reads_fall_back_to_default() {
        let mut root = Node::new("CommandLine");
        root.set("Timeout", "90");
        root.set("Broken", "ninety");
        assert_eq!(root.value_as_default("Timeout", 0_i64), 90);
        assert_eq!(root.value_as_default("Broken", 7_i64), 7);
        assert_eq!(root.value_as_default("Missing", 7_i64), 7);
    }

    #[test]
    fn bool_reads_accept_config_spellings() {
        let mut root = Node::new("CommandLine");
        for spelling in ["true", "YES", "On", "1"] {
            root.set("Flag", spelling);
            assert!(root.bool_default("Flag", false), "{spelling} should read as true");
        }
        for spelling in ["false", "no", "OFF", "0"] {
            root.set("Flag", spelling);
            assert!(!root.bool_default("Flag", true), "{spelling} should read as false");
        }
        assert!(root.bool_default("Missing", true));
    }

    #[test]
    fn serializes_to_json() {
        let mut root = Node::new("CommandLine");
        root.set("Verbose", "true");
        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["key"], "CommandLine");
        assert_eq!(json["children"][0]["value"], "true");
    }
}
