use serde::{Deserialize, Serialize};

use crate::models::declaration::Declaration;

/// A node in the stylesheet tree.
///
/// Serialized with an internal `type` tag so trees round-trip as JSON in the
/// shape the host pipeline's CSS toolkit emits (`"rule"`, `"atRule"`,
/// `"declaration"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Rule(Rule),
    AtRule(AtRule),
    Declaration(Declaration),
}

impl From<Rule> for Node {
    fn from(rule: Rule) -> Self {
        Node::Rule(rule)
    }
}

impl From<AtRule> for Node {
    fn from(at_rule: AtRule) -> Self {
        Node::AtRule(at_rule)
    }
}

impl From<Declaration> for Node {
    fn from(declaration: Declaration) -> Self {
        Node::Declaration(declaration)
    }
}

/// A style rule: a selector and an ordered body of child nodes.
///
/// A rule without a selector is legal in the tree (some toolkits synthesize
/// such rules); its declarations are simply exempt from selector-based
/// filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// The raw selector text. Missing selectors never match any filter.
    pub selector: Option<String>,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: Some(selector.into()),
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: impl Into<Node>) -> &mut Self {
        self.nodes.push(node.into());
        self
    }
}

/// An at-rule such as `@media (min-width: 768px)`, with its raw parameter
/// text and an ordered body of child nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtRule {
    /// The rule name without the leading `@`, e.g. `media`.
    pub name: String,
    /// The raw parameter text following the name. Mutable in place.
    #[serde(default)]
    pub params: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl AtRule {
    pub fn new(name: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: impl Into<Node>) -> &mut Self {
        self.nodes.push(node.into());
        self
    }
}

/// The root of a parsed stylesheet, as handed over by the host pipeline.
///
/// The converter mutates the tree in place; there is no separate return
/// value carrying the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stylesheet {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: impl Into<Node>) -> &mut Self {
        self.nodes.push(node.into());
        self
    }

    /// Visits every at-rule whose name equals `name` (ASCII case-insensitive),
    /// depth-first in document order, including at-rules nested inside other
    /// rules and at-rules.
    pub fn walk_at_rules_mut<F>(&mut self, name: &str, mut visit: F)
    where
        F: FnMut(&mut AtRule),
    {
        walk_at_rules_in(&mut self.nodes, name, &mut visit);
    }
}

fn walk_at_rules_in<F>(nodes: &mut [Node], name: &str, visit: &mut F)
where
    F: FnMut(&mut AtRule),
{
    for node in nodes.iter_mut() {
        match node {
            Node::AtRule(at_rule) => {
                if at_rule.name.eq_ignore_ascii_case(name) {
                    visit(at_rule);
                }
                walk_at_rules_in(&mut at_rule.nodes, name, visit);
            }
            Node::Rule(rule) => walk_at_rules_in(&mut rule.nodes, name, visit),
            Node::Declaration(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_at_rules_visits_nested_rules_in_document_order() {
        let mut sheet = Stylesheet::new();
        let mut outer = AtRule::new("media", "(min-width: 100px)");
        outer.push(AtRule::new("media", "print"));
        sheet.push(outer);
        sheet.push(AtRule::new("supports", "(display: grid)"));
        sheet.push(AtRule::new("MEDIA", "screen"));

        let mut seen = Vec::new();
        sheet.walk_at_rules_mut("media", |at_rule| seen.push(at_rule.params.clone()));
        assert_eq!(seen, vec!["(min-width: 100px)", "print", "screen"]);
    }

    #[test]
    fn tree_round_trips_through_tagged_json() {
        let mut rule = Rule::new(".box");
        rule.push(Declaration::new("width", "100px"));
        let mut sheet = Stylesheet::new();
        sheet.push(rule);

        let json = serde_json::to_string(&sheet).expect("serialize stylesheet");
        assert!(json.contains(r#""type":"rule""#));
        assert!(json.contains(r#""type":"declaration""#));

        let back: Stylesheet = serde_json::from_str(&json).expect("deserialize stylesheet");
        assert_eq!(back, sheet);
    }

    #[test]
    fn declaration_nodes_deserialize_without_important_flag() {
        let json = r#"{"nodes":[{"type":"declaration","property":"width","value":"10px"}]}"#;
        let sheet: Stylesheet = serde_json::from_str(json).expect("deserialize");
        match &sheet.nodes[0] {
            Node::Declaration(decl) => {
                assert_eq!(decl.property, "width");
                assert!(!decl.important);
            }
            other => panic!("expected declaration, got {:?}", other),
        }
    }
}
