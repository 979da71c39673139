//! Structural text extraction: document tree to plain text with block
//! boundaries kept as line breaks.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Elements that end a line of text.
const BLOCK_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "li", "dt", "dd", "tr", "blockquote", "pre", "br",
    "hr", "div", "section", "article", "aside", "header", "footer", "nav", "main", "figure",
    "figcaption", "address",
];

/// Non-content elements dropped together with their subtree.
const SKIP_TAGS: &[&str] = &["script", "style", "noscript", "template", "head", "svg"];

static EXCESS_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid line-break regex"));

/// A node of a markup document, independent of any parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentNode {
    Element {
        tag: String,
        children: Vec<DocumentNode>,
    },
    Text(String),
}

impl DocumentNode {
    pub fn element(tag: impl Into<String>, children: Vec<DocumentNode>) -> Self {
        Self::Element {
            tag: tag.into(),
            children,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Lowercased tag name, `None` for text nodes.
    pub fn tag(&self) -> Option<String> {
        match self {
            Self::Element { tag, .. } => Some(tag.to_ascii_lowercase()),
            Self::Text(_) => None,
        }
    }

    /// Number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Element { children, .. } => {
                1 + children.iter().map(DocumentNode::node_count).sum::<usize>()
            }
            Self::Text(_) => 1,
        }
    }
}

/// Turns a document tree into reading-order plain text, driven only by tag
/// membership in a block set and a skip set.
#[derive(Debug, Clone)]
pub struct TextExtractor {
    block_tags: HashSet<String>,
    skip_tags: HashSet<String>,
}

impl TextExtractor {
    /// Extractor with the default block and skip sets.
    pub fn new() -> Self {
        Self::with_tags(BLOCK_TAGS, SKIP_TAGS)
    }

    /// Extractor with custom tag sets. Names are matched case-insensitively.
    pub fn with_tags(block_tags: &[&str], skip_tags: &[&str]) -> Self {
        Self {
            block_tags: block_tags.iter().map(|t| t.to_ascii_lowercase()).collect(),
            skip_tags: skip_tags.iter().map(|t| t.to_ascii_lowercase()).collect(),
        }
    }

    /// Extract the text of one document.
    ///
    /// Runs of three or more line breaks collapse to a paragraph separator
    /// and the result is trimmed.
    pub fn extract(&self, root: &DocumentNode) -> String {
        let text = self.fold(root);
        EXCESS_BREAKS.replace_all(&text, "\n\n").trim().to_string()
    }

    fn fold(&self, node: &DocumentNode) -> String {
        match node {
            DocumentNode::Text(text) => text.clone(),
            DocumentNode::Element { tag, children } => {
                let tag = tag.to_ascii_lowercase();
                if self.skip_tags.contains(&tag) {
                    return String::new();
                }
                let mut text: String = children.iter().map(|child| self.fold(child)).collect();
                if self.block_tags.contains(&tag) {
                    text.push('\n');
                }
                text
            }
        }
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(tag: &str, children: Vec<DocumentNode>) -> DocumentNode {
        DocumentNode::element(tag, children)
    }

    fn txt(text: &str) -> DocumentNode {
        DocumentNode::text(text)
    }

    #[test]
    fn test_block_elements_end_lines() {
        let tree = el(
            "body",
            vec![
                el("h1", vec![txt("Title")]),
                el("p", vec![txt("One "), el("em", vec![txt("two")]), txt(" three")]),
                el("p", vec![txt("Four")]),
            ],
        );
        assert_eq!(TextExtractor::new().extract(&tree), "Title\nOne two three\nFour");
    }

    #[test]
    fn test_skip_set_drops_subtree() {
        let tree = el(
            "body",
            vec![
                el("script", vec![txt("var x = 1;")]),
                el("STYLE", vec![txt("p { color: red }")]),
                el("p", vec![txt("Visible")]),
            ],
        );
        assert_eq!(TextExtractor::new().extract(&tree), "Visible");
    }

    #[test]
    fn test_excess_breaks_collapse() {
        let tree = el(
            "div",
            vec![
                el("p", vec![txt("A")]),
                txt("\n\n\n\n"),
                el("br", vec![]),
                el("p", vec![txt("B")]),
            ],
        );
        assert_eq!(TextExtractor::new().extract(&tree), "A\n\nB");
    }

    #[test]
    fn test_custom_tag_sets() {
        let extractor = TextExtractor::with_tags(&["line"], &["note"]);
        let tree = el(
            "doc",
            vec![
                el("line", vec![txt("kept")]),
                el("note", vec![txt("hidden")]),
                el("p", vec![txt("inline")]),
            ],
        );
        assert_eq!(extractor.extract(&tree), "kept\ninline");
    }

    #[test]
    fn test_node_count() {
        let tree = el("p", vec![txt("a"), el("b", vec![txt("c")])]);
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.tag().as_deref(), Some("p"));
    }
}
