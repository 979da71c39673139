//! Chapter markup (XHTML/HTML) to [`DocumentNode`] trees.

use scraper::{ElementRef, Html, Node, Selector};

use crate::engine::extractor::DocumentNode;
use crate::types::{HoardError, HoardResult};

/// Parse chapter markup and return the `<body>` subtree, or the document
/// root when there is no body.
pub fn parse_markup(markup: &str) -> HoardResult<DocumentNode> {
    let html = Html::parse_document(markup);
    let body = Selector::parse("body").map_err(|e| HoardError::Markup(format!("{e:?}")))?;
    let root = html.select(&body).next().unwrap_or_else(|| html.root_element());
    Ok(convert(root))
}

/// Wrap plain text as a single-node document.
pub fn plain_text(text: &str) -> DocumentNode {
    DocumentNode::element("pre", vec![DocumentNode::text(text)])
}

fn convert(element: ElementRef<'_>) -> DocumentNode {
    let children = element
        .children()
        .filter_map(|child| match child.value() {
            Node::Text(text) => Some(DocumentNode::text(&**text)),
            Node::Element(_) => ElementRef::wrap(child).map(convert),
            _ => None,
        })
        .collect();
    DocumentNode::element(element.value().name(), children)
}
