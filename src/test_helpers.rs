//! Shared test utilities for the mavera-hall test suite.
//!
//! Provides a capturing render wrapper plus lookups over content trees.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let (content, events) = render_captured(PageId::Faqs);
//! assert_eq!(events.len(), 1);
//!
//! let cards = find_by_class(&content, "faq-card");
//! assert_eq!(cards.len(), 3);
//! ```

use crate::diagnostics::{CaptureSink, DiagnosticEvent};
use crate::pages;
use crate::types::{ContentNode, PageContent, PageId};

// =========================================================================
// Rendering
// =========================================================================

/// Render a page into a fresh capture sink and return the tree and its events.
pub fn render_captured(page: PageId) -> (PageContent, Vec<DiagnosticEvent>) {
    let sink = CaptureSink::new();
    let content = pages::render(page, &sink);
    (content, sink.take())
}

/// Events with the timestamp dropped, for comparing renders across calls.
pub fn without_timestamps(events: &[DiagnosticEvent]) -> Vec<(String, String)> {
    events
        .iter()
        .map(|e| (e.source_id.clone(), e.message.clone()))
        .collect()
}

// =========================================================================
// Tree lookups
// =========================================================================

/// Every node in the tree, depth-first, parents before children.
pub fn flatten(content: &PageContent) -> Vec<&ContentNode> {
    fn walk<'a>(node: &'a ContentNode, out: &mut Vec<&'a ContentNode>) {
        out.push(node);
        for child in node.children() {
            walk(child, out);
        }
    }
    let mut out = Vec::new();
    for node in &content.nodes {
        walk(node, &mut out);
    }
    out
}

/// Cards and grids carrying the given class.
pub fn find_by_class<'a>(content: &'a PageContent, class: &str) -> Vec<&'a ContentNode> {
    flatten(content)
        .into_iter()
        .filter(|node| match node {
            ContentNode::Card { class: c, .. } | ContentNode::Grid { class: c, .. } => c == class,
            _ => false,
        })
        .collect()
}

/// `(label, value)` of every fact row.
pub fn collect_facts(content: &PageContent) -> Vec<(String, String)> {
    flatten(content)
        .into_iter()
        .filter_map(|node| match node {
            ContentNode::Fact { label, value } => Some((label.clone(), value.clone())),
            _ => None,
        })
        .collect()
}

/// All text under a node, space-joined.
pub fn text_of(node: &ContentNode) -> String {
    match node {
        ContentNode::Heading { text, .. } | ContentNode::Paragraph { text } => text.clone(),
        ContentNode::Fact { label, value } => format!("{label}: {value}"),
        ContentNode::Card { children, .. } | ContentNode::Grid { children, .. } => children
            .iter()
            .map(text_of)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    }
}
