//! Candidate extraction from a rendered cross-reference page.
//!
//! The rendering session hands back the final document; everything here is
//! pure and works on that snapshot:
//!
//! 1. select product-detail anchors (document order)
//! 2. drop anchors whose text cannot be a part number
//! 3. label each survivor by walking outward through its ancestors until some
//!    enclosing text mentions a match-type phrase
//!
//! The ancestor walk is written against [`DomNode`] so it can be tested with
//! synthetic trees.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use ego_tree::{NodeId, NodeRef};
use scraper::{node::Node, ElementRef, Html, Selector};
use url::Url;

use crate::error::{Result, ScoutError};
use crate::types::alternative::{CrossReferenceAlternative, MatchType};

/// Visible labels the cross-reference page links to product pages with.
const NON_PART_LABELS: &[&str] = &[
    "request samples",
    "request sample",
    "order now",
    "buy now",
    "add to cart",
    "view details",
    "view all",
    "learn more",
    "datasheet",
    "data sheet",
    "product details",
    "products",
    "applications",
    "design resources",
    "design & development",
    "support",
    "quality & reliability",
    "packaging",
    "ordering",
    "sign in",
    "log in",
    "compare",
    "cross-reference",
    "parametric search",
    "evaluation module",
    "reference designs",
];

/// Elements whose text never reaches the reader.
const NON_TEXT_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Minimal read-only view of a document node.
pub trait DomNode: Sized {
    /// Stable identity of the node within its document.
    type Key: Eq + Hash;

    fn key(&self) -> Self::Key;

    /// Rendered text under this node, concatenated.
    fn text_content(&self) -> String;

    /// Enclosing element, `None` at the document root.
    fn parent_node(&self) -> Option<Self>;
}

impl<'a> DomNode for ElementRef<'a> {
    type Key = NodeId;

    fn key(&self) -> NodeId {
        self.id()
    }

    fn text_content(&self) -> String {
        let mut parts = Vec::new();
        collect_text(self, &mut parts);
        parts.join(" ")
    }

    fn parent_node(&self) -> Option<Self> {
        self.parent().and_then(ElementRef::wrap)
    }
}

fn collect_text<'a>(node: &NodeRef<'a, Node>, out: &mut Vec<&'a str>) {
    match node.value() {
        Node::Text(text) => out.push(text),
        Node::Element(element) if NON_TEXT_ELEMENTS.contains(&element.name()) => {}
        _ => {
            for child in node.children() {
                collect_text(&child, out);
            }
        }
    }
}

/// Detected label per node, shared by every anchor on one page.
pub type MatchTypeCache<K> = HashMap<K, Option<MatchType>>;

/// Label a candidate by the nearest enclosing text that names a match type.
///
/// Starts at `node` itself and moves outward to the root. At each level the
/// phrases are tried in [`MatchType::PRIORITY`] order; the first level with
/// any hit decides. Falls back to [`MatchType::CrossReferenceMatch`].
pub fn infer_match_type<N: DomNode>(node: &N) -> MatchType {
    infer_match_type_cached(node, &mut HashMap::new())
}

/// [`infer_match_type`] reusing per-node detections from earlier anchors.
///
/// Sibling anchors share most of their ancestors, so each enclosing text is
/// collected and scanned at most once per cache.
pub fn infer_match_type_cached<N: DomNode>(
    node: &N,
    cache: &mut MatchTypeCache<N::Key>,
) -> MatchType {
    if let Some(found) = detect_cached(node, cache) {
        return found;
    }

    let mut current = node.parent_node();
    while let Some(ancestor) = current {
        if let Some(found) = detect_cached(&ancestor, cache) {
            return found;
        }
        current = ancestor.parent_node();
    }

    MatchType::default()
}

fn detect_cached<N: DomNode>(node: &N, cache: &mut MatchTypeCache<N::Key>) -> Option<MatchType> {
    *cache
        .entry(node.key())
        .or_insert_with(|| MatchType::detect(&normalize(&node.text_content())))
}

/// Whether anchor text could plausibly be a part number.
///
/// Length must be strictly between 3 and 20 characters and the text must not
/// be a known navigation or call-to-action label.
pub fn is_plausible_part_number(text: &str) -> bool {
    let text = text.trim();
    let len = text.chars().count();
    if len <= 3 || len >= 20 {
        return false;
    }

    let lower = text.to_lowercase();
    !NON_PART_LABELS.iter().any(|label| lower.contains(label))
}

/// Extract candidates from a rendered cross-reference page.
///
/// `page_url` resolves relative anchors; `product_selector` picks the
/// product-detail anchors. Candidates keep document order and are
/// de-duplicated by part number (first occurrence wins).
pub fn extract_alternatives(
    html: &str,
    page_url: &str,
    product_selector: &str,
) -> Result<Vec<CrossReferenceAlternative>> {
    let selector = Selector::parse(product_selector)
        .map_err(|e| ScoutError::Browser(format!("invalid product selector: {:?}", e)))?;
    let base = Url::parse(page_url).ok();
    let document = Html::parse_document(html);

    let mut seen = HashSet::new();
    let mut labels = MatchTypeCache::new();
    let mut alternatives = Vec::new();

    for anchor in document.select(&selector) {
        let text = collapse_whitespace(&anchor.text_content());
        if !is_plausible_part_number(&text) {
            continue;
        }
        if !seen.insert(text.to_uppercase()) {
            continue;
        }

        let href = anchor
            .value()
            .attr("href")
            .map(|raw| resolve_href(base.as_ref(), raw))
            .unwrap_or_default();
        let title = anchor
            .value()
            .attr("title")
            .map(collapse_whitespace)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| text.clone());

        alternatives.push(
            CrossReferenceAlternative::new(text, infer_match_type_cached(&anchor, &mut labels))
                .with_href(href)
                .with_title(title),
        );
    }

    Ok(alternatives)
}

fn resolve_href(base: Option<&Url>, raw: &str) -> String {
    base.and_then(|b| b.join(raw).ok())
        .map(|u| u.to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize(text: &str) -> String {
    collapse_whitespace(text).to_lowercase()
}
