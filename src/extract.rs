//! Structural extraction helpers with value-or-absent semantics.
//!
//! Every helper returns `Option`: a query matching zero nodes is an absent
//! field, not an error. When a query matches more than once the first match
//! is authoritative.

use scraper::{ElementRef, Selector};

/// All text fragments of an element, each trimmed, joined with single spaces.
pub fn joined_text(el: ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the first match under `root`. Empty text counts as absent.
pub fn first_text(root: ElementRef, selector: &Selector) -> Option<String> {
    root.select(selector)
        .next()
        .map(joined_text)
        .filter(|t| !t.is_empty())
}

/// Attribute value of the first match under `root` that carries `attr`.
pub fn first_attr(root: ElementRef, selector: &Selector, attr: &str) -> Option<String> {
    root.select(selector)
        .find_map(|el| el.value().attr(attr).map(str::to_string))
}

/// The n-th direct `div` child of `el` (1-based, matching positional paths
/// like `./div[3]`). Non-div children are skipped, not counted.
pub fn nth_child_div(el: ElementRef, n: usize) -> Option<ElementRef> {
    if n == 0 {
        return None;
    }
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "div")
        .nth(n - 1)
}

/// Text of the first `sibling_tag` element following the label element.
///
/// The label element is the first match of `label_selector` whose text
/// contains `label`. Used for `LABEL` / value pairs laid out as sibling
/// headings; when several siblings follow, the first one wins.
pub fn sibling_after_label(
    root: ElementRef,
    label_selector: &Selector,
    label: &str,
    sibling_tag: &str,
) -> Option<String> {
    let label_el = root
        .select(label_selector)
        .find(|el| joined_text(*el).contains(label))?;
    label_el
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == sibling_tag)
        .map(joined_text)
        .filter(|t| !t.is_empty())
}
