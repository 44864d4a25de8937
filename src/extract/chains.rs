//! Per-field selector chains.
//!
//! The target site's listing markup varies across page variants and drifts
//! over time, so no single CSS selector is reliable. Each field instead gets
//! an ordered chain of extraction strategies, tried until one produces a
//! non-empty value. Chain order is fixed per field and encodes observed
//! markup variants from most to least common.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::models::FieldId;

/// One way of locating a field's value within a listing node.
///
/// Strategies are declarative so a chain is just data; evaluation is
/// short-circuit "first success wins" with no dynamic dispatch.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Strategy {
    /// Text content of the first element matching a CSS selector.
    Text(&'static str),
    /// Attribute value of the first element matching a CSS selector;
    /// attribute names are tried in order (e.g. `src` then `data-src`).
    Attr(&'static str, &'static [&'static str]),
    /// Text of the first matching element whose text contains one of the
    /// given markers. Used where the site carries no stable class name.
    TextContains(&'static str, &'static [&'static str]),
}

enum Compiled {
    Text(Selector),
    Attr(Selector, &'static [&'static str]),
    TextContains(Selector, &'static [&'static str]),
}

/// Ordered fallback rules for locating one field's value in a listing node.
///
/// [`SelectorChain::locate`] never errors: absence of a match is a normal
/// outcome, reported as `None`.
pub struct SelectorChain {
    steps: Vec<Compiled>,
}

/// Parses a CSS selector with a safe fallback.
///
/// The selector strings here are compile-time constants, so a parse failure
/// is a programming error; it is logged and replaced with a selector that
/// matches nothing (`*:not(*)`) rather than panicking, keeping the
/// "chains never raise" contract.
fn parse_or_match_nothing(selector_str: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}': {}. Using match-nothing fallback.",
            selector_str,
            e
        );
        Selector::parse("*:not(*)").expect("fallback selector '*:not(*)' always parses")
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

impl Compiled {
    fn locate(&self, node: ElementRef<'_>) -> Option<String> {
        match self {
            Compiled::Text(selector) => node.select(selector).next().map(element_text),
            Compiled::Attr(selector, attrs) => {
                let element = node.select(selector).next()?;
                attrs
                    .iter()
                    .find_map(|attr| element.value().attr(attr))
                    .map(|value| value.trim().to_string())
            }
            Compiled::TextContains(selector, markers) => node
                .select(selector)
                .map(element_text)
                .find(|text| markers.iter().any(|marker| text.contains(marker))),
        }
    }
}

impl SelectorChain {
    pub(crate) fn new(strategies: &[Strategy]) -> Self {
        let steps = strategies
            .iter()
            .map(|strategy| match *strategy {
                Strategy::Text(s) => Compiled::Text(parse_or_match_nothing(s)),
                Strategy::Attr(s, attrs) => Compiled::Attr(parse_or_match_nothing(s), attrs),
                Strategy::TextContains(s, markers) => {
                    Compiled::TextContains(parse_or_match_nothing(s), markers)
                }
            })
            .collect();
        Self { steps }
    }

    /// Tries each strategy in declared order and returns the first non-empty
    /// textual result, or `None` when every strategy misses.
    pub fn locate(&self, node: ElementRef<'_>) -> Option<String> {
        self.steps
            .iter()
            .filter_map(|step| step.locate(node))
            .find(|value| !value.is_empty())
    }
}

static TITLE_CHAIN: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        Strategy::Text("span[role='heading']"),
        Strategy::Text("div.s-item__title"),
        Strategy::Text("h3.s-item__title"),
    ])
});

static PRICE_CHAIN: LazyLock<SelectorChain> =
    LazyLock::new(|| SelectorChain::new(&[Strategy::Text("span.s-item__price")]));

static CONDITION_CHAIN: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        Strategy::Text("span.SECONDARY_INFO"),
        Strategy::TextContains("span", &["New", "Used", "Pre-Owned"]),
    ])
});

static SHIPPING_CHAIN: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        Strategy::Text("span.s-item__shipping"),
        Strategy::Text("span.s-item__logisticsCost"),
    ])
});

static LOCATION_CHAIN: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        Strategy::Text("span.s-item__location"),
        Strategy::Text("span.s-item__itemLocation"),
    ])
});

static URL_CHAIN: LazyLock<SelectorChain> =
    LazyLock::new(|| SelectorChain::new(&[Strategy::Attr("a.s-item__link", &["href"])]));

static IMAGE_CHAIN: LazyLock<SelectorChain> =
    LazyLock::new(|| SelectorChain::new(&[Strategy::Attr("img", &["src", "data-src"])]));

static SOLD_COUNT_CHAIN: LazyLock<SelectorChain> =
    LazyLock::new(|| SelectorChain::new(&[Strategy::Text("span.s-item__quantitySold")]));

/// Returns the fixed selector chain for a field.
pub fn chain_for(field: FieldId) -> &'static SelectorChain {
    match field {
        FieldId::Title => &TITLE_CHAIN,
        FieldId::Price => &PRICE_CHAIN,
        FieldId::Condition => &CONDITION_CHAIN,
        FieldId::Shipping => &SHIPPING_CHAIN,
        FieldId::Location => &LOCATION_CHAIN,
        FieldId::Url => &URL_CHAIN,
        FieldId::ImageUrl => &IMAGE_CHAIN,
        FieldId::SoldCount => &SOLD_COUNT_CHAIN,
    }
}
