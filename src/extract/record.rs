//! Record extraction from a single listing node.
//!
//! Applies the requested selector chains to one listing node and produces a
//! [`Record`], or rejects the node. Rejection is the mechanism that filters
//! sponsored banners and decorative nodes out of the result set without a
//! separate classifier: those nodes either carry a known placeholder title or
//! match no selector at all.

use std::collections::BTreeSet;

use chrono::Utc;
use scraper::ElementRef;

use crate::extract::chains::chain_for;
use crate::models::{FieldId, Record};

/// Title texts that mark a node as a non-product placeholder.
///
/// "Shop on eBay" is the promotional banner card; "New Listing" is the badge
/// the site sometimes renders as a bare heading. Either one means the node is
/// not a real listing and the whole node is rejected.
pub const TITLE_REJECTIONS: &[&str] = &["Shop on eBay", "New Listing", ""];

/// Extracts the requested fields from one listing node.
///
/// Returns `None` when the node is rejected:
/// - the title is requested but missing, or matches [`TITLE_REJECTIONS`]
/// - no requested field matched at all (a degenerate node)
///
/// Every other requested field degrades to its sentinel value on a selector
/// miss; partial data is acceptable, a missing title is not. Pure function of
/// the node and field set aside from the `scraped_at` timestamp.
pub fn extract_record(node: ElementRef<'_>, fields: &BTreeSet<FieldId>) -> Option<Record> {
    let mut values = std::collections::BTreeMap::new();

    if fields.contains(&FieldId::Title) {
        match chain_for(FieldId::Title).locate(node) {
            Some(title) if !TITLE_REJECTIONS.contains(&title.as_str()) => {
                values.insert(FieldId::Title, title);
            }
            _ => {
                log::debug!("Rejected listing node: missing or placeholder title");
                return None;
            }
        }
    }

    for &field in fields.iter().filter(|&&f| f != FieldId::Title) {
        let value = chain_for(field)
            .locate(node)
            .unwrap_or_else(|| field.sentinel().to_string());
        values.insert(field, value);
    }

    // A record carrying nothing but the timestamp is a failed extraction.
    if values.is_empty() {
        return None;
    }

    Some(Record {
        values,
        scraped_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn parse_page(inner: &str) -> Html {
        Html::parse_document(&format!("<html><body><ul>{inner}</ul></body></html>"))
    }

    fn first_item(document: &Html) -> ElementRef<'_> {
        let selector = Selector::parse("li.s-item").unwrap();
        document.select(&selector).next().unwrap()
    }

    fn fields(ids: &[FieldId]) -> BTreeSet<FieldId> {
        ids.iter().copied().collect()
    }

    const FULL_ITEM: &str = r#"<li class="s-item">
        <div class="s-item__title">Dell XPS 13</div>
        <span class="s-item__price">$499.99</span>
        <span class="SECONDARY_INFO">Pre-Owned</span>
        <span class="s-item__shipping">Free shipping</span>
        <a class="s-item__link" href="https://example.com/itm/42">link</a>
    </li>"#;

    #[test]
    fn extracts_requested_fields_only() {
        let html = parse_page(FULL_ITEM);
        let record = extract_record(
            first_item(&html),
            &fields(&[FieldId::Title, FieldId::Price]),
        )
        .unwrap();
        assert_eq!(record.get(FieldId::Title), Some("Dell XPS 13"));
        assert_eq!(record.get(FieldId::Price), Some("$499.99"));
        assert_eq!(record.get(FieldId::Condition), None);
        assert_eq!(record.values.len(), 2);
    }

    #[test]
    fn placeholder_titles_reject_the_whole_node() {
        for placeholder in ["Shop on eBay", "New Listing"] {
            let html = parse_page(&format!(
                r#"<li class="s-item">
                    <div class="s-item__title">{placeholder}</div>
                    <span class="s-item__price">$10.00</span>
                </li>"#
            ));
            assert_eq!(
                extract_record(
                    first_item(&html),
                    &fields(&[FieldId::Title, FieldId::Price])
                ),
                None,
                "{placeholder:?} should reject the node despite other fields being present"
            );
        }
    }

    #[test]
    fn missing_title_rejects_the_node() {
        let html = parse_page(
            r#"<li class="s-item"><span class="s-item__price">$10.00</span></li>"#,
        );
        assert_eq!(
            extract_record(
                first_item(&html),
                &fields(&[FieldId::Title, FieldId::Price])
            ),
            None
        );
    }

    #[test]
    fn missing_optional_fields_degrade_to_sentinels() {
        let html = parse_page(
            r#"<li class="s-item"><div class="s-item__title">Dell XPS 13</div></li>"#,
        );
        let record = extract_record(
            first_item(&html),
            &fields(&[
                FieldId::Title,
                FieldId::Shipping,
                FieldId::SoldCount,
            ]),
        )
        .unwrap();
        assert_eq!(record.get(FieldId::Shipping), Some("N/A"));
        assert_eq!(record.get(FieldId::SoldCount), Some("0"));
    }

    #[test]
    fn title_only_request_is_a_valid_record() {
        let html = parse_page(FULL_ITEM);
        let record = extract_record(first_item(&html), &fields(&[FieldId::Title])).unwrap();
        assert_eq!(record.values.len(), 1);
    }

    #[test]
    fn never_panics_on_arbitrary_markup() {
        // Degenerate nodes either yield a record with at least one field or
        // nothing at all.
        for markup in [
            r#"<li class="s-item"></li>"#,
            r#"<li class="s-item"><span></span></li>"#,
            r#"<li class="s-item"><img></li>"#,
        ] {
            let html = parse_page(markup);
            let outcome = extract_record(first_item(&html), &FieldId::all());
            assert!(outcome.is_none() || !outcome.unwrap().values.is_empty());
        }
    }
}
