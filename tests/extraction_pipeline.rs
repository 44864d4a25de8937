//! End-to-end extraction over a realistic search-results page.

use std::collections::BTreeSet;

use listing_harvest::extract::extract_page;
use listing_harvest::FieldId;

/// A trimmed-down results page covering the markup variants the selector
/// chains are built for: a promotional banner node, a modern listing, a
/// legacy listing using the h3 title variant, and a lazy-loaded image.
const RESULTS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>laptop | Search Results</title></head>
<body>
<ul class="srp-results">
  <li class="s-item">
    <div class="s-item__title">Shop on eBay</div>
    <span class="s-item__price">$20.00</span>
  </li>
  <li class="s-item">
    <a class="s-item__link" href="https://www.example.com/itm/1001">
      <span role="heading">ThinkPad X1 Carbon Gen 9</span>
    </a>
    <img src="https://i.example.com/1001.jpg">
    <span class="s-item__price">$549.99</span>
    <span class="SECONDARY_INFO">Pre-Owned</span>
    <span class="s-item__shipping">Free shipping</span>
    <span class="s-item__location">from United States</span>
    <span class="s-item__quantitySold">37 sold</span>
  </li>
  <li class="s-item">
    <a class="s-item__link" href="https://www.example.com/itm/1002">
      <h3 class="s-item__title">MacBook Air M1</h3>
    </a>
    <img data-src="https://i.example.com/1002.jpg">
    <span class="s-item__price">$600.00 to $700.00</span>
    <span>Brand New</span>
  </li>
  <li class="s-item">
    <div class="s-item__ad-badge">decorative node with no product data</div>
  </li>
</ul>
</body>
</html>"#;

fn all_fields() -> BTreeSet<FieldId> {
    FieldId::all()
}

#[test]
fn banner_and_decorative_nodes_are_rejected() {
    let records = extract_page(RESULTS_PAGE, &all_fields());
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].get(FieldId::Title),
        Some("ThinkPad X1 Carbon Gen 9")
    );
    assert_eq!(records[1].get(FieldId::Title), Some("MacBook Air M1"));
}

#[test]
fn all_selector_variants_resolve_on_the_fixture() {
    let records = extract_page(RESULTS_PAGE, &all_fields());

    let modern = &records[0];
    assert_eq!(modern.get(FieldId::Price), Some("$549.99"));
    assert_eq!(modern.get(FieldId::Condition), Some("Pre-Owned"));
    assert_eq!(modern.get(FieldId::Shipping), Some("Free shipping"));
    assert_eq!(modern.get(FieldId::Location), Some("from United States"));
    assert_eq!(
        modern.get(FieldId::Url),
        Some("https://www.example.com/itm/1001")
    );
    assert_eq!(
        modern.get(FieldId::ImageUrl),
        Some("https://i.example.com/1001.jpg")
    );
    assert_eq!(modern.get(FieldId::SoldCount), Some("37 sold"));

    let legacy = &records[1];
    // h3 title variant, lazy-loaded image, marker-text condition, and the
    // sentinel defaults for fields this node does not carry.
    assert_eq!(
        legacy.get(FieldId::ImageUrl),
        Some("https://i.example.com/1002.jpg")
    );
    assert_eq!(legacy.get(FieldId::Condition), Some("Brand New"));
    assert_eq!(legacy.get(FieldId::Shipping), Some("N/A"));
    assert_eq!(legacy.get(FieldId::Location), Some("N/A"));
    assert_eq!(legacy.get(FieldId::SoldCount), Some("0"));
}

#[test]
fn unselected_fields_are_never_computed() {
    let fields: BTreeSet<FieldId> = [FieldId::Title, FieldId::Price].into_iter().collect();
    let records = extract_page(RESULTS_PAGE, &fields);
    for record in &records {
        assert_eq!(record.values.len(), 2);
        assert!(record.get(FieldId::Condition).is_none());
        assert!(record.get(FieldId::Url).is_none());
    }
}

#[test]
fn every_record_carries_a_timestamp_and_a_title() {
    let records = extract_page(RESULTS_PAGE, &all_fields());
    for record in &records {
        assert!(record.get(FieldId::Title).is_some());
        assert!(record.scraped_at <= chrono::Utc::now());
    }
}
