//! Integration tests for pagination stop and delay policy.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use listing_harvest::fetch::{Fetch, FetchOutcome};
use listing_harvest::pagination::{DelayPolicy, PaginationController};
use listing_harvest::{BlockReason, FieldId, SearchRequest, SortOrder, StopReason};

/// Replays a fixed script of fetch outcomes.
struct ScriptedFetcher {
    outcomes: Mutex<Vec<FetchOutcome>>,
}

impl ScriptedFetcher {
    fn new(outcomes: Vec<FetchOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes),
        }
    }
}

#[async_trait]
impl Fetch for ScriptedFetcher {
    async fn fetch(&self, _url: &str) -> FetchOutcome {
        self.outcomes.lock().unwrap().remove(0)
    }
}

/// Zero-length delay that counts how often it was consulted.
#[derive(Clone, Default)]
struct CountingDelay {
    calls: Arc<AtomicU32>,
}

impl DelayPolicy for CountingDelay {
    fn next_delay(&self) -> Duration {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Duration::ZERO
    }
}

fn request(max_pages: u32) -> SearchRequest {
    SearchRequest::new(
        "laptop",
        SortOrder::BestMatch,
        None,
        None,
        max_pages,
        FieldId::all(),
    )
    .unwrap()
}

fn listing_page(title: &str) -> FetchOutcome {
    FetchOutcome::Success(format!(
        r#"<html><body><ul>
            <li class="s-item"><div class="s-item__title">{title}</div>
            <span class="s-item__price">$10.00</span></li>
        </ul></body></html>"#
    ))
}

#[tokio::test]
async fn delay_applies_between_successful_fetches_only() {
    let fetcher = ScriptedFetcher::new(vec![
        listing_page("A"),
        listing_page("B"),
        listing_page("C"),
    ]);
    let delay = CountingDelay::default();
    let calls = delay.calls.clone();

    let controller = PaginationController::new(fetcher, delay, false);
    let result = controller.run(&request(3)).await;

    assert_eq!(result.pages_fetched, 3);
    // Three fetches, two gaps: the delay runs before pages 2 and 3, never
    // before page 1.
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn no_delay_is_consulted_when_the_first_page_stops_the_run() {
    let fetcher = ScriptedFetcher::new(vec![FetchOutcome::Blocked(BlockReason::Forbidden)]);
    let delay = CountingDelay::default();
    let calls = delay.calls.clone();

    let controller = PaginationController::new(fetcher, delay, false);
    let result = controller.run(&request(5)).await;

    assert_eq!(result.pages_fetched, 1);
    assert_eq!(
        result.stop_reason,
        Some(StopReason::Blocked(BlockReason::Forbidden))
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn records_accumulate_across_pages_in_order() {
    let fetcher = ScriptedFetcher::new(vec![listing_page("First"), listing_page("Second")]);
    let controller = PaginationController::new(fetcher, CountingDelay::default(), false);
    let result = controller.run(&request(2)).await;

    let titles: Vec<_> = result
        .records
        .iter()
        .map(|r| r.get(FieldId::Title).unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);
    assert!(!result.stopped_early);
}
