use super::*;
use crate::pagination::types::BoxError;
use futures::StreamExt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// In-memory listing that records every (page, limit) request
struct MockListing {
    items: Vec<u32>,
    calls: Arc<tokio::sync::Mutex<Vec<(usize, usize)>>>,
    fail_on_page: Option<usize>,
}

impl MockListing {
    fn new(count: u32) -> Self {
        MockListing {
            items: (1..=count).collect(),
            calls: Arc::new(tokio::sync::Mutex::new(Vec::new())),
            fail_on_page: None,
        }
    }
}

#[async_trait::async_trait]
impl PageFetcher<u32> for MockListing {
    async fn fetch_page(&self, page: usize, limit: usize) -> Result<Vec<u32>, BoxError> {
        self.calls.lock().await.push((page, limit));
        if self.fail_on_page == Some(page) {
            return Err("listing unavailable".into());
        }
        let start = ((page - 1) * limit).min(self.items.len());
        let end = (start + limit).min(self.items.len());
        Ok(self.items[start..end].to_vec())
    }
}

#[tokio::test]
async fn test_twelve_items_in_pages_of_five() {
    let listing = MockListing::new(12);
    let calls = Arc::clone(&listing.calls);
    let pages = Paginated::new(listing, &PageConfig::new(5, 1)).unwrap();

    let items: Vec<u32> = pages
        .into_stream()
        .map(|item| item.unwrap())
        .collect()
        .await;

    assert_eq!(items, (1..=12).collect::<Vec<_>>());
    assert_eq!(*calls.lock().await, vec![(1, 5), (2, 5), (3, 5)]);
}

#[tokio::test]
async fn test_exact_multiple_needs_one_empty_page() {
    let listing = MockListing::new(10);
    let calls = Arc::clone(&listing.calls);
    let pages = Paginated::new(listing, &PageConfig::new(5, 1)).unwrap();

    let items: Vec<u32> = pages
        .into_stream()
        .map(|item| item.unwrap())
        .collect()
        .await;

    assert_eq!(items.len(), 10);
    assert_eq!(calls.lock().await.len(), 3);
}

#[tokio::test]
async fn test_item_count_and_fetch_count_across_sizes() {
    for total in [0u32, 1, 4, 7, 20, 23] {
        for page_size in [1usize, 3, 5, 8] {
            let listing = MockListing::new(total);
            let mut pages = Paginated::new(listing, &PageConfig::new(page_size, 1)).unwrap();

            let mut count = 0;
            while let Some(item) = pages.next_item().await {
                item.unwrap();
                count += 1;
            }

            assert_eq!(count, total as usize);
            // a full last page is followed by one empty page
            let expected_fetches = total as usize / page_size + 1;
            assert_eq!(pages.pages_fetched(), expected_fetches);
        }
    }
}

#[tokio::test]
async fn test_empty_listing_yields_nothing() {
    let listing = MockListing::new(0);
    let pages = Paginated::new(listing, &PageConfig::default()).unwrap();

    let items: Vec<_> = pages.into_stream().collect().await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_start_page_skips_earlier_pages() {
    let listing = MockListing::new(12);
    let calls = Arc::clone(&listing.calls);
    let config = PageConfigBuilder::default()
        .page_size(5usize)
        .start_page(2usize)
        .build()
        .unwrap();
    let pages = Paginated::new(listing, &config).unwrap();

    let items: Vec<u32> = pages
        .into_stream()
        .map(|item| item.unwrap())
        .collect()
        .await;

    assert_eq!(items, (6..=12).collect::<Vec<_>>());
    assert_eq!(*calls.lock().await, vec![(2, 5), (3, 5)]);
}

#[tokio::test]
async fn test_fetch_error_terminates_sequence() {
    let mut listing = MockListing::new(20);
    listing.fail_on_page = Some(2);
    let mut pages = Paginated::new(listing, &PageConfig::new(5, 1)).unwrap();

    for expected in 1..=5 {
        assert_eq!(pages.next_item().await.unwrap().unwrap(), expected);
    }

    match pages.next_item().await {
        Some(Err(PaginationError::Fetch { page, source })) => {
            assert_eq!(page, 2);
            assert_eq!(source.to_string(), "listing unavailable");
        }
        _ => panic!("Expected fetch error"),
    }

    assert!(pages.next_item().await.is_none());
    assert_eq!(pages.pages_fetched(), 2);
}

#[tokio::test]
async fn test_next_page_fetched_only_when_buffer_drained() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fetches);
    let fetcher = move |page: usize, limit: usize| {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            let start = (page - 1) * limit;
            Ok::<_, BoxError>((start..start + limit).map(|i| i as u32).collect::<Vec<_>>())
        }
    };
    let mut pages = Paginated::new(fetcher, &PageConfig::new(3, 1)).unwrap();

    assert_eq!(fetches.load(Ordering::SeqCst), 0);

    for _ in 0..3 {
        pages.next_item().await.unwrap().unwrap();
    }
    assert_eq!(fetches.load(Ordering::SeqCst), 1);

    pages.next_item().await.unwrap().unwrap();
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
}
