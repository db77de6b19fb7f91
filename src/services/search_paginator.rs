use std::time::Duration;

use crate::domain::{Candidate, SearchQuery};

use super::{PlacesApi, RateLimiter};

/// Collects at most `max_results` candidates for one query, following continuation tokens.
/// Transport failures and non-success statuses end pagination without raising.
pub async fn search_places<A: PlacesApi + ?Sized>(
    api: &A,
    query: &SearchQuery,
    max_results: usize,
    pagination_delay: Duration,
) -> Vec<Candidate> {
    let text = query.text();
    // Tokens only become valid some time after the page that issued them.
    let mut pacer = RateLimiter::new(pagination_delay);
    let mut results: Vec<Candidate> = vec![];
    let mut next_page_token: Option<String> = None;
    let mut page_number = 0;

    while results.len() < max_results {
        if next_page_token.is_some() {
            pacer.until_ready().await;
        }
        page_number += 1;

        let response = api.text_search(&text, next_page_token.as_deref()).await;
        pacer.mark();

        let page = match response {
            Ok(page) => page,
            Err(e) => {
                log::error!("Search '{}' page {} failed: {:?}", text, page_number, e);
                break;
            }
        };

        if !page.status.is_success() {
            log::error!(
                "Search '{}' failed with status {:?}{}",
                text,
                page.status,
                page.error_message
                    .map(|m| format!(": {}", m))
                    .unwrap_or_default()
            );
            break;
        }

        log::debug!(
            "Search '{}' page {} returned {} results",
            text,
            page_number,
            page.results.len()
        );
        results.extend(page.results);

        match page.next_page_token {
            Some(token) if !token.is_empty() && results.len() < max_results => {
                next_page_token = Some(token)
            }
            _ => break,
        }
    }

    results.truncate(max_results);
    results
}
