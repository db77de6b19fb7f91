// Scripted PlacesApi for tests. Pages for a query are chained with tokens
// "token-1", "token-2", ... in the order they were scripted.

use std::{collections::HashMap, sync::Mutex};

use anyhow::anyhow;
use async_trait::async_trait;

use crate::domain::Candidate;

use super::{ApiStatus, DetailsResponse, DetailsResult, PlacesApi, TextSearchResponse};

enum Scripted<T> {
    Reply(T),
    Fail(String),
}

#[derive(Default)]
pub struct FakePlacesApi {
    searches: HashMap<String, Vec<Scripted<TextSearchResponse>>>,
    details: HashMap<String, Scripted<DetailsResponse>>,
    search_calls: Mutex<Vec<(String, Option<String>)>>,
    detail_calls: Mutex<Vec<String>>,
}

impl FakePlacesApi {
    pub fn new() -> Self {
        FakePlacesApi::default()
    }

    pub fn with_search(mut self, query: &str, pages: Vec<TextSearchResponse>) -> Self {
        let scripted = self.searches.entry(query.to_string()).or_default();
        scripted.extend(pages.into_iter().map(Scripted::Reply));
        self
    }

    pub fn with_failed_page(mut self, query: &str, error: &str) -> Self {
        self.searches
            .entry(query.to_string())
            .or_default()
            .push(Scripted::Fail(error.to_string()));
        self
    }

    pub fn with_details(mut self, place_id: &str, response: DetailsResponse) -> Self {
        self.details
            .insert(place_id.to_string(), Scripted::Reply(response));
        self
    }

    pub fn with_failed_details(mut self, place_id: &str, error: &str) -> Self {
        self.details
            .insert(place_id.to_string(), Scripted::Fail(error.to_string()));
        self
    }

    pub fn search_calls(&self) -> Vec<(String, Option<String>)> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlacesApi for FakePlacesApi {
    async fn text_search(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> anyhow::Result<TextSearchResponse> {
        self.search_calls
            .lock()
            .unwrap()
            .push((query.to_string(), page_token.map(|t| t.to_string())));

        let Some(pages) = self.searches.get(query) else {
            return Ok(status_page(ApiStatus::ZeroResults));
        };

        let index = match page_token {
            None => 0,
            Some(token) => match token
                .strip_prefix("token-")
                .and_then(|n| n.parse::<usize>().ok())
            {
                Some(index) => index,
                None => return Ok(status_page(ApiStatus::InvalidRequest)),
            },
        };

        match pages.get(index) {
            Some(Scripted::Reply(page)) => {
                let mut page = page.clone();
                if index + 1 < pages.len() {
                    page.next_page_token = Some(format!("token-{}", index + 1));
                }
                Ok(page)
            }
            Some(Scripted::Fail(error)) => Err(anyhow!(error.clone())),
            None => Ok(status_page(ApiStatus::InvalidRequest)),
        }
    }

    async fn place_details(&self, place_id: &str) -> anyhow::Result<DetailsResponse> {
        self.detail_calls.lock().unwrap().push(place_id.to_string());

        match self.details.get(place_id) {
            Some(Scripted::Reply(response)) => Ok(response.clone()),
            Some(Scripted::Fail(error)) => Err(anyhow!(error.clone())),
            None => Ok(DetailsResponse {
                status: ApiStatus::NotFound,
                result: None,
                error_message: None,
            }),
        }
    }
}

pub fn candidate(place_id: &str, name: &str) -> Candidate {
    Candidate {
        place_id: Some(place_id.to_string()),
        name: Some(name.to_string()),
    }
}

/// `count` candidates with ids `{prefix}-0`, `{prefix}-1`, ...
pub fn candidates(prefix: &str, count: usize) -> Vec<Candidate> {
    (0..count)
        .map(|i| candidate(&format!("{}-{}", prefix, i), &format!("{} business {}", prefix, i)))
        .collect()
}

pub fn page(results: Vec<Candidate>) -> TextSearchResponse {
    TextSearchResponse {
        status: ApiStatus::Ok,
        results,
        next_page_token: None,
        error_message: None,
    }
}

pub fn status_page(status: ApiStatus) -> TextSearchResponse {
    TextSearchResponse {
        status,
        results: vec![],
        next_page_token: None,
        error_message: None,
    }
}

pub fn details(name: &str, website: &str, phone: &str) -> DetailsResponse {
    let field = |value: &str| (!value.is_empty()).then(|| value.to_string());
    DetailsResponse {
        status: ApiStatus::Ok,
        result: Some(DetailsResult {
            name: field(name),
            website: field(website),
            formatted_phone_number: field(phone),
        }),
        error_message: None,
    }
}
