use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::domain::Candidate;

const TEXT_SEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/textsearch/json";
const DETAILS_URL: &str = "https://maps.googleapis.com/maps/api/place/details/json";
const PLACE_DETAIL_FIELDS: &str = "place_id,name,website,formatted_phone_number";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiStatus {
    Ok,
    ZeroResults,
    InvalidRequest,
    OverQueryLimit,
    RequestDenied,
    NotFound,
    UnknownError,
    #[serde(other)]
    Unrecognized,
}

impl ApiStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiStatus::Ok | ApiStatus::ZeroResults)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextSearchResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub results: Vec<Candidate>,
    pub next_page_token: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetailsResponse {
    pub status: ApiStatus,
    pub result: Option<DetailsResult>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailsResult {
    pub name: Option<String>,
    pub website: Option<String>,
    pub formatted_phone_number: Option<String>,
}

/// Read-only view of the place search and details endpoints.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    async fn text_search(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> anyhow::Result<TextSearchResponse>;

    async fn place_details(&self, place_id: &str) -> anyhow::Result<DetailsResponse>;
}

#[derive(Serialize)]
struct TextSearchQuery<'a> {
    query: &'a str,
    key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagetoken: Option<&'a str>,
}

#[derive(Serialize)]
struct DetailsQuery<'a> {
    place_id: &'a str,
    key: &'a str,
    fields: &'a str,
}

pub struct PlacesClient {
    client: Client,
    api_key: String,
}

impl PlacesClient {
    pub fn new(api_key: String) -> Self {
        PlacesClient {
            client: Client::new(),
            api_key,
        }
    }

    async fn get_json<Q: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        query: &Q,
    ) -> anyhow::Result<T> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl PlacesApi for PlacesClient {
    async fn text_search(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> anyhow::Result<TextSearchResponse> {
        let params = TextSearchQuery {
            query,
            key: &self.api_key,
            pagetoken: page_token,
        };
        self.get_json(TEXT_SEARCH_URL, &params).await
    }

    async fn place_details(&self, place_id: &str) -> anyhow::Result<DetailsResponse> {
        let params = DetailsQuery {
            place_id,
            key: &self.api_key,
            fields: PLACE_DETAIL_FIELDS,
        };
        self.get_json(DETAILS_URL, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiStatus, DetailsResponse, TextSearchResponse};

    #[test]
    fn text_search_response_decodes_results_and_token() {
        let body = r#"{
            "html_attributions": [],
            "next_page_token": "AcJnMuF",
            "results": [
                {"place_id": "ChIJ1", "name": "Rideau Plumbing", "rating": 4.7},
                {"name": "No Id Drains"}
            ],
            "status": "OK"
        }"#;

        let response: TextSearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.status, ApiStatus::Ok);
        assert_eq!(response.next_page_token.as_deref(), Some("AcJnMuF"));
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].place_id.as_deref(), Some("ChIJ1"));
        assert_eq!(response.results[1].place_id, None);
    }

    #[test]
    fn zero_results_without_result_list_decodes() {
        let response: TextSearchResponse =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS"}"#).unwrap();

        assert!(response.status.is_success());
        assert!(response.results.is_empty());
    }

    #[test]
    fn unknown_status_is_not_success() {
        let response: DetailsResponse = serde_json::from_str(
            r#"{"status": "SOMETHING_NEW", "error_message": "try later"}"#,
        )
        .unwrap();

        assert_eq!(response.status, ApiStatus::Unrecognized);
        assert!(!response.status.is_success());
        assert!(response.result.is_none());
    }

    #[test]
    fn details_response_decodes_requested_fields() {
        let body = r#"{
            "result": {
                "formatted_phone_number": "(613) 555-0117",
                "name": "Rideau Plumbing",
                "place_id": "ChIJ1",
                "website": "https://rideauplumbing.ca/"
            },
            "status": "OK"
        }"#;

        let response: DetailsResponse = serde_json::from_str(body).unwrap();
        let result = response.result.unwrap();

        assert_eq!(result.name.as_deref(), Some("Rideau Plumbing"));
        assert_eq!(result.website.as_deref(), Some("https://rideauplumbing.ca/"));
        assert_eq!(result.formatted_phone_number.as_deref(), Some("(613) 555-0117"));
    }
}
