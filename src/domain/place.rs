use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub industry: String,
    pub city: String,
}

impl SearchQuery {
    pub fn new(industry: &str, city: &str) -> Self {
        SearchQuery {
            industry: industry.to_string(),
            city: city.to_string(),
        }
    }

    /// Free-text query sent to the text search endpoint.
    pub fn text(&self) -> String {
        format!("{} in {}", self.industry, self.city)
    }
}

/// Raw search result entry, before detail enrichment.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Candidate {
    pub place_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaceDetail {
    pub name: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
}

impl PlaceDetail {
    pub fn empty() -> Self {
        PlaceDetail::default()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.website.is_none() && self.phone.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    pub site_url: String,
    pub business_name: String,
    pub industry: String,
    pub company_name: String,
    pub city: String,
    pub phone_number: String,
}

impl OutputRecord {
    pub fn new(name: &str, website: &str, phone: &str, query: &SearchQuery) -> Self {
        OutputRecord {
            site_url: website.to_string(),
            business_name: name.to_string(),
            industry: query.industry.clone(),
            company_name: name.to_string(),
            city: query.city.clone(),
            phone_number: phone.to_string(),
        }
    }
}
