use std::collections::HashSet;

use super::place::{Candidate, OutputRecord, PlaceDetail, SearchQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InclusionPolicy {
    KeepWithoutWebsite,
    RequireWebsite,
}

impl From<bool> for InclusionPolicy {
    fn from(site_inclusion: bool) -> Self {
        match site_inclusion {
            true => InclusionPolicy::KeepWithoutWebsite,
            false => InclusionPolicy::RequireWebsite,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    MissingPlaceId,
    DuplicatePlace,
    MissingName,
    MissingWebsite,
    DuplicateNameCity,
}

/// Run-scoped dedup keys. Both sets only ever grow.
#[derive(Debug, Default)]
pub struct DedupState {
    seen_place_ids: HashSet<String>,
    seen_name_city: HashSet<(String, String)>,
}

impl DedupState {
    pub fn new() -> Self {
        DedupState::default()
    }

    /// Must run before the detail lookup so seen places are never fetched twice.
    pub fn screen<'a>(&self, candidate: &'a Candidate) -> Result<&'a str, SkipReason> {
        match candidate.place_id.as_deref() {
            None | Some("") => Err(SkipReason::MissingPlaceId),
            Some(place_id) if self.seen_place_ids.contains(place_id) => {
                Err(SkipReason::DuplicatePlace)
            }
            Some(place_id) => Ok(place_id),
        }
    }

    pub fn admit(
        &mut self,
        place_id: &str,
        candidate: &Candidate,
        detail: PlaceDetail,
        query: &SearchQuery,
        policy: InclusionPolicy,
    ) -> Result<OutputRecord, SkipReason> {
        if self.seen_place_ids.contains(place_id) {
            return Err(SkipReason::DuplicatePlace);
        }

        let name = detail
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(candidate.name.as_deref())
            .unwrap_or_default()
            .trim();
        if name.is_empty() {
            return Err(SkipReason::MissingName);
        }

        let website = detail.website.as_deref().unwrap_or_default();
        if website.is_empty() && policy == InclusionPolicy::RequireWebsite {
            return Err(SkipReason::MissingWebsite);
        }

        let name_city = (name.to_string(), query.city.clone());
        if self.seen_name_city.contains(&name_city) {
            return Err(SkipReason::DuplicateNameCity);
        }

        self.seen_place_ids.insert(place_id.to_string());
        self.seen_name_city.insert(name_city);

        let phone = detail.phone.as_deref().unwrap_or_default();
        Ok(OutputRecord::new(name, website, phone, query))
    }

    pub fn accepted(&self) -> usize {
        self.seen_place_ids.len()
    }
}
