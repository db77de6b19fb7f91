use crate::domain::PlaceDetail;

use super::{ApiStatus, PlacesApi};

/// Never fails: any transport, decode or status error yields an empty detail.
pub async fn resolve_place_detail<A: PlacesApi + ?Sized>(api: &A, place_id: &str) -> PlaceDetail {
    match api.place_details(place_id).await {
        Ok(response) => match (response.status, response.result) {
            (ApiStatus::Ok, Some(result)) => PlaceDetail {
                name: result.name,
                website: result.website,
                phone: result.formatted_phone_number,
            },
            (ApiStatus::Ok, None) => {
                log::warn!("Details for place_id={} came back without a result", place_id);
                PlaceDetail::empty()
            }
            (status, _) => {
                log::warn!(
                    "No details found for place_id={} (status {:?}{})",
                    place_id,
                    status,
                    response
                        .error_message
                        .map(|m| format!(": {}", m))
                        .unwrap_or_default()
                );
                PlaceDetail::empty()
            }
        },
        Err(e) => {
            log::error!("Details request for place_id={} failed: {:?}", place_id, e);
            PlaceDetail::empty()
        }
    }
}
