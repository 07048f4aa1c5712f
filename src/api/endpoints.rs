//! REST API endpoints for the TMS

use reqwest::Url;

use crate::error::{ApiError, ApiResult};

/// API endpoint paths
pub mod paths {
    // Authentication
    pub const OAUTH_TOKEN: &str = "/v1/oauth/token";

    // Shipments
    pub const SHIPMENTS: &str = "/v1/shipments";
    pub const SHIPMENTS_LIST: &str = "/v1/shipments/list";

    /// Static key sent alongside the bearer token on every call
    pub const API_KEY_HEADER: &str = "x-api-key";
}

/// Build URL for a single shipment by ID.
///
/// The id is always one percent-encoded path segment, so `/`, `?`, `#` and
/// `%` inside it never reach another endpoint. Dot segments are refused.
pub fn shipment_by_id(base_url: &str, shipment_id: &str) -> ApiResult<Url> {
    if matches!(shipment_id, "" | "." | "..") {
        return Err(ApiError::InvalidShipmentId(shipment_id.to_string()));
    }

    let raw = format!("{}{}", base_url.trim_end_matches('/'), paths::SHIPMENTS);
    let mut url =
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidUrl(format!("{}: cannot hold a path", raw)))?
        .push(shipment_id);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://tms.example.com";

    #[test]
    fn shipment_path_includes_id() {
        let url = shipment_by_id(BASE, "S-77").unwrap();
        assert_eq!(url.as_str(), "https://tms.example.com/v1/shipments/S-77");
    }

    #[test]
    fn query_characters_stay_in_the_id() {
        let url = shipment_by_id(BASE, "list?start=999#top").unwrap();
        assert_eq!(url.path(), "/v1/shipments/list%3Fstart=999%23top");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn slashes_and_dots_cannot_climb_out() {
        let url = shipment_by_id(BASE, "../oauth/token").unwrap();
        assert_eq!(url.path(), "/v1/shipments/..%2Foauth%2Ftoken");

        let url = shipment_by_id(BASE, "100%").unwrap();
        assert_eq!(url.path(), "/v1/shipments/100%25");
    }

    #[test]
    fn dot_segments_are_refused() {
        for id in ["", ".", ".."] {
            assert!(matches!(
                shipment_by_id(BASE, id),
                Err(ApiError::InvalidShipmentId(_))
            ));
        }
    }

    #[test]
    fn unparseable_base_is_invalid_url() {
        assert!(matches!(
            shipment_by_id("not a url", "S-1"),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
