use async_trait::async_trait;

use crate::{
    error::ProviderError,
    mock_data::{MOCK_STATIONS, MockStation, find_station},
    model::{City, Coordinates, Postcode, PostcodeLookup, UvReading},
};

use super::{ProviderId, UvProvider};

/// Postcode placeholder for cities that only exist in the snapshot.
const PLACEHOLDER_POSTCODE: &str = "0000";

/// Serves the bundled station snapshot. Postcode lookups only know the
/// Melbourne (3xxx) and Sydney (2xxx) ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockProvider;

impl MockProvider {
    fn city_of(station: &MockStation) -> City {
        City {
            name: station.city.to_string(),
            state: station.state.to_string(),
            postcode: PLACEHOLDER_POSTCODE.to_string(),
        }
    }

    fn postcode_city(postcode: &Postcode) -> Option<&'static str> {
        match postcode.as_str().as_bytes().first() {
            Some(b'3') => Some("Melbourne"),
            Some(b'2') => Some("Sydney"),
            _ => None,
        }
    }
}

#[async_trait]
impl UvProvider for MockProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Mock
    }

    async fn all_cities(&self) -> Result<Vec<City>, ProviderError> {
        Ok(MOCK_STATIONS.iter().map(Self::city_of).collect())
    }

    async fn search_cities(&self, name: &str) -> Result<Vec<City>, ProviderError> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        Ok(MOCK_STATIONS
            .iter()
            .filter(|s| s.city.to_lowercase().contains(&needle))
            .map(Self::city_of)
            .collect())
    }

    async fn all_readings(&self) -> Result<Vec<UvReading>, ProviderError> {
        Ok(MOCK_STATIONS.iter().map(MockStation::to_reading).collect())
    }

    async fn by_postcode(&self, postcode: &Postcode) -> Result<PostcodeLookup, ProviderError> {
        let station = Self::postcode_city(postcode)
            .and_then(find_station)
            .ok_or_else(|| {
                ProviderError::NotFound(format!("No city found for postcode {postcode}"))
            })?;

        Ok(PostcodeLookup {
            city: City {
                name: station.city.to_string(),
                state: station.state.to_string(),
                postcode: postcode.to_string(),
            },
            uv_index: Some(station.to_reading()),
            message: None,
        })
    }

    async fn by_coordinates(&self, at: Coordinates) -> Result<UvReading, ProviderError> {
        let (station, distance) = MOCK_STATIONS
            .iter()
            .map(|s| (s, at.planar_distance(s.latitude, s.longitude)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .ok_or_else(|| ProviderError::NotFound("No nearby city found".to_string()))?;

        Ok(UvReading {
            distance: Some(distance),
            ..station.to_reading()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_every_station_as_city() {
        let cities = MockProvider.all_cities().await.expect("mock never fails");
        assert_eq!(cities.len(), MOCK_STATIONS.len());
        assert!(cities.iter().all(|c| c.postcode == PLACEHOLDER_POSTCODE));
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let cities = MockProvider.search_cities("ISLAND").await.expect("mock never fails");
        let names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Macquarie Island"]);

        let cities = MockProvider.search_cities("in").await.expect("mock never fails");
        assert!(cities.iter().any(|c| c.name == "Kingston"));
        assert!(cities.iter().any(|c| c.name == "Darwin"));
    }

    #[tokio::test]
    async fn blank_search_returns_nothing() {
        assert!(MockProvider.search_cities("").await.expect("ok").is_empty());
    }

    #[tokio::test]
    async fn victorian_postcode_maps_to_melbourne() {
        let pc = Postcode::parse("3121").expect("valid");
        let lookup = MockProvider.by_postcode(&pc).await.expect("known range");

        assert_eq!(lookup.city.name, "Melbourne");
        assert_eq!(lookup.city.state, "VIC");
        assert_eq!(lookup.city.postcode, "3121");
        assert_eq!(lookup.uv_index.map(|r| r.city), Some("Melbourne".to_string()));
    }

    #[tokio::test]
    async fn nsw_postcode_maps_to_sydney() {
        let pc = Postcode::parse("2000").expect("valid");
        let lookup = MockProvider.by_postcode(&pc).await.expect("known range");
        assert_eq!(lookup.city.name, "Sydney");
        assert_eq!(lookup.city.state, "NSW");
    }

    #[tokio::test]
    async fn other_postcodes_are_not_found() {
        let pc = Postcode::parse("4000").expect("valid");
        let err = MockProvider.by_postcode(&pc).await.unwrap_err();
        assert!(matches!(err, ProviderError::NotFound(_)));
        assert!(err.to_string().contains("4000"));
    }

    #[tokio::test]
    async fn nearest_station_by_coordinates() {
        // Fremantle
        let at = Coordinates::new(-32.05, 115.74).expect("valid");
        let reading = MockProvider.by_coordinates(at).await.expect("mock never fails");

        assert_eq!(reading.city, "Perth");
        let distance = reading.distance.expect("distance reported");
        assert!(distance > 0.0 && distance < 0.2, "distance = {distance}");
    }

    #[tokio::test]
    async fn exact_station_location_has_zero_distance() {
        let at = Coordinates::new(-12.4634, 130.8456).expect("valid");
        let reading = MockProvider.by_coordinates(at).await.expect("mock never fails");
        assert_eq!(reading.city, "Darwin");
        assert_eq!(reading.distance, Some(0.0));
    }
}
