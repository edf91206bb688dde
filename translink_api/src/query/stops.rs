use url::Url;

use crate::validation::{non_blank, validate_lat_and_long, validate_radius};
use crate::Error;

use super::{common::append, Query};

/// Filters for the `stops` resource.
///
/// `radius` and `route_no` only make sense around a point, so both require
/// a valid `lat`/`long` pair.
#[derive(Clone, Debug, Default)]
pub struct StopsQuery {
    pub lat: Option<f64>,
    pub long: Option<f64>,
    /// Search radius in metres, 1 to 2000.
    pub radius: Option<i64>,
    pub route_no: Option<String>,
}

impl Query for StopsQuery {
    fn add_to_url(&self, url: &Url) -> Result<Url, Error> {
        let mut url = url.clone();
        let coordinates = validate_lat_and_long(self.lat, self.long)?;

        if let Some((lat, long)) = coordinates {
            append(&mut url, "lat", lat);
            append(&mut url, "long", long);
        }

        if let Some(radius) = self.radius {
            if coordinates.is_none() {
                return Err(Error::validation(
                    "You must specify a latitude and longitude if you specify a radius.",
                ));
            }
            append(&mut url, "radius", validate_radius(radius)?);
        }

        if let Some(route_no) = non_blank(self.route_no.as_deref()) {
            if coordinates.is_none() {
                return Err(Error::validation(
                    "You must specify a latitude and longitude if you specify a routeNo.",
                ));
            }
            append(&mut url, "routeNo", route_no);
        }

        Ok(url)
    }
}

impl StopsQuery {
    pub fn with_lat(mut self, lat: f64) -> Self {
        self.lat = Some(lat);
        self
    }

    pub fn with_long(mut self, long: f64) -> Self {
        self.long = Some(long);
        self
    }

    pub fn with_coordinates(self, lat: f64, long: f64) -> Self {
        self.with_lat(lat).with_long(long)
    }

    pub fn with_radius(mut self, radius: i64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_route_no(mut self, route_no: &str) -> Self {
        self.route_no = Some(route_no.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{Query, StopsQuery};

    fn base() -> Url {
        Url::parse("https://example.com/stops?apikey=KEY").unwrap()
    }

    #[test]
    fn test_stops_query() {
        insta::assert_snapshot!(
            StopsQuery::default()
                .with_coordinates(49.28, -123.12)
                .with_radius(500)
                .with_route_no("099")
                .add_to_url(&base())
                .unwrap()
                .to_string(),
            @"https://example.com/stops?apikey=KEY&lat=49.28&long=-123.12&radius=500&routeNo=099"
        );

        insta::assert_snapshot!(
            StopsQuery::default().add_to_url(&base()).unwrap().to_string(),
            @"https://example.com/stops?apikey=KEY"
        );
    }

    #[test]
    fn radius_requires_coordinates() {
        let err = StopsQuery::default()
            .with_radius(500)
            .add_to_url(&base())
            .unwrap_err();
        assert!(err.to_string().contains("latitude and longitude"));
        assert!(err.to_string().contains("radius"));

        // Coordinates are checked before the radius range.
        let err = StopsQuery::default()
            .with_radius(99_999)
            .add_to_url(&base())
            .unwrap_err();
        assert!(err.to_string().contains("latitude and longitude"));
    }

    #[test]
    fn radius_out_of_range() {
        let err = StopsQuery::default()
            .with_coordinates(49.28, -123.12)
            .with_radius(2001)
            .add_to_url(&base())
            .unwrap_err();
        assert!(err.to_string().contains("between 1 and 2000"));
    }

    #[test]
    fn route_requires_coordinates() {
        let err = StopsQuery::default()
            .with_route_no("099")
            .add_to_url(&base())
            .unwrap_err();
        assert!(err.to_string().contains("routeNo"));
    }

    #[test]
    fn blank_route_is_omitted() {
        let url = StopsQuery::default()
            .with_route_no("   ")
            .add_to_url(&base())
            .unwrap();
        assert_eq!(url.query(), Some("apikey=KEY"));
    }

    #[test]
    fn half_specified_coordinates_fail() {
        assert!(StopsQuery::default()
            .with_lat(49.28)
            .add_to_url(&base())
            .unwrap_err()
            .is_validation());
    }
}
