use url::Url;

use crate::validation::{non_blank, validate_bus_count, validate_time_frame};
use crate::Error;

use super::{common::append, Query};

/// Filters for the `stops/{stopNo}/estimates` resource.
///
/// Omitted values are left out of the URL; the API then applies its own
/// defaults of 6 buses over 120 minutes.
#[derive(Clone, Debug, Default)]
pub struct EstimatesQuery {
    /// Buses per route, 1 to 10.
    pub count: Option<i64>,
    /// Look-ahead window in minutes, 1 to 120. Sent as `timeframe`.
    pub time_frame_min: Option<i64>,
    pub route_no: Option<String>,
}

impl Query for EstimatesQuery {
    fn add_to_url(&self, url: &Url) -> Result<Url, Error> {
        let count = validate_bus_count(self.count)?;
        let time_frame = validate_time_frame(self.time_frame_min)?;

        let mut url = url.clone();
        if let Some(count) = count {
            append(&mut url, "count", count);
        }
        if let Some(time_frame) = time_frame {
            append(&mut url, "timeframe", time_frame);
        }
        if let Some(route_no) = non_blank(self.route_no.as_deref()) {
            append(&mut url, "routeNo", route_no);
        }
        Ok(url)
    }
}

impl EstimatesQuery {
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_time_frame(mut self, minutes: i64) -> Self {
        self.time_frame_min = Some(minutes);
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

    use crate::query::{EstimatesQuery, Query};

    fn base() -> Url {
        Url::parse("https://example.com/stops/12345/estimates?apikey=KEY").unwrap()
    }

    #[test]
    fn test_estimates_query() {
        insta::assert_snapshot!(
            EstimatesQuery::default()
                .with_count(5)
                .with_time_frame(60)
                .with_route_no("099")
                .add_to_url(&base())
                .unwrap()
                .to_string(),
            @"https://example.com/stops/12345/estimates?apikey=KEY&count=5&timeframe=60&routeNo=099"
        );
    }

    #[test]
    fn defaults_are_not_sent() {
        let url = EstimatesQuery::default().add_to_url(&base()).unwrap();
        assert_eq!(url.query(), Some("apikey=KEY"));
    }

    #[test]
    fn count_out_of_range() {
        let err = EstimatesQuery::default()
            .with_count(15)
            .add_to_url(&base())
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("between 1 and 10"));
    }

    #[test]
    fn time_frame_out_of_range() {
        let err = EstimatesQuery::default()
            .with_count(5)
            .with_time_frame(0)
            .add_to_url(&base())
            .unwrap_err();
        assert!(err.to_string().contains("between 1 and 120"));
    }
}
