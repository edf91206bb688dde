use url::Url;

use crate::validation::{non_blank, validate_stop_no};
use crate::Error;

use super::{common::append, Query};

/// Filters for the `buses` resource.
#[derive(Clone, Debug, Default)]
pub struct BusesQuery {
    /// Only buses serving this stop. Must be a five-digit stop number; 0 means no filter.
    pub stop_no: Option<u32>,
    pub route_no: Option<String>,
}

impl Query for BusesQuery {
    fn add_to_url(&self, url: &Url) -> Result<Url, Error> {
        let mut url = url.clone();
        if let Some(stop_no) = self.stop_no.filter(|n| *n != 0) {
            append(&mut url, "stopNo", validate_stop_no(i64::from(stop_no))?);
        }
        if let Some(route_no) = non_blank(self.route_no.as_deref()) {
            append(&mut url, "routeNo", route_no);
        }
        Ok(url)
    }
}

impl BusesQuery {
    pub fn with_stop_no(mut self, stop_no: u32) -> Self {
        self.stop_no = Some(stop_no);
        self
    }

    pub fn with_route_no(mut self, route_no: &str) -> Self {
        self.route_no = Some(route_no.to_string());
        self
    }
}
