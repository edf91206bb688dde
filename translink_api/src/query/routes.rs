use url::Url;

use crate::validation::validate_stop_no;
use crate::Error;

use super::{common::append, Query};

/// Filters for the `routes` resource.
#[derive(Clone, Debug, Default)]
pub struct RoutesQuery {
    /// Only routes serving this stop. Must be a five-digit stop number; 0 means no filter.
    pub stop_no: Option<u32>,
}

impl Query for RoutesQuery {
    fn add_to_url(&self, url: &Url) -> Result<Url, Error> {
        let mut url = url.clone();
        if let Some(stop_no) = self.stop_no.filter(|n| *n != 0) {
            append(&mut url, "stopNo", validate_stop_no(i64::from(stop_no))?);
        }
        Ok(url)
    }
}

impl RoutesQuery {
    pub fn with_stop_no(mut self, stop_no: u32) -> Self {
        self.stop_no = Some(stop_no);
        self
    }
}
