//! HTTP client for the TransLink Real-Time Transit Information (RTTI) API.

use serde_json::Value;
use url::Url;

use crate::{
    query::{BusesQuery, EstimatesQuery, NoFilters, Query, RoutesQuery, StopsQuery},
    transport::{HttpResponse, HttpTransport},
    types::ApiErrorPayload,
    validation::{non_blank, validate_service_name, validate_stop_no},
    Error,
};

/// Production RTTI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.translink.ca/rttiapi/v1";

const API_KEY_PARAM: &str = "apikey";

/// HTTP client for the RTTI API.
///
/// Every operation validates its parameters, builds the request URL, sends
/// one GET request with `Accept: application/json` and returns the decoded
/// JSON body unchanged. The client holds no state besides its API key, so a
/// single instance can be shared freely.
#[derive(Clone)]
pub struct Client {
    api_key: String,
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: Url,
    transport: HttpTransport,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("base_api_url", &self.base_api_url.as_str())
            .field("transport", &self.transport)
            .finish()
    }
}

impl Client {
    /// Creates a new client pointing at the production RTTI API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Self::with_transport(base_url, api_key, HttpTransport::new()?)
    }

    /// Creates a new client that sends its requests through `transport`.
    pub fn with_transport(
        base_url: &str,
        api_key: &str,
        transport: HttpTransport,
    ) -> Result<Self, Error> {
        if api_key.trim().is_empty() {
            return Err(Error::validation("Please specify a Translink RTTI API key."));
        }

        let base_api_url = Url::parse(base_url)
            .map_err(|e| Error::validation(format!("Invalid base URL '{}': {}", base_url, e)))?;
        if base_api_url.cannot_be_a_base() {
            return Err(Error::validation(format!(
                "Invalid base URL '{}': cannot hold path segments",
                base_url
            )));
        }

        Ok(Self {
            api_key: api_key.to_string(),
            base_api_url,
            transport,
        })
    }

    /// Builds `<base>/<segments...>?apikey=<key>` followed by the query's filters.
    fn get_url<S, Q>(&self, segments: &[S], query: &Q) -> Result<Url, Error>
    where
        S: AsRef<str>,
        Q: Query,
    {
        let mut url = self.base_api_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::validation("Base URL cannot hold path segments"))?
            .pop_if_empty()
            .extend(segments);
        let url = self.append_api_key(url);
        query.add_to_url(&url)
    }

    fn append_api_key(&self, mut url: Url) -> Url {
        url.query_pairs_mut()
            .append_pair(API_KEY_PARAM, &self.api_key);
        url
    }

    /// URL for [`Client::get_stops`]. `None` or `Some(0)` searches by filters only.
    pub fn stops_url(&self, stop_no: Option<u32>, query: &StopsQuery) -> Result<Url, Error> {
        let mut segments = vec!["stops".to_string()];
        if let Some(stop_no) = stop_no.filter(|n| *n != 0) {
            segments.push(validate_stop_no(i64::from(stop_no))?.to_string());
        }
        self.get_url(&segments, query)
    }

    /// URL for [`Client::get_stop_estimates`].
    pub fn stop_estimates_url(&self, stop_no: u32, query: &EstimatesQuery) -> Result<Url, Error> {
        let stop_no = validate_stop_no(i64::from(stop_no))?.to_string();
        self.get_url(&["stops", stop_no.as_str(), "estimates"], query)
    }

    /// URL for [`Client::get_buses`]. Only a positive bus number becomes a path segment.
    pub fn buses_url(&self, bus_no: Option<u32>, query: &BusesQuery) -> Result<Url, Error> {
        let mut segments = vec!["buses".to_string()];
        if let Some(bus_no) = bus_no.filter(|n| *n > 0) {
            segments.push(bus_no.to_string());
        }
        self.get_url(&segments, query)
    }

    /// URL for [`Client::get_routes`]. A blank route number lists all routes.
    pub fn routes_url(&self, route_no: &str, query: &RoutesQuery) -> Result<Url, Error> {
        let mut segments = vec!["routes"];
        if let Some(route_no) = non_blank(Some(route_no)) {
            segments.push(route_no);
        }
        self.get_url(&segments, query)
    }

    /// URL for [`Client::get_status`].
    pub fn status_url(&self, service_name: &str) -> Result<Url, Error> {
        let service = validate_service_name(service_name)?;
        self.get_url(&["status", service.as_str()], &NoFilters)
    }

    /// Fetches stop information, either for one stop or for stops around a point.
    pub async fn get_stops(&self, stop_no: Option<u32>, query: &StopsQuery) -> Result<Value, Error> {
        let url = self.stops_url(stop_no, query)?;
        self.get_response(url).await
    }

    /// Fetches arrival estimates for a stop.
    pub async fn get_stop_estimates(
        &self,
        stop_no: u32,
        query: &EstimatesQuery,
    ) -> Result<Value, Error> {
        let url = self.stop_estimates_url(stop_no, query)?;
        self.get_response(url).await
    }

    /// Fetches real-time bus positions, either for one bus or filtered by stop and route.
    pub async fn get_buses(&self, bus_no: Option<u32>, query: &BusesQuery) -> Result<Value, Error> {
        let url = self.buses_url(bus_no, query)?;
        self.get_response(url).await
    }

    /// Fetches route information.
    pub async fn get_routes(&self, route_no: &str, query: &RoutesQuery) -> Result<Value, Error> {
        let url = self.routes_url(route_no, query)?;
        self.get_response(url).await
    }

    /// Fetches the operational status of `location`, `schedule` or `all` services.
    pub async fn get_status(&self, service_name: &str) -> Result<Value, Error> {
        let url = self.status_url(service_name)?;
        self.get_response(url).await
    }

    async fn get_response(&self, url: Url) -> Result<Value, Error> {
        tracing::debug!("GET {}", redact_api_key(&url));
        let resp = self
            .transport
            .get(url.as_str(), &[("Accept", "application/json")], true)
            .await?;
        decode_response(resp)
    }
}

/// Decodes a response body, turning API error payloads into [`Error::Api`].
///
/// The error payload check runs regardless of status code since the API
/// pairs its error payloads with 4xx statuses.
fn decode_response(resp: HttpResponse) -> Result<Value, Error> {
    if resp.is_success() && resp.body.trim().is_empty() {
        return Ok(Value::Null);
    }

    let parsed = serde_json::from_str::<Value>(&resp.body);

    let value = match parsed {
        Ok(value) => value,
        Err(e) if resp.is_success() => {
            tracing::error!(
                "Failed to parse response: {} | body: {}",
                e,
                truncate_body(&resp.body)
            );
            return Err(Error::Parse(e.to_string()));
        }
        Err(_) => return Err(http_status_error(&resp)),
    };

    if let Some(payload) = ApiErrorPayload::from_value(&value) {
        tracing::warn!(
            "API returned error {}: {}",
            payload.code,
            payload.message.as_deref().unwrap_or_default()
        );
        return Err(payload.into());
    }

    if !resp.is_success() {
        return Err(http_status_error(&resp));
    }

    Ok(value)
}

fn http_status_error(resp: &HttpResponse) -> Error {
    let snippet = truncate_body(&resp.body);
    tracing::warn!("Request failed with status {}: {}", resp.status_code, snippet);
    Error::HttpStatus {
        status: resp.status_code,
        body: snippet,
    }
}

fn redact_api_key(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == API_KEY_PARAM {
                "<redacted>".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
