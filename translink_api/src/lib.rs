//! Client for the TransLink Real-Time Transit Information (RTTI) API.
//!
//! Validates stop, bus, route and service parameters locally, builds the
//! request URL, performs a single GET and returns the decoded JSON. Error
//! payloads sent by the API surface as [`Error::Api`].

mod client;
mod errors;
mod query;
pub mod transport;
pub mod types;
pub mod validation;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::errors::{Error, TransportError};
pub use self::query::{BusesQuery, EstimatesQuery, NoFilters, Query, RoutesQuery, StopsQuery};
pub use self::transport::{HttpResponse, HttpTransport, TransportConfig};
