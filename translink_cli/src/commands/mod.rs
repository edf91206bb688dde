//! CLI subcommand implementations.

pub mod buses;
pub mod estimates;
pub mod routes;
pub mod status;
pub mod stops;
