mod common;
pub use self::common::{NoFilters, Query};

mod stops;
pub use self::stops::StopsQuery;

mod estimates;
pub use self::estimates::EstimatesQuery;

mod buses;
pub use self::buses::BusesQuery;

mod routes;
pub use self::routes::RoutesQuery;
