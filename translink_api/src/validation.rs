//! Parameter rules applied before any request is built.
//!
//! Every `validate_*` function returns [`Error::Validation`] with a message
//! naming the violated constraint. The `valid_*` predicates are the bare rules.

use std::ops::RangeInclusive;

use crate::types::ServiceName;
use crate::Error;

/// Largest stop search radius accepted by the API, in metres.
pub const MAX_STOP_RADIUS: i64 = 2000;

pub const STOP_NO_RANGE: RangeInclusive<i64> = 10_000..=99_999;
pub const RADIUS_RANGE: RangeInclusive<i64> = 1..=MAX_STOP_RADIUS;
pub const BUS_COUNT_RANGE: RangeInclusive<i64> = 1..=10;
pub const TIME_FRAME_RANGE: RangeInclusive<i64> = 1..=120;
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

const INVALID_STOP_NO: &str = "Invalid stop number. It must be five digits with no leading zeros.";

/// A stop number is exactly five decimal digits with no leading zero.
pub fn valid_stop_no(stop_no: i64) -> bool {
    STOP_NO_RANGE.contains(&stop_no)
}

pub fn valid_radius(radius: i64) -> bool {
    RADIUS_RANGE.contains(&radius)
}

/// Case-insensitive check against `location`, `schedule` and `all`.
pub fn valid_service_name(service_name: &str) -> bool {
    service_name.parse::<ServiceName>().is_ok()
}

pub fn validate_stop_no(stop_no: i64) -> Result<i64, Error> {
    if valid_stop_no(stop_no) {
        Ok(stop_no)
    } else {
        Err(Error::validation(INVALID_STOP_NO))
    }
}

pub fn validate_radius(radius: i64) -> Result<i64, Error> {
    if valid_radius(radius) {
        Ok(radius)
    } else {
        Err(Error::validation(format!(
            "You must specify a radius between 1 and {} meters.",
            MAX_STOP_RADIUS
        )))
    }
}

pub fn validate_service_name(service_name: &str) -> Result<ServiceName, Error> {
    service_name.parse()
}

/// Validates a coordinate pair.
///
/// Returns `Ok(None)` when neither coordinate is given: no geographic filter
/// is intended. Once either one is given both must be present, finite and in
/// range. A missing coordinate fails the same way an out-of-range one does.
pub fn validate_lat_and_long(
    lat: Option<f64>,
    long: Option<f64>,
) -> Result<Option<(f64, f64)>, Error> {
    if lat.is_none() && long.is_none() {
        return Ok(None);
    }

    let lat = lat
        .filter(|lat| LATITUDE_RANGE.contains(lat))
        .ok_or_else(|| {
            Error::validation(
                "Invalid latitude provided. Make sure it is between -90.0 and 90.0 and try again.",
            )
        })?;
    let long = long
        .filter(|long| LONGITUDE_RANGE.contains(long))
        .ok_or_else(|| {
            Error::validation(
                "Invalid longitude provided. Make sure it is between -180.0 and 180.0 and try again.",
            )
        })?;

    Ok(Some((lat, long)))
}

/// Validates the optional estimate count. `None` leaves the server default (6) in effect.
pub fn validate_bus_count(count: Option<i64>) -> Result<Option<i64>, Error> {
    validate_optional_range(
        count,
        &BUS_COUNT_RANGE,
        "Invalid bus count specified. Please try an integer between 1 and 10.",
    )
}

/// Validates the optional time frame in minutes. `None` leaves the server default (120) in effect.
pub fn validate_time_frame(time_frame: Option<i64>) -> Result<Option<i64>, Error> {
    validate_optional_range(
        time_frame,
        &TIME_FRAME_RANGE,
        "Invalid time frame specified. Please try an integer between 1 and 120.",
    )
}

fn validate_optional_range(
    value: Option<i64>,
    range: &RangeInclusive<i64>,
    message: &str,
) -> Result<Option<i64>, Error> {
    match value {
        Some(v) if !range.contains(&v) => Err(Error::validation(message)),
        other => Ok(other),
    }
}

/// Trims a free-form parameter, treating blank strings as absent.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
