use std::str::FromStr;

use crate::Error;

/// RTTI subsystem whose operational status can be queried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceName {
    /// Real-time vehicle positioning.
    Location,
    /// Timetable data.
    Schedule,
    All,
}

impl ServiceName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceName::Location => "location",
            ServiceName::Schedule => "schedule",
            ServiceName::All => "all",
        }
    }
}

impl std::fmt::Display for ServiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `"ALL"`, `"All"` and `"all"` all parse to [`ServiceName::All`].
impl FromStr for ServiceName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "location" => Ok(ServiceName::Location),
            "schedule" => Ok(ServiceName::Schedule),
            "all" => Ok(ServiceName::All),
            _ => Err(Error::validation(
                "Invalid service name. Must be \"location\", \"schedule\" or \"all\".",
            )),
        }
    }
}
