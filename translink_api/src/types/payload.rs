use serde::Deserialize;
use serde_json::Value;

use crate::Error;

/// Error body returned by the RTTI API, e.g. `{"Code": "3005", "Message": "No stop estimates found."}`.
///
/// The live API sends `Code` as a numeric string; numbers are accepted too.
/// Anything else decodes as 0.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorPayload {
    #[serde(rename = "Code", deserialize_with = "lenient_code")]
    pub code: i64,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
}

impl ApiErrorPayload {
    /// Extracts the error payload if `value` is an object with a `Code` field.
    pub fn from_value(value: &Value) -> Option<Self> {
        let code = value.as_object()?.get("Code")?;
        Some(
            ApiErrorPayload::deserialize(value).unwrap_or_else(|_| ApiErrorPayload {
                code: code_of(code),
                message: value.get("Message").map(|m| match m {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                }),
            }),
        )
    }
}

impl From<ApiErrorPayload> for Error {
    fn from(payload: ApiErrorPayload) -> Self {
        Error::Api {
            code: payload.code,
            message: payload.message.unwrap_or_default(),
        }
    }
}

fn lenient_code<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(code_of(&raw))
}

fn code_of(raw: &Value) -> i64 {
    match raw {
        Value::Number(n) => n.as_i64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    }
}
