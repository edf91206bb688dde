mod payload;
pub use self::payload::ApiErrorPayload;

mod service;
pub use self::service::ServiceName;
