use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SuccessResponse<'a> {
    Health {
        status: &'a str,
        #[serde(with = "time::serde::rfc3339")]
        timestamp: OffsetDateTime,
        environment: &'a str,
        version: &'a str,
    },
}
