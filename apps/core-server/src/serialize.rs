use serde::Serializer;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Serializes timestamps the way the dashboards expect them: RFC 3339 with
/// millisecond precision.
pub(crate) fn front_time<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let truncated = value
        .replace_nanosecond(value.millisecond() as u32 * 1_000_000)
        .map_err(serde::ser::Error::custom)?;
    let formatted = truncated.format(&Rfc3339).map_err(serde::ser::Error::custom)?;

    serializer.serialize_str(&formatted)
}

pub(crate) fn front_time_option<S>(
    value: &Option<OffsetDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => front_time(value, serializer),
        None => serializer.serialize_none(),
    }
}
