//! Port registration domain model.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A port reserved for a development project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortRecord {
    /// The registered port number.
    pub port: u16,
    /// Display name of the owning project.
    pub project: String,
    /// Free-form note, empty when none was given.
    #[serde(default)]
    pub description: String,
    /// When the registration was made. Never changes after creation.
    ///
    /// `None` only for records loaded from a file that lacked a readable
    /// timestamp.
    #[serde(default, with = "iso_millis")]
    pub created_at: Option<DateTime<Utc>>,
}

impl PortRecord {
    /// Create a record stamped with the current time.
    ///
    /// The timestamp is truncated to milliseconds, the precision of the
    /// registry file, so a saved record reloads unchanged.
    pub fn new(port: u16, project: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_created_at(port, project, description, Utc::now().trunc_subsecs(3))
    }

    /// Create a record with an explicit creation time.
    pub fn with_created_at(
        port: u16,
        project: impl Into<String>,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            port,
            project: project.into(),
            description: description.into(),
            created_at: Some(created_at),
        }
    }

    /// Whether a non-empty description is attached.
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

impl std::fmt::Display for PortRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Port {} ({})", self.port, self.project)
    }
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix,
/// e.g. `2024-05-01T10:00:00.000Z`.
pub(crate) mod iso_millis {
    use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Parse a full RFC 3339 timestamp, or a bare `YYYY-MM-DD` date as
    /// midnight UTC.
    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&format(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw))),
            None => Ok(None),
        }
    }
}
