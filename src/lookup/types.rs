//! Lookup service response types.

use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter};

use crate::config::DKIM_TEST_TAG;

/// The record types the lookup service can check.
///
/// The lowercase name doubles as the service's `command` parameter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Dkim,
    Spf,
    Dmarc,
}

impl RecordType {
    /// Upper-case name used in reports, e.g. `DKIM`.
    pub fn label(&self) -> String {
        self.as_ref().to_ascii_uppercase()
    }
}

/// One check reported by the lookup service (passed, failed or warning).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LookupEntry {
    /// Short name of the check
    #[serde(default)]
    pub name: String,
    /// Explanation of the result
    #[serde(default)]
    pub info: String,
    /// Link to the service's documentation for this check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One informational row about the record, such as a parsed DKIM tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InformationEntry {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub name: String,
    /// Usually a string; kept as raw JSON since the service is not consistent.
    #[serde(default)]
    pub description: serde_json::Value,
}

impl InformationEntry {
    /// The description rendered as plain text, `None` when absent.
    pub fn description_text(&self) -> Option<String> {
        match &self.description {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// The lookup service's answer for one record.
///
/// Missing or `null` lists decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LookupResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub failed: Vec<LookupEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub warnings: Vec<LookupEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub passed: Vec<LookupEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub information: Vec<InformationEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub timeouts: Vec<serde_json::Value>,
}

impl LookupResponse {
    /// Raw record text: the description of the first information row.
    pub fn record_content(&self) -> Option<String> {
        self.information
            .first()
            .and_then(InformationEntry::description_text)
    }

    /// True if any information row carries the DKIM test-mode tag.
    pub fn has_test_tag(&self) -> bool {
        self.information
            .iter()
            .any(|entry| entry.tag.trim().eq_ignore_ascii_case(DKIM_TEST_TAG))
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of the token endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct TempAuth {
    #[serde(rename = "TempAuthKey")]
    pub temp_auth_key: Option<String>,
}
