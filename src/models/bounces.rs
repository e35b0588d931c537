use serde::{Deserialize, Serialize};

/// A single bounce record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bounce {
    #[serde(rename = "ID")]
    pub id: i64,
    pub r#type: String,
    pub type_code: i64,
    pub name: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(rename = "MessageID", default)]
    pub message_id: Option<String>,
    #[serde(rename = "ServerID", default)]
    pub server_id: Option<i64>,
    #[serde(default)]
    pub message_stream: Option<String>,
    pub description: String,
    #[serde(default)]
    pub details: String,
    pub email: String,
    #[serde(default)]
    pub from: String,
    pub bounced_at: String,
    pub dump_available: bool,
    pub inactive: bool,
    pub can_activate: bool,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// One page of bounces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bounces {
    pub total_count: u64,
    pub bounces: Vec<Bounce>,
}

/// Raw SMTP source of a bounce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BounceDump {
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BounceActivationResponse {
    pub message: String,
    pub bounce: Bounce,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BounceMetric {
    pub name: String,
    pub count: u64,
    #[serde(default)]
    pub r#type: Option<String>,
}

/// Bounce counts per type plus the number of inactive addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeliveryStatistics {
    pub inactive_mails: u64,
    pub bounces: Vec<BounceMetric>,
}

/// Query for `GET /bounces`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BounceFilteringParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub bounce_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive: Option<bool>,
    #[serde(rename = "emailFilter", skip_serializing_if = "Option::is_none")]
    pub email_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(rename = "messageID", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(rename = "fromdate", skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    #[serde(rename = "todate", skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
    #[serde(rename = "messagestream", skip_serializing_if = "Option::is_none")]
    pub message_stream: Option<String>,
}
