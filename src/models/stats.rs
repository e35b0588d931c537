use serde::{Deserialize, Serialize};

/// Aggregate outbound counts for `GET /stats/outbound`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutboundStatistics {
    pub sent: u64,
    pub bounced: u64,
    #[serde(rename = "SMTPApiErrors")]
    pub smtp_api_errors: u64,
    pub bounce_rate: f64,
    pub spam_complaints: u64,
    pub spam_complaints_rate: f64,
    pub opens: u64,
    pub unique_opens: u64,
    pub tracked: u64,
    pub with_link_tracking: u64,
    pub with_open_tracking: u64,
    pub total_tracked_links_sent: u64,
    pub unique_links_clicked: u64,
    pub total_clicks: u64,
}

/// Query shared by the statistics endpoints. Not paginated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsFilteringParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(rename = "fromdate", skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    #[serde(rename = "todate", skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
    #[serde(rename = "messagestream", skip_serializing_if = "Option::is_none")]
    pub message_stream: Option<String>,
}
