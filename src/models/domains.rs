use serde::{Deserialize, Serialize};

/// Domain summary as listed by `GET /domains`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Domain {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    #[serde(rename = "SPFVerified", default)]
    pub spf_verified: bool,
    #[serde(rename = "DKIMVerified", default)]
    pub dkim_verified: bool,
    #[serde(rename = "WeakDKIM", default)]
    pub weak_dkim: bool,
    #[serde(default)]
    pub return_path_domain_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Domains {
    pub total_count: u64,
    pub domains: Vec<Domain>,
}

/// Domain with the DNS records needed to verify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainDetails {
    #[serde(flatten)]
    pub domain: Domain,
    #[serde(rename = "SPFHost", default)]
    pub spf_host: Option<String>,
    #[serde(rename = "SPFTextValue", default)]
    pub spf_text_value: Option<String>,
    #[serde(rename = "DKIMHost", default)]
    pub dkim_host: Option<String>,
    #[serde(rename = "DKIMTextValue", default)]
    pub dkim_text_value: Option<String>,
    #[serde(rename = "DKIMPendingHost", default)]
    pub dkim_pending_host: Option<String>,
    #[serde(rename = "DKIMPendingTextValue", default)]
    pub dkim_pending_text_value: Option<String>,
    #[serde(rename = "DKIMUpdateStatus", default)]
    pub dkim_update_status: Option<String>,
    #[serde(default)]
    pub return_path_domain: Option<String>,
    #[serde(rename = "ReturnPathDomainCNAMEValue", default)]
    pub return_path_domain_cname_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDomainRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_path_domain: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDomainRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_path_domain: Option<String>,
}
