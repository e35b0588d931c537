//! Request and response records for the Postmark API.
//!
//! Field names follow the API's PascalCase JSON via serde renames.

mod bounces;
mod domains;
mod filtering;
mod messages;
mod servers;
mod stats;
mod templates;

pub use bounces::{
    Bounce, BounceActivationResponse, BounceDump, BounceFilteringParameters, BounceMetric,
    Bounces, DeliveryStatistics,
};
pub use domains::{CreateDomainRequest, Domain, DomainDetails, Domains, UpdateDomainRequest};
pub use filtering::{
    DEFAULT_PAGE_COUNT, DEFAULT_PAGE_OFFSET, FilteringParameters, Paginated,
};
pub use messages::{
    Attachment, Header, Message, MessageSendingResponse, TemplatedMessage,
};
pub use servers::{
    CreateServerRequest, DeliveryType, Server, ServerFilteringParameters, Servers,
    UpdateServerRequest,
};
pub use stats::{OutboundStatistics, StatisticsFilteringParameters};
pub use templates::{
    BasicTemplate, CreateTemplateRequest, Template, TemplateFilteringParameters, TemplateInList,
    TemplateType, Templates, UpdateTemplateRequest,
};

use serde::{Deserialize, Serialize};

/// Generic acknowledgement returned by delete and some update endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DefaultResponse {
    pub error_code: i64,
    pub message: String,
}
