//! Client for endpoints authenticated with a server token.

use crate::client::{BaseClient, NO_QUERY, SERVER_TOKEN_HEADER, path_segment};
use crate::config::{ClientOptions, ClientOptionsOverrides};
use crate::models::{
    BasicTemplate, Bounce, BounceActivationResponse, BounceDump, BounceFilteringParameters,
    Bounces, CreateTemplateRequest, DefaultResponse, DeliveryStatistics, Message,
    MessageSendingResponse, OutboundStatistics, Paginated, Server, StatisticsFilteringParameters,
    Template, TemplateFilteringParameters, TemplatedMessage, Templates, UpdateServerRequest,
    UpdateTemplateRequest,
};
use crate::Result;
use reqwest::Method;

/// Async client for a single Postmark server: sending, bounces, templates, stats.
///
/// Authenticates with the `X-Postmark-Server-Token` header.
#[derive(Debug, Clone)]
pub struct ServerClient {
    base: BaseClient,
}

impl ServerClient {
    /// Create a client with the process-wide default options.
    ///
    /// # Examples
    /// ```no_run
    /// # use postmark_client::{Message, ServerClient};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), postmark_client::Error> {
    /// let client = ServerClient::new("server-token")?;
    /// let sent = client
    ///     .send_email(&Message::new("from@example.com", "to@example.com", "Hello"))
    ///     .await?;
    /// println!("{:?}", sent.message_id);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(token: &str) -> Result<Self> {
        Self::with_options(token, ClientOptionsOverrides::new())
    }

    /// Create a client with `overrides` merged over the default options.
    pub fn with_options(token: &str, overrides: ClientOptionsOverrides) -> Result<Self> {
        Ok(Self {
            base: BaseClient::new(token, SERVER_TOKEN_HEADER, overrides)?,
        })
    }

    /// Shared request plumbing behind this client.
    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    /// Mutable access to the request plumbing, e.g. to change the reported version.
    pub fn base_mut(&mut self) -> &mut BaseClient {
        &mut self.base
    }

    /// Connection options this client sends requests with.
    pub fn options(&self) -> &ClientOptions {
        self.base.options()
    }

    /// Change this client's options; requests already in flight are unaffected.
    pub fn options_mut(&mut self) -> &mut ClientOptions {
        self.base.options_mut()
    }

    /// Send a single email.
    pub async fn send_email(&self, message: &Message) -> Result<MessageSendingResponse> {
        self.base
            .process_request_with_body(Method::POST, "/email", message)
            .await
    }

    /// Send up to 500 emails in one call; one response per message.
    pub async fn send_email_batch(
        &self,
        messages: &[Message],
    ) -> Result<Vec<MessageSendingResponse>> {
        self.base
            .process_request_with_body(Method::POST, "/email/batch", messages)
            .await
    }

    /// Send an email rendered from a stored template.
    pub async fn send_email_with_template(
        &self,
        message: &TemplatedMessage,
    ) -> Result<MessageSendingResponse> {
        self.base
            .process_request_with_body(Method::POST, "/email/withTemplate", message)
            .await
    }

    /// Bounce totals for this server, broken down by bounce type.
    pub async fn get_delivery_statistics(&self) -> Result<DeliveryStatistics> {
        self.base
            .process_request_without_body(Method::GET, "/deliverystats", NO_QUERY)
            .await
    }

    /// List bounces. Missing `count`/`offset` default to 100/0.
    pub async fn get_bounces(&self, mut filter: BounceFilteringParameters) -> Result<Bounces> {
        filter.apply_default_pagination();
        self.base
            .process_request_without_body(Method::GET, "/bounces", &filter)
            .await
    }

    /// Fetch a single bounce.
    ///
    /// # Arguments
    /// * `id` - The bounce ID, as listed by [`ServerClient::get_bounces`]
    pub async fn get_bounce(&self, id: i64) -> Result<Bounce> {
        self.base
            .process_request_without_body(Method::GET, &format!("/bounces/{id}"), NO_QUERY)
            .await
    }

    /// Raw SMTP source of a bounced message.
    ///
    /// # Returns
    /// The dump, with an empty `body` once Postmark no longer retains it.
    pub async fn get_bounce_dump(&self, id: i64) -> Result<BounceDump> {
        self.base
            .process_request_without_body(Method::GET, &format!("/bounces/{id}/dump"), NO_QUERY)
            .await
    }

    /// Reactivate a bounced address so it can receive mail again.
    pub async fn activate_bounce(&self, id: i64) -> Result<BounceActivationResponse> {
        self.base
            .process_request_with_body(
                Method::PUT,
                &format!("/bounces/{id}/activate"),
                &serde_json::Map::new(),
            )
            .await
    }

    /// List templates. Missing `count`/`offset` default to 100/0.
    pub async fn get_templates(&self, mut filter: TemplateFilteringParameters) -> Result<Templates> {
        filter.apply_default_pagination();
        self.base
            .process_request_without_body(Method::GET, "/templates", &filter)
            .await
    }

    /// Fetch a template by numeric id or alias.
    pub async fn get_template(&self, id_or_alias: &str) -> Result<Template> {
        self.base
            .process_request_without_body(
                Method::GET,
                &format!("/templates/{}", path_segment(id_or_alias)),
                NO_QUERY,
            )
            .await
    }

    /// Create a template on this server.
    ///
    /// # Returns
    /// The new template's ID, name, alias and active flag.
    pub async fn create_template(&self, request: &CreateTemplateRequest) -> Result<BasicTemplate> {
        self.base
            .process_request_with_body(Method::POST, "/templates", request)
            .await
    }

    /// Update a template. Fields left as `None` keep their current value.
    ///
    /// # Arguments
    /// * `id_or_alias` - Numeric template ID or its alias
    /// * `request` - The fields to change
    pub async fn edit_template(
        &self,
        id_or_alias: &str,
        request: &UpdateTemplateRequest,
    ) -> Result<BasicTemplate> {
        self.base
            .process_request_with_body(
                Method::PUT,
                &format!("/templates/{}", path_segment(id_or_alias)),
                request,
            )
            .await
    }

    /// Delete a template by numeric ID or alias.
    pub async fn delete_template(&self, id_or_alias: &str) -> Result<DefaultResponse> {
        self.base
            .process_request_without_body(
                Method::DELETE,
                &format!("/templates/{}", path_segment(id_or_alias)),
                NO_QUERY,
            )
            .await
    }

    /// Settings of the server this token belongs to.
    pub async fn get_server(&self) -> Result<Server> {
        self.base
            .process_request_without_body(Method::GET, "/server", NO_QUERY)
            .await
    }

    /// Change this server's settings. Fields left as `None` are not sent.
    pub async fn edit_server(&self, request: &UpdateServerRequest) -> Result<Server> {
        self.base
            .process_request_with_body(Method::PUT, "/server", request)
            .await
    }

    /// Outbound totals (sent, bounced, opens, ...) for this server.
    ///
    /// # Arguments
    /// * `filter` - Optional tag and date range; empty fields are not sent
    pub async fn get_outbound_overview(
        &self,
        filter: &StatisticsFilteringParameters,
    ) -> Result<OutboundStatistics> {
        self.base
            .process_request_without_body(Method::GET, "/stats/outbound", filter)
            .await
    }
}
