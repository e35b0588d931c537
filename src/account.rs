//! Client for endpoints authenticated with an account token.

use crate::client::{ACCOUNT_TOKEN_HEADER, BaseClient, NO_QUERY};
use crate::config::{ClientOptions, ClientOptionsOverrides};
use crate::models::{
    CreateDomainRequest, CreateServerRequest, DefaultResponse, DomainDetails, Domains,
    FilteringParameters, Paginated, Server, ServerFilteringParameters, Servers,
    UpdateDomainRequest, UpdateServerRequest,
};
use crate::Result;
use reqwest::Method;

/// Async client for account-wide administration: servers and sending domains.
///
/// Authenticates with the `X-Postmark-Account-Token` header.
#[derive(Debug, Clone)]
pub struct AccountClient {
    base: BaseClient,
}

impl AccountClient {
    /// Create a client with the process-wide default options.
    ///
    /// # Examples
    /// ```no_run
    /// # use postmark_client::AccountClient;
    /// # use postmark_client::models::ServerFilteringParameters;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), postmark_client::Error> {
    /// let client = AccountClient::new("account-token")?;
    /// let servers = client
    ///     .get_servers(ServerFilteringParameters::default())
    ///     .await?;
    /// for server in servers.servers {
    ///     println!("{}: {}", server.id, server.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(token: &str) -> Result<Self> {
        Self::with_options(token, ClientOptionsOverrides::new())
    }

    /// Create a client with `overrides` merged over the default options.
    pub fn with_options(token: &str, overrides: ClientOptionsOverrides) -> Result<Self> {
        Ok(Self {
            base: BaseClient::new(token, ACCOUNT_TOKEN_HEADER, overrides)?,
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

    /// List servers. Missing `count`/`offset` default to 100/0.
    pub async fn get_servers(&self, mut filter: ServerFilteringParameters) -> Result<Servers> {
        filter.apply_default_pagination();
        self.base
            .process_request_without_body(Method::GET, "/servers", &filter)
            .await
    }

    /// Fetch one server of this account by ID.
    pub async fn get_server(&self, id: i64) -> Result<Server> {
        self.base
            .process_request_without_body(Method::GET, &format!("/servers/{id}"), NO_QUERY)
            .await
    }

    /// Create a server.
    ///
    /// # Returns
    /// The new server, including its generated API tokens.
    pub async fn create_server(&self, request: &CreateServerRequest) -> Result<Server> {
        self.base
            .process_request_with_body(Method::POST, "/servers", request)
            .await
    }

    /// Change a server's settings. Fields left as `None` are not sent.
    ///
    /// # Arguments
    /// * `id` - The server to change
    /// * `request` - The fields to change
    pub async fn edit_server(&self, id: i64, request: &UpdateServerRequest) -> Result<Server> {
        self.base
            .process_request_with_body(Method::PUT, &format!("/servers/{id}"), request)
            .await
    }

    /// Delete a server. Only allowed when the account has server deletion enabled.
    pub async fn delete_server(&self, id: i64) -> Result<DefaultResponse> {
        self.base
            .process_request_without_body(Method::DELETE, &format!("/servers/{id}"), NO_QUERY)
            .await
    }

    /// List sending domains. Missing `count`/`offset` default to 100/0.
    pub async fn get_domains(&self, mut filter: FilteringParameters) -> Result<Domains> {
        filter.apply_default_pagination();
        self.base
            .process_request_without_body(Method::GET, "/domains", &filter)
            .await
    }

    /// Fetch one sending domain with its DNS verification details.
    pub async fn get_domain(&self, id: i64) -> Result<DomainDetails> {
        self.base
            .process_request_without_body(Method::GET, &format!("/domains/{id}"), NO_QUERY)
            .await
    }

    /// Register a sending domain.
    ///
    /// # Returns
    /// The domain with the SPF, DKIM and Return-Path records to publish.
    pub async fn create_domain(&self, request: &CreateDomainRequest) -> Result<DomainDetails> {
        self.base
            .process_request_with_body(Method::POST, "/domains", request)
            .await
    }

    /// Change a domain's Return-Path domain.
    ///
    /// # Arguments
    /// * `id` - The domain to change
    /// * `request` - The new settings
    pub async fn edit_domain(
        &self,
        id: i64,
        request: &UpdateDomainRequest,
    ) -> Result<DomainDetails> {
        self.base
            .process_request_with_body(Method::PUT, &format!("/domains/{id}"), request)
            .await
    }

    /// Remove a sending domain from the account.
    pub async fn delete_domain(&self, id: i64) -> Result<DefaultResponse> {
        self.base
            .process_request_without_body(Method::DELETE, &format!("/domains/{id}"), NO_QUERY)
            .await
    }

    /// Ask Postmark to re-check the domain's DKIM record.
    pub async fn verify_domain_dkim(&self, id: i64) -> Result<DomainDetails> {
        self.base
            .process_request_with_body(
                Method::PUT,
                &format!("/domains/{id}/verifyDkim"),
                &serde_json::Map::new(),
            )
            .await
    }

    /// Ask Postmark to re-check the domain's Return-Path CNAME.
    pub async fn verify_domain_return_path(&self, id: i64) -> Result<DomainDetails> {
        self.base
            .process_request_with_body(
                Method::PUT,
                &format!("/domains/{id}/verifyReturnPath"),
                &serde_json::Map::new(),
            )
            .await
    }
}
