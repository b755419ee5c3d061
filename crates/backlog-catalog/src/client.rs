//! IGDB API client.

use backlog_model::{AuthToken, GAME_FIELDS, GENRE_FIELDS, IgdbGame, IgdbGenre};
use serde::de::DeserializeOwned;

use crate::error::{CatalogError, Result};
use crate::transport::{HttpRequest, HttpResponse, RequestBody, ReqwestTransport, Transport};

/// Twitch OAuth token endpoint.
pub const AUTH_ENDPOINT: &str = "https://id.twitch.tv/oauth2/token";

/// IGDB API base URL.
pub const API_BASE: &str = "https://api.igdb.com/v4";

/// Where the client sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEndpoints {
    /// OAuth token endpoint.
    pub auth_url: String,
    /// Base URL that resource names are appended to.
    pub api_base: String,
}

impl Default for CatalogEndpoints {
    fn default() -> Self {
        Self {
            auth_url: AUTH_ENDPOINT.to_string(),
            api_base: API_BASE.to_string(),
        }
    }
}

impl CatalogEndpoints {
    /// URL of a resource endpoint such as `games`.
    #[must_use]
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), resource)
    }
}

/// Builds an IGDB query selecting `fields` of the record with `id`.
#[must_use]
pub fn build_query(fields: &[&str], id: u64) -> String {
    format!("fields {};where id = {};", fields.join(","), id)
}

/// Client for the IGDB catalog.
///
/// Call [`request_auth_token`](Self::request_auth_token) before any lookup.
#[derive(Debug)]
pub struct IgdbClient<T: Transport = ReqwestTransport> {
    transport: T,
    client_id: String,
    token: Option<String>,
    endpoints: CatalogEndpoints,
}

impl IgdbClient {
    /// Creates a client using the public Twitch and IGDB endpoints.
    pub fn new(client_id: impl Into<String>) -> Result<Self> {
        Ok(Self::with_transport(
            ReqwestTransport::new()?,
            client_id,
            CatalogEndpoints::default(),
        ))
    }
}

impl<T: Transport> IgdbClient<T> {
    /// Creates a client over a custom transport and endpoints.
    pub fn with_transport(
        transport: T,
        client_id: impl Into<String>,
        endpoints: CatalogEndpoints,
    ) -> Self {
        Self {
            transport,
            client_id: client_id.into(),
            token: None,
            endpoints,
        }
    }

    /// The client id sent with every request.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The bearer token, once obtained.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Installs a previously obtained bearer token.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// The endpoints this client talks to.
    #[must_use]
    pub fn endpoints(&self) -> &CatalogEndpoints {
        &self.endpoints
    }

    /// Form fields for the client-credentials exchange.
    #[must_use]
    pub fn auth_query_params(&self, client_secret: &str) -> Vec<(String, String)> {
        vec![
            ("client_id".to_string(), self.client_id.clone()),
            ("client_secret".to_string(), client_secret.to_string()),
            ("grant_type".to_string(), "client_credentials".to_string()),
        ]
    }

    /// Exchanges the client secret for a bearer token and keeps it.
    pub fn request_auth_token(&mut self, client_secret: &str) -> Result<()> {
        let request = HttpRequest {
            url: self.endpoints.auth_url.clone(),
            headers: Vec::new(),
            body: RequestBody::Form(self.auth_query_params(client_secret)),
        };

        tracing::debug!(url = %request.url, "requesting auth token");
        let response = self.transport.send(&request)?.error_for_status()?;
        let token: AuthToken = serde_json::from_str(&response.body)?;
        tracing::debug!(expires_in = token.expires_in, "auth token obtained");

        self.token = Some(token.access_token);
        Ok(())
    }

    /// Headers identifying the client on catalog requests.
    pub fn request_headers(&self) -> Result<Vec<(String, String)>> {
        let token = self.token.as_deref().ok_or(CatalogError::NotAuthenticated)?;
        Ok(vec![
            ("Client-ID".to_string(), self.client_id.clone()),
            ("Authorization".to_string(), format!("Bearer {token}")),
        ])
    }

    /// Looks up a game by id.
    pub fn game_by_id(&self, id: u64) -> Result<IgdbGame> {
        self.first_by_id("games", &GAME_FIELDS, id)
    }

    /// Looks up a genre by id.
    pub fn genre_by_id(&self, id: u64) -> Result<IgdbGenre> {
        self.first_by_id("genres", &GENRE_FIELDS, id)
    }

    fn first_by_id<R: DeserializeOwned>(
        &self,
        resource: &'static str,
        fields: &[&str],
        id: u64,
    ) -> Result<R> {
        let request = HttpRequest {
            url: self.endpoints.resource_url(resource),
            headers: self.request_headers()?,
            body: RequestBody::Text(build_query(fields, id)),
        };

        tracing::debug!(url = %request.url, id, "querying catalog");
        let HttpResponse { body, .. } = self.transport.send(&request)?.error_for_status()?;
        let records: Vec<R> = serde_json::from_str(&body)?;

        records
            .into_iter()
            .next()
            .ok_or(CatalogError::NotFound { resource, id })
    }
}
