//! Site lists REST source

use super::source::{OptionSource, SourceError};
use property_pane_core::SourceItem;
use property_pane_core::schema::ListCollection;
use reqwest::header::ACCEPT;
use tracing::debug;

const ODATA_ACCEPT: &str = "application/json;odata=nometadata";

/// Loads the lists of a site from `{site}/_api/web/lists`.
#[derive(Debug, Clone)]
pub struct RestListSource {
    client: reqwest::Client,
    site_url: reqwest::Url,
    access_token: Option<String>,
    include_hidden: bool,
}

impl RestListSource {
    pub fn new(site_url: reqwest::Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            site_url,
            access_token: None,
            include_hidden: false,
        }
    }

    /// Share a client (connection pool) with other callers
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Send `Authorization: Bearer <token>` with the request
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// Endpoint queried by `fetch_options`
    pub fn lists_url(&self) -> String {
        let base = self.site_url.as_str().trim_end_matches('/');
        if self.include_hidden {
            format!("{base}/_api/web/lists")
        } else {
            format!("{base}/_api/web/lists?$filter=(Hidden eq false)")
        }
    }
}

impl OptionSource for RestListSource {
    async fn fetch_options(&self) -> Result<Vec<SourceItem>, SourceError> {
        let url = self.lists_url();
        debug!("GET {url}");

        let mut request = self.client.get(&url).header(ACCEPT, ODATA_ACCEPT);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|source| SourceError::Http {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| SourceError::Http {
            url: url.clone(),
            source,
        })?;
        let lists: ListCollection =
            serde_json::from_slice(&body).map_err(|source| SourceError::Decode { url, source })?;

        Ok(lists.value.into_iter().map(SourceItem::from).collect())
    }

    fn source_name(&self) -> &str {
        "rest"
    }
}
