use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, RequestBuilder, Response, StatusCode, Url,
};
use serde::de::DeserializeOwned;

use crate::api::dto::{ErrorBody, RecordBody, RecordRow};
use crate::api::{EntryGateway, GatewayError};
use crate::types::{Entry, EntryId, NewEntry};

const UNAUTH_INVALID_KEY: &str =
    "Record store rejected the API key. Check `api_key` in your config.";

/// PostgREST client for a Supabase record table.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    client: Client,
    table_url: Url,
}

impl SupabaseClient {
    pub fn new(api_url: &str, api_key: &str, table: &str) -> Result<Self> {
        let base_url = Url::parse(&format!("{}/", api_url.trim_end_matches('/')))
            .with_context(|| format!("Invalid API URL: {}", api_url))?;
        let table_url = base_url
            .join(&format!("rest/v1/{}", urlencoding::encode(table)))
            .with_context(|| format!("Failed to build URL for table {}", table))?;

        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(api_key).context("API key is not a valid header")?;
        headers.insert("apikey", key);
        let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .context("API key is not a valid header")?;
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, table_url })
    }

    fn id_filter(id: &EntryId) -> String {
        format!("eq.{}", id)
    }

    async fn send(&self, request: RequestBuilder, call_name: &str) -> Result<Response> {
        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to call {}", call_name))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            anyhow::bail!("{UNAUTH_INVALID_KEY}");
        }
        if !status.is_success() {
            // 403 usually means a row-level security policy; PostgREST says which.
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| match status {
                    StatusCode::FORBIDDEN => UNAUTH_INVALID_KEY.to_string(),
                    _ => status.to_string(),
                });
            anyhow::bail!("{} returned error: {}", call_name, message);
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<T> {
        let response = self.send(request, call_name).await?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse {} response", call_name))
    }

    async fn send_without_body(&self, request: RequestBuilder, call_name: &str) -> Result<()> {
        let response = self.send(request, call_name).await?;
        let _ = response.bytes().await;
        Ok(())
    }

    async fn fetch_rows(&self) -> Result<Vec<RecordRow>> {
        self.get_json(
            self.client
                .get(self.table_url.clone())
                .query(&[("select", "*"), ("order", "created_at.asc")]),
            "GET records",
        )
        .await
    }
}

#[async_trait]
impl EntryGateway for SupabaseClient {
    async fn list(&self) -> Result<Vec<Entry>, GatewayError> {
        tracing::debug!(url = %self.table_url, "listing records");
        let rows = self.fetch_rows().await?;
        rows.into_iter().map(Entry::try_from).collect()
    }

    async fn create(&self, entry: &NewEntry) -> Result<(), GatewayError> {
        tracing::debug!(title = %entry.title, time = entry.time, "inserting record");
        self.send_without_body(
            self.client
                .post(self.table_url.clone())
                .header("Prefer", "return=minimal")
                .json(&RecordBody {
                    title: &entry.title,
                    time: entry.time.to_string(),
                }),
            "POST records",
        )
        .await?;
        Ok(())
    }

    async fn update(&self, entry: &Entry) -> Result<(), GatewayError> {
        tracing::debug!(id = %entry.id, "updating record");
        self.send_without_body(
            self.client
                .patch(self.table_url.clone())
                .query(&[("id", Self::id_filter(&entry.id))])
                .header("Prefer", "return=minimal")
                .json(&RecordBody {
                    title: &entry.title,
                    time: entry.time.to_string(),
                }),
            "PATCH records",
        )
        .await?;
        Ok(())
    }

    async fn delete(&self, id: &EntryId) -> Result<(), GatewayError> {
        tracing::debug!(%id, "deleting record");
        self.send_without_body(
            self.client
                .delete(self.table_url.clone())
                .query(&[("id", Self::id_filter(id))]),
            "DELETE records",
        )
        .await?;
        Ok(())
    }
}
