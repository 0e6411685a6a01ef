//! HTTP client for the POS REST API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::models::{
    Branch, CatalogItem, Listing, LoginRequest, PurchasePayload, SalesPayload, extract_token,
};
use super::resilience::{Idempotency, RetryPolicy};
use crate::config::Config;
use crate::import::ItemRecord;

/// Calls the seeders make against the POS backend
#[async_trait]
pub trait PosApi: Send + Sync {
    async fn first_branch(&self) -> Result<Branch, ApiError>;
    async fn all_items(&self) -> Result<Vec<CatalogItem>, ApiError>;
    async fn create_item(&self, item: &ItemRecord) -> Result<(), ApiError>;
    async fn create_purchase(&self, purchase: &PurchasePayload<'_>) -> Result<(), ApiError>;
    async fn create_sales(&self, sales: &SalesPayload) -> Result<(), ApiError>;
}

/// Authenticated reqwest client
pub struct PosClient {
    http: Client,
    base_url: String,
    token: String,
    retry: RetryPolicy,
}

impl PosClient {
    /// Log in and return a client carrying the bearer token
    pub async fn login(config: &Config, password: &str) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let mut client = Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: String::new(),
            retry: RetryPolicy::new(config.retry.clone()),
        };

        let request = LoginRequest {
            username: &config.username,
            password,
        };
        let body: serde_json::Value = client
            .retry
            .execute("login", Idempotency::Safe, || {
                client.send(Method::POST, "/auth/login", Some(&request))
            })
            .await?;

        client.token = extract_token(&body)
            .ok_or_else(|| ApiError::Auth("response carried no token".to_string()))?;
        log::info!("Logged in to {} as {}", client.base_url, config.username);

        Ok(client)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);
        if self.token.is_empty() {
            builder
        } else {
            builder.bearer_auth(&self.token)
        }
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("{} {}", method, path);
        let mut builder = self.request(method, path);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        // Some create endpoints answer 201/204 with an empty body
        let text = if text.trim().is_empty() {
            "null"
        } else {
            text.as_str()
        };
        serde_json::from_str(text)
            .map_err(|e| ApiError::Decode(format!("{} {}: {}", status, path, e)))
    }

    async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let listing: Listing<T> = self
            .retry
            .execute(path, Idempotency::Safe, || {
                self.send::<(), _>(Method::GET, path, None)
            })
            .await?;
        Ok(listing.into_vec())
    }

    async fn create<B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .retry
            .execute(path, Idempotency::Unsafe, || {
                self.send(Method::POST, path, Some(body))
            })
            .await?;
        Ok(())
    }
}

#[async_trait]
impl PosApi for PosClient {
    async fn first_branch(&self) -> Result<Branch, ApiError> {
        self.list::<Branch>("/branches")
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::Decode("no branches available".to_string()))
    }

    async fn all_items(&self) -> Result<Vec<CatalogItem>, ApiError> {
        self.list("/items").await
    }

    async fn create_item(&self, item: &ItemRecord) -> Result<(), ApiError> {
        self.create("/items", item).await
    }

    async fn create_purchase(&self, purchase: &PurchasePayload<'_>) -> Result<(), ApiError> {
        self.create("/purchases", purchase).await
    }

    async fn create_sales(&self, sales: &SalesPayload) -> Result<(), ApiError> {
        self.create("/sales", sales).await
    }
}
