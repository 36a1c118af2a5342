use std::rc::Rc;

use dioxus_logger::tracing;
use reqwest::{header::AUTHORIZATION, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    client::{config::Config, model::error::ApiError, storage::CredentialStore},
    model::api::{ErrorDto, ListDto},
};

/// Configured request sender shared by every domain service.
///
/// Each request carries `Authorization: Token <token>` when a token is stored. A 401 response
/// clears the stored token and user and fires the session-expired hook before the error is
/// returned to the caller. Nothing is retried and no timeout is applied.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: CredentialStore,
    on_unauthorized: Option<Rc<dyn Fn()>>,
}

impl ApiClient {
    pub fn new(config: &Config, credentials: CredentialStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            credentials,
            on_unauthorized: None,
        }
    }

    /// Registers the callback run after a 401 has cleared the stored credentials.
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(hook));
        self
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Resolves an endpoint path against the configured base URL, keeping any base path prefix.
    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::local(format!("Invalid request path {}: {}", path, e)))
    }

    /// Starts a request with the stored token attached, if any.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.url(path)?;
        let request = self.http.request(method, url);

        Ok(match authorization_header(&self.credentials) {
            Some(value) => request.header(AUTHORIZATION, value),
            None => request,
        })
    }

    /// Sends a request and turns every non-2xx status into an `ApiError`.
    ///
    /// `fallback` is the message used when the server gives none, and for transport failures.
    pub async fn send_request(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            ApiError::new(0, fallback)
        })?;

        if response.status().is_success() {
            return Ok(response);
        }

        let error = error_from_response(response, fallback).await;
        if error.is_unauthorized() {
            self.expire_session();
        }
        Err(error)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path)?;
        let response = self.send_request(request, fallback).await?;
        parse_response(response, fallback).await
    }

    /// GET a collection, accepting both paginated and bare-array bodies.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<Vec<T>, ApiError> {
        self.get::<ListDto<T>>(path, fallback)
            .await
            .map(ListDto::into_vec)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::POST, path)?.json(body);
        let response = self.send_request(request, fallback).await?;
        parse_response(response, fallback).await
    }

    /// POST without a body, ignoring whatever the server answers with.
    pub async fn post_empty(&self, path: &str, fallback: &str) -> Result<(), ApiError> {
        let request = self.request(Method::POST, path)?;
        let response = self.send_request(request, fallback).await?;
        parse_empty_response(response).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::PATCH, path)?.json(body);
        let response = self.send_request(request, fallback).await?;
        parse_response(response, fallback).await
    }

    pub async fn delete(&self, path: &str, fallback: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, path)?;
        let response = self.send_request(request, fallback).await?;
        parse_empty_response(response).await
    }

    fn expire_session(&self) {
        tracing::warn!("Received 401, clearing stored credentials");
        self.credentials.clear();
        if let Some(hook) = &self.on_unauthorized {
            hook();
        }
    }
}

/// `Token <value>` for the stored token, if there is one.
pub fn authorization_header(credentials: &CredentialStore) -> Option<String> {
    credentials.token().map(|token| format!("Token {}", token))
}

/// Parses a successful response body, reporting unparseable bodies with the fallback message.
pub async fn parse_response<T: DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| {
        tracing::error!("Failed to parse response: {}", e);
        ApiError::new(0, fallback)
    })
}

/// Drains a successful response whose body carries nothing the caller needs.
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    if let Err(e) = response.bytes().await {
        tracing::debug!("Ignoring unreadable response body: {}", e);
    }
    Ok(())
}

async fn error_from_response(response: Response, fallback: &str) -> ApiError {
    let status = response.status().as_u16() as u64;
    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorDto>(&body).ok())
        .and_then(ErrorDto::into_message)
        .unwrap_or_else(|| fallback.to_string());

    tracing::debug!("Request failed with status {}: {}", status, message);
    ApiError { status, message }
}
