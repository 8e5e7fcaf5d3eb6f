//! Shared harness: the full router over an in-memory store.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use account_api::account::{
    AccountRepository, ConsistencyMode, InMemoryAccountStore, KeyCollation,
};
use account_api::gateway::{build_router, state::AppState};

pub struct TestApp {
    pub router: Router,
    pub store: InMemoryAccountStore,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with(InMemoryAccountStore::new(), ConsistencyMode::TwoStep)
    }

    pub fn case_insensitive(mode: ConsistencyMode) -> Self {
        Self::with(
            InMemoryAccountStore::with_collation(KeyCollation::CaseInsensitive),
            mode,
        )
    }

    pub fn with(store: InMemoryAccountStore, mode: ConsistencyMode) -> Self {
        let repository = Arc::new(AccountRepository::new(Arc::new(store.clone()), mode));
        let router = build_router(Arc::new(AppState::new(repository)));
        Self { router, store }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let request = builder.body(body).expect("request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes()
            .to_vec();
        TestResponse { status, bytes }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: &str) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: &str) -> TestResponse {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub bytes: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.bytes).expect("json body")
    }
}
