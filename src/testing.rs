//! Scripted transport for unit tests

use crate::error::Result;
use crate::http::{ApiRequest, ApiResponse, Transport};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

type Responder = Box<dyn Fn(&ApiRequest) -> Result<ApiResponse> + Send + Sync>;

/// Transport that answers from a closure and records every request
pub(crate) struct ScriptedTransport {
    responder: Responder,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new<F>(responder: F) -> Self
    where
        F: Fn(&ApiRequest) -> Result<ApiResponse> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Serve `total` synthetic records with an optional `X-Count` header
    pub(crate) fn listing(total: u32, count_header: Option<&'static str>) -> Self {
        Self::new(move |request| {
            let offset: u32 = request.query_value("offset").unwrap_or("0").parse().unwrap();
            let limit: u32 = request.query_value("limit").unwrap_or("10").parse().unwrap();
            let records: Vec<Value> = (offset..total.min(offset + limit))
                .map(|id| json!({"id": id, "name": format!("Record {id}")}))
                .collect();
            Ok(ok_response(&Value::Array(records), count_header))
        })
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn offsets(&self) -> Vec<u32> {
        self.requests()
            .iter()
            .map(|r| r.query_value("offset").unwrap().parse().unwrap())
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(request.clone());
        (self.responder)(request)
    }
}

/// Wraps a transport and fires `signal` once a request for `offset` has
/// been answered, yielding so the caller can react before the next page
pub(crate) struct SignalAtOffset<T> {
    pub(crate) inner: T,
    pub(crate) offset: u32,
    pub(crate) signal: Arc<Notify>,
}

#[async_trait]
impl<T: Transport> Transport for SignalAtOffset<T> {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let response = self.inner.execute(request).await;
        if request.query_value("offset") == Some(self.offset.to_string().as_str()) {
            self.signal.notify_one();
            tokio::task::yield_now().await;
        }
        response
    }
}

/// A 200 response with a JSON body
pub(crate) fn ok_response(body: &Value, count_header: Option<&str>) -> ApiResponse {
    let mut headers = HeaderMap::new();
    if let Some(count) = count_header {
        headers.insert("X-Count", HeaderValue::from_str(count).unwrap());
    }
    ApiResponse::new(200, headers, serde_json::to_vec(body).unwrap())
}

/// A response with the given status and a plain text body
pub(crate) fn status_response(status: u16, body: &str) -> ApiResponse {
    ApiResponse::new(status, HeaderMap::new(), body.to_string())
}
