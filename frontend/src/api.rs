//! REST transport for the resource stores.
//!
//! `HttpClient` talks to the backend with `gloo-net`, attaching the session's
//! bearer token. In demo mode the stores are wired to the in-memory backend
//! from `common` instead, seeded with a handful of records.

use std::rc::Rc;

use async_trait::async_trait;
use common::config::ApiConfig;
use common::error::{ApiError, ApiResult};
use common::model::reservation::Reservation;
use common::model::user::User;
use common::session::Session;
use common::store::memory::MemoryClient;
use common::store::{Resource, RestClient};
use gloo_net::http::{Request, RequestBuilder, Response};
use log::{debug, info, warn};
use serde_json::{json, Value};

pub struct HttpClient {
    config: Rc<ApiConfig>,
    session: Rc<Session>,
}

impl HttpClient {
    pub fn new(config: Rc<ApiConfig>, session: Rc<Session>) -> Self {
        Self { config, session }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Turns a response into JSON, mapping non-2xx statuses to errors. Empty
/// bodies (e.g. `204 No Content`) become `null`.
async fn read(method: &str, url: &str, response: Response) -> ApiResult<Value> {
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    debug!("{} {} -> {}", method, url, status);

    if !(200..300).contains(&status) {
        if status == 401 {
            warn!("{} {} rejected: session missing or expired", method, url);
        }
        return Err(ApiError::Status { status, body });
    }
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&body)?)
}

#[async_trait(?Send)]
impl RestClient for HttpClient {
    async fn get(&self, path: &str) -> ApiResult<Value> {
        let url = self.url(path);
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(network)?;
        read("GET", &url, response).await
    }

    async fn post(&self, path: &str, body: Value) -> ApiResult<Value> {
        let url = self.url(path);
        let response = self
            .authorize(Request::post(&url))
            .json(&body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read("POST", &url, response).await
    }

    async fn patch(&self, path: &str, body: Value) -> ApiResult<Value> {
        let url = self.url(path);
        let response = self
            .authorize(Request::patch(&url))
            .json(&body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read("PATCH", &url, response).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.url(path);
        let response = self
            .authorize(Request::delete(&url))
            .send()
            .await
            .map_err(network)?;
        read("DELETE", &url, response).await.map(|_| ())
    }
}

/// Picks the transport named by the configuration.
pub fn connect(config: Rc<ApiConfig>, session: Rc<Session>) -> Rc<dyn RestClient> {
    if config.demo {
        info!("demo mode: serving data from memory");
        Rc::new(demo_backend())
    } else {
        info!("using REST backend at {}", config.base_url);
        Rc::new(HttpClient::new(config, session))
    }
}

fn demo_backend() -> MemoryClient {
    let client = MemoryClient::new();
    client.seed(
        User::PATH,
        [
            json!({
                "id": 1, "username": "admin", "first_name": "Grace", "last_name": "Hopper",
                "email": "grace@example.com", "phone": "555-0101",
                "is_active": true, "is_staff": true, "is_superuser": true
            }),
            json!({
                "id": 2, "username": "ada", "first_name": "Ada", "last_name": "Lovelace",
                "email": "ada@example.com", "is_active": true
            }),
            json!({
                "id": 3, "username": "linus", "email": "linus@example.com", "is_active": false
            }),
        ],
    );
    client.seed(
        Reservation::PATH,
        [
            json!({
                "id": 10, "start_time": "2025-12-24T10:30:00", "end_time": "2025-12-24T11:30:00",
                "status": "pending", "customer": 2, "customer_name": "Ada Lovelace",
                "created_at": "2025-12-01T09:00:00"
            }),
            json!({
                "id": 11, "start_time": "2025-12-26T19:00:00", "end_time": "2025-12-26T20:00:00",
                "status": "confirmed", "customer": 3, "customer_name": "linus",
                "created_at": "2025-12-02T17:45:00"
            }),
        ],
    );
    client
}
