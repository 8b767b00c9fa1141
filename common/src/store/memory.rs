//! In-memory implementation of [`RestClient`].
//!
//! Serves JSON collections the way the REST backend does (`GET` a collection
//! or item, `POST` to a collection, `PATCH`/`DELETE` an item at
//! `{collection}{id}/`) without any network. It backs the demo mode of the
//! frontend and the integration tests.
//!
//! - Ids are assigned from one counter shared by all collections.
//! - `created_at` is stamped on `POST` when the payload lacks it.
//! - A failure can be injected for the next request with [`MemoryClient::fail_next`].
//! - Every request is recorded as `"METHOD path"` for inspection.
//!
//! Not durable: everything is lost when the client is dropped.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Local;
use serde_json::{Map, Value};

use super::RestClient;
use crate::error::{ApiError, ApiResult};

enum Target<'a> {
    Collection(&'a str),
    Item(&'a str, u64),
}

#[derive(Default)]
pub struct MemoryClient {
    collections: RefCell<BTreeMap<String, Vec<Map<String, Value>>>>,
    next_id: Cell<u64>,
    fail_next: RefCell<Option<ApiError>>,
    requests: RefCell<Vec<String>>,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds records to `collection` (e.g. `"reservations/"`). Records without
    /// an `id` are given one.
    pub fn seed(&self, collection: &str, records: impl IntoIterator<Item = Value>) {
        let mut collections = self.collections.borrow_mut();
        let rows = collections.entry(collection.to_string()).or_default();
        for record in records {
            let Value::Object(mut record) = record else {
                continue;
            };
            match record.get("id").and_then(Value::as_u64) {
                Some(id) => self.next_id.set(self.next_id.get().max(id)),
                None => {
                    record.insert("id".to_string(), Value::from(self.allocate_id()));
                }
            }
            rows.push(record);
        }
    }

    /// Makes the next request fail with `err` without touching any data.
    pub fn fail_next(&self, err: ApiError) {
        *self.fail_next.borrow_mut() = Some(err);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .borrow()
            .get(collection)
            .map_or(0, Vec::len)
    }

    fn allocate_id(&self) -> u64 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn begin(&self, method: &str, path: &str) -> ApiResult<()> {
        self.requests.borrow_mut().push(format!("{method} {path}"));
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn resolve(path: &str) -> ApiResult<Target<'_>> {
        let trimmed = path.trim_end_matches('/');
        match trimmed.rsplit_once('/') {
            Some((collection, id)) => {
                let id = id.parse().map_err(|_| not_found())?;
                // collection keys keep their trailing slash
                Ok(Target::Item(&path[..collection.len() + 1], id))
            }
            None if !trimmed.is_empty() => Ok(Target::Collection(path)),
            None => Err(not_found()),
        }
    }
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        body: r#"{"detail":"Not found."}"#.to_string(),
    }
}

fn bad_request(reason: &str) -> ApiError {
    ApiError::Status {
        status: 400,
        body: format!(r#"{{"detail":"{reason}"}}"#),
    }
}

fn has_id(record: &Map<String, Value>, id: u64) -> bool {
    record.get("id").and_then(Value::as_u64) == Some(id)
}

#[async_trait(?Send)]
impl RestClient for MemoryClient {
    async fn get(&self, path: &str) -> ApiResult<Value> {
        self.begin("GET", path)?;
        let collections = self.collections.borrow();
        match Self::resolve(path)? {
            Target::Collection(name) => Ok(Value::Array(
                collections
                    .get(name)
                    .map(|rows| rows.iter().cloned().map(Value::Object).collect())
                    .unwrap_or_default(),
            )),
            Target::Item(name, id) => collections
                .get(name)
                .and_then(|rows| rows.iter().find(|row| has_id(row, id)))
                .cloned()
                .map(Value::Object)
                .ok_or_else(not_found),
        }
    }

    async fn post(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.begin("POST", path)?;
        let Target::Collection(name) = Self::resolve(path)? else {
            return Err(ApiError::Status {
                status: 405,
                body: r#"{"detail":"Method not allowed."}"#.to_string(),
            });
        };
        let Value::Object(mut record) = body else {
            return Err(bad_request("Expected a JSON object."));
        };
        record.insert("id".to_string(), Value::from(self.allocate_id()));
        record.entry("created_at").or_insert_with(|| {
            Value::from(Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string())
        });

        self.collections
            .borrow_mut()
            .entry(name.to_string())
            .or_default()
            .push(record.clone());
        Ok(Value::Object(record))
    }

    async fn patch(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.begin("PATCH", path)?;
        let Target::Item(name, id) = Self::resolve(path)? else {
            return Err(not_found());
        };
        let Value::Object(changes) = body else {
            return Err(bad_request("Expected a JSON object."));
        };

        let mut collections = self.collections.borrow_mut();
        let record = collections
            .get_mut(name)
            .and_then(|rows| rows.iter_mut().find(|row| has_id(row, id)))
            .ok_or_else(not_found)?;
        for (key, value) in changes {
            if key != "id" {
                record.insert(key, value);
            }
        }
        Ok(Value::Object(record.clone()))
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        self.begin("DELETE", path)?;
        let Target::Item(name, id) = Self::resolve(path)? else {
            return Err(not_found());
        };

        let mut collections = self.collections.borrow_mut();
        let rows = collections.get_mut(name).ok_or_else(not_found)?;
        let before = rows.len();
        rows.retain(|row| !has_id(row, id));
        if rows.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn crud_cycle() {
        let client = MemoryClient::new();
        let created = client
            .post("rooms/", json!({ "name": "blue" }))
            .await
            .unwrap();
        assert_eq!(created["id"], json!(1));
        assert!(created["created_at"].is_string());

        client
            .patch("rooms/1/", json!({ "name": "green", "id": 99 }))
            .await
            .unwrap();
        let fetched = client.get("rooms/1/").await.unwrap();
        assert_eq!(fetched["name"], json!("green"));
        assert_eq!(fetched["id"], json!(1));

        client.delete("rooms/1/").await.unwrap();
        assert_eq!(client.get("rooms/").await.unwrap(), json!([]));
        assert_eq!(
            client.requests(),
            ["POST rooms/", "PATCH rooms/1/", "GET rooms/1/", "DELETE rooms/1/", "GET rooms/"]
        );
    }

    #[tokio::test]
    async fn seeded_ids_are_not_reused() {
        let client = MemoryClient::new();
        client.seed("rooms/", [json!({ "id": 5, "name": "a" }), json!({ "name": "b" })]);
        assert_eq!(client.len("rooms/"), 2);

        let created = client.post("rooms/", json!({ "name": "c" })).await.unwrap();
        assert_eq!(created["id"], json!(7));
    }

    #[tokio::test]
    async fn missing_items_are_404() {
        let client = MemoryClient::new();
        for result in [
            client.get("rooms/3/").await.map(|_| ()),
            client.patch("rooms/3/", json!({})).await.map(|_| ()),
            client.delete("rooms/3/").await,
        ] {
            assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
        }
    }

    #[tokio::test]
    async fn injected_failure_hits_one_request() {
        let client = MemoryClient::new();
        client.fail_next(ApiError::Network("offline".to_string()));
        assert!(client.get("rooms/").await.is_err());
        assert!(client.get("rooms/").await.is_ok());
    }
}
