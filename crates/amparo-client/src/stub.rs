//! In-memory record store stub.
//!
//! A minimal REST collection server (`tiny_http` on `127.0.0.1:0`, background
//! thread) with the same surface the real store exposes: list with optional
//! equality filter, get, create with id assignment, partial-merge patch, and
//! delete. Used by the test suites and by `amparo serve` as a local
//! development store.

use std::collections::HashMap;
use std::io::Read;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use serde_json::{Map, Value};

type Record = Map<String, Value>;
type Collections = HashMap<String, Vec<Record>>;

/// Handle over a running stub store. Shuts the server down on drop.
pub struct StubStore {
    addr: SocketAddr,
    data: Arc<Mutex<Collections>>,
    hits: Arc<AtomicU64>,
    next_id: Arc<AtomicU64>,
    shutdown: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl StubStore {
    /// Bind on a random loopback port.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind.
    pub fn spawn() -> std::io::Result<Self> {
        Self::bind("127.0.0.1:0")
    }

    /// Bind on an explicit address (e.g. `127.0.0.1:3001`).
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind.
    pub fn bind(addr: &str) -> std::io::Result<Self> {
        let server = tiny_http::Server::http(addr).map_err(std::io::Error::other)?;
        let addr = server
            .server_addr()
            .to_ip()
            .ok_or_else(|| std::io::Error::other("stub store bound to a non-IP address"))?;

        let data = Arc::new(Mutex::new(Collections::new()));
        let hits = Arc::new(AtomicU64::new(0));
        let next_id = Arc::new(AtomicU64::new(0));
        let shutdown = Arc::new(AtomicBool::new(false));

        let worker = {
            let data = Arc::clone(&data);
            let hits = Arc::clone(&hits);
            let next_id = Arc::clone(&next_id);
            let shutdown = Arc::clone(&shutdown);
            std::thread::spawn(move || {
                while !shutdown.load(Ordering::Relaxed) {
                    match server.recv_timeout(Duration::from_millis(50)) {
                        Ok(Some(request)) => {
                            hits.fetch_add(1, Ordering::Relaxed);
                            handle(request, &data, &next_id);
                        }
                        Ok(None) => {}
                        Err(_) => break,
                    }
                }
            })
        };

        Ok(Self {
            addr,
            data,
            hits,
            next_id,
            shutdown,
            worker: Some(worker),
        })
    }

    /// Base URL to point a [`crate::RecordStore`] at.
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of requests the server has received.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Insert records into a collection, assigning ids where absent.
    ///
    /// # Panics
    ///
    /// Panics if a seeded value is not a JSON object.
    pub fn seed(&self, collection: &str, records: Vec<Value>) {
        let mut stores = self.data.lock().expect("stub store state");
        let entries = stores.entry(collection.to_owned()).or_default();
        for value in records {
            let mut record = match value {
                Value::Object(record) => record,
                other => panic!("seeded record must be a JSON object, got {other}"),
            };
            if !record.contains_key("id") {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
                record.insert("id".to_owned(), Value::String(id.to_string()));
            }
            entries.push(record);
        }
    }

    /// Snapshot of a collection's raw documents.
    #[must_use]
    pub fn records(&self, collection: &str) -> Vec<Value> {
        let stores = self.data.lock().expect("stub store state");
        stores
            .get(collection)
            .map(|records| records.iter().cloned().map(Value::Object).collect())
            .unwrap_or_default()
    }
}

impl Drop for StubStore {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn handle(mut request: tiny_http::Request, data: &Mutex<Collections>, next_id: &AtomicU64) {
    let mut body = String::new();
    let _ = request.as_reader().read_to_string(&mut body);

    let url = request.url().to_string();
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, Some(query.to_owned())),
        None => (url.as_str(), None),
    };
    let segments: Vec<String> = path
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect();

    let method = request.method().clone();
    match (&method, segments.as_slice()) {
        (tiny_http::Method::Get, [collection]) => {
            let stores = data.lock().expect("stub store state");
            let records = stores.get(collection).cloned().unwrap_or_default();
            let selected: Vec<Value> = match query.as_deref().and_then(parse_filter) {
                Some((field, value)) => records
                    .into_iter()
                    .filter(|record| field_matches(record, &field, &value))
                    .map(Value::Object)
                    .collect(),
                None => records.into_iter().map(Value::Object).collect(),
            };
            respond_json(request, 200, &Value::Array(selected).to_string());
        }
        (tiny_http::Method::Get, [collection, id]) => {
            let reply = {
                let stores = data.lock().expect("stub store state");
                stores
                    .get(collection)
                    .and_then(|records| records.iter().find(|record| record_id(record) == *id))
                    .map(|record| Value::Object(record.clone()).to_string())
            };
            match reply {
                Some(body) => respond_json(request, 200, &body),
                None => respond_json(request, 404, "{}"),
            }
        }
        (tiny_http::Method::Post, [collection]) => {
            let Ok(Value::Object(mut record)) = serde_json::from_str(&body) else {
                respond_json(request, 400, "{}");
                return;
            };
            if !record.contains_key("id") {
                let id = next_id.fetch_add(1, Ordering::Relaxed) + 1;
                record.insert("id".to_owned(), Value::String(id.to_string()));
            }
            let reply = Value::Object(record.clone()).to_string();
            data.lock()
                .expect("stub store state")
                .entry(collection.clone())
                .or_default()
                .push(record);
            respond_json(request, 201, &reply);
        }
        (tiny_http::Method::Patch, [collection, id]) => {
            let Ok(Value::Object(patch)) = serde_json::from_str(&body) else {
                respond_json(request, 400, "{}");
                return;
            };
            let reply = {
                let mut stores = data.lock().expect("stub store state");
                stores
                    .get_mut(collection)
                    .and_then(|records| {
                        records.iter_mut().find(|record| record_id(record) == *id)
                    })
                    .map(|record| {
                        for (key, value) in patch {
                            record.insert(key, value);
                        }
                        Value::Object(record.clone()).to_string()
                    })
            };
            match reply {
                Some(body) => respond_json(request, 200, &body),
                None => respond_json(request, 404, "{}"),
            }
        }
        (tiny_http::Method::Delete, [collection, id]) => {
            let mut stores = data.lock().expect("stub store state");
            let removed = stores.get_mut(collection).is_some_and(|records| {
                let before = records.len();
                records.retain(|record| record_id(record) != *id);
                records.len() < before
            });
            drop(stores);
            if removed {
                respond_json(request, 200, "{}");
            } else {
                respond_json(request, 404, "{}");
            }
        }
        _ => respond_json(request, 404, "{}"),
    }
}

fn parse_filter(query: &str) -> Option<(String, String)> {
    let (field, value) = query.split_once('=')?;
    let field = urlencoding::decode(field).ok()?.into_owned();
    let value = urlencoding::decode(value).ok()?.into_owned();
    Some((field, value))
}

fn field_matches(record: &Record, field: &str, value: &str) -> bool {
    match record.get(field) {
        Some(Value::String(stored)) => stored == value,
        Some(other) => other.to_string() == value,
        None => false,
    }
}

fn record_id(record: &Record) -> &str {
    match record.get("id") {
        Some(Value::String(id)) => id,
        _ => "",
    }
}

fn respond_json(request: tiny_http::Request, status: u16, body: &str) {
    let response = tiny_http::Response::from_string(body)
        .with_status_code(status)
        .with_header(tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap());
    let _ = request.respond(response);
}
