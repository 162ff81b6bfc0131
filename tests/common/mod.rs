#![allow(dead_code)]
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use genius_songs::{Error, Result, Transport};
use serde_json::{json, Value};

/// A request as seen by a test transport: path plus query pairs
pub type Request = (String, Vec<(String, String)>);

/// Transport that answers with canned responses, in order, and records every request
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<String>>>,
    requests: Mutex<Vec<Request>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        self.requests.lock().unwrap().push((
            path.to_string(),
            query.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
        ));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Connection("no more scripted responses".into())))
    }
}

/// Transport whose response is computed from the requested page number
pub struct PageFn<F> {
    respond: F,
    calls: Mutex<Vec<i64>>,
}

impl<F> PageFn<F>
where
    F: Fn(i64) -> Result<String> + Send + Sync,
{
    pub fn new(respond: F) -> Self {
        Self {
            respond,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn pages_requested(&self) -> Vec<i64> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl<F> Transport for PageFn<F>
where
    F: Fn(i64) -> Result<String> + Send + Sync,
{
    async fn get(&self, _path: &str, query: &[(&str, String)]) -> Result<String> {
        let page = query
            .iter()
            .find(|(key, _)| *key == "page")
            .and_then(|(_, value)| value.parse().ok())
            .unwrap_or_default();
        self.calls.lock().unwrap().push(page);
        (self.respond)(page)
    }
}

/// Song listing page body
pub fn songs_page(songs: &[(&str, u64)], next_page: Value) -> String {
    let songs: Vec<Value> = songs
        .iter()
        .map(|(title, id)| json!({"title": title, "primary_artist": {"id": id}}))
        .collect();
    json!({"response": {"songs": songs, "next_page": next_page}}).to_string()
}

/// Search response body
pub fn search_hits(artists: &[(&str, u64)]) -> String {
    let hits: Vec<Value> = artists
        .iter()
        .map(|(name, id)| json!({"result": {"primary_artist": {"name": name, "id": id}}}))
        .collect();
    json!({"response": {"hits": hits}}).to_string()
}
