//! Game catalog: fetched once per page view, normalized into an id map.

use std::collections::BTreeMap;

use gloo::net::http::Request;
use serde_json::Value;

use crate::error::CatalogError;
use crate::model::{FieldValue, GameRecord, GameView};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    games: BTreeMap<String, GameRecord>,
}

impl Catalog {
    /// Normalize any of the accepted document shapes:
    /// `{ "games": {...} | [...] }`, `[ {id, ...}, ... ]` or `{ id: {...} }`.
    pub fn from_value(raw: Value) -> Self {
        match raw {
            Value::Object(mut obj) => match obj.remove("games") {
                Some(Value::Object(map)) => Self::from_map(map),
                Some(Value::Array(items)) => Self::from_list(items),
                Some(other) => {
                    obj.insert("games".into(), other);
                    Self::from_map(obj)
                }
                None => Self::from_map(obj),
            },
            Value::Array(items) => Self::from_list(items),
            other => {
                log::warn!("unexpected catalog shape ({}); using an empty catalog", kind_of(&other));
                Self::default()
            }
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw).map(Self::from_value)
    }

    fn from_list(items: Vec<Value>) -> Self {
        let mut games = BTreeMap::new();
        for item in items {
            let Some(rec) = record_from(item) else { continue };
            match rec.id() {
                Some(id) => {
                    games.insert(id, rec);
                }
                None => log::warn!("skipping catalog entry without an id"),
            }
        }
        Self { games }
    }

    fn from_map(map: serde_json::Map<String, Value>) -> Self {
        let mut games = BTreeMap::new();
        for (key, item) in map {
            let Some(mut rec) = record_from(item) else {
                log::warn!("skipping catalog entry {key:?}: not an object");
                continue;
            };
            if rec.id().is_none() {
                rec.id = Some(FieldValue::Text(key.clone()));
            }
            games.insert(key, rec);
        }
        Self { games }
    }

    pub fn get(&self, id: &str) -> Option<&GameRecord> {
        self.games.get(id)
    }

    /// Display model for `id`, computed fresh on each call.
    pub fn view(&self, id: &str) -> Option<GameView> {
        self.get(id).map(GameView::from_record)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.games.keys().map(String::as_str)
    }
}

fn record_from(item: Value) -> Option<GameRecord> {
    if !item.is_object() {
        return None;
    }
    serde_json::from_value(item).ok()
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Fetch and normalize the catalog. No retry: the caller logs and aborts.
pub async fn fetch_catalog(url: &str) -> Result<Catalog, CatalogError> {
    let resp = Request::get(url).send().await.map_err(CatalogError::Request)?;
    if !resp.ok() {
        return Err(CatalogError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    let raw: Value = resp.json().await.map_err(CatalogError::Decode)?;
    let catalog = Catalog::from_value(raw);
    log::debug!("loaded {} games from {url}", catalog.len());
    Ok(catalog)
}
