use chrono::{Datelike, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::request::ScaffoldRequest;

/// Placeholder values substituted into a template.
///
/// Defaults are constructed fresh on every call; no binding map is ever
/// shared or mutated across template renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemplateBinding(Map<String, Value>);

impl TemplateBinding {
    /// An empty binding map.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// The default bindings for a request: `project_name`, `author_name`
    /// and the current `year` (for the license template).
    pub fn defaults(request: &ScaffoldRequest) -> Self {
        let mut bindings = Self::new();
        bindings.set("project_name", request.project_name.clone());
        bindings.set("author_name", request.author.clone());
        bindings.set("year", Utc::now().year().to_string());
        bindings
    }

    /// Insert or replace a binding.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), Value::String(value.into()));
        self
    }

    /// Look up a binding value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// The underlying map, in the shape the template engine renders
    /// against.
    pub fn values(&self) -> &Map<String, Value> {
        &self.0
    }
}
