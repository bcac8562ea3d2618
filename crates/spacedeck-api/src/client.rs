//! HTTP client for the Book My Space backend.
//!
//! Endpoints follow one REST shape per resource: `GET/POST {base}/api/{path}`
//! for the collection and `PUT/DELETE {base}/api/{path}/{id}` for one record.
//! Collection responses arrive wrapped in an envelope object whose key is
//! named by the resource.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde_json::Value;
use tracing::{debug, warn};

use spacedeck_core::error::{Error, Result};
use spacedeck_core::{Draft, Record, ResourceSpec};

use crate::encode::{approval_body, json_body, plan_parts, PartPlan};

/// Client handle, cheap to clone per request task.
///
/// No request timeout is configured: uploads ride slow links, and the UI
/// stays responsive while a request is in flight anyway.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, spec: &ResourceSpec) -> String {
        format!("{}/api/{}", self.base_url, spec.path)
    }

    fn record_url(&self, spec: &ResourceSpec, id: &str) -> String {
        format!("{}/api/{}/{}", self.base_url, spec.path, id)
    }

    /// Fetch the full collection for a resource.
    ///
    /// Tolerant of envelope drift: a missing or non-array collection key
    /// yields an empty list with a warning rather than an error, and
    /// elements that fail to decode are skipped individually.
    pub async fn list(&self, spec: &ResourceSpec) -> Result<Vec<Record>> {
        let url = self.collection_url(spec);
        debug!(resource = spec.slug, url = %url, "Fetching collection");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::api(format!("GET {url}: {e}")))?;
        let response = ensure_success("GET", &url, response)?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::response(format!("GET {url}: invalid JSON: {e}")))?;
        Ok(parse_collection(spec, body))
    }

    /// Create a new record from the draft.
    pub async fn create(&self, spec: &ResourceSpec, draft: &Draft) -> Result<()> {
        let url = self.collection_url(spec);
        debug!(resource = spec.slug, url = %url, "Creating record");

        let request = self.http.post(&url);
        let request = if spec.has_file_fields() {
            request.multipart(build_form(spec, draft).await?)
        } else {
            request.json(&json_body(spec, draft))
        };

        let response = request
            .send()
            .await
            .map_err(|e| Error::api(format!("POST {url}: {e}")))?;
        ensure_success("POST", &url, response)?;
        Ok(())
    }

    /// Overwrite an existing record with the draft.
    pub async fn update(&self, spec: &ResourceSpec, id: &str, draft: &Draft) -> Result<()> {
        let url = self.record_url(spec, id);
        debug!(resource = spec.slug, id = %id, url = %url, "Updating record");

        let request = self.http.put(&url);
        let request = if spec.has_file_fields() {
            request.multipart(build_form(spec, draft).await?)
        } else {
            request.json(&json_body(spec, draft))
        };

        let response = request
            .send()
            .await
            .map_err(|e| Error::api(format!("PUT {url}: {e}")))?;
        ensure_success("PUT", &url, response)?;
        Ok(())
    }

    /// Delete a record. The backend decides whether that is a soft or hard
    /// delete; the delete verb here is the same either way.
    pub async fn delete(&self, spec: &ResourceSpec, id: &str) -> Result<()> {
        let url = self.record_url(spec, id);
        debug!(resource = spec.slug, id = %id, url = %url, "Deleting record");

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| Error::api(format!("DELETE {url}: {e}")))?;
        ensure_success("DELETE", &url, response)?;
        Ok(())
    }

    /// Flip a record's admin approval flag on.
    pub async fn approve(&self, spec: &ResourceSpec, id: &str) -> Result<()> {
        let url = self.record_url(spec, id);
        debug!(resource = spec.slug, id = %id, url = %url, "Approving record");

        let response = self
            .http
            .put(&url)
            .json(&approval_body())
            .send()
            .await
            .map_err(|e| Error::api(format!("PUT {url}: {e}")))?;
        ensure_success("PUT", &url, response)?;
        Ok(())
    }
}

fn ensure_success(method: &str, url: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::response(format!("{method} {url} returned {status}")))
    }
}

/// Pull the record list out of an envelope object.
fn parse_collection(spec: &ResourceSpec, body: Value) -> Vec<Record> {
    let items = match body.get(spec.collection_key) {
        Some(Value::Array(items)) => items.clone(),
        Some(other) => {
            warn!(
                resource = spec.slug,
                key = spec.collection_key,
                "Envelope key holds {} instead of an array, treating as empty",
                json_type_name(other)
            );
            return Vec::new();
        }
        None => {
            warn!(
                resource = spec.slug,
                key = spec.collection_key,
                "Envelope key missing from response, treating as empty"
            );
            return Vec::new();
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<Record>(item) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(resource = spec.slug, "Skipping undecodable record: {e}");
            }
        }
    }
    records
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Assemble the multipart form, reading any attached files from disk.
async fn build_form(spec: &ResourceSpec, draft: &Draft) -> Result<Form> {
    let mut form = Form::new();
    for part in plan_parts(spec, draft) {
        match part {
            PartPlan::Text { name, value } => {
                form = form.text(name, value);
            }
            PartPlan::File { name, path } => {
                let bytes = tokio::fs::read(&path)
                    .await
                    .map_err(|e| Error::attachment(&path, e.to_string()))?;
                form = form.part(name, Part::bytes(bytes).file_name(file_name_of(&path)));
            }
        }
    }
    Ok(form)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string())
}
