//! Outbound request bodies.

use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

use tenantshare_core::error::{AppError, ErrorKind};
use tenantshare_core::result::AppResult;

/// Body of an outbound POST.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// `application/json`.
    Json(Value),
    /// `multipart/form-data`, forwarded part by part.
    Multipart(MultipartBody),
}

impl RequestBody {
    /// Serialize any value into a JSON body.
    pub fn json<T: Serialize>(value: &T) -> AppResult<Self> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<MultipartBody> for RequestBody {
    fn from(body: MultipartBody) -> Self {
        Self::Multipart(body)
    }
}

/// One field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    /// Field name.
    pub name: String,
    /// File name, for file fields.
    pub file_name: Option<String>,
    /// Part content type.
    pub content_type: Option<String>,
    /// Part content.
    pub data: Bytes,
}

impl FormPart {
    /// A plain text field.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_name: None,
            content_type: None,
            data: Bytes::from(value.into()),
        }
    }

    /// A JSON field.
    pub fn json(name: impl Into<String>, value: &Value) -> AppResult<Self> {
        Ok(Self {
            name: name.into(),
            file_name: None,
            content_type: Some("application/json".to_string()),
            data: Bytes::from(serde_json::to_vec(value)?),
        })
    }

    /// A file field.
    pub fn file(
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: Option<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            file_name: Some(file_name.into()),
            content_type,
            data: data.into(),
        }
    }
}

/// An ordered multipart form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartBody {
    /// Parts in their original order.
    pub parts: Vec<FormPart>,
}

impl MultipartBody {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part.
    pub fn push(&mut self, part: FormPart) {
        self.parts.push(part);
    }

    /// First part with the given name.
    pub fn get(&self, name: &str) -> Option<&FormPart> {
        self.parts.iter().find(|p| p.name == name)
    }

    /// Replace the part with the same name in place, or append it.
    pub fn set(&mut self, part: FormPart) {
        match self.parts.iter_mut().find(|p| p.name == part.name) {
            Some(existing) => *existing = part,
            None => self.parts.push(part),
        }
    }

    /// Build the reqwest form.
    pub fn into_form(self) -> AppResult<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for part in self.parts {
            let mut field = reqwest::multipart::Part::bytes(part.data.to_vec());
            if let Some(file_name) = part.file_name {
                field = field.file_name(file_name);
            }
            if let Some(content_type) = part.content_type {
                field = field.mime_str(&content_type).map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Validation,
                        format!("Invalid content type '{content_type}' for part '{}'", part.name),
                        e,
                    )
                })?;
            }
            form = form.part(part.name, field);
        }
        Ok(form)
    }
}
