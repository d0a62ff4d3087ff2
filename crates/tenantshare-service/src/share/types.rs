//! Remote share service request and result types.
//!
//! Only the fields the proxy reads or rewrites are typed. Everything else
//! the caller or the remote sends is kept in a flattened `extra` map and
//! forwarded verbatim.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Untyped fields preserved across a rewrite.
pub type Extra = serde_json::Map<String, Value>;

/// Kind of stored object.
///
/// Kinds this proxy does not know are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ObjectType {
    /// A file.
    #[default]
    File,
    /// A folder.
    Folder,
    /// Any other kind reported by the remote.
    Other(String),
}

impl From<String> for ObjectType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "file" => Self::File,
            "folder" => Self::Folder,
            _ => Self::Other(value),
        }
    }
}

impl From<ObjectType> for String {
    fn from(value: ObjectType) -> Self {
        match value {
            ObjectType::File => "file".to_string(),
            ObjectType::Folder => "folder".to_string(),
            ObjectType::Other(other) => other,
        }
    }
}

/// Deserialize a list that the remote may send as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A file or folder in the remote store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredObject {
    /// Object id.
    #[serde(default)]
    pub id: String,
    /// Object name.
    #[serde(default)]
    pub name: String,
    /// Owner reported by the remote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Parent folder id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Path of the containing folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    /// Full path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Billable size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billable_size: Option<u64>,
    /// Content size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// MD5 digest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5_hex: Option<String>,
    /// SHA-256 digest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256_hex: Option<String>,
    /// SHA-512 digest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha512_hex: Option<String>,
    /// User metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    /// Object tags.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    /// File or folder.
    #[serde(rename = "type", default)]
    pub object_type: ObjectType,
    /// Download URL, when a transfer method was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_url: Option<String>,
    /// Remaining remote fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// `result` of `/v1beta/get`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetResult {
    /// Download URL, when a transfer method was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_url: Option<String>,
    /// The object.
    pub object: StoredObject,
    /// Remaining remote fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// `result` of `/v1beta/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListResult {
    /// Objects on this page.
    #[serde(default)]
    pub objects: Vec<StoredObject>,
    /// Total matching objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Pagination cursor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    /// Remaining remote fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body of `/v1beta/get`, `/v1beta/delete`, and `/v1beta/update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectRequest {
    /// Object id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Object path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Transfer method, update fields, and similar.
    #[serde(flatten)]
    pub extra: Extra,
}

impl ObjectRequest {
    /// Whether the request names an object.
    pub fn has_locator(&self) -> bool {
        self.id.is_some() || self.path.is_some()
    }
}

/// Body of `/v1beta/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRequest {
    /// Filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<ListFilter>,
    /// Pagination, ordering, and similar.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Object listing filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListFilter {
    /// Exact object id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Parent folder id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Parent folder path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    /// Any of these ids.
    #[serde(rename = "id__in", default, skip_serializing_if = "Option::is_none")]
    pub id_in: Option<Vec<String>>,
    /// Remaining filter fields.
    #[serde(flatten)]
    pub extra: Extra,
}

impl ListFilter {
    /// Whether any of id, parent_id, folder, or id__in is set.
    pub fn has_locator(&self) -> bool {
        self.id.is_some() || self.parent_id.is_some() || self.folder.is_some() || self.id_in.is_some()
    }
}

/// Body of `/v1beta/folder/create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FolderCreateRequest {
    /// Folder name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Full folder path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Parent folder id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Metadata, tags, and similar.
    #[serde(flatten)]
    pub extra: Extra,
}

/// JSON `request` part of `/v1beta/put`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadRequest {
    /// File name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Destination folder path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Destination folder id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Transfer method, digests, and similar.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body of `/v1beta/share/link/get`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareGetRequest {
    /// Link id.
    #[serde(default)]
    pub id: String,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body of `/v1beta/share/link/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareListRequest {
    /// Filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<LinkFilter>,
    /// Pagination, ordering, and similar.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Share link listing filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkFilter {
    /// Links carrying all of these tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Any of these link ids.
    #[serde(rename = "id__in", default, skip_serializing_if = "Option::is_none")]
    pub id_in: Option<Vec<String>>,
    /// Remaining filter fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body of `/v1beta/share/link/delete`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareDeleteRequest {
    /// Link ids.
    #[serde(default)]
    pub ids: Vec<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body of `/v1beta/share/link/create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareCreateRequest {
    /// Links to create.
    #[serde(default)]
    pub links: Vec<LinkCreate>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// One link of a create request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkCreate {
    /// Shared object ids.
    #[serde(default)]
    pub targets: Vec<String>,
    /// Link tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Access limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_access_count: Option<u32>,
    /// Link type, expiry, authenticators, and similar.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body of `/v1beta/share/link/send`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareSendRequest {
    /// Links to send.
    #[serde(default)]
    pub links: Vec<LinkSend>,
    /// Sender shown to recipients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_email: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// One link of a send request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkSend {
    /// Link id.
    #[serde(default)]
    pub id: String,
    /// Recipient.
    #[serde(default)]
    pub email: String,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// A share link as returned by the remote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareLink {
    /// Link id.
    #[serde(default)]
    pub id: String,
    /// Shared object ids.
    #[serde(default)]
    pub targets: Vec<String>,
    /// Link tags.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    /// Access limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_access_count: Option<u32>,
    /// Remaining remote fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// `result` of `/v1beta/share/link/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareLinkList {
    /// Matching links.
    #[serde(default)]
    pub share_link_objects: Vec<ShareLink>,
    /// Total matching links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Remaining remote fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// `result` of `/v1beta/share/link/get`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareLinkGetResult {
    /// The link.
    pub share_link_object: ShareLink,
    /// Remaining remote fields.
    #[serde(flatten)]
    pub extra: Extra,
}
