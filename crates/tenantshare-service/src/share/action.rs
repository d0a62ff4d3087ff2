//! Inbound share actions.
//!
//! The browser component posts `{ "path": "<remote path>", "params": {..} }`.
//! Each supported path maps to one typed [`ShareAction`] variant; `params`
//! keeps unknown fields so they reach the remote unchanged.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use tenantshare_core::error::AppError;
use tenantshare_core::result::AppResult;
use tenantshare_remote::RemoteResponse;

use crate::share::client::{ShareClient, paths};
use crate::share::types::{
    FolderCreateRequest, ListRequest, ObjectRequest, ShareCreateRequest, ShareDeleteRequest,
    ShareGetRequest, ShareListRequest, ShareSendRequest,
};

/// Raw inbound envelope.
#[derive(Debug, Deserialize)]
struct ActionEnvelope {
    path: String,
    #[serde(default)]
    params: Option<Value>,
}

/// One share operation requested by a tenant.
#[derive(Debug, Clone, PartialEq)]
pub enum ShareAction {
    /// Object metadata or download.
    Get(ObjectRequest),
    /// Object listing.
    List(ListRequest),
    /// Object deletion.
    Delete(ObjectRequest),
    /// Object update.
    Update(ObjectRequest),
    /// Folder creation.
    FolderCreate(FolderCreateRequest),
    /// Link listing.
    LinkList(ShareListRequest),
    /// Single link.
    LinkGet(ShareGetRequest),
    /// Link deletion.
    LinkDelete(ShareDeleteRequest),
    /// Link creation.
    LinkCreate(ShareCreateRequest),
    /// Link delivery.
    LinkSend(ShareSendRequest),
}

fn params<T: DeserializeOwned>(path: &str, value: Value) -> AppResult<T> {
    serde_json::from_value(value)
        .map_err(|e| AppError::validation(format!("Invalid params for {path}: {e}")))
}

impl ShareAction {
    /// Parse a `{path, params}` body.
    pub fn parse(body: Value) -> AppResult<Self> {
        let envelope: ActionEnvelope = serde_json::from_value(body)
            .map_err(|e| AppError::validation(format!("Invalid share action: {e}")))?;
        let path = envelope.path.as_str();
        let value = match envelope.params {
            None | Some(Value::Null) => Value::Object(serde_json::Map::new()),
            Some(value) => value,
        };

        let action = match path {
            paths::GET => Self::Get(params(path, value)?),
            paths::LIST => Self::List(params(path, value)?),
            paths::DELETE => Self::Delete(params(path, value)?),
            paths::UPDATE => Self::Update(params(path, value)?),
            paths::FOLDER_CREATE => Self::FolderCreate(params(path, value)?),
            paths::LINK_LIST => Self::LinkList(params(path, value)?),
            paths::LINK_GET => Self::LinkGet(params(path, value)?),
            paths::LINK_DELETE => Self::LinkDelete(params(path, value)?),
            paths::LINK_CREATE => Self::LinkCreate(params(path, value)?),
            paths::LINK_SEND => Self::LinkSend(params(path, value)?),
            other => {
                return Err(AppError::validation(format!(
                    "Action {other} is not implemented or does not exist"
                )));
            }
        };
        action.validate()?;
        Ok(action)
    }

    /// Short operation name, used for audit events and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Get(_) => "get",
            Self::List(_) => "list",
            Self::Delete(_) => "delete",
            Self::Update(_) => "update",
            Self::FolderCreate(_) => "folder_create",
            Self::LinkList(_) => "link_list",
            Self::LinkGet(_) => "link_get",
            Self::LinkDelete(_) => "link_delete",
            Self::LinkCreate(_) => "link_create",
            Self::LinkSend(_) => "link_send",
        }
    }

    /// Reject requests that cannot name their target.
    pub fn validate(&self) -> AppResult<()> {
        match self {
            Self::Get(r) | Self::Delete(r) | Self::Update(r) if !r.has_locator() => Err(
                AppError::validation(format!("{} requires an id or a path", self.name())),
            ),
            Self::FolderCreate(r)
                if r.parent_id.is_none() && r.path.is_none() && r.name.is_none() =>
            {
                Err(AppError::validation(
                    "folder_create requires a parent_id, a path, or a name",
                ))
            }
            Self::LinkGet(r) if r.id.is_empty() => {
                Err(AppError::validation("link_get requires an id"))
            }
            Self::LinkDelete(r) if r.ids.is_empty() => {
                Err(AppError::validation("link_delete requires at least one id"))
            }
            Self::LinkCreate(r) if r.links.is_empty() => {
                Err(AppError::validation("link_create requires at least one link"))
            }
            Self::LinkSend(r) if r.links.is_empty() || r.links.iter().any(|l| l.id.is_empty()) => {
                Err(AppError::validation("link_send requires links with ids"))
            }
            _ => Ok(()),
        }
    }

    /// Run the action through `client`.
    pub async fn execute(self, client: &ShareClient) -> AppResult<RemoteResponse> {
        match self {
            Self::Get(r) => client.get_object(r).await,
            Self::List(r) => client.list_objects(r).await,
            Self::Delete(r) => client.delete_object(r).await,
            Self::Update(r) => client.update_object(r).await,
            Self::FolderCreate(r) => client.create_folder(r).await,
            Self::LinkList(r) => client.list_links(r).await,
            Self::LinkGet(r) => client.get_link(r).await,
            Self::LinkDelete(r) => client.delete_link(r).await,
            Self::LinkCreate(r) => client.create_link(r).await,
            Self::LinkSend(r) => client.send_link(r).await,
        }
    }
}
