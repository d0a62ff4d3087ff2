//! Tenant-scoped share client.
//!
//! [`ShareClient`] forwards share operations to the remote service. With
//! an unscoped [`TenantScope`] every request and response passes through
//! verbatim. With a scoped one, paths and filters are confined to the
//! tenant's subtree, objects are probed for ownership before they are
//! touched, links are tagged with the tenant, and everything returned has
//! the tenant prefix stripped. Anything outside the subtree is reported
//! as a uniform 404.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use tenantshare_core::error::AppError;
use tenantshare_core::result::AppResult;
use tenantshare_core::types::envelope::{Envelope, STATUS_SUCCESS};
use tenantshare_remote::{FormPart, HttpTransport, MultipartBody, RemoteResponse, RequestBody};

use crate::share::rewrite;
use crate::share::scope::TenantScope;
use crate::share::types::{
    FolderCreateRequest, GetResult, ListFilter, ListRequest, ListResult, ObjectRequest,
    ShareCreateRequest, ShareDeleteRequest, ShareGetRequest, ShareLinkGetResult, ShareLinkList,
    ShareListRequest, ShareSendRequest, UploadRequest,
};

/// Remote share service paths.
pub mod paths {
    /// Object metadata or download.
    pub const GET: &str = "/v1beta/get";
    /// Object listing.
    pub const LIST: &str = "/v1beta/list";
    /// Object deletion.
    pub const DELETE: &str = "/v1beta/delete";
    /// Object update.
    pub const UPDATE: &str = "/v1beta/update";
    /// Folder creation.
    pub const FOLDER_CREATE: &str = "/v1beta/folder/create";
    /// File upload.
    pub const PUT: &str = "/v1beta/put";
    /// Link listing.
    pub const LINK_LIST: &str = "/v1beta/share/link/list";
    /// Single link.
    pub const LINK_GET: &str = "/v1beta/share/link/get";
    /// Link deletion.
    pub const LINK_DELETE: &str = "/v1beta/share/link/delete";
    /// Link creation.
    pub const LINK_CREATE: &str = "/v1beta/share/link/create";
    /// Link delivery.
    pub const LINK_SEND: &str = "/v1beta/share/link/send";
}

/// Name of the JSON part of an upload form.
pub const UPLOAD_REQUEST_PART: &str = "request";

/// Outcome of an internal lookup: either the decoded value, or a response
/// that must be returned to the caller as-is (remote error or not-found).
#[derive(Debug)]
pub enum Lookup<T> {
    /// The lookup succeeded.
    Found(T),
    /// Return this response instead of continuing.
    Respond(RemoteResponse),
}

/// Client for the remote share service, optionally scoped to one tenant.
#[derive(Debug, Clone)]
pub struct ShareClient {
    /// Transport bound to the share service.
    transport: Arc<HttpTransport>,
    /// Tenant this client acts for.
    scope: TenantScope,
}

impl ShareClient {
    /// Create an unscoped client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self {
            transport,
            scope: TenantScope::unscoped(),
        }
    }

    /// A copy of this client acting for `scope`.
    pub fn scoped(&self, scope: TenantScope) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            scope,
        }
    }

    /// Tenant this client acts for.
    pub fn scope(&self) -> &TenantScope {
        &self.scope
    }

    async fn forward<T: Serialize>(&self, path: &str, body: &T) -> AppResult<RemoteResponse> {
        self.transport.request(path, RequestBody::json(body)?).await
    }

    /// Decode a 200 success envelope, or hand the response back.
    ///
    /// Non-200 answers and failure envelopes are handed back for verbatim
    /// relay. A scoped client never relays a 200 it cannot read, since its
    /// contents could not be checked against the tenant.
    fn decode_success<T: DeserializeOwned>(&self, response: RemoteResponse) -> AppResult<Lookup<Envelope<T>>> {
        if response.status() != 200 {
            return Ok(Lookup::Respond(response));
        }
        match response.json::<Envelope<T>>() {
            Ok(envelope) if envelope.is_success() => Ok(Lookup::Found(envelope)),
            Ok(_) => Ok(Lookup::Respond(response)),
            Err(err) if self.scope.is_scoped() && !reports_failure(&response) => {
                warn!(
                    org_id = self.scope.org_id().unwrap_or_default(),
                    email = self.scope.email().unwrap_or_default(),
                    error = %err,
                    "Refused to relay unreadable share service response"
                );
                Err(AppError::external_service(
                    "Share service returned an unreadable response",
                ))
            }
            Err(_) => Ok(Lookup::Respond(response)),
        }
    }

    /// POST `body` and decode a successful envelope; any other answer is
    /// handed back for verbatim relay.
    async fn fetch<B, T>(&self, path: &str, body: &B) -> AppResult<Lookup<Envelope<T>>>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.forward(path, body).await?;
        self.decode_success(response)
    }

    fn deny(&self, request_id: Option<String>, what: &str, id: Option<&str>) -> RemoteResponse {
        info!(
            org_id = self.scope.org_id().unwrap_or_default(),
            email = self.scope.email().unwrap_or_default(),
            target = what,
            id = id.unwrap_or_default(),
            "Denied access outside tenant scope"
        );
        RemoteResponse::not_found(request_id)
    }

    /// Tenant-relative object path made absolute.
    fn scope_object_path(&self, path: Option<String>) -> Option<String> {
        path.map(|p| self.scope.prefix_folder(&p))
    }

    /// Fetch an object's metadata and check that it belongs to the tenant.
    ///
    /// The returned object has its folder rewritten to tenant-relative form.
    pub async fn probe_object(
        &self,
        id: Option<&str>,
        path: Option<&str>,
    ) -> AppResult<Lookup<Envelope<GetResult>>> {
        let request = ObjectRequest {
            id: id.map(str::to_string),
            path: path.map(str::to_string),
            ..ObjectRequest::default()
        };
        let mut envelope = match self.fetch::<_, GetResult>(paths::GET, &request).await? {
            Lookup::Found(envelope) => envelope,
            respond => return Ok(respond),
        };

        if !self.scope.is_scoped() || self.scope.is_root_object(&envelope.result.object) {
            return Ok(Lookup::Found(envelope));
        }

        if !self.scope.contains_folder(envelope.result.object.folder.as_deref()) {
            let object_id = envelope.result.object.id.clone();
            return Ok(Lookup::Respond(self.deny(
                envelope.request_id,
                "object",
                Some(&object_id),
            )));
        }

        self.scope.strip_object(&mut envelope.result.object);
        Ok(Lookup::Found(envelope))
    }

    /// Object metadata, or a download when the request carries a transfer
    /// method.
    pub async fn get_object(&self, mut request: ObjectRequest) -> AppResult<RemoteResponse> {
        if !self.scope.is_scoped() {
            return self.forward(paths::GET, &request).await;
        }

        request.path = self.scope_object_path(request.path);
        let envelope = match self
            .probe_object(request.id.as_deref(), request.path.as_deref())
            .await?
        {
            Lookup::Found(envelope) => envelope,
            Lookup::Respond(response) => return Ok(response),
        };

        if request.extra.is_empty() {
            return RemoteResponse::from_json(200, &envelope);
        }

        let response = self.forward(paths::GET, &request).await?;
        match self.decode_success::<GetResult>(response.clone())? {
            Lookup::Found(mut envelope) => {
                self.scope.strip_object(&mut envelope.result.object);
                RemoteResponse::from_json(response.status(), &envelope)
            }
            Lookup::Respond(response) => Ok(response),
        }
    }

    /// List objects, rewriting folders for scoped callers.
    pub async fn list_objects(&self, request: ListRequest) -> AppResult<RemoteResponse> {
        if !self.scope.is_scoped() {
            return self.forward(paths::LIST, &request).await;
        }
        match self.list_objs(request).await? {
            Lookup::Found(envelope) => RemoteResponse::from_json(200, &envelope),
            Lookup::Respond(response) => Ok(response),
        }
    }

    /// Decoded object listing confined to the tenant's subtree.
    pub async fn list_objs(&self, mut request: ListRequest) -> AppResult<Lookup<Envelope<ListResult>>> {
        if self.scope.is_scoped() {
            let filter = rewrite::scope_list_filter(&self.scope, request.filter.take());
            if let Some(parent_id) = filter.parent_id.as_deref() {
                if let Lookup::Respond(response) = self.probe_object(Some(parent_id), None).await? {
                    return Ok(Lookup::Respond(response));
                }
            }
            if let Some(id) = filter.id.as_deref() {
                if let Lookup::Respond(response) = self.probe_object(Some(id), None).await? {
                    return Ok(Lookup::Respond(response));
                }
            }
            request.filter = Some(filter);
        }

        let mut envelope = match self.fetch::<_, ListResult>(paths::LIST, &request).await? {
            Lookup::Found(envelope) => envelope,
            respond => return Ok(respond),
        };

        if self.scope.is_scoped() {
            let dropped = rewrite::visible_listing(&self.scope, &mut envelope.result);
            if dropped > 0 {
                warn!(
                    org_id = self.scope.org_id().unwrap_or_default(),
                    email = self.scope.email().unwrap_or_default(),
                    dropped,
                    "Removed objects outside tenant scope from listing"
                );
            }
        }
        Ok(Lookup::Found(envelope))
    }

    async fn guarded(&self, remote_path: &str, mut request: ObjectRequest) -> AppResult<RemoteResponse> {
        if self.scope.is_scoped() {
            request.path = self.scope_object_path(request.path);
            if let Lookup::Respond(response) = self
                .probe_object(request.id.as_deref(), request.path.as_deref())
                .await?
            {
                return Ok(response);
            }
        }
        self.forward(remote_path, &request).await
    }

    /// Delete an object owned by the tenant.
    pub async fn delete_object(&self, request: ObjectRequest) -> AppResult<RemoteResponse> {
        self.guarded(paths::DELETE, request).await
    }

    /// Update an object owned by the tenant.
    pub async fn update_object(&self, request: ObjectRequest) -> AppResult<RemoteResponse> {
        self.guarded(paths::UPDATE, request).await
    }

    /// Create a folder under an owned parent, or under the tenant root.
    pub async fn create_folder(&self, request: FolderCreateRequest) -> AppResult<RemoteResponse> {
        if !self.scope.is_scoped() {
            return self.forward(paths::FOLDER_CREATE, &request).await;
        }

        let request = match request.parent_id.clone() {
            Some(parent_id) => {
                if let Lookup::Respond(response) = self.probe_object(Some(&parent_id), None).await? {
                    return Ok(response);
                }
                request
            }
            None => rewrite::scope_folder_create(&self.scope, request),
        };
        self.forward(paths::FOLDER_CREATE, &request).await
    }

    /// Upload a file. The form's JSON `request` part is rewritten for
    /// scoped callers; every other part is forwarded untouched.
    pub async fn upload(&self, mut form: MultipartBody) -> AppResult<RemoteResponse> {
        if !self.scope.is_scoped() {
            return self.transport.request(paths::PUT, form.into()).await;
        }

        let part = form.get(UPLOAD_REQUEST_PART).ok_or_else(|| {
            AppError::validation(format!("Upload is missing the '{UPLOAD_REQUEST_PART}' part"))
        })?;
        let request: UploadRequest = serde_json::from_slice(&part.data).map_err(|e| {
            AppError::validation(format!("Upload '{UPLOAD_REQUEST_PART}' part is not valid JSON: {e}"))
        })?;

        let request = match request.parent_id.clone() {
            Some(parent_id) if request.path.is_none() => {
                if let Lookup::Respond(response) = self.probe_object(Some(&parent_id), None).await? {
                    return Ok(response);
                }
                request
            }
            _ => rewrite::scope_upload_request(&self.scope, request),
        };

        form.set(FormPart::json(UPLOAD_REQUEST_PART, &serde_json::to_value(&request)?)?);
        self.transport.request(paths::PUT, form.into()).await
    }

    /// Links among `ids` that the tenant may see.
    pub async fn get_share_links(&self, ids: Vec<String>) -> AppResult<Lookup<Envelope<ShareLinkList>>> {
        let request = ShareListRequest {
            filter: Some(rewrite::owned_links_filter(&self.scope, ids)),
            ..ShareListRequest::default()
        };
        self.fetch(paths::LINK_LIST, &request).await
    }

    /// Ids among `ids` that are owned links, or the response to relay.
    async fn owned_link_ids(&self, ids: Vec<String>) -> AppResult<Lookup<HashSet<String>>> {
        Ok(match self.get_share_links(ids).await? {
            Lookup::Found(envelope) => Lookup::Found(
                envelope
                    .result
                    .share_link_objects
                    .into_iter()
                    .filter(|link| self.scope.has_scoped_tags(&link.tags))
                    .map(|link| link.id)
                    .collect(),
            ),
            Lookup::Respond(response) => Lookup::Respond(response),
        })
    }

    /// A single link, reported as not found unless it carries the tenant's tags.
    pub async fn get_link(&self, request: ShareGetRequest) -> AppResult<RemoteResponse> {
        let response = self.forward(paths::LINK_GET, &request).await?;
        if !self.scope.is_scoped() {
            return Ok(response);
        }

        match self.decode_success::<ShareLinkGetResult>(response.clone())? {
            Lookup::Found(envelope) if !self.scope.has_scoped_tags(&envelope.result.share_link_object.tags) => {
                Ok(self.deny(envelope.request_id, "link", Some(&request.id)))
            }
            _ => Ok(response),
        }
    }

    /// List links; scoped callers only see links carrying their tags.
    pub async fn list_links(&self, request: ShareListRequest) -> AppResult<RemoteResponse> {
        let request = if self.scope.is_scoped() {
            rewrite::scope_link_filter(&self.scope, request)
        } else {
            request
        };
        self.forward(paths::LINK_LIST, &request).await
    }

    /// Delete links, all of which must belong to the tenant.
    pub async fn delete_link(&self, request: ShareDeleteRequest) -> AppResult<RemoteResponse> {
        if self.scope.is_scoped() {
            let owned = match self.owned_link_ids(request.ids.clone()).await? {
                Lookup::Found(owned) => owned,
                Lookup::Respond(response) => return Ok(response),
            };
            if let Some(missing) = request.ids.iter().find(|id| !owned.contains(*id)) {
                return Ok(self.deny(None, "link", Some(missing)));
            }
        }
        self.forward(paths::LINK_DELETE, &request).await
    }

    /// Create links. Scoped links are tagged with the tenant, limited to
    /// seven accesses, and may only target objects the tenant owns.
    pub async fn create_link(&self, mut request: ShareCreateRequest) -> AppResult<RemoteResponse> {
        if !self.scope.is_scoped() {
            return self.forward(paths::LINK_CREATE, &request).await;
        }

        let targets = rewrite::scope_create_links(&self.scope, &mut request);
        if !targets.is_empty() {
            let listing = ListRequest {
                filter: Some(ListFilter {
                    id_in: Some(targets.iter().cloned().collect()),
                    ..ListFilter::default()
                }),
                ..ListRequest::default()
            };
            let envelope = match self.list_objs(listing).await? {
                Lookup::Found(envelope) => envelope,
                Lookup::Respond(response) => return Ok(response),
            };
            let owned: HashSet<&str> = envelope.result.objects.iter().map(|o| o.id.as_str()).collect();
            if let Some(missing) = targets.iter().find(|t| !owned.contains(t.as_str())) {
                return Ok(self.deny(envelope.request_id.clone(), "object", Some(missing)));
            }
        }

        self.forward(paths::LINK_CREATE, &request).await
    }

    /// Send links, all of which must belong to the tenant, from the
    /// tenant's own address.
    pub async fn send_link(&self, request: ShareSendRequest) -> AppResult<RemoteResponse> {
        if !self.scope.is_scoped() {
            return self.forward(paths::LINK_SEND, &request).await;
        }

        let ids: Vec<String> = request.links.iter().map(|link| link.id.clone()).collect();
        let owned = match self.owned_link_ids(ids.clone()).await? {
            Lookup::Found(owned) => owned,
            Lookup::Respond(response) => return Ok(response),
        };
        if let Some(missing) = ids.iter().find(|id| !owned.contains(*id)) {
            return Ok(self.deny(None, "link", Some(missing)));
        }
        // Each link may be sent once per request.
        let mut seen = HashSet::with_capacity(ids.len());
        if let Some(repeated) = ids.iter().find(|id| !seen.insert(id.as_str())) {
            return Ok(self.deny(None, "link", Some(repeated)));
        }

        let request = rewrite::scope_send_request(&self.scope, request);
        self.forward(paths::LINK_SEND, &request).await
    }
}

/// Whether the body is an envelope whose `status` reports a failure.
fn reports_failure(response: &RemoteResponse) -> bool {
    response
        .json::<Value>()
        .ok()
        .and_then(|body| {
            body.get("status")?
                .as_str()
                .map(|status| !status.eq_ignore_ascii_case(STATUS_SUCCESS))
        })
        .unwrap_or(false)
}
