//! Pure request and result rewrites for a tenant scope.

use std::collections::BTreeSet;

use crate::share::scope::TenantScope;
use crate::share::types::{
    FolderCreateRequest, LinkFilter, ListFilter, ListResult, ShareCreateRequest, ShareListRequest,
    ShareSendRequest, UploadRequest,
};

/// Access limit forced onto every link a scoped tenant creates.
pub const SCOPED_MAX_ACCESS_COUNT: u32 = 7;

/// Confine a listing filter to the tenant's subtree.
///
/// Without any locator the listing defaults to the tenant root; a folder
/// outside the root is treated as tenant-relative.
pub fn scope_list_filter(scope: &TenantScope, filter: Option<ListFilter>) -> ListFilter {
    let mut filter = filter.unwrap_or_default();
    if !filter.has_locator() {
        filter.folder = Some(scope.base_path());
    }
    if let Some(folder) = filter.folder.take() {
        filter.folder = Some(scope.prefix_folder(&folder));
    }
    filter
}

/// Drop objects outside the tenant's subtree and strip the root prefix
/// from the rest.
///
/// Returns how many objects were dropped.
pub fn visible_listing(scope: &TenantScope, result: &mut ListResult) -> usize {
    let before = result.objects.len();
    result.objects.retain(|object| scope.owns(object));
    let dropped = before - result.objects.len();

    for object in &mut result.objects {
        scope.strip_object(object);
    }
    if dropped > 0 {
        if let Some(count) = result.count.as_mut() {
            *count = count.saturating_sub(dropped as u64);
        }
    }
    dropped
}

/// Place a new folder under the tenant root. `name` is folded into `path`.
pub fn scope_folder_create(scope: &TenantScope, mut request: FolderCreateRequest) -> FolderCreateRequest {
    let relative = request.path.take().or_else(|| request.name.clone()).unwrap_or_default();
    request.path = Some(scope.absolute_path(&relative));
    request.name = None;
    request
}

/// Place an upload under the tenant root when it names no parent id.
///
/// `path` is the destination folder, so the result is
/// `{root}/{path}/{name}`; without a path the file lands in the root.
pub fn scope_upload_request(scope: &TenantScope, mut request: UploadRequest) -> UploadRequest {
    let name = request.name.take().unwrap_or_default();
    let relative = match request.path.take() {
        Some(path) => {
            let folder = path.trim_matches('/');
            if folder.is_empty() {
                name
            } else {
                format!("{folder}/{name}")
            }
        }
        None => name,
    };
    request.path = Some(scope.absolute_path(&relative));
    request
}

/// Require the tenant's link tags on a link listing.
pub fn scope_link_filter(scope: &TenantScope, mut request: ShareListRequest) -> ShareListRequest {
    let mut filter = request.filter.take().unwrap_or_default();
    let mut tags = filter.tags.take().unwrap_or_default();
    for tag in scope.link_tags() {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    filter.tags = Some(tags);
    request.filter = Some(filter);
    request
}

/// Filter listing the tenant's links among `ids`.
pub fn owned_links_filter(scope: &TenantScope, ids: Vec<String>) -> LinkFilter {
    LinkFilter {
        id_in: Some(ids),
        tags: scope.is_scoped().then(|| scope.link_tags()),
        ..LinkFilter::default()
    }
}

/// Stamp tenant tags and the access limit onto every link.
///
/// Returns the distinct target ids across all links.
pub fn scope_create_links(
    scope: &TenantScope,
    request: &mut ShareCreateRequest,
) -> BTreeSet<String> {
    let tags = scope.link_tags();
    let mut targets = BTreeSet::new();
    for link in &mut request.links {
        link.tags = Some(tags.clone());
        link.max_access_count = Some(SCOPED_MAX_ACCESS_COUNT);
        targets.extend(link.targets.iter().cloned());
    }
    targets
}

/// Force the sender to the tenant's own email.
pub fn scope_send_request(scope: &TenantScope, mut request: ShareSendRequest) -> ShareSendRequest {
    request.sender_email = scope.email().map(str::to_string);
    request
}
