//! Tenant scope: the virtual root folder of one (organization, user) pair.
//!
//! A scoped tenant sees the remote subtree `/{org_id}/{email}/` as `/`.
//! Every path the tenant sends is joined onto that root, and every folder
//! returned to the tenant has the root prefix removed. Prefix checks always
//! compare on a `/` boundary so `/org1/a@b.com.evil` is never treated as
//! living under `/org1/a@b.com`.

use serde::{Deserialize, Serialize};

use crate::share::types::StoredObject;

/// Organization and user a request is scoped to.
///
/// A scope with neither part set is *unscoped* and forwards every request
/// verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantScope {
    /// Organization id.
    org_id: Option<String>,
    /// User email.
    email: Option<String>,
}

impl TenantScope {
    /// Build a scope, treating empty strings as absent.
    pub fn new(org_id: Option<String>, email: Option<String>) -> Self {
        Self {
            org_id: org_id.filter(|s| !s.is_empty()),
            email: email.filter(|s| !s.is_empty()),
        }
    }

    /// Build a scope from borrowed parts.
    pub fn from_parts(org_id: Option<&str>, email: Option<&str>) -> Self {
        Self::new(org_id.map(str::to_string), email.map(str::to_string))
    }

    /// The unscoped (administrative) scope.
    pub fn unscoped() -> Self {
        Self::default()
    }

    /// Whether at least one of org id / email is set.
    pub fn is_scoped(&self) -> bool {
        self.org_id.is_some() || self.email.is_some()
    }

    /// Organization id.
    pub fn org_id(&self) -> Option<&str> {
        self.org_id.as_deref()
    }

    /// User email.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn segments(&self) -> Vec<&str> {
        [self.org_id(), self.email()].into_iter().flatten().collect()
    }

    /// Virtual root in filtering form, with a trailing slash:
    /// `/org1/a@b.com/`, or `/` when unscoped.
    pub fn scoped_path(&self) -> String {
        let mut path = String::from("/");
        for segment in self.segments() {
            path.push_str(segment);
            path.push('/');
        }
        path
    }

    /// Virtual root without its trailing slash (`/` when unscoped).
    pub fn base_path(&self) -> String {
        let path = self.scoped_path();
        match path.trim_end_matches('/') {
            "" => "/".to_string(),
            trimmed => trimmed.to_string(),
        }
    }

    /// `folder` of the tenant's own root folder object: the virtual root
    /// with its last segment removed (`/org1`; `/` for a single segment).
    pub fn root_display_path(&self) -> String {
        let segments = self.segments();
        match segments.split_last() {
            Some((_, parents)) if !parents.is_empty() => format!("/{}", parents.join("/")),
            _ => "/".to_string(),
        }
    }

    /// Name of the tenant's own root folder object.
    pub fn root_path_name(&self) -> &str {
        self.segments().last().copied().unwrap_or("")
    }

    /// Tags every scoped share link carries, `org:` first then `owner:`.
    pub fn link_tags(&self) -> Vec<String> {
        let mut tags = Vec::with_capacity(2);
        if let Some(org_id) = self.org_id() {
            tags.push(format!("org:{org_id}"));
        }
        if let Some(email) = self.email() {
            tags.push(format!("owner:{email}"));
        }
        tags
    }

    /// Whether `tags` contains every link tag of this scope.
    ///
    /// Always true for the unscoped scope.
    pub fn has_scoped_tags(&self, tags: &[String]) -> bool {
        if !self.is_scoped() {
            return true;
        }
        self.link_tags().iter().all(|tag| tags.contains(tag))
    }

    /// Join a tenant-relative path onto the virtual root with exactly one `/`.
    pub fn absolute_path(&self, relative: &str) -> String {
        let base = self.base_path();
        let relative = relative.trim_start_matches('/');
        match (base.as_str(), relative) {
            (base, "") => base.to_string(),
            ("/", rel) => format!("/{rel}"),
            (base, rel) => format!("{base}/{rel}"),
        }
    }

    /// Whether `folder` is the virtual root or lies beneath it.
    fn is_under_root(&self, folder: &str) -> bool {
        let base = self.base_path();
        base == "/" || folder == base || folder.starts_with(&self.scoped_path())
    }

    /// Prefix a tenant folder with the virtual root; absolute folders
    /// already under the root are left alone.
    pub fn prefix_folder(&self, folder: &str) -> String {
        if !self.is_scoped() || self.is_under_root(folder) {
            return folder.to_string();
        }
        self.absolute_path(folder)
    }

    /// Remove the virtual root from a remote folder (`/` for the root
    /// itself). Folders outside the root are returned unchanged.
    pub fn strip_folder(&self, folder: &str) -> String {
        if !self.is_scoped() {
            return folder.to_string();
        }
        let base = self.base_path();
        if folder == base || folder == self.scoped_path() {
            return "/".to_string();
        }
        match folder.strip_prefix(&base) {
            Some(rest) if rest.starts_with('/') => rest.to_string(),
            _ => folder.to_string(),
        }
    }

    /// Whether an object whose parent folder is `folder` (missing → `/`)
    /// lives inside the virtual root.
    pub fn contains_folder(&self, folder: Option<&str>) -> bool {
        let mut folder = folder.unwrap_or("/").to_string();
        if !folder.ends_with('/') {
            folder.push('/');
        }
        folder.starts_with(&self.scoped_path())
    }

    /// Whether `object` is the tenant's own root folder.
    pub fn is_root_object(&self, object: &StoredObject) -> bool {
        if !self.is_scoped() || object.name != self.root_path_name() {
            return false;
        }
        let folder = match object.folder.as_deref() {
            None | Some("") => "/",
            Some(folder) => folder,
        };
        folder == self.root_display_path()
    }

    /// Whether `object` is visible to this scope.
    pub fn owns(&self, object: &StoredObject) -> bool {
        !self.is_scoped()
            || self.is_root_object(object)
            || self.contains_folder(object.folder.as_deref())
    }

    /// Rewrite `object.folder` to its tenant-relative form.
    pub fn strip_object(&self, object: &mut StoredObject) {
        if let Some(folder) = object.folder.as_deref() {
            object.folder = Some(self.strip_folder(folder));
        }
    }
}
