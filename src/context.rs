//! Execution context supplied by the host
//!
//! The context describes the current project and the iRODS/WebDAV setup the
//! panel operates against. It is read-only for the panel's lifetime and is
//! the single source for WebDAV link derivation.

use serde::{Deserialize, Serialize};

/// Host-supplied context for the shortcut panel
///
/// Mirrors the JSON payload the host page hands to the panel on mount.
/// Unknown fields are ignored so the host can carry extra data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExecutionContext {
    /// UUID of the current project
    #[serde(default)]
    pub project_uuid: String,
    /// Display title of the current project
    #[serde(default)]
    pub project_title: Option<String>,
    /// Whether sample data collections exist in iRODS
    #[serde(default)]
    pub irods_status: bool,
    /// Whether the WebDAV mirror is available
    #[serde(default)]
    pub irods_webdav_enabled: bool,
    /// Base URL of the WebDAV mirror
    #[serde(default)]
    pub irods_webdav_url: Option<String>,
}

impl ExecutionContext {
    /// Load a context from a JSON string
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if the JSON does not describe a context.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Whether WebDAV links can be derived at all
    #[must_use]
    pub fn dav_available(&self) -> bool {
        self.irods_webdav_enabled
            && self
                .irods_webdav_url
                .as_ref()
                .is_some_and(|url| !url.is_empty())
    }

    /// Derive the WebDAV URL for an iRODS path
    ///
    /// The WebDAV base URL replaces the file store root, and each path
    /// segment is percent-encoded with slashes preserved. Returns `None`
    /// when WebDAV is disabled or unconfigured, or the path is not
    /// absolute; callers use that to suppress dav affordances.
    #[must_use]
    pub fn dav_url(&self, path: &str) -> Option<String> {
        if !self.dav_available() || !path.starts_with('/') {
            return None;
        }
        let base = self.irods_webdav_url.as_deref()?.trim_end_matches('/');
        let encoded = path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        Some(format!("{base}{encoded}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn webdav_context() -> ExecutionContext {
        ExecutionContext {
            project_uuid: "00000000-0000-0000-0000-000000000000".to_string(),
            project_title: Some("Test Project".to_string()),
            irods_status: true,
            irods_webdav_enabled: true,
            irods_webdav_url: Some("https://davrods.example.org".to_string()),
        }
    }

    #[test]
    fn test_dav_url_basic() {
        let ctx = webdav_context();
        assert_eq!(
            ctx.dav_url("/zone/projects/00/sample_data").as_deref(),
            Some("https://davrods.example.org/zone/projects/00/sample_data")
        );
    }

    #[test]
    fn test_dav_url_percent_encodes_segments() {
        let ctx = webdav_context();
        assert_eq!(
            ctx.dav_url("/zone/Misc Files/a#b").as_deref(),
            Some("https://davrods.example.org/zone/Misc%20Files/a%23b")
        );
    }

    #[test]
    fn test_dav_url_trims_trailing_base_slash() {
        let mut ctx = webdav_context();
        ctx.irods_webdav_url = Some("https://davrods.example.org/".to_string());
        assert_eq!(
            ctx.dav_url("/zone/x").as_deref(),
            Some("https://davrods.example.org/zone/x")
        );
    }

    #[test]
    fn test_dav_url_unavailable_when_disabled() {
        let mut ctx = webdav_context();
        ctx.irods_webdav_enabled = false;
        assert!(!ctx.dav_available());
        assert!(ctx.dav_url("/zone/x").is_none());
    }

    #[test]
    fn test_dav_url_unavailable_without_base() {
        let mut ctx = webdav_context();
        ctx.irods_webdav_url = None;
        assert!(ctx.dav_url("/zone/x").is_none());

        ctx.irods_webdav_url = Some(String::new());
        assert!(ctx.dav_url("/zone/x").is_none());
    }

    #[test]
    fn test_dav_url_rejects_relative_path() {
        let ctx = webdav_context();
        assert!(ctx.dav_url("zone/x").is_none());
    }

    #[test]
    fn test_context_from_json_ignores_unknown_fields() {
        let ctx = ExecutionContext::from_json(
            r#"{
                "project_uuid": "1234",
                "irods_webdav_enabled": true,
                "irods_webdav_url": "https://dav.example.org",
                "perms": {"edit_sheet": true}
            }"#,
        )
        .unwrap();
        assert_eq!(ctx.project_uuid, "1234");
        assert!(ctx.dav_available());
    }
}
