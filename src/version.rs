//! # Version Module
//!
//! Compares the running Claude Code version against the latest published
//! release. The comparison result is cached on disk for an hour so the
//! statusline does not hit the network on every prompt redraw, and every
//! failure mode reports `Current` so the line always renders.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// How long a cached comparison result stays valid.
pub const CACHE_FRESH_SECONDS: u64 = 3600;

const RELEASES_ENDPOINT: &str =
    "https://api.github.com/repos/anthropics/claude-code/releases/latest";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "claude-contextline";

static VERSION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VersionStatus {
    Current,
    Outdated,
}

impl VersionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            VersionStatus::Current => "current",
            VersionStatus::Outdated => "outdated",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "current" => Some(VersionStatus::Current),
            "outdated" => Some(VersionStatus::Outdated),
            _ => None,
        }
    }
}

/// Storage for the comparison result. `read` returns `None` when the entry
/// is absent, stale, or unreadable, which forces a fresh fetch.
pub trait StatusCache {
    fn read(&self) -> Option<VersionStatus>;
    fn write(&self, status: VersionStatus);
}

/// Plain-text cache file holding exactly "current" or "outdated", freshness
/// judged by file mtime.
pub struct FileStatusCache {
    path: PathBuf,
    fresh_for: Duration,
}

impl FileStatusCache {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            fresh_for: Duration::from_secs(CACHE_FRESH_SECONDS),
        }
    }

    pub fn with_freshness(path: PathBuf, fresh_for: Duration) -> Self {
        Self { path, fresh_for }
    }
}

impl StatusCache for FileStatusCache {
    fn read(&self) -> Option<VersionStatus> {
        let modified = fs::metadata(&self.path).ok()?.modified().ok()?;
        if modified.elapsed().ok()? >= self.fresh_for {
            return None;
        }
        VersionStatus::parse(&fs::read_to_string(&self.path).ok()?)
    }

    fn write(&self, status: VersionStatus) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let _ = fs::write(&self.path, status.as_str());
    }
}

/// Resolve the version status: a fresh cache entry is returned as-is and no
/// fetch happens; otherwise `fetch_latest` runs once and the outcome (or the
/// fail-open default on any failure) is written through to the cache.
pub fn version_status<F>(current: &str, cache: &dyn StatusCache, fetch_latest: F) -> VersionStatus
where
    F: FnOnce() -> Option<String>,
{
    if let Some(cached) = cache.read() {
        return cached;
    }
    let status = fetch_latest()
        .as_deref()
        .and_then(|tag| compare_versions(current, tag))
        .unwrap_or(VersionStatus::Current);
    cache.write(status);
    status
}

/// Tuple comparison of the first three numeric components, leading "v" and
/// any prerelease suffix ignored. `None` when either side has no parseable
/// triple.
pub fn compare_versions(current: &str, latest_tag: &str) -> Option<VersionStatus> {
    let current = semver_triple(current)?;
    let latest = semver_triple(latest_tag)?;
    Some(if current < latest {
        VersionStatus::Outdated
    } else {
        VersionStatus::Current
    })
}

fn semver_triple(v: &str) -> Option<(u64, u64, u64)> {
    let caps = VERSION_RE.captures(v.trim_start_matches('v'))?;
    Some((
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    ))
}

/// Single bounded GET against the release feed; any transport or shape
/// problem yields `None`.
pub fn fetch_latest_tag() -> Option<String> {
    let agent = ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build();
    let body: Value = agent
        .get(RELEASES_ENDPOINT)
        .set("User-Agent", USER_AGENT)
        .set("Accept", "application/json")
        .call()
        .ok()?
        .into_json()
        .ok()?;
    body.get("tag_name")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .filter(|tag| !tag.is_empty())
}
