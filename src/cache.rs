use std::fs;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use camino::{Utf8Path, Utf8PathBuf};
use directories::BaseDirs;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::SurveyError;

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(86_400);
pub const MIN_REQUEST_INTERVAL: Duration = Duration::from_secs(1);

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub url: String,
    pub status: u16,
    pub fetched_at: u64,
    pub body: String,
}

/// One JSON file per cached response, named by the SHA-256 of the request URL.
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: Utf8PathBuf,
}

impl CacheStore {
    pub fn new() -> Result<Self, SurveyError> {
        let root = BaseDirs::new()
            .and_then(|dirs| {
                Utf8PathBuf::from_path_buf(
                    dirs.home_dir().join(".cache").join("inat-occurrence-survey"),
                )
                .ok()
            })
            .ok_or_else(|| {
                SurveyError::Filesystem("unable to resolve cache directory".to_string())
            })?;
        Ok(Self { root })
    }

    pub fn new_with_root(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn entry_path(&self, url: &str) -> Utf8PathBuf {
        let digest = Sha256::digest(url.as_bytes());
        self.root.join(format!("{digest:x}.json"))
    }

    pub fn load(&self, url: &str, ttl: Duration) -> Option<CacheEntry> {
        let path = self.entry_path(url);
        let content = fs::read_to_string(path.as_std_path()).ok()?;
        let entry: CacheEntry = serde_json::from_str(&content).ok()?;
        if entry.fetched_at + ttl.as_secs() > now_secs() {
            Some(entry)
        } else {
            None
        }
    }

    pub fn store(&self, url: &str, status: u16, body: &str) -> Result<(), SurveyError> {
        let entry = CacheEntry {
            url: url.to_string(),
            status,
            fetched_at: now_secs(),
            body: body.to_string(),
        };
        let content = serde_json::to_vec_pretty(&entry)
            .map_err(|err| SurveyError::Filesystem(err.to_string()))?;
        let path = self.entry_path(url);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent.as_std_path())
                .map_err(|err| SurveyError::Filesystem(err.to_string()))?;
        }
        let tmp_path = path.with_extension("json.tmp");
        fs::write(tmp_path.as_std_path(), &content)
            .map_err(|err| SurveyError::Filesystem(err.to_string()))?;
        fs::rename(tmp_path.as_std_path(), path.as_std_path())
            .map_err(|err| SurveyError::Filesystem(err.to_string()))?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), SurveyError> {
        if self.root.as_std_path().exists() {
            fs::remove_dir_all(self.root.as_std_path())
                .map_err(|err| SurveyError::Filesystem(err.to_string()))?;
        }
        Ok(())
    }

    /// Removes entries older than `ttl`, along with entries that no longer
    /// parse. Returns the number of files removed.
    pub fn remove_expired(&self, ttl: Duration) -> Result<usize, SurveyError> {
        if !self.root.as_std_path().exists() {
            return Ok(0);
        }
        let mut removed = 0;
        let entries = fs::read_dir(self.root.as_std_path())
            .map_err(|err| SurveyError::Filesystem(err.to_string()))?;
        for entry in entries {
            let entry = entry.map_err(|err| SurveyError::Filesystem(err.to_string()))?;
            let path = entry.path();
            if path.extension().map(|ext| ext == "json").unwrap_or(false) {
                let stale = match fs::read_to_string(&path)
                    .ok()
                    .and_then(|content| serde_json::from_str::<CacheEntry>(&content).ok())
                {
                    Some(cached) => cached.fetched_at + ttl.as_secs() <= now_secs(),
                    None => true,
                };
                if stale {
                    fs::remove_file(&path)
                        .map_err(|err| SurveyError::Filesystem(err.to_string()))?;
                    removed += 1;
                }
            }
        }
        Ok(removed)
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

/// Fixed-interval gate between upstream requests. Cache hits bypass it.
#[derive(Debug, Clone)]
pub struct Pacer {
    min_interval: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl Pacer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    pub fn unthrottled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn pace(&self) {
        if self.min_interval.is_zero() {
            return;
        }
        let mut last = self
            .last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                thread::sleep(self.min_interval - elapsed);
            }
        }
        *last = Some(Instant::now());
    }
}

#[derive(Debug, Clone)]
pub struct FetchedResponse {
    pub status: u16,
    pub body: String,
    pub from_cache: bool,
}

/// Blocking HTTP client with a read-through response cache. Only status-200
/// responses are written back; errors carry the transport message so callers
/// can attribute them to their own service.
#[derive(Clone)]
pub struct CachedHttp {
    client: Client,
    store: Option<CacheStore>,
    default_ttl: Duration,
    pacer: Pacer,
}

impl CachedHttp {
    pub fn new(
        store: Option<CacheStore>,
        default_ttl: Duration,
        pacer: Pacer,
    ) -> Result<Self, String> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("inat-survey/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| err.to_string())?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| err.to_string())?;
        Ok(Self {
            client,
            store,
            default_ttl,
            pacer,
        })
    }

    pub fn get(&self, url: &str) -> Result<FetchedResponse, String> {
        self.get_with_ttl(url, self.default_ttl)
    }

    pub fn get_with_ttl(&self, url: &str, ttl: Duration) -> Result<FetchedResponse, String> {
        if let Some(store) = &self.store {
            if let Some(entry) = store.load(url, ttl) {
                tracing::debug!("cache hit for {}", url);
                return Ok(FetchedResponse {
                    status: entry.status,
                    body: entry.body,
                    from_cache: true,
                });
            }
        }
        self.pacer.pace();
        let response = self.client.get(url).send().map_err(|err| err.to_string())?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|err| err.to_string())?;
        if status == 200 {
            if let Some(store) = &self.store {
                if let Err(err) = store.store(url, status, &body) {
                    tracing::warn!("failed to write cache entry for {}: {}", url, err);
                }
            }
        }
        Ok(FetchedResponse {
            status,
            body,
            from_cache: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, CacheStore) {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, CacheStore::new_with_root(root))
    }

    #[test]
    fn entry_paths_are_stable_and_distinct() {
        let (_dir, store) = temp_store();
        let a = store.entry_path("https://example.org/a");
        let b = store.entry_path("https://example.org/b");
        assert_eq!(a, store.entry_path("https://example.org/a"));
        assert_ne!(a, b);
        assert!(a.as_str().ends_with(".json"));
    }

    #[test]
    fn stored_entries_are_fresh_until_ttl() {
        let (_dir, store) = temp_store();
        let url = "https://example.org/observations";
        store.store(url, 200, "{\"results\":[]}").unwrap();

        let entry = store.load(url, Duration::from_secs(1000)).unwrap();
        assert_eq!(entry.status, 200);
        assert_eq!(entry.body, "{\"results\":[]}");
        assert_eq!(entry.url, url);

        assert!(store.load(url, Duration::ZERO).is_none());
    }

    #[test]
    fn corrupt_entries_load_as_misses() {
        let (_dir, store) = temp_store();
        let url = "https://example.org/bad";
        let path = store.entry_path(url);
        fs::create_dir_all(path.parent().unwrap().as_std_path()).unwrap();
        fs::write(path.as_std_path(), "not json").unwrap();
        assert!(store.load(url, Duration::from_secs(1000)).is_none());
    }

    #[test]
    fn remove_expired_drops_stale_and_corrupt_entries() {
        let (_dir, store) = temp_store();
        store.store("https://example.org/a", 200, "{}").unwrap();
        fs::write(store.entry_path("https://example.org/b").as_std_path(), "not json").unwrap();

        let removed = store.remove_expired(Duration::ZERO).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(store.remove_expired(Duration::ZERO).unwrap(), 0);
    }

    #[test]
    fn clear_removes_the_root() {
        let (_dir, store) = temp_store();
        store.store("https://example.org/a", 200, "{}").unwrap();
        store.clear().unwrap();
        assert!(!store.root().as_std_path().exists());
        store.clear().unwrap();
    }

    #[test]
    fn unthrottled_pacer_returns_immediately() {
        let pacer = Pacer::unthrottled();
        let start = Instant::now();
        pacer.pace();
        pacer.pace();
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn pacer_spaces_consecutive_calls() {
        let pacer = Pacer::new(Duration::from_millis(50));
        let start = Instant::now();
        pacer.pace();
        pacer.pace();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
