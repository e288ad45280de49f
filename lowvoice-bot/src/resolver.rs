//! Recipient username resolution.
//!
//! Telegram bots cannot look up arbitrary users by username, so the public profile page
//! (`https://t.me/<username>`) is fetched and its title scraped for the display name. Results,
//! including misses, are cached.

use async_trait::async_trait;
use regex::Regex;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// Resolves a username (without `@`) to a display name; `None` when the user cannot be found.
#[async_trait]
pub trait UserResolver: Send + Sync {
    async fn resolve(&self, username: &str) -> Option<String>;
}

/// Scrapes `<base_url>/<username>` for `<div class="tgme_page_title">`.
pub struct TelegramWebResolver {
    client: reqwest::Client,
    base_url: String,
    title_re: Regex,
    tag_re: Regex,
}

impl TelegramWebResolver {
    const TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(Self::TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            title_re: Regex::new(r#"<div class="tgme_page_title">(.+?)</div>"#)?,
            tag_re: Regex::new(r"<[^>]*>")?,
        })
    }

    async fn fetch(&self, username: &str) -> anyhow::Result<Option<String>> {
        let url = format!("{}/{}", self.base_url, username);
        let response = self.client.get(&url).send().await?;
        if response.status() != reqwest::StatusCode::OK {
            anyhow::bail!("unexpected status {} from {}", response.status(), url);
        }
        let body = response.text().await?;
        Ok(self.extract_title(&body))
    }

    /// Display name from a profile page: title text with inner tags stripped and entities decoded.
    pub fn extract_title(&self, body: &str) -> Option<String> {
        let raw = self.title_re.captures(body)?.get(1)?.as_str();
        let text = decode_entities(&self.tag_re.replace_all(raw, ""));
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

#[async_trait]
impl UserResolver for TelegramWebResolver {
    #[instrument(skip(self))]
    async fn resolve(&self, username: &str) -> Option<String> {
        match self.fetch(username).await {
            Ok(Some(name)) => Some(name),
            Ok(None) => {
                debug!("No profile title found");
                None
            }
            Err(e) => {
                debug!(error = %e, "Failed to resolve username");
                None
            }
        }
    }
}

fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#036;", "$")
        .replace("&amp;", "&")
}

/// Bounded cache in front of another resolver. Keys are case-insensitive; the oldest entry is
/// evicted first once `capacity` is reached.
pub struct CachedResolver<R> {
    inner: R,
    capacity: usize,
    cache: Mutex<ResolverCache>,
}

#[derive(Default)]
struct ResolverCache {
    entries: HashMap<String, Option<String>>,
    order: VecDeque<String>,
}

impl<R: UserResolver> CachedResolver<R> {
    pub fn new(inner: R, capacity: usize) -> Self {
        Self {
            inner,
            capacity: capacity.max(1),
            cache: Mutex::new(ResolverCache::default()),
        }
    }

    pub async fn cached_len(&self) -> usize {
        self.cache.lock().await.entries.len()
    }
}

#[async_trait]
impl<R: UserResolver> UserResolver for CachedResolver<R> {
    async fn resolve(&self, username: &str) -> Option<String> {
        let key = username.to_ascii_lowercase();
        if let Some(hit) = self.cache.lock().await.entries.get(&key) {
            return hit.clone();
        }

        let resolved = self.inner.resolve(username).await;

        let mut cache = self.cache.lock().await;
        if !cache.entries.contains_key(&key) {
            while cache.order.len() >= self.capacity {
                if let Some(oldest) = cache.order.pop_front() {
                    cache.entries.remove(&oldest);
                }
            }
            cache.order.push_back(key.clone());
        }
        cache.entries.insert(key, resolved.clone());
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Counting {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl UserResolver for Counting {
        async fn resolve(&self, username: &str) -> Option<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (username.to_ascii_lowercase() != "nobody1").then(|| format!("Name of {}", username))
        }
    }

    fn counting() -> (Counting, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Counting {
                calls: calls.clone(),
            },
            calls,
        )
    }

    #[test]
    fn test_extract_title_strips_tags_and_entities() {
        let resolver = TelegramWebResolver::new("https://t.me").unwrap();
        let body = r#"<div class="tgme_page_title"><span dir="auto">Tom &amp; Jerry</span></div>"#;
        assert_eq!(resolver.extract_title(body).as_deref(), Some("Tom & Jerry"));
        assert_eq!(resolver.extract_title("<html>no title</html>"), None);
        assert_eq!(
            resolver.extract_title(r#"<div class="tgme_page_title"><span> </span></div>"#),
            None
        );
    }

    #[tokio::test]
    async fn test_cache_hits_skip_inner_resolver() {
        let (inner, calls) = counting();
        let resolver = CachedResolver::new(inner, 16);

        assert_eq!(resolver.resolve("alice").await.as_deref(), Some("Name of alice"));
        assert_eq!(resolver.resolve("ALICE").await.as_deref(), Some("Name of alice"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_misses_are_cached() {
        let (inner, calls) = counting();
        let resolver = CachedResolver::new(inner, 16);

        assert_eq!(resolver.resolve("nobody1").await, None);
        assert_eq!(resolver.resolve("nobody1").await, None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_oldest_entry_evicted_at_capacity() {
        let (inner, calls) = counting();
        let resolver = CachedResolver::new(inner, 2);

        resolver.resolve("user_a").await;
        resolver.resolve("user_b").await;
        resolver.resolve("user_c").await;
        assert_eq!(resolver.cached_len().await, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        resolver.resolve("user_c").await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        resolver.resolve("user_a").await;
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }
}
