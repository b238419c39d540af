// Message-key translation backed by an immutable catalog snapshot.
//
// Compiled-in `messages_{code}.properties` defaults are overlaid with files
// from the configured messages directory, so deployments can adjust wording
// without a rebuild. The snapshot is swapped atomically by a background
// refresh task; readers never observe a partially-loaded catalog.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tracing::{debug, warn};

use crate::i18n::locale::Locale;

/// One immutable (locale, key) -> message snapshot.
#[derive(Debug, Default)]
struct MessageCatalog {
    tables: HashMap<Locale, HashMap<String, String>>,
}

impl MessageCatalog {
    fn resolve(&self, locale: Locale, key: &str) -> Option<&str> {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(key))
            .or_else(|| {
                self.tables
                    .get(&Locale::DEFAULT)
                    .and_then(|table| table.get(key))
            })
            .map(String::as_str)
    }
}

/// Resolves message keys to localized strings.
///
/// Lookup order: requested locale, then the default locale, then the key
/// itself (use-code-as-default). Translation never fails.
#[derive(Debug)]
pub struct Translator {
    dir: PathBuf,
    snapshot: RwLock<Arc<MessageCatalog>>,
}

impl Translator {
    /// Builds a translator rooted at `dir`. Missing or unreadable files are
    /// tolerated; the compiled-in defaults always apply.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir: PathBuf = dir.into();
        let snapshot: Arc<MessageCatalog> = Arc::new(load_catalog(&dir));

        Self {
            dir,
            snapshot: RwLock::new(snapshot),
        }
    }

    /// Returns the message for `key` in `locale`, falling back to the default
    /// locale and finally to the key itself.
    pub fn translate(&self, locale: Locale, key: &str) -> String {
        let snapshot: Arc<MessageCatalog> = self
            .snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        snapshot.resolve(locale, key).unwrap_or(key).to_string()
    }

    /// Rebuilds the catalog from disk and swaps it in atomically.
    pub fn reload(&self) {
        let fresh: Arc<MessageCatalog> = Arc::new(load_catalog(&self.dir));

        *self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner) = fresh;
    }

    /// Spawns a background task that reloads the catalog on a fixed schedule.
    pub fn spawn_refresh(self: Arc<Self>, every: Duration) {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            // The first tick completes immediately; the catalog is already loaded
            ticker.tick().await;

            loop {
                ticker.tick().await;
                self.reload();
                debug!("Message catalog refreshed from {:?}", self.dir);
            }
        });
    }
}

/// Compiled-in defaults shipped with the binary.
fn embedded_messages(locale: Locale) -> &'static str {
    match locale {
        Locale::English => include_str!("../../resources/messages_en.properties"),
        Locale::French => include_str!("../../resources/messages_fr.properties"),
        Locale::Vietnamese => include_str!("../../resources/messages_vi.properties"),
    }
}

fn load_catalog(dir: &Path) -> MessageCatalog {
    let mut tables: HashMap<Locale, HashMap<String, String>> = HashMap::new();

    for locale in Locale::SUPPORTED {
        let mut table: HashMap<String, String> = parse_properties(embedded_messages(locale));

        let path: PathBuf = dir.join(format!("messages_{}.properties", locale.code()));
        match std::fs::read_to_string(&path) {
            Ok(contents) => table.extend(parse_properties(&contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => warn!("Could not read {:?}, keeping embedded messages: {err}", path),
        }

        tables.insert(locale, table);
    }

    MessageCatalog { tables }
}

/// Parses simple `key=value` properties; `#` lines are comments.
fn parse_properties(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}
