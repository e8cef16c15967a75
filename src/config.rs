use std::fmt;
use std::time::Duration;

pub const API_BASE_URL: &str = "https://www.optcgapi.com";

/// Main booster-set catalog endpoint.
pub const MAIN_SETS_PATH: &str = "/api/allSetCards/";
/// Starter-deck catalog endpoint.
pub const STARTER_DECKS_PATH: &str = "/api/allSTCards/";

/// Resize/transcode relay used when images are not proxied directly.
pub const IMAGE_RELAY_BASE: &str = "https://images.weserv.nl/";

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 250;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Largest image body the proxy will buffer (10 MiB).
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// Filter value meaning "no constraint" for color, type, cost and set.
pub const ALL: &str = "All";
/// Alternate "no constraint" spelling used by set pickers.
pub const ALL_SETS: &str = "All Sets";

/// The two upstream catalogs merged into one card pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogSource {
    MainSets,
    StarterDecks,
}

impl CatalogSource {
    /// Both catalogs, in the order their records are concatenated.
    pub const ALL: [CatalogSource; 2] = [CatalogSource::MainSets, CatalogSource::StarterDecks];

    pub fn path(self) -> &'static str {
        match self {
            CatalogSource::MainSets => MAIN_SETS_PATH,
            CatalogSource::StarterDecks => STARTER_DECKS_PATH,
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::MainSets => f.write_str("main-sets"),
            CatalogSource::StarterDecks => f.write_str("starter-decks"),
        }
    }
}

/// Join a base URL and a path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
