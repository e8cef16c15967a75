use optcg_catalog::{AsyncCatalogClient, ImageMode};

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The async catalog client. Dispatches the blocking upstream fetches and
    /// pipeline work to a thread pool internally.
    pub catalog: AsyncCatalogClient,

    /// Image strategy used when a request does not pick one.
    pub image_mode: ImageMode,
}
