pub mod local;
pub mod viewed;

mod session;

pub use local::{LocalStore, MemoryStore};
pub use session::{clear_token, load_token, save_token};
pub use viewed::ViewedSet;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebStore;

/// Create the platform-appropriate local store.
///
/// - **Web** (WASM + `web` feature): browser `localStorage` via [`WebStore`]
/// - **Native**: a process-wide [`MemoryStore`] (tests, headless tooling)
pub fn local_store() -> impl LocalStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        WebStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;
        static STORE: OnceLock<MemoryStore> = OnceLock::new();
        STORE.get_or_init(MemoryStore::new).clone()
    }
}
