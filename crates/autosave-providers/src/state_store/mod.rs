//! State Store Provider Implementations
//!
//! Key-value media drafts are persisted to.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullStateStoreProvider`] | Disabled | Accepts writes, stores nothing |
//! | [`InMemoryStateStoreProvider`] | Local | DashMap-backed, lost on restart |
//! | [`FileSystemStateStoreProvider`] | Durable | One file per key, survives restarts |

#[cfg(feature = "store-filesystem")]
pub mod filesystem;
#[cfg(feature = "store-memory")]
pub mod memory;
pub mod null;

#[cfg(feature = "store-filesystem")]
pub use filesystem::FileSystemStateStoreProvider;
#[cfg(feature = "store-memory")]
pub use memory::InMemoryStateStoreProvider;
pub use null::NullStateStoreProvider;
