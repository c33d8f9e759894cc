//! Key-value storage layer.

pub mod file;
pub mod memory;
pub mod store;

pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use store::{StorageBackend, Store, StoreError};

/// Stored key names as constants (before the namespace prefix is applied).
pub mod keys {
    pub const RIDES: &str = "rc_rides";
    pub const PROFILE: &str = "rc_profile";
    pub const BOOKMARKS: &str = "rc_bookmarks";
    pub const JOINED: &str = "rc_joined";
}
