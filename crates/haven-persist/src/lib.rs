pub mod builder;
pub mod client;
pub mod dbs;
pub mod error;
pub mod keys;
pub mod store;

pub use builder::{StorageBackend, StorageBuilder};
pub use client::Storage;
pub use dbs::file::FileStore;
pub use dbs::memory::MemoryStore;
#[cfg(feature = "mongodb")]
pub use dbs::mongo::MongoStore;
pub use error::{PersistError, Result};
pub use store::KeyValueStore;
