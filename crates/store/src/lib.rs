pub mod config;
pub mod error;
pub mod persistence;
pub mod session;
pub mod storage;
pub mod store;

pub use config::StoreConfig;
pub use error::StoreError;
pub use persistence::AreaRepository;
pub use session::{SelectionSession, SelectionStatus};
pub use storage::{KeyValueStore, MemoryStore, RedbStore, StorageError};
pub use store::AreaStore;
