//! Realtime change notifications (feed abstraction + in-memory transport).

pub mod feed;
pub mod in_memory_feed;

pub use feed::{ChangeFeed, Subscription};
pub use in_memory_feed::{InMemoryChangeFeed, InMemoryFeedError};
