pub mod fs;
pub mod kv;
pub mod notification;
pub mod session;
pub mod time;

pub use fs::app_dirs::DirsAppDirsAdapter;
pub use kv::{FileKeyValueStore, InMemoryKeyValueStore};
pub use notification::TracingNotifier;
pub use session::KeyValueSessionStore;
pub use time::SystemClock;
