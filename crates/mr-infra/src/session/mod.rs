mod kv_session_store;

pub use kv_session_store::KeyValueSessionStore;
