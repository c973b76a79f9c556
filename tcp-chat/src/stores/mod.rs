//! In-memory state owned by the broker. Nothing in here locks: the broker is
//! the only task that ever touches these stores.

pub mod login_table;
pub mod session_registry;
pub mod user_store;
