//! SeaORM entity models for the session-property store.
//!
//! Two tables back the store: `session_properties` holds one row per
//! (session_id, key) pair together with the session-wide expiry timestamp,
//! and `user_associations` links an external user identifier to the sessions
//! it owns, enabling bulk invalidation.
//!
//! Both tables are resolved through the connection's schema search path, so
//! the same entities work against any configured PostgreSQL schema (and
//! against SQLite in tests).

pub mod session_property;
pub mod user_association;
