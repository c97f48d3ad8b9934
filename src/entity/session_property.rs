//! Entity model for the `session_properties` table.

use sea_orm::entity::prelude::*;

/// One stored property of a session.
///
/// The table is keyed by the composite `(session_id, key)` pair. Every row of
/// a session carries the same `expires_at_utc`: expiry is session-wide, and
/// any touch of the session rewrites the timestamp on all of its rows.
///
/// | Column         | Type               | Description                         |
/// |----------------|--------------------|-------------------------------------|
/// | session_id     | UUID (PK)          | Session the property belongs to     |
/// | key            | TEXT (PK)          | Property name, unique per session   |
/// | value_type     | TEXT               | Decoder tag for `value`             |
/// | value          | TEXT               | Serialized property value           |
/// | expires_at_utc | TIMESTAMPTZ        | Session-wide expiry timestamp       |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "session_properties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub session_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub key: String,

    /// Stable string tag identifying how to deserialize `value`. A tag with
    /// no registered decoder makes the row unreadable, which readers report
    /// as absence rather than an error.
    #[sea_orm(column_type = "Text")]
    pub value_type: String,

    #[sea_orm(column_type = "Text")]
    pub value: String,

    /// The row is logically dead once `now > expires_at_utc`; the cleanup
    /// sweeper deletes it on its next run.
    pub expires_at_utc: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
