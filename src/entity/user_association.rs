//! Entity model for the `user_associations` table.

use sea_orm::entity::prelude::*;

/// A link from an external user identifier to one of its sessions.
///
/// Uniqueness of the `(session_id, user_id)` pair is enforced by the writer
/// (an existence-checked insert inside a transaction), not by a database
/// constraint; the composite primary key below is SeaORM's logical key only.
/// An association is orphaned once no `session_properties` row references its
/// `session_id`, at which point the cleanup sweeper removes it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_associations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub session_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
