use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::SwipeAction;

/// One user's decision about one target profile.
///
/// `swiper_user_id` and `target_profile_id` are plain integers; no relation to
/// `users` is declared here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "swipes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub swiper_user_id: i32,
    pub target_profile_id: i32,
    pub action: SwipeAction,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
