use std::{fmt, str::FromStr};

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What a swiper decided about a profile. Stored as `like` / `pass`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(8))")]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    #[sea_orm(string_value = "like")]
    Like,
    #[sea_orm(string_value = "pass")]
    Pass,
}

impl SwipeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeAction::Like => "like",
            SwipeAction::Pass => "pass",
        }
    }
}

impl fmt::Display for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing anything other than exactly `like` or `pass`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown swipe action `{0}`")]
pub struct UnknownSwipeAction(pub String);

impl FromStr for SwipeAction {
    type Err = UnknownSwipeAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(SwipeAction::Like),
            "pass" => Ok(SwipeAction::Pass),
            other => Err(UnknownSwipeAction(other.to_owned())),
        }
    }
}
