//! Database entities
//!
//! Note that these are kept in sync with `schema.sql` by hand.

pub mod prelude;

pub mod sea_orm_active_enums;
pub mod swipe;
pub mod user;
