pub use super::swipe::Entity as Swipe;
pub use super::user::Entity as User;
