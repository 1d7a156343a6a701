pub mod contact;
pub mod moderation;
pub mod users;
