pub mod auth;
pub mod chat;
pub mod dispatch;
pub mod notes;
pub mod quiz;
pub mod shared;
