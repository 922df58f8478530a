pub mod card;
pub mod catalog;
pub mod details;
pub mod home;
