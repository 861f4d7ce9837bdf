pub mod api;
pub mod events;
pub mod home;
pub mod pages;
pub mod volunteers;
