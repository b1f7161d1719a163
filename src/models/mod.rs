pub mod actor;
pub mod notification;
pub mod request;
pub mod status;
