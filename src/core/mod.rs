pub mod availability;
pub mod lifecycle;
pub mod notify;
pub mod sweep;
pub mod timerange;
pub mod validate;
