pub mod add;
pub mod assign;
pub mod cancel;
pub mod check;
pub mod config;
pub mod confirm;
pub mod db;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod notifications;
pub mod postpone;
pub mod sweep;
