pub mod availability;
pub mod health;
pub mod static_files;
