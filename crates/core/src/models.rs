pub mod availability;
pub mod status;
