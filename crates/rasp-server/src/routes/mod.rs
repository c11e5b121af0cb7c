pub mod slack;
pub mod status;
