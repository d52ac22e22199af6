pub mod classify;
pub mod clip;
