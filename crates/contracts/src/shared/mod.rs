pub mod format;
pub mod performance;
