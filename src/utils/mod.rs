pub mod password;
pub mod timestamp;
