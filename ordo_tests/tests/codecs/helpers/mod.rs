pub mod values;
pub mod verify;
