pub mod probe;
pub mod select;
pub mod cover;
pub mod chapter;
