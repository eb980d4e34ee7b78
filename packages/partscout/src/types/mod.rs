pub mod alternative;
pub mod config;
pub mod evidence;
pub mod result;
