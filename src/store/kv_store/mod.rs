pub mod file;
pub mod moka;
pub mod redis;
