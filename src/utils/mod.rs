pub mod id;
pub mod validate;

pub use id::generate_id;
