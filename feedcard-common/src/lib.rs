pub mod id;
pub mod model;
