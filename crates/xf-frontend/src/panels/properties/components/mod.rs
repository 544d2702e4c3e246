//! Property component implementations

mod transform;

pub use transform::TransformComponent;
