//! Scene objects and the lookups other crates run against them.

mod object;
pub mod world;

pub use object::{ObjectOrigin, ObjectRef};
pub use world::{Handle, ObjectBuilder, SceneObject, World};
