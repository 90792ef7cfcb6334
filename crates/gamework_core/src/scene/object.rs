/// Where a referenced object lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectOrigin {
    /// Persisted asset, valid across scenes.
    Asset,
    /// Object living in the open scene; only valid while the scene is loaded.
    Scene,
}

/// Opaque reference to an engine object, as stored in an
/// object-reference field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    /// Unique within its origin.
    pub id: u64,
    pub name: String,
    /// Type name used for type-restricted pickers (e.g. `"Material"`).
    pub type_name: String,
    pub origin: ObjectOrigin,
}

impl ObjectRef {
    pub fn asset(id: u64, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            type_name: type_name.into(),
            origin: ObjectOrigin::Asset,
        }
    }

    pub fn is_scene_object(&self) -> bool {
        self.origin == ObjectOrigin::Scene
    }
}
