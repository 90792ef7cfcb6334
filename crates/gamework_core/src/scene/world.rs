//! Scene world: the container for every object of the open scene.
//!
//! `World` uses a `HashMap` keyed by a monotonically-increasing `u64` ID so
//! that handles remain stable across insertions and removals. Objects carry a
//! type name, which is what scene queries (`find_object_of_type`) and
//! object-reference pickers filter on.
//!
//! # Quick start
//! ```rust
//! use gamework_core::scene::World;
//! use gamework_core::glam::Vec3;
//!
//! let mut world = World::new();
//! let h = world.spawn("Main Camera", "Camera")
//!     .with_position(Vec3::new(0.0, 1.0, -10.0))
//!     .build();
//!
//! assert_eq!(world.find_object_of_type("Camera"), Some(h));
//! assert!(world.object_ref(h).unwrap().is_scene_object());
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec3;

use crate::transform::Transform;

use super::object::{ObjectOrigin, ObjectRef};

// ─── ID generation ─────────────────────────────────────────────────────────

static ID_COUNTER: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

// ─── Handle ────────────────────────────────────────────────────────────────

/// Opaque handle referencing an object inside a [`World`].
///
/// Removing other objects does not invalidate a handle; only despawning the
/// object it refers to does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub u64);

// ─── Scene object ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Mirrors the map key.
    pub id: u64,
    pub name: String,
    pub type_name: String,
    pub transform: Transform,
    /// Inactive objects are skipped by scene queries.
    pub active: bool,
}

impl SceneObject {
    fn new(id: u64, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            type_name: type_name.into(),
            transform: Transform::default(),
            active: true,
        }
    }
}

// ─── Builder ───────────────────────────────────────────────────────────────

/// Fluent builder returned by [`World::spawn`].
pub struct ObjectBuilder<'a> {
    world: &'a mut World,
    object: SceneObject,
}

impl<'a> ObjectBuilder<'a> {
    pub fn with_position(mut self, pos: Vec3) -> Self {
        self.object.transform.position = pos;
        self
    }

    pub fn with_transform(mut self, t: Transform) -> Self {
        self.object.transform = t;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.object.active = false;
        self
    }

    /// Insert the object and return its handle.
    pub fn build(self) -> Handle {
        let id = self.object.id;
        self.world.objects.insert(id, self.object);
        Handle(id)
    }
}

// ─── World ─────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct World {
    objects: HashMap<u64, SceneObject>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(
        &mut self,
        name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> ObjectBuilder<'_> {
        let id = next_id();
        ObjectBuilder {
            world: self,
            object: SceneObject::new(id, name, type_name),
        }
    }

    /// Returns `true` if the object existed.
    pub fn despawn(&mut self, handle: Handle) -> bool {
        self.objects.remove(&handle.0).is_some()
    }

    pub fn get(&self, handle: Handle) -> Option<&SceneObject> {
        self.objects.get(&handle.0)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut SceneObject> {
        self.objects.get_mut(&handle.0)
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.objects.contains_key(&handle.0)
    }

    pub fn set_active(&mut self, handle: Handle, active: bool) {
        if let Some(o) = self.objects.get_mut(&handle.0) {
            o.active = active;
        }
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// First active object of the given type. With several candidates the
    /// oldest (lowest id) wins so repeated lookups are deterministic.
    pub fn find_object_of_type(&self, type_name: &str) -> Option<Handle> {
        self.objects_of_type(type_name).map(|(h, _)| h).min_by_key(|h| h.0)
    }

    /// Every active object of the given type, in no particular order.
    pub fn objects_of_type<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = (Handle, &'a SceneObject)> + 'a {
        self.objects
            .iter()
            .filter(move |(_, o)| o.active && o.type_name == type_name)
            .map(|(&id, o)| (Handle(id), o))
    }

    pub fn find_by_name(&self, name: &str) -> Option<Handle> {
        self.objects
            .values()
            .filter(|o| o.name == name)
            .map(|o| Handle(o.id))
            .min_by_key(|h| h.0)
    }

    /// Reference to `handle` suitable for an object-reference field.
    pub fn object_ref(&self, handle: Handle) -> Option<ObjectRef> {
        self.objects.get(&handle.0).map(|o| ObjectRef {
            id: o.id,
            name: o.name.clone(),
            type_name: o.type_name.clone(),
            origin: ObjectOrigin::Scene,
        })
    }

    /// References to every active object, sorted by id.
    pub fn object_refs(&self) -> Vec<ObjectRef> {
        let mut ids: Vec<u64> = self
            .objects
            .values()
            .filter(|o| o.active)
            .map(|o| o.id)
            .collect();
        ids.sort_unstable();
        ids.into_iter()
            .filter_map(|id| self.object_ref(Handle(id)))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────
