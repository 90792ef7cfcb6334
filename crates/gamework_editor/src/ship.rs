//! Sample component edited by the headless inspector pass.

use gamework_core::glam::{Vec2, Vec3};
use gamework_core::{Color, ObjectRef};
use gamework_inspector::attribute::{
    BoolAttribute, ColorAttribute, EnumAttribute, IntAttribute, ObjectReferenceAttribute,
    SliderAttribute, Vector2Attribute, Vector3Attribute,
};
use gamework_inspector::{impl_enum_field, impl_reflect, AttributeRegistry, RegistryError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hull {
    Light,
    Medium,
    Heavy,
}
impl_enum_field!(Hull { Light, Medium, Heavy });

#[derive(Debug, Clone)]
pub struct Ship {
    pub name: String,
    pub enabled: bool,
    pub crew: i32,
    pub speed: f32,
    pub throttle: f32,
    pub bays: i32,
    pub hull: Hull,
    pub paint: Color,
    pub drift: Vec2,
    pub spawn: Vec3,
    pub material: Option<ObjectRef>,
    pub escort: Option<ObjectRef>,
}
impl_reflect!(Ship {
    enabled,
    crew,
    speed,
    throttle,
    bays,
    hull,
    paint,
    drift,
    spawn,
    material,
    escort,
});

impl Default for Ship {
    fn default() -> Self {
        Self {
            name: "Kestrel".to_string(),
            enabled: true,
            crew: 4,
            // outside the declared range on purpose; the first pass clamps it
            speed: 150.0,
            throttle: 0.5,
            bays: 2,
            hull: Hull::Medium,
            paint: Color::WHITE,
            drift: Vec2::ZERO,
            spawn: Vec3::ZERO,
            material: None,
            escort: None,
        }
    }
}

/// Attributes shipped with the editor; `speed` comes from TOML so both
/// declaration styles are exercised.
const SHIP_ATTRIBUTES: &str = r#"
[Ship.speed]
kind = "float"
default = 10.0
min = 0.0
max = 100.0
tooltip = "Cruise speed in units per second"
"#;

pub fn attributes() -> Result<AttributeRegistry, RegistryError> {
    let mut registry = AttributeRegistry::builder()
        .field("Ship", "enabled", BoolAttribute::new(true))
        .field("Ship", "crew", IntAttribute::new(4).with_range(1, 12))
        .field("Ship", "throttle", SliderAttribute::new(0.5))
        .field(
            "Ship",
            "bays",
            SliderAttribute::new(2.0).with_range(0.0, 6.0).integer(),
        )
        .field(
            "Ship",
            "hull",
            EnumAttribute::new(1).with_labels(["Light hull", "Medium hull", "Heavy hull"]),
        )
        .field("Ship", "paint", ColorAttribute::new(Color::WHITE))
        .field("Ship", "drift", Vector2Attribute::new(Vec2::ZERO))
        .field("Ship", "spawn", Vector3Attribute::new(Vec3::ZERO))
        .field("Ship", "material", ObjectReferenceAttribute::new("Material"))
        .field(
            "Ship",
            "escort",
            ObjectReferenceAttribute::new("Ship")
                .allow_scene_objects(true)
                .with_tooltip("Ship to follow"),
        )
        .build()?;
    registry.merge(AttributeRegistry::from_toml_str(SHIP_ATTRIBUTES)?)?;
    Ok(registry)
}
