//! Headless editor pass.
//!
//! Loads `gamework.toml` (when present), installs logging with the console
//! capturing records, then runs one inspector frame over a sample component
//! and a couple of console commands, logging what happened.

mod ship;

use std::path::Path;

use anyhow::Context;
use gamework_console::{ConsoleSink, DevelopmentConsole};
use gamework_core::draw::Draw;
use gamework_core::{check, logging};
use gamework_core::{FoundationConfig, InputState, IntExt, MouseButton, ObjectRef, Transform, World};
use gamework_gui::{InspectorUi, UiStyle};
use gamework_inspector::{AttributeRegistry, FieldBinder, FieldLabel, Inspector};
use glam::Vec3;
use log::{info, warn};

use crate::ship::Ship;

const CONFIG_PATH: &str = "gamework.toml";
/// Optional extra attributes merged over the built-in ones.
const ATTRIBUTES_PATH: &str = "attributes.toml";

fn load_config() -> anyhow::Result<FoundationConfig> {
    if !Path::new(CONFIG_PATH).exists() {
        return Ok(FoundationConfig::default());
    }
    FoundationConfig::load(CONFIG_PATH).with_context(|| format!("loading {CONFIG_PATH}"))
}

fn load_attributes() -> anyhow::Result<AttributeRegistry> {
    let mut registry = ship::attributes().context("built-in attributes")?;
    if Path::new(ATTRIBUTES_PATH).exists() {
        let extra = AttributeRegistry::load(ATTRIBUTES_PATH)?;
        registry
            .merge(extra)
            .with_context(|| format!("merging {ATTRIBUTES_PATH}"))?;
    }
    Ok(registry)
}

/// Scene plus a few assets for object-reference fields to choose from.
fn catalog() -> (World, Vec<ObjectRef>) {
    let mut world = World::new();
    world.spawn("Falcon", "Ship").with_position(Vec3::new(4.0, 0.0, 0.0)).build();
    world.spawn("Beacon", "Light").build();

    let mut objects = vec![
        ObjectRef::asset(1_000, "Steel", "Material"),
        ObjectRef::asset(1_001, "Glass", "Material"),
    ];
    objects.extend(world.object_refs());
    (world, objects)
}

/// One frame of the inspector with a click at `click`.
fn inspector_frame(
    registry: &AttributeRegistry,
    ship: &mut Ship,
    catalog: Vec<ObjectRef>,
    click: (f64, f64),
) -> usize {
    let mut input = InputState::new();
    input.set_mouse_position(click.0, click.1);
    input.update_mouse_button(MouseButton::Left, true);

    let mut ui = InspectorUi::new(&input, UiStyle::default()).with_catalog(catalog);
    {
        let mut binder = FieldBinder::new(registry, &mut ui);
        binder.bool_field(ship, "enabled", "");
        binder.int_field(ship, "crew", "");
        let speed = binder.float_field(ship, "speed", "");
        binder.slider_field(ship, "throttle", "");
        binder.slider_field(ship, "bays", "Hangar bays");
        let hull = binder.enum_field(ship, "hull", "");
        binder.color_field(ship, "paint", "");
        binder.vector2_field(ship, "drift", "");
        binder.vector3_field(ship, "spawn", "Spawn point");
        binder.object_reference_field(ship, "material", "");
        binder.object_reference_field(ship, "escort", "");
        // not registered: drawn nowhere, zero value
        let missing = binder.float_field(ship, "shields", "");
        info!("speed {speed}, hull #{hull}, shields {missing}");
    }

    let zoom = Inspector::new(&mut ui).float(&FieldLabel::new("Zoom"), 1.0, 1.0);
    info!("zoom {zoom}");
    ui.finish().len()
}

fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    let sink = ConsoleSink::new(config.console.max_lines);
    logging::init(&config.log, vec![sink.output()])?;
    let mut console = DevelopmentConsole::new(&config.console).with_sink(sink);

    let registry = load_attributes()?;
    let mut ship = Ship::default();
    check::is_not_empty(&ship.name);
    for issue in registry.validate(&ship) {
        warn!("{issue}");
    }
    info!("{} attributes registered", registry.len());

    let (world, objects) = catalog();
    check::is_some(&world.find_object_of_type("Ship"));

    // the first row's label: nothing changes but out-of-range values clamp
    let commands = inspector_frame(&registry, &mut ship, objects.clone(), (10.0, 10.0));
    info!("frame 1: {commands} draw commands, {:?}", ship);
    // the material row's picker cycles to the first material
    let style = UiStyle::default();
    let picker = (
        (style.label_width + style.spacing + 10.0) as f64,
        ((style.row_height + style.spacing) * 9.0 + 5.0) as f64,
    );
    inspector_frame(&registry, &mut ship, objects, picker);
    info!("material: {:?}", ship.material.as_ref().map(|m| &m.name));

    let mut draw = Draw::new(config.draw.clone());
    draw.axes(&Transform::default(), 1.0);
    draw.disc(ship.spawn, Vec3::Y, 2.0);
    info!(
        "{} gizmo lines, config size {}",
        draw.lines().len(),
        (std::mem::size_of::<FoundationConfig>() as i64).bytes_to_human_readable()
    );

    console.state_mut().show();
    for line in ["help", "help close", "close"] {
        if let Err(e) = console.submit(line) {
            warn!("{line}: {e}");
        }
    }
    console.drain_log();
    info!(
        "console {} with {} lines",
        if console.is_visible() { "open" } else { "closed" },
        console.state().output().count()
    );
    Ok(())
}
