//! Lantern demo application
//!
//! Runs a headless lantern-carrying actor: switches its lamps on, turns it
//! around, switches the lamps off and logs the light intensities along the
//! way. Pass a `.toml` or `.ron` lamp configuration path to retune the lamps.

use lamp_engine::foundation::logging;
use lamp_engine::prelude::*;
use std::rc::Rc;

const FRAME_TIME: f32 = 1.0 / 60.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_default("info");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading lamp configuration from {}", path);
            LampConfig::load_validated(&path)?
        }
        None => LampConfig::default(),
    };

    let mut scene = Scene::new();
    scene.children.push(Mesh::with_material(Material::new().with_color(0.8, 0.7, 0.5)));
    scene.children.push(Mesh::with_material(Material::new()));
    let mut actor = Actor::new().with_world(World::new(scene));

    // Warm lantern in front of the actor, plus a configured default lamp
    let lantern = SpotLight::from_hex(0xff_c8_7a, 2.0, 25.0)
        .with_position(Vec3::new(0.0, 1.2, 0.6))
        .with_cone(std::f32::consts::FRAC_PI_4, 0.3)
        .into_handle();
    let mut light = Light::new();
    light.add_lamp_with(Some(Rc::clone(&lantern)), &config);
    light.add_lamp_with(None, &config);
    light.events_mut().register_handler(
        EventType::LampChange,
        Box::new(|event: &Event| {
            if let (Some(lamp), Some(state)) = (event.get_lamp_index(), event.get_state()) {
                log::info!("Lamp #{} switched {}", lamp, if state { "on" } else { "off" });
            }
            false
        }),
    );
    actor.attach(Box::new(light))?;

    actor.with_behavior(|light: &mut Light, host| light.on(host));
    run_frames(&mut actor, config.heat_up_time, &lantern);

    log::info!("Turning around");
    actor.direction.x = -1.0;
    run_frames(&mut actor, FRAME_TIME, &lantern);

    actor.with_behavior(|light: &mut Light, host| light.off(host));
    run_frames(&mut actor, config.cool_down_time, &lantern);

    log::info!(
        "Done after {:.2}s, {} transitions still scheduled",
        actor.timeline().total_time(),
        actor.timeline().len()
    );
    Ok(())
}

fn run_frames(actor: &mut Actor, seconds: f32, lantern: &LightHandle) {
    // One extra frame so the final transition step lands
    let frames = (seconds / FRAME_TIME).ceil() as usize + 1;
    for frame in 0..frames {
        actor.timeshift(FRAME_TIME);
        if frame % 10 == 0 {
            let node = lantern.borrow();
            log::info!(
                "intensity {:.3} at z {:+.2}",
                node.intensity,
                node.position.z
            );
        }
    }
}
