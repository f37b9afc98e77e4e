use lightbeam::{
    components::{HoverToggle, LaserPointer, LocalTransform, Material, PointerConfig},
    contexts::{PointerInputContext, RaycastHit},
    glam::{vec3, vec4, Vec3},
    hecs::{Entity, World},
    systems::{pointer_input_system, pointer_visuals_system},
    LightbeamResult, Ray,
};

pub fn main() {
    println!("[LIGHTBEAM_SIMPLE_SCENE] MAIN!");
    real_main().expect("Error running demo!");
    println!("[LIGHTBEAM_SIMPLE_SCENE] FINISHED! Goodbye!");
}

pub fn real_main() -> LightbeamResult<()> {
    let config = PointerConfig::default();
    config.validate()?;

    let mut world = World::default();
    let camera_position = vec3(0.0, 1.6, 0.0);

    let reticle = world.spawn((LocalTransform::default(),));
    let pointer = world.spawn((
        LaserPointer::new(config).with_reticle(reticle),
        LocalTransform {
            // Roughly where a right-hand controller sits.
            translation: vec3(0.2, 1.4, 0.0),
            ..Default::default()
        },
    ));
    let cube = add_cube(&mut world);

    let mut input_context = PointerInputContext::default();

    // A scripted session: aim at nothing, sweep onto the cube, click it,
    // then look away.
    let cube_hit = RaycastHit {
        target: cube,
        position: vec3(0.2, 1.4, -0.6),
        ray: Ray::new(vec3(0.2, 1.4, 0.0), Vec3::NEG_Z),
        is_interactive: true,
    };
    let frames = [
        (None, false),
        (None, false),
        (Some(cube_hit), false),
        (Some(cube_hit), true),
        (Some(cube_hit), false),
        (None, false),
    ];

    for (frame, (hit, trigger_button)) in frames.into_iter().enumerate() {
        input_context.update(hit, trigger_button, true);
        pointer_input_system(&mut world, &mut input_context);
        pointer_visuals_system(&mut world, camera_position);
        print_frame(&world, frame, pointer, reticle, cube);
    }

    Ok(())
}

fn add_cube(world: &mut World) -> Entity {
    world.spawn((
        HoverToggle::default(),
        Material::from_color(vec4(0.25, 0.5, 0.75, 1.0)),
        LocalTransform {
            translation: vec3(0.2, 1.4, -0.6),
            ..Default::default()
        },
    ))
}

fn print_frame(world: &World, frame: usize, pointer: Entity, reticle: Entity, cube: Entity) {
    let laser_pointer = world.get::<&LaserPointer>(pointer).unwrap();
    let reticle_transform = world.get::<&LocalTransform>(reticle).unwrap();
    let cube_material = world.get::<&Material>(cube).unwrap();

    let segment = &laser_pointer.segment;
    println!(
        "[LIGHTBEAM_SIMPLE_SCENE] frame {frame}: laser {:?} -> {:?}, reticle at {:?} (scale {:?}), cube color {:?}",
        segment.start,
        segment.end,
        reticle_transform.translation,
        reticle_transform.scale.x,
        cube_material.base_color_factor,
    );
}
