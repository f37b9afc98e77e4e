use hecs::{Entity, World};

use crate::{
    components::{HoverToggle, LaserPointer, Material, PointerTarget, PointerVisual},
    contexts::{PointerInputContext, RaycastHit},
};

/// Pointer input system
/// Turns the per-frame raycast and trigger state into pointer callbacks:
/// enter/hover/exit as the hovered target changes, press/release on trigger
/// edges, a click on release over the hovered target, and enable/disable as
/// the input module comes and goes. Callbacks land on every [`LaserPointer`]
/// and on the target entity's [`HoverToggle`].
pub fn pointer_input_system(world: &mut World, input_context: &mut PointerInputContext) {
    let pointers = world
        .query_mut::<&LaserPointer>()
        .into_iter()
        .map(|(entity, _)| entity)
        .collect::<Vec<_>>();

    if input_context.module_just_enabled() {
        for entity in &pointers {
            world
                .get::<&mut LaserPointer>(*entity)
                .unwrap()
                .on_input_module_enabled();
        }
    }
    if input_context.module_just_disabled() {
        for entity in &pointers {
            world
                .get::<&mut LaserPointer>(*entity)
                .unwrap()
                .on_input_module_disabled();
        }
    }

    let previous_target = input_context.hovered_target();
    let current_hit = input_context.hit().copied();
    let current_target = current_hit.map(|hit| hit.target);

    if previous_target != current_target {
        if let Some(old_target) = previous_target {
            for entity in &pointers {
                world
                    .get::<&mut LaserPointer>(*entity)
                    .unwrap()
                    .on_pointer_exit(old_target);
            }
            dispatch_target_exit(world, old_target);
        }
        if let Some(hit) = current_hit {
            for entity in &pointers {
                world.get::<&mut LaserPointer>(*entity).unwrap().on_pointer_enter(
                    hit.target,
                    hit.position,
                    hit.ray,
                    hit.is_interactive,
                );
            }
            dispatch_target_enter(world, &hit);
        }
    } else if let Some(hit) = current_hit {
        for entity in &pointers {
            world.get::<&mut LaserPointer>(*entity).unwrap().on_pointer_hover(
                hit.target,
                hit.position,
                hit.ray,
                hit.is_interactive,
            );
        }
    }

    if input_context.trigger_just_pressed() {
        for entity in &pointers {
            world
                .get::<&mut LaserPointer>(*entity)
                .unwrap()
                .on_pointer_press();
        }
    }
    if input_context.trigger_just_released() {
        for entity in &pointers {
            world
                .get::<&mut LaserPointer>(*entity)
                .unwrap()
                .on_pointer_release();
        }
        if let Some(target) = current_target {
            dispatch_target_click(world, target);
        }
    }

    input_context.set_hovered_target(current_target);
}

fn dispatch_target_enter(world: &mut World, hit: &RaycastHit) {
    match world.query_one_mut::<(&mut HoverToggle, &mut Material)>(hit.target) {
        Ok((hover_toggle, material)) => hover_toggle.on_pointer_enter(material),
        Err(_) if hit.is_interactive => {
            println!(
                "[LIGHTBEAM_EVENTS] Pointer entered an interactive entity without a hover toggle: {:?}",
                hit.target
            );
        }
        Err(_) => {}
    }
}

fn dispatch_target_exit(world: &mut World, target: Entity) {
    if let Ok((hover_toggle, material)) =
        world.query_one_mut::<(&mut HoverToggle, &mut Material)>(target)
    {
        hover_toggle.on_pointer_exit(material);
    }
}

fn dispatch_target_click(world: &mut World, target: Entity) {
    if let Ok((hover_toggle, material)) =
        world.query_one_mut::<(&mut HoverToggle, &mut Material)>(target)
    {
        hover_toggle.on_pointer_click(material);
    }
}
