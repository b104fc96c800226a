use anyhow::Result;
use log::info;

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::{Action, PlayerInput};
use engine::physics::body::presets;
use engine::physics::PhysicsWorld;
use game::movement::{InputSample, MovementConfig, MovementController, PhysicsActor};

/// How long the scripted run lasts, in physics ticks
const DEMO_TICKS: u64 = 420;

/// Scripted control sequence: run right, jump, trigger the post-jump
/// impulse mid-air, then jump again at the wall base and wall-jump off it.
///
/// Windows are several ticks wide because a slow frame may batch up to five
/// physics updates; `press` is edge-safe to call repeatedly.
fn scripted_input(ticks: u64, input: &mut PlayerInput) {
    if ticks == 0 {
        input.press(Action::MoveRight);
    }
    if ticks >= 300 {
        input.release(Action::MoveRight);
    }

    match ticks {
        t if (100..106).contains(&t) => input.press(Action::Jump), // ground jump
        t if (112..118).contains(&t) => input.press(Action::Jump), // post-jump impulse
        t if (170..176).contains(&t) => input.press(Action::Jump), // jump at the wall base
        t if (180..186).contains(&t) => input.press(Action::Jump), // wall jump
        _ => input.release(Action::Jump),
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting wallkick demo...");

    let mut world = PhysicsWorld::new();

    // Arena: a wide floor and a wall-jump wall well to the right
    let floor = world.add_rigid_body(presets::platform_body(0.0, -0.5));
    world.add_collider(presets::ground_collider(60.0, 1.0), floor);
    let wall = world.add_rigid_body(presets::platform_body(20.5, 6.0));
    world.add_collider(presets::wall_jump_collider(1.0, 12.0), wall);

    let body = world.add_rigid_body(presets::player_body(0.0, 1.0));
    let collider = world.add_collider(presets::player_collider(1.0, 2.0), body);
    world.update_queries();

    let mut controller = MovementController::new(MovementConfig::default());
    let mut input = PlayerInput::new();
    let mut game_loop = GameLoop::new();
    let mut ticks: u64 = 0;

    while ticks < DEMO_TICKS {
        let updates = game_loop.begin_frame();
        if updates > 0 {
            // Input is sampled once per frame, shared by every tick it covers
            scripted_input(ticks, &mut input);
            let sample = InputSample {
                horizontal: input.horizontal_axis(),
                jump_pressed: input.just_pressed(Action::Jump),
            };

            for _ in 0..updates.min((DEMO_TICKS - ticks) as u32) {
                let output = {
                    let mut actor = PhysicsActor::new(&mut world, body, collider)?;
                    controller.tick(&mut actor, sample, game_loop.fixed_timestep())
                };
                world.step();
                ticks += 1;

                if ticks % 30 == 0 {
                    if let Some(player) = world.get_rigid_body(body) {
                        info!(
                            "tick {:4} | phase {:?} | pos ({:6.2}, {:5.2}) | speed {:5.2} | facing {}",
                            ticks,
                            controller.phase(),
                            player.translation().x,
                            player.translation().y,
                            output.speed,
                            if output.facing_right { "right" } else { "left" },
                        );
                    }
                }
            }
            input.update();
        }
        std::thread::sleep(std::time::Duration::from_millis(1));
    }

    // Never leave the body position-locked on the way out
    let mut actor = PhysicsActor::new(&mut world, body, collider)?;
    controller.cancel_pending(&mut actor);

    info!("Demo complete after {} ticks", ticks);
    Ok(())
}
