// Engine modules: physics, input, game loop timing

pub mod game_loop;
pub mod input;
pub mod physics;
