// Engine modules: assets, timing, input, rendering front end

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod renderer;
