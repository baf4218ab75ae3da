// Game logic: maps, actors and the level tying them together

pub mod actors;
pub mod level;
pub mod map;

#[cfg(test)]
pub(crate) mod testing;
