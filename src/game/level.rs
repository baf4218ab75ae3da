// Level: passability grid, backgrounds, actors and the camera following the player

use glam::{IVec2, Vec2};
use log::{debug, info, warn};

use crate::core::IntRect;
use crate::engine::assets::{AssetError, AssetLoader, AssetRegistry, TextureHandle};
use crate::engine::input::ActionState;
use crate::engine::renderer::{Camera, Canvas, DrawCommand};
use crate::game::actors::{ActorId, Entity, TickContext};
use crate::game::map::{MapSection, PassabilityGrid, Tileset};

/// Fixed view size in world pixels
pub const VIEW_WIDTH: f32 = 256.0;
pub const VIEW_HEIGHT: f32 = 224.0;

/// Background layers, back to front
pub const BACKGROUND_NAMES: [&str; 3] = ["main.000.png", "main.100.png", "main.200.png"];

/// Map section carrying the collision layer
pub const MAIN_SECTION: &str = "main";

/// Actors are drawn right after this background layer
const ACTOR_LAYER: usize = 1;

#[derive(Debug)]
pub struct Level {
    grid: PassabilityGrid,
    backgrounds: Vec<TextureHandle>,
    actors: Vec<(ActorId, Entity)>,
    next_id: ActorId,
    tracked: Option<ActorId>,
    camera: Camera,
    width: u32,
    height: u32,
}

impl Level {
    /// A level over `grid` with a `width` x `height` pixel world
    pub fn new(grid: PassabilityGrid, backgrounds: Vec<TextureHandle>, width: u32, height: u32) -> Self {
        Self {
            grid,
            backgrounds,
            actors: Vec::new(),
            next_id: 0,
            tracked: None,
            camera: Camera::at_origin(VIEW_WIDTH, VIEW_HEIGHT),
            width,
            height,
        }
    }

    /// Load a map from `maps/<map_name>` under the asset root
    ///
    /// Map images go into `assets` (undecodable ones are skipped with a
    /// warning). The tileset and main section are required.
    pub fn load(
        assets: &mut AssetRegistry,
        loader: &AssetLoader,
        map_name: &str,
    ) -> Result<Self, AssetError> {
        let images = assets.load_textures_from_dir(&loader.map_images_directory(map_name))?;
        debug!("Loaded {} images for map '{}'", images, map_name);

        let backgrounds = BACKGROUND_NAMES
            .iter()
            .map(|name| assets.texture_handle(name))
            .collect::<Result<Vec<_>, _>>()?;

        let tileset: Tileset = loader.read_json(&loader.tileset_path(map_name))?;
        let section: MapSection =
            loader.read_json(&loader.map_section_path(map_name, MAIN_SECTION))?;
        let grid = PassabilityGrid::decode(&section.collision_layer()?.tile_grid, &tileset)?;

        let base = assets.texture(backgrounds[0]);
        let (width, height) = (base.width, base.height);

        info!(
            "Loaded map '{}': {}x{} px, {}x{} cells, {} tiles",
            map_name,
            width,
            height,
            grid.cols(),
            grid.rows(),
            tileset.len()
        );

        Ok(Self::new(grid, backgrounds, width, height))
    }

    /// Add an actor, returning its id
    pub fn add_actor(&mut self, entity: impl Into<Entity>) -> ActorId {
        let id = self.next_id;
        self.next_id += 1;
        self.actors.push((id, entity.into()));
        id
    }

    /// Add an actor and have the camera follow it
    pub fn add_tracked_actor(&mut self, entity: impl Into<Entity>) -> ActorId {
        let id = self.add_actor(entity);
        self.tracked = Some(id);
        id
    }

    /// Have the camera follow an existing actor
    ///
    /// Returns false if no actor has that id.
    pub fn track(&mut self, id: ActorId) -> bool {
        if self.actor(id).is_none() {
            warn!("Cannot track unknown actor {}", id);
            return false;
        }
        self.tracked = Some(id);
        true
    }

    pub fn tracked(&self) -> Option<ActorId> {
        self.tracked
    }

    pub fn actor(&self, id: ActorId) -> Option<&Entity> {
        self.actors.iter().find(|(aid, _)| *aid == id).map(|(_, e)| e)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Entity> {
        self.actors.iter_mut().find(|(aid, _)| *aid == id).map(|(_, e)| e)
    }

    /// Actors in update and draw order
    pub fn actors(&self) -> impl Iterator<Item = (ActorId, &Entity)> {
        self.actors.iter().map(|(id, e)| (*id, e))
    }

    pub fn grid(&self) -> &PassabilityGrid {
        &self.grid
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// One tick: update actors in insertion order, then move the camera
    pub fn update(&mut self, input: &dyn ActionState, assets: &AssetRegistry) {
        let ctx = TickContext {
            grid: &self.grid,
            input,
            assets,
        };
        for (_, entity) in &mut self.actors {
            entity.update(&ctx);
        }

        if let Some(pos) = self.tracked_pos() {
            let world = self.world_size();
            self.camera.follow(pos.as_vec2(), world);
        }
    }

    fn tracked_pos(&self) -> Option<IVec2> {
        self.tracked
            .and_then(|id| self.actor(id))
            .map(Entity::pos)
    }

    /// Draw backgrounds back to front with the actors between layers 1 and 2
    ///
    /// Actors are only drawn on top of background layer 1.
    pub fn render(&self, canvas: &mut dyn Canvas, assets: &AssetRegistry) {
        canvas.set_view(self.camera.position, self.camera.viewport_size());

        for (i, &texture) in self.backgrounds.iter().enumerate() {
            let image = assets.texture(texture);
            canvas.draw(DrawCommand {
                texture,
                source: IntRect::from_size(image.width, image.height),
                position: Vec2::ZERO,
                origin: Vec2::ZERO,
                flip_x: false,
            });

            if i == ACTOR_LAYER {
                self.render_actors(canvas, assets);
            }
        }
    }

    fn render_actors(&self, canvas: &mut dyn Canvas, assets: &AssetRegistry) {
        for (_, entity) in &self.actors {
            canvas.draw(entity.actor().draw_command(assets));
        }
    }
}
