use anyhow::{Context, Result};
use clap::Parser;
use log::{info, trace, warn};
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod config;
mod core;
mod engine;
mod game;

use config::GameConfig;
use engine::assets::{AssetLoader, AssetRegistry};
use engine::game_loop::GameLoop;
use engine::input::InputManager;
use engine::renderer::{DrawList, FrameBuffer, Presenter};
use game::actors::Character;
use game::level::{Level, VIEW_HEIGHT, VIEW_WIDTH};

fn main() -> Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::parse();
    info!("Starting Royale 2D...");

    // Load assets
    let loader = AssetLoader::new(&config.assets);
    let mut assets = AssetRegistry::new();
    assets
        .load(&loader)
        .with_context(|| format!("loading assets from {}", config.assets.display()))?;

    let mut level = Level::load(&mut assets, &loader, &config.map)
        .with_context(|| format!("loading map '{}'", config.map))?;
    let player = Character::new(&assets, config.spawn()).context("creating player")?;
    level.add_tracked_actor(player);

    // Create event loop and window
    let (width, height) = config.window_size();
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Royale 2D")
            .with_inner_size(winit::dpi::LogicalSize::new(width, height))
            .with_resizable(false)
            .build(&event_loop)?,
    );

    info!("Window created ({}x{}, {} ticks/s)", width, height, config.tick_rate);

    let (view_width, view_height) = (VIEW_WIDTH as u32, VIEW_HEIGHT as u32);
    let mut presenter = pollster::block_on(Presenter::new(window.clone(), view_width, view_height))
        .context("initializing renderer")?;
    let mut framebuffer = FrameBuffer::new(view_width, view_height);

    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new(config.tick_rate);
    let mut frame = DrawList::new();

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!(
                        "Close requested after {} ticks, shutting down...",
                        game_loop.tick_count()
                    );
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    presenter.resize(physical_size);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input.process_keyboard_event(&event);
                }
                WindowEvent::Focused(focused) => {
                    // Key releases are not delivered while unfocused
                    if focused {
                        game_loop.resume();
                    } else {
                        input.reset();
                        game_loop.pause();
                    }
                }
                WindowEvent::RedrawRequested => {
                    let ticks = game_loop.begin_frame();

                    frame.clear();
                    level.render(&mut frame, &assets);
                    framebuffer.compose(&frame, &assets);
                    if let Err(e) = presenter.present(&framebuffer) {
                        warn!("Failed to present frame: {:#}", e);
                    }

                    for _ in 0..ticks {
                        level.update(&input, &assets);
                    }

                    trace!(
                        "Frame {}: {} draws, {} ticks",
                        game_loop.frame_count(),
                        frame.len(),
                        ticks
                    );
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
