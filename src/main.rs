use anyhow::{Context, Result};
use glam::Vec2;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod app;
mod config;
mod constants;
mod core;
mod engine;
mod game;

use app::App;
use config::GameConfig;
use engine::assets::AssetManager;
use game::GameTextures;

const TITLE: &str = "Rocket Dodge";

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Rocket Dodge...");

    let config = GameConfig::load_or_default(GameConfig::default_path())
        .context("Invalid game configuration")?;

    let mut assets = AssetManager::new(&config.asset_dir);
    let textures = GameTextures::load(&mut assets).with_context(|| {
        format!("Failed to load textures from {}", config.asset_dir.display())
    })?;
    info!("Loaded {} textures", assets.texture_count());

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.screen_width,
            config.screen_height,
        ))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let size = window.inner_size();
    let mut app = App::new(
        config,
        textures,
        Vec2::new(size.width as f32, size.height as f32),
    );
    window.set_title(&format!("{} - {}", TITLE, app.caption()));

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    info!("Window resized to {:?}", physical_size);
                    app.input_mut()
                        .resize(physical_size.width, physical_size.height);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    app.input_mut().process_keyboard_event(&event);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    app.input_mut().process_cursor_moved(position);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    app.input_mut().process_mouse_button(button, state);
                }
                WindowEvent::Touch(touch) => {
                    app.input_mut().process_touch(&touch);
                }
                _ => {}
            },
            Event::AboutToWait => {
                if let Some(caption) = app.frame() {
                    window.set_title(&format!("{} - {}", TITLE, caption));
                }
                if app.should_quit() {
                    elwt.exit();
                    return;
                }
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
