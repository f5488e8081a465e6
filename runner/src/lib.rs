pub mod asset;
mod canvas;
pub mod config;
pub mod input;

pub use canvas::MenuCanvas;
pub use glyph_brush::ab_glyph::FontArc as Font;

use menukit_widgets::ConfigError;
use miniquad::*;
use std::{
    fs::OpenOptions,
    path::PathBuf,
    time::{Duration, Instant},
};
use thiserror::Error;
use tiny_game_loop::GameLoop;

use asset::AssetError;
use config::{MenuConfigError, WindowConfig};
use input::InputEvent;
use menukit_widgets::Vec2;

pub mod window {
    pub use miniquad::window::{order_quit, request_quit, screen_size};
}

pub type RenderingContext = Box<dyn RenderingBackend>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    MenuConfig(#[from] MenuConfigError),
    #[error("invalid widget configuration: {0}")]
    Widget(#[from] ConfigError),
    #[error("renderer setup failed: {0}")]
    Render(#[from] ShaderError),
}

pub trait Game: Sized + 'static {
    fn set_screen_size(&mut self, width: f32, height: f32);
    fn handle_event(&mut self, event: InputEvent);
    fn quit_requested(&mut self) -> bool {
        true
    }
    fn update(&mut self, frame_time: Duration);
    fn render(&mut self, context: &mut RenderingContext);
}

/// Two-stage startup: `load` runs before the window exists, `create_game`
/// once a rendering context is available.
pub trait GameLoader: 'static {
    type Assets: 'static;
    type Game: Game;
    fn create_default_files() -> asset::Result<()>;
    fn load() -> Result<Self::Assets, LoadError>;
    fn fonts(assets: &Self::Assets) -> Vec<String>;
    fn create_game(
        canvas: MenuCanvas,
        assets: Self::Assets,
        screen_size: (f32, f32),
    ) -> Result<Self::Game, LoadError>;
}

struct Stage<G: Game> {
    context: RenderingContext,
    game_loop: GameLoop,
    time: Instant,
    game: G,
}

impl<G: Game> Stage<G> {
    fn new(mut game: G, context: RenderingContext, window_config: &WindowConfig) -> Self {
        game.set_screen_size(window_config.width as f32, window_config.height as f32);
        Stage {
            context,
            game_loop: GameLoop::new_with_fps(window_config.fps, Duration::from_millis(250)),
            time: Instant::now(),
            game,
        }
    }
}

impl<G: Game> EventHandler for Stage<G> {
    fn update(&mut self) {
        let elapsed = self.time.elapsed();
        self.time = Instant::now();
        let update = self.game_loop.update(elapsed);
        if update.num_updates > 0 {
            update.run(|update| self.game.update(update.frame_time));
        } else {
            // Limit framerate
            std::thread::sleep(update.frame_time.saturating_sub(elapsed));
        }
    }

    fn draw(&mut self) {
        self.game.render(&mut self.context);
        self.context.commit_frame();
    }

    fn quit_requested_event(&mut self) {
        if !self.game.quit_requested() {
            miniquad::window::cancel_quit();
        }
    }

    fn resize_event(&mut self, width: f32, height: f32) {
        self.game.set_screen_size(width, height);
    }

    fn mouse_motion_event(&mut self, x: f32, y: f32) {
        self.game.handle_event(InputEvent::MouseMotion {
            position: Vec2::new(x, y),
        });
    }
    fn mouse_button_down_event(&mut self, button: MouseButton, x: f32, y: f32) {
        if let Ok(button) = button.try_into() {
            self.game.handle_event(InputEvent::MouseMotion {
                position: Vec2::new(x, y),
            });
            self.game.handle_event(InputEvent::MouseButton {
                button,
                pressed: true,
            });
        }
    }
    fn mouse_button_up_event(&mut self, button: MouseButton, _x: f32, _y: f32) {
        if let Ok(button) = button.try_into() {
            self.game.handle_event(InputEvent::MouseButton {
                button,
                pressed: false,
            });
        }
    }

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, _repeat: bool) {
        self.game.handle_event(InputEvent::Key {
            key: keycode,
            pressed: true,
        });
    }
    fn key_up_event(&mut self, keycode: KeyCode, _keymods: KeyMods) {
        self.game.handle_event(InputEvent::Key {
            key: keycode,
            pressed: false,
        });
    }
}

fn load_stage1<G: GameLoader>() -> Result<(WindowConfig, G::Assets, Vec<Font>), LoadError> {
    log::info!("{}", console::style("Loading menu (stage 1)").bold());

    #[cfg(debug_assertions)]
    {
        asset::create_dir("config")?;
        WindowConfig::create_default_config_if_missing()?;
        G::create_default_files()?;
    }

    let window_config = WindowConfig::load_config()?;
    let assets = G::load()?;
    let mut fonts = Vec::new();
    for font_file in G::fonts(&assets) {
        fonts.push(asset::load_font_file("fonts", &font_file)?);
    }
    Ok((window_config, assets, fonts))
}

fn load_stage2<G: GameLoader>(
    context: &mut RenderingContext,
    assets: G::Assets,
    fonts: Vec<Font>,
    screen_size: (f32, f32),
) -> Result<G::Game, LoadError> {
    log::info!("{}", console::style("Loading menu (stage 2)").bold());
    let mut canvas = MenuCanvas::new(context, fonts)?;
    canvas.set_screen_size(screen_size.0, screen_size.1);
    let game = G::create_game(canvas, assets, screen_size)?;
    log::info!("{}", console::style("Starting game loop").bold());
    Ok(game)
}

fn error_log_path() -> PathBuf {
    let mut path = asset::base_path();
    path.push("error.log");
    path
}

fn append_error_log(message: String) {
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(error_log_path())
    {
        let _ = writeln!(file, "{}\n", message);
    }
}

#[track_caller]
pub fn nonfatal_error(message: &str) {
    log::error!("{}", message);
    append_error_log(format!(
        "nonfatal at {}:\n{}",
        std::panic::Location::caller(),
        message
    ));
    println!(
        "{}",
        console::style("A nonfatal error occurred. See error.log for details.").red()
    );
    let _ = msgbox::create("Error", message, msgbox::IconType::Error);
}

/// Reports an unrecoverable error and exits the process.
pub fn fatal_error(message: &str) -> ! {
    log::error!("{}", message);
    append_error_log(format!("fatal:\n{}", message));
    println!(
        "{}",
        console::style("A fatal error occurred. See error.log for details.").red()
    );
    let _ = msgbox::create("Fatal Error", message, msgbox::IconType::Error);
    std::process::exit(1)
}

fn panic_handler(panic_info: &std::panic::PanicHookInfo) {
    append_error_log(panic_info.to_string());
    println!(
        "{}",
        console::style("A fatal error occurred. See error.log for details.").red()
    );
    let payload = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
        *s
    } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
        s
    } else {
        "An unknown error occured"
    };
    let _ = msgbox::create("Fatal Error", payload, msgbox::IconType::Error);
}

pub fn run_game<G: GameLoader>(window_title: &str) {
    let _ = std::fs::remove_file(error_log_path());
    std::panic::set_hook(Box::new(panic_handler));
    let (window_config, assets, fonts) = match load_stage1::<G>() {
        Ok(loaded) => loaded,
        Err(error) => fatal_error(&error.to_string()),
    };
    let config = conf::Conf {
        window_title: window_title.to_string(),
        window_width: window_config.width.try_into().unwrap_or(800),
        window_height: window_config.height.try_into().unwrap_or(600),
        fullscreen: window_config.fullscreen,
        window_resizable: false,
        ..Default::default()
    };
    let screen_size = (window_config.width as f32, window_config.height as f32);
    miniquad::start(config, move || {
        let mut context = miniquad::window::new_rendering_backend();
        let game = match load_stage2::<G>(&mut context, assets, fonts, screen_size) {
            Ok(game) => game,
            Err(error) => fatal_error(&error.to_string()),
        };
        Box::new(Stage::new(game, context, &window_config))
    });
}
