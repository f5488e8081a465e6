use menukit_runner::{
    asset,
    config::MenuConfig,
    input::{InputEvent, KeyCode, PointerTracker},
    nonfatal_error, window, Game, GameLoader, LoadError, MenuCanvas, RenderingContext,
};
use menukit_widgets::{
    Button, Canvas, CanvasError, CheckBox, Font, LinSrgba, Menu, Slider,
};
use std::{cell::RefCell, rc::Rc, time::Duration};

const WIDGET_WIDTH: f32 = 240.;
const BUTTON_HEIGHT: f32 = 50.;
const LABEL_FONT: Font = Font::sized(20.);
const TITLE_FONT: Font = Font::sized(36.);
const LABEL_COLOR: LinSrgba = LinSrgba::new(0.1, 0.1, 0.1, 1.0);

/// Settings the menu widgets write to through their handlers.
#[derive(Debug)]
struct Settings {
    music: bool,
    volume: i32,
    plays: u32,
}

struct GameMenu {
    pointer: PointerTracker,
    canvas: MenuCanvas,
    menu: Menu,
    settings: Rc<RefCell<Settings>>,
    title: String,
    left: f32,
    draw_failed: bool,
}

impl GameMenu {
    fn new(canvas: MenuCanvas, config: MenuConfig, width: f32) -> Result<Self, LoadError> {
        let settings = Rc::new(RefCell::new(Settings {
            music: config.music,
            volume: config.volume.initial,
            plays: 0,
        }));
        let left = (width - WIDGET_WIDTH) / 2.;

        let play_settings = settings.clone();
        let play = Button::new("Play", left, 120., WIDGET_WIDTH, BUTTON_HEIGHT).with_handler(
            move |()| {
                let mut settings = play_settings.borrow_mut();
                settings.plays += 1;
                log::info!("play selected ({} times)", settings.plays);
            },
        );

        let music_settings = settings.clone();
        let music = CheckBox::new(left + WIDGET_WIDTH - CheckBox::SIZE, 200.)
            .with_checked(config.music)
            .with_handler(move |checked| music_settings.borrow_mut().music = checked);

        let volume_settings = settings.clone();
        let volume = Slider::new(
            left,
            280.,
            WIDGET_WIDTH,
            config.volume.min,
            config.volume.max,
        )?
        .with_value(config.volume.initial)
        .with_handler(move |value| volume_settings.borrow_mut().volume = value);

        let quit = Button::new("Quit", left, 360., WIDGET_WIDTH, BUTTON_HEIGHT)
            .with_handler(|()| window::request_quit());

        let menu = Menu::new().with(play).with(music).with(volume).with(quit);
        Ok(GameMenu {
            pointer: PointerTracker::new(),
            canvas,
            menu,
            settings,
            title: config.title,
            left,
            draw_failed: false,
        })
    }

    fn draw(&mut self) -> Result<(), CanvasError> {
        let canvas = &mut self.canvas;
        canvas.set_fill_color(LABEL_COLOR);
        canvas.set_font(TITLE_FONT);
        let title_width = canvas.measure_text(&self.title)?.width;
        canvas.fill_text(
            &self.title,
            self.left + (WIDGET_WIDTH - title_width) / 2.,
            50.,
        )?;

        let settings = self.settings.borrow();
        canvas.set_font(LABEL_FONT);
        canvas.fill_text("Music", self.left, 205.)?;
        canvas.fill_text(&format!("Volume: {}", settings.volume), self.left, 250.)?;
        if settings.plays > 0 {
            canvas.fill_text(
                &format!("Starting game... ({})", settings.plays),
                self.left,
                440.,
            )?;
        }
        drop(settings);

        self.menu.draw(&mut self.canvas)
    }
}

impl Game for GameMenu {
    fn set_screen_size(&mut self, width: f32, height: f32) {
        self.canvas.set_screen_size(width, height);
    }

    fn handle_event(&mut self, event: InputEvent) {
        if let InputEvent::Key {
            key: KeyCode::Escape,
            pressed: true,
        } = event
        {
            window::request_quit();
        }
        self.pointer.handle_event(&event);
    }

    fn quit_requested(&mut self) -> bool {
        log::info!("closing menu with {:?}", self.settings.borrow());
        true
    }

    fn update(&mut self, _frame_time: Duration) {
        self.canvas.set_mouse(self.pointer.snapshot());
        self.menu.update(&self.canvas);
        self.pointer.end_frame();
    }

    fn render(&mut self, context: &mut RenderingContext) {
        if !self.draw_failed {
            if let Err(error) = self.draw() {
                self.draw_failed = true;
                nonfatal_error(&error.to_string());
                window::order_quit();
            }
        }
        self.canvas.render_pass(context);
    }
}

impl GameLoader for GameMenu {
    type Assets = MenuConfig;
    type Game = Self;

    fn create_default_files() -> asset::Result<()> {
        asset::create_dir("fonts")
    }

    fn load() -> Result<Self::Assets, LoadError> {
        Ok(MenuConfig::load_config()?.validate()?)
    }

    fn fonts(config: &Self::Assets) -> Vec<String> {
        vec![config.font.clone()]
    }

    fn create_game(
        canvas: MenuCanvas,
        config: Self::Assets,
        screen_size: (f32, f32),
    ) -> Result<Self::Game, LoadError> {
        GameMenu::new(canvas, config, screen_size.0)
    }
}

fn main() {
    env_logger::init();
    menukit_runner::run_game::<GameMenu>("Game Menu");
}
