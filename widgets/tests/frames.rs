use menukit_widgets::{
    Bounds, Button, Canvas, CanvasError, CheckBox, Font, Interactive, LinSrgba, Menu, Mouse,
    Slider, TextMetrics, Widget,
};
use std::{cell::Cell, rc::Rc};

/// Canvas that only tracks the pointer and counts draw calls.
#[derive(Default)]
struct FrameCanvas {
    mouse: Mouse,
    rects: usize,
    texts: usize,
}

impl FrameCanvas {
    fn frame(&mut self, x: f32, y: f32, down: bool, clicked: bool) -> &Self {
        self.mouse = Mouse::new(x, y, down, clicked);
        self
    }
}

impl Canvas for FrameCanvas {
    fn mouse(&self) -> &Mouse {
        &self.mouse
    }
    fn set_fill_color(&mut self, _color: LinSrgba) {}
    fn set_stroke_color(&mut self, _color: LinSrgba) {}
    fn set_line_width(&mut self, _width: f32) {}
    fn set_font(&mut self, _font: Font) {}
    fn fill_rect(&mut self, _rect: Bounds) {
        self.rects += 1;
    }
    fn stroke_rect(&mut self, _rect: Bounds) {
        self.rects += 1;
    }
    fn fill_text(&mut self, _text: &str, _x: f32, _y: f32) -> Result<(), CanvasError> {
        self.texts += 1;
        Ok(())
    }
    fn measure_text(&mut self, text: &str) -> Result<TextMetrics, CanvasError> {
        Ok(TextMetrics {
            width: text.len() as f32 * 8.,
            height: 16.,
        })
    }
}

#[test]
fn button_press_hold_release() {
    let fired = Rc::new(Cell::new(0));
    let fired1 = fired.clone();
    let mut button =
        Button::new("Start", 0., 0., 100., 40.).with_handler(move |()| fired1.set(fired1.get() + 1));
    let mut canvas = FrameCanvas::default();

    button.update(canvas.frame(50., 20., true, true));
    assert_eq!(fired.get(), 1);
    assert!(button.clicked());

    button.update(canvas.frame(50., 20., true, false));
    assert_eq!(fired.get(), 1);

    button.update(canvas.frame(50., 20., false, false));
    assert!(!button.clicked());
    assert_eq!(fired.get(), 1);
}

#[test]
fn handler_changes_are_visible_in_same_frame_draw() {
    let volume = Rc::new(Cell::new(0));
    let volume1 = volume.clone();
    let mut menu = Menu::new()
        .with(Slider::new(0., 0., 200., 0, 100).unwrap().with_handler(move |v| volume1.set(v)))
        .with(CheckBox::new(0., 60.));
    let mut canvas = FrameCanvas::default();

    menu.update(canvas.frame(150., 20., true, true));
    assert_eq!(volume.get(), 75);
    menu.draw(&mut canvas).unwrap();
    assert_eq!(canvas.rects, 3);
    assert_eq!(canvas.texts, 1);
}

#[test]
fn checkbox_full_cycles() {
    let mut checkbox = CheckBox::new(100., 100.);
    let mut canvas = FrameCanvas::default();
    for expected in [true, false, true] {
        checkbox.update(canvas.frame(110., 110., true, true));
        checkbox.update(canvas.frame(110., 110., true, false));
        checkbox.update(canvas.frame(110., 110., false, false));
        assert_eq!(checkbox.checked(), expected);
    }
}

#[test]
fn slider_drag_leaving_bounds_keeps_tracking() {
    let mut slider = Slider::new(10., 10., 100., 0, 10).unwrap();
    let mut canvas = FrameCanvas::default();
    slider.update(canvas.frame(20., 30., true, true));
    assert_eq!(slider.value(), 1);
    slider.update(canvas.frame(85., 300., true, false));
    assert!(!slider.hovered());
    assert_eq!(slider.value(), 8);
    slider.update(canvas.frame(0., 300., false, false));
    assert_eq!(slider.value(), 8);
}
