mod brush;
pub mod cli;
mod config;
mod error;
mod life;
mod pacing;
pub mod render;

use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{EventLoop, EventLoopWindowTarget};
use winit::keyboard::KeyCode;
use winit::window::{Window, WindowBuilder};
use winit_input_helper::WinitInputHelper;

use crate::brush::{Brush, Stroke};

pub use crate::config::{Config, Palette, TITLE};
pub use crate::error::{log_error, Error};
pub use crate::life::{generate_seed, Grid, GridError, Life, Rule};
pub use crate::pacing::FramePacer;

const LEFT_BUTTON: usize = 0;

/// Open a window over a `width` by `height` grid and run until it is closed.
pub fn run(width: usize, height: usize, config: Config) -> Result<(), Error> {
    config.validate()?;
    let scale = config.cell_scale;
    let (buffer_width, buffer_height) = render::buffer_size(width, height, scale)
        .ok_or(Error::Viewport {
            width,
            height,
            scale,
        })?;
    let life = Life::new(width, height, config.rule)?;

    let event_loop = EventLoop::new()?;
    let window = {
        let size = LogicalSize::new(
            buffer_width as f64 * config.window_zoom,
            buffer_height as f64 * config.window_zoom,
        );
        WindowBuilder::new()
            .with_title(TITLE)
            .with_inner_size(size)
            .build(&event_loop)?
    };

    let pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(buffer_width, buffer_height, surface_texture)?
    };

    info!("running a {width}x{height} grid in a {buffer_width}x{buffer_height} buffer");
    let mut state = State::new(window, pixels, life, config);
    event_loop.run(|event, elwt| state.handle_event(&event, elwt))?;
    info!("closed after {} generations", state.life.generation());

    match state.failure.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct State {
    // Dropped before the window it draws into.
    pixels: Pixels,
    window: Window,
    input: WinitInputHelper,
    life: Life,
    pacer: FramePacer,
    config: Config,
    brush: Brush,
    failure: Option<Error>,
}

impl State {
    fn new(window: Window, pixels: Pixels, life: Life, config: Config) -> Self {
        Self {
            pixels,
            window,
            input: WinitInputHelper::new(),
            life,
            pacer: FramePacer::new(config.frame_rate),
            config,
            brush: Brush::default(),
            failure: None,
        }
    }

    fn handle_event(&mut self, event: &Event<()>, elwt: &EventLoopWindowTarget<()>) {
        // The one and only event that winit_input_helper doesn't have for us...
        if let Event::WindowEvent {
            event: WindowEvent::RedrawRequested,
            ..
        } = event
        {
            render::draw(
                self.life.grid(),
                self.pixels.frame_mut(),
                self.config.cell_scale,
                &self.config.palette,
            );
            if let Err(err) = self.pixels.render() {
                self.fail("pixels.render", err.into(), elwt);
                return;
            }
            self.pacer.delay();
        }

        // `update` returns true once every pending event has been seen.
        if self.input.update(event) {
            self.update(elwt);
        }
    }

    fn update(&mut self, elwt: &EventLoopWindowTarget<()>) {
        if self.input.key_pressed(KeyCode::Escape) || self.input.close_requested() {
            info!("close requested");
            elwt.exit();
            return;
        }

        if let Some(size) = self.input.window_resized() {
            if let Err(err) = self.pixels.resize_surface(size.width, size.height) {
                self.fail("pixels.resize_surface", err.into(), elwt);
                return;
            }
        }

        if self.input.key_pressed_os(KeyCode::Enter)
            || self.input.key_pressed_os(KeyCode::NumpadEnter)
        {
            self.life.step();
            debug!("running at {:.1} fps", self.pacer.fps());
        }
        if self.input.key_pressed(KeyCode::KeyR) {
            if let Err(err) = self.life.randomize() {
                error!("could not seed the randomizer: {err}");
            }
        }
        if self.input.key_pressed(KeyCode::KeyC) {
            self.life.clear();
        }

        self.handle_mouse();
        self.window.request_redraw();
    }

    fn handle_mouse(&mut self) {
        let Some((mx, my)) = self.input.cursor() else {
            return;
        };
        let (dx, dy) = self.input.cursor_diff();
        let press_pos = self.pixels.window_pos_to_pixel((mx, my));

        let stroke = Stroke {
            pressed: self.input.mouse_pressed(LEFT_BUTTON),
            press_cell: render::click_cell(press_pos, self.config.cell_scale, self.life.grid()),
            held: self.input.mouse_held(LEFT_BUTTON),
            from: self.cell_under((mx - dx, my - dy)),
            to: self.cell_under((mx, my)),
        };
        self.brush.apply(&mut self.life, &stroke);
    }

    fn cell_under(&self, pos: (f32, f32)) -> (isize, isize) {
        let pixel = match self.pixels.window_pos_to_pixel(pos) {
            Ok((x, y)) => (x as isize, y as isize),
            Err(pixel) => pixel,
        };
        render::cell_at(pixel, self.config.cell_scale)
    }

    fn fail(&mut self, method_name: &str, err: Error, elwt: &EventLoopWindowTarget<()>) {
        error!("{method_name}() failed, closing");
        self.failure = Some(err);
        elwt.exit();
    }
}
