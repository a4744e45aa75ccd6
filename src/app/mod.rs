pub mod input;

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::Key;
use winit::window::{Window, WindowId};

use crate::assets::{AssetLoader, AssetReaderVariant};
use crate::errors::Result;
use crate::game::GameState;
use crate::renderer::{HeadlessRenderer, SceneRenderer};
use crate::settings::Settings;
use crate::utils::Timer;

/// Window host: turns winit events into game input and drives one
/// [`GameState::update`] plus render per redraw.
pub struct App {
    window: Option<Arc<Window>>,
    game: GameState,
    renderer: Box<dyn SceneRenderer>,
    timer: Timer,
    // Owns the runtime the asset loads run on.
    _loader: AssetLoader,
}

impl App {
    /// Creates the game and starts loading both character assets.
    pub fn new(settings: Settings) -> Result<Self> {
        let loader = AssetLoader::new(AssetReaderVariant::file(&settings.assets.root))?;
        let aspect = settings.window.width as f32 / settings.window.height.max(1) as f32;

        let idle = loader.load(&settings.assets.idle);
        let run = loader.load(&settings.assets.run);

        let mut game = GameState::new(settings, aspect);
        game.begin_loading(idle, run);

        Ok(Self {
            window: None,
            game,
            renderer: Box::new(HeadlessRenderer::new()),
            timer: Timer::new(),
            _loader: loader,
        })
    }

    /// Replaces the default headless renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: impl SceneRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;
        Ok(())
    }

    fn frame(&mut self) {
        let dt = self.timer.tick();
        self.game.update(dt);
        self.renderer.render(&self.game.frame_view());
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let settings = &self.game.settings.window;
        let window_attributes = Window::default_attributes()
            .with_title(settings.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(settings.width, settings.height));

        match event_loop.create_window(window_attributes) {
            Ok(window) => {
                let size = window.inner_size();
                self.game.resize(size.width, size.height);
                self.renderer.resize(size.width, size.height);
                self.window = Some(Arc::new(window));
                // Do not count window creation time as the first frame.
                self.timer = Timer::new();
            }
            Err(err) => {
                log::error!("Failed to create window: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.game.resize(size.width, size.height);
                    self.renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let Key::Character(text) = &event.logical_key {
                    self.game.input.handle_key(event.state, text.as_str());
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
