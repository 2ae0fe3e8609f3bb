#![allow(dead_code)]

mod app;
mod camera;
mod components;
mod config;
mod constants;
mod engine;
mod error;
mod grid;
mod hierarchy;
mod input;

use config::AppConfig;
use constants::*;
use engine::{MapEngine, WindowAction};
use std::path::PathBuf;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = AppConfig::load_or_default(&config_path);

    // Keep the server alive for the lifetime of the app
    let _profiler = start_profiler();

    let engine = MapEngine::new(config)?;
    let event_loop = EventLoop::new()?;
    let mut app = App::new(engine);
    event_loop.run_app(&mut app)?;
    Ok(())
}

/// Serve puffin scopes when the profiling env var is set
fn start_profiler() -> Option<puffin_http::Server> {
    std::env::var_os(PROFILE_ENV_VAR)?;

    let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    match puffin_http::Server::new(&addr) {
        Ok(server) => {
            puffin::set_scopes_on(true);
            log::info!("Puffin profiler listening on {addr}");
            Some(server)
        }
        Err(e) => {
            log::warn!("Failed to start puffin server: {e}");
            None
        }
    }
}

struct App {
    engine: MapEngine,
    state: Option<AppState>,
}

struct AppState {
    window: Window,

    // Timing
    last_frame_time: Instant,
}

impl App {
    fn new(engine: MapEngine) -> Self {
        Self {
            engine,
            state: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window = match app::create_window(event_loop) {
            Ok(window) => window,
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        self.state = Some(AppState {
            window,
            last_frame_time: Instant::now(),
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        if let Some(WindowAction::Exit) = self.engine.handle_event(&event) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                state.update(&mut self.engine);
                state.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

impl AppState {
    fn update(&mut self, engine: &mut MapEngine) {
        puffin::GlobalProfiler::lock().new_frame();
        puffin::profile_function!();

        let current_time = Instant::now();
        let raw_dt = (current_time - self.last_frame_time).as_secs_f32();
        self.last_frame_time = current_time;

        // Cap dt so a stalled frame doesn't fling the camera across the map
        let dt = raw_dt.min(MAX_FRAME_DT);

        engine.tick(dt);

        let status = engine.camera_status();
        self.window.set_title(&app::window_title(status.as_ref()));
    }
}
