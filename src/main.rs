use glam::{Vec2, Vec3};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window},
};

use strider::{
    logging, CharacterConfig, CharacterController, Heightfield, InputCollector, InputEvent,
    MoveResolver,
};

/// Demo terrain: flat around the spawn, a mound at the origin, and a ramp
/// rising along +x past x = 8.
fn terrain_height(x: f32, z: f32) -> f32 {
    let ramp = (x - 8.0).max(0.0) * 0.35;
    let mound = 1.5 * (-(x * x + z * z) / 40.0).exp();
    ramp + mound
}

/// Keeps the character from sinking below the terrain. Stand height tracks
/// the active stance, so crouching lowers the reference point.
struct TerrainResolver {
    stand_height: f32,
}

impl MoveResolver for TerrainResolver {
    fn resolve(&mut self, position: Vec3, delta: Vec3) -> Vec3 {
        let mut next = position + delta;
        let floor = terrain_height(next.x, next.z) + self.stand_height;
        if next.y < floor {
            next.y = floor;
        }
        next
    }
}

#[derive(Default)]
struct MoveKeys {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
}

impl MoveKeys {
    fn axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.right {
            axis.x += 1.0;
        }
        if self.left {
            axis.x -= 1.0;
        }
        if self.forward {
            axis.y += 1.0;
        }
        if self.backward {
            axis.y -= 1.0;
        }
        axis
    }
}

struct App {
    window: Arc<Window>,

    // Simulation
    controller: CharacterController,
    input: InputCollector,
    terrain: Heightfield<fn(f32, f32) -> f32>,
    resolver: TerrainResolver,

    // Input handling
    move_keys: MoveKeys,
    mouse_locked: bool,

    // Frame timing
    last_frame_time: Instant,
    log_timer: f32,
}

impl App {
    fn new(window: Arc<Window>) -> Self {
        let config = CharacterConfig::default();
        let controller = CharacterController::new(config, Vec3::new(0.0, 3.0, 0.0));
        let resolver = TerrainResolver {
            stand_height: config.walk_height,
        };

        Self {
            window,
            controller,
            input: InputCollector::new(),
            terrain: Heightfield::new(terrain_height),
            resolver,
            move_keys: MoveKeys::default(),
            mouse_locked: false,
            last_frame_time: Instant::now(),
            log_timer: 0.0,
        }
    }

    fn lock_cursor(&mut self) {
        self.window.set_cursor_visible(false);
        if self.window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
            // Some platforms only support confinement
            let _ = self.window.set_cursor_grab(CursorGrabMode::Confined);
        }
        self.mouse_locked = true;
    }

    fn unlock_cursor(&mut self) {
        self.window.set_cursor_visible(true);
        let _ = self.window.set_cursor_grab(CursorGrabMode::None);
        self.mouse_locked = false;
    }

    fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event: KeyEvent {
                    state,
                    physical_key,
                    ..
                },
                ..
            } => {
                if let PhysicalKey::Code(code) = physical_key {
                    let pressed = state.is_pressed();
                    match code {
                        KeyCode::KeyW => self.move_keys.forward = pressed,
                        KeyCode::KeyS => self.move_keys.backward = pressed,
                        KeyCode::KeyA => self.move_keys.left = pressed,
                        KeyCode::KeyD => self.move_keys.right = pressed,
                        KeyCode::Space => self.input.process_event(InputEvent::Jump { pressed }),
                        KeyCode::ControlLeft => {
                            self.input.process_event(InputEvent::Crouch { held: pressed });
                        }
                        KeyCode::ShiftLeft => {
                            self.input.process_event(InputEvent::Slide { held: pressed });
                        }
                        KeyCode::Escape => {
                            if pressed {
                                self.unlock_cursor();
                            }
                        }
                        _ => {}
                    }
                }
                true
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if !self.mouse_locked {
                    self.lock_cursor();
                }
                true
            }
            WindowEvent::Focused(false) => {
                self.input.process_event(InputEvent::FocusLost);
                self.move_keys = MoveKeys::default();
                self.unlock_cursor();
                true
            }
            _ => false,
        }
    }

    fn handle_mouse_motion(&mut self, dx: f64, dy: f64) {
        if self.mouse_locked {
            self.input
                .process_event(InputEvent::Look(Vec2::new(dx as f32, dy as f32)));
        }
    }

    fn update(&mut self, dt: f32) {
        self.input
            .process_event(InputEvent::Move(self.move_keys.axis()));
        let snapshot = self.input.take_snapshot();

        let out = self
            .controller
            .tick(&snapshot, &self.terrain, &mut self.resolver, dt);
        self.resolver.stand_height = out.stance_height;

        self.log_timer += dt;
        if self.log_timer >= 1.0 {
            self.log_timer = 0.0;
            info!(
                position = ?out.position,
                velocity = ?out.velocity,
                mode = ?out.mode,
                grounded = out.grounded,
                "character"
            );
        }
    }
}

fn main() {
    logging::init();

    let event_loop = EventLoop::new().unwrap();
    let window_attributes = Window::default_attributes()
        .with_title("strider demo")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));
    let window = event_loop.create_window(window_attributes).unwrap();
    let window = Arc::new(window);

    let mut app = App::new(window.clone());
    if app.controller.config().lock_cursor_on_start {
        app.lock_cursor();
    }
    info!("WASD to move, Space to jump, LCtrl crouches, LShift slides, Esc frees the cursor");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == app.window.id() => {
                if !app.input(event) {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::RedrawRequested => {
                            let now = Instant::now();
                            // Cap dt so a hitch cannot launch the character
                            let dt = (now - app.last_frame_time).as_secs_f32().clamp(0.0, 0.1);
                            app.last_frame_time = now;

                            app.update(dt);
                        }
                        _ => {}
                    }
                }
            }
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta },
                ..
            } => {
                app.handle_mouse_motion(delta.0, delta.1);
            }
            Event::AboutToWait => {
                app.window.request_redraw();
            }
            _ => {}
        })
        .unwrap();
}
