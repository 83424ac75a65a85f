//! Windowed renderer built on winit and pixels
//!
//! Presents the draw list by rasterizing filled rectangles into a CPU-side
//! framebuffer and blitting it to a window surface. Doubles as the input
//! source: each frame the winit event loop is pumped once and keyboard
//! transitions are forwarded into the engine's event queue.
//!
//! Must be created and used on the main thread, like any winit event loop.

use super::{Color, FrameStatus, RenderError, RenderRect, Renderer};
use crate::config::WindowConfig;
use crate::foundation::math::Vec2;
use crate::input::{EventQueue, KeyCode, KeyEvent};
use pixels::{Pixels, SurfaceTexture};
use std::time::Duration;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{KeyCode as WinitKey, PhysicalKey};
use winit::platform::pump_events::EventLoopExtPumpEvents;
use winit::window::{Window, WindowBuilder};

/// Renderer backed by a winit window and a `pixels` framebuffer
pub struct PixelsRenderer {
    // Field order matters: the pixels surface must drop before the window
    pixels: Pixels,
    window: Window,
    event_loop: EventLoop<()>,
    width: u32,
    height: u32,
    background: Color,
}

impl PixelsRenderer {
    /// Create a window and framebuffer sized from the window config
    pub fn new(config: &WindowConfig) -> Result<Self, RenderError> {
        let event_loop =
            EventLoop::new().map_err(|e| RenderError::SurfaceCreation(e.to_string()))?;

        let size = LogicalSize::new(f64::from(config.width), f64::from(config.height));
        let window = WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(size)
            .with_min_inner_size(size)
            .build(&event_loop)
            .map_err(|e| RenderError::SurfaceCreation(e.to_string()))?;

        let surface_size = window.inner_size();
        let surface = SurfaceTexture::new(surface_size.width, surface_size.height, &window);
        let pixels = Pixels::new(config.width, config.height, surface)
            .map_err(|e| RenderError::SurfaceCreation(e.to_string()))?;

        log::info!(
            "Opened window '{}' ({}x{})",
            config.title,
            config.width,
            config.height
        );

        Ok(Self {
            pixels,
            window,
            event_loop,
            width: config.width,
            height: config.height,
            background: Color::BLACK,
        })
    }

    /// Set the clear color used between frames
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }
}

impl Renderer for PixelsRenderer {
    fn begin_frame(&mut self, events: &EventQueue) -> FrameStatus {
        let mut close_requested = false;
        let mut resized: Option<PhysicalSize<u32>> = None;

        self.event_loop
            .pump_events(Some(Duration::ZERO), |event, _target| {
                if let Event::WindowEvent { event, .. } = event {
                    match event {
                        WindowEvent::CloseRequested => close_requested = true,
                        WindowEvent::Resized(size) => resized = Some(size),
                        WindowEvent::KeyboardInput { event: key, .. } => {
                            if let PhysicalKey::Code(code) = key.physical_key {
                                if let Some(code) = map_key(code) {
                                    events.push(KeyEvent {
                                        code,
                                        pressed: key.state == ElementState::Pressed,
                                    });
                                }
                            }
                        }
                        _ => {}
                    }
                }
            });

        if let Some(size) = resized {
            if size.width > 0 && size.height > 0 {
                if let Err(e) = self.pixels.resize_surface(size.width, size.height) {
                    log::warn!("Failed to resize render surface: {e}");
                }
            }
        }

        if close_requested {
            log::info!("Window close requested");
            FrameStatus::CloseRequested
        } else {
            FrameStatus::Continue
        }
    }

    fn render_scene(&mut self, rects: &[RenderRect], view_centre: Vec2) -> Result<(), RenderError> {
        let width = i64::from(self.width);
        let height = i64::from(self.height);
        let background = self.background;

        let frame = self.pixels.frame_mut();
        for pixel in frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[background.r, background.g, background.b, background.a]);
        }
        for rect in rects {
            fill_rect(frame, width, height, rect, view_centre);
        }

        self.window.request_redraw();
        self.pixels
            .render()
            .map_err(|e| RenderError::Present(e.to_string()))
    }
}

/// Rasterize one rectangle into the RGBA framebuffer, clipped to its bounds
fn fill_rect(frame: &mut [u8], width: i64, height: i64, rect: &RenderRect, view_centre: Vec2) {
    let x0 = (rect.position.x - view_centre.x).floor() as i64;
    let y0 = (rect.position.y - view_centre.y).floor() as i64;
    let x1 = (x0 + rect.size.x.ceil() as i64).clamp(0, width);
    let y1 = (y0 + rect.size.y.ceil() as i64).clamp(0, height);
    let x0 = x0.clamp(0, width);
    let y0 = y0.clamp(0, height);

    let color = [rect.color.r, rect.color.g, rect.color.b, rect.color.a];
    for y in y0..y1 {
        for x in x0..x1 {
            let offset = ((y * width + x) * 4) as usize;
            frame[offset..offset + 4].copy_from_slice(&color);
        }
    }
}

fn map_key(code: WinitKey) -> Option<KeyCode> {
    let mapped = match code {
        WinitKey::KeyA => KeyCode::A,
        WinitKey::KeyB => KeyCode::B,
        WinitKey::KeyC => KeyCode::C,
        WinitKey::KeyD => KeyCode::D,
        WinitKey::KeyE => KeyCode::E,
        WinitKey::KeyF => KeyCode::F,
        WinitKey::KeyG => KeyCode::G,
        WinitKey::KeyH => KeyCode::H,
        WinitKey::KeyI => KeyCode::I,
        WinitKey::KeyJ => KeyCode::J,
        WinitKey::KeyK => KeyCode::K,
        WinitKey::KeyL => KeyCode::L,
        WinitKey::KeyM => KeyCode::M,
        WinitKey::KeyN => KeyCode::N,
        WinitKey::KeyO => KeyCode::O,
        WinitKey::KeyP => KeyCode::P,
        WinitKey::KeyQ => KeyCode::Q,
        WinitKey::KeyR => KeyCode::R,
        WinitKey::KeyS => KeyCode::S,
        WinitKey::KeyT => KeyCode::T,
        WinitKey::KeyU => KeyCode::U,
        WinitKey::KeyV => KeyCode::V,
        WinitKey::KeyW => KeyCode::W,
        WinitKey::KeyX => KeyCode::X,
        WinitKey::KeyY => KeyCode::Y,
        WinitKey::KeyZ => KeyCode::Z,
        WinitKey::Space => KeyCode::Space,
        WinitKey::Enter => KeyCode::Enter,
        WinitKey::Escape => KeyCode::Escape,
        WinitKey::ArrowUp => KeyCode::Up,
        WinitKey::ArrowDown => KeyCode::Down,
        WinitKey::ArrowLeft => KeyCode::Left,
        WinitKey::ArrowRight => KeyCode::Right,
        _ => return None,
    };
    Some(mapped)
}
