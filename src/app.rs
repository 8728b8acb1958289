//! The shared demo loop: one window, one automaton, a fixed tick cadence.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::automaton::Automaton;
use crate::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::input::{self, Controls};
use crate::palette::Pixel;
use crate::state::State;

/// Opens the window and runs `automaton` at `ticks_per_second` until the
/// user quits. This owns the whole simulation context; nothing lives at
/// process scope.
pub fn launch(title: &str, automaton: Box<dyn Automaton>, ticks_per_second: u32) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH as f64, WINDOW_HEIGHT as f64))
            .build(&event_loop)
            .context("failed to create window")?,
    );

    pollster::block_on(run(event_loop, window, automaton, ticks_per_second))
}

async fn run(
    event_loop: EventLoop<()>,
    window: Arc<Window>,
    mut automaton: Box<dyn Automaton>,
    ticks_per_second: u32,
) -> anyhow::Result<()> {
    let mut state = State::new(
        window,
        automaton.width() as u32,
        automaton.height() as u32,
    )
    .await?;

    let mut frame = vec![Pixel::rgb(0, 0, 0); automaton.width() * automaton.height()];
    let mut controls = Controls::default();
    let tick_interval = Duration::from_secs(1) / ticks_per_second;
    let mut last_tick = Instant::now();

    event_loop.run(move |event, window_target| {
        window_target.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { window_id, ref event } if window_id == state.window.id() => {
                match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        state.resize(*new_size);
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        input::handle_key(&mut controls, event, window_target);
                    }
                    WindowEvent::RedrawRequested => {
                        let due = last_tick.elapsed() >= tick_interval;
                        if (due && !controls.paused) || controls.step_once {
                            automaton.tick();
                            controls.step_once = false;
                            last_tick = Instant::now();
                        }

                        automaton.draw(&mut frame);
                        match state.present(&frame) {
                            Ok(()) => {}
                            Err(wgpu::SurfaceError::Lost) => {
                                // present() already reconfigured the surface;
                                // skip this frame.
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                log::error!("Out of GPU memory, exiting.");
                                window_target.exit();
                            }
                            Err(e) => {
                                log::warn!("Skipping frame due to surface {:?}", e);
                            }
                        }
                    }
                    _ => (),
                }
            }
            Event::AboutToWait => {
                state.window.request_redraw();
            }
            _ => (),
        }
    })?;

    Ok(())
}
