//! Bouncing-ball wireframe demo
//!
//! Headless host for the engine: in place of a windowing library it buffers
//! each frame's wireframe segments in memory and logs the ball's trajectory.
//! A windowed host would swap the [`LineBuffer`] for its own [`LineSink`] and
//! feed real keyboard transitions into the [`InputState`]; nothing else
//! changes.

mod config;

use config::DemoConfig;
use wire_engine::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = DemoConfig::load_or_default("bounce.toml");
    let width = config.window.width as f32;
    let height = config.window.height as f32;

    let camera = config.camera();
    let mut sim = SimulationState::new(config.ball(), config.plane(), config.physics.restitution);

    let viewport = Mat4::viewport(0.0, 0.0, width, height, 0.0, 1.0);
    let mut input = InputState::new();
    let mut lines = LineBuffer::new();
    let mut timer = Timer::new();

    log::info!(
        "running {} frames at {}x{}",
        config.physics.frames,
        config.window.width,
        config.window.height
    );

    for frame in 0..config.physics.frames {
        input.begin_frame();
        if frame == 0 {
            // A windowed host polls its keyboard here; the headless demo
            // kicks the simulation off immediately.
            input.press(KeyCode::Space);
        }

        sim.step(&input, FIXED_TIMESTEP);

        // Camera and projection are rebuilt every frame so a host that
        // mutates the pose between frames gets what it expects.
        let view_projection = camera.view_projection(width / height)?;

        lines.clear();
        draw_grid(&mut lines, &view_projection, &viewport)?;
        draw_sphere(
            &mut lines,
            sim.ball.position,
            sim.ball.radius,
            &view_projection,
            &viewport,
            sim.ball.color,
        )?;
        draw_plane(&mut lines, &sim.plane, &view_projection, &viewport, color::WHITE)?;

        timer.update();
        if frame % 60 == 0 {
            log::info!(
                "frame {frame}: ball y = {:.3}, speed = {:.3}, {} segments",
                sim.ball.position.y,
                sim.ball.velocity.length(),
                lines.len()
            );
        }
    }

    log::info!(
        "done: {} frames in {:.2}s ({:.0} fps uncapped)",
        timer.frame_count(),
        timer.total_time(),
        timer.average_fps()
    );
    Ok(())
}
