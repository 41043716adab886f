//! Oriented-box-vs-sphere sweep demo
//!
//! A sphere glides toward a spinning oriented box; every frame runs the
//! local-frame collision test and the box's wireframe switches color while
//! the shapes overlap. Enter/leave transitions are logged with the frame
//! number so the sweep is verifiable without a display.

use wire_engine::prelude::*;

const FRAMES: u32 = 240;
const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let camera = Camera::default();
    let viewport = Mat4::viewport(0.0, 0.0, WIDTH, HEIGHT, 0.0, 1.0);
    let mut lines = LineBuffer::new();

    let box_center = Vec3::new(-1.0, 0.0, 0.0);
    let box_size = Vec3::new(0.5, 0.5, 0.5);
    let sphere_start = Vec3::new(0.0, 0.0, 3.0);
    let sphere_radius = 0.4;

    let mut overlapping = false;

    for frame in 0..FRAMES {
        let t = frame as f32 * FIXED_TIMESTEP;

        // The box spins in place while the sphere slides onto it.
        let spin = Mat4::rotation_xyz(Vec3::new(0.0, t, 0.5 * t));
        let obb = Obb::from_rotation(box_center, &spin, box_size);
        let sphere = Sphere::new(
            sphere_start + (box_center - sphere_start) * (t / 4.0),
            sphere_radius,
        );

        let hit = obb.intersects_sphere(&sphere);
        if hit != overlapping {
            log::info!(
                "frame {frame}: {} at sphere center ({:.2}, {:.2}, {:.2})",
                if hit { "contact" } else { "separation" },
                sphere.center.x,
                sphere.center.y,
                sphere.center.z
            );
            overlapping = hit;
        }

        let view_projection = camera.view_projection(WIDTH / HEIGHT)?;

        lines.clear();
        draw_grid(&mut lines, &view_projection, &viewport)?;
        draw_sphere(
            &mut lines,
            sphere.center,
            sphere.radius,
            &view_projection,
            &viewport,
            color::WHITE,
        )?;

        // The oriented box renders as its local axis-aligned box pushed
        // through a model transform composed onto the pipeline.
        let model = obb.rotation_matrix() * Mat4::translation(obb.center);
        draw_aabb(
            &mut lines,
            &Aabb::new(-box_size, box_size),
            &(model * view_projection),
            &viewport,
            if hit { color::RED } else { color::WHITE },
        )?;
    }

    log::info!("sweep finished after {FRAMES} frames");
    Ok(())
}
