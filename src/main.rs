use glam::DVec2;
use log::info;
use sfml::{graphics::*, window::*};

mod body;
mod error;
mod sim;

use body::Body;
use sim::Simulation;

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

const GRAVITY: f64 = 9.8;

/// Fixed timestep fed to every tick; the loop is paced by the framerate
/// limit, not the wall clock.
const TICK_DT: f64 = 0.016;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let bodies = vec![
        Body::new(DVec2::new(50.0, 50.0), 20.0, 2.0, Color::RED)?,
        Body::new(DVec2::new(200.0, 100.0), 30.0, 3.0, Color::BLUE)?,
        Body::new(DVec2::new(300.0, 150.0), 25.0, 1.0, Color::GREEN)?,
    ];
    let mut sim = Simulation::new(bodies, GRAVITY)?;

    let mut window = RenderWindow::new(
        (WINDOW_WIDTH, WINDOW_HEIGHT),
        "Bouncing Balls",
        Style::CLOSE,
        &ContextSettings {
            antialiasing_level: 2,
            ..Default::default()
        },
    )?;
    window.set_framerate_limit(60);

    info!(
        "simulation started: {} bodies in a {WINDOW_WIDTH}x{WINDOW_HEIGHT} viewport",
        sim.bodies().len()
    );

    let mut shape = CircleShape::new(0.0, 30);

    while window.is_open() {
        while let Some(event) = window.poll_event() {
            #[allow(clippy::single_match)]
            match event {
                Event::Closed => window.close(),
                _ => {}
            }
        }

        let size = window.size();
        sim.step(TICK_DT, size.x as f64, size.y as f64)?;

        window.clear(Color::WHITE);

        for body in sim.bodies() {
            let DVec2 { x, y } = body.position();
            let radius = body.radius();

            shape.set_radius(radius as _);
            shape.set_origin((radius as _, radius as _));
            shape.set_position((x as _, y as _));
            shape.set_fill_color(body.color());

            window.draw(&shape);
        }

        window.display();
    }

    Ok(())
}
