// app.rs - Frame loop: poll input, step on the tick, draw, repaint

use eframe::egui;
use std::time::{Duration, Instant};

use rand::rngs::ThreadRng;

use crate::config::{Config, ConfigError};
use crate::input;
use crate::render::{self, CellStyle};
use crate::sim::Simulation;

pub struct LifeApp {
    sim: Simulation,
    style: CellStyle,
    tick_interval: Duration,
    last_tick: Instant,
    rng: ThreadRng,
}

impl LifeApp {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let (rows, cols) = config.grid_dims()?;
        let tick_interval = config.tick_interval()?;
        let mut sim = Simulation::new(rows, cols, config.edge_policy)?;

        // The first generation on screen is a random seed, as in the
        // original program.
        let mut rng = rand::rng();
        sim.reseed(&mut rng);

        Ok(Self {
            sim,
            style: CellStyle {
                cell_size: config.cell_size as f32,
                alive_color: config.alive_color,
                dead_color: config.dead_color,
                shape: config.cell_shape,
            },
            tick_interval,
            last_tick: Instant::now(),
            rng,
        })
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for event in input::poll(ctx) {
            self.sim.handle(event, &mut self.rng);
        }

        if self.sim.game_over() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // At most one simulation tick per interval; input keeps being polled
        // at the repaint cadence while paused.
        if self.last_tick.elapsed() >= self.tick_interval {
            self.sim.tick();
            self.last_tick = Instant::now();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.style.dead_color))
            .show(ctx, |ui| {
                let grid = self.sim.grid();
                let size = egui::Vec2::new(
                    grid.cols() as f32 * self.style.cell_size,
                    grid.rows() as f32 * self.style.cell_size,
                );
                let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
                render::draw(&painter, response.rect.min, grid, &self.style);
            });

        ctx.request_repaint_after(self.tick_interval);
    }
}
