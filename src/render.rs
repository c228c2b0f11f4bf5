// render.rs - Maps cell state to colored shapes on an egui painter

use egui::{Color32, Pos2, Rect, Vec2};

use crate::grid::{ALIVE, Grid};

/// Shape drawn for each cell. Purely a rendering choice; the grid itself has
/// no notion of shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellShape {
    Circle,
    Rect,
}

#[derive(Debug, Clone)]
pub struct CellStyle {
    pub cell_size: f32,
    pub alive_color: Color32,
    pub dead_color: Color32,
    pub shape: CellShape,
}

/// Clears the surface to the dead color, then draws every cell of the active
/// buffer at its pixel center. egui presents the frame only after the panel
/// closure returns, so no partial grid is ever visible.
pub fn draw(painter: &egui::Painter, origin: Pos2, grid: &Grid, style: &CellStyle) {
    let size = Vec2::new(
        grid.cols() as f32 * style.cell_size,
        grid.rows() as f32 * style.cell_size,
    );
    painter.rect_filled(Rect::from_min_size(origin, size), 0.0, style.dead_color);

    let radius = style.cell_size / 2.0;
    let active = grid.active_index();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let color = if grid.get(active, row as isize, col as isize) == ALIVE {
                style.alive_color
            } else {
                style.dead_color
            };
            let center = Pos2::new(
                origin.x + col as f32 * style.cell_size + radius,
                origin.y + row as f32 * style.cell_size + radius,
            );
            match style.shape {
                CellShape::Circle => painter.circle_filled(center, radius, color),
                CellShape::Rect => painter.rect_filled(
                    Rect::from_center_size(center, Vec2::splat(style.cell_size)),
                    0.0,
                    color,
                ),
            }
        }
    }
}
