//! Rendering module
//!
//! The simulation draws through the [`Renderer`] trait: a full-surface clear
//! followed by one filled rect per body, in update order.

pub mod batch;
pub mod shapes;
pub mod vertex;

pub use batch::VertexBatch;
pub use vertex::{Vertex, colors};

use crate::sim::{BodyKind, Rect, World};

/// Drawing backend
pub trait Renderer {
    /// Clear the whole surface
    fn clear(&mut self, color: [f32; 4]);

    /// Draw a filled axis-aligned rect (pixel coordinates)
    fn fill_rect(&mut self, rect: Rect, color: [f32; 4]);
}

/// Fill color for a body
pub fn body_color(kind: BodyKind) -> [f32; 4] {
    match kind {
        BodyKind::Static => colors::STATIC,
        BodyKind::VerticalOscillator => colors::VERTICAL,
        BodyKind::HorizontalOscillator => colors::HORIZONTAL,
        BodyKind::Player => colors::PLAYER,
        BodyKind::Ball => colors::BALL,
    }
}

/// Draw one frame of the world
pub fn draw_world<R: Renderer + ?Sized>(world: &World, renderer: &mut R) {
    renderer.clear(colors::BACKGROUND);
    for (kind, body) in world.bodies() {
        renderer.fill_rect(body.rect, body_color(kind));
    }
}
