//! CPU-side vertex batch
//!
//! Collects one frame's triangles in draw order, ready for upload to a GPU
//! buffer or inspection in tests.

use super::Renderer;
use super::shapes::filled_rect;
use super::vertex::Vertex;
use crate::sim::Rect;

#[derive(Debug, Clone, Default)]
pub struct VertexBatch {
    clear_color: [f32; 4],
    vertices: Vec<Vertex>,
    frames: u64,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    /// Frames started (clears) so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Raw vertex bytes for buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Renderer for VertexBatch {
    fn clear(&mut self, color: [f32; 4]) {
        self.clear_color = color;
        self.vertices.clear();
        self.frames += 1;
    }

    fn fill_rect(&mut self, rect: Rect, color: [f32; 4]) {
        self.vertices.extend_from_slice(&filled_rect(rect, color));
    }
}
