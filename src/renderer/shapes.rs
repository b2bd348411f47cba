//! Shape generation for 2D primitives

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering a rect, in pixel space
pub fn filled_rect(rect: Rect, color: [f32; 4]) -> [Vertex; 6] {
    let l = rect.left() as f32;
    let r = rect.right() as f32;
    let t = rect.top() as f32;
    let b = rect.bottom() as f32;

    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}
