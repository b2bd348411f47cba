//! Axis-separated swept collision resolution
//!
//! The tricky part: deciding which side of an obstacle was hit when both
//! objects may be moving the same way at different speeds. Current-frame
//! overlap alone can't tell a slow body catching a fast one from a fast one
//! overtaking a slow one, so every test also checks where the edges were at
//! the start of the frame.
//!
//! Known limitation: candidates are resolved one after another and the last
//! match wins. A body squeezed between a static and a moving obstacle can be
//! pushed through the static one, and a ball pressed for several frames flips
//! direction once per hit.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::rect::Axis;

/// Side of the resolved body that made contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub fn axis(self) -> Axis {
        match self {
            Side::Left | Side::Right => Axis::Horizontal,
            Side::Top | Side::Bottom => Axis::Vertical,
        }
    }
}

/// Broad phase: candidates whose current rect overlaps the body, in order
pub fn overlapping<'a>(
    body: &Body,
    candidates: impl IntoIterator<Item = &'a Body>,
) -> Vec<&'a Body> {
    candidates
        .into_iter()
        .filter(|c| body.rect.intersects(&c.rect))
        .collect()
}

/// Resolve overlap along one axis against a candidate set.
///
/// The broad phase runs once against the body's rect as it stands on entry.
/// Each overlapping candidate is then checked in order, and every match moves
/// the body immediately, so later checks see the moved rect.
///
/// Returns one `Side` per resolved contact, in resolution order.
pub fn resolve_axis<'a>(
    body: &mut Body,
    candidates: impl IntoIterator<Item = &'a Body>,
    axis: Axis,
) -> Vec<Side> {
    let hits = overlapping(body, candidates);
    let mut sides = Vec::new();

    for other in hits {
        match axis {
            Axis::Horizontal => {
                if body.rect.right() >= other.rect.left()
                    && body.old_rect.right() <= other.old_rect.left()
                {
                    log::trace!("right contact at x={}", other.rect.left());
                    body.rect.set_right(other.rect.left());
                    body.sync_pos(Axis::Horizontal);
                    sides.push(Side::Right);
                }
                if body.rect.left() <= other.rect.right()
                    && body.old_rect.left() >= other.old_rect.right()
                {
                    log::trace!("left contact at x={}", other.rect.right());
                    body.rect.set_left(other.rect.right());
                    body.sync_pos(Axis::Horizontal);
                    sides.push(Side::Left);
                }
            }
            Axis::Vertical => {
                if body.rect.bottom() >= other.rect.top()
                    && body.old_rect.bottom() <= other.old_rect.top()
                {
                    log::trace!("bottom contact at y={}", other.rect.top());
                    body.rect.set_bottom(other.rect.top());
                    body.sync_pos(Axis::Vertical);
                    sides.push(Side::Bottom);
                }
                if body.rect.top() <= other.rect.bottom()
                    && body.old_rect.top() >= other.old_rect.bottom()
                {
                    log::trace!("top contact at y={}", other.rect.bottom());
                    body.rect.set_top(other.rect.bottom());
                    body.sync_pos(Axis::Vertical);
                    sides.push(Side::Top);
                }
            }
        }
    }

    sides
}
