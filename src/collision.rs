//! Collision detection helpers
//!
//! Detection only: these functions report overlap and dispatch the
//! [`Element::collided_with`] hook. Nothing here moves an element or
//! resolves a collision; that reaction belongs to the hook.
//!
//! Overlap is strict. Rectangles that share only an edge or a corner do
//! not collide, and rectangles without positive area never collide with
//! anything.

use macroquad::math::Rect;

use crate::element::{Element, GameElement};

/// Strict overlap test between two rectangles.
///
/// Rectangles without positive area (zero or negative size) never overlap.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    if a.w <= 0.0 || a.h <= 0.0 || b.w <= 0.0 || b.h <= 0.0 {
        return false;
    }
    a.x < b.x + b.w && b.x < a.x + a.w && a.y < b.y + b.h && b.y < a.y + a.h
}

/// True when both elements are collidable and their rects overlap.
pub fn elements_collide(a: &GameElement, b: &GameElement) -> bool {
    a.collidable && b.collidable && rects_overlap(&a.rect, &b.rect)
}

/// Indices of every element in `others` that collides with `element`.
pub fn collisions_with<E: Element>(element: &GameElement, others: &[E]) -> Vec<usize> {
    others
        .iter()
        .enumerate()
        .filter(|(_, other)| elements_collide(element, other.element()))
        .map(|(i, _)| i)
        .collect()
}

/// Pairwise collision pass over a slice of elements.
///
/// For each colliding pair, calls `collided_with` on both sides: the
/// lower-index element's hook first, then the other's. Hooks observe live
/// state, so a hook that clears `collidable` suppresses that element's
/// remaining pairs this pass.
///
/// The pass is O(n²) over the slice; arcade-scale entity counts keep the
/// simple approach fine.
pub fn process_collisions<E: Element>(elements: &mut [E]) {
    for i in 0..elements.len() {
        for j in (i + 1)..elements.len() {
            let (head, tail) = elements.split_at_mut(j);
            if !elements_collide(head[i].element(), tail[0].element()) {
                continue;
            }
            head[i].collided_with(tail[0].element());
            tail[0].collided_with(head[i].element());
        }
    }
}
