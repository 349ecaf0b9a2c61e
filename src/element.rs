//! Game element base type
//!
//! `GameElement` holds the on-screen state every arcade entity needs:
//! a rectangle for position and size, a velocity, a collidable flag and an
//! optional sprite. Game entity types embed one and implement [`Element`]
//! to hook into the per-frame loop.
//!
//! Positions are in pixels, relative to the top left of the screen
//! (x=0, y=0). Velocity is in pixels per millisecond; the positive
//! direction points right and down.
//!
//! The rectangle is macroquad's `Rect`, held by composition. It is a public
//! field and is mutated in place as the entity moves: `element.rect.x` is
//! the access path for position, and the element itself has no coordinate
//! fields of its own.

use macroquad::prelude::*;

use crate::collision::rects_overlap;
use crate::sprite::Sprite;

/// State of one rectangular on-screen entity.
///
/// Constructed either from an explicit rectangle (`new`) or sized from a
/// sprite image (`from_sprite`). No validation is applied beyond what
/// `Rect` itself enforces; a negative width or height passes through
/// unchanged.
#[derive(Debug, Clone)]
pub struct GameElement {
    /// Position and size in screen pixels
    pub rect: Rect,
    /// Velocity in pixels per millisecond (+x right, +y down)
    pub velocity: Vec2,
    /// Whether this element participates in collision detection.
    /// Set to false for backgrounds and anything others pass through.
    pub collidable: bool,
    /// Image drawn at the rect's top-left corner, if any.
    /// Elements without a sprite are valid (hitboxes, triggers, walls).
    pub sprite: Option<Sprite>,
}

impl GameElement {
    /// Create an element from an explicit rectangle.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            velocity: Vec2::ZERO,
            collidable: true,
            sprite: None,
        }
    }

    /// Create an element whose rect is sized from the sprite's frame,
    /// with the top-left corner at `(x, y)`.
    pub fn from_sprite(sprite: Sprite, x: f32, y: f32) -> Self {
        let size = sprite.size();
        Self {
            rect: Rect::new(x, y, size.x, size.y),
            velocity: Vec2::ZERO,
            collidable: true,
            sprite: Some(sprite),
        }
    }

    /// Set the initial velocity (chainable).
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the collidable flag (chainable).
    pub fn with_collidable(mut self, collidable: bool) -> Self {
        self.collidable = collidable;
        self
    }

    /// Top-left corner of the element.
    pub fn position(&self) -> Vec2 {
        self.rect.point()
    }

    /// Size of the element.
    pub fn size(&self) -> Vec2 {
        self.rect.size()
    }

    /// Move the rect in place by `velocity * dt_ms`.
    pub fn apply_velocity(&mut self, dt_ms: f32) {
        self.rect.x += self.velocity.x * dt_ms;
        self.rect.y += self.velocity.y * dt_ms;
    }

    /// Draw the sprite (if any) at the rect's top-left corner.
    ///
    /// Requires an active macroquad window.
    pub fn draw_sprite(&self) {
        if let Some(sprite) = &self.sprite {
            sprite.draw(self.rect.x, self.rect.y);
        }
    }

    /// True when any part of the rect overlaps the current screen area.
    ///
    /// Requires an active macroquad window.
    pub fn is_on_screen(&self) -> bool {
        let screen = Rect::new(0.0, 0.0, screen_width(), screen_height());
        rects_overlap(&self.rect, &screen)
    }
}

/// Per-frame behavior seam for game entity types.
///
/// Entity types embed a [`GameElement`] and implement the two accessors;
/// the per-frame methods have default bodies and are overridden where the
/// entity needs its own behavior. An override replaces the default body
/// entirely; call `element_mut().apply_velocity(dt_ms)` from an override
/// that still wants the stock movement.
///
/// Expected call order, once per frame: `update`, then the collision pass
/// (see [`crate::collision::process_collisions`]), then `draw`.
pub trait Element {
    /// The embedded element state.
    fn element(&self) -> &GameElement;

    /// The embedded element state, mutably.
    fn element_mut(&mut self) -> &mut GameElement;

    /// Advance the element by `dt_ms` milliseconds.
    ///
    /// Default: applies the element's velocity to its rect. Overrides that
    /// react to input poll `macroquad::input` directly.
    fn update(&mut self, dt_ms: f32) {
        self.element_mut().apply_velocity(dt_ms);
    }

    /// React to a collision with `other`.
    ///
    /// Called by the collision pass for each element of a colliding pair.
    /// Update only `self` here; when the other element is also affected,
    /// its own `collided_with` is responsible for it.
    fn collided_with(&mut self, _other: &GameElement) {}

    /// Draw the element.
    ///
    /// Default: draws the embedded element's sprite at its current
    /// position. Requires an active macroquad window.
    fn draw(&self) {
        self.element().draw_sprite();
    }
}

// Plain elements work without a wrapper type.
impl Element for GameElement {
    fn element(&self) -> &GameElement {
        self
    }

    fn element_mut(&mut self) -> &mut GameElement {
        self
    }
}

// Forwarding impl so mixed entity lists (`Vec<Box<dyn Element>>`) work with
// the collision pass. Every method forwards; the inner type's overrides
// stay in effect through the box.
impl<E: Element + ?Sized> Element for Box<E> {
    fn element(&self) -> &GameElement {
        (**self).element()
    }

    fn element_mut(&mut self) -> &mut GameElement {
        (**self).element_mut()
    }

    fn update(&mut self, dt_ms: f32) {
        (**self).update(dt_ms);
    }

    fn collided_with(&mut self, other: &GameElement) {
        (**self).collided_with(other);
    }

    fn draw(&self) {
        (**self).draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_and_read_back() {
        let el = GameElement::new(10.0, 20.0, 5.0, 5.0);
        assert_eq!(el.rect.x, 10.0);
        assert_eq!(el.rect.y, 20.0);
        assert_eq!(el.rect.w, 5.0);
        assert_eq!(el.rect.h, 5.0);
        assert_eq!(el.position(), Vec2::new(10.0, 20.0));
        assert_eq!(el.size(), Vec2::new(5.0, 5.0));
        assert_eq!(el.velocity, Vec2::ZERO);
        assert!(el.collidable);
        assert!(el.sprite.is_none());
    }

    #[test]
    fn test_negative_size_passes_through() {
        // The rect primitive is permissive; nothing validates or clamps.
        let el = GameElement::new(0.0, 0.0, -8.0, -2.0);
        assert_eq!(el.rect.w, -8.0);
        assert_eq!(el.rect.h, -2.0);
    }

    #[test]
    fn test_rect_mutation_in_place() {
        let mut el = GameElement::new(0.0, 0.0, 16.0, 16.0);
        el.rect.x = 40.0;
        el.rect.h = 32.0;
        assert_eq!(el.position(), Vec2::new(40.0, 0.0));
        assert_eq!(el.size(), Vec2::new(16.0, 32.0));
    }

    #[test]
    fn test_apply_velocity() {
        let mut el =
            GameElement::new(100.0, 50.0, 8.0, 8.0).with_velocity(Vec2::new(0.5, -0.25));
        el.apply_velocity(16.0);
        assert_eq!(el.rect.x, 108.0);
        assert_eq!(el.rect.y, 46.0);
        // Size is untouched by movement.
        assert_eq!(el.size(), Vec2::new(8.0, 8.0));
    }

    #[test]
    fn test_update_default_moves_by_velocity() {
        let mut el = GameElement::new(0.0, 0.0, 8.0, 8.0).with_velocity(Vec2::new(1.0, 2.0));
        el.update(10.0);
        assert_eq!(el.rect.x, 10.0);
        assert_eq!(el.rect.y, 20.0);
    }

    #[test]
    fn test_zero_velocity_is_stationary() {
        let mut el = GameElement::new(3.0, 4.0, 1.0, 1.0);
        el.update(1000.0);
        assert_eq!(el.position(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = GameElement::new(1.0, 2.0, 3.0, 4.0);
        let b = GameElement::new(1.0, 2.0, 3.0, 4.0);
        a.rect.x = 99.0;
        a.velocity = Vec2::new(5.0, 5.0);
        assert_eq!(b.rect.x, 1.0);
        assert_eq!(b.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_with_collidable() {
        let el = GameElement::new(0.0, 0.0, 8.0, 8.0).with_collidable(false);
        assert!(!el.collidable);
    }

    // Wrapper entity with an overridden collision hook, as a consuming
    // game would write one.
    struct Paddle {
        base: GameElement,
        hits: u32,
    }

    impl Element for Paddle {
        fn element(&self) -> &GameElement {
            &self.base
        }

        fn element_mut(&mut self) -> &mut GameElement {
            &mut self.base
        }

        fn collided_with(&mut self, _other: &GameElement) {
            self.hits += 1;
        }
    }

    #[test]
    fn test_wrapper_uses_default_update() {
        let mut paddle = Paddle {
            base: GameElement::new(0.0, 100.0, 16.0, 64.0).with_velocity(Vec2::new(0.0, 0.1)),
            hits: 0,
        };
        paddle.update(20.0);
        assert_eq!(paddle.base.rect.y, 102.0);
    }

    #[test]
    fn test_wrapper_override_hook() {
        let ball = GameElement::new(0.0, 0.0, 8.0, 8.0);
        let mut paddle = Paddle {
            base: GameElement::new(0.0, 0.0, 16.0, 64.0),
            hits: 0,
        };
        paddle.collided_with(&ball);
        paddle.collided_with(&ball);
        assert_eq!(paddle.hits, 2);
    }
}
