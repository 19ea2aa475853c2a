/// Trait for types that can detect collisions between `self` and `other` of type `T`.
pub trait CollidesWith<T> {
    /// Touching counts as colliding.
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can report whether they lie entirely inside a page.
pub trait FitsWithin {
    fn fits_within(&self, page_width: f32, page_height: f32) -> bool;
}
