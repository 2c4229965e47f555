//! Display ordering for child collections (contract terms, delivery-record
//! terms).
//!
//! Children carry an explicit integer position. The console always shows
//! them ascending by that position, whatever order the server returned,
//! and never renumbers siblings: gaps left by deletions stay.

/// A record positioned by an explicit order field.
pub trait Ordered {
    /// The record's position within its parent.
    fn order(&self) -> i32;
}

/// Borrow `items` ascending by order. Equal orders keep server order.
pub fn sorted_by_order<T: Ordered>(items: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_key(|item| item.order());
    sorted
}

/// Sort `items` in place ascending by order (stable).
pub fn sort_by_order<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(|item| item.order());
}

/// Position for a new child: one past the highest existing position.
///
/// The highest position of an empty collection counts as 0, so the first
/// child gets 1. Saturates at `i32::MAX`.
pub fn next_order<T: Ordered>(items: &[T]) -> i32 {
    items
        .iter()
        .map(Ordered::order)
        .max()
        .unwrap_or(0)
        .saturating_add(1)
}
