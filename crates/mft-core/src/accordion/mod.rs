//! Accordion policy for collapsible navigation groups.
//!
//! The policy operates on anything exposing open/closed state and an
//! "active descendant" flag, so it is testable without a document tree.
//! A rendering layer implements [`CollapsibleGroup`] over its real nodes
//! and calls [`initialize`] once, then [`toggle`] per click.

/// State a navigation group exposes to the accordion policy.
pub trait CollapsibleGroup {
    fn is_open(&self) -> bool;
    fn open(&mut self);
    fn close(&mut self);
    /// True when a descendant of this group carries the active marker.
    fn has_active_child(&self) -> bool;
    /// Flags the group as containing the active item (styling hook).
    fn mark_has_active(&mut self);
}

/// Startup pass: every group is closed except those containing the active
/// item, which keep their state and are flagged.
pub fn initialize<G: CollapsibleGroup>(groups: &mut [G]) {
    for group in groups.iter_mut() {
        if group.has_active_child() {
            group.mark_has_active();
        } else {
            group.close();
        }
    }
}

/// Click on group `index`'s toggle: close every group, then re-open the
/// toggled one only if it was closed before the click. Toggling an open
/// group therefore closes everything with no replacement open.
///
/// Out-of-range indices are ignored.
pub fn toggle<G: CollapsibleGroup>(groups: &mut [G], index: usize) {
    let was_closed = match groups.get(index) {
        Some(group) => !group.is_open(),
        None => return,
    };
    for group in groups.iter_mut() {
        group.close();
    }
    if was_closed {
        groups[index].open();
    }
}

#[cfg(test)]
mod tests;
