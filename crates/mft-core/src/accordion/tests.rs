//! Accordion policy tests over an in-memory group.

use super::{initialize, toggle, CollapsibleGroup};

#[derive(Debug, Clone)]
struct Group {
    open: bool,
    active_child: bool,
    flagged: bool,
}

impl Group {
    fn new(active_child: bool) -> Self {
        // Rendered groups start open until the policy closes them.
        Self {
            open: true,
            active_child,
            flagged: false,
        }
    }
}

impl CollapsibleGroup for Group {
    fn is_open(&self) -> bool {
        self.open
    }

    fn open(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn has_active_child(&self) -> bool {
        self.active_child
    }

    fn mark_has_active(&mut self) {
        self.flagged = true;
    }
}

fn open_states(groups: &[Group]) -> Vec<bool> {
    groups.iter().map(|g| g.open).collect()
}

#[test]
fn initialize_closes_groups_without_active_child() {
    let mut groups = vec![Group::new(false), Group::new(false), Group::new(false)];
    initialize(&mut groups);
    assert_eq!(open_states(&groups), [false, false, false]);
    assert!(groups.iter().all(|g| !g.flagged));
}

#[test]
fn initialize_keeps_and_flags_active_group() {
    let mut groups = vec![Group::new(false), Group::new(true), Group::new(false)];
    initialize(&mut groups);
    assert_eq!(open_states(&groups), [false, true, false]);
    assert!(!groups[0].flagged);
    assert!(groups[1].flagged);
    assert!(!groups[2].flagged);
}

#[test]
fn toggling_a_closed_group_opens_only_it() {
    let mut groups = vec![Group::new(false), Group::new(true), Group::new(false)];
    initialize(&mut groups);
    toggle(&mut groups, 0);
    assert_eq!(open_states(&groups), [true, false, false]);
}

#[test]
fn toggling_the_open_group_closes_everything() {
    let mut groups = vec![Group::new(false), Group::new(true), Group::new(false)];
    initialize(&mut groups);
    toggle(&mut groups, 1);
    assert_eq!(open_states(&groups), [false, false, false]);
}

#[test]
fn toggling_twice_restores_the_open_group() {
    let mut groups = vec![Group::new(false), Group::new(false)];
    initialize(&mut groups);
    toggle(&mut groups, 0);
    assert_eq!(open_states(&groups), [true, false]);
    toggle(&mut groups, 0);
    assert_eq!(open_states(&groups), [false, false]);
    toggle(&mut groups, 0);
    assert_eq!(open_states(&groups), [true, false]);
}

#[test]
fn switching_groups_moves_the_single_open_slot() {
    let mut groups = vec![Group::new(false), Group::new(false), Group::new(false)];
    initialize(&mut groups);
    toggle(&mut groups, 0);
    toggle(&mut groups, 2);
    assert_eq!(open_states(&groups), [false, false, true]);
}

#[test]
fn out_of_range_toggle_is_a_no_op() {
    let mut groups = vec![Group::new(true)];
    initialize(&mut groups);
    toggle(&mut groups, 5);
    assert_eq!(open_states(&groups), [true]);
}
