use std::collections::BTreeSet;

use super::menu::{MenuTree, NodeId};

pub const EXPANDED_WIDTH: u32 = 280;
pub const COLLAPSED_WIDTH: u32 = 80;

/// Outcome of clicking a sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Toggled { open: bool },
    PopoverShown(NodeId),
    PopoverClosed,
    Navigate(&'static str),
    Ignored,
}

/// Transient sidebar state. The menu tree itself never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    collapsed: bool,
    small_screen: bool,
    drawer_open: bool,
    expanded: BTreeSet<NodeId>,
    popover: Option<NodeId>,
}

impl NavState {
    /// Small screens always draw the full-width drawer.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed && !self.small_screen
    }

    pub fn width(&self) -> u32 {
        if self.is_collapsed() {
            COLLAPSED_WIDTH
        } else {
            EXPANDED_WIDTH
        }
    }

    pub fn is_small_screen(&self) -> bool {
        self.small_screen
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn popover(&self) -> Option<NodeId> {
        self.popover
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
        self.popover = None;
    }

    pub fn set_small_screen(&mut self, small: bool) {
        if self.small_screen == small {
            return;
        }
        self.small_screen = small;
        self.drawer_open = false;
        self.popover = None;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// Opens every group above the entry that links to `pathname`.
    pub fn reveal(&mut self, tree: &MenuTree, pathname: &str) {
        if let Some(id) = tree.find_by_href(pathname) {
            self.expanded.extend(tree.ancestors(id));
        }
    }

    pub fn activate(&mut self, tree: &MenuTree, id: NodeId) -> Activation {
        let Some(node) = tree.get(id) else {
            return Activation::Ignored;
        };
        if node.has_children() {
            if self.is_collapsed() {
                if self.popover == Some(id) {
                    self.popover = None;
                    Activation::PopoverClosed
                } else {
                    self.popover = Some(id);
                    Activation::PopoverShown(id)
                }
            } else {
                let open = !self.expanded.remove(&id);
                if open {
                    self.expanded.insert(id);
                }
                Activation::Toggled { open }
            }
        } else if let Some(href) = node.href {
            self.navigated();
            Activation::Navigate(href)
        } else {
            Activation::Ignored
        }
    }

    /// Called after any route change triggered from the shell.
    pub fn navigated(&mut self) {
        self.popover = None;
        if self.small_screen {
            self.drawer_open = false;
        }
    }

    pub fn dismiss_popover(&mut self) {
        self.popover = None;
    }
}
