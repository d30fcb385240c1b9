pub mod badge;
pub mod menu;
pub mod state;

pub use badge::{badge_style, BadgeStyle, StatusCategory};
pub use menu::{menu, MenuTree, NavNode, NavSection, NodeId};
pub use state::{Activation, NavState, COLLAPSED_WIDTH, EXPANDED_WIDTH};
