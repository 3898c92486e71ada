//! # notebook_guide
//!
//! Interaction model for the NotebookLM guide page: scroll-driven nav
//! highlighting, expandable feature cards, use-case tabs, the mobile menu and
//! the entrance/parallax decorations.
//!
//! Nothing in this crate touches the DOM. Each region is a small state holder
//! with pure transitions, and [`PageController`] routes [`PageEvent`]s to them
//! and returns the [`Effect`]s a host must apply. The browser host lives in the
//! `notebook_guide_web` crate.
//!
//! ```
//! use notebook_guide::prelude::*;
//!
//! let layout = PageLayout {
//!     tab_cases: vec!["A".into(), "B".into(), "C".into()],
//!     panel_cases: vec!["A".into(), "B".into(), "C".into()],
//!     initial_tab: Some(0),
//!     ..PageLayout::default()
//! };
//! let mut page = PageController::new(PageConfig::default(), layout);
//!
//! page.handle(PageEvent::Key(Key::from_dom("ArrowLeft")));
//! assert_eq!(page.active_tab(), Some(2));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): JSON page config and serializable diagnostics

pub mod cards;
pub mod config;
pub mod controller;
pub mod decor;
pub mod diag;
pub mod menu;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod tabs;

pub use config::{ConfigError, PageConfig};
pub use controller::{Effect, Key, PageController, PageEvent, PageLayout};

pub mod prelude {
    pub use crate::cards::{CardState, CardView};
    pub use crate::config::{ConfigError, PageConfig};
    pub use crate::controller::{Effect, Key, PageController, PageEvent, PageLayout};
    pub use crate::decor::HeroPart;
    pub use crate::diag::PageInventory;
    pub use crate::nav::{NavBarStyle, SectionBounds};
    pub use crate::reveal::RevealOptions;
    pub use crate::scroll::ScrollTarget;
    pub use crate::tabs::{ArrowKey, TabSelection};
}
