//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each container is a plain struct with pure transition methods. Components
//! wrap them in `RwSignal`s; the transition rules stay testable without a
//! browser.

pub mod contact;
pub mod menu;
pub mod page;
pub mod scroll;
pub mod shell;
pub mod theme;
