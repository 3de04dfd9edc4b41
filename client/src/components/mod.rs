//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome from read-only signals and report user
//! intent through callbacks; none of them own page or menu state.

pub mod brand_logo;
pub mod footer;
pub mod mobile_menu;
pub mod navbar;
