//! Page modules, one per `ActivePage` variant.
//!
//! ARCHITECTURE
//! ============
//! The shell mounts exactly one page at a time by matching on the active
//! page. Page-local state (the contact form) lives and dies with its page.

pub mod contact;
pub mod home;
pub mod team;
