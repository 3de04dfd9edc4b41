//! Outbound integration seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! `inquiry` defines the capability the contact form calls to deliver a
//! message. The site ships a simulated implementation; a real endpoint only
//! has to implement the same trait.

pub mod inquiry;
