//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: pages pass state in as props and receive
//! user intent back through callbacks. Display rules live in `crate::state`.

pub mod api_error_display;
pub mod media_preview;
pub mod message_list;
pub mod textarea;
pub mod wizard_navigation;
