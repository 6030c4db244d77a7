//! View state for the chat widgets and the pages that host them.
//!
//! DESIGN
//! ======
//! Each widget's display rules are expressed as plain data + transitions here,
//! so the `components` layer only maps state onto markup and DOM events.

pub mod chat;
pub mod media;
pub mod profile;
pub mod wizard;
