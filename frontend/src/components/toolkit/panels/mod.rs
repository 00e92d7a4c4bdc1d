//! One view function per tab panel.

pub mod about;
pub mod cover_letter;
pub mod portfolio;
pub mod resume;
