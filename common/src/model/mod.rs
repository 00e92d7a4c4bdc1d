pub mod cover_letter;
pub mod portfolio;
pub mod resume;
