pub mod agents;
pub mod multipart;
pub mod spreadsheets;
