// Resume parsing: multipart upload → document text → contact fields.
// The only model traffic here goes through contact.rs.

pub mod contact;
pub mod document;
pub mod handlers;
pub mod multipart;
pub mod prompts;
