// Interview API: question generation and answer evaluation.
// Both go JSON in → prompt → model → fence-stripped JSON out.

pub mod evaluation;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod questions;
