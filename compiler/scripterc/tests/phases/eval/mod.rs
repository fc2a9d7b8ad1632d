//! Evaluation tests through the embedding API.

mod host;
mod language;
mod modules;
