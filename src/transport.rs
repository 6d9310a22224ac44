//! Transport module: the play/pause/seek control surface over a single
//! loaded track, with wall-clock position bookkeeping.

mod controller;

pub use controller::*;

#[cfg(test)]
mod tests;
