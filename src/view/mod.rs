//! Presentation side: display formatting, render adapters and the list
//! view controller

pub mod controller;
pub mod format;
pub mod render;

pub use controller::{FetchOutcome, FetchTicket, Interaction, LoadState, ViewController};
pub use render::{RenderAdapter, TextRenderer};
