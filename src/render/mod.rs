pub mod renderer;

pub use renderer::{GameOverInfo, Renderer};
