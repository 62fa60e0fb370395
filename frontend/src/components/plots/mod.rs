pub mod matplotlib;
pub mod renderer;
pub mod styles;
