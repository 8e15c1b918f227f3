pub mod app;
pub mod input;
pub mod render;
pub mod text_input;
pub mod theme;

#[cfg(test)]
pub mod test_helpers;

pub use app::run;
