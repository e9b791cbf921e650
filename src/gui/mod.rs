pub mod app;
pub mod diagram;
pub mod theme;
