pub mod assets;
pub mod config;
pub mod consts;
pub mod error;
pub mod field;
pub mod frame_loop;
pub mod gui;
pub mod headless;
pub mod physics;
pub mod raster;
pub mod render;
pub mod sprite;
