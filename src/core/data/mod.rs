pub mod colour;
pub mod complex;
pub mod explorer_config;
pub mod frame_buffer;
pub mod raster;
pub mod tile;
pub mod viewport;
