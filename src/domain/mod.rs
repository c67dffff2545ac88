pub mod development_data;
pub mod errors;
pub mod logging;
pub mod timeline;
