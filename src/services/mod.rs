pub mod exiftool;
pub mod frame_resolver;
pub mod fs_service;
pub mod gps;
pub mod roll_service;
pub mod tag_builder;
