pub mod fs_types;
pub mod roll_types;
