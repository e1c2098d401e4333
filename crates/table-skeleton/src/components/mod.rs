pub mod table_skeleton;

pub use table_skeleton::*;
