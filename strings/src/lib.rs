pub mod concat;
pub mod identity;
pub mod slices;
