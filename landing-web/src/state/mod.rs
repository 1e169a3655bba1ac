//! Application state

pub mod landing;
