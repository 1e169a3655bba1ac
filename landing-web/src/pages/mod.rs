//! Page modules

pub mod destination;
pub mod landing;

pub use destination::DestinationPage;
pub use landing::LandingPage;
