//! Page components for Dof3a.

mod home;

pub use home::Home;
