//! UI components for the Dof3a desktop feed.

pub mod icon;
pub mod navbar;
pub mod post;
pub mod sidebar;

pub use navbar::Navbar;
pub use post::PostCardView;
pub use sidebar::Sidebar;
