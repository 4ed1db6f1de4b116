pub mod link;
pub mod nav_link;
pub mod spinner;

pub use link::Link;
pub use nav_link::NavLink;
pub use spinner::Spinner;
