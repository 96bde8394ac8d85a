pub mod common;
pub mod controller;
pub mod icon;
pub mod navbar;
pub mod pages;
pub mod visibility;

pub use controller::{ViewController, provide_view_controller, use_view_controller};
pub use icon::{Icon, icons};
pub use navbar::Navbar;
