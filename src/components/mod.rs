pub mod app;
pub mod drawer;

pub use app::App;
pub use drawer::{Drawer, DrawerProps};
