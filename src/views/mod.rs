pub mod app;
pub mod home;
pub mod not_found;
pub mod orders;

pub use app::render_app;
pub use home::render_home;
pub use not_found::render_not_found;
pub use orders::{render_order_detail, render_orders};
