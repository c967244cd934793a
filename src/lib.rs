pub mod api;
pub mod app;
pub mod error;
pub mod sms;
pub mod state;
pub mod utils;

#[cfg(feature = "gui")]
pub mod ui;

pub use api::models::{Role, RoleFilter, Vendor, VendorDirectory, VendorId};
pub use error::{DashboardError, ValidationError};
pub use state::Dashboard;
