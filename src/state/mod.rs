pub mod composer;
pub mod dashboard;
pub mod dispatch;
pub mod notification;
pub mod selection;

pub use dashboard::Dashboard;
