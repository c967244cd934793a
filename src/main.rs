use adw::prelude::*;
use adw::Application;

fn main() {
    env_logger::init();
    let app = Application::builder()
        .application_id("com.example.VendorDashboard")
        .build();
    app.connect_activate(|app| {
        vendor_dashboard::app::build_ui(app);
    });
    app.run();
}
