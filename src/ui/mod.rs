pub mod composer;
pub mod filter_bar;
pub mod main_window;
pub mod notice;
pub mod vendor_list;
