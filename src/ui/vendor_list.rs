use gtk4::prelude::*;
use gtk4 as gtk;
use std::rc::Rc;

use crate::api::models::VendorId;

#[derive(Debug, Clone, PartialEq)]
pub struct VendorRow {
    pub id: VendorId,
    pub name: String,
    pub role: String,
    pub phone_number: String,
    pub selected: bool,
}

pub struct VendorList {
    root: gtk::ScrolledWindow,
    list: gtk::ListBox,
}

impl VendorList {
    pub fn new() -> Self {
        let list = gtk::ListBox::new();
        list.set_selection_mode(gtk::SelectionMode::None);
        list.add_css_class("boxed-list");

        let root = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .min_content_height(320)
            .build();
        root.set_child(Some(&list));

        Self { root, list }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn set_items(&self, rows: &[VendorRow], on_toggle: Rc<dyn Fn(VendorId)>) {
        while let Some(child) = self.list.first_child() {
            self.list.remove(&child);
        }
        for vendor in rows {
            let row = gtk::ListBoxRow::new();
            let line = gtk::Box::new(gtk::Orientation::Horizontal, 12);
            line.set_margin_top(8);
            line.set_margin_bottom(8);
            line.set_margin_start(8);
            line.set_margin_end(8);

            // Set state before connecting so rebuilding the list doesn't re-fire toggles.
            let check = gtk::CheckButton::new();
            check.set_active(vendor.selected);
            {
                let on_toggle = on_toggle.clone();
                let id = vendor.id;
                check.connect_toggled(move |_| (on_toggle)(id));
            }
            line.append(&check);

            let text = gtk::Box::new(gtk::Orientation::Vertical, 2);
            let name = gtk::Label::new(Some(&vendor.name));
            name.add_css_class("heading");
            name.set_halign(gtk::Align::Start);
            let role = gtk::Label::new(Some(&vendor.role));
            role.set_halign(gtk::Align::Start);
            let phone = gtk::Label::new(Some(&vendor.phone_number));
            phone.add_css_class("dim-label");
            phone.set_halign(gtk::Align::Start);
            text.append(&name);
            text.append(&role);
            text.append(&phone);
            line.append(&text);

            row.set_child(Some(&line));
            self.list.append(&row);
        }
    }
}
