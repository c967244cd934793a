use gtk4::prelude::*;
use gtk4 as gtk;
use std::rc::Rc;

use crate::api::models::RoleFilter;

/// Role filter buttons plus the select/deselect-all actions.
pub struct FilterBar {
    root: gtk::Box,
    buttons: Vec<(RoleFilter, gtk::Button)>,
    select_all: gtk::Button,
    deselect_all: gtk::Button,
}

impl FilterBar {
    pub fn new(filters: &[RoleFilter]) -> Self {
        let root = gtk::Box::new(gtk::Orientation::Horizontal, 6);

        let caption = gtk::Label::new(Some("Filter by Role:"));
        caption.add_css_class("dim-label");
        root.append(&caption);

        let buttons: Vec<_> = filters
            .iter()
            .map(|f| {
                let btn = gtk::Button::with_label(f.label());
                root.append(&btn);
                (*f, btn)
            })
            .collect();

        let select_all = gtk::Button::with_label("Select All");
        select_all.add_css_class("suggested-action");
        root.append(&select_all);

        let deselect_all = gtk::Button::with_label("Deselect All");
        deselect_all.set_visible(false);
        root.append(&deselect_all);

        Self {
            root,
            buttons,
            select_all,
            deselect_all,
        }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn connect_filter<F: Fn(RoleFilter) + 'static>(&self, f: F) {
        let f = Rc::new(f);
        for (filter, btn) in &self.buttons {
            let f = f.clone();
            let filter = *filter;
            btn.connect_clicked(move |_| (f)(filter));
        }
    }

    pub fn connect_select_all<F: Fn() + 'static>(&self, f: F) {
        self.select_all.connect_clicked(move |_| f());
    }

    pub fn connect_deselect_all<F: Fn() + 'static>(&self, f: F) {
        self.deselect_all.connect_clicked(move |_| f());
    }

    pub fn update(&self, active: RoleFilter, any_selected: bool) {
        for (filter, btn) in &self.buttons {
            if *filter == active {
                btn.add_css_class("suggested-action");
            } else {
                btn.remove_css_class("suggested-action");
            }
        }
        self.deselect_all.set_visible(any_selected);
    }
}
