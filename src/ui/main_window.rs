use adw::prelude::*;
use adw::Application;
use std::cell::RefCell;
use std::rc::Rc;

use crate::api::client::{DraftGenerator, GeminiClient};
use crate::api::models::{RoleFilter, VendorId};
use crate::app::AppConfig;
use crate::sms::DesktopLauncher;
use crate::state::Dashboard;
use crate::ui::composer::{ComposerPanel, ComposerView};
use crate::ui::filter_bar::FilterBar;
use crate::ui::notice::Notice;
use crate::ui::vendor_list::{VendorList, VendorRow};

/// Owned copy of everything the widgets show, so no `RefCell` borrow is
/// held while widget setters fire their signal handlers.
struct ViewModel {
    filter: RoleFilter,
    rows: Vec<VendorRow>,
    any_selected: bool,
    composer: ComposerView,
    notice: Option<String>,
}

impl ViewModel {
    fn of(state: &Dashboard) -> Self {
        let rows = state
            .visible_vendors()
            .into_iter()
            .map(|v| VendorRow {
                id: v.id,
                name: v.name.clone(),
                role: v.role.to_string(),
                phone_number: v.phone_number.clone(),
                selected: state.is_selected(v.id),
            })
            .collect();
        let any_selected = !state.selection().is_empty();
        Self {
            filter: state.role_filter(),
            rows,
            any_selected,
            composer: ComposerView {
                visible: any_selected,
                purpose: state.composer().purpose().to_string(),
                draft: state.composer().draft().to_string(),
                generating: state.composer().is_generating(),
                sending: state.dispatch().is_sending(),
            },
            notice: state.notification().map(str::to_string),
        }
    }
}

struct Controller {
    state: RefCell<Dashboard>,
    client: GeminiClient,
    window: adw::ApplicationWindow,
    filter_bar: FilterBar,
    vendor_list: VendorList,
    composer: ComposerPanel,
    notice: RefCell<Option<Notice>>,
}

impl Controller {
    fn snapshot(&self) -> ViewModel {
        ViewModel::of(&self.state.borrow())
    }

    fn render(self: &Rc<Self>) {
        let view = self.snapshot();
        self.filter_bar.update(view.filter, view.any_selected);
        let this = self.clone();
        self.vendor_list
            .set_items(&view.rows, Rc::new(move |id: VendorId| this.toggle(id)));
        self.composer.update(&view.composer);
        self.show_notice(view.notice);
    }

    fn render_composer(&self) {
        let view = self.snapshot();
        self.composer.update(&view.composer);
    }

    fn show_notice(self: &Rc<Self>, text: Option<String>) {
        let mut slot = self.notice.borrow_mut();
        match text {
            Some(text) => {
                if let Some(open) = slot.as_ref() {
                    open.set_message(&text);
                    return;
                }
                let this = self.clone();
                *slot = Some(Notice::new(&self.window, &text, move || this.acknowledge()));
            }
            None => {
                if let Some(open) = slot.take() {
                    open.close();
                }
            }
        }
    }

    fn acknowledge(self: &Rc<Self>) {
        self.state.borrow_mut().acknowledge();
        if let Some(open) = self.notice.borrow_mut().take() {
            open.close();
        }
    }

    fn toggle(self: &Rc<Self>, id: VendorId) {
        self.state.borrow_mut().toggle(id);
        // The check button that fired this is about to be replaced; rebuild once its handler returns.
        let this = self.clone();
        glib::idle_add_local_once(move || this.render());
    }

    fn suggest(self: &Rc<Self>) {
        let request = self.state.borrow_mut().begin_generation();
        self.render();
        let Some(request) = request else {
            return;
        };

        let client = self.client.clone();
        let rx = crate::utils::run_async_to_main(async move { client.generate(&request).await });
        let this = self.clone();
        rx.attach(None, move |res| {
            this.state.borrow_mut().finish_generation(res);
            this.render();
            glib::ControlFlow::Continue
        });
    }

    fn send(self: &Rc<Self>) {
        let handoff = self.state.borrow_mut().begin_send(&DesktopLauncher);
        self.render();
        if handoff.is_none() {
            return;
        }
        let delay = self.state.borrow().dispatch().settle_delay();
        let this = self.clone();
        glib::timeout_add_local_once(delay, move || {
            this.state.borrow_mut().settle_send();
            this.render();
        });
    }
}

pub fn show_main_window(app: &Application, config: AppConfig) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Vendor Dashboard")
        .default_width(960)
        .default_height(720)
        .build();

    let state = Dashboard::seeded(&config);
    let filter_bar = FilterBar::new(&state.directory().filters());
    let vendor_list = VendorList::new();
    let composer = ComposerPanel::new();

    let root = gtk4::Box::new(gtk4::Orientation::Vertical, 12);
    root.set_margin_top(24);
    root.set_margin_bottom(24);
    root.set_margin_start(24);
    root.set_margin_end(24);

    let title = gtk4::Label::new(Some("Vendor Communication Dashboard"));
    title.add_css_class("title-1");
    root.append(&title);
    let subtitle = gtk4::Label::new(Some(
        "Select vendors and send a group message directly from your phone.",
    ));
    subtitle.add_css_class("dim-label");
    root.append(&subtitle);

    let section = gtk4::Label::new(Some("Select Vendors"));
    section.add_css_class("title-3");
    section.set_halign(gtk4::Align::Start);
    root.append(&section);
    root.append(&filter_bar.widget());
    root.append(&vendor_list.widget());
    root.append(&composer.widget());

    let container = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let header_title = gtk4::Label::new(Some("Vendors"));
    header.set_title_widget(Some(&header_title));
    container.append(&header);
    let scroller = gtk4::ScrolledWindow::builder().vexpand(true).build();
    scroller.set_child(Some(&root));
    container.append(&scroller);
    window.set_content(Some(&container));

    let ctl = Rc::new(Controller {
        state: RefCell::new(state),
        client: GeminiClient::new(&config),
        window: window.clone(),
        filter_bar,
        vendor_list,
        composer,
        notice: RefCell::new(None),
    });

    {
        let this = ctl.clone();
        ctl.filter_bar.connect_filter(move |filter| {
            this.state.borrow_mut().set_role_filter(filter);
            this.render();
        });
    }
    {
        let this = ctl.clone();
        ctl.filter_bar.connect_select_all(move || {
            this.state.borrow_mut().select_all();
            this.render();
        });
    }
    {
        let this = ctl.clone();
        ctl.filter_bar.connect_deselect_all(move || {
            this.state.borrow_mut().deselect_all();
            this.render();
        });
    }
    {
        let this = ctl.clone();
        ctl.composer.connect_purpose_changed(move |text| {
            this.state.borrow_mut().set_purpose(text);
            this.render_composer();
        });
    }
    {
        let this = ctl.clone();
        ctl.composer.connect_draft_changed(move |text| {
            this.state.borrow_mut().set_draft(text);
            this.render_composer();
        });
    }
    {
        let this = ctl.clone();
        ctl.composer.connect_suggest(move || this.suggest());
    }
    {
        let this = ctl.clone();
        ctl.composer.connect_send(move || this.send());
    }

    ctl.render();
    window.present();
}
