use gtk4::prelude::*;
use gtk4 as gtk;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComposerView {
    pub visible: bool,
    pub purpose: String,
    pub draft: String,
    pub generating: bool,
    pub sending: bool,
}

/// Purpose entry, "Suggest Message", the draft editor and "Send Message".
pub struct ComposerPanel {
    root: gtk::Box,
    purpose: gtk::Entry,
    suggest_btn: gtk::Button,
    suggest_spinner: gtk::Spinner,
    draft: gtk::TextView,
    send_btn: gtk::Button,
    send_spinner: gtk::Spinner,
}

fn spinner_button(label: &str) -> (gtk::Button, gtk::Spinner) {
    let inner = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    let spinner = gtk::Spinner::new();
    spinner.set_visible(false);
    inner.append(&spinner);
    inner.append(&gtk::Label::new(Some(label)));
    let btn = gtk::Button::new();
    btn.set_child(Some(&inner));
    btn.set_halign(gtk::Align::End);
    (btn, spinner)
}

fn buffer_text(view: &gtk::TextView) -> String {
    let buf = view.buffer();
    let (start, end) = buf.bounds();
    buf.text(&start, &end, false).to_string()
}

impl ComposerPanel {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 8);
        root.set_margin_top(8);
        root.set_visible(false);

        let title = gtk::Label::new(Some("Compose Message"));
        title.add_css_class("title-3");
        title.set_halign(gtk::Align::Start);
        root.append(&title);

        let purpose_label = gtk::Label::new(Some("What is the purpose of this message?"));
        purpose_label.set_halign(gtk::Align::Start);
        root.append(&purpose_label);

        let purpose = gtk::Entry::new();
        purpose.set_hexpand(true);
        purpose.set_placeholder_text(Some("e.g., Requesting availability for a new job"));
        root.append(&purpose);

        let (suggest_btn, suggest_spinner) = spinner_button("✨ Suggest Message");
        suggest_btn.set_sensitive(false);
        root.append(&suggest_btn);

        let draft_label = gtk::Label::new(Some("Drafted Message"));
        draft_label.set_halign(gtk::Align::Start);
        root.append(&draft_label);

        let draft = gtk::TextView::new();
        draft.set_wrap_mode(gtk::WrapMode::WordChar);
        let scroller = gtk::ScrolledWindow::builder()
            .hexpand(true)
            .min_content_height(96)
            .build();
        scroller.set_child(Some(&draft));
        root.append(&scroller);

        let (send_btn, send_spinner) = spinner_button("Send Message");
        send_btn.add_css_class("suggested-action");
        send_btn.set_sensitive(false);
        root.append(&send_btn);

        Self {
            root,
            purpose,
            suggest_btn,
            suggest_spinner,
            draft,
            send_btn,
            send_spinner,
        }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn connect_purpose_changed<F: Fn(String) + 'static>(&self, f: F) {
        self.purpose.connect_changed(move |entry| f(entry.text().to_string()));
    }

    pub fn connect_draft_changed<F: Fn(String) + 'static>(&self, f: F) {
        let view = self.draft.clone();
        self.draft.buffer().connect_changed(move |_| f(buffer_text(&view)));
    }

    pub fn connect_suggest<F: Fn() + 'static>(&self, f: F) {
        self.suggest_btn.connect_clicked(move |_| f());
        // Enter in the purpose field also asks for a suggestion
        let btn = self.suggest_btn.clone();
        self.purpose.connect_activate(move |_| {
            if btn.is_sensitive() {
                btn.emit_clicked();
            }
        });
    }

    pub fn connect_send<F: Fn() + 'static>(&self, f: F) {
        self.send_btn.connect_clicked(move |_| f());
    }

    pub fn update(&self, view: &ComposerView) {
        self.root.set_visible(view.visible);

        if self.purpose.text().as_str() != view.purpose {
            self.purpose.set_text(&view.purpose);
        }
        if buffer_text(&self.draft) != view.draft {
            self.draft.buffer().set_text(&view.draft);
        }

        self.suggest_btn
            .set_sensitive(!view.purpose.trim().is_empty() && !view.generating);
        self.suggest_spinner.set_visible(view.generating);
        self.suggest_spinner.set_spinning(view.generating);

        self.send_btn
            .set_sensitive(!view.draft.trim().is_empty() && !view.sending);
        self.send_spinner.set_visible(view.sending);
        self.send_spinner.set_spinning(view.sending);
    }
}
