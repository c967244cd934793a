use gtk4::prelude::*;
use gtk4 as gtk;

/// Modal "Message" window showing the pending notification until OK is pressed.
pub struct Notice {
    window: gtk::Window,
    text: gtk::Label,
}

impl Notice {
    pub fn new<F: Fn() + 'static>(parent: &impl IsA<gtk::Window>, message: &str, on_ok: F) -> Self {
        let window = gtk::Window::builder()
            .transient_for(parent)
            .modal(true)
            .deletable(false)
            .resizable(false)
            .title("Message")
            .default_width(360)
            .build();

        let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
        root.set_margin_top(24);
        root.set_margin_bottom(24);
        root.set_margin_start(24);
        root.set_margin_end(24);

        let heading = gtk::Label::new(Some("Message"));
        heading.add_css_class("title-4");
        heading.set_halign(gtk::Align::Start);
        root.append(&heading);

        let text = gtk::Label::new(Some(message));
        text.set_wrap(true);
        text.set_halign(gtk::Align::Start);
        root.append(&text);

        let ok = gtk::Button::with_label("OK");
        ok.add_css_class("suggested-action");
        ok.set_halign(gtk::Align::End);
        ok.connect_clicked(move |_| on_ok());
        root.append(&ok);

        window.set_child(Some(&root));
        window.present();
        Self { window, text }
    }

    pub fn set_message(&self, message: &str) {
        self.text.set_label(message);
    }

    pub fn close(&self) {
        self.window.close();
    }
}
