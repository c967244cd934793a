/// At most one message waiting for the administrator to dismiss it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationModel {
    pending: Option<String>,
}

impl NotificationModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `text`, replacing anything not yet acknowledged.
    pub fn notify(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.pending.is_some() {
            log::debug!("Replacing unacknowledged notification");
        }
        self.pending = Some(text).filter(|t| !t.is_empty());
    }

    pub fn acknowledge(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }
}
