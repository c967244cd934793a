use crate::api::client::{DraftGenerator, DraftRequest};
use crate::api::models::{RoleFilter, Vendor, VendorDirectory, VendorId};
use crate::app::AppConfig;
use crate::error::{DashboardError, Result};
use crate::sms::{SmsHandoff, SmsLauncher};
use crate::state::composer::MessageComposer;
use crate::state::dispatch::DispatchController;
use crate::state::notification::NotificationModel;
use crate::state::selection::SelectionModel;

/// All UI state of the dashboard, owned in one place.
///
/// The two async operations are split into `begin_*` and `finish_*`/`settle_*`
/// halves so a caller keeping this behind a `RefCell` never holds a borrow
/// across an await. [`Dashboard::generate_draft`] and [`Dashboard::send`] glue
/// the halves together for callers that own the state directly.
#[derive(Debug)]
pub struct Dashboard {
    directory: VendorDirectory,
    filter: RoleFilter,
    selection: SelectionModel,
    composer: MessageComposer,
    dispatch: DispatchController,
    notification: NotificationModel,
}

fn selected_in<'a>(directory: &'a VendorDirectory, selection: &SelectionModel) -> Vec<&'a Vendor> {
    selection.ids().iter().filter_map(|id| directory.get(*id)).collect()
}

impl Dashboard {
    pub fn new(directory: VendorDirectory, config: &AppConfig) -> Self {
        Self {
            directory,
            filter: RoleFilter::All,
            selection: SelectionModel::new(),
            composer: MessageComposer::new(),
            dispatch: DispatchController::new(config.recipient_delimiter.clone(), config.settle_delay()),
            notification: NotificationModel::new(),
        }
    }

    pub fn seeded(config: &AppConfig) -> Self {
        Self::new(VendorDirectory::seeded(), config)
    }

    pub fn directory(&self) -> &VendorDirectory {
        &self.directory
    }

    pub fn role_filter(&self) -> RoleFilter {
        self.filter
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn composer(&self) -> &MessageComposer {
        &self.composer
    }

    pub fn dispatch(&self) -> &DispatchController {
        &self.dispatch
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.pending()
    }

    pub fn visible_vendors(&self) -> Vec<&Vendor> {
        self.directory.visible(self.filter)
    }

    /// Selected vendors in selection order.
    pub fn selected_vendors(&self) -> Vec<&Vendor> {
        selected_in(&self.directory, &self.selection)
    }

    // Selection

    pub fn set_role_filter(&mut self, filter: RoleFilter) {
        self.filter = filter;
    }

    pub fn toggle(&mut self, id: VendorId) {
        if !self.directory.contains(id) {
            log::warn!("Ignoring toggle of unknown vendor {}", id);
            return;
        }
        self.selection.toggle(id);
    }

    pub fn select_all(&mut self) {
        let visible = self.directory.visible(self.filter);
        self.selection.select_all(visible);
    }

    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
    }

    pub fn is_selected(&self, id: VendorId) -> bool {
        self.selection.is_selected(id)
    }

    // Composing

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.composer.set_draft(text);
    }

    pub fn set_purpose(&mut self, text: impl Into<String>) {
        self.composer.set_purpose(text);
    }

    /// Returns the request to send to a generator, or `None` when nothing
    /// should be sent (already generating, or validation failed and a
    /// notification is now pending).
    pub fn begin_generation(&mut self) -> Option<DraftRequest> {
        if self.composer.is_generating() {
            log::debug!("Draft generation already running");
            return None;
        }
        let selected = selected_in(&self.directory, &self.selection);
        match self.composer.begin(&selected) {
            Ok(request) => Some(request),
            Err(e) => {
                self.report(e);
                None
            }
        }
    }

    pub fn finish_generation(&mut self, outcome: Result<String>) {
        if let Err(e) = self.composer.finish(outcome) {
            self.report(e);
        }
    }

    pub async fn generate_draft<G: DraftGenerator>(&mut self, generator: &G) {
        let Some(request) = self.begin_generation() else {
            return;
        };
        let outcome = generator.generate(&request).await;
        self.finish_generation(outcome);
    }

    // Dispatch

    /// Hand the draft to the SMS composer and enter `Sending`. The caller is
    /// expected to call [`Dashboard::settle_send`] after the settle delay.
    pub fn begin_send<L: SmsLauncher + ?Sized>(&mut self, launcher: &L) -> Option<SmsHandoff> {
        if self.dispatch.is_sending() {
            log::debug!("Send already settling");
            return None;
        }
        let selected = selected_in(&self.directory, &self.selection);
        match self.dispatch.begin(&selected, self.composer.draft(), launcher) {
            Ok(handoff) => Some(handoff),
            Err(e) => {
                self.report(e);
                None
            }
        }
    }

    /// End of the settle delay. Draft and selection are cleared only if a
    /// send was actually in flight.
    pub fn settle_send(&mut self) {
        if self.dispatch.settle() {
            self.composer.clear_draft();
            self.selection.deselect_all();
        }
    }

    pub async fn send<L: SmsLauncher + ?Sized>(&mut self, launcher: &L) {
        if self.begin_send(launcher).is_none() {
            return;
        }
        tokio::time::sleep(self.dispatch.settle_delay()).await;
        self.settle_send();
    }

    // Notifications

    pub fn notify(&mut self, text: impl Into<String>) {
        self.notification.notify(text);
    }

    pub fn acknowledge(&mut self) {
        self.notification.acknowledge();
    }

    fn report(&mut self, err: DashboardError) {
        if err.is_validation() {
            log::info!("{}", err);
        } else {
            log::warn!("{:?}", err);
        }
        self.notification.notify(err.to_string());
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::api::models::Role;
    use crate::utils::digits_only;
    use proptest::prelude::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<SmsHandoff>>);

    impl SmsLauncher for Recorder {
        fn launch(&self, handoff: &SmsHandoff) -> Result<()> {
            self.0.borrow_mut().push(handoff.clone());
            Ok(())
        }
    }

    #[derive(Debug, Clone)]
    enum Op {
        Toggle(u32),
        Filter(usize),
        SelectAll,
        DeselectAll,
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (1u32..=20).prop_map(Op::Toggle),
            (0usize..4).prop_map(Op::Filter),
            Just(Op::SelectAll),
            Just(Op::DeselectAll),
        ]
    }

    fn arb_phone_book() -> impl Strategy<Value = (Vec<String>, Vec<usize>)> {
        prop::collection::vec("[-+() .#a-z0-9]{0,16}", 1..8).prop_flat_map(|phones| {
            let order = Just((0..phones.len()).collect::<Vec<_>>()).prop_shuffle();
            (Just(phones), order)
        })
    }

    proptest! {
        #[test]
        fn filter_changes_leave_selection_alone(
            ops in prop::collection::vec(arb_op(), 0..40),
            filter in 0usize..4,
        ) {
            let mut d = Dashboard::seeded(&AppConfig::default());
            let filters = d.directory().filters();
            for op in ops {
                match op {
                    Op::Toggle(id) => d.toggle(VendorId(id)),
                    Op::Filter(i) => d.set_role_filter(filters[i]),
                    Op::SelectAll => d.select_all(),
                    Op::DeselectAll => d.deselect_all(),
                }
            }
            let before = d.selection().clone();
            d.set_role_filter(filters[filter]);
            prop_assert_eq!(d.selection(), &before);
        }

        #[test]
        fn recipients_are_digits_in_selection_order((phones, order) in arb_phone_book()) {
            let vendors = phones
                .iter()
                .enumerate()
                .map(|(i, p)| Vendor::new(i as u32 + 1, "V", Role::Cleaner, p))
                .collect();
            let mut d = Dashboard::new(VendorDirectory::new(vendors), &AppConfig::default());
            for i in &order {
                d.toggle(VendorId(*i as u32 + 1));
            }
            d.set_draft("Hello");
            let launcher = Recorder::default();
            let handoff = d.begin_send(&launcher);
            prop_assert!(handoff.is_some());
            let handoff = handoff.unwrap();
            let expected: Vec<String> = order.iter().map(|i| digits_only(&phones[*i])).collect();
            prop_assert!(handoff.recipients.iter().all(|r| r.chars().all(|c| c.is_ascii_digit())));
            prop_assert_eq!(&handoff.recipients, &expected);

            d.settle_send();
            prop_assert!(d.selection().is_empty());
            prop_assert_eq!(d.composer().draft(), "");
        }
    }
}
