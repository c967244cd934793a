use std::time::Duration;

use crate::api::models::Vendor;
use crate::error::{Result, ValidationError};
use crate::sms::{SmsHandoff, SmsLauncher};

/// `Idle -> Sending -> Idle`.
///
/// `Sending` is purely timed. The native composer gives no completion
/// signal, so after `settle_delay` the send is assumed done. Nothing here
/// confirms that a message was delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchController {
    is_sending: bool,
    delimiter: String,
    settle_delay: Duration,
}

impl DispatchController {
    pub fn new(delimiter: impl Into<String>, settle_delay: Duration) -> Self {
        Self {
            is_sending: false,
            delimiter: delimiter.into(),
            settle_delay,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.is_sending
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// Validate, hand off to `launcher` and enter `Sending`.
    ///
    /// Validation happens before any side effect. A launcher failure leaves
    /// the controller idle.
    pub fn begin<L: SmsLauncher + ?Sized>(
        &mut self,
        selected: &[&Vendor],
        draft: &str,
        launcher: &L,
    ) -> Result<SmsHandoff> {
        if selected.is_empty() || draft.trim().is_empty() {
            return Err(ValidationError::NoRecipientsOrEmptyMessage.into());
        }
        let handoff = SmsHandoff::new(selected.iter().copied(), draft, &self.delimiter);
        launcher.launch(&handoff)?;
        self.is_sending = true;
        Ok(handoff)
    }

    /// Leave `Sending`. Returns whether a send was actually in flight.
    pub fn settle(&mut self) -> bool {
        std::mem::replace(&mut self.is_sending, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Role;
    use crate::error::DashboardError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl SmsLauncher for Recorder {
        fn launch(&self, handoff: &SmsHandoff) -> Result<()> {
            self.0.borrow_mut().push(handoff.uri());
            Ok(())
        }
    }

    struct Broken;

    impl SmsLauncher for Broken {
        fn launch(&self, _: &SmsHandoff) -> Result<()> {
            Err(DashboardError::Handoff("no handler for sms:".into()))
        }
    }

    #[test]
    fn validation_blocks_the_launch() {
        let v = Vendor::new(1, "A", Role::Plumber, "+1 555");
        let launcher = Recorder::default();
        let mut d = DispatchController::new(";", Duration::from_secs(2));
        assert!(d.begin(&[], "Hello", &launcher).unwrap_err().is_validation());
        assert!(d.begin(&[&v], " \n\t", &launcher).unwrap_err().is_validation());
        assert!(launcher.0.borrow().is_empty());
        assert!(!d.is_sending());
    }

    #[test]
    fn begin_then_settle() {
        let a = Vendor::new(1, "A", Role::Plumber, "+1 555");
        let b = Vendor::new(2, "B", Role::Plumber, "(020) 7946");
        let launcher = Recorder::default();
        let mut d = DispatchController::new(",", Duration::from_secs(2));
        let h = d.begin(&[&b, &a], "Hello", &launcher).unwrap();
        assert_eq!(h.recipients, vec!["0207946", "1555"]);
        assert_eq!(*launcher.0.borrow(), vec!["sms:0207946,1555?body=Hello".to_string()]);
        assert!(d.is_sending());
        assert!(d.settle());
        assert!(!d.is_sending());
        assert!(!d.settle());
    }

    #[test]
    fn launcher_failure_stays_idle() {
        let a = Vendor::new(1, "A", Role::Plumber, "+1 555");
        let mut d = DispatchController::new(";", Duration::from_secs(2));
        let err = d.begin(&[&a], "Hello", &Broken).unwrap_err();
        assert!(matches!(err, DashboardError::Handoff(_)));
        assert!(!d.is_sending());
    }
}
