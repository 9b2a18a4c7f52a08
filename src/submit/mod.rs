//! Delivery of validated submissions.
//!
//! The form hands every successfully validated [`FormState`] to a
//! [`Submitter`]. The default one only records the submission in the log.

use crate::app::form::FormState;
use anyhow::Result;

pub trait Submitter {
    fn submit(&mut self, form: &FormState) -> Result<()>;
}

/// Records each submission as a `tracing` event.
#[derive(Debug, Default)]
pub struct LogSubmitter;

impl LogSubmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Submitter for LogSubmitter {
    fn submit(&mut self, form: &FormState) -> Result<()> {
        tracing::info!(
            name = %form.name,
            email = %form.email,
            gender = %form.gender,
            message = %form.message,
            "submitted"
        );
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Keeps every submitted form; fails on demand.
    #[derive(Debug, Default)]
    pub struct RecordingSubmitter {
        pub received: Vec<FormState>,
        pub fail: bool,
    }

    impl Submitter for RecordingSubmitter {
        fn submit(&mut self, form: &FormState) -> Result<()> {
            if self.fail {
                anyhow::bail!("collaborator unavailable");
            }
            self.received.push(form.clone());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_submitter_accepts_form() {
        let mut submitter = LogSubmitter::new();
        let form = FormState::new();
        assert!(submitter.submit(&form).is_ok());
    }
}
