/// What to tell the admin after a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationMessages {
    pub success: String,
    /// Shown when the server did not send a message of its own.
    pub failure: String,
}

impl MutationMessages {
    pub fn new(success: impl Into<String>, failure: impl Into<String>) -> Self {
        Self {
            success: success.into(),
            failure: failure.into(),
        }
    }
}

/// A dialog opened for one record: the edit form, the delete confirmation,
/// the reply box.
#[derive(Debug, Clone, PartialEq)]
pub struct Modal<T> {
    target: Option<T>,
    busy: bool,
}

impl<T> Default for Modal<T> {
    fn default() -> Self {
        Self {
            target: None,
            busy: false,
        }
    }
}

impl<T: Clone> Modal<T> {
    pub fn open(&mut self, target: T) {
        self.target = Some(target);
        self.busy = false;
    }

    /// Closing is refused while a request is in flight.
    pub fn close(&mut self) {
        if !self.busy {
            self.target = None;
        }
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    pub fn target_mut(&mut self) -> Option<&mut T> {
        self.target.as_mut()
    }

    /// Marks the dialog busy and hands out what to submit. Returns `None` if
    /// nothing is open or a submission is already running.
    pub fn submit(&mut self) -> Option<T> {
        if self.busy {
            return None;
        }
        let target = self.target.clone()?;
        self.busy = true;
        Some(target)
    }

    /// Closes the dialog on success; keeps it open for another try otherwise.
    pub fn finish(&mut self, succeeded: bool) {
        self.busy = false;
        if succeeded {
            self.target = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_closes_the_dialog() {
        let mut modal = Modal::default();
        modal.open("7".to_string());
        assert_eq!(modal.submit().as_deref(), Some("7"));
        assert!(modal.is_busy());

        modal.finish(true);
        assert!(!modal.is_open());
        assert!(!modal.is_busy());
    }

    #[test]
    fn failure_keeps_the_dialog_open() {
        let mut modal = Modal::default();
        modal.open(3u32);
        modal.submit();
        modal.finish(false);
        assert_eq!(modal.target(), Some(&3));
        assert!(!modal.is_busy());
    }

    #[test]
    fn no_double_submit_and_no_close_while_busy() {
        let mut modal = Modal::default();
        modal.open(1u32);
        assert!(modal.submit().is_some());
        assert!(modal.submit().is_none());

        modal.close();
        assert!(modal.is_open());
    }

    #[test]
    fn closed_dialog_has_nothing_to_submit() {
        let mut modal = Modal::<u32>::default();
        assert!(modal.submit().is_none());
        assert!(!modal.is_busy());
    }
}
