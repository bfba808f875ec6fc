use std::{future::Future, time::Duration};

use types::{DocumentKind, Error, PolicyDocument, PolicyForm, Result, ValidationError};

use crate::Notice;

/// How long the success banner stays up before the dialog closes itself.
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_millis(1500);

/// Fetch, edit and save of a single policy document.
///
/// The displayed record and the form are kept apart: edits only reach the
/// displayed record once the server has accepted them.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentEditor {
    kind: DocumentKind,
    document: Option<PolicyDocument>,
    form: PolicyForm,
    loading: bool,
    dialog_open: bool,
    saving: bool,
    banner: Option<Notice>,
}

impl DocumentEditor {
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            document: None,
            form: PolicyForm::blank(kind),
            loading: true,
            dialog_open: false,
            saving: false,
            banner: None,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn document(&self) -> Option<&PolicyDocument> {
        self.document.as_ref()
    }

    pub fn form(&self) -> &PolicyForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PolicyForm {
        &mut self.form
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// The banner shown inside the dialog after a save.
    pub fn banner(&self) -> Option<&Notice> {
        self.banner.as_ref()
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Applies a fetch. Both the displayed record and the form follow it.
    /// A failed fetch keeps whatever was shown before.
    pub fn finish_fetch(&mut self, result: Result<Option<PolicyDocument>>) -> Option<Error> {
        self.loading = false;
        match result {
            Ok(document) => {
                self.set_document(document);
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, kind = ?self.kind, "failed to load document");
                Some(err)
            }
        }
    }

    pub fn open_dialog(&mut self) {
        self.form = self.current_form();
        self.banner = None;
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        if self.saving {
            return;
        }
        self.dialog_open = false;
        self.banner = None;
        self.form = self.current_form();
    }

    /// Checks the form and, if it is complete, marks the editor as saving and
    /// returns the form to send.
    pub fn begin_save(&mut self) -> Result<PolicyForm, ValidationError> {
        self.form.validate()?;
        self.saving = true;
        self.banner = None;
        Ok(self.form.clone())
    }

    /// Applies the outcome of a save. Returns `true` when the dialog should
    /// close after [`AUTO_CLOSE_DELAY`].
    pub fn finish_save(&mut self, result: Result<PolicyDocument>) -> bool {
        self.saving = false;
        match result {
            Ok(document) => {
                self.set_document(Some(document));
                self.banner = Some(Notice::success(format!(
                    "{} updated successfully!",
                    self.kind.title()
                )));
                true
            }
            Err(err) => {
                let fallback = format!("Failed to update {}", self.kind.title());
                tracing::warn!(error = %err, "{fallback}");
                self.banner = Some(Notice::error(err.user_message(&fallback)));
                false
            }
        }
    }

    /// Closes the dialog once the success banner has been shown.
    pub fn auto_close(&mut self) {
        if self.banner.as_ref().is_some_and(|b| !b.is_error()) {
            self.dialog_open = false;
            self.banner = None;
        }
    }

    fn set_document(&mut self, document: Option<PolicyDocument>) {
        self.document = document;
        self.form = self.current_form();
    }

    fn current_form(&self) -> PolicyForm {
        self.document
            .as_ref()
            .map(PolicyForm::from_document)
            .unwrap_or_else(|| PolicyForm::blank(self.kind))
    }
}

/// Waits out [`AUTO_CLOSE_DELAY`] using `sleep`, then runs `close`.
pub async fn close_after_delay<F, Fut>(sleep: F, close: impl FnOnce())
where
    F: FnOnce(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    sleep(AUTO_CLOSE_DELAY).await;
    close();
}
