//! Dioxus bindings for the controllers in this crate.

use std::{future::Future, marker::PhantomData};

use api::{ApiClient, ListResource};
use dioxus::{core::spawn_forever, prelude::*};
use gloo_timers::future::sleep;
use types::{DocumentKind, Error, Result, SessionStatus};

use crate::{
    Debouncer, DocumentEditor, ListOf, LoadOutcome, MutationMessages, NOTICE_DURATION, Notice,
    Notices, close_after_delay,
};

/// Toasts and the session status, shared by every page. Use
/// [`use_notifier`] to get hold of it.
#[derive(Clone, Copy)]
pub struct Notifier {
    notices: Signal<Notices>,
    status: Signal<SessionStatus>,
}

impl Notifier {
    pub fn notices(&self) -> Signal<Notices> {
        self.notices
    }

    pub fn status(&self) -> SessionStatus {
        *self.status.read()
    }

    pub fn signed_in(&mut self) {
        self.status.set(SessionStatus::Authenticated);
    }

    pub fn signed_out(&mut self) {
        self.status.set(SessionStatus::Anonymous);
    }

    /// Shows `notice` and schedules its removal. The timer lives on the root
    /// scope so a toast outlives the page that raised it.
    pub fn push(&mut self, notice: Notice) {
        let id = self.notices.write().push(notice);
        let mut notices = self.notices;
        spawn_forever(async move {
            sleep(NOTICE_DURATION).await;
            notices.write().dismiss(id);
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Notice::success(message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Notice::error(message));
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notices.write().dismiss(id);
    }

    /// The API client has already dropped the token when it reports a
    /// rejected session; this sends the guard back to sign-in.
    pub fn check_session(&mut self, err: &Error) {
        if err.is_unauthorized() {
            self.signed_out();
        }
    }

    pub fn report(&mut self, err: &Error, fallback: &str) {
        self.check_session(err);
        self.error(err.user_message(fallback));
    }
}

pub fn use_notifier_provider(initial: SessionStatus) -> Notifier {
    let notices = use_signal(Notices::default);
    let status = use_signal(|| initial);
    use_context_provider(|| Notifier { notices, status })
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

/// A paginated listing bound to the API. Queries changes through
/// `change_filters`, `set_search` and the paging methods reload it on their
/// own.
pub struct ResourceList<R: ListResource> {
    pub state: Signal<ListOf<R>>,
    client: Signal<ApiClient>,
    debouncer: Signal<Debouncer>,
    notifier: Notifier,
    resource: PhantomData<fn() -> R>,
}

impl<R: ListResource> Clone for ResourceList<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ListResource> Copy for ResourceList<R> {}

pub fn use_resource_list<R: ListResource>(page_size: u32) -> ResourceList<R> {
    let api = use_context::<ApiClient>();
    let client = use_signal(move || api);
    let state = use_signal(|| ListOf::<R>::new(page_size));
    let debouncer = use_signal(Debouncer::default);
    let notifier = use_notifier();

    let list = ResourceList {
        state,
        client,
        debouncer,
        notifier,
        resource: PhantomData,
    };

    let reload_key = use_memo(move || state.read().reload_key());
    use_effect(move || {
        let _key = reload_key();
        list.load();
    });

    list
}

impl<R: ListResource> ResourceList<R> {
    pub fn client(&self) -> ApiClient {
        self.client.peek().clone()
    }

    fn load(self) {
        let mut state = self.state;
        let mut notifier = self.notifier;
        let client = self.client();
        spawn(async move {
            let ticket = state.write().begin_load();
            let result = client.list::<R>(&ticket.query).await;
            let outcome = state.write().finish_load(ticket.generation, result);
            if let LoadOutcome::Failed(err) = outcome {
                notifier.report(&err, &format!("Failed to fetch {}", R::NOUN));
            }
        });
    }

    /// Records the keystroke right away; the search itself follows once
    /// typing pauses.
    pub fn set_search(self, text: String) {
        let mut state = self.state;
        state.write().set_raw_search(text.clone());
        let debouncer = self.debouncer.peek().clone();
        spawn(async move {
            if let Some(search) = debouncer.settle(text, sleep).await {
                state.write().apply_search(&search);
            }
        });
    }

    pub fn change_filters(self, update: impl FnOnce(&mut R::Filters)) {
        let mut state = self.state;
        state.write().change_filters(update);
    }

    pub fn previous_page(self) {
        let mut state = self.state;
        state.write().previous_page();
    }

    pub fn next_page(self) {
        let mut state = self.state;
        state.write().next_page();
    }

    /// Runs a write, shows its one notice and reloads on success. `on_done`
    /// learns whether it went through.
    pub fn mutate<T, Fut>(
        self,
        request: Fut,
        messages: MutationMessages,
        on_done: impl FnOnce(bool) + 'static,
    ) where
        T: 'static,
        Fut: Future<Output = Result<T>> + 'static,
    {
        let mut state = self.state;
        let mut notifier = self.notifier;
        spawn(async move {
            let result = request.await.map(|_| ());
            if let Err(err) = &result {
                notifier.check_session(err);
            }
            let succeeded = result.is_ok();
            let notice = state.write().finish_mutation(result, &messages);
            notifier.push(notice);
            on_done(succeeded);
        });
    }

    /// A write made from a table row. Ignored while an earlier write for the
    /// same row is still in flight.
    pub fn mutate_row<T, Fut>(self, id: String, request: Fut, messages: MutationMessages)
    where
        T: 'static,
        Fut: Future<Output = Result<T>> + 'static,
    {
        let mut state = self.state;
        let mut notifier = self.notifier;
        let begun = state.write().begin_row_write(&id);
        if !begun {
            return;
        }
        spawn(async move {
            let result = request.await.map(|_| ());
            if let Err(err) = &result {
                notifier.check_session(err);
            }
            let notice = state.write().finish_row_write(&id, result, &messages);
            notifier.push(notice);
        });
    }
}

/// A policy document page bound to the API.
#[derive(Clone, Copy)]
pub struct DocumentHandle {
    pub state: Signal<DocumentEditor>,
    client: Signal<ApiClient>,
    notifier: Notifier,
}

pub fn use_document_editor(kind: DocumentKind) -> DocumentHandle {
    let api = use_context::<ApiClient>();
    let client = use_signal(move || api);
    let state = use_signal(|| DocumentEditor::new(kind));
    let notifier = use_notifier();
    let handle = DocumentHandle {
        state,
        client,
        notifier,
    };

    use_effect(move || handle.fetch());

    handle
}

impl DocumentHandle {
    pub fn fetch(self) {
        let mut state = self.state;
        let mut notifier = self.notifier;
        let client = self.client.peek().clone();
        let kind = state.peek().kind();
        spawn(async move {
            state.write().begin_fetch();
            let result = client.get_document(kind).await;
            let failed = state.write().finish_fetch(result);
            if let Some(err) = failed {
                notifier.report(&err, &format!("Failed to fetch {}", kind.title()));
            }
        });
    }

    /// Saves the form, then closes the dialog after the success banner has
    /// been up for [`AUTO_CLOSE_DELAY`](crate::AUTO_CLOSE_DELAY) and fetches
    /// the stored record again.
    pub fn save(self) {
        let mut state = self.state;
        let mut notifier = self.notifier;
        let client = self.client.peek().clone();
        let kind = state.peek().kind();

        let begun = state.write().begin_save();
        let form = match begun {
            Ok(form) => form,
            Err(err) => {
                notifier.error(err.to_string());
                return;
            }
        };

        spawn(async move {
            let result = client.save_document(kind, &form).await;
            if let Err(err) = &result {
                notifier.check_session(err);
            }
            let saved = state.write().finish_save(result);
            if saved {
                close_after_delay(sleep, move || state.write().auto_close()).await;
                self.fetch();
            }
        });
    }
}
