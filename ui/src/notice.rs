use std::time::Duration;

/// How long a toast stays up unless dismissed.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message for the admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// The toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl Notices {
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, notice });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut notices = Notices::default();
        let first = notices.push(Notice::success("User created successfully!"));
        let second = notices.push(Notice::error("Failed to delete user"));
        assert_ne!(first, second);

        notices.dismiss(first);
        assert_eq!(notices.toasts().len(), 1);
        assert_eq!(notices.toasts()[0].id, second);
        assert!(notices.toasts()[0].notice.is_error());
    }

    #[test]
    fn ids_are_not_reused_after_dismiss() {
        let mut notices = Notices::default();
        let first = notices.push(Notice::success("a"));
        notices.dismiss(first);
        let second = notices.push(Notice::success("b"));
        assert!(second > first);
        assert!(!notices.is_empty());
    }
}
