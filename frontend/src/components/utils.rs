use super::super::Model;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient toast shown above the main content.
#[derive(Clone, PartialEq)]
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
}

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        *timeout_ref = Some(Timeout::new(duration, move || inner_callback()));
    })
}

pub fn render_notice(model: &Model) -> Html {
    let Some(notice) = &model.notice else {
        return html! {};
    };

    let (class, icon) = match notice.kind {
        NoticeKind::Success => ("notice notice-success", "fa-solid fa-circle-check"),
        NoticeKind::Error => ("notice notice-error", "fa-solid fa-circle-exclamation"),
    };

    html! {
        <div class={class} role="status">
            <i class={icon}></i>
            <p>{ &notice.message }</p>
        </div>
    }
}
