//! Transient notifications (toasts)
//!
//! A toast slides in shortly after being pushed, stays for the configured time,
//! then fades out and is removed.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const SHOW_DELAY_MS: u32 = 100;
const FADE_OUT_MS: u32 = 400;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub visible: bool,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    duration_ms: u32,
}

impl ToastService {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            duration_ms,
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn show(&self, text: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|t| {
            t.push(Toast {
                id,
                text: text.into(),
                visible: false,
            })
        });

        let toasts = self.toasts;
        let duration_ms = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(SHOW_DELAY_MS).await;
            set_visible(toasts, id, true);
            TimeoutFuture::new(duration_ms).await;
            set_visible(toasts, id, false);
            TimeoutFuture::new(FADE_OUT_MS).await;
            toasts.update(|t| t.retain(|x| x.id != id));
        });
    }
}

fn set_visible(toasts: RwSignal<Vec<Toast>>, id: u64, visible: bool) {
    toasts.update(|t| {
        if let Some(x) = t.iter_mut().find(|x| x.id == id) {
            x.visible = visible;
        }
    });
}

fn is_visible(toasts: &[Toast], id: u64) -> bool {
    toasts.iter().any(|x| x.id == id && x.visible)
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();
    let toasts = service.toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get()
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    let shown = move || toasts.with(|v| is_visible(v, id));
                    view! {
                        <div class="toast" class:show=shown>{t.text}</div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64, visible: bool) -> Toast {
        Toast {
            id,
            text: format!("t{id}"),
            visible,
        }
    }

    #[test]
    fn test_is_visible_follows_flag_of_same_toast() {
        let toasts = vec![toast(1, false), toast(2, true)];
        assert!(!is_visible(&toasts, 1));
        assert!(is_visible(&toasts, 2));
        assert!(!is_visible(&toasts, 3));
    }
}
