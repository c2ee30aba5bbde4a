use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Modal frame container (overlay + positioned surface).
///
/// Closes when the mouse is pressed outside the surface. While `closing` is true the
/// surface carries the `fadeOut` class; the host removes the frame after the fade.
#[component]
pub fn ModalFrame(
    /// Called when the modal should close (outside press, Escape handled by host).
    on_close: Callback<()>,
    /// Fade-out in progress
    #[prop(into)]
    closing: Signal<bool>,
    /// Extra class for the modal surface (`div.modal-content`).
    #[prop(optional)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        if is_direct_overlay_event(&ev) && !closing.get_untracked() {
            // Defer close to next tick: the overlay may be removed during its own dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = move || {
        let extra = modal_class.clone().unwrap_or_default();
        format!("modal-content {extra}")
    };

    view! {
        <div
            class="modal ativo"
            class:fadeOut=move || closing.get()
            on:mousedown=handle_overlay_mouse_down
        >
            <div class=surface_class>
                {children()}
            </div>
        </div>
    }
}
