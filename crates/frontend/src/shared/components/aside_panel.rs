use crate::shared::icons::icon;
use leptos::prelude::*;

/// Side panel (aside) sliding in from the right
#[component]
pub fn AsidePanel(
    #[prop(into)]
    open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)]
    title: String,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <aside class="aside-detalhes" class:ativo=move || open.get()>
            <div class="aside-header">
                <h2>{title}</h2>
                <button class="button button--icon" on:click=move |_| on_close.run(())>
                    {icon("x")}
                </button>
            </div>
            <div class="aside-body">
                <Show when=move || open.get()>
                    {children()}
                </Show>
            </div>
        </aside>
    }
}
