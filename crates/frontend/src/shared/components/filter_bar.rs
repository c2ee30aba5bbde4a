use crate::shared::icons::icon;
use leptos::prelude::*;

/// Filter bar above a list: search box, extra filter fields and an active-filter badge
#[component]
pub fn FilterBar(
    /// Search text
    #[prop(into)]
    search: Signal<String>,
    on_search: Callback<String>,
    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,
    on_clear: Callback<()>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Filter fields (selects)
    children: Children,
) -> impl IntoView {
    let placeholder = move || {
        placeholder
            .get()
            .unwrap_or_else(|| "Buscar por nome, CPF ou praça...".to_string())
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel__search">
                {icon("search")}
                <input
                    type="search"
                    class="form__input"
                    placeholder=placeholder
                    prop:value=move || search.get()
                    on:input=move |ev| on_search.run(event_target_value(&ev))
                />
            </div>
            <div class="filter-panel__fields">
                {children()}
            </div>
            {move || {
                let count = active_filters_count.get();
                (count > 0).then(|| view! {
                    <span class="badge badge--primary">{count}</span>
                    <button class="button button--secondary" on:click=move |_| on_clear.run(())>
                        "Limpar filtros"
                    </button>
                })
            }}
        </div>
    }
}
