use leptos::prelude::*;

/// PageHeader component - reusable header for list pages
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Shown rows / total rows, rendered as "N de M"
    #[prop(optional, into)]
    counter: MaybeProp<(usize, usize)>,

    /// Action buttons on the right
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <h1 class="page-header__title">{title}</h1>
                {move || counter.get().map(|(shown, total)| view! {
                    <div class="page-header__subtitle">{format!("{shown} de {total}")}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
