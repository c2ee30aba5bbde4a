use super::view::EntregadorDetails;
use crate::domain::a001_entregador::ui::edit::EditModalHost;
use contracts::domain::a001_entregador::Entregador;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Full-page details for narrow screens (`/entregador/:id/detalhes`)
#[component]
pub fn EntregadorDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let editing = RwSignal::new(None::<Entregador>);

    view! {
        <div class="page page--details">
            <a class="button button--secondary" href="/entregadores">"← Voltar"</a>
            {move || match params.read().get("id") {
                Some(id) => view! {
                    <EntregadorDetails
                        id=id
                        on_edit=Callback::new(move |e| editing.set(Some(e)))
                    />
                }.into_any(),
                None => view! { <p class="error">"Entregador não informado."</p> }.into_any(),
            }}
            <EditModalHost editing=editing on_saved=Callback::new(|_| ()) />
        </div>
    }
}
