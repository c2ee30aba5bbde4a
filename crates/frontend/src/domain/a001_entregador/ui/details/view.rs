use super::view_model::{detail_items, DetailsState, EntregadorDetailsViewModel};
use crate::shared::components::ui::{PixKeyBadge, StatusBadge};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use contracts::domain::a001_entregador::Entregador;
use leptos::prelude::*;

#[component]
pub fn EntregadorDetails(
    id: String,
    /// Open the edit form; not rendered when editing is disabled for the user
    on_edit: Callback<Entregador>,
) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let can_edit = config.can_edit;

    let vm = EntregadorDetailsViewModel::new();
    vm.load(config.api_base.clone(), id);

    view! {
        <div class="details-container">
            {move || match vm.state.get() {
                DetailsState::Loading => view! { <p>"Carregando..."</p> }.into_any(),
                DetailsState::Failed(_) => view! { <p class="error">"❌ Erro ao carregar dados."</p> }.into_any(),
                DetailsState::Loaded(e) => {
                    let items = detail_items(&e);
                    let status = e.status();
                    let key_type = e.pix_key_type();
                    view! {
                        <div class="details-grid">
                            {items.into_iter().map(|(label, value)| view! {
                                <div class="info-item">
                                    <span class="label">{label}</span>
                                    <span class="valor">{value}</span>
                                </div>
                            }).collect_view()}
                        </div>
                        <div class="details-badges">
                            <StatusBadge status=status />
                            <PixKeyBadge key_type=key_type />
                        </div>
                        {can_edit.then(move || view! {
                            <div class="details-actions">
                                <button
                                    class="button button--primary"
                                    on:click=move |_| on_edit.run(e.clone())
                                >
                                    {icon("edit")}
                                    "Editar"
                                </button>
                            </div>
                        })}
                    }.into_any()
                }
            }}
        </div>
    }
}
