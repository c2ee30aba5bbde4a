use crate::domain::a001_entregador::ui::details::EntregadorDetailsPage;
use crate::domain::a001_entregador::ui::list::EntregadorList;
use crate::domain::a002_adiantamento::ui::list::AdiantamentoList;
use crate::shared::config::AppConfig;
use crate::shared::toast::{ToastHost, ToastService};
use crate::usecases::u001_form_bancario::FormBancario;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::debug!("app config: {:?}", config);

    provide_context(ToastService::new(config.toast_ms));
    provide_context(config);

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="page">"Página não encontrada."</p> }>
                    <Route path=path!("/") view=EntregadorList />
                    <Route path=path!("/entregadores") view=EntregadorList />
                    <Route path=path!("/entregador/:id/detalhes") view=EntregadorDetailsPage />
                    <Route path=path!("/adiantamento") view=AdiantamentoList />
                    <Route path=path!("/form-bancario") view=FormBancario />
                </Routes>
            </main>
            <ToastHost />
        </Router>
    }
}
