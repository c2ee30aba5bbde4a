use crate::domain::a001_entregador::ui::details::EntregadorDetails;
use crate::domain::a001_entregador::ui::edit::EditModalHost;
use crate::shared::api_utils::{navigate_to, viewport_width};
use crate::shared::components::aside_panel::AsidePanel;
use crate::shared::components::filter_bar::FilterBar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::select::same_value_options;
use crate::shared::components::ui::{PixKeyBadge, Select, StatusBadge};
use crate::shared::config::AppConfig;
use crate::shared::page_data::read_rows;
use contracts::domain::a001_entregador::{Entregador, EntregadorFilter, EntregadorStatus};
use contracts::shared::pracas::directory;
use contracts::shared::text::or_dash;
use leptos::prelude::*;

/// Id of the JSON block the server page embeds the rows in
const ROWS_SCRIPT_ID: &str = "entregadores-data";

#[component]
#[allow(non_snake_case)]
pub fn EntregadorList() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let breakpoint = config.clone();

    let items = RwSignal::new(read_rows::<Entregador>(ROWS_SCRIPT_ID));
    let filter = RwSignal::new(EntregadorFilter::default());
    let selected_id = RwSignal::new(None::<String>);
    let editing = RwSignal::new(None::<Entregador>);

    let visible = Memo::new(move |_| filter.with(|f| items.with(|rows| f.apply(rows))));

    let active_filters_count = Signal::derive(move || {
        filter.with(|f| {
            [!f.term.trim().is_empty(), !f.praca.is_empty(), !f.status.is_empty()]
                .into_iter()
                .filter(|b| *b)
                .count()
        })
    });

    // Narrow screens get the full details page, wide screens the side panel
    let open_details = move |id: String| {
        let width = viewport_width().unwrap_or(f64::MAX);
        if breakpoint.is_mobile_width(width) {
            navigate_to(&format!("/entregador/{}/detalhes", urlencoding::encode(&id)));
        } else {
            selected_id.set(Some(id));
        }
    };

    let close_aside = Callback::new(move |_: ()| selected_id.set(None));

    let status_options = same_value_options(EntregadorStatus::all().iter().map(|s| s.as_str()));
    let praca_options = same_value_options(directory().zones().iter().copied());

    view! {
        <div class="page">
            <PageHeader
                title="Entregadores"
                counter=Signal::derive(move || Some((visible.with(Vec::len), items.with(Vec::len))))
            />

            <FilterBar
                search=Signal::derive(move || filter.with(|f| f.term.clone()))
                on_search=Callback::new(move |v| filter.update(|f| f.term = v))
                active_filters_count=active_filters_count
                on_clear=Callback::new(move |_| filter.set(EntregadorFilter::default()))
            >
                <Select
                    id="filtroPraca"
                    value=Signal::derive(move || filter.with(|f| f.praca.clone()))
                    options=praca_options
                    placeholder="Todas as praças"
                    on_change=Callback::new(move |v| filter.update(|f| f.praca = v))
                />
                <Select
                    id="filtroStatus"
                    value=Signal::derive(move || filter.with(|f| f.status.clone()))
                    options=status_options
                    placeholder="Todos os status"
                    on_change=Callback::new(move |v| filter.update(|f| f.status = v))
                />
            </FilterBar>

            <div class="table">
                <table class="table__data table--striped" id="tabelaEntregadores">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nome"</th>
                            <th class="table__header-cell">"CPF"</th>
                            <th class="table__header-cell">"Praça"</th>
                            <th class="table__header-cell">"Sub-Praça"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Pix"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|e| e.id_da_pessoa_entregadora.clone()
                            children=move |e| {
                                let id = e.id_da_pessoa_entregadora.clone();
                                let is_selected = {
                                    let id = id.clone();
                                    move || selected_id.with(|s| s.as_deref() == Some(id.as_str()))
                                };
                                let open_details = open_details.clone();
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--selected=is_selected
                                        on:click=move |_| open_details(id.clone())
                                    >
                                        <td class="table__cell">{e.display_name()}</td>
                                        <td class="table__cell">{or_dash(e.cpf.as_deref())}</td>
                                        <td class="table__cell">{or_dash(e.praca.as_deref())}</td>
                                        <td class="table__cell">{or_dash(e.subpraca.as_deref())}</td>
                                        <td class="table__cell"><StatusBadge status=e.status() /></td>
                                        <td class="table__cell"><PixKeyBadge key_type=e.pix_key_type() /></td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || visible.with(Vec::is_empty)>
                    <p class="table__empty">"Nenhum entregador encontrado."</p>
                </Show>
            </div>

            <AsidePanel
                open=Signal::derive(move || selected_id.with(Option::is_some))
                on_close=close_aside
                title="Detalhes do entregador"
            >
                {move || selected_id.get().map(|id| view! {
                    <EntregadorDetails
                        id=id
                        on_edit=Callback::new(move |e| editing.set(Some(e)))
                    />
                })}
            </AsidePanel>

            <EditModalHost editing=editing on_saved=close_aside />
        </div>
    }
}
