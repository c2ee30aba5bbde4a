use crate::shared::components::filter_bar::FilterBar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::select::same_value_options;
use crate::shared::components::ui::{Badge, Select};
use crate::shared::page_data::read_rows;
use contracts::domain::a002_adiantamento::{
    available_days, AdiantamentoFilter, CpfStatus, SolicitacaoAdiantamento,
};
use contracts::shared::pracas::directory;
use contracts::shared::text::or_dash;
use chrono::NaiveDate;
use leptos::prelude::*;

const ROWS_SCRIPT_ID: &str = "solicitacoes-data";

const MESES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro",
    "Outubro", "Novembro", "Dezembro",
];

fn month_options() -> Vec<(String, String)> {
    MESES
        .iter()
        .enumerate()
        .map(|(i, name)| ((i + 1).to_string(), name.to_string()))
        .collect()
}

fn day_options() -> Vec<(String, String)> {
    (1..=31).map(|d| (d.to_string(), format!("{d:02}"))).collect()
}

fn cpf_status_options() -> Vec<(String, String)> {
    CpfStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect()
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn parse_cpf_status(code: &str) -> Option<CpfStatus> {
    CpfStatus::all().into_iter().find(|s| s.code() == code)
}

/// Список заявок на аванс с фильтрами
#[component]
#[allow(non_snake_case)]
pub fn AdiantamentoList() -> impl IntoView {
    let items = RwSignal::new(read_rows::<SolicitacaoAdiantamento>(ROWS_SCRIPT_ID));
    let filter = RwSignal::new(AdiantamentoFilter::default());

    let visible = Memo::new(move |_| filter.with(|f| items.with(|rows| f.apply(rows))));
    let days = Memo::new(move |_| items.with(|rows| available_days(rows)));

    let active_filters_count = Signal::derive(move || {
        filter.with(|f| {
            [
                !f.term.trim().is_empty(),
                f.dia.is_some(),
                f.mes.is_some(),
                f.cpf_status.is_some(),
                !f.praca.is_empty(),
            ]
            .into_iter()
            .filter(|b| *b)
            .count()
        })
    });

    let filtrar_por_dia = move |dia: u32| filter.update(|f| *f = f.with_day(dia));

    view! {
        <div class="page">
            <PageHeader
                title="Solicitações de adiantamento"
                counter=Signal::derive(move || Some((visible.with(Vec::len), items.with(Vec::len))))
            />

            <FilterBar
                search=Signal::derive(move || filter.with(|f| f.term.clone()))
                on_search=Callback::new(move |v| filter.update(|f| f.term = v))
                active_filters_count=active_filters_count
                on_clear=Callback::new(move |_| filter.set(AdiantamentoFilter::default()))
            >
                <Select
                    id="filtroDia"
                    value=Signal::derive(move || filter.with(|f| f.dia.map(|d| d.to_string()).unwrap_or_default()))
                    options=day_options()
                    placeholder="Dia"
                    on_change=Callback::new(move |v: String| filter.update(|f| f.dia = v.parse().ok()))
                />
                <Select
                    id="filtroMes"
                    value=Signal::derive(move || filter.with(|f| f.mes.map(|m| m.to_string()).unwrap_or_default()))
                    options=month_options()
                    placeholder="Mês"
                    on_change=Callback::new(move |v: String| filter.update(|f| f.mes = v.parse().ok()))
                />
                <Select
                    id="filtroStatusCPF"
                    value=Signal::derive(move || filter.with(|f| f.cpf_status.map(|s| s.code().to_string()).unwrap_or_default()))
                    options=cpf_status_options()
                    placeholder="Status do CPF"
                    on_change=Callback::new(move |v: String| filter.update(|f| f.cpf_status = parse_cpf_status(&v)))
                />
                <Select
                    id="filtroPraca"
                    value=Signal::derive(move || filter.with(|f| f.praca.clone()))
                    options=same_value_options(directory().zones().iter().copied())
                    placeholder="Todas as praças"
                    on_change=Callback::new(move |v| filter.update(|f| f.praca = v))
                />
            </FilterBar>

            <div class="day-chips">
                <For
                    each=move || days.get()
                    key=|d| *d
                    children=move |d| {
                        let active = move || filter.with(|f| f.dia == Some(d));
                        view! {
                            <button
                                class="button button--chip"
                                class:button--chip-active=active
                                on:click=move |_| filtrar_por_dia(d)
                            >
                                {format!("{d:02}")}
                            </button>
                        }
                    }
                />
            </div>

            <div class="table">
                <table class="table__data table--striped" id="tabelaSolicitacoes">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Data"</th>
                            <th class="table__header-cell">"Nome"</th>
                            <th class="table__header-cell">"CPF"</th>
                            <th class="table__header-cell">"Praça"</th>
                            <th class="table__header-cell">"Status do CPF"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|s| s.id
                            children=move |s| {
                                let variant = match s.cpf_status {
                                    CpfStatus::Cadastrado => "success",
                                    CpfStatus::NaoCadastrado => "warning",
                                };
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{format_date(s.data_solicitacao)}</td>
                                        <td class="table__cell">{s.display_name()}</td>
                                        <td class="table__cell">{s.cpf.clone()}</td>
                                        <td class="table__cell">{or_dash(s.praca.as_deref())}</td>
                                        <td class="table__cell">
                                            <Badge variant=variant>{s.cpf_status.display_name()}</Badge>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || visible.with(Vec::is_empty)>
                    <p class="table__empty">"Nenhuma solicitação encontrada."</p>
                </Show>
            </div>
        </div>
    }
}
