use super::view_model::EntregadorEditViewModel;
use crate::shared::components::pix_key_input::PixKeyInput;
use crate::shared::components::praca_select::PracaSelect;
use crate::shared::components::ui::Select;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::toast::use_toast;
use contracts::domain::a001_entregador::{Entregador, EntregadorDto, EntregadorStatus};
use contracts::shared::pix_key::PixKeyType;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn status_options() -> Vec<(String, String)> {
    EntregadorStatus::all()
        .into_iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect()
}

fn key_type_options() -> Vec<(String, String)> {
    PixKeyType::all_selectable()
        .into_iter()
        .map(|t| (t.code().to_string(), t.display_name().to_string()))
        .collect()
}

#[component]
pub fn EntregadorEditForm(
    entregador: Entregador,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let toast = use_toast();
    let vm = EntregadorEditViewModel::new(&entregador);

    let api_base = StoredValue::new(config.api_base.clone());
    let reload_delay_ms = config.reload_delay_ms;

    let text_field = move |label: &'static str,
                           id: &'static str,
                           get: fn(&EntregadorDto) -> String,
                           set: fn(&mut EntregadorDto, String)| {
        view! {
            <div class="form__group">
                <label class="form__label" for=id>{label}</label>
                <input
                    type="text"
                    id=id
                    class="form__input"
                    prop:value=move || vm.form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form.update(|f| set(f, value));
                    }
                />
            </div>
        }
    };

    view! {
        <div class="details-container entregador-edit">
            <div class="details-header">
                <h3>"Editar entregador"</h3>
            </div>

            {move || {
                vm.error
                    .get()
                    .or_else(|| vm.validation_error.get())
                    .map(|e| view! { <div class="error">{e}</div> })
            }}

            <div class="details-form">
                {text_field("Nome", "editNome", |f| f.recebedor.clone(), |f, v| f.recebedor = v)}
                {text_field("E-mail", "editEmail", |f| f.email.clone(), |f, v| f.email = v)}
                {text_field("CPF", "editCpf", |f| f.cpf.clone(), |f, v| f.cpf = v)}
                {text_field("CNPJ", "editCnpj", |f| f.cnpj.clone(), |f, v| f.cnpj = v)}

                <PracaSelect
                    praca=Signal::derive(move || vm.form.with(|f| f.praca.clone()))
                    on_praca_change=Callback::new(move |v| vm.set_praca(v))
                    subpraca=Signal::derive(move || vm.form.with(|f| f.subpraca.clone()))
                    on_subpraca_change=Callback::new(move |v| vm.form.update(|f| f.subpraca = v))
                />

                <Select
                    label="Status"
                    id="editStatus"
                    value=Signal::derive(move || vm.form.with(|f| f.status.as_str().to_string()))
                    options=status_options()
                    on_change=Callback::new(move |v: String| {
                        let status = EntregadorStatus::parse(&v).unwrap_or_default();
                        vm.form.update(|f| f.status = status);
                    })
                />

                <Select
                    label="Tipo de chave Pix"
                    id="editTipoPix"
                    value=Signal::derive(move || vm.form.with(|f| f.tipo_de_chave_pix.clone()))
                    options=key_type_options()
                    placeholder="Automático"
                    on_change=Callback::new(move |v| vm.form.update(|f| f.tipo_de_chave_pix = v))
                />

                <PixKeyInput
                    id="editChavePix"
                    value=Signal::derive(move || vm.form.with(|f| f.chave_pix.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.chave_pix = v))
                />
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| {
                        vm.save_command(api_base.get_value(), toast, reload_delay_ms, on_saved)
                    }
                    disabled=move || vm.saving.get() || !vm.is_form_valid()
                >
                    {icon("save")}
                    {move || if vm.saving.get() { "Salvando..." } else { "Salvar" }}
                </button>
                <button
                    class="button button--danger"
                    on:click=move |_| vm.delete_command(&api_base.get_value(), on_cancel)
                >
                    {icon("delete")}
                    "Excluir"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}

/// Hosts the edit modal for whichever delivery worker is in `editing`.
///
/// Closing starts the fade-out; the form is removed once the fade has finished.
/// Escape closes as well.
#[component]
pub fn EditModalHost(
    editing: RwSignal<Option<Entregador>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let fade_ms = config.modal_fade_ms;
    let closing = RwSignal::new(false);

    let close = Callback::new(move |_: ()| {
        if closing.get_untracked() || editing.with_untracked(Option::is_none) {
            return;
        }
        closing.set(true);
        spawn_local(async move {
            TimeoutFuture::new(fade_ms).await;
            editing.try_set(None);
            closing.try_set(false);
        });
    });

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let handle_saved = Callback::new(move |_: ()| {
        close.run(());
        on_saved.run(());
    });

    view! {
        {move || editing.get().map(|entregador| view! {
            <ModalFrame on_close=close closing=closing>
                <EntregadorEditForm
                    entregador=entregador
                    on_saved=handle_saved
                    on_cancel=close
                />
            </ModalFrame>
        })}
    }
}
