use crate::domain::a001_entregador::ui::details::model;
use crate::shared::api_utils::{confirm, entregador_delete_url, navigate_to, reload_page};
use crate::shared::toast::ToastService;
use contracts::domain::a001_entregador::{Entregador, EntregadorDto};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// ViewModel for the edit form
#[derive(Clone, Copy)]
pub struct EntregadorEditViewModel {
    pub form: RwSignal<EntregadorDto>,
    /// Form as loaded, to tell edited documents from untouched ones
    pub loaded: StoredValue<EntregadorDto>,
    /// Current validation message, recomputed on every change
    pub validation_error: Memo<Option<String>>,
    /// Backend / connection error of the last save
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl EntregadorEditViewModel {
    pub fn new(entregador: &Entregador) -> Self {
        let dto = EntregadorDto::from_entregador(entregador);
        let form = RwSignal::new(dto.clone());
        let loaded = StoredValue::new(dto);
        let validation_error = Memo::new(move |_| {
            loaded.with_value(|l| form.with(|f| f.validate(l).err()))
        });

        Self {
            form,
            loaded,
            validation_error,
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_form_valid(&self) -> bool {
        self.validation_error.with(Option::is_none)
    }

    pub fn set_praca(&self, praca: String) {
        self.form.update(|f| f.set_praca(praca));
    }

    /// Save form data to server.
    ///
    /// Success: toast, `on_saved`, then a page reload after `reload_delay_ms`.
    /// Backend refusal: toast with its message. Network failure: toast and console log.
    pub fn save_command(
        &self,
        api_base: String,
        toast: ToastService,
        reload_delay_ms: u32,
        on_saved: Callback<()>,
    ) {
        let current = self.form.get_untracked();

        if let Err(e) = self.loaded.with_value(|l| current.validate(l)) {
            self.error.set(Some(e));
            return;
        }
        self.error.set(None);

        let payload = current.prepared();
        let saving = self.saving;
        saving.set(true);
        log::debug!("Salvando entregador {}", payload.id);

        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&api_base, &payload).await {
                Ok(resp) if resp.success => {
                    saving.try_set(false);
                    toast.show("✅ Alterações salvas!");
                    on_saved.run(());
                    TimeoutFuture::new(reload_delay_ms).await;
                    reload_page();
                }
                Ok(resp) => {
                    saving.try_set(false);
                    toast.show(format!("❌ Erro ao salvar: {}", resp.failure_message()));
                }
                Err(e) => {
                    saving.try_set(false);
                    toast.show("❌ Falha de conexão.");
                    log::error!("Erro completo: {}", e);
                }
            }
        });
    }

    /// Ask for confirmation, close the form and hand deletion over to the server page
    pub fn delete_command(&self, api_base: &str, on_close: Callback<()>) {
        let (id, nome) = self
            .form
            .with_untracked(|f| (f.id.clone(), f.recebedor.clone()));
        let message = format!(
            "Tem certeza que deseja excluir o entregador \"{}\"?\n\nEsta ação não pode ser desfeita!",
            nome
        );
        if confirm(&message) {
            log::info!("Excluindo entregador {}", id);
            on_close.run(());
            navigate_to(&entregador_delete_url(api_base, &id));
        }
    }
}
