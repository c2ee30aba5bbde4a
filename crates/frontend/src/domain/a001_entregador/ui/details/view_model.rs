use super::model;
use contracts::domain::a001_entregador::Entregador;
use contracts::shared::text::or_dash;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum DetailsState {
    Loading,
    Loaded(Entregador),
    Failed(String),
}

/// ViewModel for the details panel
#[derive(Clone, Copy)]
pub struct EntregadorDetailsViewModel {
    pub state: RwSignal<DetailsState>,
}

impl EntregadorDetailsViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(DetailsState::Loading),
        }
    }

    /// Fire-once load: no retry, errors go to the console and to the panel
    pub fn load(&self, api_base: String, id: String) {
        let state = self.state;
        state.set(DetailsState::Loading);
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(&api_base, &id).await {
                Ok(entregador) => state.set(DetailsState::Loaded(entregador)),
                Err(e) => {
                    log::error!("Erro ao carregar detalhes de {}: {}", id, e);
                    state.set(DetailsState::Failed(e));
                }
            }
        });
    }
}

impl Default for EntregadorDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Label/value pairs shown in the panel
pub fn detail_items(e: &Entregador) -> Vec<(&'static str, String)> {
    vec![
        ("Nome", or_dash(Some(e.display_name().as_str()))),
        ("E-mail", or_dash(e.email.as_deref())),
        ("CPF", or_dash(e.cpf.as_deref())),
        ("CNPJ", or_dash(e.cnpj.as_deref())),
        ("Praça", or_dash(e.praca.as_deref())),
        ("Sub-Praça", or_dash(e.subpraca.as_deref())),
        ("Status", or_dash(e.status.as_deref())),
        ("Emissor", or_dash(e.emissor.as_deref())),
        ("Pix", or_dash(e.chave_pix.as_deref())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_items_fill_missing_with_dash() {
        let e = Entregador {
            id_da_pessoa_entregadora: "7".into(),
            recebedor: Some("ana lima".into()),
            praca: Some("Rio Barra".into()),
            ..Default::default()
        };
        let items = detail_items(&e);
        assert_eq!(items.len(), 9);
        assert_eq!(items[0], ("Nome", "Ana Lima".to_string()));
        assert_eq!(items[1], ("E-mail", "—".to_string()));
        assert_eq!(items[4], ("Praça", "Rio Barra".to_string()));
        assert_eq!(items[8], ("Pix", "—".to_string()));
    }
}
