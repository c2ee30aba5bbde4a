use crate::shared::api_utils::join_url;
use crate::shared::components::pix_key_input::PixKeyInput;
use crate::shared::components::praca_select::PracaSelect;
use crate::shared::components::ui::Select;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use contracts::shared::pix_key::{classify, PixKeyType};
use leptos::prelude::*;

const SUBMIT_PATH: &str = "/form-bancario/enviar";

/// Оценки 1..5 для поля `avaliacao`
fn rating_options() -> Vec<(String, String)> {
    (1..=5).map(|n| (n.to_string(), "★".repeat(n))).collect()
}

/// Причина, по которой форму нельзя отправить; `None` = можно
pub fn submit_block_reason(nome: &str, chave: &str) -> Option<&'static str> {
    if nome.trim().is_empty() || chave.trim().is_empty() {
        return Some("Preencha o nome e a chave Pix.");
    }
    if classify(chave.trim()) == PixKeyType::Cpf {
        return Some("CPF não pode ser usado como tipo de chave PIX. Por favor, selecione outro tipo.");
    }
    None
}

/// Публичная форма регистрации chave Pix.
///
/// Обычная HTML-форма: браузер сам отправляет поля на сервер,
/// тип ключа уходит в скрытом поле `tipo_chave_pix`.
#[component]
#[allow(non_snake_case)]
pub fn FormBancario() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let action = join_url(&config.api_base, SUBMIT_PATH);

    let nome = RwSignal::new(String::new());
    let praca = RwSignal::new(String::new());
    let chave = RwSignal::new(String::new());
    let avaliacao = RwSignal::new("5".to_string());

    let block_reason = Memo::new(move |_| {
        nome.with(|n| chave.with(|c| submit_block_reason(n, c)))
    });
    let cpf_warning = Memo::new(move |_| chave.with(|c| classify(c.trim()) == PixKeyType::Cpf));

    view! {
        <div class="page form-bancario">
            <h2>"Cadastro de chave Pix"</h2>
            <form method="post" action=action class="form">
                <div class="form__group">
                    <label class="form__label" for="nome">"Nome completo"</label>
                    <input
                        type="text"
                        id="nome"
                        name="nome"
                        class="form__input"
                        required
                        prop:value=move || nome.get()
                        on:input=move |ev| nome.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label" for="cpf">"CPF"</label>
                    <input type="text" id="cpf" name="cpf" class="form__input" inputmode="numeric" required />
                </div>
                <div class="form__group">
                    <label class="form__label" for="cnpj">"CNPJ"</label>
                    <input type="text" id="cnpj" name="cnpj" class="form__input" inputmode="numeric" />
                </div>

                <PracaSelect
                    praca=praca
                    on_praca_change=Callback::new(move |v| praca.set(v))
                    praca_name="praca"
                />

                <PixKeyInput
                    value=chave
                    on_input=Callback::new(move |v| chave.set(v))
                    name="chave_pix"
                    type_field_name="tipo_chave_pix"
                />
                <Show when=move || cpf_warning.get()>
                    <div class="warning">
                        "CPF não pode ser usado como tipo de chave PIX. Por favor, selecione outro tipo."
                    </div>
                </Show>

                <Select
                    label="Como você avalia o processo?"
                    id="avaliacao"
                    name="avaliacao"
                    value=avaliacao
                    options=rating_options()
                    on_change=Callback::new(move |v| avaliacao.set(v))
                />

                <button
                    type="submit"
                    class="button button--primary"
                    disabled=move || block_reason.get().is_some()
                    title=move || block_reason.get().unwrap_or_default()
                >
                    {icon("send")}
                    "Enviar"
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_blocked_for_cpf_key() {
        let reason = submit_block_reason("Maria", "123.456.789-09").unwrap();
        assert!(reason.starts_with("CPF não pode"));
    }

    #[test]
    fn test_submit_requires_name_and_key() {
        assert!(submit_block_reason("", "maria@example.com").is_some());
        assert!(submit_block_reason("Maria", "  ").is_some());
        assert_eq!(submit_block_reason("Maria", "maria@example.com"), None);
        assert_eq!(submit_block_reason("Maria", "12.345.678/0001-90"), None);
    }

    #[test]
    fn test_rating_options() {
        let opts = rating_options();
        assert_eq!(opts.len(), 5);
        assert_eq!(opts[2], ("3".to_string(), "★★★".to_string()));
    }
}
