use contracts::shared::pix_key::{classify, PixKeyType};
use leptos::prelude::*;

const COLOR_DETECTED: &str = "#2563eb";
const COLOR_UNKNOWN: &str = "#b91c1c";

/// Text of the detection label under the key input
pub fn detection_label(key_type: PixKeyType) -> String {
    if key_type.is_known() {
        format!("Tipo detectado: {}", key_type.code())
    } else {
        "Tipo não reconhecido".to_string()
    }
}

/// Pix key input that re-classifies the key on every keystroke.
///
/// The detected code is mirrored into a hidden input (`type_field_name`) so a plain
/// HTML form posts it together with the key.
#[component]
pub fn PixKeyInput(
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    /// Called with the detected type after each change
    #[prop(optional)]
    on_detect: Option<Callback<PixKeyType>>,
    /// Form field name of the key
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// Form field name of the hidden detected-type input
    #[prop(optional, into)]
    type_field_name: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let detected = Memo::new(move |_| classify(value.get().trim()));
    let input_id = move || id.get().unwrap_or_else(|| "chave_pix".to_string());

    let handle_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        on_input.run(raw.clone());
        if let Some(cb) = on_detect {
            cb.run(classify(raw.trim()));
        }
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=input_id>"Chave Pix"</label>
            <input
                type="text"
                id=input_id
                class="form__input"
                name=move || name.get().unwrap_or_default()
                autocomplete="off"
                prop:value=move || value.get()
                on:input=handle_input
            />
            {move || type_field_name.get().map(|n| view! {
                <input type="hidden" name=n prop:value=move || detected.get().code() />
            })}
            <small
                class="tipo-detectado"
                style=move || {
                    let color = if detected.get().is_known() { COLOR_DETECTED } else { COLOR_UNKNOWN };
                    format!("color: {color};")
                }
            >
                {move || {
                    let t = detected.get();
                    if t.is_known() {
                        view! { "Tipo detectado: " <strong>{t.code()}</strong> }.into_any()
                    } else {
                        view! { {detection_label(t)} }.into_any()
                    }
                }}
            </small>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_label() {
        assert_eq!(detection_label(classify("user@example.com")), "Tipo detectado: EMAIL");
        assert_eq!(detection_label(classify("(21) 3333-4444")), "Tipo detectado: TELEFONE");
        assert_eq!(detection_label(classify("")), "Tipo não reconhecido");
    }
}
