use contracts::domain::a001_entregador::EntregadorStatus;
use contracts::shared::pix_key::PixKeyType;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Ativo / Inativo
#[component]
pub fn StatusBadge(status: EntregadorStatus) -> impl IntoView {
    let variant = match status {
        EntregadorStatus::Ativo => "success",
        EntregadorStatus::Inativo => "neutral",
    };

    view! { <Badge variant=variant>{status.as_str()}</Badge> }
}

/// Pix key type; unknown keys are flagged
#[component]
pub fn PixKeyBadge(key_type: PixKeyType) -> impl IntoView {
    let variant = if key_type.is_known() { "primary" } else { "warning" };

    view! { <Badge variant=variant>{key_type.display_name()}</Badge> }
}
