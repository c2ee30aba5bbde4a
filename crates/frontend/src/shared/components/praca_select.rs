//! Zone (praça) selector with a dependent sub-zone (subpraça) selector

use super::ui::select::{same_value_options, Select};
use contracts::shared::pracas::directory;
use leptos::prelude::*;

/// Sub-zone options for the chosen zone; empty for an unknown or empty zone
pub fn sub_zone_options(praca: &str) -> Vec<(String, String)> {
    same_value_options(directory().sub_zones_of(praca).iter().copied())
}

/// The sub-zone to keep after the zone changes
pub fn reconcile_sub_zone(praca: &str, subpraca: &str) -> String {
    if directory().contains_sub_zone(praca, subpraca) {
        subpraca.to_string()
    } else {
        String::new()
    }
}

#[component]
pub fn PracaSelect(
    #[prop(into)]
    praca: Signal<String>,
    on_praca_change: Callback<String>,
    /// Sub-zone value; omit to render only the zone selector
    #[prop(optional, into)]
    subpraca: MaybeProp<String>,
    #[prop(optional)]
    on_subpraca_change: Option<Callback<String>>,
    /// Form field names for plain HTML forms
    #[prop(optional, into)]
    praca_name: MaybeProp<String>,
    #[prop(optional, into)]
    subpraca_name: MaybeProp<String>,
) -> impl IntoView {
    let zone_options = same_value_options(directory().zones().iter().copied());
    let with_sub_zone = on_subpraca_change.is_some();

    // Changing the zone repopulates sub-zones and drops a selection that no longer belongs
    let handle_praca = Callback::new(move |value: String| {
        if let Some(cb) = on_subpraca_change {
            let current = subpraca.get_untracked().unwrap_or_default();
            let kept = reconcile_sub_zone(&value, &current);
            if kept != current {
                cb.run(kept);
            }
        }
        on_praca_change.run(value);
    });

    view! {
        <div class="praca-select">
            <Select
                label="Praça"
                id="praca"
                name=praca_name
                value=praca
                options=zone_options
                placeholder="Selecione a praça..."
                on_change=handle_praca
            />
            <Show when=move || with_sub_zone>
                <Select
                    label="Sub-Praça"
                    id="subpraca"
                    name=subpraca_name
                    value=Signal::derive(move || subpraca.get().unwrap_or_default())
                    options=Signal::derive(move || sub_zone_options(&praca.get()))
                    placeholder="Selecione a sub-praça..."
                    disabled=Signal::derive(move || praca.get().is_empty())
                    on_change=Callback::new(move |v: String| {
                        if let Some(cb) = on_subpraca_change {
                            cb.run(v);
                        }
                    })
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_zone_options_follow_zone() {
        let opts = sub_zone_options("Rio Madureira");
        assert_eq!(opts.len(), 4);
        assert_eq!(opts[0], ("Penha".to_string(), "Penha".to_string()));
        assert!(sub_zone_options("").is_empty());
        assert!(sub_zone_options("madureira").is_empty());
    }

    #[test]
    fn test_reconcile_sub_zone() {
        assert_eq!(reconcile_sub_zone("Rio Barra", "Taquara"), "Taquara");
        assert_eq!(reconcile_sub_zone("Rio Zona Sul", "Taquara"), "");
        assert_eq!(reconcile_sub_zone("", "Taquara"), "");
    }
}
