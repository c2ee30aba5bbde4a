//! Справочник praças (зон обслуживания) и subpraças (подзон).
//!
//! Единый источник истины для всего UI: список зон, подзоны каждой зоны
//! и словарь синонимов для нормализации названий. Строится один раз
//! при первом обращении и далее только читается.

use once_cell::sync::Lazy;
use std::collections::HashMap;

// ─── Данные ─────────────────────────────────────────────────────────────────

const SUBPRACAS_POR_PRACA: &[(&str, &[&str])] = &[
    (
        "Rio Barra",
        &["Barra Centro", "Recreio", "Taquara", "Jacarepaguá", "Freguesia"],
    ),
    (
        "Rio Zona Sul",
        &[
            "Centro ZS",
            "Ipanema",
            "Copacabana",
            "Botafogo",
            "Vila Isabel",
            "São Cristóvão",
        ],
    ),
    (
        "Rio Campo Grande & Santa Cruz",
        &["Centro CG", "Monteiro", "Santa Cruz"],
    ),
    (
        "Rio Madureira",
        &["Penha", "Irajá", "Rocha Miranda", "Realengo"],
    ),
];

/// Ключи в нижнем регистре, без пробелов по краям
const ALIASES: &[(&str, &str)] = &[
    ("rio barra", "Rio Barra"),
    ("barra", "Rio Barra"),
    ("rio zona sul", "Rio Zona Sul"),
    ("zona sul", "Rio Zona Sul"),
    ("rio campo grande", "Rio Campo Grande & Santa Cruz"),
    ("rio campo grande & santa cruz", "Rio Campo Grande & Santa Cruz"),
    ("campo grande", "Rio Campo Grande & Santa Cruz"),
    ("rio madureira", "Rio Madureira"),
    ("madureira", "Rio Madureira"),
];

// ─── Справочник ─────────────────────────────────────────────────────────────

pub struct PracaDirectory {
    zones: Vec<&'static str>,
    sub_zones: HashMap<&'static str, &'static [&'static str]>,
    aliases: HashMap<&'static str, &'static str>,
    /// Обратный индекс subpraça -> praça
    zone_by_sub_zone: HashMap<&'static str, &'static str>,
}

static DIRECTORY: Lazy<PracaDirectory> = Lazy::new(PracaDirectory::build);

/// Глобальный экземпляр справочника
pub fn directory() -> &'static PracaDirectory {
    &DIRECTORY
}

impl PracaDirectory {
    fn build() -> Self {
        let zones = SUBPRACAS_POR_PRACA.iter().map(|(zone, _)| *zone).collect();
        let sub_zones = SUBPRACAS_POR_PRACA.iter().copied().collect();
        let aliases = ALIASES.iter().copied().collect();
        let zone_by_sub_zone = SUBPRACAS_POR_PRACA
            .iter()
            .flat_map(|(zone, subs)| subs.iter().map(move |sub| (*sub, *zone)))
            .collect();

        Self {
            zones,
            sub_zones,
            aliases,
            zone_by_sub_zone,
        }
    }

    /// Все praças в порядке отображения
    pub fn zones(&self) -> &[&'static str] {
        &self.zones
    }

    /// Subpraças указанной praça. Для неизвестной praça возвращается пустой срез.
    /// Сравнение точное: для произвольного ввода сначала вызвать `normalize_zone`.
    pub fn sub_zones_of(&self, zone: &str) -> &'static [&'static str] {
        self.sub_zones.get(zone).copied().unwrap_or(&[])
    }

    /// Привести название praça к каноническому виду.
    ///
    /// Регистр и пробелы по краям игнорируются. Если синоним не найден,
    /// возвращается исходная строка без изменений.
    pub fn normalize_zone(&self, alias: &str) -> String {
        if alias.is_empty() {
            return String::new();
        }
        let key = alias.trim().to_lowercase();
        match self.aliases.get(key.as_str()) {
            Some(zone) => (*zone).to_string(),
            None => alias.to_string(),
        }
    }

    pub fn is_zone(&self, name: &str) -> bool {
        self.sub_zones.contains_key(name)
    }

    /// Praça, которой принадлежит subpraça
    pub fn zone_of_sub_zone(&self, sub_zone: &str) -> Option<&'static str> {
        self.zone_by_sub_zone.get(sub_zone).copied()
    }

    pub fn contains_sub_zone(&self, zone: &str, sub_zone: &str) -> bool {
        self.sub_zones_of(zone).contains(&sub_zone)
    }
}

/// Сокращение для `directory().sub_zones_of(zone)`
pub fn sub_zones_of(zone: &str) -> &'static [&'static str] {
    directory().sub_zones_of(zone)
}

/// Сокращение для `directory().normalize_zone(alias)`
pub fn normalize_zone(alias: &str) -> String {
    directory().normalize_zone(alias)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sub_zones_of_known_zone_keeps_order() {
        assert_eq!(
            sub_zones_of("Rio Barra"),
            &["Barra Centro", "Recreio", "Taquara", "Jacarepaguá", "Freguesia"]
        );
        assert_eq!(sub_zones_of("Rio Campo Grande & Santa Cruz").len(), 3);
    }

    #[test]
    fn test_sub_zones_of_unknown_zone_is_empty() {
        assert!(sub_zones_of("Nonexistent Zone").is_empty());
        assert!(sub_zones_of("").is_empty());
        // Без нормализации синоним не является praça
        assert!(sub_zones_of("barra").is_empty());
    }

    #[test]
    fn test_normalize_zone_aliases() {
        assert_eq!(normalize_zone("barra"), "Rio Barra");
        assert_eq!(normalize_zone("BARRA"), "Rio Barra");
        assert_eq!(normalize_zone("  Zona Sul "), "Rio Zona Sul");
        assert_eq!(normalize_zone("campo grande"), "Rio Campo Grande & Santa Cruz");
        assert_eq!(normalize_zone("Rio Madureira"), "Rio Madureira");
    }

    #[test]
    fn test_normalize_zone_pass_through() {
        assert_eq!(normalize_zone("Unknown Place"), "Unknown Place");
        assert_eq!(normalize_zone("  Niterói "), "  Niterói ");
        assert_eq!(normalize_zone(""), "");
    }

    #[test]
    fn test_normalize_zone_is_idempotent() {
        let samples = [
            "barra",
            "BARRA",
            " rio zona sul",
            "Rio Campo Grande",
            "madureira",
            "Unknown Place",
            "",
            "   ",
            "Rio Barra",
        ];
        for s in samples {
            let once = normalize_zone(s);
            assert_eq!(normalize_zone(&once), once, "input = {s:?}");
        }
    }

    #[test]
    fn test_every_alias_points_to_a_zone() {
        let dir = directory();
        for (alias, zone) in ALIASES {
            assert!(dir.is_zone(zone), "alias {alias} -> {zone}");
            assert_eq!(*alias, alias.trim().to_lowercase());
        }
        // Каждая praça распознаётся по собственному названию
        for zone in dir.zones() {
            assert_eq!(dir.normalize_zone(zone), *zone);
        }
    }

    #[test]
    fn test_sub_zones_do_not_overlap() {
        let mut seen = HashSet::new();
        for zone in directory().zones() {
            for sub in sub_zones_of(zone) {
                assert!(seen.insert(*sub), "duplicated sub-zone {sub}");
            }
        }
    }

    #[test]
    fn test_reverse_lookup() {
        let dir = directory();
        assert_eq!(dir.zone_of_sub_zone("Ipanema"), Some("Rio Zona Sul"));
        assert_eq!(dir.zone_of_sub_zone("Irajá"), Some("Rio Madureira"));
        assert_eq!(dir.zone_of_sub_zone("Ipanem"), None);
        assert!(dir.contains_sub_zone("Rio Barra", "Recreio"));
        assert!(!dir.contains_sub_zone("Rio Barra", "Ipanema"));
    }

    #[test]
    fn test_zones_order() {
        assert_eq!(
            directory().zones(),
            &[
                "Rio Barra",
                "Rio Zona Sul",
                "Rio Campo Grande & Santa Cruz",
                "Rio Madureira"
            ]
        );
    }
}
