use serde::{Deserialize, Serialize};

use super::aggregate::Entregador;
use crate::shared::text::normalize_cpf;

/// Фильтр таблицы entregadores (выполняется на клиенте)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EntregadorFilter {
    /// Подстрока в имени, CPF или praça, без учёта регистра
    pub term: String,
    /// Точное совпадение praça без учёта регистра; пусто = любая
    pub praca: String,
    /// "Ativo" / "Inativo"; пусто = любой
    pub status: String,
}

impl EntregadorFilter {
    pub fn is_empty(&self) -> bool {
        self.term.trim().is_empty() && self.praca.is_empty() && self.status.is_empty()
    }

    pub fn matches(&self, e: &Entregador) -> bool {
        let term = self.term.trim().to_lowercase();
        let praca = e.praca.as_deref().unwrap_or_default().to_lowercase();
        let cpf = e.cpf.as_deref().unwrap_or_default();

        let match_term = term.is_empty()
            || e.display_name().to_lowercase().contains(&term)
            || cpf.contains(&term)
            || normalize_cpf(cpf).contains(&term)
            || praca.contains(&term);
        let match_praca = self.praca.is_empty() || praca == self.praca.to_lowercase();
        let match_status =
            self.status.is_empty() || e.status().as_str().eq_ignore_ascii_case(&self.status);

        match_term && match_praca && match_status
    }

    pub fn apply(&self, items: &[Entregador]) -> Vec<Entregador> {
        items.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}
