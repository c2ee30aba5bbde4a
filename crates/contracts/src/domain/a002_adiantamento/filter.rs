use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::aggregate::{CpfStatus, SolicitacaoAdiantamento};

/// Фильтр списка заявок на аванс
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AdiantamentoFilter {
    /// Подстрока в имени, CPF или praça, без учёта регистра
    pub term: String,
    /// День месяца; None = любой
    pub dia: Option<u32>,
    /// Номер месяца (1..=12); None = любой
    pub mes: Option<u32>,
    pub cpf_status: Option<CpfStatus>,
    /// Точное совпадение praça без учёта регистра; пусто = любая
    pub praca: String,
}

impl AdiantamentoFilter {
    /// Быстрый фильтр по клику на день
    pub fn with_day(&self, dia: u32) -> Self {
        Self {
            dia: Some(dia),
            ..self.clone()
        }
    }

    pub fn matches(&self, s: &SolicitacaoAdiantamento) -> bool {
        let term = self.term.trim().to_lowercase();
        let praca = s.praca.as_deref().unwrap_or_default().to_lowercase();

        let match_term = term.is_empty()
            || s.nome.to_lowercase().contains(&term)
            || s.cpf_digits().contains(&term)
            || s.cpf.contains(&term)
            || praca.contains(&term);
        let match_dia = self.dia.map_or(true, |d| s.day() == d);
        let match_mes = self.mes.map_or(true, |m| s.month() == m);
        let match_status = self.cpf_status.map_or(true, |st| s.cpf_status == st);
        let match_praca = self.praca.is_empty() || praca == self.praca.to_lowercase();

        match_term && match_dia && match_mes && match_status && match_praca
    }

    pub fn apply(&self, items: &[SolicitacaoAdiantamento]) -> Vec<SolicitacaoAdiantamento> {
        items.iter().filter(|s| self.matches(s)).cloned().collect()
    }
}

/// Дни, в которые есть заявки (для кнопок быстрого фильтра), по возрастанию
pub fn available_days(items: &[SolicitacaoAdiantamento]) -> Vec<u32> {
    items
        .iter()
        .map(SolicitacaoAdiantamento::day)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(id: i64, nome: &str, cpf: &str, praca: &str, date: (i32, u32, u32), st: CpfStatus) -> SolicitacaoAdiantamento {
        SolicitacaoAdiantamento {
            id,
            nome: nome.into(),
            cpf: cpf.into(),
            praca: Some(praca.into()),
            data_solicitacao: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            cpf_status: st,
        }
    }

    fn items() -> Vec<SolicitacaoAdiantamento> {
        vec![
            item(1, "Carlos Lima", "123.456.789-09", "Rio Barra", (2025, 3, 5), CpfStatus::Cadastrado),
            item(2, "Bruna Reis", "98765432100", "Rio Madureira", (2025, 3, 12), CpfStatus::NaoCadastrado),
            item(3, "Diego Alves", "11122233344", "Rio Barra", (2025, 4, 5), CpfStatus::NaoCadastrado),
        ]
    }

    fn ids(v: Vec<SolicitacaoAdiantamento>) -> Vec<i64> {
        v.into_iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_term_matches_formatted_and_clean_cpf() {
        let f = AdiantamentoFilter {
            term: "456789".into(),
            ..Default::default()
        };
        assert_eq!(ids(f.apply(&items())), vec![1]);

        let f = AdiantamentoFilter {
            term: "456.789".into(),
            ..Default::default()
        };
        assert_eq!(ids(f.apply(&items())), vec![1]);
    }

    #[test]
    fn test_day_and_month() {
        let f = AdiantamentoFilter::default().with_day(5);
        assert_eq!(ids(f.apply(&items())), vec![1, 3]);

        let f = AdiantamentoFilter {
            mes: Some(4),
            ..Default::default()
        }
        .with_day(5);
        assert_eq!(ids(f.apply(&items())), vec![3]);
    }

    #[test]
    fn test_status_and_praca() {
        let f = AdiantamentoFilter {
            cpf_status: Some(CpfStatus::NaoCadastrado),
            praca: "RIO BARRA".into(),
            ..Default::default()
        };
        assert_eq!(ids(f.apply(&items())), vec![3]);
    }

    #[test]
    fn test_available_days() {
        assert_eq!(available_days(&items()), vec![5, 12]);
        assert!(available_days(&[]).is_empty());
    }

    #[test]
    fn test_deserialize_row() {
        let s: SolicitacaoAdiantamento = serde_json::from_str(
            r#"{"id": 7, "nome": "ANA", "cpf": "1", "data_solicitacao": "2025-01-31", "cpf_status": "cadastrado"}"#,
        )
        .unwrap();
        assert_eq!(s.day(), 31);
        assert_eq!(s.month(), 1);
        assert_eq!(s.cpf_status, CpfStatus::Cadastrado);
        assert_eq!(s.praca, None);
    }
}
