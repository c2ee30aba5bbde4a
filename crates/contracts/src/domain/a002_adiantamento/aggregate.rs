use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::shared::text::{format_person_name, normalize_cpf};

/// Статус CPF заявки: найден ли entregador с таким CPF в базе
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CpfStatus {
    Cadastrado,
    #[default]
    NaoCadastrado,
}

impl CpfStatus {
    pub fn code(&self) -> &'static str {
        match self {
            CpfStatus::Cadastrado => "cadastrado",
            CpfStatus::NaoCadastrado => "nao_cadastrado",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CpfStatus::Cadastrado => "Cadastrado",
            CpfStatus::NaoCadastrado => "Não cadastrado",
        }
    }

    pub fn all() -> Vec<CpfStatus> {
        vec![CpfStatus::Cadastrado, CpfStatus::NaoCadastrado]
    }
}

/// Заявка на аванс (adiantamento)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolicitacaoAdiantamento {
    pub id: i64,
    pub nome: String,
    pub cpf: String,
    #[serde(default)]
    pub praca: Option<String>,
    pub data_solicitacao: NaiveDate,
    #[serde(default)]
    pub cpf_status: CpfStatus,
}

impl SolicitacaoAdiantamento {
    pub fn display_name(&self) -> String {
        format_person_name(&self.nome)
    }

    pub fn cpf_digits(&self) -> String {
        normalize_cpf(&self.cpf)
    }

    pub fn day(&self) -> u32 {
        self.data_solicitacao.day()
    }

    pub fn month(&self) -> u32 {
        self.data_solicitacao.month()
    }
}
