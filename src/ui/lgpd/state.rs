use crate::forms::ConsentForm;
use crate::ui::mvi::UiState;

/// Focus order on the form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LgpdField {
    #[default]
    Nome,
    Cpf,
    Nascimento,
    Cep,
    Endereco,
    Numero,
    Telefone,
    Email,
    Aceite,
    Gerar,
    Voltar,
}

pub const LGPD_FIELDS: [LgpdField; 11] = [
    LgpdField::Nome,
    LgpdField::Cpf,
    LgpdField::Nascimento,
    LgpdField::Cep,
    LgpdField::Endereco,
    LgpdField::Numero,
    LgpdField::Telefone,
    LgpdField::Email,
    LgpdField::Aceite,
    LgpdField::Gerar,
    LgpdField::Voltar,
];

impl LgpdField {
    pub fn label(self) -> &'static str {
        match self {
            LgpdField::Nome => "Nome completo",
            LgpdField::Cpf => "CPF",
            LgpdField::Nascimento => "Data de Nascimento",
            LgpdField::Cep => "CEP",
            LgpdField::Endereco => "Endereço",
            LgpdField::Numero => "Número da residência",
            LgpdField::Telefone => "Telefone",
            LgpdField::Email => "E-mail",
            LgpdField::Aceite => "Li e aceito os termos da LGPD",
            LgpdField::Gerar => "Gerar termo de consentimento",
            LgpdField::Voltar => "Voltar para Contato",
        }
    }

    fn index(self) -> usize {
        LGPD_FIELDS.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        LGPD_FIELDS[(self.index() + 1) % LGPD_FIELDS.len()]
    }

    pub fn prev(self) -> Self {
        let i = self.index();
        LGPD_FIELDS[if i == 0 { LGPD_FIELDS.len() - 1 } else { i - 1 }]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LgpdState {
    pub form: ConsentForm,
    pub focused: LgpdField,
    pub cpf_valido: bool,
    /// Typing just completed the eighth CEP digit; the app layer takes
    /// this and starts the address lookup.
    pub cep_lookup: Option<String>,
    pub looking_up_cep: bool,
}

impl UiState for LgpdState {}
