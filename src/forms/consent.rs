//! LGPD consent term generation.
//!
//! The term itself is an HTML document; turning it into a PDF is the
//! job of whatever viewer opens it. The app only fills the template and
//! writes the file.

use std::path::PathBuf;

use thiserror::Error;

use crate::forms::cpf::validate_cpf;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsentForm {
    pub nome: String,
    pub cpf: String,
    pub data_nascimento: String,
    pub cep: String,
    pub endereco: String,
    pub numero: String,
    pub telefone: String,
    pub email: String,
    pub cep_valido: bool,
    pub aceite: bool,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConsentError {
    #[error("os termos da LGPD não foram aceitos")]
    NotAccepted,
    #[error("CPF inválido")]
    InvalidCpf,
    #[error("CEP inválido")]
    InvalidCep,
}

impl ConsentForm {
    /// The generate action is only enabled after the checkbox; CPF and
    /// CEP must both have validated.
    pub fn ready(&self) -> Result<(), ConsentError> {
        if !self.aceite {
            return Err(ConsentError::NotAccepted);
        }
        if !validate_cpf(&self.cpf) {
            return Err(ConsentError::InvalidCpf);
        }
        if !self.cep_valido {
            return Err(ConsentError::InvalidCep);
        }
        Ok(())
    }

    /// Where the generated term is written.
    pub fn output_path() -> PathBuf {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("eternum").join("termo_lgpd.html")
    }
}

/// Fills the consent-term template with the form data and today's date.
pub fn render_consent_html(form: &ConsentForm, today: chrono::NaiveDate) -> String {
    format!(
        r#"<html><body style="font-family:Arial;padding:40px;line-height:1.5">
  <h2 style="text-align:center">TERMO DE CONSENTIMENTO</h2>
  <h4 style="text-align:center">Lei Geral de Proteção de Dados - LGPD (Lei nº 13.709/2018)</h4>
  <p>Eu <strong>{nome}</strong>, pessoa física inscrita no CPF: {cpf}, nascido em {nascimento}, residente na {endereco}, nº {numero}. Contato: {telefone} / {email}.</p>
  <p>Declaro que li e compreendi os termos da LGPD e autorizo a coleta e o tratamento dos meus dados e dos meus entes queridos conforme descrito abaixo.</p>
  <h4>1. Finalidade</h4>
  <p>Autorizar a "MEMORIAL ETERNUM" reproduzir a Preservação da memória e história familiar; Criação de registros digitais memorialísticos; Consulta de dados genealógicos; Homenagem e pesquisa de ancestralidade.</p>
  <h4>2. Dados Coletados</h4>
  <p>Nome completo, RG, CPF, data de nascimento, endereço, telefone e e-mail.</p>
  <h4>3. Segurança</h4>
  <p>Dados armazenados em ambiente seguro e usados apenas para os fins aqui descritos.</p>
  <h4>4. Direitos do Usuário</h4>
  <p>Você poderá solicitar acesso, correção ou exclusão dos seus dados a qualquer momento.</p>
  <p style="margin-top:40px">Umuarama-PR, {data}</p>
  <div style="margin-top:80px; border-top:1px solid #000; width:100%">Assinatura digital</div>
</body></html>"#,
        nome = form.nome,
        cpf = form.cpf,
        nascimento = form.data_nascimento,
        endereco = form.endereco,
        numero = form.numero,
        telefone = form.telefone,
        email = form.email,
        data = today.format("%d/%m/%Y"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ConsentForm {
        ConsentForm {
            nome: "Maria da Silva".into(),
            cpf: "111.444.777-35".into(),
            data_nascimento: "01/01/1960".into(),
            cep: "87501-123".into(),
            endereco: "Rua das Flores, Centro, Umuarama - PR".into(),
            numero: "120".into(),
            telefone: "(44) 9 8837-8222".into(),
            email: "maria@example.com".into(),
            cep_valido: true,
            aceite: true,
        }
    }

    #[test]
    fn ready_requires_everything() {
        assert_eq!(valid_form().ready(), Ok(()));

        let mut f = valid_form();
        f.aceite = false;
        assert_eq!(f.ready(), Err(ConsentError::NotAccepted));

        let mut f = valid_form();
        f.cpf = "111.111.111-11".into();
        assert_eq!(f.ready(), Err(ConsentError::InvalidCpf));

        let mut f = valid_form();
        f.cep_valido = false;
        assert_eq!(f.ready(), Err(ConsentError::InvalidCep));
    }

    #[test]
    fn html_carries_the_form_fields() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let html = render_consent_html(&valid_form(), date);
        assert!(html.contains("Maria da Silva"));
        assert!(html.contains("111.444.777-35"));
        assert!(html.contains("14/03/2025"));
        assert!(html.contains("TERMO DE CONSENTIMENTO"));
    }
}
