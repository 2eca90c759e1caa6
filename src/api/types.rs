use serde::{Deserialize, Deserializer};

/// Accepts a string or a bare number, normalized to `String`.
fn string_or_number<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        S(String),
        N(i64),
        F(f64),
    }
    Ok(Option::<Raw>::deserialize(de)?.map(|raw| match raw {
        Raw::S(s) => s,
        Raw::N(n) => n.to_string(),
        Raw::F(f) => f.to_string(),
    }))
}

/// One deceased entry as the service sends it — and, unchanged, as the
/// navigation param bag the screens pass around. Every field optional;
/// the PHP side omits what it does not know.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DeceasedFields {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub nasc: Option<String>,
    #[serde(default)]
    pub falec: Option<String>,
    #[serde(default)]
    pub pai: Option<String>,
    #[serde(default)]
    pub mae: Option<String>,
    #[serde(default)]
    pub localsep: Option<String>,
    #[serde(default)]
    pub historia: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub sexo: Option<String>,
}

impl DeceasedFields {
    pub fn with_id_and_name(id: String, nome: String) -> Self {
        Self {
            id: Some(id),
            nome: Some(nome),
            ..Self::default()
        }
    }
}

/// Fully resolved record shown and narrated by the detail screen.
/// Display-only; never mutated, never sent back.
#[derive(Debug, Clone, PartialEq)]
pub struct DeceasedRecord {
    pub id: String,
    pub nome: String,
    pub nasc: String,
    pub falec: String,
    pub pai: String,
    pub mae: String,
    pub localsep: String,
    pub historia: String,
    pub email: String,
    pub sexo: String,
}

impl DeceasedRecord {
    /// Unifies the fetched record with the navigation params: the
    /// remote value wins, the param fills the gap, and the fixed
    /// fallback covers both missing.
    pub fn unify(params: &DeceasedFields, remote: Option<&DeceasedFields>) -> Self {
        let pick = |remote_v: Option<&String>, param_v: Option<&String>, fallback: &str| {
            remote_v
                .or(param_v)
                .cloned()
                .unwrap_or_else(|| fallback.to_string())
        };
        let r = |f: fn(&DeceasedFields) -> Option<&String>| remote.and_then(f);

        Self {
            id: pick(
                remote.and_then(|d| d.id.as_ref()),
                params.id.as_ref(),
                "0",
            ),
            nome: pick(r(|d| d.nome.as_ref()), params.nome.as_ref(), "Nome não informado"),
            nasc: pick(r(|d| d.nasc.as_ref()), params.nasc.as_ref(), ""),
            falec: pick(r(|d| d.falec.as_ref()), params.falec.as_ref(), ""),
            pai: pick(r(|d| d.pai.as_ref()), params.pai.as_ref(), "Pai não informado"),
            mae: pick(r(|d| d.mae.as_ref()), params.mae.as_ref(), "Mãe não informada"),
            localsep: pick(
                r(|d| d.localsep.as_ref()),
                params.localsep.as_ref(),
                "Local de sepultura não informado",
            ),
            historia: pick(r(|d| d.historia.as_ref()), params.historia.as_ref(), ""),
            email: pick(
                r(|d| d.email.as_ref()),
                params.email.as_ref(),
                "memorialeternum@gmail.com",
            ),
            sexo: pick(r(|d| d.sexo.as_ref()), params.sexo.as_ref(), ""),
        }
    }
}

/// One person resting at a burial site. `has_memorial` arrives as 0/1,
/// "0"/"1", or a bool depending on the PHP path that produced it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BurialEntry {
    #[serde(default, deserialize_with = "string_or_number")]
    pub sepultado_id: Option<String>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(rename = "hasMemorial", default)]
    has_memorial: Option<serde_json::Value>,
    #[serde(rename = "memorialId", default, deserialize_with = "string_or_number")]
    pub memorial_id: Option<String>,
}

impl BurialEntry {
    pub fn has_memorial(&self) -> bool {
        match &self.has_memorial {
            Some(serde_json::Value::Bool(b)) => *b,
            Some(serde_json::Value::Number(n)) => n.as_i64().unwrap_or(0) != 0,
            Some(serde_json::Value::String(s)) => s.parse::<i64>().map(|n| n != 0).unwrap_or(false),
            _ => false,
        }
    }

    pub fn name(&self) -> &str {
        self.nome.as_deref().unwrap_or("")
    }

    /// Entries link to a detail screen only when the service marked a
    /// memorial and gave its id.
    pub fn memorial_link(&self) -> Option<&str> {
        if self.has_memorial() {
            self.memorial_id.as_deref()
        } else {
            None
        }
    }
}

/// viacep response. An unknown CEP answers `{"erro": true}`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Address {
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub localidade: String,
    #[serde(default)]
    pub uf: String,
    #[serde(default)]
    erro: Option<serde_json::Value>,
}

impl Address {
    pub fn is_error(&self) -> bool {
        match &self.erro {
            Some(serde_json::Value::Bool(b)) => *b,
            Some(serde_json::Value::String(s)) => s == "true",
            Some(_) => true,
            None => false,
        }
    }

    /// "logradouro, bairro, localidade - UF", the form the consent
    /// document expects.
    pub fn single_line(&self) -> String {
        format!(
            "{}, {}, {} - {}",
            self.logradouro, self.bairro, self.localidade, self.uf
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_normalize_to_strings() {
        let parsed: DeceasedFields =
            serde_json::from_str(r#"{"id": 42, "nome": "João"}"#).unwrap();
        assert_eq!(parsed.id.as_deref(), Some("42"));
    }

    #[test]
    fn unify_prefers_remote_then_params_then_fallback() {
        let params = DeceasedFields {
            id: Some("7".into()),
            nome: Some("Nome do parâmetro".into()),
            pai: Some("Pai do parâmetro".into()),
            ..DeceasedFields::default()
        };
        let remote = DeceasedFields {
            nome: Some("Nome do serviço".into()),
            ..DeceasedFields::default()
        };
        let record = DeceasedRecord::unify(&params, Some(&remote));
        assert_eq!(record.id, "7");
        assert_eq!(record.nome, "Nome do serviço");
        assert_eq!(record.pai, "Pai do parâmetro");
        assert_eq!(record.mae, "Mãe não informada");
        assert_eq!(record.historia, "");
    }

    #[test]
    fn burial_flag_forms() {
        let e: BurialEntry = serde_json::from_str(
            r#"{"sepultado_id": 1, "nome": "A", "hasMemorial": "1", "memorialId": 9}"#,
        )
        .unwrap();
        assert!(e.has_memorial());
        assert_eq!(e.memorial_link(), Some("9"));

        let e: BurialEntry =
            serde_json::from_str(r#"{"sepultado_id": 2, "nome": "B", "hasMemorial": 0}"#).unwrap();
        assert!(!e.has_memorial());
        assert_eq!(e.memorial_link(), None);
    }

    #[test]
    fn viacep_error_marker() {
        let a: Address = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert!(a.is_error());
        let a: Address = serde_json::from_str(
            r#"{"logradouro": "Rua A", "bairro": "Centro", "localidade": "Umuarama", "uf": "PR"}"#,
        )
        .unwrap();
        assert!(!a.is_error());
        assert_eq!(a.single_line(), "Rua A, Centro, Umuarama - PR");
    }
}
