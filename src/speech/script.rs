//! Narration scripts: pure assembly of a plan from a screen's display
//! data and the current preferences. No I/O here.

use std::time::Duration;

use crate::api::{DeceasedFields, DeceasedRecord};
use crate::prefs::NarrationPrefs;
use crate::speech::plan::{NarrationPlan, Utterance};
use crate::textfmt::{
    approximate_age, burial_site_for_speech, display_date_or_unknown, format_date_display,
};

/// Settle delay before the search introduction, so the screen change
/// lands first.
pub const SEARCH_SETTLE_DELAY: Duration = Duration::from_millis(500);
/// Delay before the "no results" sentence.
pub const NO_RESULTS_DELAY: Duration = Duration::from_millis(1000);
/// Spacing between result items in the delayed results plan.
pub const RESULT_INTERVAL: Duration = Duration::from_millis(2500);

/// What a screen wants narrated.
#[derive(Debug, Clone, Copy)]
pub enum ScreenNarration<'a> {
    /// Home screen entry: screen name, then the menu names when menu
    /// announcements are on.
    Home,
    /// A menu button press, spoken before the navigation happens.
    MenuChoice { label: &'a str },
    /// The search section, after the settle delay.
    SearchIntro,
    /// The results list.
    Results { items: &'a [DeceasedFields] },
    /// Selecting a result; navigation is deferred to completion.
    OpeningMemorial { nome: &'a str },
    /// The memorial biography.
    Detail {
        record: &'a DeceasedRecord,
        stored_site: Option<&'a str>,
    },
    /// Contact screen entry.
    Contact,
    /// Settings walkthrough; manual trigger only.
    Settings,
    /// Settings screen entry when menu announcements are on.
    SettingsTitle,
    /// Confirmation right after enabling screen-reader mode.
    ScreenReaderEnabled,
    /// Confirmation right after enabling menu announcements.
    SpeakMenusEnabled,
}

/// Builds the announcement plan for a screen. With screen-reader mode
/// off the plan is empty for every screen kind; menu-related scripts
/// additionally require the announce-menus preference.
pub fn build_plan(request: ScreenNarration<'_>, prefs: &NarrationPrefs) -> NarrationPlan {
    if !prefs.screen_reader {
        return NarrationPlan::empty();
    }
    let say = |text: &str| Utterance::new(text, &prefs.locale);

    match request {
        ScreenNarration::Home => {
            let mut utterances = vec![say("Você está na Tela Principal")];
            if prefs.speak_menus {
                utterances.push(say("Menu, Memorial. Menu, Contato. Menu, Configurações"));
            }
            NarrationPlan::sequential(utterances)
        }

        ScreenNarration::MenuChoice { label } => {
            if !prefs.speak_menus {
                return NarrationPlan::empty();
            }
            NarrationPlan::sequential(vec![say(label)])
        }

        ScreenNarration::SearchIntro => NarrationPlan::sequential(vec![
            say("Busca de falecidos"),
            say(
                "Digite o nome do falecido ou parte dele, ou digite a data de falecimento \
                 e depois clique no botão pesquisar.",
            ),
        ])
        .with_start_delay(SEARCH_SETTLE_DELAY),

        ScreenNarration::Results { items } => {
            let mut steps = vec![(Duration::ZERO, say("Resultados da busca"))];
            if items.is_empty() {
                steps.push((NO_RESULTS_DELAY, say("Nenhum resultado encontrado.")));
            } else {
                for (index, item) in items.iter().enumerate() {
                    let nome = item.nome.as_deref().unwrap_or("");
                    let falec = format_date_display(item.falec.as_deref().unwrap_or(""));
                    steps.push((
                        RESULT_INTERVAL * (index as u32 + 1),
                        say(&format!("{}, falecido em {}", nome, falec)),
                    ));
                }
                steps.push((
                    RESULT_INTERVAL * (items.len() as u32 + 1),
                    say("Botão: Voltar para Pesquisa"),
                ));
            }
            NarrationPlan::delayed(steps)
        }

        ScreenNarration::OpeningMemorial { nome } => {
            NarrationPlan::sequential(vec![say(&format!("Abrindo memorial de {}", nome))])
        }

        ScreenNarration::Detail {
            record,
            stored_site,
        } => NarrationPlan::sequential(vec![say(&biography_text(record, stored_site))])
            .with_audio_duck(),

        ScreenNarration::Contact => NarrationPlan::sequential(vec![say(
            "Você está na tela de contato. Criador e desenvolvedor. Douglas Dias Borges. \
             Criando soluções que coné ctam memórias e histórias. \
             Botão: Autorização L G P D, para acessar o formulário de autorização de proteção \
             de dados. Botão: E-mail, para enviar um e-mail para o desenvolvedor. Botão: UÁ \
             TIZÁPI, para enviar uma mensagem direta. Ou use o botão voltar ao menu para \
             retornar à página inicial.",
        )]),

        ScreenNarration::Settings => NarrationPlan::sequential(vec![say(
            "Configurações do aplicativo. \
             Ativar ou desativar notificações push. \
             Ajustar o tamanho da fonte do texto. \
             Ativar o modo de leitura para ter ajuda por voz. \
             Ativar ou desativar os áudios do aplicativo. \
             Ativar a leitura dos menus. \
             Redefinir todas as configurações para os padrões.",
        )]),

        ScreenNarration::SettingsTitle => {
            if !prefs.speak_menus {
                return NarrationPlan::empty();
            }
            NarrationPlan::sequential(vec![say("Configurações do aplicativo")])
        }

        ScreenNarration::ScreenReaderEnabled => {
            NarrationPlan::sequential(vec![say("Modo leitor de tela ativado")])
        }

        ScreenNarration::SpeakMenusEnabled => {
            NarrationPlan::sequential(vec![say("Falar os menus ativado")])
        }
    }
}

/// Grammatical forms agreed with the record's sex field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenderForms {
    pub deceased: &'static str,
    pub born: &'static str,
    pub child: &'static str,
}

/// "F" (any case) selects the feminine forms; everything else,
/// including missing, selects the default ones.
pub fn gender_forms(sexo: &str) -> GenderForms {
    if sexo.eq_ignore_ascii_case("F") {
        GenderForms {
            deceased: "falecida",
            born: "nascida",
            child: "filha",
        }
    } else {
        GenderForms {
            deceased: "falecido",
            born: "nascido",
            child: "filho",
        }
    }
}

/// The composed biography sentence for the detail screen. Field by
/// field, in the fixed order, skipping what the record does not have.
fn biography_text(record: &DeceasedRecord, stored_site: Option<&str>) -> String {
    let forms = gender_forms(&record.sexo);
    let nasc = display_date_or_unknown(&record.nasc);
    let falec = display_date_or_unknown(&record.falec);

    let mut texto = format!("Memorial de {}. ", record.nome);

    match (!record.nasc.is_empty(), !record.falec.is_empty()) {
        (true, true) => {
            texto.push_str(&format!(
                "{} em {}. {} em {}. ",
                forms.born, nasc, forms.deceased, falec
            ));
        }
        (true, false) => texto.push_str(&format!("{} em {}. ", forms.born, nasc)),
        (false, true) => texto.push_str(&format!("{} em {}. ", forms.deceased, falec)),
        (false, false) => {}
    }

    let idade = approximate_age(&record.nasc, &record.falec);
    if !idade.is_empty() {
        texto.push_str(&format!("Idade: {}. ", idade));
    }

    texto.push_str(&format!("{} de {} e {}. ", forms.child, record.pai, record.mae));

    let site = burial_site_for_speech(stored_site.unwrap_or(&record.localsep));
    texto.push_str(&format!("Sepultado na {}. ", site));
    texto.push_str("Línqui. Veja quem mais está sepultado aqui. ");

    if !record.historia.is_empty() {
        texto.push_str(&format!("História: {}. ", record.historia));
    }

    texto.push_str("Botão: Deixe sua mensagem. ");
    texto.push_str("Línqui. Quer fazer um memorial como este? Clique aqui. ");
    texto.push_str("Botão: Voltar ao Menu.");
    texto
}
