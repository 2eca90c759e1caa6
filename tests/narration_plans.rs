use std::time::Duration;

use eternum::api::{DeceasedFields, DeceasedRecord};
use eternum::prefs::NarrationPrefs;
use eternum::speech::{build_plan, gender_forms, PlanMode, ScreenNarration, RESULT_INTERVAL};

fn reader() -> NarrationPrefs {
    NarrationPrefs {
        screen_reader: true,
        speak_menus: false,
        locale: "pt-BR".to_string(),
    }
}

fn reader_with_menus() -> NarrationPrefs {
    NarrationPrefs {
        speak_menus: true,
        ..reader()
    }
}

fn record() -> DeceasedRecord {
    DeceasedRecord::unify(
        &DeceasedFields {
            id: Some("3".into()),
            nome: Some("João Pereira".into()),
            nasc: Some("1940-01-01".into()),
            falec: Some("2010-06-15".into()),
            ..DeceasedFields::default()
        },
        None,
    )
}

fn summaries(n: usize) -> Vec<DeceasedFields> {
    (0..n)
        .map(|i| DeceasedFields {
            id: Some(i.to_string()),
            nome: Some(format!("Pessoa {}", i)),
            falec: Some("2020-01-02".into()),
            ..DeceasedFields::default()
        })
        .collect()
}

#[test]
fn screen_reader_off_means_empty_plan_everywhere() {
    let prefs = NarrationPrefs::default();
    let r = record();
    let items = summaries(3);
    let requests = [
        ScreenNarration::Home,
        ScreenNarration::MenuChoice { label: "Memorial" },
        ScreenNarration::SearchIntro,
        ScreenNarration::Results { items: &items },
        ScreenNarration::OpeningMemorial { nome: "João" },
        ScreenNarration::Detail {
            record: &r,
            stored_site: None,
        },
        ScreenNarration::Contact,
        ScreenNarration::Settings,
        ScreenNarration::SettingsTitle,
        ScreenNarration::ScreenReaderEnabled,
        ScreenNarration::SpeakMenusEnabled,
    ];
    for request in requests {
        assert!(build_plan(request, &prefs).is_empty());
    }
}

#[test]
fn results_plan_has_n_plus_two_utterances() {
    let items = summaries(4);
    let plan = build_plan(ScreenNarration::Results { items: &items }, &reader());
    assert_eq!(plan.mode(), PlanMode::Delayed);
    assert_eq!(plan.len(), 6);

    // Header speaks at once, items every interval, the hint last.
    assert_eq!(plan.steps()[0].offset, Duration::ZERO);
    for (i, step) in plan.steps().iter().enumerate().skip(1) {
        assert_eq!(step.offset, RESULT_INTERVAL * i as u32);
    }
    assert_eq!(
        plan.steps()[1].utterance.text,
        "Pessoa 0, falecido em 02/01/2020"
    );
    assert_eq!(plan.steps()[5].utterance.text, "Botão: Voltar para Pesquisa");
}

#[test]
fn empty_results_plan_has_exactly_two() {
    let plan = build_plan(ScreenNarration::Results { items: &[] }, &reader());
    assert_eq!(plan.len(), 2);
    assert_eq!(plan.steps()[1].utterance.text, "Nenhum resultado encontrado.");
    assert_eq!(plan.steps()[1].offset, Duration::from_millis(1000));
}

#[test]
fn results_offsets_strictly_increase() {
    let items = summaries(5);
    let plan = build_plan(ScreenNarration::Results { items: &items }, &reader());
    let offsets: Vec<_> = plan.steps().iter().map(|s| s.offset).collect();
    for pair in offsets.windows(2) {
        assert!(pair[0] < pair[1]);
        assert_eq!(pair[1] - pair[0], RESULT_INTERVAL);
    }
}

#[test]
fn search_intro_waits_for_the_screen_to_settle() {
    let plan = build_plan(ScreenNarration::SearchIntro, &reader());
    assert_eq!(plan.mode(), PlanMode::Sequential);
    assert_eq!(plan.start_delay(), Duration::from_millis(500));
    assert_eq!(plan.len(), 2);
    assert_eq!(plan.steps()[0].utterance.text, "Busca de falecidos");
}

#[test]
fn menu_choice_needs_the_menu_preference() {
    let plan = build_plan(ScreenNarration::MenuChoice { label: "Contato" }, &reader());
    assert!(plan.is_empty());

    let plan = build_plan(
        ScreenNarration::MenuChoice { label: "Contato" },
        &reader_with_menus(),
    );
    assert_eq!(plan.len(), 1);
    assert_eq!(plan.steps()[0].utterance.text, "Contato");
}

#[test]
fn detail_plan_is_one_ducking_utterance() {
    let r = record();
    let plan = build_plan(
        ScreenNarration::Detail {
            record: &r,
            stored_site: None,
        },
        &reader(),
    );
    assert_eq!(plan.len(), 1);
    assert!(plan.ducks_audio());
    let text = &plan.steps()[0].utterance.text;
    assert!(text.starts_with("Memorial de João Pereira. "));
    assert!(text.contains("nascido em 01/01/1940"));
    assert!(text.contains("falecido em 15/06/2010"));
    assert!(text.contains("Idade: 70 anos e 5 meses"));
    assert!(text.ends_with("Botão: Voltar ao Menu."));
}

#[test]
fn gender_agreement_table() {
    for sexo in ["F", "f"] {
        let forms = gender_forms(sexo);
        assert_eq!(forms.deceased, "falecida");
        assert_eq!(forms.born, "nascida");
        assert_eq!(forms.child, "filha");
    }
    for sexo in ["", "M", "m", "X", "feminino"] {
        let forms = gender_forms(sexo);
        assert_eq!(forms.deceased, "falecido");
        assert_eq!(forms.born, "nascido");
        assert_eq!(forms.child, "filho");
    }
}

#[test]
fn utterances_carry_the_preferred_locale() {
    let prefs = NarrationPrefs {
        locale: "pt-PT".to_string(),
        ..reader()
    };
    let plan = build_plan(ScreenNarration::Contact, &prefs);
    assert_eq!(plan.steps()[0].utterance.locale, "pt-PT");
    assert_eq!(plan.steps()[0].utterance.rate, 1.0);
    assert_eq!(plan.steps()[0].utterance.pitch, 1.0);
}
