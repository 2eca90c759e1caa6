use eternum::api::DeceasedFields;
use eternum::ui::detail::{DetailIntent, DetailReducer, DetailState};
use eternum::ui::mvi::Reducer;

fn params(id: &str, nome: &str) -> DeceasedFields {
    DeceasedFields::with_id_and_name(id.to_string(), nome.to_string())
}

fn remote(id: &str) -> DeceasedFields {
    DeceasedFields {
        id: Some(id.to_string()),
        nome: Some("Nome do serviço".into()),
        sexo: Some("F".into()),
        ..DeceasedFields::default()
    }
}

#[test]
fn no_record_means_no_narration() {
    let state = DetailState::new(params("1", "Maria"));
    assert!(!state.should_narrate());
}

#[test]
fn loaded_record_narrates_once_per_identity() {
    let state = DetailState::new(params("1", "Maria"));
    let state = DetailReducer::reduce(state, DetailIntent::RecordLoaded(remote("1")));
    assert!(state.should_narrate());

    let state = DetailReducer::reduce(state, DetailIntent::Narrated("1".to_string()));
    assert!(!state.should_narrate());

    // The same record again changes nothing.
    let state = DetailReducer::reduce(state, DetailIntent::RecordLoaded(remote("1")));
    assert!(!state.should_narrate());
}

#[test]
fn a_new_identity_rearms_narration() {
    let state = DetailState::new(params("1", "Maria"));
    let state = DetailReducer::reduce(state, DetailIntent::RecordLoaded(remote("1")));
    let state = DetailReducer::reduce(state, DetailIntent::Narrated("1".to_string()));
    assert!(!state.should_narrate());

    let state = DetailReducer::reduce(state, DetailIntent::RecordLoaded(remote("2")));
    assert!(state.should_narrate());
}

#[test]
fn remote_fields_win_over_params() {
    let state = DetailState::new(params("1", "Nome do parâmetro"));
    let state = DetailReducer::reduce(state, DetailIntent::RecordLoaded(remote("1")));
    let record = state.record.unwrap();
    assert_eq!(record.nome, "Nome do serviço");
    assert_eq!(record.sexo, "F");
}

#[test]
fn failed_fetch_falls_back_to_params() {
    let state = DetailState::new(params("1", "Maria"));
    let state = DetailReducer::reduce(state, DetailIntent::LoadFailed);
    let record = state.record.as_ref().unwrap();
    assert_eq!(record.nome, "Maria");
    assert_eq!(record.pai, "Pai não informado");
    assert_eq!(record.mae, "Mãe não informada");
    assert!(!state.loading);
}

#[test]
fn visit_counter_is_display_only() {
    let state = DetailState::new(params("1", "Maria"));
    let state = DetailReducer::reduce(state, DetailIntent::VisitCounted(41));
    assert_eq!(state.visit_count, Some(41));
    let state = DetailReducer::reduce(state, DetailIntent::VisitCounted(42));
    assert_eq!(state.visit_count, Some(42));
}
