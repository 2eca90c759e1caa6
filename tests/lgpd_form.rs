use eternum::api::Address;
use eternum::forms::ConsentError;
use eternum::ui::lgpd::{LgpdField, LgpdIntent, LgpdReducer, LgpdState};
use eternum::ui::mvi::Reducer;

fn reduce(state: LgpdState, intent: LgpdIntent) -> LgpdState {
    LgpdReducer::reduce(state, intent)
}

fn type_into(mut state: LgpdState, field: LgpdField, text: &str) -> LgpdState {
    while state.focused != field {
        state = reduce(state, LgpdIntent::FocusNext);
    }
    for c in text.chars() {
        state = reduce(state, LgpdIntent::Input(c));
    }
    state
}

#[test]
fn cpf_masks_and_validates_while_typing() {
    let state = type_into(LgpdState::default(), LgpdField::Cpf, "11144477735");
    assert_eq!(state.form.cpf, "111.444.777-35");
    assert!(state.cpf_valido);

    let state = reduce(state, LgpdIntent::Backspace);
    assert!(!state.cpf_valido);
}

#[test]
fn repeated_digit_cpf_is_rejected() {
    let state = type_into(LgpdState::default(), LgpdField::Cpf, "11111111111");
    assert!(!state.cpf_valido);
}

#[test]
fn eighth_cep_digit_requests_the_lookup() {
    let state = type_into(LgpdState::default(), LgpdField::Cep, "8750112");
    assert_eq!(state.cep_lookup, None);

    let state = reduce(state, LgpdIntent::Input('3'));
    assert_eq!(state.form.cep, "87501-123");
    assert_eq!(state.cep_lookup.as_deref(), Some("87501123"));

    let state = reduce(state, LgpdIntent::CepLookupStarted);
    assert_eq!(state.cep_lookup, None);
    assert!(state.looking_up_cep);
}

#[test]
fn resolved_address_fills_the_street_field() {
    let state = type_into(LgpdState::default(), LgpdField::Cep, "87501123");
    let state = reduce(state, LgpdIntent::CepLookupStarted);
    let address: Address = serde_json::from_str(
        r#"{"logradouro": "Avenida Brasil", "bairro": "Centro", "localidade": "Umuarama", "uf": "PR"}"#,
    )
    .unwrap();
    let state = reduce(state, LgpdIntent::CepResolved(Some(address)));
    assert!(state.form.cep_valido);
    assert!(!state.looking_up_cep);
    assert_eq!(state.form.endereco, "Avenida Brasil, Centro, Umuarama - PR");
}

#[test]
fn unknown_cep_invalidates_the_field() {
    let state = type_into(LgpdState::default(), LgpdField::Cep, "00000000");
    let state = reduce(state, LgpdIntent::CepLookupStarted);
    let state = reduce(state, LgpdIntent::CepResolved(None));
    assert!(!state.form.cep_valido);
}

#[test]
fn phone_is_masked() {
    let state = type_into(LgpdState::default(), LgpdField::Telefone, "44988378222");
    assert_eq!(state.form.telefone, "(44) 9 8837-8222");
}

#[test]
fn generation_gate_checks_acceptance_then_cpf_then_cep() {
    let mut state = type_into(LgpdState::default(), LgpdField::Cpf, "11144477735");
    state.form.cep_valido = true;

    assert_eq!(state.form.ready(), Err(ConsentError::NotAccepted));

    let state = reduce(state, LgpdIntent::ToggleAceite);
    assert_eq!(state.form.ready(), Ok(()));

    let mut bad_cpf = state.clone();
    bad_cpf.form.cpf = "111.111.111-11".into();
    assert_eq!(bad_cpf.form.ready(), Err(ConsentError::InvalidCpf));

    let mut bad_cep = state;
    bad_cep.form.cep_valido = false;
    assert_eq!(bad_cep.form.ready(), Err(ConsentError::InvalidCep));
}

#[test]
fn focus_cycles_through_every_field() {
    let mut state = LgpdState::default();
    let first = state.focused;
    for _ in 0..11 {
        state = reduce(state, LgpdIntent::FocusNext);
    }
    assert_eq!(state.focused, first);
}
