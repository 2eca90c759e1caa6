use crate::forms::{cep_digits, mask_birth_date, mask_cep, mask_cpf, mask_phone, validate_cpf};
use crate::ui::lgpd::intent::LgpdIntent;
use crate::ui::lgpd::state::{LgpdField, LgpdState};
use crate::ui::mvi::Reducer;

pub struct LgpdReducer;

impl Reducer for LgpdReducer {
    type State = LgpdState;
    type Intent = LgpdIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LgpdIntent::FocusNext => LgpdState {
                focused: state.focused.next(),
                ..state
            },
            LgpdIntent::FocusPrev => LgpdState {
                focused: state.focused.prev(),
                ..state
            },
            LgpdIntent::Input(c) => edit(state, Some(c)),
            LgpdIntent::Backspace => edit(state, None),
            LgpdIntent::ToggleAceite => {
                let mut form = state.form.clone();
                form.aceite = !form.aceite;
                LgpdState { form, ..state }
            }
            LgpdIntent::CepLookupStarted => LgpdState {
                cep_lookup: None,
                looking_up_cep: true,
                ..state
            },
            LgpdIntent::CepResolved(address) => {
                let mut form = state.form.clone();
                match address {
                    Some(address) => {
                        form.endereco = address.single_line();
                        form.cep_valido = true;
                    }
                    None => form.cep_valido = false,
                }
                LgpdState {
                    form,
                    looking_up_cep: false,
                    ..state
                }
            }
        }
    }
}

/// Applies one keystroke (or a backspace, for `None`) to the focused
/// field, re-masking and re-validating on every change.
fn edit(state: LgpdState, key: Option<char>) -> LgpdState {
    let mut form = state.form.clone();
    let mut cpf_valido = state.cpf_valido;
    let mut cep_lookup = None;

    let apply = |current: &str| -> String {
        let mut value = current.to_string();
        match key {
            Some(c) => value.push(c),
            None => {
                value.pop();
            }
        }
        value
    };

    match state.focused {
        LgpdField::Nome => form.nome = apply(&form.nome),
        LgpdField::Cpf => {
            form.cpf = mask_cpf(&apply(&form.cpf));
            cpf_valido = validate_cpf(&form.cpf);
        }
        LgpdField::Nascimento => form.data_nascimento = mask_birth_date(&apply(&form.data_nascimento)),
        LgpdField::Cep => {
            let masked = mask_cep(&apply(&form.cep));
            let digits = cep_digits(&masked);
            // Reaching eight digits triggers the address lookup; any
            // other length invalidates a previous answer.
            if digits.len() == 8 {
                cep_lookup = Some(digits);
            } else {
                form.cep_valido = false;
            }
            form.cep = masked;
        }
        LgpdField::Endereco => form.endereco = apply(&form.endereco),
        LgpdField::Numero => {
            let value = apply(&form.numero);
            form.numero = value.chars().filter(|c| c.is_ascii_digit()).collect();
        }
        LgpdField::Telefone => form.telefone = mask_phone(&apply(&form.telefone)),
        LgpdField::Email => form.email = apply(&form.email),
        // The action rows ignore typing.
        LgpdField::Aceite | LgpdField::Gerar | LgpdField::Voltar => {}
    }

    LgpdState {
        form,
        cpf_valido,
        cep_lookup,
        ..state
    }
}
