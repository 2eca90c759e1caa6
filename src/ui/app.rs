//! Application state: the screen stack, the narration sequencer, and
//! every side effect the reducers themselves are not allowed to run.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::api::{DeceasedFields, MemorialClient};
use crate::audio::AmbientPlayer;
use crate::forms::render_consent_html;
use crate::opener;
use crate::prefs::{keys, NarrationPrefs, PrefStore};
use crate::speech::{
    build_plan, PlanId, ScreenNarration, Sequencer, SpeechEngine, SpeechEvent,
};
use crate::textfmt::format_date_for_api;
use crate::ui::burial::{BurialIntent, BurialReducer, BurialState};
use crate::ui::contact::{ContactAction, ContactIntent, ContactReducer, ContactState};
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState};
use crate::ui::events::AppEvent;
use crate::ui::home::{HomeIntent, HomeReducer, HomeState, MENU_ITEMS};
use crate::ui::lgpd::{LgpdField, LgpdIntent, LgpdReducer, LgpdState};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{Nav, Route, ScreenId};
use crate::ui::results::{ResultsIntent, ResultsReducer, ResultsState};
use crate::ui::settings::{SettingsIntent, SettingsReducer, SettingsRow, SettingsState};

/// How long a transient status line stays on screen.
const STATUS_TTL: Duration = Duration::from_secs(6);

const DEV_EMAIL: &str = "memorialeternum@gmail.com";
const DEV_WHATSAPP: &str = "5544988378222";

pub enum Screen {
    Home(HomeState),
    Results(ResultsState),
    Detail(DetailState),
    Burial(BurialState),
    Contact(ContactState),
    Lgpd(LgpdState),
    Settings(SettingsState),
}

impl Screen {
    pub fn id(&self) -> ScreenId {
        match self {
            Screen::Home(_) => ScreenId::Home,
            Screen::Results(_) => ScreenId::Results,
            Screen::Detail(_) => ScreenId::Detail,
            Screen::Burial(_) => ScreenId::Burial,
            Screen::Contact(_) => ScreenId::Contact,
            Screen::Lgpd(_) => ScreenId::Lgpd,
            Screen::Settings(_) => ScreenId::Settings,
        }
    }
}

/// Work parked until a narration plan finishes (menu announcements and
/// "Abrindo memorial de ..." defer their navigation to completion).
enum PendingAction {
    Navigate(Nav),
    OpenSearch,
}

pub struct App {
    should_quit: bool,
    stack: Vec<Screen>,
    /// Narration snapshot for the active screen.
    prefs: NarrationPrefs,
    /// Burial site stashed by the previous detail visit, for narration.
    stored_site: Option<String>,
    sequencer: Sequencer,
    pending: Option<(PlanId, PendingAction)>,
    ambient: Option<AmbientPlayer>,
    status: Option<(String, Instant)>,
    events: mpsc::UnboundedSender<AppEvent>,
    client: MemorialClient,
    store: PrefStore,
}

impl App {
    pub fn new(
        engine: Arc<dyn SpeechEngine>,
        events: mpsc::UnboundedSender<AppEvent>,
        client: MemorialClient,
        store: PrefStore,
    ) -> Self {
        Self {
            should_quit: false,
            stack: vec![Screen::Home(HomeState::default())],
            prefs: NarrationPrefs::default(),
            stored_site: None,
            sequencer: Sequencer::new(engine),
            pending: None,
            ambient: None,
            status: None,
            events,
            client,
            store,
        }
    }

    /// Entry effects for the initial screen; call once before the loop.
    pub fn start(&mut self) {
        self.on_enter();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn current(&self) -> &Screen {
        self.stack.last().expect("screen stack is never empty")
    }

    pub fn status_line(&self) -> Option<&str> {
        self.status.as_ref().map(|(text, _)| text.as_str())
    }

    /// Portrait URL shown on the detail screen.
    pub fn photo_url(&self, id: &str) -> String {
        self.client.photo_url(id)
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some((text.into(), Instant::now()));
    }

    // ---- navigation -----------------------------------------------------

    fn navigate(&mut self, nav: Nav) {
        // Leaving a screen silences its narration before anything else.
        self.sequencer.cancel();
        self.pending = None;

        match nav {
            Nav::Push(route) => self.stack.push(make_screen(route)),
            Nav::Replace(route) => {
                self.stack.pop();
                self.stack.push(make_screen(route));
            }
            Nav::Back => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
            }
            Nav::PopToRoot => {
                self.stack.truncate(1);
                if let Some(Screen::Home(state)) = self.stack.first_mut() {
                    *state = HomeState::default();
                }
            }
        }

        // The ambient track belongs to the detail screen; stop it once
        // no detail is left on the stack.
        if !self.stack.iter().any(|s| matches!(s, Screen::Detail(_))) {
            self.ambient = None;
        }

        self.on_enter();
    }

    /// Runs a narration plan and parks `action` until it finishes; with
    /// narration off (empty plan) the action runs immediately.
    fn narrate_then(&mut self, request: ScreenNarration<'_>, action: PendingAction) {
        let plan = build_plan(request, &self.prefs);
        match self.sequencer.run(plan, None) {
            Some(id) => self.pending = Some((id, action)),
            None => self.perform(action),
        }
    }

    fn narrate(&mut self, request: ScreenNarration<'_>) {
        let plan = build_plan(request, &self.prefs);
        let audio = self.ambient.as_ref().map(|p| p.channel());
        self.sequencer.run(plan, audio);
    }

    fn perform(&mut self, action: PendingAction) {
        match action {
            PendingAction::Navigate(nav) => self.navigate(nav),
            PendingAction::OpenSearch => self.open_search(),
        }
    }

    // ---- screen entry effects -------------------------------------------

    fn on_enter(&mut self) {
        let screen = self.current().id();

        // Every screen re-reads the narration preferences on entry.
        let store = self.store.clone();
        let tx = self.events.clone();
        let want_site = screen == ScreenId::Detail;
        tokio::spawn(async move {
            let prefs = store.narration_prefs().await;
            let stored_site = if want_site {
                store.get(keys::BURIAL_SITE).await
            } else {
                None
            };
            let _ = tx.send(AppEvent::PrefsLoaded {
                screen,
                prefs,
                stored_site,
            });
        });

        match screen {
            ScreenId::Detail => {
                let params = match self.current() {
                    Screen::Detail(state) => state.params.clone(),
                    _ => return,
                };
                self.enter_detail(params);
            }
            ScreenId::Burial => {
                let localsep = match self.current() {
                    Screen::Burial(state) => state.localsep.clone(),
                    _ => return,
                };
                self.fetch_burials(localsep);
            }
            ScreenId::Settings => {
                let store = self.store.clone();
                let tx = self.events.clone();
                tokio::spawn(async move {
                    let snapshot = store.settings_snapshot().await;
                    let _ = tx.send(AppEvent::SettingsLoaded { snapshot });
                });
            }
            _ => {}
        }
    }

    fn enter_detail(&mut self, params: DeceasedFields) {
        let Some(id) = params.id.clone() else {
            // Nothing to fetch; show what the params carry.
            self.dispatch_detail(DetailIntent::LoadFailed);
            return;
        };

        let client = self.client.clone();
        let tx = self.events.clone();
        let fetch_id = id.clone();
        tokio::spawn(async move {
            let result = client
                .deceased(&fetch_id)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::DetailLoaded {
                id: fetch_id,
                result,
            });
        });

        let client = self.client.clone();
        let tx = self.events.clone();
        let visit_id = id.clone();
        tokio::spawn(async move {
            match client.increment_visit(&visit_id).await {
                Ok(Some(count)) => {
                    let _ = tx.send(AppEvent::VisitCounted {
                        id: visit_id,
                        count,
                    });
                }
                Ok(None) => {}
                Err(err) => tracing::warn!("visit increment failed: {}", err),
            }
        });

        let client = self.client.clone();
        let store = self.store.clone();
        let tx = self.events.clone();
        tokio::spawn(async move {
            if !store.audio_enabled().await {
                return;
            }
            match client.fetch_bytes(&client.music_url()).await {
                Ok(bytes) => {
                    let _ = tx.send(AppEvent::AmbientReady { bytes });
                }
                Err(err) => tracing::warn!("ambient track unavailable: {}", err),
            }
        });
    }

    fn fetch_burials(&self, localsep: String) {
        let client = self.client.clone();
        let tx = self.events.clone();
        tokio::spawn(async move {
            let result = client
                .burials_at(&localsep)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::BurialsLoaded { result });
        });
    }

    // ---- events ---------------------------------------------------------

    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.on_key(key),
            AppEvent::Resize => {}
            AppEvent::Tick => {
                if let Some((_, since)) = &self.status {
                    if since.elapsed() > STATUS_TTL {
                        self.status = None;
                    }
                }
            }
            AppEvent::Speech(SpeechEvent::Done(id)) => {
                if let Some(finished) = self.sequencer.on_speech_done(id) {
                    if let Some((plan, action)) = self.pending.take() {
                        if plan == finished {
                            self.perform(action);
                        } else {
                            self.pending = Some((plan, action));
                        }
                    }
                }
            }
            AppEvent::PrefsLoaded {
                screen,
                prefs,
                stored_site,
            } => {
                if screen != self.current().id() {
                    return;
                }
                self.prefs = prefs;
                self.stored_site = stored_site;
                self.narrate_on_entry(screen);
            }
            AppEvent::SearchFinished { result } => {
                if !matches!(self.current(), Screen::Home(state) if state.searching) {
                    return;
                }
                self.dispatch_home(HomeIntent::SearchSettled);
                match result {
                    Ok(items) => self.navigate(Nav::Push(Route::Results { items })),
                    Err(err) => {
                        tracing::warn!("search failed: {}", err);
                        self.set_status(
                            "Não foi possível buscar os dados. Verifique sua conexão ou tente novamente.",
                        );
                    }
                }
            }
            AppEvent::DetailLoaded { id, result } => {
                let matches = matches!(
                    self.current(),
                    Screen::Detail(state) if state.params.id.as_deref() == Some(id.as_str())
                );
                if !matches {
                    return;
                }
                match result {
                    Ok(remote) => self.dispatch_detail(DetailIntent::RecordLoaded(remote)),
                    Err(err) => {
                        tracing::warn!("detail fetch failed: {}", err);
                        self.dispatch_detail(DetailIntent::LoadFailed);
                    }
                }
                self.try_narrate_detail();
            }
            AppEvent::VisitCounted { id, count } => {
                if matches!(
                    self.current(),
                    Screen::Detail(state) if state.params.id.as_deref() == Some(id.as_str())
                ) {
                    self.dispatch_detail(DetailIntent::VisitCounted(count));
                }
            }
            AppEvent::BurialsLoaded { result } => {
                if !matches!(self.current(), Screen::Burial(_)) {
                    return;
                }
                match result {
                    Ok(entries) => self.dispatch_burial(BurialIntent::Loaded(entries)),
                    Err(err) => {
                        tracing::warn!("burial lookup failed: {}", err);
                        self.dispatch_burial(BurialIntent::LoadFailed);
                    }
                }
            }
            AppEvent::AmbientReady { bytes } => {
                if !matches!(self.current(), Screen::Detail(_)) {
                    return;
                }
                match AmbientPlayer::start(bytes) {
                    Ok(player) => {
                        // The biography may already be speaking; hand
                        // the channel over so it plays ducked.
                        self.sequencer.attach_audio(player.channel());
                        self.ambient = Some(player);
                    }
                    Err(err) => tracing::warn!("ambient playback failed: {}", err),
                }
            }
            AppEvent::AddressResolved { result } => {
                if !matches!(self.current(), Screen::Lgpd(_)) {
                    return;
                }
                let found = result.is_some();
                self.dispatch_lgpd(LgpdIntent::CepResolved(result));
                if !found {
                    self.set_status("CEP inválido. Não foi possível localizar esse CEP.");
                }
            }
            AppEvent::ConsentSaved { result } => match result {
                Ok(path) => self.set_status(format!("Termo gerado em {}", path)),
                Err(err) => {
                    tracing::warn!("consent generation failed: {}", err);
                    self.set_status("Não foi possível gerar o termo.");
                }
            },
            AppEvent::SettingsLoaded { snapshot } => {
                self.dispatch_settings(SettingsIntent::Loaded(snapshot));
            }
        }
    }

    fn narrate_on_entry(&mut self, screen: ScreenId) {
        match screen {
            ScreenId::Home => self.narrate(ScreenNarration::Home),
            ScreenId::Results => {
                if let Screen::Results(state) = self.current() {
                    let items = state.items.clone();
                    self.narrate(ScreenNarration::Results { items: &items });
                }
            }
            ScreenId::Detail => self.try_narrate_detail(),
            ScreenId::Contact => self.narrate(ScreenNarration::Contact),
            ScreenId::Settings => self.narrate(ScreenNarration::SettingsTitle),
            ScreenId::Burial | ScreenId::Lgpd => {}
        }
    }

    /// Speaks the biography once per identity, after both the record
    /// and the preferences have arrived.
    fn try_narrate_detail(&mut self) {
        let Screen::Detail(state) = self.current() else {
            return;
        };
        if !state.should_narrate() || !self.prefs.screen_reader {
            return;
        }
        let Some(record) = state.record.clone() else {
            return;
        };
        let stored = self.stored_site.clone();
        let plan = build_plan(
            ScreenNarration::Detail {
                record: &record,
                stored_site: stored.as_deref(),
            },
            &self.prefs,
        );
        let audio = self.ambient.as_ref().map(|p| p.channel());
        if self.sequencer.run(plan, audio).is_some() {
            self.dispatch_detail(DetailIntent::Narrated(record.id));
        }
    }

    // ---- keys -----------------------------------------------------------

    fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.sequencer.cancel();
            self.should_quit = true;
            return;
        }

        match self.current() {
            Screen::Home(_) => self.home_key(key),
            Screen::Results(_) => self.results_key(key),
            Screen::Detail(_) => self.detail_key(key),
            Screen::Burial(_) => self.burial_key(key),
            Screen::Contact(_) => self.contact_key(key),
            Screen::Lgpd(_) => self.lgpd_key(key),
            Screen::Settings(_) => self.settings_key(key),
        }
    }

    fn home_key(&mut self, key: KeyEvent) {
        let searching = matches!(self.current(), Screen::Home(state) if state.searching);
        if !searching {
            match key.code {
                KeyCode::Up => self.dispatch_home(HomeIntent::MenuUp),
                KeyCode::Down => self.dispatch_home(HomeIntent::MenuDown),
                KeyCode::Enter => self.activate_menu(),
                KeyCode::Esc => {
                    self.sequencer.cancel();
                    self.should_quit = true;
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.back_to_menu(),
            KeyCode::Tab | KeyCode::Down => self.dispatch_home(HomeIntent::FocusNext),
            KeyCode::BackTab | KeyCode::Up => self.dispatch_home(HomeIntent::FocusPrev),
            KeyCode::Backspace => self.dispatch_home(HomeIntent::Backspace),
            KeyCode::Enter => self.submit_search(),
            KeyCode::Char(c) => self.dispatch_home(HomeIntent::Input(c)),
            _ => {}
        }
    }

    fn activate_menu(&mut self) {
        let selected = match self.current() {
            Screen::Home(state) => state.menu_selected,
            _ => return,
        };
        let label = MENU_ITEMS[selected];
        let action = match selected {
            0 => PendingAction::OpenSearch,
            1 => PendingAction::Navigate(Nav::Push(Route::Contact)),
            _ => PendingAction::Navigate(Nav::Push(Route::Settings)),
        };
        self.narrate_then(ScreenNarration::MenuChoice { label }, action);
    }

    fn open_search(&mut self) {
        self.dispatch_home(HomeIntent::OpenSearch);
        self.narrate(ScreenNarration::SearchIntro);
    }

    fn back_to_menu(&mut self) {
        self.sequencer.cancel();
        self.dispatch_home(HomeIntent::BackToMenu);
        self.narrate(ScreenNarration::Home);
    }

    fn submit_search(&mut self) {
        let (name, date, loading) = match self.current() {
            Screen::Home(state) => (state.name.clone(), state.date.clone(), state.loading),
            _ => return,
        };
        if loading {
            return;
        }
        if name.trim().is_empty() && date.trim().is_empty() {
            self.set_status("Preencha ao menos o nome ou a data de falecimento.");
            return;
        }

        self.dispatch_home(HomeIntent::SearchStarted);
        let client = self.client.clone();
        let tx = self.events.clone();
        tokio::spawn(async move {
            let result = client
                .search(name.trim(), &format_date_for_api(date.trim()))
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::SearchFinished { result });
        });
    }

    fn results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.dispatch_results(ResultsIntent::MoveUp),
            KeyCode::Down => self.dispatch_results(ResultsIntent::MoveDown),
            KeyCode::Enter => {
                let item = match self.current() {
                    Screen::Results(state) => state.selected_item().cloned(),
                    _ => None,
                };
                if let Some(item) = item {
                    let nome = item.nome.clone().unwrap_or_default();
                    self.narrate_then(
                        ScreenNarration::OpeningMemorial { nome: &nome },
                        PendingAction::Navigate(Nav::Push(Route::Detail { params: item })),
                    );
                }
            }
            KeyCode::Esc => {
                self.navigate(Nav::Replace(Route::Home {
                    voltar_para_busca: true,
                }));
            }
            _ => {}
        }
    }

    fn detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.dispatch_detail(DetailIntent::ScrollUp),
            KeyCode::Down => self.dispatch_detail(DetailIntent::ScrollDown),
            KeyCode::Char('v') => {
                let localsep = match self.current() {
                    Screen::Detail(state) => state
                        .record
                        .as_ref()
                        .map(|r| r.localsep.clone())
                        .or_else(|| state.params.localsep.clone()),
                    _ => None,
                };
                if let Some(localsep) = localsep {
                    // Stash the site so the next biography narration
                    // can prefer it over the record's own field.
                    let store = self.store.clone();
                    let site = localsep.clone();
                    tokio::spawn(async move {
                        if let Err(err) = store.set(keys::BURIAL_SITE, &site).await {
                            tracing::warn!("could not store burial site: {}", err);
                        }
                    });
                    self.navigate(Nav::Push(Route::Burial { localsep }));
                }
            }
            KeyCode::Char('m') => {
                let (email, nome) = match self.current() {
                    Screen::Detail(state) => match &state.record {
                        Some(r) => (r.email.clone(), r.nome.clone()),
                        None => (DEV_EMAIL.to_string(), String::new()),
                    },
                    _ => return,
                };
                let subject = format!("Homenagem para {}", nome);
                opener::open_external(&opener::mailto_url(&email, Some(&subject)));
            }
            KeyCode::Char('c') => self.navigate(Nav::Push(Route::Contact)),
            KeyCode::Esc => self.navigate(Nav::PopToRoot),
            _ => {}
        }
    }

    fn burial_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.dispatch_burial(BurialIntent::MoveUp),
            KeyCode::Down => self.dispatch_burial(BurialIntent::MoveDown),
            KeyCode::Enter => {
                let link = match self.current() {
                    Screen::Burial(state) => state.selected_entry().and_then(|e| {
                        e.memorial_link()
                            .map(|id| (id.to_string(), e.name().to_string()))
                    }),
                    _ => None,
                };
                if let Some((id, nome)) = link {
                    self.navigate(Nav::Push(Route::Detail {
                        params: DeceasedFields::with_id_and_name(id, nome),
                    }));
                }
            }
            KeyCode::Esc => {
                self.navigate(Nav::Replace(Route::Home {
                    voltar_para_busca: true,
                }));
            }
            _ => {}
        }
    }

    fn contact_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.dispatch_contact(ContactIntent::MoveUp),
            KeyCode::Down => self.dispatch_contact(ContactIntent::MoveDown),
            KeyCode::Enter => {
                let action = match self.current() {
                    Screen::Contact(state) => state.selected_action(),
                    _ => return,
                };
                match action {
                    ContactAction::Lgpd => self.navigate(Nav::Push(Route::Lgpd)),
                    ContactAction::Email => {
                        opener::open_external(&opener::mailto_url(DEV_EMAIL, None));
                    }
                    ContactAction::WhatsApp => {
                        opener::open_external(&opener::whatsapp_url(DEV_WHATSAPP));
                    }
                    ContactAction::BackToMenu => self.navigate(Nav::PopToRoot),
                }
            }
            KeyCode::Esc => self.navigate(Nav::PopToRoot),
            _ => {}
        }
    }

    fn lgpd_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.navigate(Nav::Back);
                return;
            }
            KeyCode::Tab | KeyCode::Down => self.dispatch_lgpd(LgpdIntent::FocusNext),
            KeyCode::BackTab | KeyCode::Up => self.dispatch_lgpd(LgpdIntent::FocusPrev),
            KeyCode::Backspace => self.dispatch_lgpd(LgpdIntent::Backspace),
            KeyCode::Enter => {
                let focused = match self.current() {
                    Screen::Lgpd(state) => state.focused,
                    _ => return,
                };
                match focused {
                    LgpdField::Aceite => self.dispatch_lgpd(LgpdIntent::ToggleAceite),
                    LgpdField::Gerar => self.generate_consent(),
                    LgpdField::Voltar => self.navigate(Nav::Back),
                    _ => self.dispatch_lgpd(LgpdIntent::FocusNext),
                }
            }
            KeyCode::Char(' ') => {
                let on_checkbox = matches!(
                    self.current(),
                    Screen::Lgpd(state) if state.focused == LgpdField::Aceite
                );
                if on_checkbox {
                    self.dispatch_lgpd(LgpdIntent::ToggleAceite);
                } else {
                    self.dispatch_lgpd(LgpdIntent::Input(' '));
                }
            }
            KeyCode::Char(c) => self.dispatch_lgpd(LgpdIntent::Input(c)),
            _ => {}
        }
        self.maybe_lookup_cep();
    }

    /// Fires the viacep request when typing just completed the CEP.
    fn maybe_lookup_cep(&mut self) {
        let digits = match self.current() {
            Screen::Lgpd(state) => state.cep_lookup.clone(),
            _ => None,
        };
        let Some(digits) = digits else { return };
        self.dispatch_lgpd(LgpdIntent::CepLookupStarted);

        let client = self.client.clone();
        let tx = self.events.clone();
        tokio::spawn(async move {
            let result = match client.lookup_cep(&digits).await {
                Ok(found) => found,
                Err(err) => {
                    tracing::warn!("CEP lookup failed: {}", err);
                    None
                }
            };
            let _ = tx.send(AppEvent::AddressResolved { result });
        });
    }

    fn generate_consent(&mut self) {
        let form = match self.current() {
            Screen::Lgpd(state) => state.form.clone(),
            _ => return,
        };
        match form.ready() {
            Err(err) => self.set_status(err.to_string()),
            Ok(()) => {
                let tx = self.events.clone();
                tokio::spawn(async move {
                    let html = render_consent_html(&form, chrono::Local::now().date_naive());
                    let path = crate::forms::ConsentForm::output_path();
                    let result = async {
                        if let Some(parent) = path.parent() {
                            tokio::fs::create_dir_all(parent).await?;
                        }
                        tokio::fs::write(&path, html).await?;
                        Ok::<_, std::io::Error>(())
                    }
                    .await;
                    let result = match result {
                        Ok(()) => {
                            let shown = path.display().to_string();
                            opener::open_external(&shown);
                            Ok(shown)
                        }
                        Err(err) => Err(err.to_string()),
                    };
                    let _ = tx.send(AppEvent::ConsentSaved { result });
                });
            }
        }
    }

    fn settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.dispatch_settings(SettingsIntent::MoveUp),
            KeyCode::Down => self.dispatch_settings(SettingsIntent::MoveDown),
            KeyCode::Left => self.settings_change(SettingsIntent::FontDecrease),
            KeyCode::Right => self.settings_change(SettingsIntent::FontIncrease),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let row = match self.current() {
                    Screen::Settings(state) => state.focused_row(),
                    _ => return,
                };
                match row {
                    SettingsRow::Reset => self.settings_change(SettingsIntent::Reset),
                    SettingsRow::FontSize => {}
                    _ => self.settings_change(SettingsIntent::Toggle),
                }
            }
            // Manual walkthrough of every control on the screen.
            KeyCode::Char('n') => self.narrate(ScreenNarration::Settings),
            KeyCode::Esc => self.navigate(Nav::PopToRoot),
            _ => {}
        }
    }

    /// Applies a settings intent, persists what changed, and speaks the
    /// matching confirmations.
    fn settings_change(&mut self, intent: SettingsIntent) {
        let before = match self.current() {
            Screen::Settings(state) => state.snapshot.clone(),
            _ => return,
        };
        let reset = matches!(intent, SettingsIntent::Reset);
        self.dispatch_settings(intent);
        let after = match self.current() {
            Screen::Settings(state) => state.snapshot.clone(),
            _ => return,
        };
        if before == after && !reset {
            return;
        }

        // Keep this screen's narration gating in step with the toggles.
        self.prefs.screen_reader = after.screen_reader;
        self.prefs.speak_menus = after.speak_menus;

        let store = self.store.clone();
        let snapshot = after.clone();
        if reset {
            tokio::spawn(async move {
                if let Err(err) = store.reset_settings().await {
                    tracing::warn!("settings reset failed: {}", err);
                }
            });
            self.sequencer.cancel();
            return;
        }

        tokio::spawn(async move {
            let changed = [
                (keys::NOTIFICATIONS, snapshot.notifications),
                (keys::SCREEN_READER, snapshot.screen_reader),
                (keys::SPEAK_MENUS, snapshot.speak_menus),
                (keys::AUDIO, snapshot.audio),
            ];
            for (key, value) in changed {
                if let Err(err) = store.set_bool(key, value).await {
                    tracing::warn!("could not persist {}: {}", key, err);
                }
            }
            if let Err(err) = store
                .set(keys::FONT_SIZE, &snapshot.font_size.to_string())
                .await
            {
                tracing::warn!("could not persist font size: {}", err);
            }
        });

        if after.screen_reader && !before.screen_reader {
            self.narrate(ScreenNarration::ScreenReaderEnabled);
        } else if !after.screen_reader && before.screen_reader {
            self.sequencer.cancel();
        } else if after.speak_menus && !before.speak_menus {
            self.narrate(ScreenNarration::SpeakMenusEnabled);
        } else if !after.speak_menus && before.speak_menus {
            self.sequencer.cancel();
        }
    }

    // ---- reducer dispatch -----------------------------------------------

    fn dispatch_home(&mut self, intent: HomeIntent) {
        if let Some(Screen::Home(state)) = self.stack.last_mut() {
            *state = HomeReducer::reduce(std::mem::take(state), intent);
        }
    }

    fn dispatch_results(&mut self, intent: ResultsIntent) {
        if let Some(Screen::Results(state)) = self.stack.last_mut() {
            *state = ResultsReducer::reduce(std::mem::take(state), intent);
        }
    }

    fn dispatch_detail(&mut self, intent: DetailIntent) {
        if let Some(Screen::Detail(state)) = self.stack.last_mut() {
            *state = DetailReducer::reduce(std::mem::take(state), intent);
        }
    }

    fn dispatch_burial(&mut self, intent: BurialIntent) {
        if let Some(Screen::Burial(state)) = self.stack.last_mut() {
            *state = BurialReducer::reduce(std::mem::take(state), intent);
        }
    }

    fn dispatch_contact(&mut self, intent: ContactIntent) {
        if let Some(Screen::Contact(state)) = self.stack.last_mut() {
            *state = ContactReducer::reduce(std::mem::take(state), intent);
        }
    }

    fn dispatch_lgpd(&mut self, intent: LgpdIntent) {
        if let Some(Screen::Lgpd(state)) = self.stack.last_mut() {
            *state = LgpdReducer::reduce(std::mem::take(state), intent);
        }
    }

    fn dispatch_settings(&mut self, intent: SettingsIntent) {
        if let Some(Screen::Settings(state)) = self.stack.last_mut() {
            *state = SettingsReducer::reduce(std::mem::take(state), intent);
        }
    }
}

fn make_screen(route: Route) -> Screen {
    match route {
        Route::Home { voltar_para_busca } => Screen::Home(if voltar_para_busca {
            HomeState::returning_to_search()
        } else {
            HomeState::default()
        }),
        Route::Results { items } => Screen::Results(ResultsState::new(items)),
        Route::Detail { params } => Screen::Detail(DetailState::new(params)),
        Route::Burial { localsep } => Screen::Burial(BurialState::new(localsep)),
        Route::Contact => Screen::Contact(ContactState::default()),
        Route::Lgpd => Screen::Lgpd(LgpdState::default()),
        Route::Settings => Screen::Settings(SettingsState::default()),
    }
}
