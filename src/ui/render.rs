//! Screen rendering. Layout is deliberately plain: a header, the
//! active screen's body, and a footer with the key hints.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::forms::validate_cpf;
use crate::textfmt::{approximate_age, display_date_or_unknown, format_date_display};
use crate::ui::app::{App, Screen};
use crate::ui::contact::CONTACT_ACTIONS;
use crate::ui::home::{HomeState, SearchFocus, MENU_ITEMS};
use crate::ui::lgpd::{LgpdField, LgpdState, LGPD_FIELDS};
use crate::ui::settings::{SettingsRow, SettingsState};

const ACCENT: Color = Color::LightBlue;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0]);
    match app.current() {
        Screen::Home(state) => draw_home(frame, chunks[1], state),
        Screen::Results(state) => draw_results(frame, chunks[1], state),
        Screen::Detail(state) => draw_detail(frame, chunks[1], app, state),
        Screen::Burial(state) => draw_burial(frame, chunks[1], state),
        Screen::Contact(state) => draw_contact(frame, chunks[1], state),
        Screen::Lgpd(state) => draw_lgpd(frame, chunks[1], state),
        Screen::Settings(state) => draw_settings(frame, chunks[1], state),
    }
    draw_footer(frame, chunks[2], app);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "MEMORIAL ETERNUM",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "\"Preservando a memória daqueles que marcaram sua vida.\"",
            Style::default().fg(Color::Gray),
        )),
    ])
    .centered();
    frame.render_widget(title, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.current() {
        Screen::Home(state) if state.searching => {
            "Tab campos · Enter pesquisar · Esc voltar ao menu"
        }
        Screen::Home(_) => "↑↓ navegar · Enter abrir · Esc sair",
        Screen::Results(_) => "↑↓ navegar · Enter abrir memorial · Esc voltar para pesquisa",
        Screen::Detail(_) => "↑↓ rolar · v sepultados · m mensagem · c contato · Esc menu",
        Screen::Burial(_) => "↑↓ navegar · Enter abrir memorial · Esc voltar para pesquisa",
        Screen::Contact(_) => "↑↓ navegar · Enter abrir · Esc menu",
        Screen::Lgpd(_) => "Tab campos · Enter confirmar · Esc voltar",
        Screen::Settings(_) => "↑↓ navegar · Enter alternar · ←→ fonte · n narrar · Esc menu",
    };
    let mut lines = vec![Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))];
    if let Some(status) = app.status_line() {
        lines.insert(
            0,
            Line::from(Span::styled(status, Style::default().fg(Color::Yellow))),
        );
    }
    frame.render_widget(Paragraph::new(lines).centered(), area);
}

fn selected_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::Black).bg(ACCENT)
    } else {
        Style::default()
    }
}

fn draw_home(frame: &mut Frame, area: Rect, state: &HomeState) {
    if !state.searching {
        let items: Vec<ListItem> = MENU_ITEMS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                ListItem::new(Line::from(Span::styled(
                    format!("  {}  ", label),
                    selected_style(i == state.menu_selected),
                )))
            })
            .collect();
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Menu"));
        frame.render_widget(list, centered(area, 40, 7));
        return;
    }

    let field = |label: &str, value: &str, focused: bool| {
        Line::from(vec![
            Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
            Span::styled(value.to_string(), selected_style(focused)),
        ])
    };
    let mut lines = vec![
        Line::from(Span::styled(
            "Busca de Falecido",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        field(
            "Nome",
            if state.name.is_empty() {
                "digite aqui o nome ou parte do nome"
            } else {
                &state.name
            },
            state.focus == SearchFocus::Name,
        ),
        Line::from(Span::styled("Ou", Style::default().fg(Color::DarkGray))),
        field(
            "Data de falecimento",
            if state.date.is_empty() {
                "DD/MM/AAAA"
            } else {
                &state.date
            },
            state.focus == SearchFocus::Date,
        ),
        Line::default(),
        Line::from(Span::styled(
            "[ Pesquisar ]",
            selected_style(state.focus == SearchFocus::Submit),
        )),
    ];
    if state.loading {
        lines.push(Line::default());
        lines.push(Line::from("Carregando..."));
    }
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        centered(area, 60, 12),
    );
}

fn draw_results(frame: &mut Frame, area: Rect, state: &crate::ui::results::ResultsState) {
    if state.items.is_empty() {
        frame.render_widget(
            Paragraph::new("Nenhum resultado encontrado.").centered(),
            area,
        );
        return;
    }
    let items: Vec<ListItem> = state
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let nome = item.nome.as_deref().unwrap_or("");
            let falec = format_date_display(item.falec.as_deref().unwrap_or(""));
            ListItem::new(vec![
                Line::from(Span::styled(
                    nome.to_string(),
                    selected_style(i == state.selected).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("Falecimento: {}", falec),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Resultados da busca"),
    );
    frame.render_widget(list, area);
}

fn draw_detail(frame: &mut Frame, area: Rect, app: &App, state: &crate::ui::detail::DetailState) {
    let Some(record) = &state.record else {
        frame.render_widget(Paragraph::new("Carregando...").centered(), area);
        return;
    };

    let idade = approximate_age(&record.nasc, &record.falec);
    let mut lines = vec![
        Line::from(Span::styled(
            record.nome.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "🌠 {}   ✝ {}",
            display_date_or_unknown(&record.nasc),
            display_date_or_unknown(&record.falec)
        )),
    ];
    if !idade.is_empty() {
        lines.push(Line::from(idade));
    }
    if let Some(count) = state.visit_count {
        lines.push(Line::from(format!(
            "{} visita{}",
            count,
            if count == 1 { "" } else { "s" }
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("Foto: {}", app.photo_url(&record.id)),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::default());
    lines.push(Line::from(format!("Pai: {}", record.pai)));
    lines.push(Line::from(format!("Mãe: {}", record.mae)));
    lines.push(Line::from(format!("Sepultura: {}", record.localsep)));
    lines.push(Line::from(Span::styled(
        "(v) Veja quem mais está sepultado aqui",
        Style::default().fg(ACCENT),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "História",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(record.historia.clone()));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "(m) Deixe sua mensagem   (c) Quer fazer um memorial como este?",
        Style::default().fg(ACCENT),
    )));

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0))
        .block(Block::default().borders(Borders::ALL).title("Memorial"));
    frame.render_widget(body, area);
}

fn draw_burial(frame: &mut Frame, area: Rect, state: &crate::ui::burial::BurialState) {
    let title = format!(
        "Sepultados na {}",
        if state.localsep.is_empty() {
            "Local não informado"
        } else {
            state.localsep.as_str()
        }
    );

    if state.loading {
        frame.render_widget(Paragraph::new("Carregando...").centered(), area);
        return;
    }
    let entries = state.entries.as_deref().unwrap_or(&[]);
    if entries.is_empty() {
        frame.render_widget(
            Paragraph::new("Ninguém encontrado neste local.")
                .centered()
                .block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
        return;
    }
    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let marker = if entry.has_memorial() { " 📜" } else { "" };
            let style = if entry.has_memorial() {
                selected_style(i == state.selected).add_modifier(Modifier::BOLD)
            } else {
                selected_style(i == state.selected)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}", entry.name(), marker),
                style,
            )))
        })
        .collect();
    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn draw_contact(frame: &mut Frame, area: Rect, state: &crate::ui::contact::ContactState) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Criador e Desenvolvedor",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from("Douglas Dias Borges"),
        Line::from(Span::styled(
            "Criando soluções que conectam memórias e histórias.",
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
    ];
    for (i, (_, label)) in CONTACT_ACTIONS.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("  {}  ", label),
            selected_style(i == state.selected),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .centered()
            .block(Block::default().borders(Borders::ALL).title("Contato")),
        centered(area, 60, 12),
    );
}

fn draw_lgpd(frame: &mut Frame, area: Rect, state: &LgpdState) {
    let mut lines = vec![
        Line::from(Span::styled(
            "TERMO DE CONSENTIMENTO",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Lei Geral de Proteção de Dados - LGPD (Lei nº 13.709/2018)",
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
    ];
    for field in LGPD_FIELDS {
        let focused = state.focused == field;
        let line = match field {
            LgpdField::Aceite => Line::from(Span::styled(
                format!(
                    "{} {}",
                    if state.form.aceite { "☑" } else { "☐" },
                    field.label()
                ),
                selected_style(focused),
            )),
            LgpdField::Gerar => Line::from(Span::styled(
                format!("[ {} ]", field.label()),
                selected_style(focused),
            )),
            LgpdField::Voltar => Line::from(Span::styled(
                format!("[ {} ]", field.label()),
                selected_style(focused),
            )),
            _ => {
                let value = match field {
                    LgpdField::Nome => &state.form.nome,
                    LgpdField::Cpf => &state.form.cpf,
                    LgpdField::Nascimento => &state.form.data_nascimento,
                    LgpdField::Cep => &state.form.cep,
                    LgpdField::Endereco => &state.form.endereco,
                    LgpdField::Numero => &state.form.numero,
                    LgpdField::Telefone => &state.form.telefone,
                    LgpdField::Email => &state.form.email,
                    _ => unreachable!("handled above"),
                };
                let suffix = match field {
                    LgpdField::Cpf if !state.form.cpf.is_empty() => {
                        if validate_cpf(&state.form.cpf) {
                            " ✓"
                        } else {
                            " ✗"
                        }
                    }
                    LgpdField::Cep if state.looking_up_cep => " ...",
                    LgpdField::Cep if state.form.cep_valido => " ✓",
                    _ => "",
                };
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", field.label()),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(value.to_string(), selected_style(focused)),
                    Span::raw(suffix),
                ])
            }
        };
        lines.push(line);
    }
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Autorização LGPD")),
        area,
    );
}

fn draw_settings(frame: &mut Frame, area: Rect, state: &SettingsState) {
    let rows = state.rows();
    let mut lines = vec![
        Line::from(Span::styled(
            "Configurações do Aplicativo",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    for (i, row) in rows.iter().enumerate() {
        let focused = i == state.focused.min(rows.len() - 1);
        let value = match row {
            SettingsRow::Notifications => on_off(state.snapshot.notifications),
            SettingsRow::ScreenReader => on_off(state.snapshot.screen_reader),
            SettingsRow::SpeakMenus => on_off(state.snapshot.speak_menus),
            SettingsRow::FontSize => format!("{}  (− / +)", state.snapshot.font_size),
            SettingsRow::Reset => String::new(),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<40}", row.label()),
                selected_style(focused),
            ),
            Span::raw(value),
        ]));
    }
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Configurações")),
        centered(area, 64, 12),
    );
}

fn on_off(value: bool) -> String {
    if value { "ativado" } else { "desativado" }.to_string()
}

/// Centers a box of at most `width` x `height` inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
