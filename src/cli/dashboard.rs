use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use crate::advice::get_financial_advice;
use crate::error::Result;
use crate::fmt::{display_date, money};
use crate::models::{Transaction, TransactionFields, TransactionType, CATEGORIES};
use crate::persist;
use crate::reports::{self, Period};
use crate::store::Store;
use crate::tui::{
    amount_span, render_markup, EXPENSE_STYLE, FOOTER_STYLE, HEADER_STYLE, INCOME_STYLE,
    SELECTED_STYLE,
};

// ---------------------------------------------------------------------------
// Add/edit form
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq)]
enum FormField {
    Description,
    Amount,
    Date,
    Type,
    Category,
}

const FORM_FIELDS: &[FormField] = &[
    FormField::Description,
    FormField::Amount,
    FormField::Date,
    FormField::Type,
    FormField::Category,
];

struct TransactionForm {
    /// Id of the record being edited; None when adding.
    editing: Option<String>,
    field: usize,
    description: String,
    amount: String,
    date: String,
    kind: TransactionType,
    category: String,
    error: Option<String>,
}

impl TransactionForm {
    fn add(today: &str) -> Self {
        Self {
            editing: None,
            field: 0,
            description: String::new(),
            amount: String::new(),
            date: today.to_string(),
            kind: TransactionType::Expense,
            category: String::new(),
            error: None,
        }
    }

    fn edit(txn: &Transaction) -> Self {
        Self {
            editing: Some(txn.id.clone()),
            field: 0,
            description: txn.description.clone(),
            amount: format_amount(txn.amount),
            date: txn.date.clone(),
            kind: txn.kind,
            category: txn.category.clone(),
            error: None,
        }
    }

    fn current(&self) -> FormField {
        FORM_FIELDS[self.field]
    }

    fn next_field(&mut self) {
        self.field = (self.field + 1) % FORM_FIELDS.len();
    }

    fn prev_field(&mut self) {
        self.field = (self.field + FORM_FIELDS.len() - 1) % FORM_FIELDS.len();
    }

    fn insert_char(&mut self, c: char) {
        match self.current() {
            FormField::Description => self.description.push(c),
            FormField::Amount => {
                if c.is_ascii_digit() || c == '.' {
                    self.amount.push(c);
                }
            }
            FormField::Date => {
                if c.is_ascii_digit() || c == '-' {
                    self.date.push(c);
                }
            }
            FormField::Type => {}
            FormField::Category => {}
        }
    }

    fn backspace(&mut self) {
        match self.current() {
            FormField::Description => {
                self.description.pop();
            }
            FormField::Amount => {
                self.amount.pop();
            }
            FormField::Date => {
                self.date.pop();
            }
            _ => {}
        }
    }

    /// Left/right on the type field toggles; on the category field it
    /// steps through the fixed suggestion list.
    fn cycle(&mut self, forward: bool) {
        match self.current() {
            FormField::Type => {
                self.kind = match self.kind {
                    TransactionType::Income => TransactionType::Expense,
                    TransactionType::Expense => TransactionType::Income,
                };
            }
            FormField::Category => {
                let pos = CATEGORIES.iter().position(|c| *c == self.category);
                let next = match (pos, forward) {
                    (Some(i), true) => (i + 1) % CATEGORIES.len(),
                    (Some(i), false) => (i + CATEGORIES.len() - 1) % CATEGORIES.len(),
                    (None, true) => 0,
                    (None, false) => CATEGORIES.len() - 1,
                };
                self.category = CATEGORIES[next].to_string();
            }
            _ => {}
        }
    }

    /// Validate the buffers into a full set of fields, or record a
    /// message to display inline.
    fn validate(&mut self) -> Option<TransactionFields> {
        if self.description.trim().is_empty() {
            self.error = Some("description is required".to_string());
            return None;
        }
        let amount: f64 = match self.amount.trim().parse() {
            Ok(a) if a >= 0.0 => a,
            _ => {
                self.error = Some(format!("invalid amount: {}", self.amount));
                return None;
            }
        };
        if chrono::NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").is_err() {
            self.error = Some(format!("invalid date: {}", self.date));
            return None;
        }
        if self.category.is_empty() {
            self.error = Some("category is required".to_string());
            return None;
        }
        Some(TransactionFields {
            date: self.date.trim().to_string(),
            description: self.description.trim().to_string(),
            amount,
            kind: self.kind,
            category: self.category.clone(),
        })
    }
}

/// Amount buffer shown when editing: drop a trailing ".00".
fn format_amount(amount: f64) -> String {
    if amount == amount.trunc() {
        format!("{}", amount as i64)
    } else {
        format!("{amount}")
    }
}

// ---------------------------------------------------------------------------
// Dashboard state
// ---------------------------------------------------------------------------

enum Screen {
    Login,
    Home,
    Form(TransactionForm),
    ConfirmDelete(String),
}

struct Dashboard {
    store: Store,
    data_path: PathBuf,
    screen: Screen,
    period: Period,
    selected: usize,
    table_offset: usize,
    advice: Option<String>,
    advice_requested: bool,
    advice_scroll: u16,
    status_message: Option<String>,
}

impl Dashboard {
    fn new(store: Store, data_path: PathBuf) -> Self {
        Self {
            store,
            data_path,
            screen: Screen::Login,
            period: Period::default(),
            selected: 0,
            table_offset: 0,
            advice: None,
            advice_requested: false,
            advice_scroll: 0,
            status_message: None,
        }
    }

    fn save(&mut self) {
        if let Err(e) = persist::save(&self.data_path, self.store.transactions()) {
            self.status_message = Some(format!("Save failed: {e}"));
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.store.transactions().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    // --- drawing ---

    fn draw(&mut self, frame: &mut Frame) {
        if matches!(self.screen, Screen::Login) {
            self.draw_login(frame);
            return;
        }
        self.draw_home(frame);
        match &self.screen {
            Screen::Form(form) => draw_form(frame, form, &self.store),
            Screen::ConfirmDelete(_) => self.draw_confirm(frame),
            _ => {}
        }
    }

    fn draw_login(&self, frame: &mut Frame) {
        let area = frame.area();
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(5),
            Constraint::Fill(1),
        ])
        .areas(area);

        let lines = vec![
            Line::from(Span::styled(self.store.tr("appName"), HEADER_STYLE)),
            Line::from(""),
            Line::from(self.store.tr("welcome")),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "Enter={}  l={}  q=quit",
                    self.store.tr("login"),
                    self.store.tr("language")
                ),
                FOOTER_STYLE,
            )),
        ];
        frame.render_widget(Paragraph::new(lines).centered(), middle);
    }

    fn draw_home(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let border_style = Style::default().fg(ratatui::style::Color::DarkGray);

        let [header_area, sep1, cards_area, sep2, body_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        // Header: app name on the left, language on the right
        let lang_label = match self.store.language() {
            crate::models::Language::En => self.store.tr("english"),
            crate::models::Language::Ar => self.store.tr("arabic"),
        };
        let header = Line::from(vec![
            Span::styled(format!(" {}", self.store.tr("appName")), HEADER_STYLE),
            Span::raw("   "),
            Span::styled(
                format!("{}: {}", self.store.tr("language"), lang_label),
                FOOTER_STYLE,
            ),
        ]);
        frame.render_widget(Paragraph::new(header), header_area);

        let sep_line = "━".repeat(area.width as usize);
        let sep_widget = Paragraph::new(sep_line.as_str()).style(border_style);
        frame.render_widget(sep_widget.clone(), sep1);
        frame.render_widget(sep_widget, sep2);

        self.draw_cards(frame, cards_area);

        // Body: transaction table on the left, chart + advice on the right
        let [table_area, right_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(body_area);
        let [chart_area, advice_area] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(right_area);

        self.draw_table(frame, table_area);
        self.draw_chart(frame, chart_area);
        self.draw_advice(frame, advice_area);

        // Hints / status line
        if let Some(msg) = &self.status_message {
            frame.render_widget(
                Paragraph::new(format!(" {msg}"))
                    .style(Style::default().fg(ratatui::style::Color::Yellow)),
                hints_area,
            );
        } else {
            let hints = format!(
                " a={}  e={}  d={}  p={}  l={}  g={}  x={}  q=quit",
                self.store.tr("addTransaction"),
                self.store.tr("edit"),
                self.store.tr("delete"),
                self.store.tr(self.period.toggle().label_key()),
                self.store.tr("language"),
                self.store.tr("adviceFromAI"),
                self.store.tr("logout"),
            );
            frame.render_widget(Paragraph::new(hints).style(FOOTER_STYLE), hints_area);
        }
    }

    fn draw_cards(&self, frame: &mut Frame, area: Rect) {
        let today = chrono::Local::now().date_naive();
        let summary = reports::summarize(self.store.transactions(), self.period, today);

        let [income_area, expense_area, net_area] = Layout::horizontal([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .areas(area);

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let card = |title: String, value: String, style: Style| {
            Paragraph::new(vec![
                Line::from(Span::styled(format!(" {title}"), bold)),
                Line::from(Span::styled(format!(" {value}"), style)),
            ])
        };

        let period_label = self.store.tr(self.period.label_key());
        frame.render_widget(
            card(
                format!("{} ({})", self.store.tr("totalIncome"), period_label),
                money(summary.total_income),
                INCOME_STYLE,
            ),
            income_area,
        );
        frame.render_widget(
            card(
                self.store.tr("totalExpenses").to_string(),
                money(summary.total_expenses),
                EXPENSE_STYLE,
            ),
            expense_area,
        );
        let (net_key, net_style) = if summary.is_profit() {
            ("netProfit", INCOME_STYLE)
        } else {
            ("loss", EXPENSE_STYLE)
        };
        frame.render_widget(
            card(
                self.store.tr(net_key).to_string(),
                money(summary.net),
                net_style,
            ),
            net_area,
        );
    }

    fn draw_table(&mut self, frame: &mut Frame, area: Rect) {
        let transactions = self.store.transactions();
        let title = Line::from(Span::styled(
            format!(" {}", self.store.tr("transactions")),
            Style::default().add_modifier(Modifier::BOLD),
        ));

        if transactions.is_empty() {
            let lines = vec![title, Line::from(""), Line::from(format!("  {}", self.store.tr("noTransactions")))];
            frame.render_widget(Paragraph::new(lines), area);
            return;
        }

        // header + title rows eat two lines
        let visible = area.height.saturating_sub(2).max(1) as usize;
        if self.selected < self.table_offset {
            self.table_offset = self.selected;
        } else if self.selected >= self.table_offset + visible {
            self.table_offset = self.selected + 1 - visible;
        }

        let lang = self.store.language();
        let rows: Vec<Row> = transactions
            .iter()
            .enumerate()
            .skip(self.table_offset)
            .take(visible)
            .map(|(i, txn)| {
                let style = if i == self.selected {
                    SELECTED_STYLE
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(display_date(&txn.date, lang)),
                    Cell::from(txn.description.clone()),
                    Cell::from(amount_span(txn)),
                    Cell::from(txn.category.clone()),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(14),
            Constraint::Fill(1),
            Constraint::Length(12),
            Constraint::Length(14),
        ];
        let table = Table::new(rows, widths)
            .header(
                Row::new(vec![
                    self.store.tr("date"),
                    self.store.tr("description"),
                    self.store.tr("amount"),
                    self.store.tr("category"),
                ])
                .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .column_spacing(1);

        let [title_area, rows_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
        frame.render_widget(Paragraph::new(title), title_area);
        frame.render_widget(table, rows_area);
    }

    fn draw_chart(&self, frame: &mut Frame, area: Rect) {
        let breakdown = reports::expense_breakdown(self.store.transactions());
        let mut lines = vec![Line::from(Span::styled(
            format!(" {}", self.store.tr("expensesByCategory")),
            Style::default().add_modifier(Modifier::BOLD),
        ))];

        if breakdown.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(format!("  {}", self.store.tr("noExpenseData"))));
            frame.render_widget(Paragraph::new(lines), area);
            return;
        }

        let max = breakdown.iter().map(|c| c.total).fold(0.0f64, f64::max);
        let name_width = breakdown
            .iter()
            .map(|c| c.category.chars().count())
            .max()
            .unwrap_or(8)
            .min(16);
        let bar_space = (area.width as usize).saturating_sub(name_width + 14).max(4);

        for item in breakdown.iter().take(area.height.saturating_sub(1) as usize) {
            let filled = if max > 0.0 {
                ((item.total / max) * bar_space as f64).round() as usize
            } else {
                0
            };
            lines.push(Line::from(vec![
                Span::raw(format!(" {:<name_width$} ", item.category)),
                Span::styled("█".repeat(filled.max(1)), EXPENSE_STYLE),
                Span::raw(format!(" {}", money(item.total))),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn draw_advice(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            format!(" {}", self.store.tr("adviceFromAI")),
            Style::default().add_modifier(Modifier::BOLD),
        ))];

        if self.advice_requested {
            lines.push(Line::from(""));
            lines.push(Line::from(format!("  {}", self.store.tr("generatingAdvice"))));
        } else if let Some(text) = &self.advice {
            lines.push(Line::from(""));
            lines.extend(render_markup(text, area.width.saturating_sub(2) as usize));
        } else {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  g = {}", self.store.tr("getFinancialAdvice")),
                FOOTER_STYLE,
            )));
        }

        frame.render_widget(
            Paragraph::new(lines).scroll((self.advice_scroll, 0)),
            area,
        );
    }

    fn draw_confirm(&self, frame: &mut Frame) {
        let area = frame.area();
        let width = (area.width.saturating_sub(4)).min(60);
        let popup = centered_rect(area, width, 4);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!(" {}", self.store.tr("confirmDelete")),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(" y=yes  n=no", FOOTER_STYLE)),
        ];
        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).style(SELECTED_STYLE), popup);
    }

    // --- key handling ---

    /// Returns true when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.screen {
            Screen::Login => self.handle_login_key(code),
            Screen::Home => self.handle_home_key(code),
            Screen::Form(_) => {
                self.handle_form_key(code);
                false
            }
            Screen::ConfirmDelete(_) => {
                self.handle_confirm_key(code);
                false
            }
        }
    }

    fn handle_login_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Enter => {
                self.store.login();
                self.screen = Screen::Home;
            }
            KeyCode::Char('l') => {
                let lang = self.store.language().toggle();
                self.store.set_language(lang);
            }
            KeyCode::Char('q') => return true,
            _ => {}
        }
        false
    }

    fn handle_home_key(&mut self, code: KeyCode) -> bool {
        self.status_message = None;
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                let len = self.store.transactions().len();
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
            }
            KeyCode::Char('p') => self.period = self.period.toggle(),
            KeyCode::Char('l') => {
                let lang = self.store.language().toggle();
                self.store.set_language(lang);
            }
            KeyCode::Char('a') => {
                let today = chrono::Local::now().format("%Y-%m-%d").to_string();
                self.screen = Screen::Form(TransactionForm::add(&today));
            }
            KeyCode::Char('e') => {
                if let Some(txn) = self.store.transactions().get(self.selected) {
                    self.screen = Screen::Form(TransactionForm::edit(txn));
                }
            }
            KeyCode::Char('d') => {
                if let Some(txn) = self.store.transactions().get(self.selected) {
                    self.screen = Screen::ConfirmDelete(txn.id.clone());
                }
            }
            KeyCode::Char('g') => {
                // Ignore repeat presses while a request is in flight
                if !self.advice_requested {
                    self.advice = None;
                    self.advice_scroll = 0;
                    self.advice_requested = true;
                }
            }
            KeyCode::PageUp => self.advice_scroll = self.advice_scroll.saturating_sub(3),
            KeyCode::PageDown => {
                if self.advice.is_some() {
                    self.advice_scroll = self.advice_scroll.saturating_add(3);
                }
            }
            KeyCode::Char('x') => {
                self.store.logout();
                self.advice = None;
                self.screen = Screen::Login;
            }
            KeyCode::Char('q') => return true,
            _ => {}
        }
        false
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        let Screen::Form(form) = &mut self.screen else {
            return;
        };
        match code {
            KeyCode::Esc => self.screen = Screen::Home,
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left => form.cycle(false),
            KeyCode::Right => form.cycle(true),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.insert_char(c),
            KeyCode::Enter => {
                form.error = None;
                if let Some(fields) = form.validate() {
                    match form.editing.clone() {
                        Some(id) => {
                            let record = Transaction {
                                id,
                                date: fields.date,
                                description: fields.description,
                                amount: fields.amount,
                                kind: fields.kind,
                                category: fields.category,
                            };
                            // A record deleted out from under the form is a
                            // silent miss; the collection stays unchanged.
                            self.store.update_transaction(record);
                        }
                        None => {
                            self.store.add_transaction(fields);
                            self.selected = 0;
                        }
                    }
                    self.save();
                    self.screen = Screen::Home;
                }
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, code: KeyCode) {
        let Screen::ConfirmDelete(id) = &self.screen else {
            return;
        };
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                let id = id.clone();
                self.store.delete_transaction(&id);
                self.save();
                self.clamp_selection();
                self.screen = Screen::Home;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.screen = Screen::Home;
            }
            _ => {}
        }
    }
}

fn draw_form(frame: &mut Frame, form: &TransactionForm, store: &Store) {
    let area = frame.area();
    let width = (area.width.saturating_sub(4)).min(52);
    let popup = centered_rect(area, width, 10);

    let title_key = if form.editing.is_some() {
        "editTransaction"
    } else {
        "addTransaction"
    };

    let field_line = |field: FormField, label: &str, value: String| {
        let marker = if form.current() == field { ">" } else { " " };
        let style = if form.current() == field {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(Span::styled(format!(" {marker} {label:<12} {value}"), style))
    };

    let category = if form.category.is_empty() {
        format!("({})", store.tr("selectCategory"))
    } else {
        form.category.clone()
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {}", store.tr(title_key)),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line(FormField::Description, store.tr("description"), form.description.clone()),
        field_line(FormField::Amount, store.tr("amount"), form.amount.clone()),
        field_line(FormField::Date, store.tr("date"), form.date.clone()),
        field_line(FormField::Type, store.tr("type"), store.tr(form.kind.as_str()).to_string()),
        field_line(FormField::Category, store.tr("category"), category),
        Line::from(""),
    ];
    if let Some(err) = &form.error {
        lines.push(Line::from(Span::styled(
            format!(" {err}"),
            EXPENSE_STYLE,
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!(
                " Enter={}  Esc={}  Tab/←/→=fields",
                store.tr("save"),
                store.tr("cancel")
            ),
            FOOTER_STYLE,
        )));
    }

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).style(SELECTED_STYLE), popup);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(lang: crate::models::Language) -> Result<()> {
    let data_path = persist::data_file();
    let transactions = persist::load(&data_path)?;
    let mut store = Store::new(transactions);
    store.set_language(lang);

    let mut dashboard = Dashboard::new(store, data_path);

    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        hook(info);
    }));

    let mut terminal = ratatui::init();

    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| dashboard.draw(frame)) {
            break Err(e.into());
        }

        // The one suspension point: the frame above shows the generating
        // state, then this call blocks the loop, so the trigger key
        // cannot re-enter while the request is in flight.
        if dashboard.advice_requested {
            let text = get_financial_advice(
                dashboard.store.transactions(),
                dashboard.store.language(),
            );
            dashboard.advice = Some(text);
            dashboard.advice_requested = false;
            continue;
        }

        match event::read() {
            Err(e) => break Err(e.into()),
            Ok(Event::Key(key)) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    break Ok(());
                }
                if dashboard.handle_key(key.code) {
                    break Ok(());
                }
            }
            _ => {}
        }
    };

    drop(terminal);
    ratatui::restore();
    result
}
