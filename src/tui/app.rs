//! Main application state and rendering

use crate::data::{Fixture, Severity};
use crate::game::exploration::{Command, Direction as Move};
use crate::game::verdict::Verdict;
use crate::game::{Game, GameMessage, GamePhase};
use crate::tui::widgets::{DramaticBox, EvidenceMeter};
use crate::tui::{centered_rect, severity_color, styled_block, tag_color, Theme, HELP_TEXT, LOGO, SMALL_LOGO};
use crate::tui::{create_content_layout, create_main_area_layout, create_main_layout};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Application state
pub struct App {
    pub game: Game,
    pub fixture: Fixture,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub current_screen: Screen,
    pub menu_state: ListState,
    pub input_buffer: String,
    pub input_mode: InputMode,
}

/// Current screen being displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Title,
    Exploring,
    Accusation,
    Verdict,
}

/// Input mode for the prompt line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Typing,
}

const MENU_ITEMS: [&str; 3] = ["Enter the mansion", "How to play", "Quit"];

impl App {
    pub fn new(fixture: Fixture) -> crate::Result<Self> {
        let game = Game::new(&fixture)?;
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));

        Ok(Self {
            game,
            fixture,
            theme: Theme::default(),
            running: true,
            show_help: false,
            current_screen: Screen::Title,
            menu_state,
            input_buffer: String::new(),
            input_mode: InputMode::Normal,
        })
    }

    /// Handle keyboard input. Returns `false` once the player quits.
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(true);
                }
                self.handle_key(key.code);
            }
        }
        Ok(self.running)
    }

    /// Apply one key press to the current screen
    pub fn handle_key(&mut self, code: KeyCode) {
        if self.input_mode == InputMode::Typing {
            match code {
                KeyCode::Enter => self.submit_input(),
                KeyCode::Esc if self.current_screen == Screen::Exploring => {
                    self.input_buffer.clear();
                    self.input_mode = InputMode::Normal;
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Esc if self.show_help => self.show_help = false,
            _ => match self.current_screen {
                Screen::Title => self.handle_title_key(code),
                Screen::Exploring => self.handle_exploring_key(code),
                Screen::Accusation => {}
                Screen::Verdict => match code {
                    KeyCode::Enter => self.restart(),
                    KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                    _ => {}
                },
            },
        }
    }

    fn handle_title_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.navigate_up(),
            KeyCode::Down => self.navigate_down(),
            KeyCode::Char('q') => self.running = false,
            KeyCode::Enter => match self.menu_state.selected() {
                Some(0) => self.current_screen = Screen::Exploring,
                Some(1) => self.show_help = true,
                Some(2) => self.running = false,
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_exploring_key(&mut self, code: KeyCode) {
        let code = match code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        let command = match code {
            KeyCode::Left | KeyCode::Char('l') => Command::Go(Move::Left),
            KeyCode::Right | KeyCode::Char('r') => Command::Go(Move::Right),
            KeyCode::Up | KeyCode::Char('b') => Command::Go(Move::Back),
            KeyCode::Char('x') => Command::ExitToVerdict,
            KeyCode::Char(':') | KeyCode::Char('/') => {
                self.input_mode = InputMode::Typing;
                self.input_buffer.clear();
                return;
            }
            KeyCode::Char(c) => {
                self.game.execute_input(&c.to_string());
                self.sync_screen();
                return;
            }
            _ => return,
        };
        self.game.execute_command(command);
        self.sync_screen();
    }

    /// Submit whatever was typed on the prompt line
    fn submit_input(&mut self) {
        let typed = std::mem::take(&mut self.input_buffer);
        match self.current_screen {
            Screen::Accusation => {
                self.game.accuse(typed.trim());
            }
            _ => {
                self.game.execute_input(typed.trim());
            }
        }
        self.input_mode = InputMode::Normal;
        self.sync_screen();
    }

    /// Follow the game phase onto the matching screen
    fn sync_screen(&mut self) {
        match self.game.phase {
            GamePhase::Exploring => {}
            GamePhase::Accusation => {
                self.current_screen = Screen::Accusation;
                self.input_mode = InputMode::Typing;
            }
            GamePhase::Concluded { .. } => {
                self.current_screen = Screen::Verdict;
                self.input_mode = InputMode::Normal;
            }
        }
    }

    /// Start a fresh session in the same mansion
    fn restart(&mut self) {
        match Game::new(&self.fixture) {
            Ok(game) => {
                self.game = game;
                self.current_screen = Screen::Title;
                self.menu_state.select(Some(0));
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
            }
            Err(err) => self.game.add_message(GameMessage::alert(
                Severity::High,
                "ERROR",
                &format!("Could not start a new case: {}", err),
            )),
        }
    }

    fn navigate_up(&mut self) {
        let i = self.menu_state.selected().unwrap_or(0);
        if i > 0 {
            self.menu_state.select(Some(i - 1));
        }
    }

    fn navigate_down(&mut self) {
        let i = self.menu_state.selected().unwrap_or(0);
        if i + 1 < MENU_ITEMS.len() {
            self.menu_state.select(Some(i + 1));
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        match self.current_screen {
            Screen::Title => self.render_title(frame),
            Screen::Exploring | Screen::Accusation => self.render_game(frame),
            Screen::Verdict => {
                self.render_game(frame);
                self.render_verdict(frame);
            }
        }

        // Overlay help if showing
        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    fn render_title(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(16),  // Logo
                Constraint::Length(5),   // Menu
                Constraint::Min(0),
            ])
            .split(area);

        let logo = Paragraph::new(LOGO)
            .style(Style::default().fg(self.theme.header))
            .alignment(Alignment::Center);
        frame.render_widget(logo, chunks[0]);

        let items: Vec<ListItem> = MENU_ITEMS.iter().map(|item| ListItem::new(format!("  {}", item))).collect();
        let menu = List::new(items)
            .block(styled_block("Menu", &self.theme))
            .highlight_style(Style::default().fg(self.theme.accent).add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(menu, centered_rect(40, 5, chunks[1]), &mut self.menu_state);
    }

    fn render_game(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = create_main_layout(area);

        self.render_header(frame, layout[0]);

        let content_layout = create_content_layout(layout[1]);
        self.render_room_panel(frame, content_layout[0]);

        let main_layout = create_main_area_layout(content_layout[1]);
        self.render_messages(frame, main_layout[0]);
        self.render_case_notes(frame, main_layout[1]);

        self.render_status_bar(frame, layout[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(19),
                Constraint::Min(20),
                Constraint::Length(16),
            ])
            .split(area);

        let logo = Paragraph::new(SMALL_LOGO)
            .style(Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border)));
        frame.render_widget(logo, header_layout[0]);

        let exploration = &self.game.exploration;
        let path = exploration.mansion().path_to(exploration.current()).join(" › ");
        let title = Paragraph::new(path)
            .style(Style::default().fg(self.theme.warning))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border)));
        frame.render_widget(title, header_layout[1]);

        let rooms = Paragraph::new(format!(" Rooms {} ", self.game.stats.rooms_entered))
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border)));
        frame.render_widget(rooms, header_layout[2]);
    }

    fn render_room_panel(&self, frame: &mut Frame, area: Rect) {
        let room = self.game.exploration.current_room();

        let mut lines = vec![
            Line::from(Span::styled(
                room.name().to_string(),
                Style::default().fg(self.theme.fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        match room.clue() {
            Some(clue) => lines.push(Line::from(vec![
                Span::raw("Clue: "),
                Span::styled(format!("\"{}\"", clue), Style::default().fg(self.theme.warning)),
            ])),
            None => lines.push(Line::from(Span::styled(
                "No clue here.",
                Style::default().fg(Color::DarkGray),
            ))),
        }
        lines.push(Line::from(""));

        if self.game.phase == GamePhase::Exploring {
            lines.push(Line::from(Span::styled("Exits:", Style::default().fg(self.theme.accent))));
            for (direction, name) in self.game.available_moves() {
                let arrow = match direction {
                    Move::Left => "←",
                    Move::Right => "→",
                    Move::Back => "↑",
                };
                lines.push(Line::from(format!("  [{}] {} {}", direction.key(), arrow, name)));
            }
            lines.push(Line::from("  [x] Go to the verdict"));
        } else {
            lines.push(Line::from(Span::styled(
                "You have left the mansion.",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let panel = Paragraph::new(lines)
            .block(styled_block("Room", &self.theme))
            .wrap(Wrap { trim: true });
        frame.render_widget(panel, area);
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),      // Terminal output
                Constraint::Length(3),   // Input line
            ])
            .split(area);

        let log = &self.game.message_log;
        let visible_lines = chunks[0].height.saturating_sub(2) as usize;
        let start = log.len().saturating_sub(visible_lines);
        let output_lines: Vec<Line> = log[start..]
            .iter()
            .map(|message| {
                let text = message.line();
                let (color, bold) = tag_color(&text);
                let style = if bold {
                    Style::default().fg(color).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(color)
                };
                if message.severity > Severity::Info {
                    Line::from(vec![
                        Span::styled(
                            format!("{} ", message.severity.symbol()),
                            Style::default().fg(severity_color(&message.severity)),
                        ),
                        Span::styled(text, style),
                    ])
                } else {
                    Line::from(Span::styled(text, style))
                }
            })
            .collect();

        let terminal = Paragraph::new(output_lines)
            .block(styled_block("Case Log", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(terminal, chunks[0]);

        let typing = self.input_mode == InputMode::Typing;
        let (label, prompt) = match self.current_screen {
            Screen::Accusation => (" Accusation ", format!("accuse> {}_", self.input_buffer)),
            _ if typing => (" Command ", format!("detective> {}_", self.input_buffer)),
            _ => (" Command ", "detective> [Press : to type a command]".to_string()),
        };
        let color = if typing { self.theme.success } else { self.theme.border };

        let input = Paragraph::new(prompt)
            .style(Style::default().fg(if typing { self.theme.success } else { Color::DarkGray }))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(label),
            );
        frame.render_widget(input, chunks[1]);
    }

    fn render_case_notes(&self, frame: &mut Frame, area: Rect) {
        let block = styled_block("Case Notes", &self.theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let clues = self.game.exploration.clues();
        let clue_lines: Vec<Line> = if clues.is_empty() {
            vec![Line::from(Span::styled("No clues yet", Style::default().fg(Color::DarkGray)))]
        } else {
            clues.iter_sorted().map(|clue| Line::from(format!("• {}", clue))).collect()
        };
        let clue_list = Paragraph::new(clue_lines)
            .block(Block::default().title(" Clues ").title_style(Style::default().fg(self.theme.warning)))
            .wrap(Wrap { trim: true });
        frame.render_widget(clue_list, halves[0]);

        let tally = self.game.exploration.tally();
        let tally_area = halves[1];
        let title = format!(" Suspects {}/{} ", tally.len(), tally.capacity());
        frame.render_widget(
            Paragraph::new(Span::styled(title, Style::default().fg(self.theme.alert))),
            Rect::new(tally_area.x, tally_area.y, tally_area.width, 1),
        );
        for (i, entry) in tally.iter().enumerate() {
            let y = tally_area.y + 1 + i as u16;
            if y >= tally_area.y + tally_area.height {
                break;
            }
            frame.render_widget(
                EvidenceMeter::new(&entry.suspect, entry.count),
                Rect::new(tally_area.x + 1, y, tally_area.width.saturating_sub(1), 1),
            );
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status = Paragraph::new(format!(" {} | Press ? for help ", self.game.check_status()))
            .style(Style::default().fg(self.theme.fg).bg(Color::DarkGray));
        frame.render_widget(status, area);
    }

    fn render_verdict(&self, frame: &mut Frame) {
        let GamePhase::Concluded { accused, verdict } = &self.game.phase else {
            return;
        };

        let mut lines = vec![String::new()];
        if !accused.is_empty() {
            lines.push(format!("Accused: {}", accused));
        }
        if let Some(count) = verdict.count() {
            lines.push(format!("Clues pointing to them: {}", count));
        }
        lines.push(String::new());
        lines.push(verdict.consequence(accused));
        lines.push(String::new());
        lines.push("Enter: play again   q: quit".to_string());

        let color = if verdict.is_sufficient() {
            self.theme.success
        } else if *verdict == Verdict::Invalid {
            self.theme.warning
        } else {
            self.theme.alert
        };

        let popup = centered_rect(64, lines.len() as u16 + 2, frame.area());
        frame.render_widget(Clear, popup);
        frame.render_widget(
            DramaticBox::new(&format!("VERDICT: {}", verdict))
                .content(lines)
                .border_color(color),
            popup,
        );
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let popup_area = centered_rect(70, 22, frame.area());
        frame.render_widget(Clear, popup_area);

        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(self.theme.fg))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.accent)));
        frame.render_widget(help, popup_area);
    }
}
