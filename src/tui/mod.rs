//! Terminal User Interface
//!
//! Full-screen TUI for the detective game using ratatui, and a plain
//! line-oriented console for piped or scripted sessions.

pub mod app;
pub mod plain;
pub mod widgets;

pub use app::App;

use crate::data::Severity;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            border: Color::DarkGray,
            header: Color::Magenta,
        }
    }
}

/// Get color for severity level
pub fn severity_color(severity: &Severity) -> Color {
    match severity {
        Severity::Info => Color::Gray,
        Severity::Low => Color::Blue,
        Severity::Medium => Color::Yellow,
        Severity::High => Color::Red,
    }
}

/// Color for a terminal line, picked from its leading tag
pub fn tag_color(line: &str) -> (Color, bool) {
    if line.starts_with("[ERROR]") || line.starts_with("[FAILED]") {
        (Color::Red, true)
    } else if line.starts_with("[WARN]") {
        (Color::Yellow, true)
    } else if line.starts_with("[SUCCESS]") {
        (Color::Green, true)
    } else if line.starts_with("[ROOM]") {
        (Color::White, true)
    } else if line.starts_with("[CLUE]") {
        (Color::Yellow, false)
    } else if line.starts_with("[SUSPECT]") {
        (Color::Magenta, false)
    } else if line.starts_with("[CASE]") || line.starts_with("[VERDICT]") {
        (Color::Cyan, false)
    } else if line.starts_with("[SYSTEM]") {
        (Color::Cyan, true)
    } else if line.starts_with("[INFO]") || line.starts_with("[EXITS]") {
        (Color::DarkGray, false)
    } else {
        (Color::White, false)
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// ASCII art logo
pub const LOGO: &str = r#"
╔════════════════════════════════════════════════════════════╗
║                                                            ║
║   ██████╗ ███████╗████████╗███████╗ ██████╗████████╗       ║
║   ██╔══██╗██╔════╝╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝       ║
║   ██║  ██║█████╗     ██║   █████╗  ██║        ██║          ║
║   ██║  ██║██╔══╝     ██║   ██╔══╝  ██║        ██║          ║
║   ██████╔╝███████╗   ██║   ███████╗╚██████╗   ██║          ║
║   ╚═════╝ ╚══════╝   ╚═╝   ╚══════╝ ╚═════╝   ╚═╝          ║
║                                                            ║
║              Q U E S T  :  T H E   F I N A L               ║
║                 C H A P T E R   (Verdict)                  ║
║                                                            ║
╚════════════════════════════════════════════════════════════╝
"#;

/// Smaller logo for header
pub const SMALL_LOGO: &str = " DETECTIVE QUEST ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════════════════════╗
║                       CONTROLS                                ║
╠═══════════════════════════════════════════════════════════════╣
║  ←  or l   Go to the room on the left                         ║
║  →  or r   Go to the room on the right                        ║
║  ↑  or b   Go back to the previous room                       ║
║  x         Leave the mansion and go to the verdict            ║
║  :         Type a command (left, right, back, exit)           ║
║  ?         Toggle this help                                   ║
║  Esc       Close help / cancel typing                         ║
╠═══════════════════════════════════════════════════════════════╣
║                       THE CASE                                ║
╠═══════════════════════════════════════════════════════════════╣
║  Each room may hide a clue. Every time you find a clue, the   ║
║  suspect it points to gets one more mark against them, even   ║
║  when you come back to a room you have already searched.      ║
║  An accusation stands with 2 or more marks.                   ║
╚═══════════════════════════════════════════════════════════════╝
"#;

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(1),   // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the game content layout (room panel + main area)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),  // Room panel
            Constraint::Percentage(70),  // Main area
        ])
        .split(area)
        .to_vec()
}

/// Create the main area layout (terminal + case notes)
pub fn create_main_area_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60),  // Narrative/messages
            Constraint::Percentage(40),  // Case notes
        ])
        .split(area)
        .to_vec()
}

/// Rectangle of at most `width` x `height` centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
