//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::MAX_MISSES;
use crate::engine::GameState;
use crate::output::formatters::{create_progress_bar, letter_list};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Prompt
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_parachute(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_prompt(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪂 JUMPER")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_parachute(f: &mut Frame, app: &App, area: Rect) {
    let parachute = app.director.session().parachute();
    let color = if parachute.is_cut_away() {
        Color::Red
    } else {
        Color::White
    };

    let lines: Vec<Line> = parachute
        .render_lines()
        .into_iter()
        .map(|line| Line::styled(line, Style::default().fg(color)))
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Parachute ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word
            Constraint::Length(4), // Misses
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_misses(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let session = app.director.session();
    let color = match app.director.state() {
        GameState::Won => Color::Green,
        GameState::Lost => Color::Red,
        _ => Color::Yellow,
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            session.word_line().to_uppercase(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_misses(f: &mut Frame, app: &App, area: Rect) {
    let session = app.director.session();
    let parachute = session.parachute();
    let wrong = session.wrong_letters();

    let content = vec![
        Line::from(vec![
            Span::raw("Lines: "),
            Span::styled(
                create_progress_bar(parachute.remaining(), MAX_MISSES),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!(" {}/{MAX_MISSES}", parachute.remaining())),
        ]),
        Line::from(vec![
            Span::raw("Misses: "),
            Span::styled(letter_list(&wrong), Style::default().fg(Color::Red)),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(Block::default().title(" Guesses ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_prompt(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.director.state() {
        GameState::AwaitingReplay => (" Play again? y = yes, any other key = quit ", Color::Green),
        _ => (" Type a letter to guess | ESC to quit ", Color::Yellow),
    };

    let prompt = Paragraph::new("").block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );
    f.render_widget(prompt, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.director.stats();
    let status = Paragraph::new(format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        stats.games_played,
        stats.games_won,
        stats.win_rate()
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;
    use crate::engine::Director;
    use crate::wordlists::WordSource;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app(word: &str) -> App {
        App::new(Director::with_word(
            WordSource::seeded(1),
            SecretWord::new(word).unwrap(),
        ))
    }

    #[test]
    fn renders_blank_word_and_full_canopy() {
        let text = draw(&app("hello"));
        assert!(text.contains("_ _ _ _ _"));
        assert!(text.contains("_____"));
        assert!(text.contains("5/5"));
    }

    #[test]
    fn renders_guesses_and_misses() {
        let mut app = app("hello");
        app.director.submit_guess("h").unwrap();
        app.director.submit_guess("z").unwrap();

        let text = draw(&app);
        assert!(text.contains("H _ _ _ _"));
        assert!(text.contains("Misses: z"));
        assert!(text.contains("4/5"));
    }

    #[test]
    fn renders_replay_prompt() {
        let mut app = app("hello");
        for guess in ["h", "e", "l", "o"] {
            app.director.submit_guess(guess).unwrap();
        }
        app.director.prompt_replay().unwrap();

        let text = draw(&app);
        assert!(text.contains("Play again?"));
        assert!(text.contains("Games: 1 | Won: 1"));
    }
}
