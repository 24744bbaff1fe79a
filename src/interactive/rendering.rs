//! TUI rendering with ratatui

use super::app::{App, Theme};
use crate::output::formatters::plural;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Colours for one theme
struct Palette {
    text: Color,
    background: Color,
    accent: Color,
    muted: Color,
    error: Color,
    highlight: Color,
}

const fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            text: Color::Green,
            background: Color::Black,
            accent: Color::LightGreen,
            muted: Color::DarkGray,
            error: Color::Red,
            highlight: Color::Yellow,
        },
        Theme::Light => Palette {
            text: Color::Black,
            background: Color::White,
            accent: Color::Blue,
            muted: Color::Gray,
            error: Color::Red,
            highlight: Color::Magenta,
        },
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let colors = palette(app.theme);

    f.render_widget(
        Block::default().style(Style::default().fg(colors.text).bg(colors.background)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input
            Constraint::Length(3), // Suggestions
            Constraint::Length(1), // Error
            Constraint::Min(6),    // Words and guesses
            Constraint::Length(1), // Help bar
        ])
        .split(f.area());

    render_header(f, &colors, chunks[0]);
    render_input(f, app, &colors, chunks[1]);
    render_suggestions(f, app, &colors, chunks[2]);
    render_error(f, app, &colors, chunks[3]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[4]);

    render_candidates(f, app, &colors, main_chunks[0]);
    render_guesses(f, app, &colors, main_chunks[1]);

    render_help(f, &colors, chunks[5]);
}

fn render_header(f: &mut Frame, colors: &Palette, area: Rect) {
    let header = Paragraph::new("FALLOUT HACKING SOLVER")
        .style(Style::default().fg(colors.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(colors.accent)),
        );
    f.render_widget(header, area);
}

fn render_input(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let border = if app.session.error().is_some() {
        colors.error
    } else {
        colors.highlight
    };

    let content = if app.input.is_empty() {
        Line::from(Span::styled("WORD LIKENESS", Style::default().fg(colors.muted)))
    } else {
        Line::from(Span::styled(
            app.input.as_str(),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        ))
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .title(" Guess (e.g. ARCHITECTS 3) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(border)),
    );

    f.render_widget(input, area);
}

fn render_suggestions(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let suggestions = app.suggestions();

    let content = if suggestions.is_empty() {
        Line::from(Span::styled(
            "Possible words will appear here",
            Style::default().fg(colors.muted),
        ))
    } else {
        let joined = suggestions
            .iter()
            .map(|w| w.text())
            .collect::<Vec<_>>()
            .join(" ");
        Line::from(joined)
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Suggestions ")
            .borders(Borders::ALL)
            .style(Style::default().fg(colors.text)),
    );

    f.render_widget(paragraph, area);
}

fn render_error(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    if let Some(error) = app.session.error() {
        let paragraph = Paragraph::new(error.to_string())
            .style(Style::default().fg(colors.error).add_modifier(Modifier::BOLD));
        f.render_widget(paragraph, area);
    }
}

fn render_candidates(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let candidates = app.candidates();

    let title = if app.session.is_empty() {
        " Possible words ".to_string()
    } else {
        format!(" Possible words ({}) ", plural(candidates.len(), "word", "words"))
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(colors.text));

    let message = if app.session.is_empty() {
        Some("Enter your first guess to see possible words.")
    } else if candidates.is_empty() {
        Some("No words match the guesses.")
    } else {
        None
    };

    if let Some(message) = message {
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(colors.muted))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = candidates
        .iter()
        .map(|w| ListItem::new(format!("• {w}")))
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn render_guesses(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let block = Block::default()
        .title(" Guesses ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(colors.text));

    if app.session.is_empty() {
        let paragraph = Paragraph::new("No guesses have been added yet.")
            .style(Style::default().fg(colors.muted))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .session
        .guesses()
        .iter()
        .enumerate()
        .map(|(i, guess)| {
            let line = Line::from(vec![
                Span::raw(format!("{}. ", i + 1)),
                Span::styled(
                    guess.word().text().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    guess.likeness().to_string(),
                    Style::default().fg(colors.highlight),
                ),
            ]);

            let item = ListItem::new(line);
            if app.selected == Some(i) {
                item.style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                item
            }
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn render_help(f: &mut Frame, colors: &Palette, area: Rect) {
    let help = Paragraph::new(
        "Enter: Add | Ctrl+Space/Tab: Complete | Ctrl+C: Clear | ↑↓ Del: Remove | Ctrl+R: Reset | Ctrl+T: Theme | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(colors.muted));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::dictionary::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn setup_dictionary() -> Dictionary {
        words_from_slice(&["WORD", "WARD", "BIRD", "CORD"])
            .into_iter()
            .collect()
    }

    #[test]
    fn empty_session_shows_prompts() {
        let dictionary = setup_dictionary();
        let app = App::new(&dictionary);
        let text = screen(&app);

        assert!(text.contains("FALLOUT HACKING SOLVER"));
        assert!(text.contains("Enter your first guess to see possible words."));
        assert!(text.contains("No guesses have been added yet."));
    }

    #[test]
    fn shows_guesses_candidates_and_error() {
        let dictionary = setup_dictionary();
        let mut app = App::new(&dictionary);
        app.session = app.session.submit("WORD 3").submit("WORD 2");
        let text = screen(&app);

        assert!(text.contains("1. WORD 3"));
        assert!(text.contains("• WARD"));
        assert!(text.contains("• CORD"));
        assert!(text.contains("This guess has already been added"));
    }

    #[test]
    fn no_match_message() {
        let dictionary = setup_dictionary();
        let mut app = App::new(&dictionary);
        app.session = app.session.submit("WORD 0");

        assert!(screen(&app).contains("No words match the guesses."));
    }
}
