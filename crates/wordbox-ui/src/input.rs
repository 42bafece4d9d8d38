use wordbox_types::{Font, Theme, UiEvent};

/// Translate one line of user input into a UI event.
///
/// Grammar: an empty line clears the search (back to the default view);
/// `:`-prefixed lines are commands; anything else is a search query.
pub fn parse_line(line: &str) -> Option<UiEvent> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Some(UiEvent::InputCleared);
    }

    let Some(command) = trimmed.strip_prefix(':') else {
        return Some(UiEvent::Search(trimmed.to_string()));
    };

    let mut parts = command.split_whitespace();
    match parts.next() {
        Some("play" | "p") => Some(UiEvent::Play),
        Some("quit" | "q") => Some(UiEvent::Close),
        Some("theme") => match parts.next() {
            None => Some(UiEvent::ToggleTheme),
            Some(value) => match value.parse::<Theme>() {
                Ok(theme) => Some(UiEvent::SetTheme(theme)),
                Err(e) => {
                    tracing::warn!("{e} (expected light or dark)");
                    None
                }
            },
        },
        Some("font") => match parts.next() {
            None => {
                tracing::warn!("usage: :font <sans-serif|serif|monospace>");
                None
            }
            Some(value) => match value.parse::<Font>() {
                Ok(font) => Some(UiEvent::SetFont(font)),
                Err(e) => {
                    tracing::warn!("{e} (expected sans-serif, serif or monospace)");
                    None
                }
            },
        },
        _ => {
            tracing::warn!("unknown command :{command}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_search() {
        assert_eq!(
            parse_line("  hello "),
            Some(UiEvent::Search("hello".to_string()))
        );
    }

    #[test]
    fn empty_line_clears_the_input() {
        assert_eq!(parse_line(""), Some(UiEvent::InputCleared));
        assert_eq!(parse_line("   "), Some(UiEvent::InputCleared));
    }

    #[test]
    fn bare_theme_toggles() {
        assert_eq!(parse_line(":theme"), Some(UiEvent::ToggleTheme));
        assert_eq!(parse_line(":theme dark"), Some(UiEvent::SetTheme(Theme::Dark)));
        assert_eq!(parse_line(":theme plaid"), None);
    }

    #[test]
    fn font_requires_a_known_value() {
        assert_eq!(parse_line(":font serif"), Some(UiEvent::SetFont(Font::Serif)));
        assert_eq!(parse_line(":font"), None);
        assert_eq!(parse_line(":font wingdings"), None);
    }

    #[test]
    fn play_and_quit_commands() {
        assert_eq!(parse_line(":play"), Some(UiEvent::Play));
        assert_eq!(parse_line(":q"), Some(UiEvent::Close));
        assert_eq!(parse_line(":frobnicate"), None);
    }
}
