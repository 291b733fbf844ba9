use logos::Logos;
use nu_ansi_term::{Color, Style};
use reedline::StyledText;

use crate::lexer::Token;

const DEFAULT_FG: Color = Color::White;

fn token_color(token: Result<Token, ()>) -> Color {
    match token {
        Ok(Token::Number) => Color::Cyan,
        Ok(Token::Operator) => Color::Magenta,
        Ok(Token::LParen) | Ok(Token::RParen) => Color::DarkGray,
        Err(()) => Color::Red,
    }
}

pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let mut curr_end = 0;

        for (token, span) in Token::lexer(line).spanned() {
            // Whitespace skipped by the lexer.
            if span.start > curr_end {
                output.push((Style::new().fg(DEFAULT_FG), line[curr_end..span.start].to_string()));
            }
            output.push((
                Style::new().fg(token_color(token)),
                line[span.clone()].to_string(),
            ));
            curr_end = span.end;
        }

        if curr_end < line.len() {
            output.push((Style::new().fg(DEFAULT_FG), line[curr_end..].to_string()));
        }

        output
    }
}
