use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// An abstract character source: non-destructive peek and consuming read of
/// single characters, with `None` as the end-of-input signal.
pub trait CharSource {
    fn peek_char(&mut self) -> Option<char>;
    fn read_char(&mut self) -> Option<char>;
}

/// A character source over an in-memory string, one line of REPL input in
/// the common case.
pub struct StringSource {
    chars: Vec<char>,
    pos: usize,
}

impl StringSource {
    pub fn new(source: &str) -> StringSource {
        StringSource {
            chars: source.chars().collect(),
            pos: 0,
        }
    }
}

impl CharSource for StringSource {
    fn peek_char(&mut self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn read_char(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }
}

/// The memoized lookahead: the peeked token plus the line/column the cursor
/// held once it was produced.
#[derive(Clone)]
struct LexerState {
    token: Token,
    line: u32,
    column: u32,
}

pub struct Lexer<S: CharSource> {
    source: S,
    state: Option<LexerState>,
    line: u32,
    column: u32,
}

impl<S: CharSource> Lexer<S> {
    pub fn new(source: S) -> Lexer<S> {
        Lexer {
            source,
            state: None,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token without consuming it. Repeated calls return
    /// the same token and restore the cursor recorded when it was produced.
    pub fn peek(&mut self) -> Token {
        if let Some(state) = &self.state {
            self.line = state.line;
            self.column = state.column;
            state.token.clone()
        } else {
            let token = self.read_token();
            self.state = Some(LexerState {
                token: token.clone(),
                line: self.line,
                column: self.column,
            });
            token
        }
    }

    /// Returns and consumes the next token, taking the memoized lookahead
    /// if one is buffered.
    pub fn read(&mut self) -> Token {
        if let Some(state) = self.state.take() {
            state.token
        } else {
            self.read_token()
        }
    }

    /// True iff the next token is `EndOfFile`.
    pub fn is_at_end(&mut self) -> bool {
        self.peek().kind == TokenKind::EndOfFile
    }

    /// Single-pass scan for the next token. Never fails: unrecognised
    /// characters come back as `Invalid` tokens for the parser to reject.
    fn read_token(&mut self) -> Token {
        while let Some(c) = self.source.peek_char() {
            let line = self.line;
            let column = self.column;

            if c.is_ascii_digit() {
                let mut text = String::new();
                while let Some(c) = self.source.peek_char() {
                    if !c.is_ascii_digit() {
                        break;
                    }
                    self.read_char();
                    text.push(c);
                }

                let length = text.len() as u32;
                return MK_TOKEN!(TokenKind::Number, line, column, length, text);
            }

            if c.is_ascii_alphabetic() {
                let mut text = String::new();
                while let Some(c) = self.source.peek_char() {
                    if !c.is_ascii_alphanumeric() && c != '_' {
                        break;
                    }
                    self.read_char();
                    text.push(c);
                }

                let length = text.len() as u32;
                return match RESERVED_LOOKUP.get(text.as_str()) {
                    Some(kind) => MK_TOKEN!(*kind, line, column, length),
                    None => MK_TOKEN!(TokenKind::Identifier, line, column, length, text),
                };
            }

            self.read_char();

            match c {
                '+' => return MK_TOKEN!(TokenKind::Plus, line, column, 1),
                '-' => return MK_TOKEN!(TokenKind::Minus, line, column, 1),
                '*' => return MK_TOKEN!(TokenKind::Star, line, column, 1),
                '/' => return MK_TOKEN!(TokenKind::Slash, line, column, 1),
                '(' => return MK_TOKEN!(TokenKind::OpenParen, line, column, 1),
                ')' => return MK_TOKEN!(TokenKind::CloseParen, line, column, 1),
                '.' => return MK_TOKEN!(TokenKind::Dot, line, column, 1),

                '=' => {
                    if self.source.peek_char() == Some('=') {
                        self.read_char();
                        return MK_TOKEN!(TokenKind::Equals, line, column, 2);
                    }
                    return MK_TOKEN!(TokenKind::Assignment, line, column, 1);
                }
                '<' => {
                    if self.source.peek_char() == Some('=') {
                        self.read_char();
                        return MK_TOKEN!(TokenKind::LessEquals, line, column, 2);
                    }
                    return MK_TOKEN!(TokenKind::Less, line, column, 1);
                }
                '>' => {
                    if self.source.peek_char() == Some('=') {
                        self.read_char();
                        return MK_TOKEN!(TokenKind::GreaterEquals, line, column, 2);
                    }
                    return MK_TOKEN!(TokenKind::Greater, line, column, 1);
                }

                ' ' | '\r' => {}
                '\n' => {
                    self.line += 1;
                    self.column = 1;
                }

                _ => return MK_TOKEN!(TokenKind::Invalid, line, column, 1, c.to_string()),
            }
        }

        MK_TOKEN!(TokenKind::EndOfFile, self.line, self.column, 0)
    }

    fn read_char(&mut self) -> Option<char> {
        self.column += 1;
        self.source.read_char()
    }
}
