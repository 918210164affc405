use crate::ast::{ArrayKind, Token};

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_separators(&mut self) {
        while self.current_char() == Some('.') {
            self.advance();
        }
    }

    /// Matches `[]`, `[<digits>]` or `[*]` at the current position without
    /// consuming anything. Returns the marker and its length in chars.
    fn match_array_marker(&self) -> Option<(ArrayKind, usize)> {
        if self.current_char() != Some('[') {
            return None;
        }

        match self.peek_char(1)? {
            ']' => Some((ArrayKind::Unspecified, 2)),
            '*' if self.peek_char(2) == Some(']') => Some((ArrayKind::Wildcard, 3)),
            c if c.is_ascii_digit() => {
                let mut digits = String::new();
                let mut offset = 1;
                while let Some(ch) = self.peek_char(offset) {
                    if ch.is_ascii_digit() {
                        digits.push(ch);
                        offset += 1;
                    } else {
                        break;
                    }
                }
                if self.peek_char(offset) == Some(']') {
                    Some((ArrayKind::Index(digits), offset + 1))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Reads a field name up to the next separator or array marker. The
    /// current char is always taken, so a `[` that failed to open a marker
    /// becomes part of the name.
    fn read_field(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch == '.' || (!result.is_empty() && self.match_array_marker().is_some()) {
                break;
            }
            result.push(ch);
            self.advance();
        }
        result
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_separators();

        if self.current_char().is_none() {
            return Token::Eof;
        }

        if let Some((kind, len)) = self.match_array_marker() {
            self.position += len;
            return Token::ArrayMarker(kind);
        }

        Token::Field(self.read_field())
    }

    /// Consumes the lexer, returning every token before `Eof`.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            match self.next_token() {
                Token::Eof => break,
                token => tokens.push(token),
            }
        }
        tokens
    }

    /// True when the whole input is exactly one array marker.
    pub fn is_single_array_marker(&self) -> bool {
        self.position == 0
            && self
                .match_array_marker()
                .is_some_and(|(_, len)| len == self.input.len())
    }
}
