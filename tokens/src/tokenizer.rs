use crate::token::{Token, TokenError};

// The input grammar is whitespace-separated by contract, so lexing is a
// plain split; each piece must parse as exactly one token.
pub struct Tokenizer<'a> {
    src: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(line: &'a str) -> Self {
        Tokenizer {
            src: line.split_whitespace(),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token, TokenError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.src.next().map(Token::parse)
    }
}
