use crate::deque::Deque;
use tokens::{Symbol, Token, TokenError, Tokenizer};

#[derive(Debug, PartialEq)]
pub enum ParseError {
    BadToken(TokenError),
    MissingOParen,
    MissingCParen,
}

impl From<TokenError> for ParseError {
    fn from(err: TokenError) -> ParseError {
        ParseError::BadToken(err)
    }
}

/// An expression reordered into RPN, ready for stack evaluation.
#[derive(Debug, PartialEq)]
pub struct RPNExpr(pub Deque<Token>);

impl RPNExpr {
    pub fn iter(&self) -> crate::deque::Iter<'_, Token> {
        self.0.iter()
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        let mut tokens = Deque::new();
        for token in Tokenizer::new(expr) {
            tokens.push_back(token?);
        }
        Self::parse(tokens)
    }

    pub fn parse(tokens: impl IntoIterator<Item = Token>) -> Result<RPNExpr, ParseError> {
        let mut out = Deque::new();
        let mut stack = Deque::new();

        for token in tokens {
            match token {
                Token::Number(_) => out.push_back(token),
                Token::Function(_) => stack.push_back(token),
                Token::BinOp(op) => {
                    // left-associative: equal precedence also pops
                    while let Some(top) = stack.pop_back() {
                        match top {
                            Token::BinOp(prev) if prev.precedence() >= op.precedence() => {
                                out.push_back(top)
                            }
                            _ => {
                                stack.push_back(top);
                                break;
                            }
                        }
                    }
                    stack.push_back(token);
                }
                Token::Symbol(Symbol::OParen) => stack.push_back(token),
                Token::Symbol(Symbol::Comma) => {
                    // flush the current argument, keep the group's paren put
                    while let Some(top) = stack.pop_back() {
                        if top == Token::Symbol(Symbol::OParen) {
                            stack.push_back(top);
                            break;
                        }
                        out.push_back(top);
                    }
                }
                Token::Symbol(Symbol::CParen) => {
                    loop {
                        match stack.pop_back() {
                            Some(Token::Symbol(Symbol::OParen)) => break,
                            Some(top) => out.push_back(top),
                            None => return Err(ParseError::MissingOParen),
                        }
                    }
                    // end of grouping: check if this was a function call
                    match stack.pop_back() {
                        Some(func @ Token::Function(_)) => out.push_back(func),
                        Some(other) => stack.push_back(other),
                        None => (),
                    }
                }
            }
        }
        while let Some(top) = stack.pop_back() {
            match top {
                Token::Symbol(Symbol::OParen) => return Err(ParseError::MissingCParen),
                token => out.push_back(token),
            }
        }
        Ok(RPNExpr(out))
    }
}
