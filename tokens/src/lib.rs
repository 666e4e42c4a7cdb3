#![deny(warnings)]

mod token;
mod tokenizer;

pub use token::{BinOpKind, FuncKind, Symbol, Token, TokenError, TokenKind};
pub use tokenizer::Tokenizer;
