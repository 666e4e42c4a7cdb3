use crate::parser::RPNExpr;
use std::fmt;

// every token is followed by a single space, trailing one included
impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for token in self.iter() {
            write!(f, "{} ", token)?;
        }
        Ok(())
    }
}
