//! Compiled form of a gettext `Plural-Forms` header.
//!
//! The header is a tiny C-like language over one free variable `n`:
//!
//! ```text
//! nplurals=3; plural=(n==1 ? 0 : n>=2 && n<=4 ? 1 : 2);
//! ```
//!
//! `Calculator::parse` lexes the whole header and builds an expression tree
//! (constant / `n` / unary / binary / ternary); `evaluate` walks the tree
//! with plain integer arithmetic. There is no string re-scanning per call.

use smallvec::SmallVec;
use thiserror::Error;

/// Errors reported while compiling a `Plural-Forms` header.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PluralParseError {
    #[error("unexpected character `{0}` in plural-forms header")]
    UnexpectedChar(char),
    #[error("unknown identifier `{0}` in plural-forms header")]
    UnknownIdentifier(String),
    #[error("unexpected end of plural-forms header")]
    UnexpectedEnd,
    #[error("unexpected token in plural-forms header")]
    UnexpectedToken,
    #[error("missing `nplurals=` clause")]
    MissingNPlurals,
    #[error("missing `plural=` clause")]
    MissingPlural,
    #[error("plural-forms expression nested too deeply")]
    TooDeep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Number(u64),
    N,
    NPluralsKw,
    PluralKw,
    Assign,
    Semicolon,
    Mod,
    Not,
    Eq,
    NotEq,
    Gt,
    Ge,
    Lt,
    Le,
    And,
    Or,
    Question,
    Colon,
    LParen,
    RParen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinOp {
    Mod,
    Eq,
    NotEq,
    Gt,
    Ge,
    Lt,
    Le,
    And,
    Or,
}

/// Expression tree for the `plural=` clause.
#[derive(Debug, Clone)]
pub(crate) enum Expr {
    Number(u64),
    N,
    Not(Box<Expr>),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Ternary {
        cond: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
}

impl Expr {
    fn eval(&self, n: u64) -> u64 {
        match self {
            Expr::Number(v) => *v,
            Expr::N => n,
            Expr::Not(e) => u64::from(e.eval(n) == 0),
            Expr::Binary { op, lhs, rhs } => match op {
                // n % 0 is defined as 0 so malformed locale data cannot trap
                BinOp::Mod => lhs.eval(n).checked_rem(rhs.eval(n)).unwrap_or(0),
                BinOp::Eq => u64::from(lhs.eval(n) == rhs.eval(n)),
                BinOp::NotEq => u64::from(lhs.eval(n) != rhs.eval(n)),
                BinOp::Gt => u64::from(lhs.eval(n) > rhs.eval(n)),
                BinOp::Ge => u64::from(lhs.eval(n) >= rhs.eval(n)),
                BinOp::Lt => u64::from(lhs.eval(n) < rhs.eval(n)),
                BinOp::Le => u64::from(lhs.eval(n) <= rhs.eval(n)),
                BinOp::And => {
                    if lhs.eval(n) == 0 {
                        0
                    } else {
                        u64::from(rhs.eval(n) != 0)
                    }
                }
                BinOp::Or => {
                    if lhs.eval(n) != 0 {
                        1
                    } else {
                        u64::from(rhs.eval(n) != 0)
                    }
                }
            },
            Expr::Ternary {
                cond,
                then,
                otherwise,
            } => {
                if cond.eval(n) != 0 {
                    then.eval(n)
                } else {
                    otherwise.eval(n)
                }
            }
        }
    }
}

fn tokenize(header: &str) -> Result<SmallVec<[Token; 32]>, PluralParseError> {
    let mut tokens = SmallVec::new();
    let mut chars = header.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '0'..='9' => {
                let mut value: u64 = 0;
                while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                    value = value.saturating_mul(10).saturating_add(u64::from(d));
                    chars.next();
                }
                tokens.push(Token::Number(value));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut ident = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        ident.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                match ident.as_str() {
                    "n" => tokens.push(Token::N),
                    "nplurals" => tokens.push(Token::NPluralsKw),
                    "plural" => tokens.push(Token::PluralKw),
                    _ => return Err(PluralParseError::UnknownIdentifier(ident)),
                }
            }
            '=' => {
                chars.next();
                if chars.peek() == Some(&'=') {
                    chars.next();
                    tokens.push(Token::Eq);
                } else {
                    tokens.push(Token::Assign);
                }
            }
            '!' => {
                chars.next();
                if chars.peek() == Some(&'=') {
                    chars.next();
                    tokens.push(Token::NotEq);
                } else {
                    tokens.push(Token::Not);
                }
            }
            '>' => {
                chars.next();
                if chars.peek() == Some(&'=') {
                    chars.next();
                    tokens.push(Token::Ge);
                } else {
                    tokens.push(Token::Gt);
                }
            }
            '<' => {
                chars.next();
                if chars.peek() == Some(&'=') {
                    chars.next();
                    tokens.push(Token::Le);
                } else {
                    tokens.push(Token::Lt);
                }
            }
            '&' => {
                chars.next();
                if chars.next() != Some('&') {
                    return Err(PluralParseError::UnexpectedChar('&'));
                }
                tokens.push(Token::And);
            }
            '|' => {
                chars.next();
                if chars.next() != Some('|') {
                    return Err(PluralParseError::UnexpectedChar('|'));
                }
                tokens.push(Token::Or);
            }
            ';' => {
                chars.next();
                tokens.push(Token::Semicolon);
            }
            '%' => {
                chars.next();
                tokens.push(Token::Mod);
            }
            '?' => {
                chars.next();
                tokens.push(Token::Question);
            }
            ':' => {
                chars.next();
                tokens.push(Token::Colon);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            other => return Err(PluralParseError::UnexpectedChar(other)),
        }
    }
    Ok(tokens)
}

// Deep enough for every real CLDR expression, shallow enough that hostile
// input cannot blow the stack.
const MAX_DEPTH: usize = 128;

struct Parser {
    tokens: SmallVec<[Token; 32]>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Result<Token, PluralParseError> {
        let tok = self
            .tokens
            .get(self.pos)
            .copied()
            .ok_or(PluralParseError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(tok)
    }

    fn expect(&mut self, token: Token) -> Result<(), PluralParseError> {
        if self.bump()? == token {
            Ok(())
        } else {
            Err(PluralParseError::UnexpectedToken)
        }
    }

    fn eat(&mut self, token: Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    // ternary := or ('?' ternary ':' ternary)?
    fn ternary(&mut self, depth: usize) -> Result<Expr, PluralParseError> {
        if depth > MAX_DEPTH {
            return Err(PluralParseError::TooDeep);
        }
        let cond = self.logical_or(depth + 1)?;
        if !self.eat(Token::Question) {
            return Ok(cond);
        }
        let then = self.ternary(depth + 1)?;
        self.expect(Token::Colon)?;
        let otherwise = self.ternary(depth + 1)?;
        Ok(Expr::Ternary {
            cond: Box::new(cond),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        })
    }

    fn logical_or(&mut self, depth: usize) -> Result<Expr, PluralParseError> {
        let mut lhs = self.logical_and(depth)?;
        while self.eat(Token::Or) {
            let rhs = self.logical_and(depth)?;
            lhs = Expr::Binary {
                op: BinOp::Or,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn logical_and(&mut self, depth: usize) -> Result<Expr, PluralParseError> {
        let mut lhs = self.equality(depth)?;
        while self.eat(Token::And) {
            let rhs = self.equality(depth)?;
            lhs = Expr::Binary {
                op: BinOp::And,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    // C precedence: == and != bind looser than the relational operators
    fn equality(&mut self, depth: usize) -> Result<Expr, PluralParseError> {
        let mut lhs = self.relational(depth)?;
        loop {
            let op = match self.peek() {
                Some(Token::Eq) => BinOp::Eq,
                Some(Token::NotEq) => BinOp::NotEq,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.relational(depth)?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
    }

    fn relational(&mut self, depth: usize) -> Result<Expr, PluralParseError> {
        let mut lhs = self.modulo(depth)?;
        loop {
            let op = match self.peek() {
                Some(Token::Gt) => BinOp::Gt,
                Some(Token::Ge) => BinOp::Ge,
                Some(Token::Lt) => BinOp::Lt,
                Some(Token::Le) => BinOp::Le,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.modulo(depth)?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
    }

    fn modulo(&mut self, depth: usize) -> Result<Expr, PluralParseError> {
        let mut lhs = self.unary(depth)?;
        while self.eat(Token::Mod) {
            let rhs = self.unary(depth)?;
            lhs = Expr::Binary {
                op: BinOp::Mod,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn unary(&mut self, depth: usize) -> Result<Expr, PluralParseError> {
        if depth > MAX_DEPTH {
            return Err(PluralParseError::TooDeep);
        }
        if self.eat(Token::Not) {
            let inner = self.unary(depth + 1)?;
            return Ok(Expr::Not(Box::new(inner)));
        }
        self.primary(depth)
    }

    fn primary(&mut self, depth: usize) -> Result<Expr, PluralParseError> {
        match self.bump()? {
            Token::N => Ok(Expr::N),
            Token::Number(v) => Ok(Expr::Number(v)),
            Token::LParen => {
                let inner = self.ternary(depth + 1)?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            _ => Err(PluralParseError::UnexpectedToken),
        }
    }
}

/// A compiled `Plural-Forms` header: the declared form count plus the
/// selector expression tree.
#[derive(Debug, Clone)]
pub(crate) struct Calculator {
    nplurals: u32,
    root: Expr,
}

impl Calculator {
    /// Compiles a full `nplurals=N; plural=EXPR;` header.
    pub(crate) fn parse(header: &str) -> Result<Self, PluralParseError> {
        let mut parser = Parser {
            tokens: tokenize(header)?,
            pos: 0,
        };

        parser
            .expect(Token::NPluralsKw)
            .map_err(|_| PluralParseError::MissingNPlurals)?;
        parser.expect(Token::Assign)?;
        let nplurals = match parser.bump()? {
            Token::Number(v) => u32::try_from(v).map_err(|_| PluralParseError::UnexpectedToken)?,
            _ => return Err(PluralParseError::UnexpectedToken),
        };
        parser.expect(Token::Semicolon)?;

        parser
            .expect(Token::PluralKw)
            .map_err(|_| PluralParseError::MissingPlural)?;
        parser.expect(Token::Assign)?;
        let root = parser.ternary(0)?;

        // trailing `;` is conventional but optional
        parser.eat(Token::Semicolon);
        if parser.peek().is_some() {
            return Err(PluralParseError::UnexpectedToken);
        }

        Ok(Self { nplurals, root })
    }

    pub(crate) fn nplurals(&self) -> u32 {
        self.nplurals
    }

    /// Plural form index selected for the cardinal `n`.
    pub(crate) fn evaluate(&self, n: u64) -> u64 {
        self.root.eval(n)
    }
}
