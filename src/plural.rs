//! Gettext `Plural-Forms` expressions: lazy compilation, evaluation and
//! semantic equivalence.

pub(crate) mod calc;

use once_cell::unsync::OnceCell;

pub use calc::PluralParseError;
use calc::Calculator;

/// Sample window used by the semantic equivalence check. CLDR plural rules
/// are small periodic patterns; the upstream data is validated over
/// `n in 0..=1000`, so the same window distinguishes all of them in
/// practice. Two expressions that agree on every sampled value are treated
/// as equal even though untested values could in principle disagree.
pub const MAX_EXAMPLES_COUNT: u64 = 1000;

/// A gettext `Plural-Forms` header value, e.g.
/// `"nplurals=2; plural=(n != 1);"`.
///
/// The raw text is kept as-is; the compiled calculator is built at most
/// once, on first use, and malformed text simply yields no calculator.
/// Instances are meant to be owned by one logical context (one catalog);
/// first-use compilation is not synchronized across threads.
#[derive(Debug, Clone, Default)]
pub struct PluralFormsExpr {
    expr: String,
    nplurals: Option<u32>,
    calc: OnceCell<Option<Calculator>>,
}

impl PluralFormsExpr {
    /// Wraps raw header text. Nothing is compiled until first use.
    pub fn new(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            nplurals: None,
            calc: OnceCell::new(),
        }
    }

    /// Wraps raw header text with an explicitly supplied form count that
    /// takes precedence over anything derived from the text.
    pub fn with_nplurals(expr: impl Into<String>, nplurals: u32) -> Self {
        Self {
            expr: expr.into(),
            nplurals: Some(nplurals),
            calc: OnceCell::new(),
        }
    }

    /// Raw header text (may be empty).
    pub fn text(&self) -> &str {
        &self.expr
    }

    /// Number of plural forms: the supplied count if any, else the compiled
    /// calculator's, else a textual `nplurals=<digits>` prefix match.
    /// `None` when undeterminable.
    pub fn nplurals(&self) -> Option<u32> {
        if let Some(n) = self.nplurals {
            return Some(n);
        }
        if let Some(calc) = self.calc() {
            return Some(calc.nplurals());
        }
        nplurals_from_text(&self.expr)
    }

    /// Plural form index for the cardinal `n`; `0` when the expression is
    /// empty or malformed, so callers always get a usable answer.
    pub fn evaluate(&self, n: u64) -> u64 {
        self.calc().map_or(0, |calc| calc.evaluate(n))
    }

    /// True when the text compiled successfully.
    pub fn is_well_formed(&self) -> bool {
        self.calc().is_some()
    }

    fn calc(&self) -> Option<&Calculator> {
        self.calc
            .get_or_init(|| {
                if self.expr.is_empty() {
                    None
                } else {
                    Calculator::parse(&self.expr).ok()
                }
            })
            .as_ref()
    }
}

impl PartialEq for PluralFormsExpr {
    /// Equivalence, not textual identity: identical text, or text equal
    /// after stripping spaces and tabs, or both compile with the same form
    /// count and agree on every `n` in `[0, MAX_EXAMPLES_COUNT)`.
    fn eq(&self, other: &Self) -> bool {
        if self.expr == other.expr {
            return true;
        }

        if strip_blanks(&self.expr) == strip_blanks(&other.expr) {
            return true;
        }

        let (Some(a), Some(b)) = (self.calc(), other.calc()) else {
            return false;
        };
        if a.nplurals() != b.nplurals() {
            return false;
        }
        (0..MAX_EXAMPLES_COUNT).all(|n| a.evaluate(n) == b.evaluate(n))
    }
}

fn strip_blanks(s: &str) -> String {
    s.chars().filter(|c| *c != ' ' && *c != '\t').collect()
}

fn nplurals_from_text(expr: &str) -> Option<u32> {
    let rest = expr.strip_prefix("nplurals=")?;
    let digits = rest.split(|c: char| !c.is_ascii_digit()).next()?;
    digits.parse().ok()
}
