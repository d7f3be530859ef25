pub(crate) mod db;
pub mod detect;
pub mod lang;
pub mod plural;

pub use detect::{detect_from_text, TextDetector};
pub use lang::{all_formatted_names, Language, LocaleName, TextDirection};
pub use plural::{PluralFormsExpr, PluralParseError, MAX_EXAMPLES_COUNT};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
