/// Agrees a word with a number (`11`, `рубль` -> `рублей`).
///
/// Used for units of numeric placeholders in text reports.
pub trait Inflector {
    fn inflect(&self, count: i64, word: &str) -> String;
}

/// Leaves every word as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityInflector;

impl Inflector for IdentityInflector {
    fn inflect(&self, _count: i64, word: &str) -> String {
        word.to_owned()
    }
}

impl<F> Inflector for F
where
    F: Fn(i64, &str) -> String,
{
    fn inflect(&self, count: i64, word: &str) -> String {
        self(count, word)
    }
}
