use std::fmt;

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

impl<L> fmt::Display for Comma<L>
where
    L: IntoIterator + Clone,
    L::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for item in self.0.clone() {
            write!(f, "{s}{item}")?;
            s = ", ";
        }
        Ok(())
    }
}

/// `n` comma separated placeholders
pub(super) fn placeholders(n: usize) -> Comma<Vec<&'static str>> {
    Comma(vec!["?"; n])
}
