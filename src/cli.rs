//! Command-line flag lookup.
//!
//! The tool takes a single `--name <value>` flag, so parsing is a plain
//! token scan rather than a full argument grammar: unknown tokens are
//! ignored and a flag without a value is simply absent.

/// Flag carrying the product title search term.
pub const NAME_FLAG: &str = "--name";

/// Looks up flag values in an argument list (program name excluded).
///
/// # Example
///
/// ```rust
/// use shopify_product_search::ArgumentParser;
///
/// let parser = ArgumentParser::new(["--name", "shirt"]);
/// assert_eq!(parser.get_arg_value("--name"), Some("shirt"));
/// assert_eq!(parser.get_arg_value("--other"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArgumentParser {
    args: Vec<String>,
}

impl ArgumentParser {
    /// Creates a parser over `args`.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the token following the first occurrence of `flag`.
    ///
    /// Returns `None` if `flag` does not occur or is the last token.
    #[must_use]
    pub fn get_arg_value(&self, flag: &str) -> Option<&str> {
        let index = self.args.iter().position(|arg| arg == flag)?;
        self.args.get(index + 1).map(String::as_str)
    }
}
