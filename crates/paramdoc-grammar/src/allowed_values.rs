//! Tokenisation of allowed-value lists such as `"a","b"` or `a, b`.

use std::sync::LazyLock;

use regex::Regex;

static DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"]*[^"]""#).unwrap_or_else(|_| unreachable!()));
static SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'[^']*[^']'").unwrap_or_else(|_| unreachable!()));
static BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^,\s]+").unwrap_or_else(|_| unreachable!()));

/// Token rule applied to a whole allowed-value list.
///
/// The rule is picked once from the first character of the list; lists
/// mixing quote styles are tokenised with whichever rule that selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedValueRule {
    /// `"…"` tokens, quotes kept.
    DoubleQuoted,
    /// `'…'` tokens, quotes kept.
    SingleQuoted,
    /// Runs of characters other than commas and whitespace.
    Bare,
}

impl AllowedValueRule {
    /// Select the rule for `raw` from its first character.
    ///
    /// # Examples
    /// ```
    /// use paramdoc_grammar::AllowedValueRule;
    /// assert_eq!(AllowedValueRule::select("\"a\""), AllowedValueRule::DoubleQuoted);
    /// assert_eq!(AllowedValueRule::select("'a'"), AllowedValueRule::SingleQuoted);
    /// assert_eq!(AllowedValueRule::select("a,b"), AllowedValueRule::Bare);
    /// ```
    #[must_use]
    pub fn select(raw: &str) -> Self {
        match raw.chars().next() {
            Some('"') => Self::DoubleQuoted,
            Some('\'') => Self::SingleQuoted,
            _ => Self::Bare,
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            Self::DoubleQuoted => &DOUBLE_QUOTED,
            Self::SingleQuoted => &SINGLE_QUOTED,
            Self::Bare => &BARE,
        }
    }

    /// Extract every token of `raw` under this rule, left to right.
    #[must_use]
    pub fn tokens(self, raw: &str) -> Vec<String> {
        self.regex()
            .find_iter(raw)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Split a raw allowed-value list into its tokens.
///
/// # Examples
/// ```
/// use paramdoc_grammar::tokenize_allowed_values;
/// assert_eq!(tokenize_allowed_values("abc, def"), vec!["abc", "def"]);
/// assert_eq!(tokenize_allowed_values(r#""a b","c""#), vec![r#""a b""#, r#""c""#]);
/// ```
#[must_use]
pub fn tokenize_allowed_values(raw: &str) -> Vec<String> {
    AllowedValueRule::select(raw).tokens(raw)
}
