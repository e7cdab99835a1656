use std::sync::LazyLock;

use regex::Regex;

use crate::models::family::FamilyId;

/// Grammar for a Pfam family or clan accession with an optional version suffix.
pub const FAMILY_PATTERN: &str = r"^(?P<code>PF\d{5}|CL\d{4})(?:\.(?P<ver>\d+))?$";

/// Upstream error markers. These are dropped without being reported as unknown.
pub const IGNORED_SENTINELS: [&str; 2] = ["ERROR", "CLAN_ERROR"];

/// Characters separating the tokens of a family-list field.
pub const FAMILY_FIELD_DELIMITERS: [char; 3] = [',', ';', '|'];

static FAMILY_RX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FAMILY_PATTERN).expect("family pattern is a valid regex"));

///
/// Outcome of classifying one raw token of a family-list field.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenClass {
    Known(FamilyId),
    Ignored,
    /// holds the trimmed token text as it appeared in the input
    Unknown(String),
}

///
/// Classify a single raw token.
///
/// The token is trimmed first. Empty tokens and the `ERROR`/`CLAN_ERROR` sentinels
/// (any case) are [TokenClass::Ignored]. Tokens matching [FAMILY_PATTERN] become
/// [TokenClass::Known]; the version is only carried into the identifier when
/// `keep_version` is set. Everything else is [TokenClass::Unknown].
///
/// # Arguments
/// - raw: the raw token
/// - keep_version: keep `.N` version suffixes instead of collapsing to the bare code
pub fn classify_token(raw: &str, keep_version: bool) -> TokenClass {
    let token = raw.trim();

    if token.is_empty()
        || IGNORED_SENTINELS
            .iter()
            .any(|sentinel| token.eq_ignore_ascii_case(sentinel))
    {
        return TokenClass::Ignored;
    }

    match FAMILY_RX.captures(token) {
        Some(caps) => {
            let code = caps.name("code").map_or("", |m| m.as_str());
            let version = match keep_version {
                true => caps.name("ver").map(|m| m.as_str()),
                false => None,
            };
            TokenClass::Known(FamilyId::from_parts(code, version))
        }
        None => TokenClass::Unknown(token.to_string()),
    }
}

///
/// Split a family-list field such as `PF00069;PF00002|CL0016` into raw tokens.
///
/// Delimiters may be mixed freely. Empty pieces are kept here and later
/// classified as [TokenClass::Ignored].
pub fn split_family_field(field: &str) -> impl Iterator<Item = &str> {
    field.trim().split(FAMILY_FIELD_DELIMITERS)
}

///
/// Token classifier bound to the run-wide version policy, so every token in a run
/// is canonicalized the same way.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenClassifier {
    keep_version: bool,
}

impl TokenClassifier {
    pub fn new(keep_version: bool) -> Self {
        TokenClassifier { keep_version }
    }

    pub fn keep_version(&self) -> bool {
        self.keep_version
    }

    pub fn classify(&self, raw: &str) -> TokenClass {
        classify_token(raw, self.keep_version)
    }

    ///
    /// Split and classify every token of a family-list field.
    ///
    pub fn classify_field<'a>(&self, field: &'a str) -> impl Iterator<Item = TokenClass> + 'a {
        let keep_version = self.keep_version;
        split_family_field(field).map(move |token| classify_token(token, keep_version))
    }
}
