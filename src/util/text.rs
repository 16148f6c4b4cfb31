/// テキストのトークン化ユーティリティ。
///
/// 文字列・数値・配列・オブジェクトから小文字英数字トークンの集合を作ります。
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;
use serde_json::Value;

/// トークンとして採用する最小文字数。
const MIN_TOKEN_LEN: usize = 2;

static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("compile token separator pattern"));

/// 重複を除いたトークン集合。反復順は初出順。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    ordered: Vec<String>,
    seen: FxHashSet<String>,
}

impl TokenSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// トークンを追加する。既に存在する場合は何もしない。
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        let token = token.into();
        if self.seen.contains(&token) {
            return false;
        }
        self.seen.insert(token.clone());
        self.ordered.push(token);
        true
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.seen.contains(token)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// 任意の値を走査してトークンを追加する。
    pub fn extend_from_value(&mut self, value: &Value) {
        match value {
            Value::String(_) | Value::Number(_) => self.extend_from_primitive(value),
            Value::Array(items) => {
                for item in items {
                    self.extend_from_primitive(item);
                }
            }
            // Only one level deep: arrays of primitives are expanded, anything else is ignored.
            Value::Object(map) => {
                for nested in map.values() {
                    match nested {
                        Value::Array(items) => {
                            for item in items {
                                self.extend_from_primitive(item);
                            }
                        }
                        other => self.extend_from_primitive(other),
                    }
                }
            }
            Value::Null | Value::Bool(_) => {}
        }
    }

    /// 平文テキストからトークンを追加する。
    pub fn extend_from_text(&mut self, text: &str) {
        let lowered = text.to_lowercase();
        for piece in SEPARATOR_RE.split(&lowered) {
            if piece.len() >= MIN_TOKEN_LEN {
                self.insert(piece);
            }
        }
    }

    fn extend_from_primitive(&mut self, value: &Value) {
        match value {
            Value::String(text) => self.extend_from_text(text),
            Value::Number(number) => self.extend_from_text(&number.to_string()),
            _ => {}
        }
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&String) -> &str>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.iter().map(String::as_str as fn(&String) -> &str)
    }
}

impl<S: Into<String>> FromIterator<S> for TokenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tokens = Self::new();
        for token in iter {
            tokens.insert(token);
        }
        tokens
    }
}

/// 複数の値をまとめてトークン化する。
///
/// `null` や空の値は黙って読み飛ばす。
#[must_use]
pub fn tokenize<'a, I>(values: I) -> TokenSet
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut tokens = TokenSet::new();
    for value in values {
        tokens.extend_from_value(value);
    }
    tokens
}
