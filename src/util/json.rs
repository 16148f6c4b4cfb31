use serde_json::Value;

/// ドット区切りのパスで値を辿る。途中がオブジェクトでなければ `None`。
pub(crate) fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, segment| current.as_object()?.get(segment))
}

/// 文字列もしくは数値を文字列として取り出す。空文字列は `None`。
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// 複数のパスのうち最初に見つかった文字列値を返す。
pub(crate) fn first_text(value: &Value, paths: &[&str]) -> Option<String> {
    paths
        .iter()
        .find_map(|path| lookup(value, path).and_then(scalar_text))
}
