//! トークン集合からクラスタを決定するスコアリング。
use tracing::trace;

use crate::cluster::{CLUSTER_DEFINITIONS, ClusterDefinition, ClusterKey, normalize_cluster_key};
use crate::util::text::TokenSet;

const EXACT_MATCH: u32 = 3;
const PREFIX_MATCH: u32 = 2;
const SUBSTRING_MATCH: u32 = 1;

/// 1組のキーワードとトークンの一致度を返す。
fn pair_score(keyword: &str, token: &str) -> u32 {
    if token == keyword {
        EXACT_MATCH
    } else if keyword.starts_with(token) || token.starts_with(keyword) {
        PREFIX_MATCH
    } else if token.contains(keyword) {
        SUBSTRING_MATCH
    } else {
        0
    }
}

/// 指定されたクラスタ定義に対するトークン集合のスコアを計算する。
///
/// 全ての (キーワード, トークン) の組について、完全一致 +3、前方一致 +2、部分一致 +1 を加算する。
#[must_use]
pub fn score_tokens(tokens: &TokenSet, definition: &ClusterDefinition) -> u32 {
    if tokens.is_empty() {
        return 0;
    }

    definition
        .keywords
        .iter()
        .map(|keyword| {
            tokens
                .iter()
                .map(|token| pair_score(keyword, token))
                .sum::<u32>()
        })
        .sum()
}

/// トークン集合と明示的な指定からクラスタキーを決定する。
///
/// 1. 明示指定が有効なキーもしくはエイリアスなら、それを無条件に採用する。
/// 2. `general` 以外の定義を宣言順に走査し、エイリアスがトークンに含まれていれば即座に返す。
///    含まれていなければスコアを計算し、最大値を保持する（同点は先に宣言された定義が勝つ）。
/// 3. 最大スコアが 0 より大きければそのキー、そうでなければ `general` を返す。
///
/// エイリアス判定はスコア計算と同じ走査の中で行うため、後方の定義のエイリアス一致は
/// それ以前の定義が得たスコアに関係なく優先される。
#[must_use]
pub fn detect_cluster(tokens: &TokenSet, explicit: Option<&str>) -> ClusterKey {
    if let Some(candidate) = explicit
        && let Some(key) = normalize_cluster_key(candidate)
    {
        trace!(cluster = %key, candidate, "explicit cluster override applied");
        return key;
    }

    let mut best: Option<(ClusterKey, u32)> = None;
    for definition in CLUSTER_DEFINITIONS
        .iter()
        .filter(|definition| definition.key != ClusterKey::General)
    {
        if let Some(alias) = definition
            .aliases
            .iter()
            .find(|alias| tokens.contains(alias))
        {
            trace!(cluster = %definition.key, alias, "cluster alias matched");
            return definition.key;
        }

        let score = score_tokens(tokens, definition);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((definition.key, score));
        }
    }

    match best {
        Some((key, score)) if score > 0 => {
            trace!(cluster = %key, score, "cluster selected by keyword score");
            key
        }
        _ => ClusterKey::General,
    }
}
