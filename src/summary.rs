/// ダッシュボード向けのクラスタ集計。
///
/// 種別ごとのコレクションを分類し、クラスタ×種別の件数と表示用の例を組み立てます。
/// 集計結果は呼び出しごとに作り直され、保持されません。
use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::classifier::ContentKind;
use crate::cluster::{CLUSTER_DEFINITIONS, ClusterKey};
use crate::util::json::first_text;

/// クラスタごとに保持する例の最大数。
pub const EXAMPLE_LIMIT: usize = 3;

/// 名前を持たない `general` アセットの表示名。
pub const ASSET_PLACEHOLDER_NAME: &str = "Library asset";

const EMPTY_INVENTORY: &str = "No inventory yet";
const COUNT_SEPARATOR: &str = " • ";

/// 集計対象のコレクション。どの種別も省略可能。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClusterInventory {
    #[serde(deserialize_with = "lenient_items")]
    pub assets: Vec<Value>,
    #[serde(deserialize_with = "lenient_items")]
    pub courses: Vec<Value>,
    #[serde(deserialize_with = "lenient_items")]
    pub live_classrooms: Vec<Value>,
    #[serde(deserialize_with = "lenient_items")]
    pub search_sections: Vec<Value>,
}

impl ClusterInventory {
    #[must_use]
    pub fn items(&self, kind: ContentKind) -> &[Value] {
        match kind {
            ContentKind::Asset => &self.assets,
            ContentKind::Course => &self.courses,
            ContentKind::LiveClassroom => &self.live_classrooms,
            ContentKind::SearchSection => &self.search_sections,
        }
    }
}

/// 配列以外（`null` や文字列など）は空のコレクションとして扱う。
fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items),
        _ => Ok(Vec::new()),
    }
}

/// 種別ごとの件数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeCounts {
    pub assets: usize,
    pub courses: usize,
    pub live_classrooms: usize,
    pub search_sections: usize,
}

impl TypeCounts {
    #[must_use]
    pub fn get(&self, kind: ContentKind) -> usize {
        match kind {
            ContentKind::Asset => self.assets,
            ContentKind::Course => self.courses,
            ContentKind::LiveClassroom => self.live_classrooms,
            ContentKind::SearchSection => self.search_sections,
        }
    }

    fn slot_mut(&mut self, kind: ContentKind) -> &mut usize {
        match kind {
            ContentKind::Asset => &mut self.assets,
            ContentKind::Course => &mut self.courses,
            ContentKind::LiveClassroom => &mut self.live_classrooms,
            ContentKind::SearchSection => &mut self.search_sections,
        }
    }

    pub fn increment(&mut self, kind: ContentKind) {
        *self.slot_mut(kind) += 1;
    }

    #[must_use]
    pub fn total(&self) -> usize {
        ContentKind::ALL.iter().map(|kind| self.get(*kind)).sum()
    }
}

/// 種別ごとの表示用の例（初出順、重複なし、最大 [`EXAMPLE_LIMIT`] 件）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeExamples {
    pub assets: Vec<String>,
    pub courses: Vec<String>,
    pub live_classrooms: Vec<String>,
    pub search_sections: Vec<String>,
}

impl TypeExamples {
    #[must_use]
    pub fn get(&self, kind: ContentKind) -> &[String] {
        match kind {
            ContentKind::Asset => &self.assets,
            ContentKind::Course => &self.courses,
            ContentKind::LiveClassroom => &self.live_classrooms,
            ContentKind::SearchSection => &self.search_sections,
        }
    }

    fn push(&mut self, kind: ContentKind, name: String) {
        let slot = match kind {
            ContentKind::Asset => &mut self.assets,
            ContentKind::Course => &mut self.courses,
            ContentKind::LiveClassroom => &mut self.live_classrooms,
            ContentKind::SearchSection => &mut self.search_sections,
        };
        if slot.len() < EXAMPLE_LIMIT && !slot.contains(&name) {
            slot.push(name);
        }
    }
}

/// 1クラスタ分の集計結果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSummaryEntry {
    pub key: ClusterKey,
    pub label: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub badge: &'static str,
    pub counts: TypeCounts,
    pub examples: TypeExamples,
    pub total: usize,
}

/// 全クラスタの集計結果。`clusters` は常に定義の宣言順で5件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSummary {
    pub clusters: Vec<ClusterSummaryEntry>,
    pub totals: TypeCounts,
    pub total: usize,
}

impl ClusterSummary {
    #[must_use]
    pub fn entry(&self, key: ClusterKey) -> Option<&ClusterSummaryEntry> {
        self.clusters.iter().find(|entry| entry.key == key)
    }
}

/// 種別内での重複判定に使う識別子。
fn item_identifier(kind: ContentKind, item: &Value, index: usize) -> String {
    if let Some(id) = first_text(item, &["id", "publicId", "slug"]) {
        return id;
    }
    if let Some(name) = first_text(item, &["title", "name"]) {
        return name.trim().to_lowercase();
    }
    format!("{}:{index}", kind.as_str())
}

fn display_name(kind: ContentKind, item: &Value, cluster: ClusterKey) -> Option<String> {
    let name = first_text(item, kind.name_paths()).map(|name| name.trim().to_string());

    match name {
        Some(name) => Some(name),
        None if kind == ContentKind::Asset && cluster == ClusterKey::General => {
            Some(ASSET_PLACEHOLDER_NAME.to_string())
        }
        None => None,
    }
}

/// コレクションを分類してクラスタ別に集計する。
#[must_use]
pub fn summarise(inventory: &ClusterInventory) -> ClusterSummary {
    let mut clusters: Vec<ClusterSummaryEntry> = CLUSTER_DEFINITIONS
        .iter()
        .map(|definition| ClusterSummaryEntry {
            key: definition.key,
            label: definition.label,
            description: definition.description,
            accent: definition.accent,
            background: definition.background,
            badge: definition.badge,
            counts: TypeCounts::default(),
            examples: TypeExamples::default(),
            total: 0,
        })
        .collect();
    let mut totals = TypeCounts::default();

    for kind in ContentKind::ALL {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        for (index, item) in inventory.items(kind).iter().enumerate() {
            if !seen.insert(item_identifier(kind, item, index)) {
                continue;
            }

            let cluster = kind.classify(item).key;
            let Some(entry) = clusters.iter_mut().find(|entry| entry.key == cluster) else {
                continue;
            };
            entry.counts.increment(kind);
            entry.total += 1;
            totals.increment(kind);

            if let Some(name) = display_name(kind, item, cluster) {
                entry.examples.push(kind, name);
            }
        }
    }

    let total = totals.total();
    debug!(
        total,
        assets = totals.assets,
        courses = totals.courses,
        live_classrooms = totals.live_classrooms,
        search_sections = totals.search_sections,
        "cluster summary built"
    );

    ClusterSummary {
        clusters,
        totals,
        total,
    }
}

fn count_label(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Asset => "asset",
        ContentKind::Course => "course",
        ContentKind::LiveClassroom => "live session",
        ContentKind::SearchSection => "search surface",
    }
}

/// 件数を "3 courses • 1 live session" の形式に整形する。
///
/// 件数 0 の種別は省略し、全て 0 の場合は "No inventory yet" を返す。
#[must_use]
pub fn format_counts(counts: &TypeCounts) -> String {
    let parts: Vec<String> = ContentKind::ALL
        .iter()
        .filter_map(|kind| {
            let count = counts.get(*kind);
            if count == 0 {
                return None;
            }
            let plural = if count == 1 { "" } else { "s" };
            Some(format!("{count} {}{plural}", count_label(*kind)))
        })
        .collect();

    if parts.is_empty() {
        EMPTY_INVENTORY.to_string()
    } else {
        parts.join(COUNT_SEPARATOR)
    }
}

/// 指定クラスタに分類される項目だけを入力順で返す。
#[must_use]
pub fn filter_by_cluster(kind: ContentKind, items: &[Value], key: ClusterKey) -> Vec<&Value> {
    items
        .iter()
        .filter(|item| kind.classify(item).key == key)
        .collect()
}
