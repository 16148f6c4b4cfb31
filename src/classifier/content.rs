//! コンテンツ種別ごとの分類アダプタ。
//!
//! 各種別は読み取るフィールドと明示指定のパスだけが異なり、トークン化とクラスタ判定は共通。
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::scoring::detect_cluster;
use crate::cluster::{ClusterDefinition, ClusterKey, normalize_cluster_key};
use crate::util::json::{lookup, scalar_text};
use crate::util::text::tokenize;

const ASSET_FIELDS: &[&str] = &[
    "title",
    "name",
    "originalFilename",
    "description",
    "category",
    "tags",
    "topics",
    "metadata.custom.tags",
    "metadata.custom.topics",
    "metadata.custom.category",
];
const ASSET_OVERRIDES: &[&str] = &[
    "metadata.custom.clusterKey",
    "metadata.clusterKey",
    "clusterKey",
];

const COURSE_FIELDS: &[&str] = &[
    "title",
    "summary",
    "description",
    "category",
    "tags",
    "skills",
    "level",
    "deliveryFormat",
];

const LIVE_CLASSROOM_FIELDS: &[&str] = &[
    "title",
    "summary",
    "description",
    "type",
    "topics",
    "tags",
    "communityName",
];

const SEARCH_SECTION_FIELDS: &[&str] = &[
    "key",
    "entityType",
    "title",
    "label",
    "description",
    "tags",
    "keywords",
];

const DEFAULT_OVERRIDES: &[&str] = &["clusterKey", "metadata.clusterKey"];

const ASSET_NAMES: &[&str] = &["title", "name", "originalFilename"];
const SEARCH_SECTION_NAMES: &[&str] = &["title", "label", "name"];
const DEFAULT_NAMES: &[&str] = &["title", "name"];

/// 分類対象のコンテンツ種別。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum ContentKind {
    Asset,
    Course,
    LiveClassroom,
    SearchSection,
}

impl ContentKind {
    pub const ALL: [Self; 4] = [
        Self::Asset,
        Self::Course,
        Self::LiveClassroom,
        Self::SearchSection,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Course => "course",
            Self::LiveClassroom => "liveClassroom",
            Self::SearchSection => "searchSection",
        }
    }

    /// トークン化の対象となるフィールドのパス。
    #[must_use]
    pub fn text_fields(self) -> &'static [&'static str] {
        match self {
            Self::Asset => ASSET_FIELDS,
            Self::Course => COURSE_FIELDS,
            Self::LiveClassroom => LIVE_CLASSROOM_FIELDS,
            Self::SearchSection => SEARCH_SECTION_FIELDS,
        }
    }

    /// 明示的なクラスタ指定を探すパス（先頭から順に評価）。
    #[must_use]
    pub fn override_paths(self) -> &'static [&'static str] {
        match self {
            Self::Asset => ASSET_OVERRIDES,
            Self::Course | Self::LiveClassroom | Self::SearchSection => DEFAULT_OVERRIDES,
        }
    }

    /// 表示名を探すパス。
    pub(crate) fn name_paths(self) -> &'static [&'static str] {
        match self {
            Self::Asset => ASSET_NAMES,
            Self::Course | Self::LiveClassroom => DEFAULT_NAMES,
            Self::SearchSection => SEARCH_SECTION_NAMES,
        }
    }

    /// 種別に応じたアダプタで分類する。
    #[must_use]
    pub fn classify(self, item: &Value) -> &'static ClusterDefinition {
        match self {
            Self::Asset => cluster_for_asset(item),
            Self::Course => cluster_for_course(item),
            Self::LiveClassroom => cluster_for_live_classroom(item),
            Self::SearchSection => cluster_for_search_section(item),
        }
    }
}

/// 明示指定のうち、有効なキーもしくはエイリアスとして解釈できる最初の値。
fn explicit_override(item: &Value, paths: &[&str]) -> Option<String> {
    paths
        .iter()
        .filter_map(|path| lookup(item, path).and_then(scalar_text))
        .find(|candidate| normalize_cluster_key(candidate).is_some())
}

fn resolve(kind: ContentKind, item: &Value) -> ClusterKey {
    let explicit = explicit_override(item, kind.override_paths());
    let tokens = tokenize(
        kind.text_fields()
            .iter()
            .filter_map(|path| lookup(item, path)),
    );
    detect_cluster(&tokens, explicit.as_deref())
}

/// ライブラリアセットのクラスタを返す。
#[must_use]
pub fn cluster_for_asset(item: &Value) -> &'static ClusterDefinition {
    resolve(ContentKind::Asset, item).definition()
}

/// コースのクラスタを返す。
#[must_use]
pub fn cluster_for_course(item: &Value) -> &'static ClusterDefinition {
    resolve(ContentKind::Course, item).definition()
}

/// ライブクラスルームのクラスタを返す。
#[must_use]
pub fn cluster_for_live_classroom(item: &Value) -> &'static ClusterDefinition {
    resolve(ContentKind::LiveClassroom, item).definition()
}

/// 検索セクションのクラスタを返す。
#[must_use]
pub fn cluster_for_search_section(item: &Value) -> &'static ClusterDefinition {
    resolve(ContentKind::SearchSection, item).definition()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn course_override_beats_operations_text() {
        let course = json!({
            "title": "Incident runbook automation",
            "metadata": {"clusterKey": "growth"}
        });
        assert_eq!(cluster_for_course(&course).key, ClusterKey::Growth);

        let without_override = json!({"title": "Incident runbook automation"});
        assert_eq!(
            cluster_for_course(&without_override).key,
            ClusterKey::Operations
        );
    }

    #[test]
    fn asset_reads_custom_metadata_override() {
        let asset = json!({
            "title": "Funnel teardown deck",
            "metadata": {"custom": {"clusterKey": "Enablement"}}
        });
        assert_eq!(cluster_for_asset(&asset).key, ClusterKey::Enablement);
    }

    #[test]
    fn invalid_override_moves_to_next_path() {
        let course = json!({
            "title": "Watercolour basics",
            "clusterKey": "finance",
            "metadata": {"clusterKey": "community"}
        });
        assert_eq!(cluster_for_course(&course).key, ClusterKey::Community);
    }

    #[test]
    fn asset_tags_inside_custom_metadata_are_read() {
        let asset = json!({
            "originalFilename": "deck.pdf",
            "metadata": {"custom": {"tags": ["onboarding"]}}
        });
        assert_eq!(cluster_for_asset(&asset).key, ClusterKey::Enablement);
    }

    #[test]
    fn live_classroom_alias_in_tags() {
        let session = json!({
            "title": "Community AMA",
            "type": "webinar",
            "tags": ["cohort"]
        });
        let cluster = cluster_for_live_classroom(&session);
        assert_eq!(cluster.key, ClusterKey::Community);
        assert_eq!(cluster.label, "Community & events");
    }

    #[test]
    fn course_ignores_fields_outside_its_adapter() {
        let course = json!({"title": "Watercolour basics", "communityName": "cohort"});
        assert_eq!(cluster_for_course(&course).key, ClusterKey::General);
    }

    #[test]
    fn search_section_uses_key_and_label() {
        let section = json!({"key": "growth", "label": "Growth playbooks"});
        assert_eq!(cluster_for_search_section(&section).key, ClusterKey::Growth);
    }

    #[test]
    fn malformed_items_fall_back_to_general() {
        for item in [
            json!(null),
            json!("incident"),
            json!(42),
            json!({"title": null, "tags": "", "skills": {"deep": {"x": "ops"}}}),
        ] {
            for kind in ContentKind::ALL {
                assert_eq!(kind.classify(&item).key, ClusterKey::General);
            }
        }
    }

    #[test]
    fn numeric_override_is_not_a_cluster() {
        let course = json!({"title": "Incident drills", "clusterKey": 0});
        assert_eq!(cluster_for_course(&course).key, ClusterKey::Operations);
    }
}
