/// 学習クラスタの静的タクソノミー。
///
/// 5つのクラスタ定義を宣言順に保持します。宣言順はスコア同点時の優先順位でもあるため、
/// 並び替えてはいけません。`general` は常に最後に置かれ、スコアリング対象外の受け皿です。
use std::fmt;

use serde::{Deserialize, Serialize};

/// クラスタの正規キー。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterKey {
    Operations,
    Growth,
    Enablement,
    Community,
    General,
}

impl ClusterKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Operations => "operations",
            Self::Growth => "growth",
            Self::Enablement => "enablement",
            Self::Community => "community",
            Self::General => "general",
        }
    }

    /// 対応するクラスタ定義を返す。
    #[must_use]
    pub fn definition(self) -> &'static ClusterDefinition {
        definition(self)
    }
}

impl fmt::Display for ClusterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// クラスタ定義。表示用の文字列とスコアリング用のキーワード・エイリアスを持つ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterDefinition {
    pub key: ClusterKey,
    pub label: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub aliases: &'static [&'static str],
    pub accent: &'static str,
    pub background: &'static str,
    pub badge: &'static str,
}

/// クラスタ定義の一覧（宣言順）。
pub static CLUSTER_DEFINITIONS: [ClusterDefinition; 5] = [
    // Operations - 運用、自動化、信頼性、コンプライアンスなど
    ClusterDefinition {
        key: ClusterKey::Operations,
        label: "Operations & reliability",
        description: "Runbooks, automation, compliance and the processes that keep teams shipping safely.",
        keywords: &[
            "operations",
            "operational",
            "automation",
            "workflow",
            "process",
            "compliance",
            "incident",
            "runbook",
            "reliability",
            "infrastructure",
            "security",
            "logistics",
            "monitoring",
            "governance",
        ],
        aliases: &["operations", "ops", "devops", "sre"],
        accent: "text-sky-700",
        background: "bg-sky-50",
        badge: "Ops",
    },
    // Growth - マーケティング、営業、収益、実験など
    ClusterDefinition {
        key: ClusterKey::Growth,
        label: "Growth & revenue",
        description: "Marketing, sales and experimentation programmes that grow reach and revenue.",
        keywords: &[
            "growth",
            "marketing",
            "sales",
            "revenue",
            "acquisition",
            "funnel",
            "conversion",
            "campaign",
            "advertising",
            "retention",
            "pricing",
            "experiment",
            "seo",
            "brand",
        ],
        aliases: &["growth", "marketing", "gtm", "sales"],
        accent: "text-emerald-700",
        background: "bg-emerald-50",
        badge: "Growth",
    },
    // Enablement - 研修、オンボーディング、スキル習得など
    ClusterDefinition {
        key: ClusterKey::Enablement,
        label: "Enablement & skills",
        description: "Training paths, onboarding and certification that build durable skills.",
        keywords: &[
            "enablement",
            "training",
            "curriculum",
            "onboarding",
            "skill",
            "certification",
            "coaching",
            "tutorial",
            "lesson",
            "workshop",
            "mentor",
            "tutor",
            "bootcamp",
            "upskill",
        ],
        aliases: &["enablement", "training", "onboarding", "upskilling"],
        accent: "text-violet-700",
        background: "bg-violet-50",
        badge: "Enablement",
    },
    // Community - コホート、イベント、交流など
    ClusterDefinition {
        key: ClusterKey::Community,
        label: "Community & events",
        description: "Cohorts, meetups and live conversations where learners connect with peers.",
        keywords: &[
            "community",
            "cohort",
            "event",
            "meetup",
            "forum",
            "network",
            "ama",
            "webinar",
            "discussion",
            "peer",
            "circle",
            "alumni",
            "summit",
            "hangout",
        ],
        aliases: &["community", "cohort", "peers", "meetup"],
        accent: "text-amber-700",
        background: "bg-amber-50",
        badge: "Community",
    },
    // General - 明確に分類できないもの（スコアリング対象外）
    ClusterDefinition {
        key: ClusterKey::General,
        label: "General learning",
        description: "Everything else in the library that has not been tagged to a focused cluster yet.",
        keywords: &[],
        aliases: &["general", "default", "other", "uncategorized"],
        accent: "text-slate-700",
        background: "bg-slate-50",
        badge: "General",
    },
];

/// クラスタ定義の一覧を宣言順で返す。
#[must_use]
pub fn cluster_definitions() -> &'static [ClusterDefinition] {
    &CLUSTER_DEFINITIONS
}

/// キーに対応するクラスタ定義を返す。
#[must_use]
pub fn definition(key: ClusterKey) -> &'static ClusterDefinition {
    CLUSTER_DEFINITIONS
        .iter()
        .find(|definition| definition.key == key)
        .unwrap_or(&CLUSTER_DEFINITIONS[CLUSTER_DEFINITIONS.len() - 1])
}

/// 候補文字列を正規のクラスタキーに変換する。
///
/// 前後の空白を除去し小文字化した上で、各定義の `key` もしくは `aliases` と完全一致するものを探す。
/// 空文字列や一致しない場合は `None` を返す。
#[must_use]
pub fn normalize_cluster_key(candidate: &str) -> Option<ClusterKey> {
    let normalized = candidate.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    CLUSTER_DEFINITIONS
        .iter()
        .find(|definition| {
            definition.key.as_str() == normalized
                || definition.aliases.iter().any(|alias| *alias == normalized)
        })
        .map(|definition| definition.key)
}
