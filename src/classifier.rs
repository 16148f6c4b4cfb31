//! 学習クラスタ分類: トークンのキーワード/エイリアス照合 + コンテンツ種別ごとのアダプタ

pub mod content;
pub mod scoring;

pub use content::{
    ContentKind, cluster_for_asset, cluster_for_course, cluster_for_live_classroom,
    cluster_for_search_section,
};
pub use scoring::{detect_cluster, score_tokens};
