#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod classifier;
pub mod cluster;
pub mod config;
pub mod inventory;
pub mod observability;
pub mod summary;
pub mod util;

pub use classifier::{
    ContentKind, cluster_for_asset, cluster_for_course, cluster_for_live_classroom,
    cluster_for_search_section, detect_cluster, score_tokens,
};
pub use cluster::{
    CLUSTER_DEFINITIONS, ClusterDefinition, ClusterKey, cluster_definitions, definition,
    normalize_cluster_key,
};
pub use summary::{
    ClusterInventory, ClusterSummary, ClusterSummaryEntry, TypeCounts, TypeExamples,
    filter_by_cluster, format_counts, summarise,
};
pub use util::text::{TokenSet, tokenize};
