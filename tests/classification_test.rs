/// コンテンツ種別ごとの分類の結合テスト。
///
/// 明示指定の優先、エイリアスの即時決定、同点時の宣言順、フォールバックを確認します。
use learning_clusters::{
    ClusterKey, ContentKind, cluster_for_asset, cluster_for_course, cluster_for_live_classroom,
    cluster_for_search_section, detect_cluster, tokenize,
};
use proptest::prelude::*;
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case::course_text(ContentKind::Course, json!({"title": "Ops automation handbook", "category": "operations"}), ClusterKey::Operations)]
#[case::course_skills(ContentKind::Course, json!({"title": "Pipeline reviews", "skills": ["Pricing", "Conversion"]}), ClusterKey::Growth)]
#[case::course_delivery_format(ContentKind::Course, json!({"title": "Intro", "deliveryFormat": "bootcamp"}), ClusterKey::Enablement)]
#[case::live_community(ContentKind::LiveClassroom, json!({"title": "Founders circle", "communityName": "Alumni network"}), ClusterKey::Community)]
#[case::asset_filename(ContentKind::Asset, json!({"originalFilename": "incident-runbook.pdf"}), ClusterKey::Operations)]
#[case::search_section(ContentKind::SearchSection, json!({"key": "tutors", "title": "Tutors"}), ClusterKey::Enablement)]
#[case::unmatched(ContentKind::Course, json!({"title": "Watercolour basics"}), ClusterKey::General)]
fn classifies_by_kind_specific_fields(
    #[case] kind: ContentKind,
    #[case] item: Value,
    #[case] expected: ClusterKey,
) {
    assert_eq!(kind.classify(&item).key, expected);
}

#[rstest]
#[case::course(ContentKind::Course, json!({"title": "Incident runbook automation", "metadata": {"clusterKey": "growth"}}))]
#[case::course_top_level(ContentKind::Course, json!({"title": "Incident runbook automation", "clusterKey": "GTM"}))]
#[case::live_classroom(ContentKind::LiveClassroom, json!({"title": "Incident review", "clusterKey": "marketing"}))]
#[case::asset(ContentKind::Asset, json!({"title": "Incident runbook", "metadata": {"custom": {"clusterKey": "growth"}}}))]
#[case::search_section(ContentKind::SearchSection, json!({"title": "Runbooks", "clusterKey": " Growth "}))]
fn explicit_override_takes_precedence(#[case] kind: ContentKind, #[case] item: Value) {
    assert_eq!(kind.classify(&item).key, ClusterKey::Growth);
}

#[test]
fn adapters_return_full_descriptor() {
    let cluster = cluster_for_course(&json!({"title": "Growth sprint"}));
    assert_eq!(cluster.key, ClusterKey::Growth);
    assert_eq!(cluster.badge, "Growth");
    assert!(!cluster.description.is_empty());
    assert!(!cluster.accent.is_empty());
    assert!(!cluster.background.is_empty());
}

#[test]
fn alias_short_circuit_beats_partial_scores() {
    // Growth scores on every tag here, the community alias still decides.
    let session = json!({
        "title": "cohort",
        "tags": ["campaigns", "marketingops", "funnels"]
    });
    assert_eq!(
        cluster_for_live_classroom(&session).key,
        ClusterKey::Community
    );
}

#[test]
fn tie_resolves_to_earlier_declared_cluster() {
    let course = json!({"title": "Funnel incident"});
    assert_eq!(cluster_for_course(&course).key, ClusterKey::Operations);

    let course = json!({"title": "Funnel workshop"});
    assert_eq!(cluster_for_course(&course).key, ClusterKey::Growth);
}

#[test]
fn empty_items_fall_back_to_general() {
    let empty = json!({"title": "", "summary": "", "tags": []});
    assert_eq!(cluster_for_course(&empty).key, ClusterKey::General);
    assert_eq!(cluster_for_asset(&empty).key, ClusterKey::General);
    assert_eq!(cluster_for_live_classroom(&empty).key, ClusterKey::General);
    assert_eq!(cluster_for_search_section(&empty).key, ClusterKey::General);
}

#[test]
fn detector_accepts_tokens_from_mixed_values() {
    let title = json!("Peer mentoring");
    let tags = json!({"primary": "circle", "extra": ["forum"]});
    let tokens = tokenize([&title, &tags]);
    assert_eq!(detect_cluster(&tokens, None), ClusterKey::Community);
}

proptest! {
    #[test]
    fn classification_is_deterministic(title in "[a-zA-Z ]{0,40}", tags in prop::collection::vec("[a-z]{1,10}", 0..5)) {
        let item = json!({"title": title, "tags": tags});
        for kind in ContentKind::ALL {
            prop_assert_eq!(kind.classify(&item).key, kind.classify(&item).key);
        }
    }

    #[test]
    fn valid_override_always_wins(title in "[a-zA-Z ]{0,40}", index in 0usize..5) {
        let key = learning_clusters::CLUSTER_DEFINITIONS[index].key;
        let item = json!({"title": title, "clusterKey": key.as_str()});
        prop_assert_eq!(cluster_for_course(&item).key, key);
    }

    #[test]
    fn punctuation_and_short_fragments_fall_back_to_general(noise in "[-_.,;:!?()/ ]{0,20}( [a-z0-9])?") {
        let item = json!({"title": noise});
        prop_assert_eq!(cluster_for_course(&item).key, ClusterKey::General);
    }
}
