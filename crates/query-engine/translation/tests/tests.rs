mod common;

#[test]
fn select_all_from_submission() {
    let result = common::test_translation("select_all_from_submission").unwrap();
    insta::assert_snapshot!(result);
}

#[test]
fn customized_view_is_not_scoped() {
    let result = common::test_translation("customized_view_is_not_scoped").unwrap();
    insta::assert_snapshot!(result);
}

#[test]
fn country_counts() {
    let result = common::test_translation("country_counts").unwrap();
    insta::assert_snapshot!(result);
}

#[test]
fn review_scores_by_track() {
    let result = common::test_translation("review_scores_by_track").unwrap();
    insta::assert_snapshot!(result);
}

#[test]
fn empty_clauses_are_omitted() {
    let result = common::test_translation("select_all_from_submission").unwrap();
    assert!(!result.contains("GROUP BY"));
    assert!(!result.contains("ORDER BY"));
    assert!(!result.contains(" = submission"));
}
