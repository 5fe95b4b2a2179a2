//! Stable error codes and messages for gardener errors.

use gardener_core::{Gardener, GardenerBuilder, GardenerError, GardenerErrorCode};
use rstest::rstest;

#[rstest]
#[case(
    GardenerError::ElementCountTooSmall { got: 3, minimum: 4 },
    GardenerErrorCode::ElementCountTooSmall,
    "GARDENER_ELEMENT_COUNT_TOO_SMALL"
)]
#[case(
    GardenerError::LinkBudgetExceeded { links: 9, budget: 2 },
    GardenerErrorCode::LinkBudgetExceeded,
    "GARDENER_LINK_BUDGET_EXCEEDED"
)]
#[case(GardenerError::EmptySite, GardenerErrorCode::EmptySite, "GARDENER_EMPTY_SITE")]
#[case(
    GardenerError::InvalidConfiguration { field: "tld", reason: "must not be empty".to_owned() },
    GardenerErrorCode::InvalidConfiguration,
    "GARDENER_INVALID_CONFIGURATION"
)]
#[case(
    GardenerError::InvariantViolation { message: "page was never rendered".to_owned() },
    GardenerErrorCode::InvariantViolation,
    "GARDENER_INVARIANT_VIOLATION"
)]
fn errors_map_to_stable_codes(
    #[case] error: GardenerError,
    #[case] code: GardenerErrorCode,
    #[case] text: &str,
) {
    assert_eq!(error.code(), code);
    assert_eq!(code.as_str(), text);
    assert_eq!(code.to_string(), text);
}

#[rstest]
#[case(GardenerError::ElementCountTooSmall { got: 2, minimum: 4 }, "element count must exceed 4 (got 2)")]
#[case(
    GardenerError::LinkBudgetExceeded { links: 5, budget: 1 },
    "5 links cannot be placed in a page with 1 free elements"
)]
#[case(GardenerError::EmptySite, "a site needs at least one page")]
fn errors_render_readable_messages(#[case] error: GardenerError, #[case] message: &str) {
    assert_eq!(error.to_string(), message);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(4)]
fn undersized_pages_report_their_code(#[case] element_count: usize) {
    let err = Gardener::from_seed(0)
        .generate_page(element_count, Vec::new())
        .expect_err("skeleton-only pages are rejected");
    assert_eq!(err.code(), GardenerErrorCode::ElementCountTooSmall);
}

#[test]
fn overfull_link_sets_report_their_code() {
    let links = (0..4).map(|idx| format!("L{idx}"));
    let err = Gardener::from_seed(0)
        .generate_page(6, links)
        .expect_err("four links cannot fit in two free elements");
    assert_eq!(
        err,
        GardenerError::LinkBudgetExceeded {
            links: 4,
            budget: 2
        }
    );
}

#[test]
fn empty_sites_report_their_code() {
    let err = Gardener::from_seed(0)
        .generate_site(0)
        .expect_err("a site needs an origin");
    assert_eq!(err.code(), GardenerErrorCode::EmptySite);
}

#[rstest]
#[case::filler(GardenerBuilder::new().with_filler_length(0), "filler_length")]
#[case::padding(GardenerBuilder::new().with_page_padding(0), "page_padding")]
#[case::scheme(GardenerBuilder::new().with_scheme(""), "scheme")]
#[case::tld(GardenerBuilder::new().with_tld(""), "tld")]
fn builder_rejections_name_the_field(#[case] builder: GardenerBuilder, #[case] expected: &str) {
    let err = builder.build().expect_err("configuration must be rejected");
    assert_eq!(err.code(), GardenerErrorCode::InvalidConfiguration);
    match err {
        GardenerError::InvalidConfiguration { field, .. } => assert_eq!(field, expected),
        other => panic!("unexpected error: {other:?}"),
    }
}
