//! The exportable columns of the record tables that analysis requests query.

use super::database::ValueKind;

/// A record table and the columns it exposes to analysis requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordDescription {
    pub table_name: &'static str,
    pub fields: &'static [ExportableField],
}

/// A column exposed to analysis requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportableField {
    pub name_in_db: &'static str,
    pub kind: ValueKind,
}

const fn field(name_in_db: &'static str, kind: ValueKind) -> ExportableField {
    ExportableField { name_in_db, kind }
}

pub const AUTHOR_RECORD: RecordDescription = RecordDescription {
    table_name: "author_record",
    fields: &[
        field("a_submission_id", ValueKind::Text),
        field("a_first_name", ValueKind::Text),
        field("a_last_name", ValueKind::Text),
        field("a_email", ValueKind::Text),
        field("a_country", ValueKind::Text),
        field("a_organisation", ValueKind::Text),
        field("a_web_page", ValueKind::Text),
        field("a_person_id", ValueKind::Text),
        field("a_is_corresponding", ValueKind::Boolean),
    ],
};

pub const REVIEW_RECORD: RecordDescription = RecordDescription {
    table_name: "review_record",
    fields: &[
        field("r_review_id", ValueKind::Text),
        field("r_submission_id", ValueKind::Text),
        field("r_num_review_assignment", ValueKind::Numeric),
        field("r_reviewer_name", ValueKind::Text),
        field("r_expertise_level", ValueKind::Numeric),
        field("r_confidence_level", ValueKind::Numeric),
        field("r_review_comment", ValueKind::Text),
        field("r_overall_evaluation_score", ValueKind::Numeric),
        field("r_review_submission_time", ValueKind::Text),
        field("r_has_recommended_for_best_paper", ValueKind::Boolean),
    ],
};

pub const SUBMISSION_RECORD: RecordDescription = RecordDescription {
    table_name: "submission_record",
    fields: &[
        field("s_submission_id", ValueKind::Text),
        field("s_track_id", ValueKind::Text),
        field("s_track_name", ValueKind::Text),
        field("s_title", ValueKind::Text),
        field("s_authors", ValueKind::Text),
        field("s_submission_time", ValueKind::Text),
        field("s_last_updated_time", ValueKind::Text),
        field("s_keywords", ValueKind::Text),
        field("s_is_accepted", ValueKind::Boolean),
        field("s_is_notified", ValueKind::Boolean),
        field("s_is_reviews_sent", ValueKind::Boolean),
        field("s_submission_abstract", ValueKind::Text),
    ],
};

/// Every record type whose columns can be referenced by analysis requests.
pub const EXPORTABLE_RECORDS: &[RecordDescription] =
    &[AUTHOR_RECORD, REVIEW_RECORD, SUBMISSION_RECORD];
