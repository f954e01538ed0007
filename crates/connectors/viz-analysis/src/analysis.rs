//! The analysis operations offered by the service.

use serde_json::{Map, Value};
use tracing::{info_span, Instrument};

use query_engine_collaboration::{aggregate, CollaborationType};
use query_engine_execution::authors::AuthorRecordSource;
use query_engine_execution::error::Error;
use query_engine_execution::metrics::Metrics;
use query_engine_execution::query::{self, ResultRow};
use query_engine_metadata::metadata;
use query_engine_translation::translation::query::translate;
use query_engine_translation::translation::request::AnalysisRequest;
use viz_analysis_configuration::Configuration;

use super::state::State;

/// The key of `extraData` naming the attribute to count collaborations over.
pub const COLLABORATION_TYPE_KEY: &str = "collabType";

/// Translate the request into SQL and run it.
pub async fn analyse(
    configuration: &Configuration,
    state: &State,
    request: &AnalysisRequest,
) -> Result<Vec<ResultRow>, Error> {
    let plan = info_span!("Plan query").in_scope(|| translate(&configuration.metadata, request));

    match query::execute(&state.pool, &state.metrics, plan)
        .instrument(info_span!("Execute query"))
        .await
    {
        Ok(rows) => {
            state.metrics.record_successful_analysis();
            Ok(rows)
        }
        Err(err) => {
            state.metrics.record_error();
            tracing::error!(
                meta.signal_type = "log",
                event.domain = "viz",
                event.name = "Analysis error",
                name = "Analysis error",
                body = %err,
                error = true,
            );
            Err(err)
        }
    }
}

/// Count collaborations between authors of the request's record group.
///
/// `Ok(None)` when the record group has no author records.
pub async fn analyse_coauthorship(
    source: &(impl AuthorRecordSource + Sync),
    metrics: &Metrics,
    request: &AnalysisRequest,
) -> Result<Option<Vec<Map<String, Value>>>, Error> {
    let collaboration_type = collaboration_type(request);

    let records = source
        .find_by_record_group(request.record_group_id)
        .instrument(info_span!("Load author records"))
        .await
        .map_err(|err| {
            metrics.record_error();
            tracing::error!(
                meta.signal_type = "log",
                event.domain = "viz",
                event.name = "Co-authorship error",
                name = "Co-authorship error",
                body = %err,
                error = true,
            );
            err
        })?;

    let rows = info_span!("Aggregate collaborations", %collaboration_type).in_scope(|| {
        aggregate(records.as_deref(), &collaboration_type).map(|counts| {
            counts
                .iter()
                .map(|count| count.to_row(&collaboration_type))
                .collect()
        })
    });

    metrics.record_successful_coauthorship();
    Ok(rows)
}

/// Read the collaboration type from `extraData`. A missing key is an
/// unrecognized (empty) type; non-string values are read as their JSON text.
pub fn collaboration_type(request: &AnalysisRequest) -> CollaborationType {
    match request.extra_data.get(COLLABORATION_TYPE_KEY) {
        Some(Value::String(name)) => CollaborationType::from(name.as_str()),
        Some(other) => CollaborationType::from(other.to_string().as_str()),
        None => CollaborationType::from(""),
    }
}

/// The SQL an analysis request translates to, optionally pretty printed.
pub fn generated_sql(
    metadata: &metadata::Metadata,
    request: &AnalysisRequest,
    pretty: bool,
) -> String {
    let sql = translate(metadata, request).query.query_sql().sql;
    if pretty {
        sqlformat::format(
            &sql,
            &sqlformat::QueryParams::None,
            sqlformat::FormatOptions::default(),
        )
    } else {
        sql
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use prometheus::Registry;
    use query_engine_collaboration::AuthorRecord;
    use query_engine_translation::translation::request::InvolvedRecord;
    use serde_json::json;

    use super::*;

    struct InMemoryAuthors(HashMap<i64, Vec<AuthorRecord>>);

    #[async_trait]
    impl AuthorRecordSource for InMemoryAuthors {
        async fn find_by_record_group(
            &self,
            record_group_id: i64,
        ) -> Result<Option<Vec<AuthorRecord>>, Error> {
            Ok(self.0.get(&record_group_id).cloned())
        }
    }

    struct BrokenAuthors;

    #[async_trait]
    impl AuthorRecordSource for BrokenAuthors {
        async fn find_by_record_group(
            &self,
            _record_group_id: i64,
        ) -> Result<Option<Vec<AuthorRecord>>, Error> {
            Err(Error::DB(sqlx::Error::PoolTimedOut))
        }
    }

    fn author(submission_id: &str, country: &str, organisation: &str) -> AuthorRecord {
        AuthorRecord {
            submission_id: submission_id.to_string(),
            country: country.to_string(),
            organisation: organisation.to_string(),
        }
    }

    fn source() -> InMemoryAuthors {
        InMemoryAuthors(HashMap::from([(
            7,
            vec![
                author("s1", "SG", "NUS"),
                author("s1", "US", "CMU"),
                author("s2", "SG", "NUS"),
                author("s2", "US", "CMU"),
                author("s2", "SG", "NTU"),
            ],
        )]))
    }

    fn request(record_group_id: i64, collab_type: Option<Value>) -> AnalysisRequest {
        let mut request = AnalysisRequest::new("ds", record_group_id);
        if let Some(collab_type) = collab_type {
            request
                .extra_data
                .insert(COLLABORATION_TYPE_KEY.to_string(), collab_type);
        }
        request
    }

    fn metrics() -> Metrics {
        Metrics::initialize(&mut Registry::new()).unwrap()
    }

    #[tokio::test]
    async fn counts_country_collaborations() {
        let rows = analyse_coauthorship(&source(), &metrics(), &request(7, Some(json!("country"))))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            Value::from(rows.into_iter().map(Value::Object).collect::<Vec<_>>()),
            json!([{"country": "SG-US", "value": 2}])
        );
    }

    #[tokio::test]
    async fn counts_organization_collaborations() {
        let rows = analyse_coauthorship(
            &source(),
            &metrics(),
            &request(7, Some(json!("organization"))),
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(
            Value::from(rows.into_iter().map(Value::Object).collect::<Vec<_>>()),
            json!([
                {"organization": "CMU-NUS", "value": 2},
                {"organization": "NTU-NUS", "value": 1},
                {"organization": "CMU-NTU", "value": 1},
            ])
        );
    }

    #[tokio::test]
    async fn unknown_record_group_is_unavailable() {
        let rows = analyse_coauthorship(&source(), &metrics(), &request(8, Some(json!("country"))))
            .await
            .unwrap();
        assert!(rows.is_none());
    }

    #[tokio::test]
    async fn missing_collaboration_type_yields_no_pairs() {
        let rows = analyse_coauthorship(&source(), &metrics(), &request(7, None))
            .await
            .unwrap()
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn source_errors_are_counted_and_returned() {
        let mut registry = Registry::new();
        let metrics = Metrics::initialize(&mut registry).unwrap();
        let result =
            analyse_coauthorship(&BrokenAuthors, &metrics, &request(7, Some(json!("country"))))
                .await;
        assert!(matches!(result, Err(Error::DB(sqlx::Error::PoolTimedOut))));

        let errors = registry
            .gather()
            .into_iter()
            .find(|family| family.get_name() == "viz_analysis_error_total")
            .map(|family| family.get_metric()[0].get_counter().get_value());
        assert_eq!(errors, Some(1.0));
    }

    #[test]
    fn reads_collaboration_type_from_extra_data() {
        assert_eq!(
            collaboration_type(&request(1, Some(json!("country")))),
            CollaborationType::Country
        );
        assert_eq!(
            collaboration_type(&request(1, Some(json!(3)))),
            CollaborationType::Unrecognized("3".to_string())
        );
        assert_eq!(
            collaboration_type(&request(1, None)),
            CollaborationType::Unrecognized(String::new())
        );
    }

    #[test]
    fn generated_sql_is_the_translation() {
        let mut request = request(5, None);
        request.involved_records = vec![InvolvedRecord {
            name: "submission".to_string(),
            customized: false,
        }];
        let metadata = metadata::Metadata::exportable();

        similar_asserts::assert_eq!(
            generated_sql(&metadata, &request, false),
            "SELECT * FROM submission WHERE true AND submission.data_set = 'ds' AND submission.rg_id = '5'"
        );
        assert!(generated_sql(&metadata, &request, true).contains("\nFROM"));
    }
}
