use std::fs;
use std::path::PathBuf;

use query_engine_metadata::metadata;
use query_engine_translation::translation;

/// Translate the request stored in a golden file directory and return the SQL.
pub fn test_translation(testname: &str) -> anyhow::Result<String> {
    let directory = PathBuf::from("tests/goldenfiles").join(testname);

    let request: translation::request::AnalysisRequest =
        serde_json::from_str(&fs::read_to_string(directory.join("request.json"))?)?;

    let plan = translation::query::translate(&metadata::Metadata::exportable(), &request);

    Ok(plan.query.query_sql().sql)
}
