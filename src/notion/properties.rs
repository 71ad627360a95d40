//! JSON bodies for the Notion database query and page creation endpoints

use super::models::NewTask;
use crate::config::StoreSchema;
use chrono::SecondsFormat;
use serde_json::{json, Map, Value};

/// Filter matching every page whose relation property contains `relation_id`
pub fn query_body(schema: &StoreSchema, relation_id: &str, start_cursor: Option<&str>) -> Value {
    let mut body = json!({
        "filter": {
            "property": schema.relation_property,
            "relation": {
                "contains": relation_id
            }
        }
    });
    if let Some(cursor) = start_cursor {
        body["start_cursor"] = Value::String(cursor.to_string());
    }
    body
}

/// Property map for a new task page
///
/// The due date property is only present when the task has a due date.
pub fn task_properties(schema: &StoreSchema, task: &NewTask) -> Value {
    let mut properties = Map::new();
    properties.insert(
        schema.title_property.clone(),
        json!({
            "type": "title",
            "title": [{
                "type": "text",
                "text": {
                    "content": task.title,
                    "link": { "url": task.title_url }
                }
            }]
        }),
    );
    properties.insert(
        schema.relation_property.clone(),
        json!({
            "type": "relation",
            "relation": [{ "id": task.course_relation }]
        }),
    );
    if let Some(due) = task.due {
        properties.insert(
            schema.due_property.clone(),
            json!({
                "type": "date",
                "date": { "start": due.to_rfc3339_opts(SecondsFormat::Secs, true) }
            }),
        );
    }
    Value::Object(properties)
}

/// Full request body for `POST /v1/pages`
pub fn page_body(database_id: &str, schema: &StoreSchema, task: &NewTask) -> Value {
    json!({
        "parent": { "database_id": database_id },
        "properties": task_properties(schema, task),
    })
}

/// Pull the plain title out of each query result
///
/// Takes the first rich-text span of the title property. A page whose title
/// is empty or missing contributes nothing; a span without text contributes
/// an empty string.
pub fn extract_titles(results: &[Value], title_property: &str) -> Vec<String> {
    results
        .iter()
        .filter_map(|page| {
            let spans = page
                .get("properties")?
                .get(title_property)?
                .get("title")?
                .as_array()?;
            let first = spans.first()?;
            Some(
                first
                    .get("text")
                    .and_then(|t| t.get("content"))
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            )
        })
        .collect()
}
