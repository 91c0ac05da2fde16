use std::collections::HashMap;

use poem_openapi::payload::{Form, Json};
use poem_openapi::{ApiRequest, Object};
use serde::{Deserialize, Serialize};

use crate::grid::request::column_name;
use crate::grid::{GridRequest, SortDirection, SortOrder};

/// Search box value of a grid request
#[derive(Object, Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridSearch {
    pub value: Option<String>,
}

/// Sort entry of a grid request
///
/// `column` is either an external column name or, as DataTables sends it, an
/// index into the request's `columns`.
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct GridOrder {
    pub column: serde_json::Value,

    /// `asc` or `desc`; anything else sorts ascending
    pub dir: Option<String>,
}

/// JSON form of a grid request
#[derive(Object, Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridRequestBody {
    /// Opaque token echoed back in the response
    pub draw: Option<i64>,

    /// Zero-based offset of the first row
    pub start: Option<i64>,

    /// Page size; out-of-range values fall back to the server maximum
    pub length: Option<i64>,

    pub search: Option<GridSearch>,

    pub order: Option<Vec<GridOrder>>,

    /// DataTables column definitions, used to resolve numeric order columns
    pub columns: Option<Vec<GridColumn>>,
}

/// One DataTables column definition
#[derive(Object, Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridColumn {
    pub data: Option<String>,
    pub name: Option<String>,
}

impl GridOrder {
    /// External column name this entry sorts by, if it resolves
    fn column_name(&self, columns: &[GridColumn]) -> Option<String> {
        let by_index = |index: usize| {
            columns
                .get(index)
                .and_then(|c| column_name(c.name.as_deref(), c.data.as_deref()))
                .map(str::to_owned)
        };

        match &self.column {
            serde_json::Value::Number(n) => n.as_u64().and_then(|i| by_index(i as usize)),
            serde_json::Value::String(s) => match s.trim().parse::<usize>() {
                Ok(index) if !columns.is_empty() => by_index(index),
                _ => column_name(Some(s.as_str()), None).map(str::to_owned),
            },
            _ => None,
        }
    }
}

impl From<GridRequestBody> for GridRequest {
    fn from(body: GridRequestBody) -> Self {
        let columns = body.columns.unwrap_or_default();

        GridRequest {
            draw: body.draw.unwrap_or(0),
            start: body.start.unwrap_or(0),
            length: body.length.unwrap_or(0),
            search: body
                .search
                .and_then(|s| s.value)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty()),
            order: body
                .order
                .unwrap_or_default()
                .iter()
                .filter_map(|o| {
                    let column = o.column_name(&columns)?;
                    Some(SortOrder {
                        column,
                        direction: SortDirection::parse(o.dir.as_deref().unwrap_or("")),
                    })
                })
                .collect(),
        }
    }
}

/// Grid request as JSON or as DataTables form fields
#[derive(ApiRequest)]
pub enum GridPayload {
    Json(Json<GridRequestBody>),
    Form(Form<HashMap<String, String>>),
}

impl From<GridPayload> for GridRequest {
    fn from(payload: GridPayload) -> Self {
        match payload {
            GridPayload::Json(Json(body)) => body.into(),
            GridPayload::Form(Form(fields)) => GridRequest::from_form_fields(&fields),
        }
    }
}
