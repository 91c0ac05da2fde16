use std::collections::HashMap;

/// Direction of a grid sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `"desc"` in any case is descending; everything else is ascending
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    /// External column name, resolved against the record type's column table
    pub column: String,
    pub direction: SortDirection,
}

/// A single grid page request
///
/// `start` and `length` are kept as received; the engine clamps them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridRequest {
    pub draw: i64,
    pub start: i64,
    pub length: i64,
    pub search: Option<String>,
    pub order: Vec<SortOrder>,
}

impl GridRequest {
    /// Build a request from DataTables-style form fields
    ///
    /// Reads `draw`, `start`, `length`, `search[value]` and `order[0][column]` /
    /// `order[0][dir]`. The order column is an index into `columns[i][name]`,
    /// falling back to `columns[i][data]` when the name is empty. Numbers that
    /// fail to parse are treated as zero.
    pub fn from_form_fields(fields: &HashMap<String, String>) -> Self {
        let fields: HashMap<String, &str> = fields
            .iter()
            .map(|(key, value)| (normalize_key(key), value.as_str()))
            .collect();

        let number = |key: &str| {
            fields
                .get(key)
                .and_then(|v| v.trim().parse::<i64>().ok())
                .unwrap_or(0)
        };

        let search = fields
            .get("search.value")
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_owned);

        let order = fields
            .get("order.0.column")
            .and_then(|index| {
                let index = index.trim();
                column_name(
                    fields.get(&format!("columns.{index}.name")).copied(),
                    fields.get(&format!("columns.{index}.data")).copied(),
                )
            })
            .map(|column| SortOrder {
                column: column.to_owned(),
                direction: SortDirection::parse(fields.get("order.0.dir").copied().unwrap_or("")),
            })
            .into_iter()
            .collect();

        GridRequest {
            draw: number("draw"),
            start: number("start"),
            length: number("length"),
            search,
            order,
        }
    }
}

/// Sort column of a DataTables column entry: `name`, else `data`
pub fn column_name<'a>(name: Option<&'a str>, data: Option<&'a str>) -> Option<&'a str> {
    let non_blank = |v: Option<&'a str>| v.map(str::trim).filter(|v| !v.is_empty());
    non_blank(name).or_else(|| non_blank(data))
}

/// `order[0][column]` -> `order.0.column`
fn normalize_key(key: &str) -> String {
    key.replace("][", ".").replace('[', ".").replace(']', "")
}
