use super::columns::SortColumns;
use super::request::{GridRequest, SortDirection};

/// Page length used when none is configured
pub const DEFAULT_MAX_PAGE_LENGTH: usize = 100;

/// A record the grid engine can search
pub trait GridRecord {
    /// Values matched by free-text search, in display form (dates as ISO strings)
    ///
    /// `None` entries are absent fields; they never match.
    fn search_values(&self) -> Vec<Option<String>>;
}

/// One page of grid results
#[derive(Debug, Clone, PartialEq)]
pub struct GridPage<T> {
    pub draw: i64,
    pub records_total: u64,
    pub records_filtered: u64,
    pub data: Vec<T>,
}

/// Search, sort and page a scoped collection of records
pub struct GridEngine<R> {
    columns: SortColumns<R>,
    max_page_length: usize,
}

impl<R: GridRecord> GridEngine<R> {
    /// A `max_page_length` of zero falls back to [`DEFAULT_MAX_PAGE_LENGTH`]
    pub fn new(columns: SortColumns<R>, max_page_length: usize) -> Self {
        let max_page_length = if max_page_length == 0 {
            DEFAULT_MAX_PAGE_LENGTH
        } else {
            max_page_length
        };

        tracing::debug!(
            table = columns.table(),
            max_page_length,
            "Grid columns: {}",
            columns.names().collect::<Vec<_>>().join(", ")
        );

        Self {
            columns,
            max_page_length,
        }
    }

    pub fn max_page_length(&self) -> usize {
        self.max_page_length
    }

    /// Run one grid query
    ///
    /// Steps, in order:
    /// 1. Keep records where any search value contains the search text (case-insensitive)
    /// 2. Stable sort by the first order entry, if its column is known
    /// 3. Slice out the requested page and project each row
    ///
    /// `records_total` and `records_filtered` both report the size of the searched set.
    pub fn query<T, F>(&self, source: Vec<R>, request: &GridRequest, project: F) -> GridPage<T>
    where
        F: Fn(&R) -> T,
    {
        let mut records: Vec<R> = match request.search.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => {
                let needle = text.to_lowercase();
                source
                    .into_iter()
                    .filter(|record| matches_search(record, &needle))
                    .collect()
            }
            _ => source,
        };

        if let Some(order) = request.order.first() {
            match self.columns.resolve(&order.column) {
                Some(column) => {
                    let compare = column.compare;
                    match order.direction {
                        SortDirection::Asc => records.sort_by(|a, b| compare(a, b)),
                        SortDirection::Desc => records.sort_by(|a, b| compare(a, b).reverse()),
                    }
                }
                None => {
                    tracing::warn!(
                        table = self.columns.table(),
                        column = %order.column,
                        "Ignoring sort on unknown grid column"
                    );
                }
            }
        }

        let count = records.len() as u64;
        let start = usize::try_from(request.start.max(0)).unwrap_or(usize::MAX);
        let length = self.page_length(request.length);

        let data = records
            .iter()
            .skip(start)
            .take(length)
            .map(project)
            .collect();

        GridPage {
            draw: request.draw,
            records_total: count,
            records_filtered: count,
            data,
        }
    }

    fn page_length(&self, requested: i64) -> usize {
        match usize::try_from(requested) {
            Ok(length) if length > 0 && length <= self.max_page_length => length,
            _ => self.max_page_length,
        }
    }
}

fn matches_search<R: GridRecord>(record: &R, needle: &str) -> bool {
    record
        .search_values()
        .into_iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{SortColumn, SortOrder};

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        id: i32,
        last_name: String,
        email: Option<String>,
    }

    impl GridRecord for Person {
        fn search_values(&self) -> Vec<Option<String>> {
            vec![
                Some(self.id.to_string()),
                Some(self.last_name.clone()),
                self.email.clone(),
            ]
        }
    }

    fn engine(max_page_length: usize) -> GridEngine<Person> {
        let columns = SortColumns::new(
            "Person",
            vec![
                SortColumn::new("Id", |a: &Person, b: &Person| a.id.cmp(&b.id)),
                SortColumn::new("LastName", |a: &Person, b: &Person| a.last_name.cmp(&b.last_name)),
            ],
        )
        .unwrap();
        GridEngine::new(columns, max_page_length)
    }

    fn person(id: i32, last_name: &str) -> Person {
        Person {
            id,
            last_name: last_name.to_string(),
            email: None,
        }
    }

    fn people(count: i32) -> Vec<Person> {
        (0..count).map(|i| person(i, &format!("Name{:02}", i))).collect()
    }

    fn ids(page: &GridPage<Person>) -> Vec<i32> {
        page.data.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let source = vec![person(1, "Doe"), person(2, "Smith"), person(3, "Mcdoe")];
        let request = GridRequest {
            search: Some("doe".to_string()),
            length: 10,
            ..Default::default()
        };

        let page = engine(100).query(source, &request, Person::clone);

        assert_eq!(ids(&page), vec![1, 3]);
        assert_eq!(page.records_total, 2);
        assert_eq!(page.records_filtered, 2);
    }

    #[test]
    fn test_search_ignores_absent_fields() {
        let mut with_email = person(1, "Doe");
        with_email.email = Some("jdoe@acme.test".to_string());
        let source = vec![with_email, person(2, "Smith")];
        let request = GridRequest {
            search: Some("ACME".to_string()),
            length: 10,
            ..Default::default()
        };

        let page = engine(100).query(source, &request, Person::clone);

        assert_eq!(ids(&page), vec![1]);
    }

    #[test]
    fn test_paginates_requested_window() {
        let request = GridRequest {
            draw: 7,
            start: 10,
            length: 5,
            ..Default::default()
        };

        let page = engine(100).query(people(25), &request, Person::clone);

        assert_eq!(page.draw, 7);
        assert_eq!(ids(&page), vec![10, 11, 12, 13, 14]);
        assert_eq!(page.records_total, 25);
        assert_eq!(page.records_filtered, 25);
    }

    #[test]
    fn test_sorts_descending_by_named_column() {
        let source = vec![person(1, "Baker"), person(2, "Young"), person(3, "Adams")];
        let request = GridRequest {
            length: 10,
            order: vec![SortOrder {
                column: "lastname".to_string(),
                direction: SortDirection::Desc,
            }],
            ..Default::default()
        };

        let page = engine(100).query(source, &request, |p| p.last_name.clone());

        assert_eq!(page.data, vec!["Young", "Baker", "Adams"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let source = vec![person(1, "Same"), person(2, "Same"), person(3, "Same")];
        let request = GridRequest {
            length: 10,
            order: vec![SortOrder {
                column: "LastName".to_string(),
                direction: SortDirection::Desc,
            }],
            ..Default::default()
        };

        let page = engine(100).query(source, &request, Person::clone);

        assert_eq!(ids(&page), vec![1, 2, 3]);
    }

    #[test]
    fn test_unknown_sort_column_keeps_natural_order() {
        let source = vec![person(3, "C"), person(1, "A"), person(2, "B")];
        let request = GridRequest {
            length: 10,
            order: vec![SortOrder {
                column: "Salary; DROP TABLE".to_string(),
                direction: SortDirection::Asc,
            }],
            ..Default::default()
        };

        let page = engine(100).query(source, &request, Person::clone);

        assert_eq!(ids(&page), vec![3, 1, 2]);
    }

    #[test]
    fn test_negative_start_is_clamped_to_zero() {
        let request = GridRequest {
            start: -5,
            length: 3,
            ..Default::default()
        };

        let page = engine(100).query(people(10), &request, Person::clone);

        assert_eq!(ids(&page), vec![0, 1, 2]);
    }

    #[test]
    fn test_non_positive_or_oversized_length_uses_max() {
        let engine = engine(4);

        for length in [0, -1, 5, i64::MAX] {
            let request = GridRequest {
                length,
                ..Default::default()
            };
            let page = engine.query(people(10), &request, Person::clone);
            assert_eq!(page.data.len(), 4, "length {}", length);
            assert_eq!(page.records_total, 10);
        }
    }

    #[test]
    fn test_start_past_end_returns_empty_page() {
        let request = GridRequest {
            start: 50,
            length: 10,
            ..Default::default()
        };

        let page = engine(100).query(people(5), &request, Person::clone);

        assert!(page.data.is_empty());
        assert_eq!(page.records_filtered, 5);
    }

    #[test]
    fn test_zero_max_page_length_uses_default() {
        assert_eq!(engine(0).max_page_length(), DEFAULT_MAX_PAGE_LENGTH);
    }
}
