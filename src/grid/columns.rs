use std::cmp::Ordering;

use crate::errors::internal::GridError;

/// One sortable column: external name plus the comparator it maps to
pub struct SortColumn<R> {
    pub name: &'static str,
    pub compare: fn(&R, &R) -> Ordering,
}

impl<R> SortColumn<R> {
    pub const fn new(name: &'static str, compare: fn(&R, &R) -> Ordering) -> Self {
        Self { name, compare }
    }
}

/// Explicit external-name -> comparator table for one record type
///
/// Names are matched case-insensitively. Construction rejects blank and
/// duplicate names so a bad table fails at startup instead of at query time.
pub struct SortColumns<R> {
    table: &'static str,
    columns: Vec<SortColumn<R>>,
}

impl<R> SortColumns<R> {
    pub fn new(table: &'static str, columns: Vec<SortColumn<R>>) -> Result<Self, GridError> {
        for (i, column) in columns.iter().enumerate() {
            if column.name.trim().is_empty() {
                return Err(GridError::BlankColumnName { table });
            }
            if columns[..i]
                .iter()
                .any(|earlier| earlier.name.eq_ignore_ascii_case(column.name))
            {
                return Err(GridError::DuplicateColumn {
                    table,
                    column: column.name.to_owned(),
                });
            }
        }

        Ok(Self { table, columns })
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn resolve(&self, name: &str) -> Option<&SortColumn<R>> {
        let name = name.trim();
        self.columns
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name))
    }

    /// Declared names, in table order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|column| column.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        a: i32,
        b: &'static str,
    }

    fn by_a(x: &Row, y: &Row) -> Ordering {
        x.a.cmp(&y.a)
    }

    fn by_b(x: &Row, y: &Row) -> Ordering {
        x.b.cmp(y.b)
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let columns =
            SortColumns::new("Row", vec![SortColumn::new("Alpha", by_a), SortColumn::new("Beta", by_b)])
                .unwrap();

        assert_eq!(columns.resolve("alpha").map(|c| c.name), Some("Alpha"));
        assert_eq!(columns.resolve(" BETA ").map(|c| c.name), Some("Beta"));
        assert!(columns.resolve("Gamma").is_none());
        assert_eq!(columns.names().collect::<Vec<_>>(), vec!["Alpha", "Beta"]);

        let (x, y) = (Row { a: 1, b: "z" }, Row { a: 2, b: "y" });
        let beta = columns.resolve("beta").unwrap();
        assert_eq!((beta.compare)(&x, &y), Ordering::Greater);
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let result =
            SortColumns::new("Row", vec![SortColumn::new("Alpha", by_a), SortColumn::new("ALPHA", by_b)]);

        match result {
            Err(GridError::DuplicateColumn { table, column }) => {
                assert_eq!(table, "Row");
                assert_eq!(column, "ALPHA");
            }
            _ => panic!("Expected DuplicateColumn error"),
        }
    }

    #[test]
    fn test_blank_names_are_rejected() {
        let result = SortColumns::new("Row", vec![SortColumn::new(" ", by_a)]);

        assert!(matches!(result, Err(GridError::BlankColumnName { table: "Row" })));
    }
}
