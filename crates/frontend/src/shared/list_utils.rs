/// Shared helpers for sortable, filterable table views.
use std::cmp::Ordering;

/// Trait for row types that support text filtering.
pub trait Searchable {
    /// Check whether the row matches the filter text.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait for row types that support sorting by a named field.
pub trait Sortable {
    /// Compare two rows by the given field.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort rows in place by the given field.
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Keep only rows matching the filter text. Blank filter keeps everything.
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Sort indicator glyph for a table header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: String,
        total: i64,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(&other.name),
                "total" => self.total.cmp(&other.total),
                _ => Ordering::Equal,
            }
        }
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "MG Road".into(), total: 13999 },
            Row { name: "Airport Arc".into(), total: 45500 },
            Row { name: "Metro Gate".into(), total: 9200 },
        ]
    }

    #[test]
    fn sorts_by_field_in_both_directions() {
        let mut items = rows();
        sort_list(&mut items, "total", true);
        assert_eq!(items[0].name, "Metro Gate");
        sort_list(&mut items, "total", false);
        assert_eq!(items[0].name, "Airport Arc");
    }

    #[test]
    fn filters_case_insensitively_and_blank_keeps_all() {
        assert_eq!(filter_list(rows(), "m").len(), 2);
        assert_eq!(filter_list(rows(), "  ").len(), 3);
        assert_eq!(filter_list(rows(), "airport").len(), 1);
    }
}
