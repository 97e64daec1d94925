//! Grouping keys and stable grouping shared by every report.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::{Datelike, NaiveDateTime};

/// Bucket for customers without a usable country.
pub const UNKNOWN_COUNTRY: &str = "unknown";

/// Placeholder some sources write instead of leaving the country empty.
const COUNTRY_PLACEHOLDER: &str = "-";

/// Last day of the month that still belongs to the first fortnight.
const FIRST_FORTNIGHT_LAST_DAY: u32 = 15;

/// Maps a missing, empty or placeholder country to [`UNKNOWN_COUNTRY`].
pub fn normalize_country(country: Option<&str>) -> &str {
    match country {
        None | Some("") | Some(COUNTRY_PLACEHOLDER) => UNKNOWN_COUNTRY,
        Some(country) => country,
    }
}

/// Returns the part of an email after its last `@`.
///
/// Missing emails, emails without `@` and emails with nothing after the
/// `@` have no domain.
pub fn email_domain(email: Option<&str>) -> Option<&str> {
    let (_, domain) = email?.rsplit_once('@')?;
    (!domain.is_empty()).then_some(domain)
}

/// Formats the calendar month of a date as `YYYY-MM`.
pub fn month_key(date: NaiveDateTime) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Half of a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fortnight {
    /// Days 1 through 15.
    First,
    /// Day 16 to the end of the month.
    Second,
}

impl Fortnight {
    pub fn of(date: NaiveDateTime) -> Self {
        if date.day() <= FIRST_FORTNIGHT_LAST_DAY {
            Fortnight::First
        } else {
            Fortnight::Second
        }
    }
}

/// Groups items by key, keeping groups in order of first key appearance
/// and items in iteration order within each group.
pub fn group_stable<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<(K, Vec<T>)>
where
    K: Hash + Eq + Clone,
    F: Fn(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();

    for item in items {
        let k = key(&item);
        match positions.get(&k) {
            Some(&pos) => groups[pos].1.push(item),
            None => {
                positions.insert(k.clone(), groups.len());
                groups.push((k, vec![item]));
            }
        }
    }

    groups
}
