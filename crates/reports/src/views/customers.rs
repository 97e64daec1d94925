//! Customer reports: listing and country/email-domain distributions.

use entity_store::Snapshot;
use serde::Serialize;

use crate::collation::collation_key;
use crate::grouping::{email_domain, group_stable, normalize_country};
use crate::ranked::RankedMap;
use crate::report::Report;

/// Maximum number of customers in the listing.
pub const LISTING_LIMIT: usize = 100;

/// Number of entries kept in each distribution.
pub const DISTRIBUTION_LIMIT: usize = 5;

/// One row of the customer listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerListing {
    #[serde(rename = "NomeCompleto")]
    pub full_name: String,
    #[serde(rename = "Email")]
    pub email: Option<String>,
}

/// Output of [`ListCustomers`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerList {
    #[serde(rename = "clientes")]
    pub customers: Vec<CustomerListing>,
}

/// Output of [`CustomersSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomersSummaryOutput {
    #[serde(rename = "paisesComMaisClientes")]
    pub countries: RankedMap<usize>,
    #[serde(rename = "dominios")]
    pub email_domains: RankedMap<usize>,
}

/// First customers in alphabetical order of first name, up to
/// [`LISTING_LIMIT`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCustomers;

impl Report for ListCustomers {
    type Output = CustomerList;

    fn name(&self) -> &'static str {
        "list-customers"
    }

    fn compute(&self, snapshot: &Snapshot) -> CustomerList {
        let mut customers: Vec<_> = snapshot.customers().iter().collect();
        customers.sort_by_cached_key(|c| collation_key(&c.first_name));

        let customers = customers
            .into_iter()
            .take(LISTING_LIMIT)
            .map(|c| CustomerListing {
                full_name: c.full_name(),
                email: c.email.clone(),
            })
            .collect();

        CustomerList { customers }
    }
}

/// Top countries and top email domains by customer count.
///
/// Ties keep the order in which the keys first appear among the customers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomersSummary;

impl Report for CustomersSummary {
    type Output = CustomersSummaryOutput;

    fn name(&self) -> &'static str {
        "customers-summary"
    }

    fn compute(&self, snapshot: &Snapshot) -> CustomersSummaryOutput {
        let customers = snapshot.customers();

        let countries = top_counts(
            customers
                .iter()
                .map(|c| normalize_country(c.country.as_deref())),
        );
        let email_domains = top_counts(
            customers
                .iter()
                .filter_map(|c| email_domain(c.email.as_deref())),
        );

        CustomersSummaryOutput {
            countries,
            email_domains,
        }
    }
}

fn top_counts<'a>(keys: impl Iterator<Item = &'a str>) -> RankedMap<usize> {
    let mut groups: Vec<(&str, usize)> = group_stable(keys, |k| *k)
        .into_iter()
        .map(|(key, members)| (key, members.len()))
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups.into_iter().take(DISTRIBUTION_LIMIT).collect()
}
