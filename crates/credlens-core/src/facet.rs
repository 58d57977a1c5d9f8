//! Value counts for tab badges such as "Pending (3)".

use serde::Serialize;

use credlens_model::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCount {
    pub value: String,
    pub count: usize,
}

/// Counts each display value of `field`, in first-seen order.
pub fn facet_counts<'a, T, I>(records: I, field: &str) -> Vec<FacetCount>
where
    T: Record + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut counts: Vec<FacetCount> = Vec::new();
    for record in records {
        let Some(value) = record.field(field) else {
            continue;
        };
        let value = value.display_string();
        match counts.iter_mut().find(|facet| facet.value == value) {
            Some(facet) => facet.count += 1,
            None => counts.push(FacetCount { value, count: 1 }),
        }
    }
    counts
}
