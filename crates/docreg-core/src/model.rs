// crates/docreg-core/src/model.rs
use crate::common::DatasetStats;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// A price as it appears in the register.
///
/// The currency is implicit and shared by the whole register. `Display`
/// yields the shortest decimal form without a trailing `.0`, so `150` prints
/// as `"150"` and `49.5` as `"49.5"`. That string is what the search matches
/// against.
///
/// Outside `1e-6..1e21` the output is plain positional notation, where a
/// browser's `Number#toString` would switch to exponent form (`1e+21`).
/// Register prices never get near either bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Self {
        Price(amount)
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Price(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64's Display already drops the fractional part of integral values.
        // -0.0 would print as "-0".
        if self.0 == 0.0 {
            return f.write_str("0");
        }
        write!(f, "{}", self.0)
    }
}

/// One row of the register: a country's document-registration offering.
///
/// Field names on the wire are fixed: `Country`, `Document_Type`, `Price`,
/// `Source`, `Link`. A `null` text field reads as the empty string and a
/// missing `Link` as no link. Negative prices are rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Country", deserialize_with = "null_as_empty")]
    pub country: String,
    #[serde(rename = "Document_Type", deserialize_with = "null_as_empty")]
    pub document_type: String,
    #[serde(rename = "Price", deserialize_with = "non_negative_price")]
    pub price: Price,
    #[serde(rename = "Source", deserialize_with = "null_as_empty")]
    pub source: String,
    #[serde(rename = "Link", default, deserialize_with = "null_as_empty")]
    pub link: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_negative_price<'de, D>(deserializer: D) -> std::result::Result<Price, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = f64::deserialize(deserializer)?;
    if amount < 0.0 {
        return Err(de::Error::invalid_value(
            de::Unexpected::Float(amount),
            &"a non-negative price",
        ));
    }
    Ok(Price(amount))
}

/// The fields of a [`Record`] that take part in free-text search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchField {
    Country,
    DocumentType,
    Price,
    Source,
    Link,
}

impl SearchField {
    /// Every searchable field, in table column order.
    pub const ALL: [SearchField; 5] = [
        SearchField::Country,
        SearchField::DocumentType,
        SearchField::Price,
        SearchField::Source,
        SearchField::Link,
    ];

    /// Column header used by the presentation layer.
    pub fn label(self) -> &'static str {
        match self {
            SearchField::Country => "Country",
            SearchField::DocumentType => "Document Type",
            SearchField::Price => "Price",
            SearchField::Source => "Source",
            SearchField::Link => "Link",
        }
    }
}

impl Record {
    pub fn new(
        country: impl Into<String>,
        document_type: impl Into<String>,
        price: impl Into<Price>,
        source: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Record {
            country: country.into(),
            document_type: document_type.into(),
            price: price.into(),
            source: source.into(),
            link: link.into(),
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn document_type(&self) -> &str {
        &self.document_type
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// String form of one searchable field. Only `Price` allocates.
    pub fn field_text(&self, field: SearchField) -> Cow<'_, str> {
        match field {
            SearchField::Country => Cow::Borrowed(&self.country),
            SearchField::DocumentType => Cow::Borrowed(&self.document_type),
            SearchField::Price => Cow::Owned(self.price.to_string()),
            SearchField::Source => Cow::Borrowed(&self.source),
            SearchField::Link => Cow::Borrowed(&self.link),
        }
    }

    /// Iterate `(field, text)` over every searchable field.
    pub fn searchable_fields(&self) -> impl Iterator<Item = (SearchField, Cow<'_, str>)> {
        SearchField::ALL
            .into_iter()
            .map(move |field| (field, self.field_text(field)))
    }
}

/// The loaded register. Immutable once built; clones share the records.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    records: Arc<[Record]>,
}

impl Default for Dataset {
    fn default() -> Self {
        Dataset::new(Vec::new())
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Dataset::new(records)
    }
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Dataset {
            records: records.into(),
        }
    }

    /// All records, in source-file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Cheap shared handle on the records.
    pub fn shared(&self) -> Arc<[Record]> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct country names in first-seen order.
    pub fn countries(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.country.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Aggregate statistics for the register.
    pub fn stats(&self) -> DatasetStats {
        let prices = self.records.iter().map(|r| r.price.amount());
        let min_price = prices.clone().reduce(f64::min);
        let max_price = prices.reduce(f64::max);

        DatasetStats {
            records: self.records.len(),
            countries: self.countries().len(),
            min_price,
            max_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_prints_like_the_register() {
        assert_eq!(Price::new(150.0).to_string(), "150");
        assert_eq!(Price::new(49.5).to_string(), "49.5");
        assert_eq!(Price::new(0.0).to_string(), "0");
        assert_eq!(Price::new(-0.0).to_string(), "0");
    }

    #[test]
    fn field_text_covers_every_column() {
        let r = Record::new("Brazil", "Certificate", 50.0, "Registry X", "http://x");
        let texts: Vec<String> = r.searchable_fields().map(|(_, t)| t.into_owned()).collect();
        assert_eq!(texts, ["Brazil", "Certificate", "50", "Registry X", "http://x"]);
    }

    #[test]
    fn stats_counts_distinct_countries() {
        let ds = Dataset::new(vec![
            Record::new("Brazil", "Certificate", 50.0, "Registry X", ""),
            Record::new("Brazil", "Extract", 20.0, "Registry X", ""),
            Record::new("France", "Kbis", 4.5, "Infogreffe", ""),
        ]);
        let stats = ds.stats();
        assert_eq!(stats.records, 3);
        assert_eq!(stats.countries, 2);
        assert_eq!(stats.min_price, Some(4.5));
        assert_eq!(stats.max_price, Some(50.0));
        assert_eq!(ds.countries(), ["Brazil", "France"]);
    }

    #[test]
    fn empty_dataset_has_no_price_range() {
        let stats = Dataset::default().stats();
        assert_eq!(stats.records, 0);
        assert_eq!(stats.min_price, None);
    }
}
