use chrono::NaiveDate;

/// Query parameters of one endpoint call, in insertion order.
#[derive(Debug, Clone, Default)]
pub(crate) struct Query(Vec<(&'static str, String)>);

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds `key=value` unless `value` is missing or empty.
    pub(crate) fn opt(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.0.push((key, v.to_string()));
        }
        self
    }

    /// Adds `key=YYYYMMDD` when a date is given.
    pub(crate) fn date(&mut self, key: &'static str, value: Option<NaiveDate>) -> &mut Self {
        if let Some(d) = value {
            self.0.push((key, d.format("%Y%m%d").to_string()));
        }
        self
    }

    /// The common `date` / `from` / `to` filter: a single date wins over a period.
    pub(crate) fn date_or_period(
        &mut self,
        date: Option<NaiveDate>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> &mut Self {
        if date.is_some() {
            self.date("date", date)
        } else {
            self.date("from", from).date("to", to)
        }
    }

    pub(crate) fn as_slice(&self) -> &[(&'static str, String)] {
        &self.0
    }
}
