use chrono::NaiveDate;

/// Value interpolated into a localized string.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Date(NaiveDate),
}

/// Ordered interpolation parameters for one lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Vec<(String, ParamValue)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(self, name: &str, value: impl Into<String>) -> Self {
        self.with(name, ParamValue::Text(value.into()))
    }

    pub fn int(self, name: &str, value: i64) -> Self {
        self.with(name, ParamValue::Integer(value))
    }

    pub fn decimal(self, name: &str, value: f64) -> Self {
        self.with(name, ParamValue::Decimal(value))
    }

    pub fn date(self, name: &str, value: NaiveDate) -> Self {
        self.with(name, ParamValue::Date(value))
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // Later values shadow earlier ones with the same name.
    fn with(mut self, name: &str, value: ParamValue) -> Self {
        self.0.retain(|(key, _)| key != name);
        self.0.push((name.to_string(), value));
        self
    }
}
