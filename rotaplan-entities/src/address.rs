/// A free-text delivery address as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street: String,
    pub district: Option<String>,
}

impl Address {
    pub fn new(street: impl Into<String>) -> Self {
        Self {
            street: street.into(),
            district: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.street.trim().is_empty()
            && self
                .district
                .as_deref()
                .map_or(true, |d| d.trim().is_empty())
    }

    /// The free-text lookup query: `"<street>, <district>"` when a
    /// district is present.
    pub fn query_string(&self) -> String {
        match self.district.as_deref() {
            Some(district) if !district.trim().is_empty() => {
                format!("{}, {}", self.street, district)
            }
            _ => self.street.clone(),
        }
    }
}
