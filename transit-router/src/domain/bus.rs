//! Bus route types.

/// A named bus route over an ordered list of stop names.
///
/// A round-trip bus is ridden once in the listed order. Any other bus runs
/// the listed order and then back again, so it has two traversals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

impl Bus {
    /// Creates a new bus route.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        stops: impl IntoIterator<Item = S>,
        is_roundtrip: bool,
    ) -> Self {
        Self {
            name: name.into(),
            stops: stops.into_iter().map(Into::into).collect(),
            is_roundtrip,
        }
    }

    /// Returns each direction the bus is ridden in, as a sequence of stop names.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_router::domain::Bus;
    ///
    /// let bus = Bus::new("750", ["A", "B", "C"], false);
    /// let traversals = bus.traversals();
    /// assert_eq!(traversals, vec![vec!["A", "B", "C"], vec!["C", "B", "A"]]);
    ///
    /// let ring = Bus::new("256", ["A", "B", "A"], true);
    /// assert_eq!(ring.traversals().len(), 1);
    /// ```
    pub fn traversals(&self) -> Vec<Vec<&str>> {
        if self.stops.is_empty() {
            return Vec::new();
        }

        let forward: Vec<&str> = self.stops.iter().map(String::as_str).collect();
        if self.is_roundtrip {
            return vec![forward];
        }

        let backward = forward.iter().rev().copied().collect();
        vec![forward, backward]
    }
}
