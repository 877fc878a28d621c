/// Knobs shared by every calculation: how results are rendered and how long
/// an operand may be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Places after the point in the decimal view
    pub decimal_places: usize,
    /// Places after the point in the percentage view
    pub percentage_places: usize,
    /// Maximum significant digits per operand, `None` for no limit
    pub max_digits: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            decimal_places: 3,
            percentage_places: 1,
            max_digits: Some(20),
        }
    }
}

impl Settings {
    pub fn with_decimal_places(mut self, places: usize) -> Self {
        self.decimal_places = places;
        self
    }
    pub fn with_percentage_places(mut self, places: usize) -> Self {
        self.percentage_places = places;
        self
    }
    pub fn with_max_digits(mut self, max_digits: Option<usize>) -> Self {
        self.max_digits = max_digits;
        self
    }
}
