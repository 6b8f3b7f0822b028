use super::Taxonomy;

/// One classification dimension over an enumeration
///
/// Levels are checked in order and the first one listing a value wins, so
/// overlapping source tables resolve deterministically. Values listed
/// nowhere fall to `default`.
#[derive(Debug)]
pub struct Tier<T: 'static, L: 'static> {
    pub(crate) levels: &'static [(L, &'static [T])],
    pub(crate) default: L,
}

impl<T: Taxonomy, L: Copy + PartialEq> Tier<T, L> {
    pub fn classify(&self, value: T) -> L {
        self.levels
            .iter()
            .find(|(_, members)| members.contains(&value))
            .map(|(label, _)| *label)
            .unwrap_or(self.default)
    }

    /// Every value classified as `label`, in definition order
    pub fn members(&self, label: L) -> Vec<T> {
        T::all()
            .iter()
            .copied()
            .filter(|value| self.classify(*value) == label)
            .collect()
    }

    pub fn default_level(&self) -> L {
        self.default
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::content_warning::ContentWarning;
    use crate::catalog::levels::Severity;
    use crate::engine::Taxonomy;

    #[test]
    fn test_every_value_gets_exactly_one_level() {
        let labels = [Severity::Mild, Severity::Moderate, Severity::Severe, Severity::Extreme];
        let total: usize = labels
            .iter()
            .map(|label| ContentWarning::by_severity(*label).len())
            .sum();
        assert_eq!(total, ContentWarning::all().len());
    }

    #[test]
    fn test_first_listing_wins_on_overlap() {
        // listed under both mild and moderate
        assert_eq!(ContentWarning::ReligiousContent.severity_level(), Severity::Mild);
    }

    #[test]
    fn test_unlisted_value_falls_to_default() {
        assert_eq!(ContentWarning::MildViolence.severity_level(), Severity::Moderate);
    }
}
