use std::fmt;

/// Result category of a gem. `Superior` is the unmodified starting category
/// and never appears as a regrading outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QualityVariant {
    Superior,
    Anomalous,
    Divergent,
    Phantasmal,
}

impl QualityVariant {
    pub const ALL: [QualityVariant; 4] = [
        QualityVariant::Superior,
        QualityVariant::Anomalous,
        QualityVariant::Divergent,
        QualityVariant::Phantasmal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityVariant::Superior => "Superior",
            QualityVariant::Anomalous => "Anomalous",
            QualityVariant::Divergent => "Divergent",
            QualityVariant::Phantasmal => "Phantasmal",
        }
    }

    /// Matches a trimmed label exactly, e.g. a wiki table cell.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == label)
    }

    pub fn is_default(&self) -> bool {
        *self == QualityVariant::Superior
    }
}

impl Default for QualityVariant {
    fn default() -> Self {
        QualityVariant::Superior
    }
}

impl fmt::Display for QualityVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_lookup() {
        assert_eq!(QualityVariant::from_label("Divergent"), Some(QualityVariant::Divergent));
        assert_eq!(QualityVariant::from_label("divergent"), None);
        assert_eq!(QualityVariant::from_label(""), None);
    }

    #[test]
    fn test_default_is_superior() {
        assert!(QualityVariant::default().is_default());
        assert!(!QualityVariant::Phantasmal.is_default());
        assert_eq!(QualityVariant::Anomalous.to_string(), "Anomalous");
    }
}
