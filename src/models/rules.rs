use std::collections::HashSet;
use super::gem::GemIdentity;
use super::quality::QualityVariant;

const RARE_GEMS: [&str; 6] = [
    "Empower Support",
    "Enlighten Support",
    "Enhance Support",
    "Elemental Penetration Support",
    "Block Chance Reduction Support",
    "Portal",
];

/// Fixed lookup tables used while parsing names and ranking gems.
///
/// Held by value and passed by reference, so callers (and tests) can swap
/// in alternate tables.
#[derive(Debug, Clone)]
pub struct GemRules {
    /// Checked in order; the first matching prefix wins.
    pub variant_prefixes: Vec<(String, QualityVariant)>,
    pub vaal_prefix: String,
    pub support_suffix: String,
    /// Gems with non-probabilistic upgrade paths, skipped everywhere.
    pub excluded: HashSet<String>,
    pub max_level: u32,
    pub max_quality: u32,
}

impl Default for GemRules {
    fn default() -> Self {
        Self {
            variant_prefixes: QualityVariant::ALL
                .iter()
                .map(|v| (v.as_str().to_string(), *v))
                .collect(),
            vaal_prefix: "Vaal".to_string(),
            support_suffix: " Support".to_string(),
            excluded: RARE_GEMS.iter().map(|name| name.to_string()).collect(),
            max_level: 20,
            max_quality: 20,
        }
    }
}

impl GemRules {
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }

    pub fn is_support(&self, name: &str) -> bool {
        name.ends_with(&self.support_suffix)
    }

    /// Splits a raw market label into its identity.
    ///
    /// Variant prefixes are stripped before the Vaal prefix, so
    /// "Anomalous Vaal Grace" parses but "Vaal Anomalous Grace" keeps the
    /// variant in the base name.
    pub fn parse_name(&self, raw: &str, corrupted: bool) -> GemIdentity {
        let trimmed = raw.trim();
        let (rest, variant) = self
            .variant_prefixes
            .iter()
            .find_map(|(prefix, v)| strip_word(trimmed, prefix).map(|rest| (rest, *v)))
            .unwrap_or((trimmed, QualityVariant::default()));

        let (base_name, is_vaal) = match strip_word(rest, &self.vaal_prefix) {
            Some(base) => (base, true),
            None => (rest, false),
        };

        GemIdentity {
            base_name: base_name.to_string(),
            variant,
            is_vaal,
            is_corrupted: corrupted,
        }
    }
}

// Prefix must be followed by a space, so "Vaal" does not eat "Vaalish".
fn strip_word<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    name.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix(' '))
        .map(str::trim_start)
        .filter(|rest| !rest.is_empty())
}
