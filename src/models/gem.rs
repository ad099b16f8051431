use super::quality::QualityVariant;

/// A gem name with its variant and Vaal prefixes stripped out.
#[derive(Debug, Clone, PartialEq)]
pub struct GemIdentity {
    pub base_name: String,
    pub variant: QualityVariant,
    pub is_vaal: bool,
    pub is_corrupted: bool,
}

impl GemIdentity {
    pub fn new(base_name: String, variant: QualityVariant) -> Self {
        Self {
            base_name,
            variant,
            is_vaal: false,
            is_corrupted: false,
        }
    }

    pub fn vaal(mut self) -> Self {
        self.is_vaal = true;
        self
    }

    pub fn corrupted(mut self) -> Self {
        self.is_corrupted = true;
        self
    }

    pub fn matches(&self, base_name: &str, variant: QualityVariant) -> bool {
        self.variant == variant && self.base_name == base_name
    }
}

/// One priced offer from the market snapshot. Immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct GemListing {
    pub identity: GemIdentity,
    pub level: u32,
    pub quality: u32,
    /// Price in the common currency (chaos).
    pub price_chaos: f64,
    /// Price in the scarce high-value currency.
    pub price_high: f64,
    pub count: u32,
}

impl GemListing {
    pub fn new(identity: GemIdentity) -> Self {
        Self {
            identity,
            level: 1,
            quality: 0,
            price_chaos: 0.0,
            price_high: 0.0,
            count: 0,
        }
    }

    pub fn with_level(mut self, level: u32, quality: u32) -> Self {
        self.level = level;
        self.quality = quality;
        self
    }

    pub fn with_prices(mut self, chaos: f64, high: f64) -> Self {
        self.price_chaos = chaos;
        self.price_high = high;
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn name(&self) -> &str {
        &self.identity.base_name
    }

    pub fn is_maxed(&self, max_level: u32, max_quality: u32) -> bool {
        self.level >= max_level && self.quality >= max_quality
    }
}
