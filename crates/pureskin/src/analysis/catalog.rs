use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// The seven scored skin-health dimensions. Declaration order is the
/// canonical catalog order used for ranking ties and radar layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Hydration,
    Barrier,
    Texture,
    Pigment,
    Redness,
    Sebum,
    Pores,
}

impl Metric {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Hydration,
            Self::Barrier,
            Self::Texture,
            Self::Pigment,
            Self::Redness,
            Self::Sebum,
            Self::Pores,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Hydration => "hydration",
            Self::Barrier => "barrier",
            Self::Texture => "texture",
            Self::Pigment => "pigment",
            Self::Redness => "redness",
            Self::Sebum => "sebum",
            Self::Pores => "pores",
        }
    }
}

/// Presentation and weighting metadata for one metric.
#[derive(Debug, Clone, Serialize)]
pub struct MetricDefinition {
    pub metric: Metric,
    pub key: &'static str,
    pub label: &'static str,
    pub weight: f64,
    pub color: &'static str,
    pub description: &'static str,
}

/// Process-wide immutable table of the scored dimensions.
///
/// Weights are informative multipliers for the health index; they are
/// calibrated to sum to 0.99 and are deliberately not renormalized.
#[derive(Debug)]
pub struct MetricCatalog {
    entries: Vec<MetricDefinition>,
}

impl MetricCatalog {
    pub fn standard() -> Self {
        Self {
            entries: standard_definitions(),
        }
    }

    pub fn entries(&self) -> &[MetricDefinition] {
        &self.entries
    }

    pub fn definition(&self, metric: Metric) -> &MetricDefinition {
        // entries follow Metric::ordered(), so the discriminant is the index
        &self.entries[metric as usize]
    }

    pub fn weight(&self, metric: Metric) -> f64 {
        self.definition(metric).weight
    }
}

static CATALOG: OnceLock<MetricCatalog> = OnceLock::new();

/// Shared read-only catalog instance.
pub fn catalog() -> &'static MetricCatalog {
    CATALOG.get_or_init(MetricCatalog::standard)
}

fn standard_definitions() -> Vec<MetricDefinition> {
    vec![
        MetricDefinition {
            metric: Metric::Hydration,
            key: "hydration",
            label: "Hydration",
            weight: 0.18,
            color: "sky",
            description: "Moisture held in the outer layers of the skin.",
        },
        MetricDefinition {
            metric: Metric::Barrier,
            key: "barrier",
            label: "Barrier",
            weight: 0.16,
            color: "emerald",
            description: "Resilience of the protective lipid barrier.",
        },
        MetricDefinition {
            metric: Metric::Texture,
            key: "texture",
            label: "Texture",
            weight: 0.14,
            color: "violet",
            description: "Evenness and smoothness of the skin surface.",
        },
        MetricDefinition {
            metric: Metric::Pigment,
            key: "pigment",
            label: "Pigment",
            weight: 0.13,
            color: "amber",
            description: "Uniformity of tone, spots, and discoloration.",
        },
        MetricDefinition {
            metric: Metric::Redness,
            key: "redness",
            label: "Redness",
            weight: 0.13,
            color: "rose",
            description: "Visible irritation, flushing, and vascular response.",
        },
        MetricDefinition {
            metric: Metric::Sebum,
            key: "sebum",
            label: "Sebum",
            weight: 0.13,
            color: "yellow",
            description: "Oil production relative to a balanced complexion.",
        },
        MetricDefinition {
            metric: Metric::Pores,
            key: "pores",
            label: "Pores",
            weight: 0.12,
            color: "slate",
            description: "Visibility and congestion of pores.",
        },
    ]
}
