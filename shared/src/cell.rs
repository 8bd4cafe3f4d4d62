use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// White blood cell classes the classifier knows about, in catalog order.
///
/// The derived `Ord` follows declaration order and is used as the tie-break
/// when two results carry the same confidence.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum CellType {
    Neutrophil,
    Lymphocyte,
    Monocyte,
    Eosinophil,
}

impl CellType {
    /// One-line description shown next to a classification result.
    pub fn summary(&self) -> &'static str {
        match self {
            CellType::Neutrophil => "Most abundant white blood cell, first line of defense",
            CellType::Lymphocyte => "Key immune system cell for adaptive immunity",
            CellType::Monocyte => "Largest white blood cell, becomes macrophages",
            CellType::Eosinophil => "Fights parasites and mediates allergic reactions",
        }
    }

    /// `(base, spread)` of the mocked confidence: `base + U[0, 1) * spread`.
    pub fn mock_confidence_range(&self) -> (f32, f32) {
        match self {
            CellType::Neutrophil => (87.3, 10.0),
            CellType::Lymphocyte => (5.2, 8.0),
            CellType::Monocyte => (2.1, 5.0),
            CellType::Eosinophil => (1.0, 3.0),
        }
    }

    /// Css accent used for the legend dot and guide badge.
    pub fn accent_class(&self) -> &'static str {
        match self {
            CellType::Neutrophil => "accent-blue",
            CellType::Lymphocyte => "accent-green",
            CellType::Monocyte => "accent-purple",
            CellType::Eosinophil => "accent-orange",
        }
    }

    pub fn profile(&self) -> CellProfile {
        match self {
            CellType::Neutrophil => CellProfile {
                cell_type: *self,
                share_of_wbc: "50-70%",
                description: "The most abundant white blood cells, serving as the first line of defense against bacterial infections.",
                functions: &[
                    "Phagocytosis of bacteria",
                    "Release of antimicrobial substances",
                    "Formation of neutrophil extracellular traps (NETs)",
                ],
                morphology: "Multi-lobed nucleus, granular cytoplasm",
                normal_range: "2,000-7,500 cells/μL",
                clinical_notes: &[
                    "First responders to bacterial infections",
                    "Comprise 50-70% of white blood cells",
                    "Essential for innate immune response",
                ],
            },
            CellType::Lymphocyte => CellProfile {
                cell_type: *self,
                share_of_wbc: "20-40%",
                description: "Key players in adaptive immunity, including T cells, B cells, and NK cells.",
                functions: &[
                    "Antibody production (B cells)",
                    "Cell-mediated immunity (T cells)",
                    "Immune memory formation",
                ],
                morphology: "Large nucleus, minimal cytoplasm",
                normal_range: "1,000-4,000 cells/μL",
                clinical_notes: &[
                    "Elevated counts often accompany viral infections",
                    "Comprise 20-40% of white blood cells",
                    "Drive long-term immune memory",
                ],
            },
            CellType::Monocyte => CellProfile {
                cell_type: *self,
                share_of_wbc: "2-8%",
                description: "Largest white blood cells that differentiate into macrophages and dendritic cells.",
                functions: &[
                    "Differentiation into macrophages",
                    "Antigen presentation",
                    "Tissue repair and remodeling",
                ],
                morphology: "Kidney-shaped nucleus, abundant cytoplasm",
                normal_range: "200-800 cells/μL",
                clinical_notes: &[
                    "Raised in chronic infection and inflammation",
                    "Comprise 2-8% of white blood cells",
                    "Bridge innate and adaptive immunity",
                ],
            },
            CellType::Eosinophil => CellProfile {
                cell_type: *self,
                share_of_wbc: "1-4%",
                description: "Specialized cells that combat parasitic infections and mediate allergic reactions.",
                functions: &[
                    "Parasitic infection defense",
                    "Allergic reaction mediation",
                    "Anti-inflammatory role",
                ],
                morphology: "Bi-lobed nucleus, eosinophilic granules",
                normal_range: "50-400 cells/μL",
                clinical_notes: &[
                    "Raised in allergies, asthma and parasitic infection",
                    "Comprise 1-4% of white blood cells",
                    "Modulate inflammatory responses",
                ],
            },
        }
    }
}

/// Static reference content for one cell type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellProfile {
    pub cell_type: CellType,
    pub share_of_wbc: &'static str,
    pub description: &'static str,
    pub functions: &'static [&'static str],
    pub morphology: &'static str,
    pub normal_range: &'static str,
    pub clinical_notes: &'static [&'static str],
}

/// Every profile, catalog order.
pub fn cell_profiles() -> Vec<CellProfile> {
    use strum::IntoEnumIterator;
    CellType::iter().map(|cell| cell.profile()).collect()
}
