use serde::Serialize;

/// Gram amounts and calorie shares derived from a calorie target.
///
/// Never stored: recomputed on demand from the target and the body weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroBreakdown {
    pub calorie_target: f64,

    pub protein_g: f64,
    pub protein_kcal: f64,
    pub protein_percent: f64,

    pub fat_g: f64,
    pub fat_kcal: f64,
    pub fat_percent: f64,

    pub fiber_g: f64,
    pub fiber_kcal: f64,
    pub fiber_percent: f64,

    pub carbs_g: f64,
    pub carbs_kcal: f64,
    pub carbs_percent: f64,
}
