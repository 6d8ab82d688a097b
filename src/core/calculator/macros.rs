use crate::errors::{AppError, AppResult};
use crate::models::macro_breakdown::MacroBreakdown;

const PROTEIN_G_PER_KG: f64 = 2.0;
const FAT_SHARE: f64 = 0.25;
const FIBER_G: f64 = 30.0;

const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARBS: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;
// Rough heuristic kept as-is; not the usual 4 kcal/g of carbohydrates.
const KCAL_PER_G_FIBER: f64 = 2.0;

/// Split a calorie target into protein, fat, fiber and carbohydrates.
///
/// Protein scales with body weight, fat is a fixed 25 % share, fiber is a
/// fixed 30 g and carbohydrates take what is left of the target after
/// protein and fat. Fiber calories are reported on their own and are not
/// subtracted from the carbohydrate remainder, so protein + fat + carbs
/// always add up to 100 %.
pub fn compute_macros(calorie_target: f64, body_weight_kg: f64) -> AppResult<MacroBreakdown> {
    if !calorie_target.is_finite() || calorie_target <= 0.0 {
        return Err(AppError::InvalidMacroInput(format!(
            "calorie target must be greater than 0 (got {calorie_target})"
        )));
    }
    if !body_weight_kg.is_finite() || body_weight_kg <= 0.0 {
        return Err(AppError::InvalidMacroInput(format!(
            "body weight must be greater than 0 kg (got {body_weight_kg})"
        )));
    }

    let protein_g = body_weight_kg * PROTEIN_G_PER_KG;
    let protein_kcal = protein_g * KCAL_PER_G_PROTEIN;

    let fat_kcal = calorie_target * FAT_SHARE;
    let fat_g = fat_kcal / KCAL_PER_G_FAT;

    let fiber_g = FIBER_G;
    let fiber_kcal = fiber_g * KCAL_PER_G_FIBER;

    let carbs_kcal = calorie_target - protein_kcal - fat_kcal;
    if carbs_kcal < 0.0 {
        return Err(AppError::InvalidMacroInput(format!(
            "protein ({protein_kcal:.0} kcal) and fat ({fat_kcal:.0} kcal) exceed the calorie target ({calorie_target:.0} kcal)"
        )));
    }
    let carbs_g = carbs_kcal / KCAL_PER_G_CARBS;

    let percent = |kcal: f64| kcal / calorie_target * 100.0;

    Ok(MacroBreakdown {
        calorie_target,
        protein_g,
        protein_kcal,
        protein_percent: percent(protein_kcal),
        fat_g,
        fat_kcal,
        fat_percent: percent(fat_kcal),
        fiber_g,
        fiber_kcal,
        fiber_percent: percent(fiber_kcal),
        carbs_g,
        carbs_kcal,
        carbs_percent: percent(carbs_kcal),
    })
}
