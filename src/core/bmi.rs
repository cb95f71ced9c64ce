//! Pure BMI calculation and classification.
//! Both functions are total over positive inputs; callers validate
//! positivity before calling (see utils::parse::parse_positive_real).

use crate::models::category::Category;

/// BMI = weight / height². No rounding here; display formatting is a
/// presentation concern.
pub fn compute(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Map a BMI value to its category band.
///
/// Band edges are kept exactly as the historical tables were stored:
/// values in 24.9..25.0 and at or above 29.9 fall through to Obesity.
pub fn classify(bmi: f64) -> Category {
    if bmi < 18.5 {
        Category::Underweight
    } else if (18.5..24.9).contains(&bmi) {
        Category::NormalWeight
    } else if (25.0..29.9).contains(&bmi) {
        Category::Overweight
    } else {
        Category::Obesity
    }
}
