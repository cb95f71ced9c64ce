use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::insert_measurement;
use crate::errors::AppResult;
use crate::models::measurement::Measurement;
use crate::ui::messages::success;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// One atomic user action: compute → persist → report.
    /// Inputs arrive already validated as positive reals; the derived BMI
    /// and category are captured at creation time and never recomputed.
    pub fn apply(
        pool: &mut DbPool,
        subject_name: &str,
        weight_kg: f64,
        height_m: f64,
    ) -> AppResult<Measurement> {
        let mut m = Measurement::new(subject_name, weight_kg, height_m);

        m.id = insert_measurement(&pool.conn, &m)?;

        success(format!(
            "{}: BMI {} ({})",
            display_name(&m.subject_name),
            m.bmi_str(),
            m.category
        ));

        // Audit trail is best-effort and never fails the user action.
        if let Err(e) = audit(
            &pool.conn,
            "add",
            &m.subject_name,
            &format!("Recorded BMI {} ({})", m.bmi_str(), m.category),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(m)
    }
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { "(unnamed)" } else { name }
}
