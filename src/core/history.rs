use crate::db::pool::DbPool;
use crate::db::queries::load_all_measurements;
use crate::errors::AppResult;
use crate::models::measurement::Measurement;
use crate::ui::messages::info;
use crate::utils::chart::Chart;

/// High-level business logic for the `history` command.
pub struct HistoryLogic;

/// One subject's measurements in insertion order.
pub struct SubjectSeries {
    pub subject_name: String,
    pub bmis: Vec<f64>,
    pub latest: Measurement,
}

impl HistoryLogic {
    /// Render a BMI-over-entry-index chart for each subject.
    pub fn show(
        pool: &mut DbPool,
        subject: Option<&str>,
        chart_width: usize,
        chart_height: usize,
    ) -> AppResult<()> {
        let records = load_all_measurements(&pool.conn)?;

        let series = group_by_subject(records, subject);

        if series.is_empty() {
            info("No records found.");
            return Ok(());
        }

        let chart = Chart::new(chart_width, chart_height);

        for s in &series {
            println!("\n=== {} ===", display_subject(&s.subject_name));
            print!("{}", chart.render(&s.bmis));
            println!(
                "entries: {} | latest BMI: {} ({})",
                s.bmis.len(),
                s.latest.bmi_str(),
                s.latest.category
            );
        }

        Ok(())
    }
}

/// Group records into per-subject series, keeping first-appearance order.
/// An optional filter restricts the output to one subject (exact match on
/// the trimmed name).
pub fn group_by_subject(
    records: Vec<Measurement>,
    subject: Option<&str>,
) -> Vec<SubjectSeries> {
    let filter = subject.map(|s| s.trim().to_string());
    let mut series: Vec<SubjectSeries> = Vec::new();

    for m in records {
        if let Some(ref wanted) = filter
            && m.subject_name != *wanted
        {
            continue;
        }

        match series.iter_mut().find(|s| s.subject_name == m.subject_name) {
            Some(s) => {
                s.bmis.push(m.bmi);
                s.latest = m;
            }
            None => series.push(SubjectSeries {
                subject_name: m.subject_name.clone(),
                bmis: vec![m.bmi],
                latest: m,
            }),
        }
    }

    series
}

fn display_subject(name: &str) -> &str {
    if name.is_empty() { "(unnamed)" } else { name }
}
