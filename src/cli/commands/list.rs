use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_measurements;
use crate::errors::AppResult;
use crate::models::measurement::Measurement;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        let pool = DbPool::new(&cfg.database)?;
        let records = load_all_measurements(&pool.conn)?;

        if records.is_empty() {
            info("No records found.");
            return Ok(());
        }

        print_measurements(&records);
    }
    Ok(())
}

fn print_measurements(records: &[Measurement]) {
    let mut table = Table::new(&[
        "ID",
        "User Name",
        "Weight (kg)",
        "Height (m)",
        "BMI",
        "Category",
    ]);

    for m in records {
        table.add_row(vec![
            m.id.to_string(),
            display_name(&m.subject_name).to_string(),
            m.weight_kg.to_string(),
            m.height_m.to_string(),
            m.bmi_str(),
            m.category.to_string(),
        ]);
    }

    print!("{}", table.render());
    println!("\n{} record(s).", records.len());
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { "(unnamed)" } else { name }
}
