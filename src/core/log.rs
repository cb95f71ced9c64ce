use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

/// One row of the internal log table, preformatted for display.
struct LogEntry {
    id: i64,
    date: String,
    operation: String,
    op_target: String,
    message: String,
}

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// ANSI color for an operation kind.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "export" => Colour::Yellow,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_entries(pool)?;

        if entries.is_empty() {
            println!("Internal log is empty.");
            return Ok(());
        }

        let id_width = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_width = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_width = entries
            .iter()
            .map(|e| e.op_target.len())
            .max()
            .unwrap_or(10)
            .min(60);

        println!("📜 Internal log:\n");

        for e in entries {
            let colored = colorize_operation(&e);
            let padding = " ".repeat(op_width.saturating_sub(strip_ansi(&colored).len()));

            println!(
                "{:>id_width$}: {:<date_width$} | {}{} => {}",
                e.id, e.date, colored, padding, e.message,
            );
        }

        Ok(())
    }
}

fn load_entries(pool: &mut DbPool) -> AppResult<Vec<LogEntry>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        let id: i64 = row.get(0)?;
        let raw_date: String = row.get(1)?;
        let operation: String = row.get(2)?;
        let target: String = row.get(3)?;
        let message: String = row.get(4)?;

        let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
            .map(|dt| dt.format("%FT%T%:z").to_string())
            .unwrap_or(raw_date);

        let op_target = if target.is_empty() {
            operation.clone()
        } else {
            format!("{operation} ({target})")
        };

        Ok(LogEntry {
            id,
            date,
            operation,
            op_target,
            message,
        })
    })?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }
    Ok(entries)
}

/// Color only the operation word; the target stays plain. The visible text
/// is truncated to 60 chars first so the padding math works on real widths.
fn colorize_operation(e: &LogEntry) -> String {
    let color = color_for_operation(&e.operation);

    let truncated = if e.op_target.len() > 60 {
        let mut s = e.op_target.chars().take(57).collect::<String>();
        s.push_str("...");
        s
    } else {
        e.op_target.clone()
    };

    match truncated.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}
