use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::table::Table;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let directory = cfg.student_directory()?;

    if directory.is_empty() {
        println!("The student directory is empty.");
        return Ok(());
    }

    let mut table = Table::with_headers(&["ROLL", "NAME"]);
    for entry in directory.entries() {
        table.add_row(vec![entry.roll.to_string(), entry.name.clone()]);
    }

    print!("{}", table.render());
    println!("{} students", directory.len());
    Ok(())
}
