//! Employee CSV parsing, appending and salary statistics.
//!
//! Reads go through a CSV reader so quoted fields in hand-edited files
//! still load; writes emit plain comma-joined lines (inputs are
//! validated comma-free) to keep salaries in fixed two-decimal form.

use crate::PracticumError;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Header row expected at the top of the employee file.
pub const HEADER: &str = "ID,Name,Department,Salary";

const SEED_DATA: &str = "ID,Name,Department,Salary\n\
101,Ada Lovelace,Engineering,125000.00\n\
102,Alan Turing,Research,135000.50\n\
103,Grace Hopper,Management,145000.00\n\
104,Edgar Codd,Database,115000.75\n";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub department: String,
    pub salary: f32,
}

/// Payroll summary over a set of employees.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryStats {
    pub count: usize,
    pub average: f64,
    pub total: f64,
    pub top_earner: String,
    pub top_salary: f32,
}

/// Create `path` with the demo employee table unless it already exists.
pub fn ensure_seeded(path: &Path) -> std::io::Result<()> {
    if path.exists() {
        return Ok(());
    }
    std::fs::write(path, SEED_DATA)
}

/// Parse every valid employee row from `path`. A leading header row is
/// skipped, and rows that fail to parse are dropped rather than
/// aborting the load.
pub fn load_employees(path: &Path) -> Result<Vec<Employee>, PracticumError> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut employees = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(_) => continue,
        };
        if i == 0 && record.get(0) == Some("ID") {
            continue;
        }
        match record.deserialize::<Employee>(None) {
            Ok(emp) => employees.push(emp),
            Err(_) => continue,
        }
    }
    Ok(employees)
}

/// Append one employee row, writing the header first when the file is
/// empty or missing. The name and department must not contain commas.
pub fn append_employee(path: &Path, emp: &Employee) -> std::io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    if file.metadata()?.len() == 0 {
        writeln!(file, "{HEADER}")?;
    }
    writeln!(
        file,
        "{},{},{},{:.2}",
        emp.id, emp.name, emp.department, emp.salary
    )
}

/// Salary statistics, or `None` when there are no employees. Ties for
/// the top salary keep the earliest row.
pub fn salary_stats(employees: &[Employee]) -> Option<SalaryStats> {
    if employees.is_empty() {
        return None;
    }

    let total: f64 = employees.iter().map(|e| f64::from(e.salary)).sum();
    let mut top = &employees[0];
    for emp in &employees[1..] {
        if emp.salary > top.salary {
            top = emp;
        }
    }

    Some(SalaryStats {
        count: employees.len(),
        average: total / employees.len() as f64,
        total,
        top_earner: top.name.clone(),
        top_salary: top.salary,
    })
}
