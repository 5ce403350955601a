//! Plain-text instance and solution formats.
//!
//! Instances use the classic facility location layout:
//!
//! ```text
//! N M
//! setup_cost capacity x y     (N facility lines)
//! demand x y                  (M customer lines)
//! ```
//!
//! Records get dense indices in file order. Blank lines are ignored.

use std::str::FromStr;

use crate::error::{FacilityError, Result};
use crate::models::{Assignment, Customer, Facility, Instance};
use crate::solver::SolveStatus;

/// Parses an instance from text.
///
/// # Examples
///
/// ```
/// use u_facility::io::parse_instance;
///
/// let text = "2 1\n5 10 0 0\n1 100 5 5\n3 0 1\n";
/// let inst = parse_instance(text).unwrap();
/// assert_eq!(inst.num_facilities(), 2);
/// assert_eq!(inst.customers()[0].demand(), 3.0);
/// ```
pub fn parse_instance(text: &str) -> Result<Instance> {
    let eof_line = text.lines().count().max(1);
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (line_no, header) = lines.next().ok_or(FacilityError::Parse {
        line: eof_line,
        message: "missing header".into(),
    })?;
    let header: Vec<usize> = parse_fields(line_no, header, 2)?;
    let (num_facilities, num_customers) = (header[0], header[1]);

    let mut facilities = Vec::new();
    for index in 0..num_facilities {
        let (line_no, line) = next_record(&mut lines, eof_line, "facility", index)?;
        let v: Vec<f64> = parse_fields(line_no, line, 4)?;
        facilities.push(Facility::new(index, v[0], v[1], v[2], v[3]));
    }

    let mut customers = Vec::new();
    for index in 0..num_customers {
        let (line_no, line) = next_record(&mut lines, eof_line, "customer", index)?;
        let v: Vec<f64> = parse_fields(line_no, line, 3)?;
        customers.push(Customer::new(index, v[0], v[1], v[2]));
    }

    if let Some((line_no, _)) = lines.next() {
        return Err(FacilityError::Parse {
            line: line_no,
            message: "unexpected trailing record".into(),
        });
    }

    Instance::new(facilities, customers)
}

/// Renders `objective flag` on the first line and the facility of each
/// customer on the second. `flag` is 1 for a proven optimum, 0 otherwise.
///
/// # Examples
///
/// ```
/// use u_facility::io::format_solution;
/// use u_facility::models::Assignment;
/// use u_facility::solver::SolveStatus;
///
/// let text = format_solution(15.0, SolveStatus::Optimal, &Assignment::new(vec![0, 1, 2, 2]));
/// assert_eq!(text, "15.00 1\n0 1 2 2\n");
/// ```
pub fn format_solution(objective: f64, status: SolveStatus, assignment: &Assignment) -> String {
    let flag = u8::from(status == SolveStatus::Optimal);
    let facilities: Vec<String> = assignment.as_slice().iter().map(usize::to_string).collect();
    format!("{objective:.2} {flag}\n{}\n", facilities.join(" "))
}

fn next_record<'a, I>(
    lines: &mut I,
    eof_line: usize,
    entity: &str,
    index: usize,
) -> Result<(usize, &'a str)>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    lines.next().ok_or_else(|| FacilityError::Parse {
        line: eof_line,
        message: format!("missing {entity} record {index}"),
    })
}

fn parse_fields<T: FromStr>(line_no: usize, line: &str, expected: usize) -> Result<Vec<T>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != expected {
        return Err(FacilityError::Parse {
            line: line_no,
            message: format!("expected {expected} fields, found {}", fields.len()),
        });
    }
    fields
        .into_iter()
        .map(|field| {
            field.parse::<T>().map_err(|_| FacilityError::Parse {
                line: line_no,
                message: format!("invalid number '{field}'"),
            })
        })
        .collect()
}
