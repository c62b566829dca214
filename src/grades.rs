//! Student roster with per-student averages and group statistics.
//!
//! A roster can round trip through disk with bincode so an entered group can
//! be reloaded and re-reported later.

use crate::error::PracticumError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_STUDENTS: usize = 50;
pub const NUM_GRADES: usize = 5;
pub const MIN_PASS_GRADE: f64 = 60.0;
pub const EXCELLENT_GRADE: f64 = 90.0;

/// Verdict attached to a student's average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Excellent,
    Pass,
    Fail,
}

impl Status {
    pub fn from_average(avg: f64) -> Self {
        if avg >= EXCELLENT_GRADE {
            Self::Excellent
        } else if avg >= MIN_PASS_GRADE {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub grades: [f64; NUM_GRADES],
}

impl Student {
    pub fn average(&self) -> f64 {
        self.grades.iter().sum::<f64>() / NUM_GRADES as f64
    }

    pub fn status(&self) -> Status {
        Status::from_average(self.average())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub students: Vec<Student>,
}

/// Group statistics over a non-empty roster. Indices point back into the
/// roster; ties keep the earliest student.
#[derive(Debug, Clone)]
pub struct Summary {
    pub group_average: f64,
    pub best: usize,
    pub worst: usize,
    pub pass_count: usize,
    pub pass_rate: f64,
    /// Passing students, highest average first, entry order on ties.
    pub passing_desc: Vec<usize>,
}

impl Roster {
    pub fn summary(&self) -> Option<Summary> {
        if self.students.is_empty() {
            return None;
        }
        let avgs: Vec<f64> = self.students.iter().map(Student::average).collect();

        let mut best = 0;
        let mut worst = 0;
        let mut group_sum = 0.0;
        let mut passing: Vec<usize> = Vec::new();
        for (i, &avg) in avgs.iter().enumerate() {
            group_sum += avg;
            if avg > avgs[best] {
                best = i;
            }
            if avg < avgs[worst] {
                worst = i;
            }
            if avg >= MIN_PASS_GRADE {
                passing.push(i);
            }
        }
        passing.sort_by(|&a, &b| avgs[b].total_cmp(&avgs[a]));

        let n = self.students.len();
        let pass_count = passing.len();
        Some(Summary {
            group_average: group_sum / n as f64,
            best,
            worst,
            pass_count,
            pass_rate: pass_count as f64 * 100.0 / n as f64,
            passing_desc: passing,
        })
    }

    /// Serialize the roster to disk with bincode.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PracticumError> {
        let data =
            bincode::serialize(self).map_err(|e| PracticumError::Parse(e.to_string()))?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Load a roster previously written by [`Roster::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PracticumError> {
        let data = std::fs::read(path)?;
        bincode::deserialize(&data).map_err(|e| PracticumError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, grades: [f64; NUM_GRADES]) -> Student {
        Student {
            name: name.to_string(),
            grades,
        }
    }

    #[test]
    fn status_boundaries() {
        assert_eq!(Status::from_average(90.0), Status::Excellent);
        assert_eq!(Status::from_average(89.99), Status::Pass);
        assert_eq!(Status::from_average(60.0), Status::Pass);
        assert_eq!(Status::from_average(59.99), Status::Fail);
    }

    #[test]
    fn average_is_plain_mean() {
        let s = student("a", [80.0, 90.0, 100.0, 70.0, 60.0]);
        assert_eq!(s.average(), 80.0);
    }

    #[test]
    fn summary_on_known_roster() {
        let roster = Roster {
            students: vec![
                student("Ana", [90.0, 90.0, 90.0, 90.0, 90.0]),
                student("Ben", [50.0, 50.0, 50.0, 50.0, 50.0]),
                student("Cal", [70.0, 70.0, 70.0, 70.0, 70.0]),
            ],
        };
        let s = roster.summary().unwrap();
        assert!((s.group_average - 70.0).abs() < 1e-9);
        assert_eq!(s.best, 0);
        assert_eq!(s.worst, 1);
        assert_eq!(s.pass_count, 2);
        assert!((s.pass_rate - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(s.passing_desc, vec![0, 2]);
    }

    #[test]
    fn ties_keep_the_first_student() {
        let roster = Roster {
            students: vec![
                student("first", [80.0; NUM_GRADES]),
                student("second", [80.0; NUM_GRADES]),
            ],
        };
        let s = roster.summary().unwrap();
        assert_eq!(s.best, 0);
        assert_eq!(s.worst, 0);
        assert_eq!(s.passing_desc, vec![0, 1]);
    }

    #[test]
    fn empty_roster_has_no_summary() {
        assert!(Roster::default().summary().is_none());
    }

    #[test]
    fn roster_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.bin");
        let roster = Roster {
            students: vec![student("Ana", [91.0, 88.0, 95.0, 100.0, 90.0])],
        };
        roster.save(&path).unwrap();
        let loaded = Roster::load(&path).unwrap();
        assert_eq!(loaded.students.len(), 1);
        assert_eq!(loaded.students[0].name, "Ana");
        assert_eq!(loaded.students[0].grades, roster.students[0].grades);
    }

    #[test]
    fn load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.bin");
        std::fs::write(&path, b"not a roster").unwrap();
        assert!(matches!(
            Roster::load(&path),
            Err(PracticumError::Parse(_))
        ));
    }
}
