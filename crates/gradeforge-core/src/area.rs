//! Area tags for requirement categories and elective subfields.

use std::fmt;
use std::str::FromStr;

use crate::error::GradeForgeError;

/// The subject area an achievement belongs to.
///
/// The declaration order is the fixed enumeration order used for every
/// area-level tie-break in the solver.
///
/// # Examples
///
/// ```
/// use gradeforge_core::Area;
///
/// let area: Area = "mla".parse().unwrap();
/// assert_eq!(area, Area::Mla);
/// assert!(area.is_elective());
/// assert!(!Area::Thesis.is_elective());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Area {
    /// Support elective.
    Sup,
    /// Practical course.
    Practical,
    /// Master's thesis.
    Thesis,
    /// Interdisciplinary project.
    Idp,
    /// Lecture accompanying the interdisciplinary project.
    IdpLecture,
    /// Guided research project.
    GuidedResearch,

    /// Algorithms.
    Alg,
    /// Computer graphics and vision.
    Cgv,
    /// Databases and information systems.
    Dbi,
    /// Digital biology and digital medicine.
    Dbm,
    /// Software engineering.
    Se,
    /// Formal methods and applications.
    Fma,
    /// Machine learning and analytics.
    Mla,
    /// Computer architecture, networks and distributed systems.
    Rrv,
    /// Robotics.
    Rob,
    /// Security and privacy.
    Sp,
    /// High performance computing.
    Hpc,
    /// Any other elective subject.
    Other,
}

impl Area {
    /// Every area in enumeration order.
    pub const ALL: [Area; 18] = [
        Area::Sup,
        Area::Practical,
        Area::Thesis,
        Area::Idp,
        Area::IdpLecture,
        Area::GuidedResearch,
        Area::Alg,
        Area::Cgv,
        Area::Dbi,
        Area::Dbm,
        Area::Se,
        Area::Fma,
        Area::Mla,
        Area::Rrv,
        Area::Rob,
        Area::Sp,
        Area::Hpc,
        Area::Other,
    ];

    /// Returns true for elective subject tags that can become a major or minor.
    pub fn is_elective(self) -> bool {
        !self.is_requirement()
    }

    /// Returns true for fixed requirement categories.
    pub fn is_requirement(self) -> bool {
        matches!(
            self,
            Area::Sup
                | Area::Practical
                | Area::Thesis
                | Area::Idp
                | Area::IdpLecture
                | Area::GuidedResearch
        )
    }

    /// Returns true for practical work and guided research.
    pub fn is_project_work(self) -> bool {
        matches!(self, Area::Practical | Area::GuidedResearch)
    }

    /// Returns true if achievements of this area may count as free choice.
    pub fn is_free_choice_eligible(self) -> bool {
        self.is_elective() || self.is_project_work()
    }

    /// Returns the wire tag of this area.
    pub fn code(self) -> &'static str {
        match self {
            Area::Sup => "SUP",
            Area::Practical => "PRACTICAL",
            Area::Thesis => "THESIS",
            Area::Idp => "IDP",
            Area::IdpLecture => "IDP_LECTURE",
            Area::GuidedResearch => "GUIDED_RESEARCH",
            Area::Alg => "ALG",
            Area::Cgv => "CGV",
            Area::Dbi => "DBI",
            Area::Dbm => "DBM",
            Area::Se => "SE",
            Area::Fma => "FMA",
            Area::Mla => "MLA",
            Area::Rrv => "RRV",
            Area::Rob => "ROB",
            Area::Sp => "SP",
            Area::Hpc => "HPC",
            Area::Other => "OTHER",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Area {
    type Err = GradeForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().replace('-', "_").to_ascii_uppercase();
        Area::ALL
            .into_iter()
            .find(|area| area.code() == tag)
            .ok_or_else(|| GradeForgeError::UnknownArea(s.to_string()))
    }
}
