//! Achievement builder.
//!
//! # Example
//!
//! ```
//! use gradeforge_core::Area;
//! use gradeforge_test::AchievementBuilder;
//!
//! let ead = AchievementBuilder::new("EAD")
//!     .area(Area::Alg)
//!     .credits(8)
//!     .score(1.3)
//!     .theoretical()
//!     .build();
//!
//! assert_eq!(ead.theoretical_credits(), 8);
//! ```

use gradeforge_core::{Achievement, Area};

/// Builds [`Achievement`] values for tests.
///
/// Defaults to an ungraded, non-theoretical 5-credit achievement in
/// [`Area::Other`].
#[derive(Debug, Clone)]
pub struct AchievementBuilder {
    id: String,
    area: Area,
    credits: u32,
    score: Option<f64>,
    theoretical: bool,
}

impl AchievementBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            area: Area::Other,
            credits: 5,
            score: None,
            theoretical: false,
        }
    }

    pub fn area(mut self, area: Area) -> Self {
        self.area = area;
        self
    }

    pub fn credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn ungraded(mut self) -> Self {
        self.score = None;
        self
    }

    pub fn theoretical(mut self) -> Self {
        self.theoretical = true;
        self
    }

    pub fn build(self) -> Achievement {
        Achievement {
            id: self.id,
            area: self.area,
            credits: self.credits,
            score: self.score,
            theoretical: self.theoretical,
        }
    }
}
