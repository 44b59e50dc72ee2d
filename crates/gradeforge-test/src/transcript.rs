//! Sample transcripts.

use gradeforge_core::{Achievement, Area};

/// A realistic twelve-entry transcript.
///
/// Covers support electives, two practicals, guided research and six
/// elective areas, two of them theoretical. There is no thesis and no
/// interdisciplinary project.
pub fn sample_transcript() -> Vec<Achievement> {
    vec![
        Achievement::graded("ERDB", Area::Dbi, 6, 1.0),
        Achievement::graded("MMDS", Area::Mla, 5, 1.5),
        Achievement::graded("ADL4CV", Area::Cgv, 8, 1.3),
        Achievement::graded("Franz", Area::Sup, 3, 1.7),
        Achievement::graded("DDML", Area::Practical, 10, 1.0),
        Achievement::graded("NLP", Area::Mla, 6, 2.3),
        Achievement::graded("EAD", Area::Alg, 8, 1.3).theoretical(),
        Achievement::graded("I2DL", Area::Mla, 6, 2.0),
        Achievement::graded("ProgOpt", Area::Fma, 8, 2.3).theoretical(),
        Achievement::graded("itsec", Area::Sp, 5, 2.7),
        Achievement::graded("DDML2", Area::Practical, 10, 1.2),
        Achievement::graded("DDML3", Area::GuidedResearch, 10, 1.1),
    ]
}

/// Two elective areas where the one with the better average wins:
/// `X1` (ALG, 20 credits, 1.0) and `Y1` (MLA, 18 credits, 2.0).
pub fn subfield_pair() -> Vec<Achievement> {
    vec![
        Achievement::graded("X1", Area::Alg, 20, 1.0),
        Achievement::graded("Y1", Area::Mla, 18, 2.0),
    ]
}

/// Identifiers of `items`, in order.
pub fn ids<'a>(items: impl IntoIterator<Item = &'a Achievement>) -> Vec<&'a str> {
    items.into_iter().map(|a| a.id.as_str()).collect()
}
