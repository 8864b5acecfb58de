//! Section boundaries and the activation threshold rule.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A section becomes active once the viewport is within this many pixels of its top.
pub const ACTIVATION_OFFSET_PX: f64 = 100.0;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("Section id must not be empty (position {0})")]
    EmptyId(usize),

    #[error("Duplicate section id '{0}'")]
    DuplicateId(String),

    #[error("Section '{0}' has a non-finite top offset")]
    NonFiniteTop(String),
}

/// A registered section and its top offset relative to the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBoundary {
    pub id: String,
    pub top: f64,
}

impl SectionBoundary {
    pub fn new(id: &str, top: f64) -> Self {
        SectionBoundary {
            id: id.to_string(),
            top,
        }
    }
}

/// Sections in document order. Tops are not required to be sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionLayout {
    sections: Vec<SectionBoundary>,
}

impl SectionLayout {
    pub fn new(sections: Vec<SectionBoundary>) -> Result<Self, LayoutError> {
        let mut seen = HashSet::new();
        for (idx, section) in sections.iter().enumerate() {
            if section.id.is_empty() {
                return Err(LayoutError::EmptyId(idx));
            }
            if !section.top.is_finite() {
                return Err(LayoutError::NonFiniteTop(section.id.clone()));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(LayoutError::DuplicateId(section.id.clone()));
            }
        }
        Ok(SectionLayout { sections })
    }

    pub fn sections(&self) -> &[SectionBoundary] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Index of the last section (in document order) whose threshold the offset has passed.
    pub fn active_index(&self, offset: f64) -> Option<usize> {
        self.sections
            .iter()
            .rposition(|s| offset >= s.top - ACTIVATION_OFFSET_PX)
    }

    /// Id of the active section at `offset`, or `None` above the first threshold.
    pub fn active_at(&self, offset: f64) -> Option<&str> {
        self.active_index(offset)
            .map(|idx| self.sections[idx].id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_sections() -> SectionLayout {
        SectionLayout::new(vec![
            SectionBoundary::new("header", 0.0),
            SectionBoundary::new("profile", 800.0),
            SectionBoundary::new("experience", 1600.0),
        ])
        .unwrap()
    }

    /// Reference rule: the largest i with offset >= t_i - 100.
    fn reference_index(tops: &[f64], offset: f64) -> Option<usize> {
        let mut current = None;
        for (i, top) in tops.iter().enumerate() {
            if offset >= top - ACTIVATION_OFFSET_PX {
                current = Some(i);
            }
        }
        current
    }

    #[test]
    fn test_offset_750_activates_profile() {
        assert_eq!(three_sections().active_at(750.0), Some("profile"));
    }

    #[test]
    fn test_offset_zero_activates_header() {
        assert_eq!(three_sections().active_at(0.0), Some("header"));
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let layout = three_sections();
        assert_eq!(layout.active_at(699.0), Some("header"));
        assert_eq!(layout.active_at(700.0), Some("profile"));
        assert_eq!(layout.active_at(1500.0), Some("experience"));
    }

    #[test]
    fn test_above_first_threshold_is_none() {
        let layout = SectionLayout::new(vec![SectionBoundary::new("header", 400.0)]).unwrap();
        assert_eq!(layout.active_at(299.0), None);
        assert_eq!(layout.active_at(300.0), Some("header"));
    }

    #[test]
    fn test_empty_layout_is_none_for_any_offset() {
        let layout = SectionLayout::default();
        for offset in [-1000.0, 0.0, 750.0, 1e9] {
            assert_eq!(layout.active_at(offset), None);
        }
    }

    #[test]
    fn test_nan_offset_matches_nothing() {
        assert_eq!(three_sections().active_at(f64::NAN), None);
    }

    #[test]
    fn test_later_section_wins_when_tops_unsorted() {
        let layout = SectionLayout::new(vec![
            SectionBoundary::new("a", 1000.0),
            SectionBoundary::new("b", 0.0),
        ])
        .unwrap();
        // Both qualify at 1000; the later one in document order wins.
        assert_eq!(layout.active_at(1000.0), Some("b"));
        assert_eq!(layout.active_at(50.0), Some("b"));
    }

    #[test]
    fn test_matches_reference_rule_over_sweep() {
        let tops = [0.0, 350.0, 800.0, 1220.5, 1600.0, 2400.0];
        let layout = SectionLayout::new(
            tops.iter()
                .enumerate()
                .map(|(i, t)| SectionBoundary::new(&format!("s{i}"), *t))
                .collect(),
        )
        .unwrap();
        let mut offset = -200.0;
        while offset < 3000.0 {
            assert_eq!(layout.active_index(offset), reference_index(&tops, offset));
            offset += 17.5;
        }
    }

    #[test]
    fn test_index_monotonic_in_offset() {
        let layout = three_sections();
        let mut last = None;
        for step in 0..400 {
            let idx = layout.active_index(step as f64 * 5.0 - 100.0);
            assert!(idx >= last, "index went backwards at step {step}");
            last = idx;
        }
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = SectionLayout::new(vec![
            SectionBoundary::new("profile", 0.0),
            SectionBoundary::new("profile", 10.0),
        ])
        .unwrap_err();
        assert_eq!(err, LayoutError::DuplicateId("profile".to_string()));
    }

    #[test]
    fn test_empty_id_and_infinite_top_rejected() {
        assert_eq!(
            SectionLayout::new(vec![SectionBoundary::new("", 0.0)]).unwrap_err(),
            LayoutError::EmptyId(0)
        );
        assert_eq!(
            SectionLayout::new(vec![SectionBoundary::new("x", f64::INFINITY)]).unwrap_err(),
            LayoutError::NonFiniteTop("x".to_string())
        );
    }
}
