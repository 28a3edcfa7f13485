use std::cmp::Ordering;

use crate::classification::domain::face_shape::FaceShape;
use crate::recommendation::domain::eyewear_catalog::{EyewearCatalog, EyewearStyle};
use crate::recommendation::domain::scoring_rules::{rule_for, SHARP_CHIN_ANGLE, SHARP_CHIN_DELTAS};
use crate::shared::constants::RECOMMENDATION_COUNT;

/// Per-style scores for one classification event, in catalog order.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreVector {
    scores: Vec<(u32, f64)>,
}

impl ScoreVector {
    fn zeroed(catalog: &EyewearCatalog) -> Self {
        Self {
            scores: catalog.styles().iter().map(|s| (s.id, 0.0)).collect(),
        }
    }

    /// Adds `delta` to style `id`. Ids outside the catalog are ignored.
    fn add(&mut self, id: u32, delta: f64) {
        if let Some(entry) = self.scores.iter_mut().find(|(sid, _)| *sid == id) {
            entry.1 += delta;
        }
    }

    pub fn get(&self, id: u32) -> Option<f64> {
        self.scores.iter().find(|(sid, _)| *sid == id).map(|(_, s)| *s)
    }

    pub fn as_slice(&self) -> &[(u32, f64)] {
        &self.scores
    }

    /// Style ids by descending score. Equal scores keep catalog order.
    pub fn ranked_ids(&self) -> Vec<u32> {
        let mut ranked = self.scores.clone();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked.into_iter().map(|(id, _)| id).collect()
    }
}

/// Ranks catalog styles for a face shape and chin angle.
///
/// Pure and deterministic; safe to share across threads.
#[derive(Clone, Debug)]
pub struct RecommendationScorer {
    catalog: EyewearCatalog,
    count: usize,
}

impl RecommendationScorer {
    pub fn new(catalog: EyewearCatalog) -> Self {
        Self {
            catalog,
            count: RECOMMENDATION_COUNT,
        }
    }

    pub fn catalog(&self) -> &EyewearCatalog {
        &self.catalog
    }

    /// Scores every style for a shape given by name (case-insensitive).
    ///
    /// An unrecognised name applies no shape rule; the chin rule still applies.
    pub fn score(&self, shape: &str, chin_angle: f64) -> ScoreVector {
        let mut scores = ScoreVector::zeroed(&self.catalog);

        if let Some(rule) = rule_for(shape) {
            for &(id, delta) in rule.deltas {
                scores.add(id, delta);
            }
        }

        if chin_angle < SHARP_CHIN_ANGLE {
            for &(id, delta) in SHARP_CHIN_DELTAS {
                scores.add(id, delta);
            }
        }

        scores
    }

    /// Top styles for a shape label, best first.
    pub fn recommend_for_label(&self, shape: &str, chin_angle: f64) -> Vec<EyewearStyle> {
        let scores = self.score(shape, chin_angle);
        log::debug!("Scores for {shape} (chin {chin_angle:.1}): {:?}", scores.as_slice());

        scores
            .ranked_ids()
            .into_iter()
            .take(self.count)
            .filter_map(|id| self.catalog.get(id).cloned())
            .collect()
    }

    pub fn recommend(&self, shape: FaceShape, chin_angle: f64) -> Vec<EyewearStyle> {
        self.recommend_for_label(shape.name(), chin_angle)
    }
}

impl Default for RecommendationScorer {
    fn default() -> Self {
        Self::new(EyewearCatalog::default())
    }
}
