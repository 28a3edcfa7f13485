//! Face shape classification and eyewear recommendation from facial landmarks.
//!
//! Per frame: landmarks → measured features → head-pose gate → raw shape →
//! majority-vote stabilized shape → ranked eyewear styles.

pub mod classification {
    pub mod domain {
        pub mod face_shape;
        pub mod shape_classifier;
        pub mod shape_stabilizer;
    }
}

pub mod landmarks {
    pub mod domain {
        pub mod landmark_set;
        pub mod landmark_source;
    }
    pub mod infrastructure;
}

pub mod measurement {
    pub mod domain {
        pub mod face_features;
        pub mod geometry;
        pub mod head_pose_gate;
    }
}

pub mod pipeline;

pub mod recommendation {
    pub mod domain {
        pub mod eyewear_catalog;
        pub mod recommendation_scorer;
        pub mod scoring_rules;
    }
    pub mod infrastructure;
}

pub mod shared {
    pub mod constants;
}

#[cfg(test)]
pub(crate) mod test_fixtures;
