//! Unit tests for energy leak detection.

use swingmetrics::metrics::analytics::{detect_leak, Leak};
use swingmetrics::metrics::axis_stability::classify_axis_stability;
use swingmetrics::SwingFeatureVector;

fn connected_swing() -> SwingFeatureVector {
    SwingFeatureVector {
        hand_cast_distance_in: Some(4.0),
        cog_velocity_y: Some(0.0),
        pelvis_angular_velocity: Some(550.0),
        trunk_angular_velocity: Some(800.0),
        arm_angular_velocity: Some(1050.0),
        ..Default::default()
    }
}

fn diagnose(features: &SwingFeatureVector) -> Leak {
    let axis = features.cog_velocity_y.map(classify_axis_stability);
    detect_leak(features, axis.as_ref())
}

#[test]
fn test_connected_swing_is_clean() {
    assert_eq!(diagnose(&connected_swing()), Leak::CleanTransfer);
}

#[test]
fn test_cast_outranks_axis_faults() {
    let features = SwingFeatureVector {
        hand_cast_distance_in: Some(9.5),
        cog_velocity_y: Some(-0.9),
        ..connected_swing()
    };
    assert_eq!(diagnose(&features), Leak::Cast);
}

#[test]
fn test_axis_faults() {
    let drifting = SwingFeatureVector {
        cog_velocity_y: Some(-0.7),
        ..connected_swing()
    };
    assert_eq!(diagnose(&drifting), Leak::Collapse);

    let spinning = SwingFeatureVector {
        cog_velocity_y: Some(1.1),
        ..connected_swing()
    };
    assert_eq!(diagnose(&spinning), Leak::SpinOut);

    let lunging = SwingFeatureVector {
        cog_velocity_y: Some(0.6),
        ..connected_swing()
    };
    assert_eq!(diagnose(&lunging), Leak::Lunge);
}

#[test]
fn test_sequence_faults() {
    let early_arms = SwingFeatureVector {
        arm_angular_velocity: Some(700.0),
        ..connected_swing()
    };
    assert_eq!(diagnose(&early_arms), Leak::EarlyArms);

    let flat_gain = SwingFeatureVector {
        trunk_angular_velocity: Some(600.0),
        ..connected_swing()
    };
    assert_eq!(diagnose(&flat_gain), Leak::PoorSeparation);
}

#[test]
fn test_every_leak_has_a_drill() {
    for leak in Leak::ALL {
        assert_eq!(leak.drill().is_some(), leak.is_leak(), "{}", leak);
    }
}

#[test]
fn test_labels_parse_back() {
    for leak in Leak::ALL {
        assert_eq!(Leak::from_label(leak.label()), Some(leak));
    }
    assert_eq!(Leak::from_label("early_arms"), Some(Leak::EarlyArms));
    assert_eq!(Leak::from_label("BAT_DRAG"), None);
}
