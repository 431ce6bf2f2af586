#[cfg(test)]
mod tests {
    use crate::components::UnitProfile;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::SimError;
    use crate::formation::{FormationRequest, FormationSpec};
    use crate::schedule::{EventSchedule, SwarmEvent};
    use crate::state::{SwarmSnapshot, UnitView};
    use crate::types::{grounded, Vec3};

    // ---- Formation requests ----

    #[test]
    fn test_linear_request_fills_defaults() {
        let spec = FormationRequest::new("linear").resolve().unwrap();
        assert_eq!(
            spec,
            FormationSpec::Linear {
                height: 30.0,
                x_coord: 30.0,
                length: 20.0,
            }
        );
    }

    #[test]
    fn test_circular_request_fills_defaults() {
        let spec = FormationRequest::new("circular")
            .with_radius(20.0)
            .resolve()
            .unwrap();
        assert_eq!(
            spec,
            FormationSpec::Circular {
                height: 30.0,
                radius: 20.0,
                center_xz: [10.0, 10.0],
            }
        );
    }

    #[test]
    fn test_request_ignores_parameters_of_other_kinds() {
        let spec = FormationRequest::new("linear")
            .with_radius(99.0)
            .with_center_xz([1.0, 2.0])
            .resolve()
            .unwrap();
        assert_eq!(spec, FormationSpec::linear());
    }

    #[test]
    fn test_unknown_formation_rejected() {
        let err = FormationRequest::new("hexagonal").resolve().unwrap_err();
        assert_eq!(
            err,
            SimError::UnknownFormation {
                kind: "hexagonal".into()
            }
        );
        assert_eq!(err.to_string(), "unknown formation type: hexagonal");
    }

    #[test]
    fn test_kind_names_are_case_sensitive() {
        assert!(FormationRequest::new("Linear").resolve().is_err());
        assert_eq!(FormationKind::from_name("circular"), Some(FormationKind::Circular));
    }

    #[test]
    fn test_non_finite_parameter_rejected() {
        let err = FormationRequest::new("circular")
            .with_radius(f64::NAN)
            .resolve()
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(msg) if msg.contains("radius")));
    }

    #[test]
    fn test_spec_converts_back_to_equivalent_request() {
        let spec = FormationSpec::Circular {
            height: 12.0,
            radius: 3.5,
            center_xz: [-4.0, 8.0],
        };
        let request = FormationRequest::from(spec);
        assert_eq!(request.kind, "circular");
        assert_eq!(request.resolve().unwrap(), spec);
    }

    #[test]
    fn test_request_parses_from_sparse_json() {
        let request: FormationRequest =
            serde_json::from_str(r#"{"kind": "linear", "length": 40.0}"#).unwrap();
        assert_eq!(
            request.resolve().unwrap(),
            FormationSpec::Linear {
                height: LINEAR_DEFAULT_HEIGHT,
                x_coord: LINEAR_DEFAULT_X_COORD,
                length: 40.0,
            }
        );
    }

    // ---- Schedule ----

    #[test]
    fn test_schedule_parses_from_json() {
        let json = r#"[
            {"frame": 100, "event": {"type": "set_formation", "formation": {"kind": "linear"}}},
            {"frame": 100, "phase": "after_step", "event": {"type": "destroy", "units": [0, 1, 2]}},
            {"frame": 120, "phase": "before_step", "event": {"type": "assign_load", "unit": 7, "load": 0.25}}
        ]"#;
        let schedule: EventSchedule = serde_json::from_str(json).unwrap();

        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.events[0].phase, EventPhase::BeforeStep);
        assert_eq!(schedule.events[1].phase, EventPhase::AfterStep);
        assert_eq!(schedule.events_at(100).count(), 2);
        assert_eq!(schedule.events_at(101).count(), 0);
        assert_eq!(schedule.max_unit_index(), Some(7));
        assert_eq!(schedule.destruction_frames(), vec![100]);
    }

    #[test]
    fn test_schedule_builder_keeps_insertion_order() {
        let schedule = EventSchedule::new()
            .after_step(50, SwarmEvent::Destroy { units: vec![3] })
            .before_step(
                50,
                SwarmEvent::SetFormation {
                    formation: FormationRequest::new("circular"),
                },
            )
            .after_step(10, SwarmEvent::Destroy { units: vec![1] });

        let at_50: Vec<_> = schedule.events_at(50).collect();
        assert_eq!(at_50.len(), 2);
        assert!(matches!(at_50[0].event, SwarmEvent::Destroy { .. }));
        assert_eq!(schedule.destruction_frames(), vec![10, 50]);
    }

    #[test]
    fn test_empty_destroy_has_no_unit_index() {
        let event = SwarmEvent::Destroy { units: vec![] };
        assert_eq!(event.max_unit_index(), None);
    }

    // ---- Unit profile ----

    #[test]
    fn test_unit_profile_defaults() {
        let profile = UnitProfile::default();
        assert_eq!(profile.load_capacity, 0.5);
        assert_eq!(profile.acceleration, 1.0);
        assert_eq!(profile.battery_life, 60.0);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_unit_profile_partial_json_keeps_defaults() {
        let profile: UnitProfile = serde_json::from_str(r#"{"acceleration": 2.5}"#).unwrap();
        assert_eq!(profile.acceleration, 2.5);
        assert_eq!(profile.load_capacity, UNIT_LOAD_CAPACITY);
    }

    #[test]
    fn test_unit_profile_rejects_non_positive_acceleration() {
        let profile = UnitProfile {
            acceleration: 0.0,
            ..Default::default()
        };
        assert!(profile.validate().is_err());

        let profile = UnitProfile {
            load_capacity: -1.0,
            ..Default::default()
        };
        assert!(profile.validate().is_err());
    }

    // ---- Snapshot / types ----

    #[test]
    fn test_snapshot_counts() {
        let snapshot = SwarmSnapshot {
            frame: Some(3),
            formation: Some(FormationKind::Linear),
            units: vec![
                UnitView {
                    id: 0,
                    destroyed: true,
                    ..Default::default()
                },
                UnitView {
                    id: 1,
                    ..Default::default()
                },
                UnitView {
                    id: 2,
                    ..Default::default()
                },
            ],
        };
        assert_eq!(snapshot.alive_count(), 2);
        assert_eq!(snapshot.destroyed_count(), 1);
        assert_eq!(snapshot.unit(1).map(|u| u.id), Some(1));
        assert!(snapshot.unit(3).is_none());
    }

    #[test]
    fn test_snapshot_serializes_positions_as_arrays() {
        let snapshot = SwarmSnapshot {
            frame: None,
            formation: Some(FormationKind::Circular),
            units: vec![UnitView {
                id: 0,
                position: Vec3::new(1.0, 2.0, 3.0),
                ..Default::default()
            }],
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["formation"], "circular");
        assert_eq!(json["units"][0]["position"], serde_json::json!([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_grounded_only_touches_height() {
        let p = grounded(Vec3::new(4.0, 30.0, -2.0));
        assert_eq!(p, Vec3::new(4.0, GROUND_LEVEL, -2.0));
    }
}
