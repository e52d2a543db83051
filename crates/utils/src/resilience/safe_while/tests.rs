//! Behaviour tests for the retry gate.

#[cfg(test)]
mod gate_tests {
    use super::super::{GateState, NoopSleeper, SafeWhile, SafeWhileConfig};
    use contextutil_core::{Error, Result};
    use std::time::Duration;

    fn recording_gate(
        config: SafeWhileConfig,
        naps: &mut Vec<Duration>,
    ) -> SafeWhile<impl FnMut(Duration) + '_> {
        SafeWhile::with_sleeper(config, move |d: Duration| naps.push(d)).unwrap()
    }

    #[test]
    fn test_backoff_then_exhaustion() {
        let mut naps = Vec::new();
        let config = SafeWhileConfig::default()
            .with_sleep(1.0)
            .with_increment(1.0)
            .with_tries(3);
        let mut gate = recording_gate(config, &mut naps);

        for _ in 0..3 {
            gate.invoke().unwrap();
        }
        assert_eq!(gate.state(), GateState::Active);

        let error = gate.invoke().unwrap_err();
        assert_eq!(gate.state(), GateState::Exhausted);
        assert_eq!(gate.counter(), 4);
        match &error {
            Error::MaxTriesExceeded {
                action,
                tries,
                total_wait,
                elapsed_wait,
            } => {
                assert_eq!(*action, None);
                assert_eq!(*tries, 3);
                assert_eq!(*total_wait, 6.0);
                assert_eq!(*elapsed_wait, 6.0);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            error.to_string(),
            "reached maximum tries (3) after waiting for 6 seconds"
        );

        drop(gate);
        assert_eq!(
            naps,
            [
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(3)
            ]
        );
    }

    #[test]
    fn test_zero_tries_fails_before_sleeping() {
        let mut naps = Vec::new();
        let mut gate = recording_gate(SafeWhileConfig::default().with_tries(0), &mut naps);

        let error = gate.invoke().unwrap_err();
        assert!(error.is_max_tries_exceeded());
        assert_eq!(
            error.to_string(),
            "reached maximum tries (0) after waiting for 0 seconds"
        );

        drop(gate);
        assert!(naps.is_empty());
    }

    #[test]
    fn test_unused_gate_has_no_side_effects() {
        let mut naps = Vec::new();
        let gate = recording_gate(SafeWhileConfig::default(), &mut naps);
        assert_eq!(gate.counter(), 0);
        assert_eq!(gate.current_sleep(), Duration::from_secs(6));
        assert_eq!(gate.state(), GateState::Active);

        drop(gate);
        assert!(naps.is_empty());
    }

    #[test]
    fn test_total_reports_full_budget_not_elapsed() {
        let config = SafeWhileConfig::default()
            .with_sleep(2.0)
            .with_tries(4)
            .with_action("wait for osd");
        let mut gate = SafeWhile::with_sleeper(config, NoopSleeper).unwrap();

        // Elapsed wait grows with each try, but the message keeps the full budget
        for _ in 0..4 {
            gate.invoke().unwrap();
        }
        assert_eq!(gate.elapsed_wait(), 8.0);

        let error = gate.invoke().unwrap_err();
        assert_eq!(
            error.to_string(),
            "'wait for osd' reached maximum tries (4) after waiting for 8 seconds"
        );
        assert_eq!(gate.total_budget(), 8.0);
    }

    #[test]
    fn test_empty_action_message_has_no_label() {
        for config in [
            SafeWhileConfig::default().with_tries(0).with_action(""),
            SafeWhileConfig::from_json(r#"{"action": "", "tries": 0}"#).unwrap(),
        ] {
            let mut gate = SafeWhile::with_sleeper(config, NoopSleeper).unwrap();
            assert_eq!(
                gate.invoke().unwrap_err().to_string(),
                "reached maximum tries (0) after waiting for 0 seconds"
            );
        }
    }

    #[test]
    fn test_exhausted_gate_keeps_failing() {
        let mut gate =
            SafeWhile::with_sleeper(SafeWhileConfig::default().with_tries(1), NoopSleeper)
                .unwrap();
        gate.invoke().unwrap();
        assert!(gate.invoke().is_err());
        assert!(gate.invoke().is_err());
        assert_eq!(gate.counter(), 3);
    }

    #[test]
    fn test_negative_increment_bottoms_out_at_zero() {
        let mut naps = Vec::new();
        let config = SafeWhileConfig::default()
            .with_sleep(1.0)
            .with_increment(-0.5)
            .with_tries(4);
        let mut gate = recording_gate(config, &mut naps);
        for _ in 0..4 {
            gate.invoke().unwrap();
        }
        drop(gate);

        assert_eq!(
            naps,
            [
                Duration::from_secs(1),
                Duration::from_millis(500),
                Duration::ZERO,
                Duration::ZERO
            ]
        );
    }

    #[test]
    fn test_run_passes_errors_through() {
        let mut passes = 0;
        let error = SafeWhile::with_sleeper(SafeWhileConfig::default().with_tries(2), NoopSleeper)
            .unwrap()
            .run(|gate| -> Result<()> {
                loop {
                    gate.invoke()?;
                    passes += 1;
                }
            })
            .unwrap_err();

        assert!(error.is_max_tries_exceeded());
        assert_eq!(passes, 2);
    }

    #[test]
    fn test_run_returns_body_value() {
        let value = SafeWhile::with_sleeper(SafeWhileConfig::default(), NoopSleeper)
            .unwrap()
            .run(|gate| {
                gate.invoke()?;
                Ok(gate.counter())
            })
            .unwrap();
        assert_eq!(value, 1);
    }

    #[test]
    fn test_run_does_not_swallow_body_errors() {
        let error = SafeWhile::with_sleeper(SafeWhileConfig::default(), NoopSleeper)
            .unwrap()
            .run(|_| -> Result<()> { Err(Error::block("mgr module failed to load")) })
            .unwrap_err();
        assert!(matches!(error, Error::Block { .. }));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SafeWhileConfig::default().with_sleep(f64::NAN);
        assert!(matches!(
            SafeWhile::new(config),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_default_gate() {
        let gate = SafeWhile::default();
        assert_eq!(gate.config(), &SafeWhileConfig::default());
        assert_eq!(gate.total_budget(), 60.0);
    }
}
