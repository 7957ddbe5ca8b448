///////////////////////TESTS////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::cli::conditions::{
        CONDITION_KEYS, ParseOutcome, PendingConditions, parse_assignment,
    };

    #[test]
    fn test_parse_assignment_happy_path() {
        assert_eq!(
            parse_assignment("duration_min = 60"),
            ParseOutcome::Assigned {
                key: "duration_min".to_string(),
                value: 60.0
            }
        );
        // spacing around '=' is free-form
        assert_eq!(
            parse_assignment("  pH=7.5  "),
            ParseOutcome::Assigned {
                key: "pH".to_string(),
                value: 7.5
            }
        );
        // impossible values parse fine, the engine is the one that allows them
        assert_eq!(
            parse_assignment("reagent1_grams = -1"),
            ParseOutcome::Assigned {
                key: "reagent1_grams".to_string(),
                value: -1.0
            }
        );
    }

    #[test]
    fn test_parse_assignment_quit() {
        assert_eq!(parse_assignment("quit"), ParseOutcome::Quit);
        assert_eq!(parse_assignment("  QUIT "), ParseOutcome::Quit);
    }

    #[test]
    fn test_parse_assignment_retries() {
        assert!(matches!(
            parse_assignment("duration_min 60"),
            ParseOutcome::Retry(_)
        ));
        assert!(matches!(
            parse_assignment("pressure_atm = 2"),
            ParseOutcome::Retry(_)
        ));
        assert!(matches!(
            parse_assignment("pH = seven"),
            ParseOutcome::Retry(_)
        ));
    }

    #[test]
    fn test_pending_conditions_completion() {
        let mut pending = PendingConditions::default();
        assert!(!pending.is_complete());
        assert!(pending.build().is_none());
        for key in CONDITION_KEYS {
            assert!(pending.set(key, 1.0));
        }
        assert!(!pending.set("pressure_atm", 1.0));
        assert!(pending.is_complete());
        let conditions = pending.build().unwrap();
        assert_eq!(conditions.duration_min, 1.0);
        assert_eq!(conditions.ph, 1.0);
    }
}
