#[cfg(test)]
mod tests {
    use timepicker::libs::codec::{CanonicalCodec, SourcePattern};
    use timepicker::libs::error::ConfigRejected;
    use timepicker::libs::step_list::{generate, generate_for, Step, TimeListEntry, TimeValues, STEP_VALUES};

    #[test]
    fn test_quarter_hour_list() {
        let entries = generate_for(15).unwrap();
        assert_eq!(entries.len(), 96);
        assert_eq!(entries[0], TimeListEntry { key: 0, value: "000000".to_string() });
        assert_eq!(entries[1].value, "001500");
        assert_eq!(entries[95], TimeListEntry { key: 95, value: "234500".to_string() });
    }

    #[test]
    fn test_hourly_list() {
        let entries = generate_for(60).unwrap();
        assert_eq!(entries.len(), 24);
        assert_eq!(entries[17].value, "170000");
    }

    #[test]
    fn test_zero_step_gives_empty_list() {
        assert!(generate_for(0).unwrap().is_empty());
        assert!(generate(Step::NONE).is_empty());
    }

    #[test]
    fn test_unsupported_steps_rejected() {
        for step in [7, 8, 9, 11, 25, 45, 90] {
            assert_eq!(generate_for(step).unwrap_err(), ConfigRejected::Step(step));
        }
    }

    #[test]
    fn test_every_supported_step() {
        for minutes in STEP_VALUES {
            let step = Step::try_from(minutes).unwrap();
            let entries = generate(step);
            assert_eq!(entries.len(), step.len(), "step {}", minutes);
            assert!(entries.iter().enumerate().all(|(index, entry)| entry.key == index));
            assert!(entries.windows(2).all(|pair| pair[0].value < pair[1].value));
        }
    }

    #[test]
    fn test_step_serde_validates() {
        assert_eq!(serde_json::from_str::<Step>("30").unwrap(), Step::try_from(30).unwrap());
        assert!(serde_json::from_str::<Step>("7").is_err());
        assert_eq!(serde_json::to_string(&Step::try_from(15).unwrap()).unwrap(), "15");
    }

    #[test]
    fn test_time_values_entries() {
        let json = r#"{
            "timeValues": [
                { "key": "a", "text": "083000" },
                { "key": "b", "text": "250000" },
                { "key": "c", "text": "120000" },
                { "key": "d", "text": "083000" },
                { "text": "173000" }
            ]
        }"#;
        let values = TimeValues::from_json(json).unwrap();
        assert_eq!(values.time_values.len(), 5);
        assert_eq!(values.time_values[4].key, "");

        let entries = values.entries(&CanonicalCodec::new(SourcePattern::HourMinuteSecond));
        let expected: Vec<TimeListEntry> = ["083000", "120000", "173000"]
            .iter()
            .enumerate()
            .map(|(key, value)| TimeListEntry { key, value: value.to_string() })
            .collect();
        assert_eq!(entries, expected);
    }

    #[test]
    fn test_time_values_use_source_pattern() {
        let json = r#"{"timeValues": [{"key": "1", "text": "0830"}, {"key": "2", "text": "083000"}]}"#;
        let values = TimeValues::from_json(json).unwrap();

        let entries = values.entries(&CanonicalCodec::new(SourcePattern::HourMinute));
        assert_eq!(entries, vec![TimeListEntry { key: 0, value: "083000".to_string() }]);
    }

    #[test]
    fn test_time_values_malformed_document() {
        assert!(TimeValues::from_json(r#"{"values": []}"#).is_err());
        assert!(TimeValues::from_json("not json").is_err());
    }
}
