#[cfg(test)]
mod tests {
    use timepicker::libs::error::ParseError;
    use timepicker::libs::relative::{format_relative, parse_relative, Clock, FixedClock};
    use timepicker::libs::time_of_day::TimeOfDay;

    fn time(hour: u32, minute: u32, second: u32) -> TimeOfDay {
        TimeOfDay::from_hms(hour, minute, second).unwrap()
    }

    #[test]
    fn test_format_now() {
        let now = time(12, 0, 0);
        assert_eq!(format_relative(now, now), "now");
        assert_eq!(format_relative(time(12, 0, 59), now), "now");
        assert_eq!(format_relative(time(11, 59, 1), now), "now");
    }

    #[test]
    fn test_format_minutes() {
        let now = time(12, 0, 0);
        assert_eq!(format_relative(time(12, 1, 0), now), "in 1 minute");
        assert_eq!(format_relative(time(12, 5, 0), now), "in 5 minutes");
        assert_eq!(format_relative(time(11, 59, 0), now), "1 minute ago");
        assert_eq!(format_relative(time(11, 1, 0), now), "59 minutes ago");
    }

    #[test]
    fn test_format_hours() {
        let now = time(12, 0, 0);
        assert_eq!(format_relative(time(13, 0, 0), now), "in 1 hour");
        assert_eq!(format_relative(time(15, 30, 0), now), "in 3 hours");
        assert_eq!(format_relative(time(9, 0, 0), now), "3 hours ago");
    }

    #[test]
    fn test_format_takes_shorter_way_around_midnight() {
        assert_eq!(format_relative(time(0, 10, 0), time(23, 50, 0)), "in 20 minutes");
        assert_eq!(format_relative(time(23, 0, 0), time(1, 0, 0)), "2 hours ago");
        assert_eq!(format_relative(time(18, 0, 0), time(6, 0, 0)), "12 hours ago");
        assert_eq!(format_relative(time(17, 0, 0), time(6, 0, 0)), "in 11 hours");
    }

    #[test]
    fn test_parse_phrases() {
        let now = time(12, 0, 0);
        assert_eq!(parse_relative("now", now).unwrap(), now);
        assert_eq!(parse_relative("in 30 seconds", now).unwrap(), time(12, 0, 30));
        assert_eq!(parse_relative("In 1 Minute", now).unwrap(), time(12, 1, 0));
        assert_eq!(parse_relative("  5 minutes ago ", now).unwrap(), time(11, 55, 0));
        assert_eq!(parse_relative("2 hours ago", now).unwrap(), time(10, 0, 0));
    }

    #[test]
    fn test_parse_wraps_around_midnight() {
        assert_eq!(parse_relative("1 hour ago", time(0, 30, 0)).unwrap(), time(23, 30, 0));
        assert_eq!(parse_relative("in 2 hours", time(23, 0, 0)).unwrap(), time(1, 0, 0));
    }

    #[test]
    fn test_parse_rejects_other_text() {
        let now = time(12, 0, 0);
        for input in ["soon", "in -5 minutes", "in five minutes", "5 days ago", "in 5", ""] {
            assert_eq!(parse_relative(input, now).unwrap_err(), ParseError::Relative(input.to_string()));
        }
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(time(8, 15, 0));
        assert_eq!(clock.now(), time(8, 15, 0));
    }
}
