#[cfg(test)]
mod common_tests {
    use crate::common::common::{format_uptime, parse_log_level, round_to};
    use crate::common::structs::custom_error::CustomError;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("info"), Some(log::LevelFilter::Info));
        assert_eq!(parse_log_level("off"), Some(log::LevelFilter::Off));
        assert_eq!(parse_log_level("verbose"), None);
        assert_eq!(parse_log_level("INFO"), None);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(98.7654, 2), 98.77);
        assert_eq!(round_to(0.123456, 3), 0.123);
        assert_eq!(round_to(110.0, 2), 110.0);
        assert_eq!(round_to(0.0, 2), 0.0);
    }

    #[test]
    fn test_round_to_ties_on_exact_binary_value() {
        assert_eq!(round_to((1.0 + 1.25) / 2.0, 2), 1.12);
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert!(round_to(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "0d 0h 0m 0s");
        assert_eq!(format_uptime(59), "0d 0h 0m 59s");
        assert_eq!(format_uptime(90061), "1d 1h 1m 1s");
        assert_eq!(format_uptime(-5), "0d 0h 0m 0s");
    }

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("could not create config.toml file");
        assert_eq!(format!("{}", error), "could not create config.toml file");
    }
}
