use chrono::{DateTime, Utc};

/// Lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Convert an integer lamport amount to SOL.
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Unix seconds to a UTC timestamp. Out-of-range values yield `None`.
pub fn unix_to_datetime(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lamports_to_sol() {
        assert_eq!(lamports_to_sol(1_500_000_000), 1.5);
        assert_eq!(lamports_to_sol(0), 0.0);
    }

    #[test]
    fn test_unix_to_datetime() {
        let dt = unix_to_datetime(1_650_000_000).unwrap();
        assert_eq!(dt.to_rfc3339(), "2022-04-15T05:20:00+00:00");
        assert!(unix_to_datetime(i64::MAX).is_none());
    }
}
