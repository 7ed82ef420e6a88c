use crate::models::TenantStatus;

/// Soon-expired window: 60 days, in milliseconds.
pub const SOON_EXPIRED_WINDOW_MS: i64 = 1000 * 60 * 60 * 24 * 60;

/// Epoch milliseconds of a server date (RFC 3339 or plain YYYY-MM-DD).
pub fn parse_date_ms(date: &str) -> Option<i64> {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(date) {
        return Some(parsed.timestamp_millis());
    }
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc().timestamp_millis())
}

/// True when the subscription ends within the 60-day window (or already
/// ended). Presentational only; carries no server-side meaning.
pub fn is_soon_expired_at(end_ms: i64, now_ms: i64) -> bool {
    end_ms - now_ms <= SOON_EXPIRED_WINDOW_MS
}

pub fn is_soon_expired(date: &str) -> bool {
    match parse_date_ms(date) {
        Some(end_ms) => is_soon_expired_at(end_ms, chrono::Utc::now().timestamp_millis()),
        None => false,
    }
}

/// Visual emphasis of a tenant row.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RowEmphasis {
    Trial,
    ExpiringSoon,
    Normal,
}

impl RowEmphasis {
    /// Trial always outranks expiring-soon.
    pub fn evaluate_at(
        status: TenantStatus,
        end_subscription: Option<&str>,
        now_ms: i64,
    ) -> Self {
        if status == TenantStatus::Trial {
            return RowEmphasis::Trial;
        }
        let soon = end_subscription
            .and_then(parse_date_ms)
            .map(|end_ms| is_soon_expired_at(end_ms, now_ms))
            .unwrap_or(false);
        if soon {
            RowEmphasis::ExpiringSoon
        } else {
            RowEmphasis::Normal
        }
    }

    pub fn evaluate(status: TenantStatus, end_subscription: Option<&str>) -> Self {
        Self::evaluate_at(
            status,
            end_subscription,
            chrono::Utc::now().timestamp_millis(),
        )
    }

    pub fn row_class(&self) -> &'static str {
        match self {
            RowEmphasis::Trial => "row-trial",
            RowEmphasis::ExpiringSoon => "row-expiring",
            RowEmphasis::Normal => "row-normal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soon_expired_boundary_is_exactly_sixty_days() {
        let now = 1_700_000_000_000;
        assert_eq!(SOON_EXPIRED_WINDOW_MS, 5_184_000_000);
        assert!(is_soon_expired_at(now + SOON_EXPIRED_WINDOW_MS, now));
        assert!(!is_soon_expired_at(now + SOON_EXPIRED_WINDOW_MS + 1, now));
    }

    #[test]
    fn already_expired_counts_as_soon_expired() {
        let now = 1_700_000_000_000;
        assert!(is_soon_expired_at(now - 1, now));
    }

    #[test]
    fn unparseable_dates_are_never_soon_expired() {
        assert!(!is_soon_expired("not-a-date"));
    }

    #[test]
    fn trial_outranks_expiring_soon() {
        let now = parse_date_ms("2026-08-01").unwrap();
        // Ends within the window, but the trial treatment wins.
        assert_eq!(
            RowEmphasis::evaluate_at(TenantStatus::Trial, Some("2026-08-15"), now),
            RowEmphasis::Trial
        );
        assert_eq!(
            RowEmphasis::evaluate_at(TenantStatus::Active, Some("2026-08-15"), now),
            RowEmphasis::ExpiringSoon
        );
        assert_eq!(
            RowEmphasis::evaluate_at(TenantStatus::Active, Some("2027-08-15"), now),
            RowEmphasis::Normal
        );
        assert_eq!(
            RowEmphasis::evaluate_at(TenantStatus::Active, None, now),
            RowEmphasis::Normal
        );
    }

    #[test]
    fn parses_both_server_date_shapes() {
        assert!(parse_date_ms("2026-08-29T10:30:00.000Z").is_some());
        assert!(parse_date_ms("2026-08-29").is_some());
        assert!(parse_date_ms("").is_none());
    }
}
