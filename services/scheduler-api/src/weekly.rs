use autosched_zoom_connector::{MeetingSettings, ZoomMeetingRequest};
use chrono::{DateTime, Datelike, Duration, NaiveDateTime, NaiveTime, Utc};

use crate::config::WeeklyMeetingConfig;

const SLOT_WEEKDAY_FROM_MONDAY: i64 = 4; // Friday
const SLOT_MINUTES_AFTER_MIDNIGHT: i64 = 17 * 60 + 5;

/// Friday 17:05 UTC of the current week, counting from `now`.
///
/// On a Friday this is the same day even when 17:05 has already passed.
pub fn next_meeting_time(now: DateTime<Utc>) -> NaiveDateTime {
    let weekday = i64::from(now.weekday().num_days_from_monday());
    let days_ahead = (SLOT_WEEKDAY_FROM_MONDAY - weekday).rem_euclid(7);
    let date = now.date_naive() + Duration::days(days_ahead);
    let slot = NaiveTime::default() + Duration::minutes(SLOT_MINUTES_AFTER_MIDNIGHT);
    date.and_time(slot)
}

/// ISO-8601 without offset or fractional seconds, e.g. `2024-05-10T17:05:00`.
pub fn format_start_time(time: NaiveDateTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub fn weekly_meeting_request(
    config: &WeeklyMeetingConfig,
    start: NaiveDateTime,
) -> ZoomMeetingRequest {
    ZoomMeetingRequest::scheduled(config.topic.clone(), format_start_time(start), config.duration)
        .with_agenda(config.agenda.clone())
        .with_password(config.password.clone())
        .with_settings(MeetingSettings::webinar())
}
