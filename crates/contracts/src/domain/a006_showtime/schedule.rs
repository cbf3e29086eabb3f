//! Границы времени для формы сеанса и проверка пересечений расписания.
//!
//! Чистые функции; текущий момент всегда передаётся параметром.

use super::aggregate::Showtime;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// Технологический перерыв после сеанса: уборка и смена зала.
/// Бизнес-правило, а не запас "на всякий случай".
pub const TURNOVER_BUFFER_MIN: i64 = 60;

/// Формат значения `<input type="datetime-local">` (точность до минуты)
pub const PICKER_FMT: &str = "%Y-%m-%dT%H:%M";

/// Разобрать значение пикера; `None` для пустой или битой строки
pub fn parse_picker_value(raw: &str) -> Option<NaiveDateTime> {
    if raw.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, PICKER_FMT).ok()
}

/// Нижняя граница пикера: "сейчас", усечённое до минуты
pub fn min_start_bound(now: DateTime<Utc>) -> String {
    now.naive_utc().format(PICKER_FMT).to_string()
}

/// Время освобождения зала: начало + длительность фильма + перерыв.
///
/// Пустая или неразбираемая строка начала даёт пустую строку —
/// форма оставляет границу незаполненной.
pub fn end_bound(start_time: &str, duration_min: i32) -> String {
    let Some(start) = parse_picker_value(start_time) else {
        return String::new();
    };
    let end = start + Duration::minutes(i64::from(duration_min) + TURNOVER_BUFFER_MIN);
    end.format(PICKER_FMT).to_string()
}

/// Пересекается ли кандидат с существующим расписанием зала.
///
/// Проверяются только сеансы того же зала. Пересечение объявляется, если:
/// - начало кандидата попадает в `[start, end)` существующего сеанса, или
/// - конец кандидата попадает в `(start, end]`, или
/// - кандидат целиком накрывает существующий интервал.
///
/// Несимметричные границы сохранены намеренно: сеанс, начинающийся
/// ровно в момент окончания предыдущего, конфликтом не считается.
pub fn has_scheduling_conflict(
    existing: &[Showtime],
    room_id: i32,
    candidate_start: NaiveDateTime,
    candidate_end: NaiveDateTime,
) -> bool {
    existing
        .iter()
        .filter(|s| s.room_id == room_id)
        .any(|s| {
            let starts_inside = candidate_start >= s.start_time && candidate_start < s.end_time;
            let ends_inside = candidate_end > s.start_time && candidate_end <= s.end_time;
            let covers = candidate_start <= s.start_time && candidate_end >= s.end_time;
            starts_inside || ends_inside || covers
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(raw: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").unwrap()
    }

    fn showtime(room_id: i32, start: &str, end: &str) -> Showtime {
        Showtime {
            id: 1,
            movie_id: 1,
            branch_id: 1,
            room_id,
            start_time: t(start),
            end_time: t(end),
            price: 350.0,
        }
    }

    #[test]
    fn min_bound_truncates_to_minute() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 9, 59, 42).unwrap();
        assert_eq!(min_start_bound(now), "2024-01-01T09:59");
    }

    #[test]
    fn end_bound_adds_duration_and_turnover() {
        // 10:00 + 90 мин фильма + 60 мин перерыва = 12:30
        assert_eq!(end_bound("2024-01-01T10:00", 90), "2024-01-01T12:30");
    }

    #[test]
    fn end_bound_empty_for_bad_input() {
        assert_eq!(end_bound("", 90), "");
        assert_eq!(end_bound("вчера", 90), "");
    }

    #[test]
    fn conflict_when_candidate_starts_inside_existing() {
        let existing = vec![showtime(1, "2024-01-01T10:00", "2024-01-01T12:00")];
        assert!(has_scheduling_conflict(
            &existing,
            1,
            t("2024-01-01T11:00"),
            t("2024-01-01T13:00"),
        ));
    }

    #[test]
    fn no_conflict_back_to_back() {
        // Начало ровно в момент окончания существующего — стык, не пересечение
        let existing = vec![showtime(1, "2024-01-01T10:00", "2024-01-01T12:00")];
        assert!(!has_scheduling_conflict(
            &existing,
            1,
            t("2024-01-01T12:00"),
            t("2024-01-01T14:00"),
        ));
    }

    #[test]
    fn no_conflict_in_other_room() {
        let existing = vec![showtime(1, "2024-01-01T10:00", "2024-01-01T12:00")];
        assert!(!has_scheduling_conflict(
            &existing,
            2,
            t("2024-01-01T11:00"),
            t("2024-01-01T13:00"),
        ));
    }

    #[test]
    fn conflict_when_candidate_covers_existing() {
        let existing = vec![showtime(1, "2024-01-01T10:00", "2024-01-01T12:00")];
        assert!(has_scheduling_conflict(
            &existing,
            1,
            t("2024-01-01T09:00"),
            t("2024-01-01T13:00"),
        ));
    }

    #[test]
    fn conflict_when_candidate_ends_inside_existing() {
        let existing = vec![showtime(1, "2024-01-01T10:00", "2024-01-01T12:00")];
        assert!(has_scheduling_conflict(
            &existing,
            1,
            t("2024-01-01T09:00"),
            t("2024-01-01T10:30"),
        ));
    }

    #[test]
    fn no_conflict_on_empty_schedule() {
        assert!(!has_scheduling_conflict(
            &[],
            1,
            t("2024-01-01T10:00"),
            t("2024-01-01T12:00"),
        ));
    }
}
