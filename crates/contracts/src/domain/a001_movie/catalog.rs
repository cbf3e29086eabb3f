//! Производное состояние афиши: разбиение на "Сейчас в кино" / "Скоро"
//! и составной фильтр каталога.
//!
//! Все функции чистые; текущий момент передаётся параметром, чтобы
//! классификация была детерминированной и тестируемой.

use super::aggregate::Movie;
use chrono::{DateTime, Duration, Utc};

/// Ширина окна "Сейчас в кино": релиз в ближайшие 7 дней уже в прокате
pub const SHOWING_WINDOW_DAYS: i64 = 7;

/// Результат классификации афиши
#[derive(Debug, Clone, Default)]
pub struct ShowingClassification {
    pub now_showing: Vec<Movie>,
    pub coming_soon: Vec<Movie>,
}

/// Разбить коллекцию фильмов на два раздела афиши.
///
/// Фильм попадает в "Сейчас в кино", если дата проката не позже
/// `now + 7 дней` (календарная арифметика от переданного момента,
/// граница включительно); иначе — в "Скоро". Порядок внутри разделов
/// повторяет порядок входа.
pub fn classify_by_showing_status(
    movies: &[Movie],
    now: DateTime<Utc>,
) -> ShowingClassification {
    let cutoff = (now + Duration::days(SHOWING_WINDOW_DAYS)).date_naive();

    let mut result = ShowingClassification::default();
    for movie in movies {
        if movie.release_date <= cutoff {
            result.now_showing.push(movie.clone());
        } else {
            result.coming_soon.push(movie.clone());
        }
    }
    result
}

/// Критерии поиска по каталогу.
///
/// Каждое поле — явная опция: `None` означает "ограничение не задано".
/// Пустая строка из формы не долетает сюда — парсинг на границе UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFilter {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genre_id: Option<i32>,
}

impl MovieFilter {
    /// Количество активных ограничений (для бейджа панели фильтров)
    pub fn active_count(&self) -> usize {
        [
            self.title.is_some(),
            self.year.is_some(),
            self.genre_id.is_some(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    /// Установить фильтр по названию из значения инпута
    pub fn set_title_from_input(&mut self, raw: &str) {
        let trimmed = raw.trim();
        self.title = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    /// Установить фильтр по году из значения инпута (не число — сброс)
    pub fn set_year_from_input(&mut self, raw: &str) {
        self.year = raw.trim().parse::<i32>().ok();
    }

    /// Установить фильтр по жанру из значения селекта ("" — сброс)
    pub fn set_genre_from_input(&mut self, raw: &str) {
        self.genre_id = raw.trim().parse::<i32>().ok();
    }
}

/// Отфильтровать каталог по критериям.
///
/// Активные предикаты соединяются через AND:
/// - название: регистронезависимое вхождение подстроки;
/// - год: точное равенство;
/// - жанр: наличие жанра с данным id (фильм без жанров не проходит).
///
/// Пустой фильтр возвращает вход без изменений; порядок результата
/// стабилен (никакой пересортировки).
pub fn filter_movies(movies: &[Movie], filter: &MovieFilter) -> Vec<Movie> {
    let title_lower = filter.title.as_ref().map(|t| t.to_lowercase());

    movies
        .iter()
        .filter(|movie| {
            if let Some(ref needle) = title_lower {
                if !movie.base.name.to_lowercase().contains(needle) {
                    return false;
                }
            }
            if let Some(year) = filter.year {
                if movie.year != year {
                    return false;
                }
            }
            if let Some(genre_id) = filter.genre_id {
                if !movie.has_genre(genre_id) {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_movie::aggregate::GenreRef;
    use crate::domain::common::BaseAggregate;
    use chrono::{NaiveDate, TimeZone};

    fn movie(id: i32, name: &str, release: &str, year: i32, genres: &[(i32, &str)]) -> Movie {
        Movie {
            base: BaseAggregate::new(id, name.to_string()),
            release_date: NaiveDate::parse_from_str(release, "%Y-%m-%d").unwrap(),
            year,
            duration_min: 120,
            genres: genres
                .iter()
                .map(|(id, name)| GenreRef {
                    id: *id,
                    name: (*name).to_string(),
                })
                .collect(),
            country: None,
            description: None,
            poster_url: None,
            trailer_url: None,
            age_rating: None,
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn classify_splits_by_seven_day_window() {
        let movies = vec![
            movie(1, "Уже в прокате", "2024-06-01", 2024, &[]),
            movie(2, "Релиз сегодня", "2024-06-10", 2024, &[]),
            movie(3, "Релиз через неделю", "2024-06-17", 2024, &[]),
            movie(4, "Релиз через месяц", "2024-07-10", 2024, &[]),
        ];

        let result = classify_by_showing_status(&movies, fixed_now());

        let now_ids: Vec<i32> = result.now_showing.iter().map(|m| m.base.id).collect();
        let soon_ids: Vec<i32> = result.coming_soon.iter().map(|m| m.base.id).collect();
        assert_eq!(now_ids, vec![1, 2, 3]);
        assert_eq!(soon_ids, vec![4]);
    }

    #[test]
    fn classify_cutoff_is_inclusive() {
        // now + 7 дней = 2024-06-17: релиз ровно на границе — уже в прокате
        let movies = vec![
            movie(1, "На границе", "2024-06-17", 2024, &[]),
            movie(2, "За границей", "2024-06-18", 2024, &[]),
        ];

        let result = classify_by_showing_status(&movies, fixed_now());

        assert_eq!(result.now_showing.len(), 1);
        assert_eq!(result.now_showing[0].base.id, 1);
        assert_eq!(result.coming_soon.len(), 1);
        assert_eq!(result.coming_soon[0].base.id, 2);
    }

    #[test]
    fn classify_empty_input() {
        let result = classify_by_showing_status(&[], fixed_now());
        assert!(result.now_showing.is_empty());
        assert!(result.coming_soon.is_empty());
    }

    #[test]
    fn empty_filter_returns_all_in_order() {
        let movies = vec![
            movie(3, "C", "2024-01-01", 2024, &[]),
            movie(1, "A", "2024-01-01", 2023, &[]),
            movie(2, "B", "2024-01-01", 2022, &[]),
        ];

        let result = filter_movies(&movies, &MovieFilter::default());

        let ids: Vec<i32> = result.iter().map(|m| m.base.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn title_filter_is_case_insensitive_substring() {
        let movies = vec![
            movie(1, "Star Wars", "2024-01-01", 2024, &[]),
            movie(2, "Warrior", "2024-01-01", 2024, &[]),
            movie(3, "Drama", "2024-01-01", 2024, &[]),
        ];
        let filter = MovieFilter {
            title: Some("War".to_string()),
            ..Default::default()
        };

        let result = filter_movies(&movies, &filter);

        let ids: Vec<i32> = result.iter().map(|m| m.base.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn year_filter_is_exact() {
        let movies = vec![
            movie(1, "A", "2024-01-01", 2023, &[]),
            movie(2, "B", "2024-01-01", 2024, &[]),
        ];
        let filter = MovieFilter {
            year: Some(2023),
            ..Default::default()
        };

        let result = filter_movies(&movies, &filter);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].base.id, 1);
    }

    #[test]
    fn genre_filter_matches_membership() {
        let movies = vec![
            movie(1, "A", "2024-01-01", 2024, &[(1, "Боевик"), (2, "Драма")]),
            movie(2, "B", "2024-01-01", 2024, &[(2, "Драма")]),
        ];
        let filter = MovieFilter {
            genre_id: Some(1),
            ..Default::default()
        };

        let result = filter_movies(&movies, &filter);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].base.id, 1);
    }

    #[test]
    fn genre_filter_fails_closed_without_genres() {
        let movies = vec![movie(1, "A", "2024-01-01", 2024, &[])];
        let filter = MovieFilter {
            genre_id: Some(1),
            ..Default::default()
        };

        assert!(filter_movies(&movies, &filter).is_empty());
    }

    #[test]
    fn active_predicates_combine_with_and() {
        let movies = vec![
            movie(1, "Star Wars", "2024-01-01", 2023, &[(1, "Фантастика")]),
            movie(2, "Star Trek", "2024-01-01", 2024, &[(1, "Фантастика")]),
        ];
        let filter = MovieFilter {
            title: Some("star".to_string()),
            year: Some(2024),
            genre_id: Some(1),
        };

        let result = filter_movies(&movies, &filter);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].base.id, 2);
    }

    #[test]
    fn filter_inputs_parse_at_the_edge() {
        let mut filter = MovieFilter::default();
        filter.set_title_from_input("  ");
        filter.set_year_from_input("2023");
        filter.set_genre_from_input("abc");

        assert_eq!(filter.title, None);
        assert_eq!(filter.year, Some(2023));
        assert_eq!(filter.genre_id, None);
        assert_eq!(filter.active_count(), 1);
    }
}
