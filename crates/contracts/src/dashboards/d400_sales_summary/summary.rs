//! Агрегация дашборда продаж из сырых коллекций заказов,
//! фильмов и кинотеатров; бэкенд отдаёт только списки, все
//! производные ряды считаются на клиенте.
//!
//! Отменённые заказы исключаются из всех рядов.

use crate::domain::a001_movie::aggregate::Movie;
use crate::domain::a005_branch::aggregate::Branch;
use crate::domain::a008_order::aggregate::Order;
use chrono::Datelike;
use std::collections::HashMap;

/// Итоговые показатели за весь период
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTotals {
    pub revenue: f64,
    pub orders_count: u32,
    pub tickets_sold: u32,
}

pub fn sales_totals(orders: &[Order]) -> SalesTotals {
    let mut totals = SalesTotals::default();
    for order in counted(orders) {
        totals.revenue += order.total;
        totals.orders_count += 1;
        totals.tickets_sold += order.tickets_count();
    }
    totals
}

/// Выручка по месяцам: пары ("YYYY-MM", сумма), по возрастанию периода
pub fn revenue_by_month(orders: &[Order]) -> Vec<(String, f64)> {
    let mut buckets: HashMap<String, f64> = HashMap::new();
    for order in counted(orders) {
        let period = format!(
            "{:04}-{:02}",
            order.created_at.year(),
            order.created_at.month()
        );
        *buckets.entry(period).or_insert(0.0) += order.total;
    }

    let mut series: Vec<(String, f64)> = buckets.into_iter().collect();
    series.sort_by(|a, b| a.0.cmp(&b.0));
    series
}

/// Распределение проданных билетов по жанрам, по убыванию.
///
/// Жанры берутся из карточки фильма заказа; фильм с несколькими
/// жанрами учитывается в каждом. Заказ на неизвестный фильм
/// пропускается.
pub fn genre_distribution(orders: &[Order], movies: &[Movie]) -> Vec<(String, u32)> {
    let by_id: HashMap<i32, &Movie> = movies.iter().map(|m| (m.base.id, m)).collect();

    let mut buckets: HashMap<String, u32> = HashMap::new();
    for order in counted(orders) {
        let Some(movie) = by_id.get(&order.movie_id) else {
            continue;
        };
        for genre in &movie.genres {
            *buckets.entry(genre.name.clone()).or_insert(0) += order.tickets_count();
        }
    }

    let mut series: Vec<(String, u32)> = buckets.into_iter().collect();
    series.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    series
}

/// Выручка по кинотеатрам, по убыванию; неизвестный филиал — "?"
pub fn revenue_by_branch(orders: &[Order], branches: &[Branch]) -> Vec<(String, f64)> {
    let names: HashMap<i32, &str> = branches
        .iter()
        .map(|b| (b.base.id, b.base.name.as_str()))
        .collect();

    let mut buckets: HashMap<i32, f64> = HashMap::new();
    for order in counted(orders) {
        *buckets.entry(order.branch_id).or_insert(0.0) += order.total;
    }

    let mut series: Vec<(String, f64)> = buckets
        .into_iter()
        .map(|(branch_id, revenue)| {
            let name = names.get(&branch_id).copied().unwrap_or("?");
            (name.to_string(), revenue)
        })
        .collect();
    series.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    series
}

fn counted(orders: &[Order]) -> impl Iterator<Item = &Order> {
    orders
        .iter()
        .filter(|o| o.status.counts_towards_revenue())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_movie::aggregate::GenreRef;
    use crate::domain::common::BaseAggregate;
    use crate::enums::order_status::OrderStatus;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn order(
        id: i32,
        movie_id: i32,
        branch_id: i32,
        seats: usize,
        total: f64,
        month: u32,
        status: OrderStatus,
    ) -> Order {
        Order {
            id,
            client_ref: Uuid::nil(),
            user_id: 1,
            showtime_id: 1,
            movie_id,
            movie_name: format!("Фильм {}", movie_id),
            branch_id,
            seats: (0..seats).map(|i| format!("A{}", i + 1)).collect(),
            foods: vec![],
            total,
            status,
            created_at: Utc.with_ymd_and_hms(2024, month, 15, 18, 0, 0).unwrap(),
        }
    }

    fn movie(id: i32, genres: &[&str]) -> Movie {
        Movie {
            base: BaseAggregate::new(id, format!("Фильм {}", id)),
            release_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            year: 2024,
            duration_min: 120,
            genres: genres
                .iter()
                .enumerate()
                .map(|(i, name)| GenreRef {
                    id: i as i32 + 1,
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

    fn branch(id: i32, name: &str) -> Branch {
        Branch {
            base: BaseAggregate::new(id, name.to_string()),
            address: "ул. Ленина, 1".into(),
            city: "Москва".into(),
            phone: None,
            rooms: vec![],
        }
    }

    #[test]
    fn totals_exclude_cancelled() {
        let orders = vec![
            order(1, 1, 1, 2, 700.0, 1, OrderStatus::Paid),
            order(2, 1, 1, 1, 350.0, 1, OrderStatus::Pending),
            order(3, 1, 1, 4, 1400.0, 1, OrderStatus::Cancelled),
        ];

        let totals = sales_totals(&orders);

        assert_eq!(totals.orders_count, 2);
        assert_eq!(totals.tickets_sold, 3);
        assert_eq!(totals.revenue, 1050.0);
    }

    #[test]
    fn revenue_buckets_by_month_in_order() {
        let orders = vec![
            order(1, 1, 1, 1, 300.0, 3, OrderStatus::Paid),
            order(2, 1, 1, 1, 200.0, 1, OrderStatus::Paid),
            order(3, 1, 1, 1, 100.0, 3, OrderStatus::Paid),
        ];

        let series = revenue_by_month(&orders);

        assert_eq!(
            series,
            vec![("2024-01".to_string(), 200.0), ("2024-03".to_string(), 400.0)]
        );
    }

    #[test]
    fn genre_distribution_counts_tickets_per_genre() {
        let movies = vec![movie(1, &["Боевик", "Фантастика"]), movie(2, &["Драма"])];
        let orders = vec![
            order(1, 1, 1, 3, 900.0, 1, OrderStatus::Paid),
            order(2, 2, 1, 1, 300.0, 1, OrderStatus::Paid),
            // неизвестный фильм — пропускается
            order(3, 99, 1, 5, 1500.0, 1, OrderStatus::Paid),
        ];

        let series = genre_distribution(&orders, &movies);

        assert_eq!(
            series,
            vec![
                ("Боевик".to_string(), 3),
                ("Фантастика".to_string(), 3),
                ("Драма".to_string(), 1),
            ]
        );
    }

    #[test]
    fn branch_revenue_sorted_descending() {
        let branches = vec![branch(1, "Центральный"), branch(2, "Северный")];
        let orders = vec![
            order(1, 1, 1, 1, 300.0, 1, OrderStatus::Paid),
            order(2, 1, 2, 1, 900.0, 1, OrderStatus::Paid),
            order(3, 1, 7, 1, 100.0, 1, OrderStatus::Paid),
        ];

        let series = revenue_by_branch(&orders, &branches);

        assert_eq!(
            series,
            vec![
                ("Северный".to_string(), 900.0),
                ("Центральный".to_string(), 300.0),
                ("?".to_string(), 100.0),
            ]
        );
    }

    #[test]
    fn empty_collections_yield_empty_series() {
        assert_eq!(sales_totals(&[]), SalesTotals::default());
        assert!(revenue_by_month(&[]).is_empty());
        assert!(genre_distribution(&[], &[]).is_empty());
        assert!(revenue_by_branch(&[], &[]).is_empty());
    }
}
