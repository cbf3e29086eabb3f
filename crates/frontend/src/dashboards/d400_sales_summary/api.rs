//! Дашборд строится из сырых коллекций: бэкенд не агрегирует,
//! все производные ряды считает contracts::dashboards.

use crate::shared::api_utils::get_json;
use contracts::domain::a001_movie::aggregate::Movie;
use contracts::domain::a005_branch::aggregate::Branch;
use contracts::domain::a008_order::aggregate::Order;

pub struct SalesSourceData {
    pub orders: Vec<Order>,
    pub movies: Vec<Movie>,
    pub branches: Vec<Branch>,
}

pub async fn fetch_source_data() -> Result<SalesSourceData, String> {
    let orders = get_json::<Vec<Order>>("/api/order").await?;
    let movies = get_json::<Vec<Movie>>("/api/movie").await?;
    let branches = get_json::<Vec<Branch>>("/api/branch").await?;
    Ok(SalesSourceData {
        orders,
        movies,
        branches,
    })
}
