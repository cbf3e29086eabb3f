use crate::domain::common::{AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};

/// Зал кинотеатра с прямоугольной рассадкой
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CinemaRoom {
    pub id: i32,
    pub name: String,
    /// Количество рядов
    #[serde(rename = "seatRows")]
    pub seat_rows: i32,
    /// Мест в ряду
    #[serde(rename = "seatsPerRow")]
    pub seats_per_row: i32,
}

impl CinemaRoom {
    pub fn capacity(&self) -> i32 {
        self.seat_rows * self.seats_per_row
    }

    /// Метки мест по рядам: "A1".."A10", "B1".. и т.д.
    ///
    /// Ряды после 26-го на практике не встречаются, но метка
    /// деградирует в "R27-5" вместо паники.
    pub fn seat_labels(&self) -> Vec<Vec<String>> {
        (0..self.seat_rows)
            .map(|row| {
                let row_label = row_letter(row);
                (1..=self.seats_per_row)
                    .map(|seat| format!("{}{}", row_label, seat))
                    .collect()
            })
            .collect()
    }
}

fn row_letter(row: i32) -> String {
    if (0..26).contains(&row) {
        char::from(b'A' + row as u8).to_string()
    } else {
        format!("R{}-", row + 1)
    }
}

/// Кинотеатр сети (филиал)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    #[serde(flatten)]
    pub base: BaseAggregate<i32>,

    pub address: String,

    pub city: String,

    pub phone: Option<String>,

    #[serde(default)]
    pub rooms: Vec<CinemaRoom>,
}

impl Branch {
    pub fn room_by_id(&self, room_id: i32) -> Option<&CinemaRoom> {
        self.rooms.iter().find(|r| r.id == room_id)
    }
}

impl AggregateRoot for Branch {
    type Id = i32;

    fn id(&self) -> i32 {
        self.base.id
    }

    fn name(&self) -> &str {
        &self.base.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "branch"
    }

    fn element_name() -> &'static str {
        "Кинотеатр"
    }

    fn list_name() -> &'static str {
        "Кинотеатры"
    }
}

/// DTO для создания/обновления кинотеатра
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BranchDto {
    pub id: Option<i32>,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: Option<String>,
    pub rooms: Vec<CinemaRoomDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CinemaRoomDto {
    pub id: Option<i32>,
    pub name: String,
    #[serde(rename = "seatRows")]
    pub seat_rows: Option<i32>,
    #[serde(rename = "seatsPerRow")]
    pub seats_per_row: Option<i32>,
}

impl BranchDto {
    pub fn from_aggregate(b: &Branch) -> Self {
        Self {
            id: Some(b.base.id),
            name: b.base.name.clone(),
            address: b.address.clone(),
            city: b.city.clone(),
            phone: b.phone.clone(),
            rooms: b
                .rooms
                .iter()
                .map(|r| CinemaRoomDto {
                    id: Some(r.id),
                    name: r.name.clone(),
                    seat_rows: Some(r.seat_rows),
                    seats_per_row: Some(r.seats_per_row),
                })
                .collect(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название не может быть пустым".into());
        }
        if self.address.trim().is_empty() {
            return Err("Адрес не может быть пустым".into());
        }
        if self.city.trim().is_empty() {
            return Err("Город не может быть пустым".into());
        }
        for room in &self.rooms {
            if room.name.trim().is_empty() {
                return Err("У зала должно быть название".into());
            }
            let rows_ok = matches!(room.seat_rows, Some(r) if r > 0);
            let seats_ok = matches!(room.seats_per_row, Some(s) if s > 0);
            if !rows_ok || !seats_ok {
                return Err(format!("Рассадка зала '{}' указана неверно", room.name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_labels_follow_rows() {
        let room = CinemaRoom {
            id: 1,
            name: "Зал 1".into(),
            seat_rows: 2,
            seats_per_row: 3,
        };

        let labels = room.seat_labels();

        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0], vec!["A1", "A2", "A3"]);
        assert_eq!(labels[1], vec!["B1", "B2", "B3"]);
        assert_eq!(room.capacity(), 6);
    }
}
