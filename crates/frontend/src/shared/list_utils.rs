/// Универсальные утилиты для работы со списками (сортировка, поиск)
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait для типов строк таблиц, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Сортирует список по указанному полю
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Индикатор направления сортировки для заголовка колонки
pub fn sort_indicator(active_field: &str, field: &str, ascending: bool) -> &'static str {
    if active_field != field {
        ""
    } else if ascending {
        "▲"
    } else {
        "▼"
    }
}

/// Компонент поиска с debounce и сбросом
#[component]
pub fn SearchInput(
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());
    let debounce =
        StoredValue::new_local(None::<gloo_timers::callback::Timeout>);

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Новый таймер отменяет предыдущий: drop таймера снимает колбэк
        let timeout = gloo_timers::callback::Timeout::new(300, move || {
            on_change.run(new_value.clone());
        });
        debounce.set_value(Some(timeout));
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=move |_| {
                        set_input_value.set(String::new());
                        on_change.run(String::new());
                    }
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: String,
        year: i32,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
                "year" => self.year.cmp(&other.year),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn sort_by_field_both_directions() {
        let mut rows = vec![
            Row { name: "b".into(), year: 2020 },
            Row { name: "A".into(), year: 2024 },
        ];

        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0].name, "A");

        sort_list(&mut rows, "year", false);
        assert_eq!(rows[0].year, 2024);
    }

    #[test]
    fn indicator_only_for_active_field() {
        assert_eq!(sort_indicator("name", "name", true), "▲");
        assert_eq!(sort_indicator("name", "name", false), "▼");
        assert_eq!(sort_indicator("name", "year", true), "");
    }
}
