pub mod manifest;
pub mod placeholder;
pub mod scanner;

pub use scanner::scan;

/// Human-friendly label for an entry name: "weather-app" -> "Weather App"
pub fn display_name(app_name: &str) -> String {
    app_name
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
