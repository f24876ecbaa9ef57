use chrono::Weekday;

/// Etichetta portoghese usata nel foglio presenze per sabato e domenica.
pub fn weekend_label(weekday: Weekday) -> Option<&'static str> {
    match weekday {
        Weekday::Sat => Some("SÁBADO"),
        Weekday::Sun => Some("DOMINGO"),
        _ => None,
    }
}
