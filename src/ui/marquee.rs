use crate::app::TICK_MILLIS;

const SEPARATOR: &str = " · ";

fn cycle(items: &[String]) -> Vec<char> {
    items
        .iter()
        .flat_map(|item| item.chars().chain(SEPARATOR.chars()))
        .collect()
}

/// Character offset after `ticks`, completing one cycle every `speed_secs` seconds.
pub fn marquee_offset(ticks: u64, cycle_len: usize, speed_secs: u32) -> usize {
    if cycle_len == 0 {
        return 0;
    }
    let ticks_per_cycle = (u64::from(speed_secs) * 1000 / TICK_MILLIS).max(1);
    let progress = ticks % ticks_per_cycle;
    (progress * cycle_len as u64 / ticks_per_cycle) as usize
}

/// `width` characters of the endlessly repeated item list, starting at `offset`.
pub fn marquee_window(items: &[String], offset: usize, width: usize) -> String {
    let cycle = cycle(items);
    if cycle.is_empty() {
        return " ".repeat(width);
    }
    let start = offset % cycle.len();
    cycle.iter().cycle().skip(start).take(width).collect()
}

pub fn marquee_line(items: &[String], ticks: u64, speed_secs: u32, width: usize) -> String {
    let cycle_len = cycle(items).len();
    marquee_window(items, marquee_offset(ticks, cycle_len, speed_secs), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<String> {
        vec!["Rust".to_string(), "Git".to_string()]
    }

    #[test]
    fn window_wraps_around_cycle() {
        // "Rust · Git · " is 13 characters
        assert_eq!(marquee_window(&items(), 0, 6), "Rust ·");
        assert_eq!(marquee_window(&items(), 7, 8), "Git · Ru");
        assert_eq!(marquee_window(&items(), 13, 4), "Rust");
        assert_eq!(marquee_window(&[], 3, 3), "   ");
    }

    #[test]
    fn offset_completes_one_cycle_per_speed() {
        // 15 seconds at 4 ticks per second
        assert_eq!(marquee_offset(0, 12, 15), 0);
        assert_eq!(marquee_offset(30, 12, 15), 6);
        assert_eq!(marquee_offset(60, 12, 15), 0);
        assert_eq!(marquee_offset(10, 0, 15), 0);
    }
}
