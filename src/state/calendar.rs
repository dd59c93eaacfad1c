//! Cursor state for the deadline date picker

use super::DEADLINE_FORMAT;
use chrono::{Datelike, Days, Months, NaiveDate};

/// Column headers for the month grid, Sunday first
pub const DAY_NAMES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Cursor over a month grid. The visible month is the cursor's month;
/// moving the cursor across a month boundary scrolls the grid. The
/// cursor never enters days before `today`, matching the validation
/// rule that a deadline cannot be in the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    cursor: NaiveDate,
    today: NaiveDate,
}

impl CalendarState {
    /// Open the picker on the currently entered deadline, or on today
    /// when the field is empty, not a date, or already past
    pub fn open(deadline: &str, today: NaiveDate) -> Self {
        let cursor = NaiveDate::parse_from_str(deadline.trim(), DEADLINE_FORMAT)
            .map(|d| d.max(today))
            .unwrap_or(today);
        Self { cursor, today }
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    /// First selectable day; earlier cells render dimmed
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Cursor date in the form's wire format
    pub fn formatted(&self) -> String {
        self.cursor.format(DEADLINE_FORMAT).to_string()
    }

    /// Heading for the visible month, e.g. "June 2024"
    pub fn month_label(&self) -> String {
        self.cursor.format("%B %Y").to_string()
    }

    pub fn next_day(&mut self) {
        self.step(|d| d.checked_add_days(Days::new(1)));
    }

    pub fn prev_day(&mut self) {
        self.step(|d| d.checked_sub_days(Days::new(1)));
    }

    pub fn next_week(&mut self) {
        self.step(|d| d.checked_add_days(Days::new(7)));
    }

    pub fn prev_week(&mut self) {
        self.step(|d| d.checked_sub_days(Days::new(7)));
    }

    pub fn next_month(&mut self) {
        self.step(|d| d.checked_add_months(Months::new(1)));
    }

    pub fn prev_month(&mut self) {
        self.step(|d| d.checked_sub_months(Months::new(1)));
    }

    // Stays put when the move would land before today or outside
    // chrono's representable range.
    fn step(&mut self, f: impl FnOnce(NaiveDate) -> Option<NaiveDate>) {
        if let Some(next) = f(self.cursor) {
            if next >= self.today {
                self.cursor = next;
            }
        }
    }

    /// The visible month as rows of seven cells, Sunday first; leading
    /// and trailing cells outside the month are `None`
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let first = self.first_of_month();
        let lead = first.weekday().num_days_from_sunday() as usize;
        let mut weeks = Vec::with_capacity(6);
        let mut week = [None; 7];
        let mut col = lead;
        for day in 1..=self.days_in_month() {
            week[col] = first.with_day(day);
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(week);
        }
        weeks
    }

    fn first_of_month(&self) -> NaiveDate {
        self.cursor.with_day(1).unwrap_or(self.cursor)
    }

    fn days_in_month(&self) -> u32 {
        self.first_of_month()
            .checked_add_months(Months::new(1))
            .and_then(|next| next.checked_sub_days(Days::new(1)))
            .map(|last| last.day())
            .unwrap_or(31)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_open_parses_existing_deadline() {
        let cal = CalendarState::open("2024-06-20", date(2024, 1, 1));
        assert_eq!(cal.cursor(), date(2024, 6, 20));
    }

    #[test]
    fn test_open_falls_back_to_today() {
        let today = date(2024, 6, 15);
        assert_eq!(CalendarState::open("", today).cursor(), today);
        assert_eq!(CalendarState::open("junk", today).cursor(), today);
    }

    #[test]
    fn test_open_clamps_past_deadline_to_today() {
        let today = date(2024, 6, 15);
        assert_eq!(CalendarState::open("2024-06-01", today).cursor(), today);
    }

    #[test]
    fn test_formatted_round_trips() {
        let cal = CalendarState::open("", date(2024, 6, 5));
        assert_eq!(cal.formatted(), "2024-06-05");
    }

    #[test]
    fn test_day_steps_cross_month_boundaries() {
        let mut cal = CalendarState::open("2024-06-30", date(2024, 6, 1));
        cal.next_day();
        assert_eq!(cal.cursor(), date(2024, 7, 1));
        cal.prev_day();
        assert_eq!(cal.cursor(), date(2024, 6, 30));
    }

    #[test]
    fn test_week_steps() {
        let mut cal = CalendarState::open("2024-06-15", date(2024, 6, 1));
        cal.next_week();
        assert_eq!(cal.cursor(), date(2024, 6, 22));
        cal.prev_week();
        cal.prev_week();
        assert_eq!(cal.cursor(), date(2024, 6, 8));
    }

    #[test]
    fn test_month_step_clamps_day() {
        let mut cal = CalendarState::open("2024-01-31", date(2024, 1, 1));
        cal.next_month();
        assert_eq!(cal.cursor(), date(2024, 2, 29));
        cal.prev_month();
        assert_eq!(cal.cursor(), date(2024, 1, 29));
    }

    #[test]
    fn test_cursor_never_moves_before_today() {
        let today = date(2024, 6, 15);
        let mut cal = CalendarState::open("", today);
        cal.prev_day();
        cal.prev_week();
        cal.prev_month();
        assert_eq!(cal.cursor(), today);

        // One step into the future unlocks exactly that much room.
        cal.next_day();
        cal.prev_day();
        assert_eq!(cal.cursor(), today);
    }

    #[test]
    fn test_month_label() {
        let cal = CalendarState::open("", date(2024, 6, 15));
        assert_eq!(cal.month_label(), "June 2024");
    }

    #[test]
    fn test_weeks_grid_june_2024() {
        // June 2024 starts on a Saturday and has 30 days.
        let cal = CalendarState::open("", date(2024, 6, 15));
        let weeks = cal.weeks();
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0][6], Some(date(2024, 6, 1)));
        assert!(weeks[0][..6].iter().all(Option::is_none));
        assert_eq!(weeks[5][0], Some(date(2024, 6, 30)));
        assert!(weeks[5][1..].iter().all(Option::is_none));
    }

    #[test]
    fn test_weeks_grid_leap_february() {
        let cal = CalendarState::open("", date(2024, 2, 10));
        let weeks = cal.weeks();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][4], Some(date(2024, 2, 1)));
        assert_eq!(weeks[4][4], Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_every_day_appears_once() {
        let cal = CalendarState::open("", date(2024, 6, 15));
        let days: Vec<_> = cal.weeks().into_iter().flatten().flatten().collect();
        assert_eq!(days.len(), 30);
        assert_eq!(days.first(), Some(&date(2024, 6, 1)));
        assert_eq!(days.last(), Some(&date(2024, 6, 30)));
    }
}
