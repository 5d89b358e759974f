use greybridge_story::{Clock, LocalStamp};

/// Wall clock backed by the browser's `Date`, local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> LocalStamp {
        let now = js_sys::Date::new_0();
        LocalStamp::new(
            now.get_full_year() as i32,
            (now.get_month() + 1) as u8,
            now.get_date() as u8,
            now.get_hours() as u8,
            now.get_minutes() as u8,
        )
    }
}
