use std::fmt;

use chrono::{Local, Timelike};

// time-of-day greeting shown as the home heading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    pub fn for_hour(hour: u32) -> Self {
        if hour >= 17 {
            Greeting::Evening
        } else if hour >= 12 {
            Greeting::Afternoon
        } else {
            Greeting::Morning
        }
    }

    // browser-local wall clock
    pub fn current_hour() -> u32 {
        Local::now().hour()
    }

    pub fn message(&self) -> &'static str {
        match self {
            Greeting::Morning => "Good morning",
            Greeting::Afternoon => "Good afternoon",
            Greeting::Evening => "Good evening",
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_the_day() {
        for hour in 0..24 {
            let expected = if hour >= 17 {
                "Good evening"
            } else if hour >= 12 {
                "Good afternoon"
            } else {
                "Good morning"
            };
            assert_eq!(Greeting::for_hour(hour).message(), expected, "hour {hour}");
        }
    }

    #[test]
    fn boundaries() {
        assert_eq!(Greeting::for_hour(11), Greeting::Morning);
        assert_eq!(Greeting::for_hour(12), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(16), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(17), Greeting::Evening);
        assert_eq!(Greeting::for_hour(99), Greeting::Evening);
    }

    #[test]
    fn display_matches_message() {
        assert_eq!(Greeting::Afternoon.to_string(), "Good afternoon");
    }
}
