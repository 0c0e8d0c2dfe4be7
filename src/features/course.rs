//! Free beginner course outline. Static display data; lesson content itself is
//! not served by the backend.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub number: u8,
    pub title: &'static str,
    pub minutes: u16,
    pub topics: &'static [&'static str],
}

impl Lesson {
    pub fn duration_label(&self) -> String {
        format!("{} min", self.minutes)
    }
}

pub const LESSONS: [Lesson; 5] = [
    Lesson {
        number: 1,
        title: "Introduction to Trading Markets",
        minutes: 15,
        topics: &["Market basics", "Different asset classes", "Trading vs Investing"],
    },
    Lesson {
        number: 2,
        title: "Understanding Charts and Timeframes",
        minutes: 20,
        topics: &["Candlestick patterns", "Support and resistance", "Trend identification"],
    },
    Lesson {
        number: 3,
        title: "Risk Management Fundamentals",
        minutes: 18,
        topics: &["Position sizing", "Stop losses", "Risk/reward ratios"],
    },
    Lesson {
        number: 4,
        title: "Trading Psychology Basics",
        minutes: 12,
        topics: &["Emotional control", "Discipline", "Common beginner mistakes"],
    },
    Lesson {
        number: 5,
        title: "Creating Your First Trading Plan",
        minutes: 25,
        topics: &["Setting goals", "Strategy development", "Journaling"],
    },
];

/// Total running time of the course in minutes.
pub fn total_minutes() -> u16 {
    LESSONS.iter().map(|lesson| lesson.minutes).sum()
}
