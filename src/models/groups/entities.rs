use chrono::Weekday;
use serde::{Deserialize, Serialize};

// 上课日模式
//
// odd 对应周一/周三/周五，even 对应周二/周四/周六。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MeetingDays {
    Odd,
    Even,
}

impl MeetingDays {
    pub const ODD: &'static str = "odd";
    pub const EVEN: &'static str = "even";

    pub fn weekdays(&self) -> &'static [Weekday] {
        match self {
            MeetingDays::Odd => &[Weekday::Mon, Weekday::Wed, Weekday::Fri],
            MeetingDays::Even => &[Weekday::Tue, Weekday::Thu, Weekday::Sat],
        }
    }
}

impl<'de> Deserialize<'de> for MeetingDays {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            MeetingDays::ODD => Ok(MeetingDays::Odd),
            MeetingDays::EVEN => Ok(MeetingDays::Even),
            _ => Err(serde::de::Error::custom(format!(
                "无效的上课日模式: '{s}'. 支持的模式: odd, even"
            ))),
        }
    }
}

impl std::fmt::Display for MeetingDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeetingDays::Odd => write!(f, "{}", MeetingDays::ODD),
            MeetingDays::Even => write!(f, "{}", MeetingDays::EVEN),
        }
    }
}

impl std::str::FromStr for MeetingDays {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "odd" => Ok(MeetingDays::Odd),
            "even" => Ok(MeetingDays::Even),
            _ => Err(format!("Invalid meeting days pattern: {s}")),
        }
    }
}

// 班组实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub days: MeetingDays,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub lesson_start_time: chrono::NaiveTime,
    pub lesson_end_time: chrono::NaiveTime,
    pub is_active: bool,
    pub student_count: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_days_are_mon_wed_fri() {
        assert_eq!(
            MeetingDays::Odd.weekdays(),
            &[Weekday::Mon, Weekday::Wed, Weekday::Fri]
        );
    }

    #[test]
    fn test_even_days_are_tue_thu_sat() {
        assert_eq!(
            MeetingDays::Even.weekdays(),
            &[Weekday::Tue, Weekday::Thu, Weekday::Sat]
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_pattern() {
        let result: Result<MeetingDays, _> = serde_json::from_str("\"daily\"");
        assert!(result.is_err());
    }
}
