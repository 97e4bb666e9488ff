//! Days and standard periods offered by the timetable page

pub const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Hour-long periods; there is no 1:00-2:00 period.
pub const TIME_SLOTS: [&str; 9] = [
    "8:00-9:00",
    "9:00-10:00",
    "10:00-11:00",
    "11:00-12:00",
    "12:00-1:00",
    "2:00-3:00",
    "3:00-4:00",
    "4:00-5:00",
    "5:00-6:00",
];

/// Splits `"9:00-10:00"` into its start and end times.
pub fn split_slot(slot: &str) -> Option<(&str, &str)> {
    let (start, end) = slot.split_once('-')?;
    let (start, end) = (start.trim(), end.trim());
    if start.is_empty() || end.is_empty() || end.contains('-') {
        return None;
    }
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_standard_slot_splits() {
        for slot in TIME_SLOTS {
            assert!(split_slot(slot).is_some(), "{slot}");
        }
        assert_eq!(split_slot("12:00-1:00"), Some(("12:00", "1:00")));
    }

    #[test]
    fn malformed_slots_do_not_split() {
        assert_eq!(split_slot("9:00"), None);
        assert_eq!(split_slot("-10:00"), None);
        assert_eq!(split_slot("9:00-"), None);
        assert_eq!(split_slot("9:00-10:00-11:00"), None);
    }
}
