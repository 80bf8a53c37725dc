//! The static Fed Chair tenure table.
//!
//! This is configuration, not fetched data: it is passed explicitly into the
//! segmenter instead of being consulted as a process-wide global. The table
//! is contiguous (each tenure ends the day the next one starts) and only the
//! last tenure is open-ended.

use chrono::NaiveDate;

use crate::domain::ChairTenure;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("chair table dates are valid calendar dates")
}

fn chair(name: &str, start: NaiveDate, end: Option<NaiveDate>, color: (u8, u8, u8)) -> ChairTenure {
    ChairTenure {
        name: name.to_string(),
        start,
        end,
        color,
    }
}

/// Fed Chairs from Burns onward, colored with a qualitative palette.
pub fn default_chairs() -> Vec<ChairTenure> {
    vec![
        chair("Arthur Burns", ymd(1970, 2, 1), Some(ymd(1978, 3, 8)), (228, 26, 28)),
        chair("William Miller", ymd(1978, 3, 8), Some(ymd(1979, 8, 6)), (55, 126, 184)),
        chair("Paul Volcker", ymd(1979, 8, 6), Some(ymd(1987, 8, 11)), (77, 175, 74)),
        chair("Alan Greenspan", ymd(1987, 8, 11), Some(ymd(2006, 2, 1)), (152, 78, 163)),
        chair("Ben Bernanke", ymd(2006, 2, 1), Some(ymd(2014, 2, 3)), (255, 127, 0)),
        chair("Janet Yellen", ymd(2014, 2, 3), Some(ymd(2018, 2, 5)), (255, 255, 51)),
        chair("Jerome Powell", ymd(2018, 2, 5), None, (166, 86, 40)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_contiguous_with_open_ended_tail() {
        let chairs = default_chairs();
        assert!(!chairs.is_empty());

        for pair in chairs.windows(2) {
            assert_eq!(
                pair[0].end,
                Some(pair[1].start),
                "{} must end exactly where {} starts",
                pair[0].name,
                pair[1].name
            );
        }

        let last = chairs.last().unwrap();
        assert!(last.is_open_ended(), "the current chair has no end date");
        assert!(chairs[..chairs.len() - 1].iter().all(|c| !c.is_open_ended()));
    }

    #[test]
    fn table_passes_segmenter_validation() {
        assert!(crate::segment::validate_tenures(&default_chairs()).is_ok());
    }
}
