//! Easter Monday lookup for the Western and Orthodox traditions.
//!
//! Movable feasts (Good Friday, Easter Monday, Ascension, Whit Monday,
//! Corpus Christi, Carnival) are all fixed offsets from Easter, so calendars
//! only need the day of year of Easter Monday.  Years 1901–2199, the span
//! of valid [`Date`](crate::date::Date)s, come from precomputed tables; any
//! other year (in practice the null date's 1899) is computed on the fly.

use crate::date::is_leap_year;
use crate::weekday::Weekday;

const FIRST_YEAR: u16 = 1901;
const LAST_YEAR: u16 = 2199;

/// Day of year of Western Easter Monday, 1901–2199.
static WESTERN_EASTER_MONDAY: [u16; 299] = [
     98,  90, 103,  95, 114, 106,  91, 111, 102,  87,  // 1901-1910
    107,  99,  83, 103,  95, 115,  99,  91, 111,  96,  // 1911-1920
     87, 107,  92, 112, 103,  95, 108, 100,  91, 111,  // 1921-1930
     96,  88, 107,  92, 112, 104,  88, 108, 100,  85,  // 1931-1940
    104,  96, 116, 101,  92, 112,  97,  89, 108, 100,  // 1941-1950
     85, 105,  96, 109, 101,  93, 112,  97,  89, 109,  // 1951-1960
     93, 113, 105,  90, 109, 101,  86, 106,  97,  89,  // 1961-1970
    102,  94, 113, 105,  90, 110, 101,  86, 106,  98,  // 1971-1980
    110, 102,  94, 114,  98,  90, 110,  95,  86, 106,  // 1981-1990
     91, 111, 102,  94, 107,  99,  90, 103,  95, 115,  // 1991-2000
    106,  91, 111, 103,  87, 107,  99,  84, 103,  95,  // 2001-2010
    115, 100,  91, 111,  96,  88, 107,  92, 112, 104,  // 2011-2020
     95, 108, 100,  92, 111,  96,  88, 108,  92, 112,  // 2021-2030
    104,  89, 108, 100,  85, 105,  96, 116, 101,  93,  // 2031-2040
    112,  97,  89, 109, 100,  85, 105,  97, 109, 101,  // 2041-2050
     93, 113,  97,  89, 109,  94, 113, 105,  90, 110,  // 2051-2060
    101,  86, 106,  98,  89, 102,  94, 114, 105,  90,  // 2061-2070
    110, 102,  86, 106,  98, 111, 102,  94, 114,  99,  // 2071-2080
     90, 110,  95,  87, 106,  91, 111, 103,  94, 107,  // 2081-2090
     99,  91, 103,  95, 115, 107,  91, 111, 103,  88,  // 2091-2100
    108, 100,  85, 105,  96, 109, 101,  93, 112,  97,  // 2101-2110
     89, 109,  93, 113, 105,  90, 109, 101,  86, 106,  // 2111-2120
     97,  89, 102,  94, 113, 105,  90, 110, 101,  86,  // 2121-2130
    106,  98, 110, 102,  94, 114,  98,  90, 110,  95,  // 2131-2140
     86, 106,  91, 111, 102,  94, 107,  99,  90, 103,  // 2141-2150
     95, 115, 106,  91, 111, 103,  87, 107,  99,  84,  // 2151-2160
    103,  95, 115, 100,  91, 111,  96,  88, 107,  92,  // 2161-2170
    112, 104,  95, 108, 100,  92, 111,  96,  88, 108,  // 2171-2180
     92, 112, 104,  89, 108, 100,  85, 105,  96, 116,  // 2181-2190
    101,  93, 112,  97,  89, 109, 100,  85, 105,  // 2191-2199
];

/// Day of year of Orthodox Easter Monday, 1901–2199.
static ORTHODOX_EASTER_MONDAY: [u16; 299] = [
    105, 118, 110, 102, 121, 106, 126, 118, 102, 122,  // 1901-1910
    114,  99, 118, 110,  95, 115, 106, 126, 111, 103,  // 1911-1920
    122, 107,  99, 119, 110, 123, 115, 107, 126, 111,  // 1921-1930
    103, 123, 107,  99, 119, 104, 123, 115, 100, 120,  // 1931-1940
    111,  96, 116, 108, 127, 112, 104, 124, 115, 100,  // 1941-1950
    120, 112,  96, 116, 108, 128, 112, 104, 124, 109,  // 1951-1960
    100, 120, 105, 125, 116, 101, 121, 113, 104, 117,  // 1961-1970
    109, 101, 120, 105, 125, 117, 101, 121, 113,  98,  // 1971-1980
    117, 109, 129, 114, 105, 125, 110, 102, 121, 106,  // 1981-1990
     98, 118, 109, 122, 114, 106, 118, 110, 102, 122,  // 1991-2000
    106, 126, 118, 103, 122, 114,  99, 119, 110,  95,  // 2001-2010
    115, 107, 126, 111, 103, 123, 107,  99, 119, 111,  // 2011-2020
    123, 115, 107, 127, 111, 103, 123, 108,  99, 119,  // 2021-2030
    104, 124, 115, 100, 120, 112,  96, 116, 108, 128,  // 2031-2040
    112, 104, 124, 116, 100, 120, 112,  97, 116, 108,  // 2041-2050
    128, 113, 104, 124, 109, 101, 120, 105, 125, 117,  // 2051-2060
    101, 121, 113, 105, 117, 109, 101, 121, 105, 125,  // 2061-2070
    110, 102, 121, 113,  98, 118, 109, 129, 114, 106,  // 2071-2080
    125, 110, 102, 122, 106,  98, 118, 110, 122, 114,  // 2081-2090
     99, 119, 110, 102, 115, 107, 126, 118, 103, 123,  // 2091-2100
    115, 100, 120, 112,  96, 116, 108, 128, 112, 104,  // 2101-2110
    124, 109, 100, 120, 105, 125, 116, 108, 121, 113,  // 2111-2120
    104, 124, 109, 101, 120, 105, 125, 117, 101, 121,  // 2121-2130
    113,  98, 117, 109, 129, 114, 105, 125, 110, 102,  // 2131-2140
    121, 113,  98, 118, 109, 129, 114, 106, 125, 110,  // 2141-2150
    102, 122, 106, 126, 118, 103, 122, 114,  99, 119,  // 2151-2160
    110, 102, 115, 107, 126, 111, 103, 123, 114,  99,  // 2161-2170
    119, 111, 130, 115, 107, 127, 111, 103, 123, 108,  // 2171-2180
     99, 119, 104, 124, 115, 100, 120, 112, 103, 116,  // 2181-2190
    108, 128, 119, 104, 124, 116, 100, 120, 112,  // 2191-2199
];

/// Calendar rules shared by Western-tradition calendars.
#[derive(Debug, Clone, Copy, Default)]
pub struct Western;

impl Western {
    /// Saturday and Sunday.
    pub fn is_weekend(weekday: Weekday) -> bool {
        matches!(weekday, Weekday::Saturday | Weekday::Sunday)
    }

    /// Day of year of Easter Monday.
    pub fn easter_monday(year: u16) -> u16 {
        match table_entry(&WESTERN_EASTER_MONDAY, year) {
            Some(doy) => doy,
            None => {
                log::debug!("western Easter for {year} is outside the table, computing it");
                gregorian_easter_monday(year)
            }
        }
    }
}

/// Calendar rules shared by Orthodox-tradition calendars.
#[derive(Debug, Clone, Copy, Default)]
pub struct Orthodox;

impl Orthodox {
    /// Saturday and Sunday.
    pub fn is_weekend(weekday: Weekday) -> bool {
        matches!(weekday, Weekday::Saturday | Weekday::Sunday)
    }

    /// Day of year of Easter Monday.
    pub fn easter_monday(year: u16) -> u16 {
        match table_entry(&ORTHODOX_EASTER_MONDAY, year) {
            Some(doy) => doy,
            None => {
                log::debug!("orthodox Easter for {year} is outside the table, computing it");
                julian_easter_monday(year)
            }
        }
    }
}

fn table_entry(table: &[u16; 299], year: u16) -> Option<u16> {
    if (FIRST_YEAR..=LAST_YEAR).contains(&year) {
        Some(table[usize::from(year - FIRST_YEAR)])
    } else {
        None
    }
}

/// Day of year of the first day of `month` minus one.
fn days_before_month(year: i32, month: i32) -> i32 {
    const OFFSET: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
    let leap = month > 2 && is_leap_year(year as u16);
    OFFSET[(month - 1) as usize] + i32::from(leap)
}

/// Oudin's algorithm for the Gregorian Easter Sunday, plus one day.
fn gregorian_easter_monday(year: u16) -> u16 {
    let y = i32::from(year);
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    (days_before_month(y, month) + day + 1) as u16
}

/// Meeus' Julian Easter Sunday moved onto the Gregorian calendar, plus one
/// day.
fn julian_easter_monday(year: u16) -> u16 {
    let y = i32::from(year);
    let a = y % 4;
    let b = y % 7;
    let c = y % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;
    // Julian calendar lag, valid from March 1st of a century year onward.
    let shift = y / 100 - y / 400 - 2;
    (days_before_month(y, month) + day + shift + 1) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_match_the_algorithms() {
        for year in FIRST_YEAR..=LAST_YEAR {
            assert_eq!(
                Western::easter_monday(year),
                gregorian_easter_monday(year),
                "western {year}"
            );
            assert_eq!(
                Orthodox::easter_monday(year),
                julian_easter_monday(year),
                "orthodox {year}"
            );
        }
    }

    #[test]
    fn known_easter_mondays() {
        // 2024-04-01 and 2024-05-06
        assert_eq!(Western::easter_monday(2024), 92);
        assert_eq!(Orthodox::easter_monday(2024), 127);
        // 2000-04-24 and 2000-05-01
        assert_eq!(Western::easter_monday(2000), 115);
        assert_eq!(Orthodox::easter_monday(2000), 122);
    }

    #[test]
    fn outside_the_table() {
        // 1899-04-03 and 1900-04-16
        assert_eq!(Western::easter_monday(1899), 93);
        assert_eq!(Western::easter_monday(1900), 106);
        // 1899-05-01 and 1900-04-23
        assert_eq!(Orthodox::easter_monday(1899), 121);
        assert_eq!(Orthodox::easter_monday(1900), 113);
    }

    #[test]
    fn weekends() {
        assert!(Western::is_weekend(Weekday::Saturday));
        assert!(Orthodox::is_weekend(Weekday::Sunday));
        assert!(!Western::is_weekend(Weekday::Friday));
    }
}
