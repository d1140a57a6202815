// crates/core/src/code_points.rs
//! Hand-maintained code-point tables that refine the generic extended/other
//! classification. Every table is sorted so lookups can binary-search.

use crate::category::Category;

/// `$` sits inside printable ASCII but is reported as currency.
pub const DOLLAR_SIGN: u32 = 36;

/// ¢ £ ¤ ¥ €
pub const CURRENCY: &[u32] = &[162, 163, 164, 165, 8364];

/// µ, ß and the lower-case Latin-1 letters (÷ excluded).
pub const LATIN_LOWER: &[u32] = &[
    181, 223, 224, 225, 226, 227, 228, 229, 230, 231, 232, 233, 234, 235, 236, 237, 238, 239, 240,
    241, 242, 243, 244, 245, 246, 248, 249, 250, 251, 252, 253, 254, 255,
];

/// Upper-case Latin-1 letters (× excluded).
pub const LATIN_UPPER: &[u32] = &[
    192, 193, 194, 195, 196, 197, 198, 199, 200, 201, 202, 203, 204, 205, 206, 207, 208, 209, 210,
    211, 212, 213, 214, 216, 217, 218, 219, 220, 221, 222,
];

/// ¬ ± × ÷
pub const MATH: &[u32] = &[172, 177, 215, 247];

/// Ideographs with a numeric value that are not in a Unicode number
/// category: 一 二 三 十 百 千 万 億 and their financial and compatibility forms.
pub const IDEOGRAPHIC_NUMERALS: &[u32] = &[
    0x3405, 0x3483, 0x382A, 0x3B4D, 0x4E00, 0x4E03, 0x4E07, 0x4E09,
    0x4E5D, 0x4E8C, 0x4E94, 0x4E96, 0x4EBF, 0x4EC0, 0x4EDF, 0x4EE8,
    0x4F0D, 0x4F70, 0x5104, 0x5146, 0x5169, 0x516B, 0x516D, 0x5341,
    0x5343, 0x5344, 0x5345, 0x534C, 0x53C1, 0x53C2, 0x53C3, 0x53C4,
    0x56DB, 0x58F1, 0x58F9, 0x5E7A, 0x5EFE, 0x5EFF, 0x5F0C, 0x5F0D,
    0x5F0E, 0x5F10, 0x62FE, 0x634C, 0x67D2, 0x6F06, 0x7396, 0x767E,
    0x8086, 0x842C, 0x8CAE, 0x8CB3, 0x8D30, 0x9621, 0x9646, 0x964C,
    0x9678, 0x96F6, 0xF96B, 0xF973, 0xF978, 0xF9B2, 0xF9D1, 0xF9D3,
    0xF9FD, 0x20001, 0x20064, 0x200E2, 0x20121, 0x2092A, 0x20983, 0x2098C,
    0x2099C, 0x20AEA, 0x20AFD, 0x20B19, 0x22390, 0x22998, 0x23B1B, 0x2626D,
    0x2F890,
];

/// Whether `ch` has a numeric value: any Unicode number category, or one of
/// the [`IDEOGRAPHIC_NUMERALS`].
#[must_use]
pub fn is_numeral(ch: char) -> bool {
    ch.is_numeric() || IDEOGRAPHIC_NUMERALS.binary_search(&u32::from(ch)).is_ok()
}

/// Tables in lookup order; the first table containing a code point wins.
pub static CURATED: &[(&[u32], Category)] = &[
    (CURRENCY, Category::Currency),
    (LATIN_LOWER, Category::LatinLower),
    (LATIN_UPPER, Category::LatinUpper),
    (MATH, Category::Math),
];

/// Category of a code point listed in one of the curated tables.
#[must_use]
pub fn lookup(code_point: u32) -> Option<Category> {
    CURATED
        .iter()
        .find(|(table, _)| table.binary_search(&code_point).is_ok())
        .map(|&(_, category)| category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted_and_disjoint() {
        for (table, _) in CURATED {
            assert!(table.windows(2).all(|w| w[0] < w[1]));
        }
        for (i, (left, _)) in CURATED.iter().enumerate() {
            for (right, _) in &CURATED[i + 1..] {
                assert!(left.iter().all(|cp| !right.contains(cp)));
            }
        }
    }

    #[test]
    fn lookup_hits_each_table() {
        assert_eq!(lookup(8364), Some(Category::Currency));
        assert_eq!(lookup(233), Some(Category::LatinLower));
        assert_eq!(lookup(192), Some(Category::LatinUpper));
        assert_eq!(lookup(215), Some(Category::Math));
    }

    #[test]
    fn lookup_boundaries() {
        assert_eq!(lookup(DOLLAR_SIGN), None);
        assert_eq!(lookup(160), None);
        assert_eq!(lookup(216), Some(Category::LatinUpper));
        assert_eq!(lookup(247), Some(Category::Math));
        assert_eq!(lookup(0x1F600), None);
    }

    #[test]
    fn ideographic_numerals() {
        assert!(IDEOGRAPHIC_NUMERALS.windows(2).all(|w| w[0] < w[1]));
        for ch in ['一', '二', '三', '十', '百', '千', '万', '億', '零', '壱'] {
            assert!(is_numeral(ch), "{ch:?}");
        }
        assert!(is_numeral('7'));
        assert!(is_numeral('Ⅻ'));
        assert!(!is_numeral('漢'));
        assert!(!is_numeral('a'));
        // not in any curated table
        assert_eq!(lookup(0x4E00), None);
    }
}
