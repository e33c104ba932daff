//! CLDR cardinal plural rules, sample annotations removed.
//!
//! Each locale ends with an unconditional "other" rule.

use crate::rule::Category::{self, Few, Many, One, Other, Two, Zero};

type LocaleRules = (&'static str, &'static [(Category, &'static str)]);

/// Exact multiples of a million are "many" in several Romance languages.
const ROMANCE_MANY: &str = "e = 0 and i != 0 and i % 1000000 = 0 and v = 0 or e != 0..5";

const ONE_INTEGER: &[(Category, &str)] = &[(One, "i = 1 and v = 0"), (Other, "")];
const ONE_EXACT: &[(Category, &str)] = &[(One, "n = 1"), (Other, "")];
const ZERO_ONE_INTEGER: &[(Category, &str)] = &[(One, "i = 0 or n = 1"), (Other, "")];
const OTHER_ONLY: &[(Category, &str)] = &[(Other, "")];

const EAST_SLAVIC: &[(Category, &str)] = &[
    (One, "v = 0 and i % 10 = 1 and i % 100 != 11"),
    (Few, "v = 0 and i % 10 = 2..4 and i % 100 != 12..14"),
    (
        Many,
        "v = 0 and i % 10 = 0 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 11..14",
    ),
    (Other, ""),
];

const WEST_SLAVIC: &[(Category, &str)] = &[
    (One, "i = 1 and v = 0"),
    (Few, "i = 2..4 and v = 0"),
    (Many, "v != 0"),
    (Other, ""),
];

const SOUTH_SLAVIC: &[(Category, &str)] = &[
    (
        One,
        "v = 0 and i % 10 = 1 and i % 100 != 11 or f % 10 = 1 and f % 100 != 11",
    ),
    (
        Few,
        "v = 0 and i % 10 = 2..4 and i % 100 != 12..14 or f % 10 = 2..4 and f % 100 != 12..14",
    ),
    (Other, ""),
];

pub(super) const CARDINAL_RULES: &[LocaleRules] = &[
    ("af", ONE_EXACT),
    (
        "ar",
        &[
            (Zero, "n = 0"),
            (One, "n = 1"),
            (Two, "n = 2"),
            (Few, "n % 100 = 3..10"),
            (Many, "n % 100 = 11..99"),
            (Other, ""),
        ],
    ),
    (
        "be",
        &[
            (One, "n % 10 = 1 and n % 100 != 11"),
            (Few, "n % 10 = 2..4 and n % 100 != 12..14"),
            (Many, "n % 10 = 0 or n % 10 = 5..9 or n % 100 = 11..14"),
            (Other, ""),
        ],
    ),
    ("bg", ONE_EXACT),
    ("bn", ZERO_ONE_INTEGER),
    ("bs", SOUTH_SLAVIC),
    ("cs", WEST_SLAVIC),
    (
        "cy",
        &[
            (Zero, "n = 0"),
            (One, "n = 1"),
            (Two, "n = 2"),
            (Few, "n = 3"),
            (Many, "n = 6"),
            (Other, ""),
        ],
    ),
    ("da", &[(One, "n = 1 or t != 0 and i = 0,1"), (Other, "")]),
    ("de", ONE_INTEGER),
    ("el", ONE_EXACT),
    ("en", ONE_INTEGER),
    ("es", &[(One, "n = 1"), (Many, ROMANCE_MANY), (Other, "")]),
    ("et", ONE_INTEGER),
    ("fa", ZERO_ONE_INTEGER),
    ("fi", ONE_INTEGER),
    ("fr", &[(One, "i = 0,1"), (Many, ROMANCE_MANY), (Other, "")]),
    (
        "ga",
        &[
            (One, "n = 1"),
            (Two, "n = 2"),
            (Few, "n = 3..6"),
            (Many, "n = 7..10"),
            (Other, ""),
        ],
    ),
    (
        "he",
        &[
            (One, "i = 1 and v = 0 or i = 0 and v != 0"),
            (Two, "i = 2 and v = 0"),
            (Other, ""),
        ],
    ),
    ("hi", ZERO_ONE_INTEGER),
    ("hr", SOUTH_SLAVIC),
    ("hu", ONE_EXACT),
    ("id", OTHER_ONLY),
    ("it", &[(One, "i = 1 and v = 0"), (Many, ROMANCE_MANY), (Other, "")]),
    ("ja", OTHER_ONLY),
    ("ko", OTHER_ONLY),
    (
        "lt",
        &[
            (One, "n % 10 = 1 and n % 100 != 11..19"),
            (Few, "n % 10 = 2..9 and n % 100 != 11..19"),
            (Many, "f != 0"),
            (Other, ""),
        ],
    ),
    (
        "lv",
        &[
            (
                Zero,
                "n % 10 = 0 or n % 100 = 11..19 or v = 2 and f % 100 = 11..19",
            ),
            (
                One,
                "n % 10 = 1 and n % 100 != 11 or v = 2 and f % 10 = 1 and f % 100 != 11 or v != 2 and f % 10 = 1",
            ),
            (Other, ""),
        ],
    ),
    ("nb", ONE_EXACT),
    ("nl", ONE_INTEGER),
    (
        "pl",
        &[
            (One, "i = 1 and v = 0"),
            (Few, "v = 0 and i % 10 = 2..4 and i % 100 != 12..14"),
            (
                Many,
                "v = 0 and i != 1 and i % 10 = 0..1 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 12..14",
            ),
            (Other, ""),
        ],
    ),
    ("pt", &[(One, "i = 0..1"), (Many, ROMANCE_MANY), (Other, "")]),
    (
        "pt_PT",
        &[(One, "i = 1 and v = 0"), (Many, ROMANCE_MANY), (Other, "")],
    ),
    (
        "ro",
        &[
            (One, "i = 1 and v = 0"),
            (Few, "v != 0 or n = 0 or n % 100 = 2..19"),
            (Other, ""),
        ],
    ),
    ("ru", EAST_SLAVIC),
    ("sk", WEST_SLAVIC),
    (
        "sl",
        &[
            (One, "v = 0 and i % 100 = 1"),
            (Two, "v = 0 and i % 100 = 2"),
            (Few, "v = 0 and i % 100 = 3..4 or v != 0"),
            (Other, ""),
        ],
    ),
    ("sr", SOUTH_SLAVIC),
    ("sv", ONE_INTEGER),
    ("th", OTHER_ONLY),
    ("tr", ONE_EXACT),
    ("uk", EAST_SLAVIC),
    ("vi", OTHER_ONLY),
    ("zh", OTHER_ONLY),
];
