//! Danish mobile number validator

/// Single-digit mobile prefixes.
const ONE_DIGIT_PREFIXES: [&str; 1] = ["2"];

/// Two-digit mobile prefixes.
const TWO_DIGIT_PREFIXES: [&str; 16] = [
    "30", "31", "40", "41", "42", "50", "51", "52", "53", "60", "61", "71", "81", "91", "92", "93",
];

/// Three-digit mobile prefixes, per the national numbering plan.
const THREE_DIGIT_PREFIXES: [&str; 77] = [
    "342", "344", "345", "346", "347", "348", "349", "356", "357", "359", "362", "365", "366",
    "389", "398", "431", "441", "462", "466", "468", "472", "474", "476", "478", "485", "486",
    "488", "489", "493", "494", "495", "496", "498", "499", "542", "543", "545", "551", "552",
    "556", "571", "572", "573", "574", "577", "579", "584", "586", "587", "589", "597", "598",
    "627", "629", "641", "649", "658", "662", "663", "664", "665", "667", "692", "693", "694",
    "697", "771", "772", "782", "783", "785", "786", "788", "789", "826", "827", "829",
];

/// Whether a phone number is a valid Danish mobile number: exactly eight
/// digits, starting with a known mobile prefix. Prefixes are matched
/// longest-first.
///
/// Unlike the other registration validators this returns a boolean; signup
/// flows use it to branch rather than abort.
#[must_use]
pub fn is_valid_danish_mobile(phone_number: Option<&str>) -> bool {
    let Some(phone) = phone_number else {
        return false;
    };

    if phone.len() != 8 || !phone.bytes().all(|byte| byte.is_ascii_digit()) {
        return false;
    }

    phone
        .get(..3)
        .is_some_and(|prefix| THREE_DIGIT_PREFIXES.contains(&prefix))
        || phone
            .get(..2)
            .is_some_and(|prefix| TWO_DIGIT_PREFIXES.contains(&prefix))
        || phone
            .get(..1)
            .is_some_and(|prefix| ONE_DIGIT_PREFIXES.contains(&prefix))
}
