use std::sync::LazyLock;

use regex::Regex;

// ============================================================================
// Category pattern table
// ============================================================================

/// One semantic field category.
///
/// `label` is part of the public vocabulary (results and traces carry it) and
/// must not be renamed. `data_keys` are the normalized data-key substrings
/// that bind an extracted value to the category; `pattern` is what the
/// field's own text has to match.
pub struct FieldCategory {
    pub label: &'static str,
    pub data_keys: &'static [&'static str],
    pub pattern: Regex,
}

/// The fixed category table, compiled once. Ordered specific-first so the
/// narrow name categories are listed before the generic one; scoring takes
/// the maximum, so the order is cosmetic rather than load-bearing.
pub fn categories() -> &'static [FieldCategory] {
    static TABLE: LazyLock<Vec<FieldCategory>> = LazyLock::new(build_table);
    &TABLE
}

fn build_table() -> Vec<FieldCategory> {
    vec![
        category(
            "lastName",
            &["lastname", "surname", "familyname"],
            r"(last.?name|surname|family.?name|lname)",
        ),
        category(
            "fatherName",
            &["father", "guardian"],
            r"(father.?s?.?name|father|guardian)",
        ),
        category(
            "name",
            &["name"],
            r"(full.?name|first.?name|given.?name|fname|applicant.?name|\bname\b)",
        ),
        category("email", &["email"], r"e.?mail"),
        category(
            "phone",
            &["phone", "mobile", "cell"],
            r"(phone|mobile|cell|telephone|contact.?num|\btel\b)",
        ),
        category(
            "address",
            &["address", "addr"],
            r"(address|street|\baddr\b)",
        ),
        category("city", &["city", "town"], r"(city|town|district)"),
        category(
            "cnic",
            &["cnic", "idnumber", "nationalid", "nic"],
            r"(cnic|national.?id|id.?card|id.?number|\bnic\b)",
        ),
        category("gender", &["gender", "sex"], r"(gender|\bsex\b)"),
        category(
            "dateOfBirth",
            &["dateofbirth", "birthdate", "dob"],
            r"(date.?of.?birth|birth.?date|\bdob\b)",
        ),
    ]
}

fn category(
    label: &'static str,
    data_keys: &'static [&'static str],
    pattern: &str,
) -> FieldCategory {
    FieldCategory {
        label,
        data_keys,
        // Table patterns are constants; a typo here is a programming error.
        pattern: Regex::new(pattern).unwrap(),
    }
}

/// Lowercase a data key and strip separators, so `date_of_birth`,
/// `dateOfBirth`, and `date-of-birth` all normalize to `dateofbirth`.
pub fn normalize_key(data_key: &str) -> String {
    data_key
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}
