//! Sheet-level keyword heuristics: which sheets carry data, which coarse
//! category a sheet belongs to, and which emission scope a record falls in.
//!
//! The keyword tables are hand-tuned against the published multi-year
//! dataset and kept as configuration data rather than inline logic, so new
//! editions with drifted wording only need a table change.

/// Sheet-name keywords marking administrative (non-data) sheets.
///
/// Precision over recall: skipping a real data sheet loses records for good,
/// while a sheet wrongly let through is cheaply rejected later when neither
/// parser finds anything in it.
const EXCLUDED_SHEET_KEYWORDS: &[&str] = &[
    "introduction",
    "contents",
    "notes",
    "methodology",
    "summary",
    "cover",
    "what's new",
    "update",
    "data source",
    "how to",
    "index",
];

/// Ordered sheet-name keyword rules for category assignment. First match wins.
const CATEGORY_RULES: &[(&[&str], &str)] = &[
    (&["fuel", "bioenergy"], "Fuels"),
    (&["electricity"], "Electricity"),
    (&["heat", "steam"], "Heat & Steam"),
    (&["vehicle", "transport"], "Transport"),
    (&["travel", "air", "sea"], "Business Travel"),
    (&["freight"], "Freight"),
    (&["water"], "Water"),
    (&["waste"], "Waste"),
    (&["material"], "Materials"),
    (&["refrigerant"], "Refrigerants"),
    (&["hotel"], "Hotels"),
    (&["homeworking"], "Homeworking"),
];

/// Whether a sheet is a candidate data sheet, judged by its name alone
pub fn is_data_sheet(sheet_name: &str) -> bool {
    let name = sheet_name.to_lowercase();
    !EXCLUDED_SHEET_KEYWORDS
        .iter()
        .any(|keyword| name.contains(keyword))
}

/// Coarse category label for a sheet, from its name
pub fn categorize_sheet(sheet_name: &str) -> &'static str {
    let name = sheet_name.to_lowercase();
    for (keywords, category) in CATEGORY_RULES {
        if keywords.iter().any(|keyword| name.contains(keyword)) {
            return category;
        }
    }
    "Other"
}

/// Emission scope (1, 2 or 3) from sheet name and activity text.
///
/// The fuel/gas/refrigerant checks must precede the electricity and
/// heat/steam ones: "gas" appears in both direct-combustion and indirect
/// contexts, and "electricity" is the discriminator between them.
pub fn classify_scope(sheet_name: &str, activity: &str) -> u8 {
    let text = format!("{} {}", sheet_name, activity).to_lowercase();

    if text.contains("fuel") && !text.contains("electricity") {
        1
    } else if text.contains("gas") && !text.contains("electricity") {
        1
    } else if text.contains("refrigerant") {
        1
    } else if text.contains("electricity") {
        2
    } else if text.contains("heat") || text.contains("steam") {
        2
    } else {
        3
    }
}
