// Known raw titles with their expected cleaned form
// WHY: Golden pairs pin the exact output of the full pipeline

/// Advanced-generation expectations; `None` means discarded
pub const ADVANCED_GOLDEN: &[(&str, Option<&str>)] = &[
    ("project manager", Some("Project Manager")),
    ("\"café\".", Some("Cafe")),
    ("Sales And Marketing", Some("Sales and Marketing")),
    ("Engineer/Manager", Some("Engineer / Manager")),
    ("QA/QC", Some("QA/QC")),
    ("Part iii", Some("Part III")),
    ("博士", Some("Doctor Of Philosophy")),
    ("博士后", Some("Postdoctoral Researcher")),
    ("副研", Some("Research Associate")),
    ("R&D", Some("Research and Development")),
    ("PI", Some("Primary Investigator")),
    ("\"Title\".", Some("Title")),
    ("Adj. prof, PI", Some("Adiunct Professor, Principal Investigator")),
    ("ceo", Some("Chief Executive Officer")),
    ("Director", Some("Director")),
    ("  VP of Sales &amp; Ops  ", Some("VP Of Sales & Ops")),
    ("Sales &amp Marketing", Some("Sales & Marketing")),
    ("head of it | board member", Some("Head Of IT, Board Member")),
    ("(Research Scientist)", Some("Research Scientist")),
    ("Lead \"\"Data\"\" Scientist", Some("Lead Data Scientist")),
    ("Analyst jane.doe@example.com", Some("Analyst")),
    ("mr", None),
    ("n/a", None),
    ("Unknown", None),
    ("123-456-7890", None),
    ("12345", None),
    ("x", None),
    ("- _ .", None),
    ("Директор", None),
    ("", None),
];

/// Baseline-generation expectations; `None` means discarded
pub const BASELINE_GOLDEN: &[(&str, Option<&str>)] = &[
    ("CTO", Some("CTO")),
    ("cto", Some("Cto")),
    ("CEO", Some("CEO")),
    ("phd student", Some("PhD Student")),
    (", - Director", Some("Director")),
    ("``Consultant", Some("Consultant")),
    ("Sales And Marketing", Some("Sales and Marketing")),
    ("mr", Some("Mr")),
    ("aaaa", None),
    ("n/a", None),
    ("---", None),
];
