// WHY: Fixed reference data for the title pipeline, built once per process
// Lookups are exact whole-string matches on the trimmed candidate

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use super::Generation;

/// Junk titles recognised by the first pipeline generation
pub const BASELINE_JUNK_TITLES: &[&str] = &[
    "job", "job title",
    "test", "n/a", "none", "unknown", "???", "---", "-", "_", "zzz", "vmeinupi", "vivvixza",
    "vivvviio", "vkodhyqc", "aaa", "aaaa", "aaaaa", "aaaaaa", "aaaaaaaab", "aaaaaaaaab",
    "abc", "youknowwho", "who?", "no", "no response", "no title", "nobody", "no job title",
    "nil", "na",
];

/// Additional junk titles recognised by the advanced generation
/// These are checked together with `BASELINE_JUNK_TITLES`
pub const ADVANCED_EXTRA_JUNK_TITLES: &[&str] = &[
    "mr", "mrs", "ms", "miss", "mx", "sir", "madam", "who",
    "null", "nan", "n.a", "not applicable", "not available",
    "tbd", "tba", "tbc", "xxx", "xx", "asdf", "asdfgh", "qwerty", "blah",
    "prefer not to say", "none of the above", "no answer", "not provided",
    "unknown title", "test test",
];

/// Exact CJK job-title terms and their English gloss
/// Glosses are lowercase; word casing is applied later in the pipeline
pub const TRANSLATIONS: &[(&str, &str)] = &[
    ("博士", "doctor of philosophy"),
    ("博士后", "postdoctoral researcher"),
    ("博士生", "doctoral student"),
    ("博士研究生", "doctoral student"),
    ("硕士", "master's degree holder"),
    ("硕士生", "master's student"),
    ("研究生", "graduate student"),
    ("本科生", "undergraduate student"),
    ("学生", "student"),
    ("教授", "professor"),
    ("副教授", "associate professor"),
    ("助理教授", "assistant professor"),
    ("讲师", "lecturer"),
    ("助教", "teaching assistant"),
    ("研究员", "research fellow"),
    ("副研究员", "associate research fellow"),
    ("副研", "research associate"),
    ("助理研究员", "assistant research fellow"),
    ("博导", "doctoral supervisor"),
    ("院长", "dean"),
    ("副院长", "vice dean"),
    ("所长", "institute director"),
    ("主任", "director"),
    ("副主任", "deputy director"),
    ("科研人员", "researcher"),
    ("工程师", "engineer"),
    ("高级工程师", "senior engineer"),
    ("技术员", "technician"),
    ("医生", "physician"),
    ("医师", "physician"),
    ("主治医师", "attending physician"),
    ("主任医师", "chief physician"),
    ("护士", "nurse"),
    ("药师", "pharmacist"),
    ("经理", "manager"),
    ("总经理", "general manager"),
    ("项目经理", "project manager"),
    ("总监", "director"),
    ("董事长", "chairman"),
    ("首席执行官", "chief executive officer"),
    ("实验室主任", "laboratory director"),
    ("实验员", "laboratory technician"),
    ("教授（博导）", "professor"),
    ("部長", "department manager"),
    ("課長", "section manager"),
    ("准教授", "associate professor"),
    ("研究員", "researcher"),
    ("교수", "professor"),
    ("연구원", "researcher"),
];

/// Lowercase abbreviations and their expansion
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("ceo", "chief executive officer"),
    ("cfo", "chief financial officer"),
    ("cto", "chief technology officer"),
    ("coo", "chief operating officer"),
    ("cio", "chief information officer"),
    ("cmo", "chief medical officer"),
    ("cso", "chief scientific officer"),
    ("vp", "vice president"),
    ("svp", "senior vice president"),
    ("evp", "executive vice president"),
    ("avp", "assistant vice president"),
    ("gm", "general manager"),
    ("md", "medical doctor"),
    ("phd", "doctor of philosophy"),
    ("ph.d", "doctor of philosophy"),
    ("pi", "primary investigator"),
    ("co-pi", "co-principal investigator"),
    ("postdoc", "postdoctoral researcher"),
    ("post-doc", "postdoctoral researcher"),
    ("ra", "research assistant"),
    ("rn", "registered nurse"),
    ("np", "nurse practitioner"),
    ("pa", "physician assistant"),
    ("r&d", "research and development"),
    ("hr", "human resources"),
    ("qa", "quality assurance"),
    ("asst. prof", "assistant professor"),
    ("assoc. prof", "associate professor"),
    ("adj. prof", "adjunct professor"),
    ("adj. prof, pi", "adiunct professor, principal investigator"),
    ("prof", "professor"),
    ("dir", "director"),
    ("mgr", "manager"),
    ("sr. mgr", "senior manager"),
];

/// Tokens rendered fully uppercase by word casing
pub const PRESERVE_CAPS: &[&str] = &[
    "IS", "IT", "IR", "IP", "PI", "PM", "PR", "PhD", "VP", "AIO", "AIOS", "APHL",
];

/// Additional acronyms kept uppercase by the advanced generation
pub const ADVANCED_EXTRA_PRESERVE_CAPS: &[&str] = &[
    "CEO", "CFO", "CTO", "COO", "CIO", "CMO", "CSO", "SVP", "EVP", "AVP",
    "HR", "QA", "QC", "UX", "UI", "R&D",
];

static BASELINE_JUNK: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BASELINE_JUNK_TITLES.iter().copied().collect());

static ADVANCED_JUNK: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    BASELINE_JUNK_TITLES
        .iter()
        .chain(ADVANCED_EXTRA_JUNK_TITLES)
        .copied()
        .collect()
});

static TRANSLATION_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| TRANSLATIONS.iter().copied().collect());

static ABBREVIATION_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ABBREVIATIONS.iter().copied().collect());

// Stored uppercased so that "PhD" compares against `word.to_uppercase()`
static BASELINE_PRESERVE_CAPS: LazyLock<HashSet<String>> =
    LazyLock::new(|| PRESERVE_CAPS.iter().map(|t| t.to_uppercase()).collect());

static ADVANCED_PRESERVE_CAPS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    PRESERVE_CAPS
        .iter()
        .chain(ADVANCED_EXTRA_PRESERVE_CAPS)
        .map(|t| t.to_uppercase())
        .collect()
});

/// Check whether a trimmed candidate is a known junk title for the given generation
pub fn is_junk(generation: Generation, candidate: &str) -> bool {
    let lowered = candidate.to_lowercase();
    match generation {
        Generation::Baseline => BASELINE_JUNK.contains(lowered.as_str()),
        Generation::Advanced => ADVANCED_JUNK.contains(lowered.as_str()),
    }
}

/// English gloss for an exact translation-table match
pub fn translate(candidate: &str) -> Option<&'static str> {
    TRANSLATION_MAP.get(candidate.to_lowercase().as_str()).copied()
}

/// Expansion for an exact abbreviation match (case-insensitive)
pub fn expand_abbreviation(candidate: &str) -> Option<&'static str> {
    ABBREVIATION_MAP.get(candidate.to_lowercase().as_str()).copied()
}

/// Whether the uppercased word is an acronym that keeps its capitals
pub fn preserves_caps(generation: Generation, word: &str) -> bool {
    let upper = word.to_uppercase();
    match generation {
        Generation::Baseline => BASELINE_PRESERVE_CAPS.contains(&upper),
        Generation::Advanced => ADVANCED_PRESERVE_CAPS.contains(&upper),
    }
}
