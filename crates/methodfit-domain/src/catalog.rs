//! The static method catalog

use crate::method::{HormoneProfile, MethodId};

/// A catalog entry for one contraceptive method
///
/// Immutable for the lifetime of the process. Only `id` and
/// `hormone_profile` participate in eligibility decisions; every other field
/// is descriptive content for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Method {
    /// Identifier
    pub id: MethodId,

    /// Full display name
    pub name: &'static str,

    /// Hormonal composition
    pub hormone_profile: HormoneProfile,

    /// Short usage cadence label
    pub tagline: &'static str,

    /// Free-form usage note
    pub notes: &'static str,

    /// Efficacy with perfect use
    pub efficacy_perfect_use: &'static str,

    /// Efficacy with typical use
    pub efficacy_typical_use: &'static str,

    /// How often the method must be administered or replaced
    pub frequency: &'static str,

    /// How the method prevents pregnancy
    pub mechanism: &'static str,

    /// Advantages
    pub pros: &'static [&'static str],

    /// Drawbacks
    pub cons: &'static [&'static str],

    /// Conditions under which the method should be avoided
    pub should_avoid: &'static [&'static str],

    /// Possible side effects
    pub side_effects: &'static [&'static str],

    /// Patient situations the method suits best
    pub best_for: &'static [&'static str],
}

/// Read-only access to the embedded method table
///
/// The table is compiled in; there is no load step and no versioning. Lookup
/// is total because [`MethodId`] is a closed enumeration.
pub struct Catalog;

impl Catalog {
    /// Look up a method by id
    pub fn get(id: MethodId) -> &'static Method {
        &METHODS[id as usize]
    }

    /// Iterate over all methods in catalog order
    pub fn iter() -> impl Iterator<Item = &'static Method> {
        METHODS.iter()
    }

    /// Number of methods in the catalog
    pub fn len() -> usize {
        METHODS.len()
    }
}

static METHODS: [Method; 7] = [
    Method {
        id: MethodId::CombinedPill,
        name: "Pill (Combined Oral Contraceptives (COC))",
        hormone_profile: HormoneProfile::EstrogenProgestin,
        tagline: "Daily",
        notes: "Must be taken daily at a consistent time.",
        efficacy_perfect_use: "99%",
        efficacy_typical_use: "93%",
        frequency: "Daily",
        mechanism: "Stopping ovulation, thickening cervical mucus, and thinning the uterine lining",
        pros: &[
            "Provides flexibility in managing or suppressing periods",
            "Fertility typically returns quickly after stopping",
            "Can lead to lighter, more regular cycles",
            "Helps decrease menstrual cramps",
        ],
        cons: &[
            "Daily adherence required",
            "Efficacy decreases when not taken regularly at the set time",
        ],
        should_avoid: &[
            "Estrogen-related contraindications",
            "History of Breast Cancer",
        ],
        side_effects: &[
            "Headaches",
            "Nausea",
            "Sore breasts",
            "Bloating",
            "Spotting or bleeding between periods",
        ],
        best_for: &[
            "Want cycle control",
            "Prefer daily routines",
            "Can reliably take a daily pill",
        ],
    },
    Method {
        id: MethodId::ProgestinPill,
        name: "Pill (Progestin-only)",
        hormone_profile: HormoneProfile::Progestin,
        tagline: "Daily",
        notes: "",
        efficacy_perfect_use: "99%",
        efficacy_typical_use: "93%",
        frequency: "Daily",
        mechanism: "Thickens cervical mucus and stopping ovulation",
        pros: &[
            "Safe to use while breastfeeding",
            "Estrogen-free option",
        ],
        cons: &[
            "Requires very strict daily timing for effectiveness",
            "More sensitive to timing errors, which may reduce real-world effectiveness",
            "Not recommended for patients with a history of breast cancer",
        ],
        should_avoid: &[
            "History of breast cancer",
            "Cannot commit to consistent, same-time daily dosing",
            "taking medications that interfere with progestin effectiveness",
        ],
        side_effects: &[
            "Breast tenderness.",
            "Nausea.",
            "Headaches.",
            "Weight changes.",
            "Acne.",
            "Increased hair growth",
        ],
        best_for: &[
            "Prefer or require an estrogen-free contraceptive",
            "Are breastfeeding",
            "Can reliably take the pill at the same time every day",
        ],
    },
    Method {
        id: MethodId::Patch,
        name: "Patch",
        hormone_profile: HormoneProfile::EstrogenProgestin,
        tagline: "Weekly",
        notes: "",
        efficacy_perfect_use: "99%",
        efficacy_typical_use: "94%",
        frequency: "Weekly",
        mechanism: "Skin absorbs hormones which prevent ovulation",
        pros: &[
            "Only needs to be changed once a week, making it more convenient than daily methods",
            "Provides consistent hormone dosing",
            "May improve acne",
            "May reduce menstrual cramps and make periods more regular",
        ],
        cons: &[
            "May cause mild skin irritation at the patch site",
            "Visible on the skin, which some patients may not prefer",
            "Slightly less effective in patients where BMI >= 30 / LBS > 198",
            "Must be replaced on the same day each week to maintain effectiveness",
        ],
        should_avoid: &[
            "Estrogen-related contraindications",
            "History of Breast Cancer",
        ],
        side_effects: &[
            "Nausea",
            "Irregular bleeding",
            "Sore breasts",
            "Headache",
            "Mood changes",
        ],
        best_for: &[
            "Want a low-maintenance method that doesn't require daily action",
            "Prefer a method with consistent, steady hormone delivery",
        ],
    },
    Method {
        id: MethodId::Nuvaring,
        name: "Vaginal Ring (NuvaRing)",
        hormone_profile: HormoneProfile::EstrogenProgestin,
        tagline: "Monthly",
        notes: "",
        efficacy_perfect_use: "99%",
        efficacy_typical_use: "98%",
        frequency: "Monthly",
        mechanism: "Delivers hormones vaginally to block ovulation and thicken cervical mucus",
        pros: &[
            "Only replaced once per month",
            "Generally covered by most private insurance",
            "Generic versions available (cheaper)",
        ],
        cons: &[
            "Possible vaginal discomfort",
            "Mood changes (less commonly reported with the Annovera ring)",
        ],
        should_avoid: &[
            "Estrogen-related contraindications",
            "History of Breast Cancer",
        ],
        side_effects: &[
            "Breast tenderness",
            "Headaches",
            "Weight gain",
            "Nausea and vomiting",
            "Depression or mood changes",
            "Spotting",
            "Increased vaginal discharge",
            "Acne",
            "Decreased sex drive",
        ],
        best_for: &[
            "Want a low-maintenance hormonal method (monthly instead of daily/weekly)",
            "Prefer a discreet, user-controlled option",
            "Are comfortable inserting and removing the ring themselves",
        ],
    },
    Method {
        id: MethodId::Annovera,
        name: "Vaginal Ring (Annovera)",
        hormone_profile: HormoneProfile::EstrogenProgestin,
        tagline: "Monthly/Yearly",
        notes: "",
        efficacy_perfect_use: "99%",
        efficacy_typical_use: "97%",
        frequency: "Monthly/Yearly",
        mechanism: "Delivers hormones vaginally to block ovulation and thicken cervical mucus",
        pros: &[
            "Use the same ring for up to 13 menstrual cycles (~1 year)",
        ],
        cons: &[
            "Possible vaginal discomfort",
            "More expensive, as a generic version is not yet available",
        ],
        should_avoid: &[
            "Estrogen-related contraindications",
            "History of Breast Cancer",
        ],
        side_effects: &[
            "Breast tenderness",
            "Headaches",
            "Weight gain",
            "Nausea and vomiting",
            "Depression or mood changes",
            "Spotting",
            "Increased vaginal discharge",
            "Acne",
            "Decreased sex drive",
        ],
        best_for: &[
            "Prefer fewer pharmacy visits (once a year)",
            "Prefer a method that's more environmentally friendly (one device per year)",
            "Prefer a discreet, user-controlled option",
            "Are comfortable inserting and removing the ring themselves",
        ],
    },
    Method {
        id: MethodId::Shot,
        name: "Birth Control Shot (Depo-subQ Provera 104)",
        hormone_profile: HormoneProfile::Progestin,
        tagline: "12 weeks / 3 months",
        notes: "",
        efficacy_perfect_use: "99%",
        efficacy_typical_use: "96%",
        frequency: "12 weeks / 3 months",
        mechanism: "Prevents ovulation, thickens cervical mucus, and thins the uterine lining",
        pros: &[
            "Highly effective when injections are on schedule",
            "It doesn't interfere with sexual activity",
            "Estrogen-free option",
        ],
        cons: &[
            "Delay in getting pregnant (10 months on average) to conceive after your last injection",
            "Potential for weight gain",
        ],
        should_avoid: &[
            "History of breast cancer",
            "Unexplained vaginal bleeding",
            "Severe liver disease",
        ],
        side_effects: &[
            "Bloating",
            "Bone density loss",
            "Depression",
            "Headaches and dizziness",
            "Irregular menstrual periods or no periods at all",
            "Nervousness",
            "Weight gain",
        ],
        best_for: &[
            "Want a long-acting method without daily or weekly maintenance",
            "Prefer an estrogen-free hormonal option",
            "Do not plan to become pregnant immediately after discontinuation",
        ],
    },
    Method {
        id: MethodId::Diaphragm,
        name: "Vaginal Diaphragm",
        hormone_profile: HormoneProfile::NonHormonal,
        tagline: "~2 years",
        notes: "",
        efficacy_perfect_use: "94%",
        efficacy_typical_use: "87%",
        frequency: "~2 years",
        mechanism: "prevent pregnancy by blocking sperm from reaching uterus",
        pros: &[
            "Not hormonal",
            "Reusable",
            "No systemic side effects",
            "Low maintenance, only used when sexually active",
        ],
        cons: &[
            "Lower efficacy compared to hormonal methods",
            "Some users may experience discomfort during intercourse",
            "Can become dislodged during sexual activity",
            "Increase risk of urinary tract infections",
        ],
        should_avoid: &[
            "History of frequent UTIs",
            "Allergies to silicone or spermicide",
            "Anatomical issues that make proper placement difficult",
        ],
        side_effects: &[
            "Vaginal irritation from spermicide",
            "Increased UTI risk",
        ],
        best_for: &[
            "Want a non-hormonal, on-demand contraceptive method",
            "Do not want systemic side effects",
            "Are comfortable inserting and removing the diaphragm",
            "Understand and accept the lower typical-use efficacy",
        ],
    },
];
