//! Tariff catalog: contract variant code to label, monthly fee and lesson length.

/// A single tariff plan offered on the enrollment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tariff {
    pub code: &'static str,
    pub label: &'static str,
    pub monthly_fee_euros: u32,
    pub lesson_minutes: u32,
}

const TARIFFS: [Tariff; 4] = [
    Tariff {
        code: "1",
        label: "30 Minuten Einzelunterricht",
        monthly_fee_euros: 88,
        lesson_minutes: 30,
    },
    Tariff {
        code: "2",
        label: "45 Minuten Einzelunterricht",
        monthly_fee_euros: 111,
        lesson_minutes: 45,
    },
    Tariff {
        code: "3",
        label: "60 Minuten Gruppenunterricht",
        monthly_fee_euros: 66,
        lesson_minutes: 60,
    },
    Tariff {
        code: "4",
        label: "45 Minuten Einzelunterricht",
        monthly_fee_euros: 111,
        lesson_minutes: 45,
    },
];

/// Look up the tariff for a contract variant code.
///
/// Unknown codes resolve to `None`; callers treat that as an empty label
/// rather than an error.
pub fn resolve(variant_code: &str) -> Option<&'static Tariff> {
    TARIFFS.iter().find(|tariff| tariff.code == variant_code)
}

/// Label shown in the document title, empty for unknown variants.
pub fn label_for(variant_code: &str) -> &'static str {
    resolve(variant_code).map(|tariff| tariff.label).unwrap_or("")
}

/// All known tariffs in code order.
pub fn all() -> &'static [Tariff] {
    &TARIFFS
}
