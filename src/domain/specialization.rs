//! Display labels for medical specialization codes.
//!
//! Doctor profiles store a machine-readable specialization code. The UI shows
//! the Arabic label from a fixed table; codes the table does not know are
//! shown verbatim so a newly introduced specialty degrades readably instead of
//! disappearing.

/// Label shown when a profile has no specialization recorded.
pub const UNSPECIFIED_SPECIALIZATION: &str = "غير محدد";

/// Recognized specialization codes and their display labels, in the order the
/// profile form presents them.
pub const SPECIALIZATIONS: &[(&str, &str)] = &[
    ("general_practice", "الطب العام"),
    ("family_medicine", "طب الأسرة"),
    ("internal_medicine", "الباطنة"),
    ("cardiology", "القلب"),
    ("dermatology", "الجلدية"),
    ("endocrinology", "الغدد الصماء"),
    ("gastroenterology", "الجهاز الهضمي"),
    ("hematology", "أمراض الدم"),
    ("neurology", "المخ والأعصاب"),
    ("oncology", "الأورام"),
    ("ophthalmology", "العيون"),
    ("orthopedics", "العظام"),
    ("otolaryngology", "الأنف والأذن والحنجرة"),
    ("pediatrics", "الأطفال"),
    ("psychiatry", "الطب النفسي"),
    ("pulmonology", "الصدر"),
    ("radiology", "الأشعة"),
    ("rheumatology", "الروماتيزم"),
    ("nephrology", "الكلى"),
    ("urology", "المسالك البولية"),
    ("obstetrics_gynecology", "النساء والتوليد"),
    ("general_surgery", "الجراحة العامة"),
    ("plastic_surgery", "جراحة التجميل"),
    ("anesthesiology", "التخدير"),
    ("emergency_medicine", "الطوارئ"),
    ("infectious_diseases", "الأمراض المعدية"),
    ("allergy_immunology", "الحساسية والمناعة"),
    ("geriatrics", "طب المسنين"),
    ("dentistry", "الأسنان"),
    ("physical_therapy", "العلاج الطبيعي"),
    ("nutrition", "التغذية"),
];

/// Resolves the display label for a specialization code.
///
/// Total over all input: blank input yields [`UNSPECIFIED_SPECIALIZATION`],
/// unknown codes are returned unchanged.
pub fn specialization_label(code: &str) -> &str {
    if code.trim().is_empty() {
        return UNSPECIFIED_SPECIALIZATION;
    }
    SPECIALIZATIONS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}
