//! Medication schedule presets.
//!
//! The reminder form offers a fixed menu of dosing frequencies. Each preset
//! carries the default reminder times the form is pre-filled with; the patient
//! can still edit every time afterwards, so the defaults only need to be
//! sensible, not clinical.

use chrono::NaiveTime;

use super::errors::RafiqError;
use super::result::Result;

/// One entry of the dosing-frequency menu.
///
/// Times are stored as zero-padded `"HH:MM"` strings, the format the reminder
/// form round-trips. [`MedicationPreset::default_times_parsed`] converts them
/// when scheduling needs real times of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedicationPreset {
    /// Stable machine-readable code stored with the reminder
    pub value: &'static str,
    /// Arabic label shown in the menu
    pub label: &'static str,
    /// Arabic sentence describing the schedule
    pub description: &'static str,
    /// Times the form is pre-filled with, as `"HH:MM"`
    pub default_times: &'static [&'static str],
    /// Arabic caption for the group of time inputs
    pub times_label: &'static str,
}

impl MedicationPreset {
    /// Parses [`default_times`](Self::default_times) into [`NaiveTime`]s.
    pub fn default_times_parsed(&self) -> Result<Vec<NaiveTime>> {
        self.default_times
            .iter()
            .map(|time| {
                NaiveTime::parse_from_str(time, "%H:%M").map_err(|e| {
                    RafiqError::Validation(format!("Invalid preset time {time}: {e}"))
                })
            })
            .collect()
    }
}

const PRESETS: &[MedicationPreset] = &[
    MedicationPreset {
        value: "once_daily",
        label: "مرة واحدة يومياً",
        description: "جرعة واحدة في الصباح",
        default_times: &["08:00"],
        times_label: "وقت الجرعة",
    },
    MedicationPreset {
        value: "twice_daily",
        label: "مرتان يومياً",
        description: "جرعة صباحاً وجرعة مساءً",
        default_times: &["08:00", "20:00"],
        times_label: "أوقات الجرعات",
    },
    MedicationPreset {
        value: "three_times_daily",
        label: "ثلاث مرات يومياً",
        description: "جرعة كل ثماني ساعات تقريباً",
        default_times: &["08:00", "14:00", "20:00"],
        times_label: "أوقات الجرعات",
    },
    MedicationPreset {
        value: "four_times_daily",
        label: "أربع مرات يومياً",
        description: "جرعة كل ست ساعات تقريباً خلال اليوم",
        default_times: &["08:00", "12:00", "16:00", "20:00"],
        times_label: "أوقات الجرعات",
    },
    MedicationPreset {
        value: "with_meals",
        label: "مع الوجبات",
        description: "مع وجبات الإفطار والغداء والعشاء",
        default_times: &["08:00", "13:00", "19:00"],
        times_label: "أوقات الوجبات",
    },
    MedicationPreset {
        value: "bedtime",
        label: "عند النوم",
        description: "جرعة واحدة قبل النوم",
        default_times: &["22:00"],
        times_label: "وقت الجرعة",
    },
    MedicationPreset {
        value: "weekly",
        label: "مرة أسبوعياً",
        description: "جرعة واحدة في الأسبوع",
        default_times: &["09:00"],
        times_label: "وقت الجرعة",
    },
];

/// The full preset menu, in display order.
pub fn presets() -> &'static [MedicationPreset] {
    PRESETS
}

/// Looks up a preset by its stored code.
pub fn preset_by_value(value: &str) -> Option<&'static MedicationPreset> {
    PRESETS.iter().find(|preset| preset.value == value)
}
