mod amount_field;
mod percentage;
mod tip_record;

pub use amount_field::AmountField;
pub use percentage::{PercentageChoice, PresetRate, UnknownPresetError};
pub use tip_record::TipRecord;
