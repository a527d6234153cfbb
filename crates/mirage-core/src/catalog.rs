//! Built-in message datasets served by the mock API
//!
//! The record text exists in two wordings that shipped to different
//! deployments: fire-detection phrasing and generic object-detection
//! phrasing. Only the two result messages differ between them. Keeping the
//! text as data lets both wordings share one code path instead of two
//! drifting module copies.

use serde::{Deserialize, Serialize};

use crate::response::{MessageClass, MessageRecord};

/// Which wording the detection result messages use
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageWording {
    /// Generic object-detection phrasing
    #[default]
    Object,
    /// Fire-detection phrasing
    Fire,
}

/// The fixed message-type dataset published under `/message-types`
///
/// Order is part of the contract: health-success, health-warning, then the
/// positive and negative detection results.
pub fn message_types(wording: MessageWording) -> Vec<MessageRecord> {
    let (detected, not_detected) = match wording {
        MessageWording::Object => ("Объекты обнаружены", "Объекты не обнаружены"),
        MessageWording::Fire => ("Возгорание обнаружено", "Возгорание не обнаружено"),
    };

    vec![
        MessageRecord::new(
            MessageClass::HealthSuccess,
            "Модуль \"Классификатор целей\" работает корректно",
        ),
        MessageRecord::new(
            MessageClass::HealthWarning,
            "Модуль \"Классификатор целей\" отключен",
        ),
        MessageRecord::new(MessageClass::ResultFire, detected),
        MessageRecord::new(MessageClass::ResultNoFire, not_detected),
    ]
}
